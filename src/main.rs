use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dashboard_shield::{
    api::create_router, config::DashboardBackend, domain::DeploymentMode, ApplicationBuilder,
    Config,
};

#[derive(Parser)]
#[command(name = "dashboard-shield")]
#[command(about = "Dashboard API with sanitized fault responses", long_about = None)]
struct Cli {
    /// Deployment mode: development or production (overrides APP_ENVIRONMENT)
    #[arg(short, long)]
    environment: Option<DeploymentMode>,
    /// Listen address (overrides LISTEN_ADDR)
    #[arg(short, long)]
    listen: Option<String>,
    /// Dashboard backend: file, memory or unavailable (overrides DASHBOARD_BACKEND)
    #[arg(short, long)]
    backend: Option<DashboardBackend>,
    /// TOML message catalog (overrides DISCLOSURE_MESSAGES)
    #[arg(short, long)]
    messages: Option<PathBuf>,
}

fn init_tracing(mode: DeploymentMode) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    match mode {
        DeploymentMode::Production => builder.json().init(),
        DeploymentMode::Development => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env();
    if let Some(mode) = cli.environment {
        config.deployment_mode = mode;
    }
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(backend) = cli.backend {
        config.dashboard_backend = backend;
    }
    if let Some(messages) = cli.messages {
        config.messages_path = Some(messages);
    }

    init_tracing(config.deployment_mode);
    info!(mode = %config.deployment_mode, "Starting dashboard service");

    config.validate().map_err(|e| anyhow!(e))?;
    info!("Configuration loaded and validated");

    let listen_addr = config.listen_addr.clone();
    let state = ApplicationBuilder::new(config)
        .with_storage()
        .await
        .map_err(|e| anyhow!("failed to initialize dashboard storage: {e}"))?
        .with_messages()
        .map_err(|e| anyhow!("failed to load message catalog: {e}"))?
        .build()
        .map_err(|e| anyhow!("failed to build application: {e}"))?;

    let app = create_router(state);

    info!("Listening on {}", listen_addr);
    let listener = TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
