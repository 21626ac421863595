//! End-to-end tests for fault interception on the dashboard routes
//!
//! Every test builds the full router the binary serves and drives it with
//! `oneshot`, so the interceptor, the host default rendering and the
//! handlers are exercised together.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::{routing::get, Router};
use tower::ServiceExt;

use dashboard_shield::{
    api::{
        create_router,
        middleware::{
            fault_interception::{intercept_faults, FaultInterceptor, SanitizedErrorBody},
            unhandled_faults,
        },
    },
    application::{
        disclosure::{DisclosurePolicy, MessageCatalog, DEVELOPER_MESSAGE, END_USER_MESSAGE},
        ports::{DashboardStorage, StorageError},
    },
    config::Config,
    domain::{entities::DashboardInfo, value_objects::DashboardId, DeploymentMode},
    infrastructure::storage::{
        FileDashboardStorage, InMemoryDashboardStorage, UnavailableDashboardStorage,
    },
    ApplicationBuilder,
};

/// Storage failing with an I/O error that carries a filesystem path
struct BrokenStorage;

#[async_trait]
impl DashboardStorage for BrokenStorage {
    async fn list_dashboards(&self) -> Result<Vec<DashboardInfo>, StorageError> {
        Err(StorageError::Internal("pool exhausted".into()))
    }

    async fn load_dashboard(&self, _id: &DashboardId) -> Result<String, StorageError> {
        Err(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied: /srv/secret/dashboards/Dashboard.xml",
        )))
    }

    async fn save_dashboard(&self, _id: &DashboardId, _document: String) -> Result<(), StorageError> {
        Err(StorageError::Internal("read-only replica".into()))
    }
}

fn app_with(storage: Arc<dyn DashboardStorage>, config: Config) -> Router {
    let state = ApplicationBuilder::new(config)
        .with_storage_backend(storage)
        .build()
        .unwrap();
    create_router(state)
}

fn app(storage: Arc<dyn DashboardStorage>, mode: DeploymentMode) -> Router {
    app_with(
        storage,
        Config {
            deployment_mode: mode,
            ..Config::default()
        },
    )
}

fn seeded_storage() -> Arc<dyn DashboardStorage> {
    Arc::new(InMemoryDashboardStorage::with_documents([(
        DashboardId::from_str("Sales").unwrap(),
        "<Dashboard><Title Text=\"Sales\" /></Dashboard>".to_string(),
    )]))
}

async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(data) => builder
            .header(header::CONTENT_TYPE, "application/xml")
            .header(header::CONTENT_LENGTH, data.len())
            .body(Body::from(data.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn sanitized_message(response: Response) -> String {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body = body_string(response).await;
    let parsed: SanitizedErrorBody = serde_json::from_str(&body).unwrap();
    parsed.message
}

#[tokio::test]
async fn backend_unavailable_in_production_gets_end_user_text() {
    let app = app(
        Arc::new(UnavailableDashboardStorage::default()),
        DeploymentMode::Production,
    );

    let response = send(app, Method::GET, "/api/dashboards/Dashboard", None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_string(response).await,
        r#"{"Message":"Custom exception text for end users"}"#
    );
}

#[tokio::test]
async fn backend_unavailable_in_development_gets_developer_text() {
    let app = app(
        Arc::new(UnavailableDashboardStorage::default()),
        DeploymentMode::Development,
    );

    let response = send(app, Method::GET, "/api/dashboards/Dashboard", None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_string(response).await,
        r#"{"Message":"Custom exception text for developers"}"#
    );
}

#[tokio::test]
async fn unclassified_storage_fault_gets_generic_text() {
    let app = app(Arc::new(BrokenStorage), DeploymentMode::Production);

    let response = send(app, Method::GET, "/api/dashboards/Dashboard", None).await;
    let message = sanitized_message(response).await;

    assert_eq!(message, END_USER_MESSAGE);
    assert!(!message.contains("/srv/secret"));
}

#[tokio::test]
async fn panic_inside_scope_is_intercepted_as_unclassified() {
    let interceptor = Arc::new(FaultInterceptor::new(
        DisclosurePolicy::default(),
        DeploymentMode::Production,
    ));
    let routes: Router = Router::new().route(
        "/api/dashboards/report",
        get(|| async {
            let divisor: i32 = "0".parse().unwrap();
            (100 / divisor).to_string()
        }),
    );
    let app = intercept_faults(routes, interceptor);

    let response = send(app, Method::GET, "/api/dashboards/report", None).await;

    assert_eq!(
        body_string(response).await,
        r#"{"Message":"Custom exception text for end users"}"#
    );
}

#[tokio::test]
async fn no_fault_leaves_response_untouched() {
    let app = app(seeded_storage(), DeploymentMode::Production);

    let response = send(app.clone(), Method::GET, "/api/dashboards/Sales", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/xml"
    );
    assert!(body_string(response).await.contains("Title Text=\"Sales\""));

    let response = send(app, Method::GET, "/api/dashboards", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let list: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(list, serde_json::json!([{"id": "Sales", "name": "Sales"}]));
}

#[tokio::test]
async fn save_then_load_round_trips_through_the_api() {
    let app = app(
        Arc::new(InMemoryDashboardStorage::new()),
        DeploymentMode::Production,
    );

    let response = send(
        app.clone(),
        Method::PUT,
        "/api/dashboards/Inventory",
        Some("<Dashboard />"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(app, Method::GET, "/api/dashboards/Inventory", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "<Dashboard />");
}

#[tokio::test]
async fn fault_outside_scope_gets_host_default() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileDashboardStorage::new(dir.path().join("never-created")));

    // Readiness is not part of the dashboard group
    let prod = app(storage.clone(), DeploymentMode::Production);
    let response = send(prod.clone(), Method::GET, "/health/ready", None).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert_eq!(body_string(response).await, "Internal Server Error");

    // The same storage failure inside the group is sanitized
    let response = send(prod, Method::GET, "/api/dashboards", None).await;
    assert_eq!(sanitized_message(response).await, END_USER_MESSAGE);

    let dev = app(storage, DeploymentMode::Development);
    let response = send(dev, Method::GET, "/health/ready", None).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(body.contains("backend_unavailable"));
    assert!(body.contains("never-created"));
}

async fn crashing_report() -> &'static str {
    panic!("report generator crashed")
}

#[tokio::test]
async fn panic_outside_scope_gets_host_default() {
    let routes: Router = Router::new()
        .route("/reports", get(crashing_report))
        .layer(tower_http::catch_panic::CatchPanicLayer::custom(
            dashboard_shield::api::errors::fault_from_panic,
        ))
        .layer(axum::middleware::from_fn_with_state(
            DeploymentMode::Production,
            unhandled_faults::render_unhandled_faults,
        ));

    let response = send(routes, Method::GET, "/reports", None).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(response).await, "Internal Server Error");
}

#[tokio::test]
async fn development_and_production_messages_differ() {
    let prod = app(Arc::new(BrokenStorage), DeploymentMode::Production);
    let dev = app(Arc::new(BrokenStorage), DeploymentMode::Development);

    let prod_message =
        sanitized_message(send(prod, Method::GET, "/api/dashboards/Dashboard", None).await).await;
    let dev_message =
        sanitized_message(send(dev, Method::GET, "/api/dashboards/Dashboard", None).await).await;

    assert_eq!(prod_message, END_USER_MESSAGE);
    assert_eq!(dev_message, DEVELOPER_MESSAGE);
    assert_ne!(prod_message, dev_message);
}

#[tokio::test]
async fn every_intercepted_fault_is_400() {
    let broken: Arc<dyn DashboardStorage> = Arc::new(BrokenStorage);
    let unavailable: Arc<dyn DashboardStorage> = Arc::new(UnavailableDashboardStorage::default());
    let cases = vec![
        (broken.clone(), Method::GET, "/api/dashboards", None),
        (broken, Method::PUT, "/api/dashboards/x", Some("<d />")),
        (seeded_storage(), Method::GET, "/api/dashboards/missing", None),
        (seeded_storage(), Method::GET, "/api/dashboards/bad.id", None),
        (unavailable, Method::GET, "/api/dashboards/Dashboard", None),
    ];

    for mode in [DeploymentMode::Development, DeploymentMode::Production] {
        for (storage, method, uri, body) in cases.iter().cloned() {
            let response = send(app(storage, mode), method, uri, body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri} in {mode}");
        }
    }
}

#[tokio::test]
async fn classified_messages_follow_the_catalog() {
    let app = app(seeded_storage(), DeploymentMode::Production);

    let response = send(app.clone(), Method::GET, "/api/dashboards/missing", None).await;
    assert_eq!(
        sanitized_message(response).await,
        "The requested dashboard is not available"
    );

    let response = send(app, Method::GET, "/api/dashboards/bad.id", None).await;
    assert_eq!(
        sanitized_message(response).await,
        "The dashboard ID is not valid"
    );
}

#[tokio::test]
async fn custom_catalog_from_toml_is_used() {
    let catalog = MessageCatalog::from_toml_str(
        r#"
        [fallback]
        safe = "Something went wrong"
        developer = "Unclassified fault"

        [classes.backend_unavailable]
        safe = "Dashboards are offline"
        developer = "Dashboard backend refused the connection"
        "#,
    )
    .unwrap();
    let state = ApplicationBuilder::new(Config::default())
        .with_storage_backend(Arc::new(UnavailableDashboardStorage::default()))
        .with_catalog(catalog)
        .build()
        .unwrap();
    let app = create_router(state);

    let response = send(app.clone(), Method::GET, "/api/dashboards/Dashboard", None).await;
    assert_eq!(sanitized_message(response).await, "Dashboards are offline");

    // Classes missing from a custom catalog use its fallback
    let response = send(app, Method::GET, "/api/dashboards/bad.id", None).await;
    assert_eq!(sanitized_message(response).await, "Something went wrong");
}

#[tokio::test]
async fn intercepted_responses_keep_request_id() {
    let app = app(
        Arc::new(UnavailableDashboardStorage::default()),
        DeploymentMode::Production,
    );

    let request = Request::builder()
        .uri("/api/dashboards/Dashboard")
        .header("x-request-id", "trace-42")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers().get("x-request-id").unwrap(), "trace-42");
}

#[tokio::test]
async fn oversized_dashboard_is_rejected_before_the_handler() {
    let app = app_with(
        Arc::new(InMemoryDashboardStorage::new()),
        Config {
            max_dashboard_bytes: 1024,
            ..Config::default()
        },
    );
    let document = "x".repeat(4096);

    let response = send(app, Method::PUT, "/api/dashboards/Big", Some(&document)).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn dashboard_limit_above_extractor_default_is_honored() {
    let config = Config {
        max_dashboard_bytes: 8 * 1024 * 1024,
        ..Config::default()
    };
    assert!(config.validate().is_ok());
    let app = app_with(Arc::new(InMemoryDashboardStorage::new()), config);
    let document = "x".repeat(3 * 1024 * 1024);

    let response = send(app.clone(), Method::PUT, "/api/dashboards/Big", Some(&document)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(app, Method::GET, "/api/dashboards/Big", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await.len(), document.len());
}

#[tokio::test]
async fn missing_file_root_on_load_is_a_backend_outage() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileDashboardStorage::new(dir.path().join("never-created")));
    let app = app(storage, DeploymentMode::Production);

    let response = send(app, Method::GET, "/api/dashboards/Dashboard", None).await;

    assert_eq!(sanitized_message(response).await, END_USER_MESSAGE);
}

#[tokio::test]
async fn unknown_routes_are_not_intercepted() {
    let app = app(seeded_storage(), DeploymentMode::Production);

    let response = send(app, Method::GET, "/nope", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_is_served_outside_the_group() {
    let app = app(seeded_storage(), DeploymentMode::Development);

    let response = send(app, Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "development");
}
