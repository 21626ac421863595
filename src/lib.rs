//! # DashboardShield - Sanitized Fault Responses for a Dashboard API
//!
//! Serves dashboard documents over HTTP and makes sure that a failure inside
//! the dashboard handlers never reaches a client as a stack trace or a raw
//! backend error.
//!
//! ## Architecture Layers
//!
//! - **Domain**: faults, deployment mode, dashboard value objects
//! - **Application**: disclosure policy, dashboard use case, storage port
//! - **Infrastructure**: file, in-memory and simulated-outage storage
//! - **API**: handlers, the fault interceptor and host default rendering
//!
//! ## Fault Flow
//!
//! A dashboard handler returns a [`domain::Fault`]. The fault interceptor
//! registered on the dashboard handler group asks the
//! [`application::disclosure::DisclosurePolicy`] for a message suited to the
//! process [`domain::DeploymentMode`] and answers `400` with
//! `{"Message": "..."}`. Routes outside the group fall back to the host
//! default: a plain `500`.
//!
//! ## Example Usage
//!
//! ```no_run
//! use dashboard_shield::{api::create_router, ApplicationBuilder, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = ApplicationBuilder::new(Config::from_env())
//!     .with_storage()
//!     .await?
//!     .with_messages()?
//!     .build()?;
//! let app = create_router(state);
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::ApplicationBuilder;
pub use config::Config;
pub use domain::{DeploymentMode, Fault, FaultClass};
