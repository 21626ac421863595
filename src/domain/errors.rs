use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid dashboard ID: {0}")]
    InvalidDashboardId(String),
}
