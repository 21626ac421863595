pub mod deployment_mode;
pub mod entities;
pub mod errors;
pub mod fault;
pub mod value_objects;

pub use deployment_mode::{DeploymentMode, InvalidDeploymentMode};
pub use fault::{Fault, FaultClass, FaultKind};
