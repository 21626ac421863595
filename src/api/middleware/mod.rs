pub mod fault_interception;
pub mod request_logging;
pub mod unhandled_faults;

pub use fault_interception::{intercept_faults, FaultInterceptionLayer, FaultInterceptor};
