pub mod builder;
pub mod disclosure;
pub mod errors;
pub mod ports;
pub mod use_cases;

pub use builder::ApplicationBuilder;
