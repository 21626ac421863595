//! Disclosure policy: what a client may be told about a fault
//!
//! - catalog.rs: registered safe/developer message pairs and TOML loading
//! - policy.rs: the pure (fault, mode) -> message mapping

pub mod catalog;
pub mod policy;

pub use catalog::{CatalogError, MessageCatalog, MessagePair, DEVELOPER_MESSAGE, END_USER_MESSAGE};
pub use policy::DisclosurePolicy;
