use super::catalog::MessageCatalog;
use crate::domain::{DeploymentMode, Fault, FaultKind};

/// Maps a fault and the deployment mode to a client-facing message.
///
/// Pure: the mode is an argument, never read from process state, and the
/// fault's internal detail is never part of the result.
#[derive(Debug, Clone, Default)]
pub struct DisclosurePolicy {
    catalog: MessageCatalog,
}

impl DisclosurePolicy {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    pub fn disclose(&self, fault: &Fault, mode: DeploymentMode) -> &str {
        let pair = match fault.kind() {
            FaultKind::Classified(class) => self
                .catalog
                .pair_for(class)
                .unwrap_or(&self.catalog.fallback),
            FaultKind::Unclassified => &self.catalog.fallback,
        };
        pair.select(mode)
    }
}
