use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-defined discriminator carried by a classified fault
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaultClass(Cow<'static, str>);

impl FaultClass {
    /// The dashboard storage backend could not serve the request
    pub const BACKEND_UNAVAILABLE: FaultClass = FaultClass::from_static("backend_unavailable");
    /// The requested dashboard does not exist in storage
    pub const DASHBOARD_NOT_FOUND: FaultClass = FaultClass::from_static("dashboard_not_found");
    /// The dashboard identifier in the request was rejected
    pub const INVALID_DASHBOARD_ID: FaultClass = FaultClass::from_static("invalid_dashboard_id");

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FaultClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tag distinguishing application-defined faults from everything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaultKind {
    Classified(FaultClass),
    Unclassified,
}

impl FaultKind {
    pub fn class(&self) -> Option<&FaultClass> {
        match self {
            FaultKind::Classified(class) => Some(class),
            FaultKind::Unclassified => None,
        }
    }

    /// Label safe to put in logs (never the fault detail)
    pub fn label(&self) -> &str {
        match self {
            FaultKind::Classified(class) => class.as_str(),
            FaultKind::Unclassified => "unclassified",
        }
    }
}

/// Failure raised while producing a response.
///
/// `detail` is internal diagnostic text and may contain paths, SQL fragments
/// or backend identifiers. It must never reach a client through an
/// interceptor. `handled` is flipped exactly once, by whichever interceptor
/// produced the terminal response.
#[derive(Debug, Clone, Error)]
#[error("{detail}")]
pub struct Fault {
    kind: FaultKind,
    detail: String,
    handled: bool,
}

impl Fault {
    pub fn new(kind: FaultKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
            handled: false,
        }
    }

    pub fn classified(class: FaultClass, detail: impl Into<String>) -> Self {
        Self::new(FaultKind::Classified(class), detail)
    }

    pub fn unclassified(detail: impl Into<String>) -> Self {
        Self::new(FaultKind::Unclassified, detail)
    }

    pub fn kind(&self) -> &FaultKind {
        &self.kind
    }

    pub fn class(&self) -> Option<&FaultClass> {
        self.kind.class()
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }

    pub fn mark_handled(&mut self) {
        self.handled = true;
    }
}
