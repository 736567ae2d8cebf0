use serde::{Deserialize, Serialize};
use std::fmt;

/// The three classes of resource a permission gate can allow or deny.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceClass {
    Claim,
    Composite,
    Managed,
}

impl fmt::Display for ResourceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceClass::Claim => write!(f, "claim"),
            ResourceClass::Composite => write!(f, "composite"),
            ResourceClass::Managed => write!(f, "managed"),
        }
    }
}

/// Per-class read permissions for one graph view.
///
/// A denied class contributes zero nodes and is never fetched.
/// `Managed` also gates descent below a composite: without it no child
/// references are followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePermissions {
    pub list_claims: bool,
    pub list_composites: bool,
    pub list_managed: bool,
}

impl ResourcePermissions {
    pub fn new(list_claims: bool, list_composites: bool, list_managed: bool) -> Self {
        Self {
            list_claims,
            list_composites,
            list_managed,
        }
    }

    /// Every class allowed
    pub fn allow_all() -> Self {
        Self::new(true, true, true)
    }

    pub fn allows(&self, class: ResourceClass) -> bool {
        match class {
            ResourceClass::Claim => self.list_claims,
            ResourceClass::Composite => self.list_composites,
            ResourceClass::Managed => self.list_managed,
        }
    }
}

impl Default for ResourcePermissions {
    fn default() -> Self {
        Self::allow_all()
    }
}
