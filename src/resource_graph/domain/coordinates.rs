use serde::Serialize;

/// Where one root resource lives: the cluster name and the REST path
/// of the object inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceCoordinates {
    pub cluster: String,
    pub api_path: String,
}

impl ResourceCoordinates {
    pub fn new(cluster: impl Into<String>, api_path: impl Into<String>) -> Self {
        Self {
            cluster: cluster.into(),
            api_path: api_path.into(),
        }
    }
}

/// Coordinates of the two possible forest roots. Either may be absent
/// when the owning entity is only partially annotated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RootCoordinates {
    pub claim: Option<ResourceCoordinates>,
    pub composite: Option<ResourceCoordinates>,
}

impl RootCoordinates {
    /// Cluster the composite tree resolves against.
    ///
    /// Descendants always live in the composite's cluster. The claim's
    /// cluster is used only when no composite is configured.
    pub fn descendant_cluster(&self) -> Option<&str> {
        self.composite
            .as_ref()
            .or(self.claim.as_ref())
            .map(|c| c.cluster.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.claim.is_none() && self.composite.is_none()
    }
}
