use crate::resource_graph::domain::ResourcePermissions;
use async_trait::async_trait;

/// PermissionGate port deciding which resource classes may be listed
///
/// A denied class contributes zero nodes to the forest. It is never an
/// error.
#[async_trait]
pub trait PermissionGate: Send + Sync {
    async fn permissions(&self) -> ResourcePermissions;
}
