use crate::shared::error::FetchError;
use async_trait::async_trait;
use serde_json::Value;

/// ResourceClient port for reading objects from a remote cluster
///
/// The resolver only depends on this contract. How the cluster is reached
/// (proxy, direct endpoint, credentials) is the adapter's concern.
///
/// # Async Support
/// Sibling fetches are issued concurrently, so implementations must be
/// `Send + Sync`.
#[async_trait]
pub trait ResourceClient: Send + Sync {
    /// Fetches the object at `path` in `cluster`
    ///
    /// # Arguments
    /// * `cluster` - Name of the cluster the object lives in
    /// * `path` - Kubernetes REST path, e.g. `/apis/{group}/{version}/{plural}/{name}`
    ///
    /// # Errors
    /// - `FetchError::RequestFailed` when the cluster answers with a non-2xx status
    /// - `FetchError::Transport` when no response arrives
    /// - `FetchError::Decode` when the body is not JSON
    async fn fetch(&self, cluster: &str, path: &str) -> Result<Value, FetchError>;
}
