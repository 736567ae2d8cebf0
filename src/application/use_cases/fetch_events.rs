use crate::ports::outbound::ResourceClient;
use crate::resource_graph::domain::{K8sEvent, ResourceNode};
use crate::resource_graph::services::ApiPaths;
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Default, Deserialize)]
struct EventList {
    #[serde(default)]
    items: Vec<K8sEvent>,
}

/// FetchEventsUseCase - reads the event log of one resource
///
/// Independent of graph resolution: one request, no caching.
pub struct FetchEventsUseCase<C> {
    client: Arc<C>,
}

impl<C: ResourceClient> FetchEventsUseCase<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Events whose involved object is `node`, in the order the cluster
    /// returns them. Any failure yields an empty log.
    pub async fn execute(&self, cluster: &str, node: &ResourceNode) -> Vec<K8sEvent> {
        let path = match ApiPaths::events(node.namespace.as_deref(), &node.name) {
            Ok(path) => path,
            Err(e) => {
                warn!(node = %node.id, "cannot build event path: {}", e);
                return Vec::new();
            }
        };

        let value = match self.client.fetch(cluster, &path).await {
            Ok(value) => value,
            Err(e) => {
                warn!(cluster, path = %path, "failed to fetch events: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_value::<EventList>(value) {
            Ok(list) => list.items,
            Err(e) => {
                warn!(cluster, path = %path, "unreadable event list: {}", e);
                Vec::new()
            }
        }
    }
}
