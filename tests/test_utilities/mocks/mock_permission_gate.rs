use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use xpgraph::prelude::*;

/// Mock PermissionGate returning fixed permissions and counting queries
#[derive(Default)]
pub struct MockPermissionGate {
    permissions: ResourcePermissions,
    queries: AtomicUsize,
}

impl MockPermissionGate {
    pub fn allow_all() -> Self {
        Self::default()
    }

    pub fn new(list_claims: bool, list_composites: bool, list_managed: bool) -> Self {
        Self {
            permissions: ResourcePermissions::new(list_claims, list_composites, list_managed),
            queries: AtomicUsize::new(0),
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PermissionGate for MockPermissionGate {
    async fn permissions(&self) -> ResourcePermissions {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.permissions
    }
}
