use crate::ports::outbound::PermissionGate;
use crate::resource_graph::domain::ResourcePermissions;
use async_trait::async_trait;

/// StaticPermissionGate adapter answering from configuration
///
/// With enforcement off every class is allowed, whatever the configured
/// flags say.
pub struct StaticPermissionGate {
    permissions: ResourcePermissions,
}

impl StaticPermissionGate {
    pub fn new(enforce: bool, configured: ResourcePermissions) -> Self {
        let permissions = if enforce {
            configured
        } else {
            ResourcePermissions::allow_all()
        };
        Self { permissions }
    }

    pub fn allow_all() -> Self {
        Self::new(false, ResourcePermissions::allow_all())
    }
}

#[async_trait]
impl PermissionGate for StaticPermissionGate {
    async fn permissions(&self) -> ResourcePermissions {
        self.permissions
    }
}
