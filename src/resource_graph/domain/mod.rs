pub mod coordinates;
pub mod event;
pub mod permissions;
pub mod raw_resource;
pub mod resource_node;
pub mod view_state;

pub use coordinates::{ResourceCoordinates, RootCoordinates};
pub use event::{InvolvedObject, K8sEvent};
pub use permissions::{ResourceClass, ResourcePermissions};
pub use raw_resource::{ObjectMeta, RawRef, RawResource, RawSpec, RawStatus};
pub use resource_node::{ChildRef, ConditionRecord, KindClass, NodeId, ResourceNode, ResourceStatus};
pub use view_state::{LoadState, NodeState};
