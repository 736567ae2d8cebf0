use crate::resource_graph::domain::{
    ChildRef, KindClass, NodeId, RawRef, RawResource, ResourceNode, ResourceStatus,
};

const UNKNOWN: &str = "Unknown";

/// Where a materialized node sits in the forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Root claim (level 0)
    RootClaim,
    /// Root composite (level 0)
    RootComposite,
    /// Descendant of `parent_id` at `level`
    Child {
        level: usize,
        parent_id: NodeId,
        is_last_child: bool,
    },
}

/// Converts fetched objects into `ResourceNode`s.
pub struct NodeMaterializer;

impl NodeMaterializer {
    pub fn materialize(resource: RawResource, placement: Placement) -> ResourceNode {
        let child_refs = Self::child_refs(&resource);
        let name = resource
            .metadata
            .name
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_string());
        let kind = resource.kind.clone().unwrap_or_else(|| UNKNOWN.to_string());
        let api_group = resource
            .api_version
            .as_deref()
            .and_then(|v| v.split('/').next())
            .filter(|g| !g.is_empty())
            .unwrap_or(UNKNOWN)
            .to_string();
        let id = NodeId::for_resource(resource.metadata.uid.as_deref(), &kind, &name);
        let status = ResourceStatus::from_conditions(resource.conditions().to_vec());
        let created_at = resource
            .metadata
            .creation_timestamp
            .clone()
            .filter(|ts| !ts.is_empty());

        let (kind_class, level, parent_id, is_last_child) = match placement {
            Placement::RootClaim => (KindClass::Claim, 0, None, false),
            Placement::RootComposite => (KindClass::CompositeResource, 0, None, false),
            Placement::Child {
                level,
                parent_id,
                is_last_child,
            } => {
                let class = if child_refs.is_empty() {
                    KindClass::ManagedResource
                } else {
                    KindClass::CompositeResource
                };
                (class, level, Some(parent_id), is_last_child)
            }
        };

        let composite_ref = match kind_class {
            KindClass::Claim => resource
                .spec
                .as_ref()
                .and_then(|s| s.resource_ref.as_ref())
                .and_then(Self::to_child_ref),
            _ => None,
        };

        ResourceNode {
            kind_class,
            id,
            api_group,
            kind,
            name,
            namespace: resource.metadata.namespace.clone(),
            status,
            created_at,
            level,
            parent_id,
            is_last_child,
            child_refs,
            composite_ref,
            resource,
        }
    }

    /// Complete references from `spec.resourceRefs`, in declaration order.
    pub fn child_refs(resource: &RawResource) -> Vec<ChildRef> {
        resource
            .resource_refs()
            .iter()
            .filter_map(Self::to_child_ref)
            .collect()
    }

    fn to_child_ref(raw: &RawRef) -> Option<ChildRef> {
        let present = |v: &Option<String>| v.as_deref().filter(|s| !s.trim().is_empty()).map(str::to_string);
        Some(ChildRef {
            api_version: present(&raw.api_version)?,
            kind: present(&raw.kind)?,
            name: present(&raw.name)?,
            namespace: present(&raw.namespace),
        })
    }
}
