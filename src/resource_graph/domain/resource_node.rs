use super::raw_resource::RawResource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable cache key of a resource.
///
/// The cluster-assigned uid when present, `{kind}-{name}` otherwise. The
/// same remote object must always produce the same id, since the
/// expansion cache is keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn for_resource(uid: Option<&str>, kind: &str, name: &str) -> Self {
        match uid {
            Some(uid) if !uid.trim().is_empty() => Self(uid.to_string()),
            _ => Self(format!("{}-{}", kind, name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Position of a node in the Crossplane hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KindClass {
    Claim,
    CompositeResource,
    ManagedResource,
}

impl KindClass {
    /// Short badge label: `Claim`, `XR` or `MR`
    pub fn label(&self) -> &'static str {
        match self {
            KindClass::Claim => "Claim",
            KindClass::CompositeResource => "XR",
            KindClass::ManagedResource => "MR",
        }
    }
}

impl fmt::Display for KindClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of `status.conditions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionRecord {
    #[serde(rename = "type", default)]
    pub condition_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
}

impl ConditionRecord {
    pub fn new(condition_type: &str, status: &str) -> Self {
        Self {
            condition_type: condition_type.to_string(),
            status: status.to_string(),
            ..Default::default()
        }
    }

    pub fn is_true(&self) -> bool {
        self.status == "True"
    }
}

/// Synced/Ready summary plus the full condition list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStatus {
    pub synced: bool,
    pub ready: bool,
    pub conditions: Vec<ConditionRecord>,
}

impl ResourceStatus {
    pub const SYNCED: &'static str = "Synced";
    pub const READY: &'static str = "Ready";

    pub fn from_conditions(conditions: Vec<ConditionRecord>) -> Self {
        let holds = |ty: &str| {
            conditions
                .iter()
                .find(|c| c.condition_type == ty)
                .is_some_and(ConditionRecord::is_true)
        };
        Self {
            synced: holds(Self::SYNCED),
            ready: holds(Self::READY),
            conditions,
        }
    }

    /// First condition of the given type, if reported
    pub fn condition(&self, condition_type: &str) -> Option<&ConditionRecord> {
        self.conditions
            .iter()
            .find(|c| c.condition_type == condition_type)
    }

    pub fn is_healthy(&self) -> bool {
        self.synced && self.ready
    }
}

/// A well-formed outgoing reference to a composed resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildRef {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl ChildRef {
    pub fn new(api_version: &str, kind: &str, name: &str) -> Self {
        Self {
            api_version: api_version.to_string(),
            kind: kind.to_string(),
            name: name.to_string(),
            namespace: None,
        }
    }

    /// Splits `apiVersion` into `(group, version)`. The core group has no
    /// group part (`v1`).
    pub fn group_version(&self) -> (Option<&str>, &str) {
        match self.api_version.split_once('/') {
            Some((group, version)) => (Some(group), version),
            None => (None, self.api_version.as_str()),
        }
    }
}

/// One discovered resource, normalized for the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceNode {
    pub kind_class: KindClass,
    pub id: NodeId,
    pub api_group: String,
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub status: ResourceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub level: usize,
    /// Lookup relation only; the expansion cache owns node lifetime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<NodeId>,
    pub is_last_child: bool,
    pub child_refs: Vec<ChildRef>,
    /// Claim -> composite reference (`spec.resourceRef`), claims only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite_ref: Option<ChildRef>,
    #[serde(skip)]
    pub resource: RawResource,
}

impl ResourceNode {
    /// Composite-type nodes are the ones that can be expanded.
    pub fn is_composite(&self) -> bool {
        !self.child_refs.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[cfg(test)]
impl ResourceNode {
    /// Bare managed node for tests that only care about tree shape
    pub(crate) fn stub(id: &str, parent: Option<&str>, level: usize) -> Self {
        Self {
            kind_class: KindClass::ManagedResource,
            id: NodeId::new(id),
            api_group: "example.org".into(),
            kind: "Thing".into(),
            name: id.into(),
            namespace: None,
            status: ResourceStatus::default(),
            created_at: None,
            level,
            parent_id: parent.map(NodeId::new),
            is_last_child: false,
            child_refs: vec![],
            composite_ref: None,
            resource: RawResource::default(),
        }
    }

    /// Stub that carries one child reference, so it counts as composite
    pub(crate) fn composite_stub(id: &str, parent: Option<&str>, level: usize) -> Self {
        let mut node = Self::stub(id, parent, level);
        node.kind_class = KindClass::CompositeResource;
        node.child_refs = vec![ChildRef::new("example.org/v1", "Thing", "child")];
        node
    }
}
