use super::resource_node::ConditionRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Kubernetes object as returned by the cluster, typed only as far as
/// graph resolution needs. Everything else is kept verbatim in `extra`
/// so the object can be written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<RawSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RawStatus>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSpec {
    /// Composite -> composed resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_refs: Option<Vec<RawRef>>,
    /// Claim -> composite
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_ref: Option<RawRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An object reference as it appears in `spec.resourceRefs`. Every field is
/// optional on the wire; incomplete references are dropped during
/// materialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStatus {
    #[serde(default)]
    pub conditions: Vec<ConditionRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawResource {
    /// Parses a fetched JSON document.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn conditions(&self) -> &[ConditionRecord] {
        self.status
            .as_ref()
            .map(|s| s.conditions.as_slice())
            .unwrap_or(&[])
    }

    pub fn resource_refs(&self) -> &[RawRef] {
        self.spec
            .as_ref()
            .and_then(|s| s.resource_refs.as_deref())
            .unwrap_or(&[])
    }
}
