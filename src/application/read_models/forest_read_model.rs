//! Forest read model for query operations

use crate::resource_graph::domain::{LoadState, NodeState};
use crate::resource_graph::services::ForestSummary;
use serde::Serialize;

/// Denormalized view of the visible forest
#[derive(Debug, Clone, Serialize)]
pub struct ForestReadModel {
    pub state: LoadState,
    /// Visible rows in display order
    pub rows: Vec<NodeRowView>,
    pub visible: usize,
    pub summary: ForestSummary,
    /// Branches and root classes that could not be resolved
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<EventLogView>,
}

/// One table row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRowView {
    pub id: String,
    /// `├`, `└` or empty for roots
    pub prefix: String,
    pub level: usize,
    /// `Claim`, `XR` or `MR`
    pub kind_class: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub api_group: String,
    pub kind: String,
    pub synced: bool,
    pub ready: bool,
    pub state: NodeState,
    /// Relative age, `Unknown` without a usable timestamp
    pub age: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Event log of a single resource
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventLogView {
    pub kind: String,
    pub name: String,
    pub events: Vec<EventView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    pub event_type: String,
    pub reason: String,
    pub message: String,
    pub count: u32,
    pub last_seen: String,
}
