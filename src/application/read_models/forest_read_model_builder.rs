//! Builder for constructing ForestReadModel from a view snapshot

use super::forest_read_model::{EventLogView, EventView, ForestReadModel, NodeRowView};
use super::relative_age::relative_age;
use crate::application::view::ForestSnapshot;
use crate::resource_graph::domain::{K8sEvent, ResourceNode};
use crate::resource_graph::services::TreeRow;
use chrono::{DateTime, Utc};

pub struct ForestReadModelBuilder;

impl ForestReadModelBuilder {
    /// Builds the read model of the currently visible forest
    ///
    /// # Arguments
    /// * `snapshot` - View state to render
    /// * `now` - Reference time for relative ages
    pub fn build(snapshot: &ForestSnapshot, now: DateTime<Utc>) -> ForestReadModel {
        let rows = snapshot.rows();
        ForestReadModel {
            state: snapshot.load_state,
            rows: rows.iter().map(|row| Self::build_row(row, now)).collect(),
            visible: snapshot.count_visible(),
            summary: snapshot.summary(),
            issues: snapshot.issues.iter().map(ToString::to_string).collect(),
            events: None,
        }
    }

    /// Event log section for one resource
    pub fn build_event_log(
        node: &ResourceNode,
        events: &[K8sEvent],
        now: DateTime<Utc>,
    ) -> EventLogView {
        EventLogView {
            kind: node.kind.clone(),
            name: node.name.clone(),
            events: events
                .iter()
                .map(|event| EventView {
                    event_type: event.event_type_or_default().to_string(),
                    reason: event.reason.clone().unwrap_or_default(),
                    message: event.message.clone().unwrap_or_default(),
                    count: event.count.unwrap_or(1),
                    last_seen: relative_age(
                        event
                            .last_timestamp
                            .as_deref()
                            .or(event.first_timestamp.as_deref()),
                        now,
                    ),
                })
                .collect(),
        }
    }

    fn build_row(row: &TreeRow<'_>, now: DateTime<Utc>) -> NodeRowView {
        let node = row.node;
        NodeRowView {
            id: node.id.to_string(),
            prefix: row.prefix().to_string(),
            level: node.level,
            kind_class: node.kind_class.label().to_string(),
            name: node.name.clone(),
            namespace: node.namespace.clone(),
            api_group: node.api_group.clone(),
            kind: node.kind.clone(),
            synced: node.status.synced,
            ready: node.status.ready,
            state: row.state,
            age: relative_age(node.created_at.as_deref(), now),
            created_at: node.created_at.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource_graph::domain::{
        ConditionRecord, LoadState, NodeId, NodeState, ResourceClass, ResourceStatus,
    };
    use crate::shared::error::GraphError;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn snapshot() -> ForestSnapshot {
        let mut root = ResourceNode::composite_stub("root", None, 0);
        root.created_at = Some("2024-06-15T11:57:00Z".to_string());
        root.status = ResourceStatus::from_conditions(vec![
            ConditionRecord::new("Synced", "True"),
            ConditionRecord::new("Ready", "True"),
        ]);
        let mut leaf = ResourceNode::stub("leaf", Some("root"), 1);
        leaf.is_last_child = true;

        let mut snapshot = ForestSnapshot::empty(1, LoadState::Loaded);
        snapshot.forest = vec![root];
        snapshot.children.insert(NodeId::new("root"), vec![leaf]);
        snapshot.expanded.insert(NodeId::new("root"));
        snapshot.issues.push(GraphError::PermissionDenied {
            class: ResourceClass::Claim,
        });
        snapshot
    }

    #[test]
    fn test_build_rows() {
        let model = ForestReadModelBuilder::build(&snapshot(), now());

        assert_eq!(model.state, LoadState::Loaded);
        assert_eq!(model.visible, 2);
        assert_eq!(model.rows.len(), 2);

        let root = &model.rows[0];
        assert_eq!(root.prefix, "");
        assert_eq!(root.kind_class, "XR");
        assert_eq!(root.state, NodeState::Expanded);
        assert_eq!(root.age, "3 minutes ago");
        assert!(root.synced && root.ready);

        let leaf = &model.rows[1];
        assert_eq!(leaf.prefix, "└");
        assert_eq!(leaf.kind_class, "MR");
        assert_eq!(leaf.age, "Unknown");
        assert_eq!(leaf.state, NodeState::Leaf);

        assert_eq!(model.summary.degraded, 1);
        assert_eq!(model.issues, vec!["listing claim resources is not permitted"]);
    }

    #[test]
    fn test_build_event_log() {
        let node = ResourceNode::stub("bucket", None, 1);
        let events = vec![K8sEvent {
            reason: Some("CannotObserve".to_string()),
            message: Some("access denied".to_string()),
            event_type: Some("Warning".to_string()),
            first_timestamp: Some("2024-06-15T11:00:00Z".to_string()),
            ..Default::default()
        }];

        let log = ForestReadModelBuilder::build_event_log(&node, &events, now());

        assert_eq!(log.name, "bucket");
        assert_eq!(log.events[0].event_type, "Warning");
        assert_eq!(log.events[0].count, 1);
        assert_eq!(log.events[0].last_seen, "about 1 hour ago");
    }
}
