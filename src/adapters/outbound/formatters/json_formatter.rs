use crate::application::read_models::ForestReadModel;
use crate::ports::outbound::ForestFormatter;
use crate::shared::Result;

/// JsonFormatter adapter emitting the read model as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ForestFormatter for JsonFormatter {
    fn format(&self, model: &ForestReadModel) -> Result<String> {
        let mut json = serde_json::to_string_pretty(model)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::NodeRowView;
    use crate::resource_graph::domain::{LoadState, NodeState};
    use crate::resource_graph::services::ForestSummary;
    use serde_json::Value;

    #[test]
    fn test_json_shape() {
        let model = ForestReadModel {
            state: LoadState::Loaded,
            rows: vec![NodeRowView {
                id: "uid-net-x".to_string(),
                prefix: String::new(),
                level: 0,
                kind_class: "XR".to_string(),
                name: "net-x".to_string(),
                namespace: None,
                api_group: "platform.example.org".to_string(),
                kind: "XNetwork".to_string(),
                synced: true,
                ready: true,
                state: NodeState::Collapsed,
                age: "Unknown".to_string(),
                created_at: None,
            }],
            visible: 1,
            summary: ForestSummary {
                visible: 1,
                synced: 1,
                ready: 1,
                degraded: 0,
            },
            issues: vec![],
            events: None,
        };

        let json: Value =
            serde_json::from_str(&JsonFormatter::new().format(&model).unwrap()).unwrap();

        assert_eq!(json["state"], "loaded");
        assert_eq!(json["visible"], 1);
        assert_eq!(json["rows"][0]["kindClass"], "XR");
        assert_eq!(json["rows"][0]["apiGroup"], "platform.example.org");
        assert_eq!(json["rows"][0]["state"], "collapsed");
        assert!(json["rows"][0].get("namespace").is_none());
        assert!(json.get("issues").is_none());
        assert!(json.get("events").is_none());
        assert_eq!(json["summary"]["degraded"], 0);
    }

    #[test]
    fn test_empty_forest_json() {
        let model = ForestReadModel {
            state: LoadState::Empty,
            rows: vec![],
            visible: 0,
            summary: ForestSummary::default(),
            issues: vec!["claim coordinates are incomplete: missing x".to_string()],
            events: None,
        };

        let json: Value =
            serde_json::from_str(&JsonFormatter::new().format(&model).unwrap()).unwrap();
        assert_eq!(json["state"], "empty");
        assert_eq!(json["rows"].as_array().unwrap().len(), 0);
        assert_eq!(json["issues"][0], "claim coordinates are incomplete: missing x");
    }
}
