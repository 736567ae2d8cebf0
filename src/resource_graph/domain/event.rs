use serde::{Deserialize, Serialize};

/// A core/v1 Event, reduced to what an operator reads in an event log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct K8sEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub involved_object: Option<InvolvedObject>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvolvedObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl K8sEvent {
    /// `Normal` when the event carries no type
    pub fn event_type_or_default(&self) -> &str {
        self.event_type.as_deref().unwrap_or("Normal")
    }

    pub fn is_warning(&self) -> bool {
        matches!(self.event_type.as_deref(), Some("Warning") | Some("Error"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_event() {
        let event: K8sEvent = serde_json::from_value(json!({
            "metadata": {"name": "bucket.17c"},
            "involvedObject": {"kind": "Bucket", "name": "logs"},
            "reason": "CannotObserveExternalResource",
            "message": "access denied",
            "type": "Warning",
            "count": 4,
            "lastTimestamp": "2024-05-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(event.reason.as_deref(), Some("CannotObserveExternalResource"));
        assert_eq!(event.count, Some(4));
        assert!(event.is_warning());
        assert_eq!(
            event.involved_object.unwrap().name.as_deref(),
            Some("logs")
        );
    }

    #[test]
    fn test_event_type_defaults_to_normal() {
        let event = K8sEvent::default();
        assert_eq!(event.event_type_or_default(), "Normal");
        assert!(!event.is_warning());
    }
}
