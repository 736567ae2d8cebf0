use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use xpgraph::prelude::*;

/// Mock ResourceClient serving canned objects by REST path
///
/// Unknown paths answer 404. Every call is recorded, together with the
/// order in which the calls completed.
#[derive(Default)]
pub struct MockResourceClient {
    responses: HashMap<String, Value>,
    failures: HashMap<String, FetchError>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<(String, String)>>,
    completed: Mutex<Vec<String>>,
}

impl MockResourceClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, path: &str, object: Value) -> Self {
        self.responses.insert(path.to_string(), object);
        self
    }

    pub fn with_failure(mut self, path: &str, status: u16) -> Self {
        self.failures.insert(
            path.to_string(),
            FetchError::RequestFailed {
                status,
                body: format!("status {}", status),
            },
        );
        self
    }

    pub fn with_delay(mut self, path: &str, millis: u64) -> Self {
        self.delays
            .insert(path.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, p)| p == path)
            .count()
    }

    /// Clusters the calls went to, in call order
    pub fn clusters(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(cluster, _)| cluster.clone())
            .collect()
    }

    pub fn completion_order(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResourceClient for MockResourceClient {
    async fn fetch(
        &self,
        cluster: &str,
        path: &str,
    ) -> std::result::Result<Value, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push((cluster.to_string(), path.to_string()));
        if let Some(delay) = self.delays.get(path) {
            tokio::time::sleep(*delay).await;
        }
        self.completed.lock().unwrap().push(path.to_string());

        if let Some(error) = self.failures.get(path) {
            return Err(error.clone());
        }
        self.responses
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::RequestFailed {
                status: 404,
                body: format!("{} not found", path),
            })
    }
}
