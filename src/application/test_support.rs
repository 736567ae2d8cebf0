//! In-memory cluster and fixtures for application tests.

use crate::ports::outbound::{PermissionGate, ResourceClient};
use crate::resource_graph::domain::{ResourceCoordinates, ResourcePermissions, RootCoordinates};
use crate::shared::error::FetchError;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

pub const CLUSTER: &str = "prod-eu";
pub const CLAIM_PATH: &str = "/apis/platform.example.org/v1alpha1/namespaces/team-a/networks/net";
pub const ROOT_PATH: &str = "/apis/platform.example.org/v1alpha1/xnetworks/net-x";
pub const X_PATH: &str = "/apis/s3.aws.upbound.io/v1beta1/buckets/x";
pub const Y_PATH: &str = "/apis/platform.example.org/v1alpha1/xsubnets/y";
pub const Z_PATH: &str = "/apis/ec2.aws.upbound.io/v1beta1/subnets/z";

/// Cluster serving canned objects by path.
#[derive(Default)]
pub struct FakeCluster {
    objects: HashMap<String, Value>,
    failures: HashMap<String, FetchError>,
    transient: Mutex<HashMap<String, usize>>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
    completed: Mutex<Vec<String>>,
}

impl FakeCluster {
    pub fn with_object(mut self, path: &str, object: Value) -> Self {
        self.objects.insert(path.to_string(), object);
        self
    }

    pub fn with_failure(mut self, path: &str, error: FetchError) -> Self {
        self.failures.insert(path.to_string(), error);
        self
    }

    /// Fails the first `times` requests for `path` with a 503
    pub fn with_transient_failure(self, path: &str, times: usize) -> Self {
        self.transient
            .lock()
            .unwrap()
            .insert(path.to_string(), times);
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
            .filter(|p| p.as_str() == path)
            .count()
    }

    pub fn completion_order(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }

    fn take_transient(&self, path: &str) -> bool {
        let mut transient = self.transient.lock().unwrap();
        match transient.get_mut(path) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                true
            }
            _ => false,
        }
    }
}

#[async_trait]
impl ResourceClient for FakeCluster {
    async fn fetch(&self, _cluster: &str, path: &str) -> Result<Value, FetchError> {
        self.calls.lock().unwrap().push(path.to_string());
        if let Some(delay) = self.delays.get(path) {
            tokio::time::sleep(*delay).await;
        }
        self.completed.lock().unwrap().push(path.to_string());

        if self.take_transient(path) {
            return Err(FetchError::RequestFailed {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        if let Some(error) = self.failures.get(path) {
            return Err(error.clone());
        }
        self.objects
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::RequestFailed {
                status: 404,
                body: format!("{} not found", path),
            })
    }
}

pub struct FixedGate(pub ResourcePermissions);

#[async_trait]
impl PermissionGate for FixedGate {
    async fn permissions(&self) -> ResourcePermissions {
        self.0
    }
}

pub fn ready_conditions() -> Value {
    json!([
        {"type": "Synced", "status": "True"},
        {"type": "Ready", "status": "True"}
    ])
}

pub fn managed(api_version: &str, kind: &str, name: &str) -> Value {
    json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": {"name": name, "uid": format!("uid-{}", name)},
        "status": {"conditions": ready_conditions()}
    })
}

/// `refs` are `(apiVersion, kind, name)` triples
pub fn composite(api_version: &str, kind: &str, name: &str, refs: &[(&str, &str, &str)]) -> Value {
    let refs: Vec<Value> = refs
        .iter()
        .map(|(api_version, kind, name)| {
            json!({"apiVersion": api_version, "kind": kind, "name": name})
        })
        .collect();
    json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": {"name": name, "uid": format!("uid-{}", name)},
        "spec": {"resourceRefs": refs},
        "status": {"conditions": ready_conditions()}
    })
}

pub fn claim() -> Value {
    json!({
        "apiVersion": "platform.example.org/v1alpha1",
        "kind": "Network",
        "metadata": {"name": "net", "namespace": "team-a", "uid": "uid-net"},
        "spec": {"resourceRef": {
            "apiVersion": "platform.example.org/v1alpha1",
            "kind": "XNetwork",
            "name": "net-x"
        }},
        "status": {"conditions": ready_conditions()}
    })
}

/// root composite -> [X (leaf), Y (composite -> [Z (leaf)])]
pub fn scenario_cluster() -> FakeCluster {
    FakeCluster::default()
        .with_object(CLAIM_PATH, claim())
        .with_object(
            ROOT_PATH,
            composite(
                "platform.example.org/v1alpha1",
                "XNetwork",
                "net-x",
                &[
                    ("s3.aws.upbound.io/v1beta1", "Bucket", "x"),
                    ("platform.example.org/v1alpha1", "XSubnet", "y"),
                ],
            ),
        )
        .with_object(X_PATH, managed("s3.aws.upbound.io/v1beta1", "Bucket", "x"))
        .with_object(
            Y_PATH,
            composite(
                "platform.example.org/v1alpha1",
                "XSubnet",
                "y",
                &[("ec2.aws.upbound.io/v1beta1", "Subnet", "z")],
            ),
        )
        .with_object(Z_PATH, managed("ec2.aws.upbound.io/v1beta1", "Subnet", "z"))
}

pub fn composite_only_roots() -> RootCoordinates {
    RootCoordinates {
        claim: None,
        composite: Some(ResourceCoordinates::new(CLUSTER, ROOT_PATH)),
    }
}

pub fn both_roots() -> RootCoordinates {
    RootCoordinates {
        claim: Some(ResourceCoordinates::new(CLUSTER, CLAIM_PATH)),
        composite: Some(ResourceCoordinates::new(CLUSTER, ROOT_PATH)),
    }
}
