use super::ApiPaths;
use crate::resource_graph::domain::{ResourceClass, ResourceCoordinates, RootCoordinates};
use crate::shared::error::GraphError;
use std::collections::HashMap;

pub const CLAIM_NAME: &str = "terasky.backstage.io/claim-name";
pub const CLAIM_PLURAL: &str = "terasky.backstage.io/claim-plural";
pub const CLAIM_GROUP: &str = "terasky.backstage.io/claim-group";
pub const CLAIM_VERSION: &str = "terasky.backstage.io/claim-version";
pub const COMPOSITE_NAME: &str = "terasky.backstage.io/composite-name";
pub const COMPOSITE_PLURAL: &str = "terasky.backstage.io/composite-plural";
pub const COMPOSITE_GROUP: &str = "terasky.backstage.io/composite-group";
pub const COMPOSITE_VERSION: &str = "terasky.backstage.io/composite-version";
pub const LABEL_SELECTOR: &str = "backstage.io/kubernetes-label-selector";
pub const MANAGED_BY_LOCATION: &str = "backstage.io/managed-by-location";

/// Label-selector key carrying the claim namespace
const CLAIM_NAMESPACE_LABEL: &str = "crossplane.io/claim-namespace";

/// Derives root coordinates from entity annotations.
///
/// Pure: a missing or malformed annotation makes that root absent and
/// never fails the extraction as a whole.
pub struct IdentityExtractor;

impl IdentityExtractor {
    pub fn extract(annotations: &HashMap<String, String>) -> RootCoordinates {
        Self::extract_with_issues(annotations).0
    }

    /// Like `extract`, also returning why each absent root is absent.
    pub fn extract_with_issues(
        annotations: &HashMap<String, String>,
    ) -> (RootCoordinates, Vec<GraphError>) {
        let mut issues = Vec::new();
        let claim = Self::claim(annotations).map_err(|e| issues.push(e)).ok();
        let composite = Self::composite(annotations)
            .map_err(|e| issues.push(e))
            .ok();
        (RootCoordinates { claim, composite }, issues)
    }

    pub fn claim(annotations: &HashMap<String, String>) -> Result<ResourceCoordinates, GraphError> {
        let class = ResourceClass::Claim;
        let name = Self::required(annotations, CLAIM_NAME, class)?;
        let plural = Self::required(annotations, CLAIM_PLURAL, class)?;
        let group = Self::required(annotations, CLAIM_GROUP, class)?;
        let version = Self::required(annotations, CLAIM_VERSION, class)?;
        let namespace = Self::claim_namespace(annotations).ok_or(GraphError::CoordinateMissing {
            class,
            field: CLAIM_NAMESPACE_LABEL,
        })?;
        let cluster = Self::cluster(annotations, class)?;

        let path = ApiPaths::namespaced(group, version, namespace, plural, name).map_err(|_| {
            GraphError::CoordinateMissing {
                class,
                field: "valid claim path",
            }
        })?;
        Ok(ResourceCoordinates::new(cluster, path))
    }

    pub fn composite(
        annotations: &HashMap<String, String>,
    ) -> Result<ResourceCoordinates, GraphError> {
        let class = ResourceClass::Composite;
        let name = Self::required(annotations, COMPOSITE_NAME, class)?;
        let plural = Self::required(annotations, COMPOSITE_PLURAL, class)?;
        let group = Self::required(annotations, COMPOSITE_GROUP, class)?;
        let version = Self::required(annotations, COMPOSITE_VERSION, class)?;
        let cluster = Self::cluster(annotations, class)?;

        let path = ApiPaths::cluster_scoped(group, version, plural, name).map_err(|_| {
            GraphError::CoordinateMissing {
                class,
                field: "valid composite path",
            }
        })?;
        Ok(ResourceCoordinates::new(cluster, path))
    }

    /// `crossplane.io/claim-namespace=<ns>` inside the comma-separated
    /// label selector.
    fn claim_namespace(annotations: &HashMap<String, String>) -> Option<&str> {
        annotations
            .get(LABEL_SELECTOR)?
            .split(',')
            .map(str::trim)
            .find(|entry| entry.starts_with(CLAIM_NAMESPACE_LABEL))
            .and_then(|entry| entry.split_once('='))
            .map(|(_, ns)| ns.trim())
            .filter(|ns| !ns.is_empty())
    }

    /// Cluster name from a `<type>: <cluster>` location string.
    fn cluster(
        annotations: &HashMap<String, String>,
        class: ResourceClass,
    ) -> Result<String, GraphError> {
        annotations
            .get(MANAGED_BY_LOCATION)
            .and_then(|location| location.split_once(": "))
            .map(|(_, cluster)| cluster.trim())
            .filter(|cluster| !cluster.is_empty())
            .map(str::to_string)
            .ok_or(GraphError::CoordinateMissing {
                class,
                field: MANAGED_BY_LOCATION,
            })
    }

    fn required<'a>(
        annotations: &'a HashMap<String, String>,
        key: &'static str,
        class: ResourceClass,
    ) -> Result<&'a str, GraphError> {
        annotations
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .ok_or(GraphError::CoordinateMissing { class, field: key })
    }
}
