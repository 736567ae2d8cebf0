use super::Pluralizer;
use crate::resource_graph::domain::ChildRef;
use crate::shared::security::validate_path_segment;
use crate::shared::Result;

/// Builds the Kubernetes REST paths the resolver fetches.
pub struct ApiPaths;

impl ApiPaths {
    /// `/apis/{group}/{version}/namespaces/{namespace}/{plural}/{name}`
    pub fn namespaced(
        group: &str,
        version: &str,
        namespace: &str,
        plural: &str,
        name: &str,
    ) -> Result<String> {
        validate_path_segment(namespace, "Namespace")?;
        let base = Self::collection_base(Some(group), version)?;
        validate_path_segment(plural, "Resource plural")?;
        validate_path_segment(name, "Resource name")?;
        Ok(format!(
            "{}/namespaces/{}/{}/{}",
            base, namespace, plural, name
        ))
    }

    /// `/apis/{group}/{version}/{plural}/{name}`
    pub fn cluster_scoped(group: &str, version: &str, plural: &str, name: &str) -> Result<String> {
        let base = Self::collection_base(Some(group), version)?;
        validate_path_segment(plural, "Resource plural")?;
        validate_path_segment(name, "Resource name")?;
        Ok(format!("{}/{}/{}", base, plural, name))
    }

    /// Path of the object a child reference points at. The kind is
    /// pluralized; a namespaced reference yields a namespaced path.
    pub fn child(reference: &ChildRef) -> Result<String> {
        let (group, version) = reference.group_version();
        let base = Self::collection_base(group, version)?;
        let plural = Pluralizer::plural(&reference.kind);
        validate_path_segment(&plural, "Resource kind")?;
        validate_path_segment(&reference.name, "Resource name")?;

        match reference.namespace.as_deref() {
            Some(namespace) if !namespace.is_empty() => {
                validate_path_segment(namespace, "Namespace")?;
                Ok(format!(
                    "{}/namespaces/{}/{}/{}",
                    base, namespace, plural, reference.name
                ))
            }
            _ => Ok(format!("{}/{}/{}", base, plural, reference.name)),
        }
    }

    /// Event list for one involved object. Cluster-scoped objects use the
    /// cluster-wide event list.
    pub fn events(namespace: Option<&str>, name: &str) -> Result<String> {
        validate_path_segment(name, "Resource name")?;
        let selector = urlencoding::encode(&format!("involvedObject.name={}", name)).into_owned();
        match namespace {
            Some(ns) if !ns.is_empty() => {
                validate_path_segment(ns, "Namespace")?;
                Ok(format!(
                    "/api/v1/namespaces/{}/events?fieldSelector={}",
                    ns, selector
                ))
            }
            _ => Ok(format!("/api/v1/events?fieldSelector={}", selector)),
        }
    }

    fn collection_base(group: Option<&str>, version: &str) -> Result<String> {
        validate_path_segment(version, "API version")?;
        match group {
            Some(group) => {
                validate_path_segment(group, "API group")?;
                Ok(format!("/apis/{}/{}", group, version))
            }
            None => Ok(format!("/api/{}", version)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaced_claim_path() {
        let path = ApiPaths::namespaced(
            "platform.example.org",
            "v1alpha1",
            "team-a",
            "networks",
            "net",
        )
        .unwrap();
        assert_eq!(
            path,
            "/apis/platform.example.org/v1alpha1/namespaces/team-a/networks/net"
        );
    }

    #[test]
    fn test_cluster_scoped_composite_path() {
        let path =
            ApiPaths::cluster_scoped("platform.example.org", "v1alpha1", "xnetworks", "net-abc")
                .unwrap();
        assert_eq!(path, "/apis/platform.example.org/v1alpha1/xnetworks/net-abc");
    }

    #[test]
    fn test_child_path_pluralizes_kind() {
        let reference = ChildRef::new("iam.aws.upbound.io/v1beta1", "Policy", "net-abc-policy");
        assert_eq!(
            ApiPaths::child(&reference).unwrap(),
            "/apis/iam.aws.upbound.io/v1beta1/policies/net-abc-policy"
        );
    }

    #[test]
    fn test_child_path_core_group() {
        let reference = ChildRef::new("v1", "ConfigMap", "settings");
        assert_eq!(
            ApiPaths::child(&reference).unwrap(),
            "/api/v1/configmaps/settings"
        );
    }

    #[test]
    fn test_child_path_namespaced_reference() {
        let mut reference = ChildRef::new("kubernetes.crossplane.io/v1alpha2", "Object", "cm");
        reference.namespace = Some("apps".to_string());
        assert_eq!(
            ApiPaths::child(&reference).unwrap(),
            "/apis/kubernetes.crossplane.io/v1alpha2/namespaces/apps/objects/cm"
        );
    }

    #[test]
    fn test_child_path_rejects_injected_name() {
        let reference = ChildRef::new("s3.aws.upbound.io/v1beta1", "Bucket", "../../secrets");
        assert!(ApiPaths::child(&reference).is_err());
    }

    #[test]
    fn test_events_paths() {
        assert_eq!(
            ApiPaths::events(Some("team-a"), "net").unwrap(),
            "/api/v1/namespaces/team-a/events?fieldSelector=involvedObject.name%3Dnet"
        );
        assert_eq!(
            ApiPaths::events(None, "net-abc").unwrap(),
            "/api/v1/events?fieldSelector=involvedObject.name%3Dnet-abc"
        );
    }
}
