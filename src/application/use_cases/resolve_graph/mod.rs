use crate::ports::outbound::ResourceClient;
use crate::resource_graph::domain::{
    ChildRef, NodeId, RawResource, ResourceClass, ResourceCoordinates, ResourceNode,
    ResourcePermissions, RootCoordinates,
};
use crate::resource_graph::services::{ApiPaths, NodeMaterializer, Placement};
use crate::shared::error::GraphError;
use futures::future::join_all;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, warn};

/// Deepest level the resolver descends to. Composition graphs are a
/// handful of levels deep; anything past this is a reference loop.
pub const MAX_DEPTH: usize = 100;

/// Subtree produced by one `resolve_children` call.
///
/// The caller owns the cache and writes `nested` into it; the resolver
/// itself never mutates shared state.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Direct children in reference order, failed siblings excluded
    pub nodes: Vec<ResourceNode>,
    /// Resolved child lists of composite descendants with at least one
    /// surviving child, parents before their descendants
    pub nested: Vec<(NodeId, Vec<ResourceNode>)>,
    pub issues: Vec<GraphError>,
}

/// Result of resolving the forest roots.
#[derive(Debug, Default)]
pub struct RootResolution {
    /// `[claim?, composite?]`
    pub forest: Vec<ResourceNode>,
    /// Child lists to cache, including the root composite's own list
    pub nested: Vec<(NodeId, Vec<ResourceNode>)>,
    pub issues: Vec<GraphError>,
}

type BoxedResolution<'a> = Pin<Box<dyn Future<Output = Resolution> + Send + 'a>>;

/// GraphResolver - discovers the resource tree below the forest roots
///
/// Sibling references are fetched concurrently and reassembled in
/// reference order. Descent into composite children proceeds one child at
/// a time. A failed fetch removes only its own branch.
///
/// # Type Parameters
/// * `C` - ResourceClient implementation
pub struct GraphResolver<C> {
    client: Arc<C>,
    permissions: ResourcePermissions,
}

impl<C: ResourceClient> GraphResolver<C> {
    pub fn new(client: Arc<C>, permissions: ResourcePermissions) -> Self {
        Self {
            client,
            permissions,
        }
    }

    /// Fetches the root claim and root composite in parallel, then
    /// resolves the composite's children at level 1.
    pub async fn resolve_roots(&self, roots: &RootCoordinates) -> RootResolution {
        let mut resolution = RootResolution::default();

        let (claim, composite) = tokio::join!(
            self.fetch_root(roots.claim.as_ref(), ResourceClass::Claim),
            self.fetch_root(roots.composite.as_ref(), ResourceClass::Composite),
        );

        let claim = Self::settle(claim, &mut resolution.issues);
        let composite = Self::settle(composite, &mut resolution.issues);
        resolution.forest.extend(claim);

        if let Some(composite) = composite {
            if let Some(cluster) = roots.descendant_cluster() {
                let children = self.resolve_children(cluster, &composite, 1).await;
                resolution.nested.push((composite.id.clone(), children.nodes));
                resolution.nested.extend(children.nested);
                resolution.issues.extend(children.issues);
            }
            resolution.forest.push(composite);
        }

        resolution
    }

    /// Resolves the children of `node`, placing them at `level`, and
    /// recursively the children of every composite among them.
    pub async fn resolve_children(
        &self,
        cluster: &str,
        node: &ResourceNode,
        level: usize,
    ) -> Resolution {
        if node.child_refs.is_empty() {
            return Resolution::default();
        }
        if !self.permissions.allows(ResourceClass::Managed) {
            let issue = GraphError::PermissionDenied {
                class: ResourceClass::Managed,
            };
            debug!(parent = %node.id, "{}", issue);
            return Resolution {
                issues: vec![issue],
                ..Default::default()
            };
        }

        let mut ancestors = Vec::new();
        self.descend(cluster, node, level, &mut ancestors).await
    }

    fn descend<'a>(
        &'a self,
        cluster: &'a str,
        parent: &'a ResourceNode,
        level: usize,
        ancestors: &'a mut Vec<NodeId>,
    ) -> BoxedResolution<'a> {
        Box::pin(async move {
            let mut resolution = Resolution::default();
            if parent.child_refs.is_empty() {
                return resolution;
            }
            if level > MAX_DEPTH {
                warn!(parent = %parent.id, level, "maximum resolution depth exceeded");
                return resolution;
            }

            // Fan out, then fan in; join_all yields in submission order
            let fetches = parent
                .child_refs
                .iter()
                .map(|reference| self.fetch_child(cluster, reference));
            let mut survivors = Vec::with_capacity(parent.child_refs.len());
            for fetched in join_all(fetches).await {
                match fetched {
                    Ok(raw) => survivors.push(raw),
                    Err(issue) => {
                        warn!(cluster, parent = %parent.id, "{}", issue);
                        resolution.issues.push(issue);
                    }
                }
            }

            let last = survivors.len().saturating_sub(1);
            let children: Vec<ResourceNode> = survivors
                .into_iter()
                .enumerate()
                .map(|(index, raw)| {
                    NodeMaterializer::materialize(
                        raw,
                        Placement::Child {
                            level,
                            parent_id: parent.id.clone(),
                            is_last_child: index == last,
                        },
                    )
                })
                .collect();

            ancestors.push(parent.id.clone());
            for child in children.iter().filter(|c| c.is_composite()) {
                if ancestors.contains(&child.id) {
                    debug!(node = %child.id, "reference loop, not descending");
                    continue;
                }
                let below = self.descend(cluster, child, level + 1, ancestors).await;
                if !below.nodes.is_empty() {
                    resolution.nested.push((child.id.clone(), below.nodes));
                }
                resolution.nested.extend(below.nested);
                resolution.issues.extend(below.issues);
            }
            ancestors.pop();

            resolution.nodes = children;
            resolution
        })
    }

    fn settle(
        fetched: Result<Option<ResourceNode>, GraphError>,
        issues: &mut Vec<GraphError>,
    ) -> Option<ResourceNode> {
        fetched.unwrap_or_else(|issue| {
            issues.push(issue);
            None
        })
    }

    async fn fetch_child(&self, cluster: &str, reference: &ChildRef) -> Result<RawResource, GraphError> {
        let path = ApiPaths::child(reference).map_err(|e| GraphError::InvalidResource {
            path: format!("{}/{}", reference.kind, reference.name),
            details: e.to_string(),
        })?;
        self.fetch_raw(cluster, path).await
    }

    async fn fetch_root(
        &self,
        coordinates: Option<&ResourceCoordinates>,
        class: ResourceClass,
    ) -> Result<Option<ResourceNode>, GraphError> {
        let Some(coordinates) = coordinates else {
            return Ok(None);
        };
        if !self.permissions.allows(class) {
            let issue = GraphError::PermissionDenied { class };
            debug!("{}", issue);
            return Err(issue);
        }

        let raw = self
            .fetch_raw(&coordinates.cluster, coordinates.api_path.clone())
            .await
            .inspect_err(|issue| warn!(cluster = %coordinates.cluster, "{}", issue))?;
        let placement = match class {
            ResourceClass::Claim => Placement::RootClaim,
            _ => Placement::RootComposite,
        };
        Ok(Some(NodeMaterializer::materialize(raw, placement)))
    }

    async fn fetch_raw(&self, cluster: &str, path: String) -> Result<RawResource, GraphError> {
        let value = match self.client.fetch(cluster, &path).await {
            Ok(value) => value,
            Err(source) => return Err(GraphError::BranchFetchFailed { path, source }),
        };
        RawResource::from_value(value).map_err(|e| GraphError::InvalidResource {
            path,
            details: e.to_string(),
        })
    }
}
