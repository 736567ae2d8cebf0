use super::ForestSnapshot;
use crate::application::dto::{LoadOutcome, ToggleOutcome};
use crate::application::use_cases::{GraphResolver, Resolution};
use crate::ports::inbound::GraphViewPort;
use crate::ports::outbound::{PermissionGate, ResourceClient};
use crate::resource_graph::domain::{
    LoadState, NodeId, ResourceNode, ResourcePermissions, RootCoordinates,
};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::Mutex;
use tracing::debug;

struct ViewState {
    graph: ForestSnapshot,
    permissions: ResourcePermissions,
    auto_expand_pending: bool,
}

/// GraphView - expansion cache plus visibility state of one forest
///
/// `children` (known) and `expanded` (shown) are separate containers, so
/// collapsing never forgets a resolved list and re-expanding never
/// fetches it again. Every pass carries a generation token; results that
/// land after a newer pass started are dropped.
///
/// The state lock is never held across a fetch. Fetch and cache write
/// for one identity are serialized by a per-identity async lock.
///
/// # Type Parameters
/// * `C` - ResourceClient implementation
/// * `G` - PermissionGate implementation
pub struct GraphView<C, G> {
    client: Arc<C>,
    gate: G,
    auto_expand: bool,
    state: RwLock<ViewState>,
    fetch_locks: DashMap<NodeId, Arc<Mutex<()>>>,
}

impl<C, G> GraphView<C, G>
where
    C: ResourceClient,
    G: PermissionGate,
{
    pub fn new(client: Arc<C>, gate: G) -> Self {
        Self {
            client,
            gate,
            auto_expand: true,
            state: RwLock::new(ViewState {
                graph: ForestSnapshot::empty(0, LoadState::Idle),
                permissions: ResourcePermissions::default(),
                auto_expand_pending: true,
            }),
            fetch_locks: DashMap::new(),
        }
    }

    /// Whether the first successful pass expands the whole forest
    pub fn with_auto_expand(mut self, enabled: bool) -> Self {
        self.auto_expand = enabled;
        self.write().auto_expand_pending = enabled;
        self
    }

    pub fn load_state(&self) -> LoadState {
        self.read().graph.load_state
    }

    fn read(&self) -> RwLockReadGuard<'_, ViewState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ViewState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin_pass(&self, load_state: LoadState) -> u64 {
        let generation = {
            let mut state = self.write();
            let generation = state.graph.generation + 1;
            state.graph = ForestSnapshot::empty(generation, load_state);
            state.auto_expand_pending = self.auto_expand;
            generation
        };
        self.fetch_locks.clear();
        generation
    }

    fn is_cached(&self, id: &NodeId) -> bool {
        self.read().graph.children.contains_key(id)
    }

    fn cached_children(&self, id: &NodeId) -> Vec<ResourceNode> {
        self.read()
            .graph
            .children
            .get(id)
            .cloned()
            .unwrap_or_default()
    }

    /// Resolves and caches the children of `node` unless they are known.
    ///
    /// # Returns
    /// Whether the cluster was asked
    async fn ensure_children(
        &self,
        generation: u64,
        node: &ResourceNode,
        cluster: Option<&str>,
        permissions: ResourcePermissions,
    ) -> bool {
        if self.is_cached(&node.id) {
            return false;
        }
        let lock = self.fetch_locks.entry(node.id.clone()).or_default().clone();
        let _guard = lock.lock().await;
        // Another expansion may have filled it while we waited
        if self.is_cached(&node.id) {
            return false;
        }
        let Some(cluster) = cluster else {
            return false;
        };

        let resolver = GraphResolver::new(Arc::clone(&self.client), permissions);
        let resolution = resolver
            .resolve_children(cluster, node, node.level + 1)
            .await;
        self.apply(generation, node.id.clone(), resolution);
        true
    }

    /// Writes an explicitly requested child list, registered even when
    /// empty, plus its nested lists.
    fn apply(&self, generation: u64, id: NodeId, resolution: Resolution) {
        let mut state = self.write();
        if state.graph.generation != generation {
            debug!(generation, node = %id, "discarding children from a stale pass");
            return;
        }
        state.graph.children.entry(id).or_insert(resolution.nodes);
        for (nested, kids) in resolution.nested {
            state.graph.children.entry(nested).or_insert(kids);
        }
        state.graph.issues.extend(resolution.issues);
    }
}

#[async_trait]
impl<C, G> GraphViewPort for GraphView<C, G>
where
    C: ResourceClient,
    G: PermissionGate,
{
    async fn load(&self, roots: &RootCoordinates) -> LoadOutcome {
        let generation = self.begin_pass(LoadState::Loading);
        let permissions = self.gate.permissions().await;
        let resolver = GraphResolver::new(Arc::clone(&self.client), permissions);
        let resolution = resolver.resolve_roots(roots).await;

        let run_expand = {
            let mut state = self.write();
            if state.graph.generation != generation {
                debug!(generation, "discarding roots from a stale pass");
                return LoadOutcome {
                    generation,
                    state: state.graph.load_state,
                    roots: 0,
                    visible: 0,
                    issues: resolution.issues,
                    discarded: true,
                };
            }

            state.permissions = permissions;
            state.graph.cluster = roots.descendant_cluster().map(str::to_string);
            state.graph.forest = resolution.forest;
            for (id, kids) in resolution.nested {
                state.graph.children.entry(id).or_insert(kids);
            }
            state.graph.issues.extend(resolution.issues);
            state.graph.load_state = if state.graph.forest.is_empty() {
                LoadState::Empty
            } else {
                LoadState::Loaded
            };

            let run_expand =
                state.auto_expand_pending && state.graph.load_state == LoadState::Loaded;
            if run_expand {
                state.auto_expand_pending = false;
            }
            run_expand
        };

        if run_expand {
            self.expand_all().await;
        }

        let state = self.read();
        LoadOutcome {
            generation,
            state: state.graph.load_state,
            roots: state.graph.forest.len(),
            visible: state.graph.count_visible(),
            issues: state.graph.issues.clone(),
            discarded: state.graph.generation != generation,
        }
    }

    async fn toggle(&self, id: &NodeId) -> ToggleOutcome {
        let (generation, node, cluster, permissions) = {
            let mut state = self.write();
            if state.graph.expanded.remove(id) {
                debug!(node = %id, "collapsed");
                return ToggleOutcome::Collapsed;
            }
            let Some(node) = state.graph.find(id).cloned() else {
                debug!(node = %id, "toggle ignored, node is not in the forest");
                return ToggleOutcome::Ignored;
            };
            if !node.is_composite() {
                return ToggleOutcome::Ignored;
            }
            state.graph.expanded.insert(id.clone());
            (
                state.graph.generation,
                node,
                state.graph.cluster.clone(),
                state.permissions,
            )
        };

        let fetched = self
            .ensure_children(generation, &node, cluster.as_deref(), permissions)
            .await;
        ToggleOutcome::Expanded { fetched }
    }

    async fn expand_all(&self) -> usize {
        let (generation, roots, cluster, permissions) = {
            let state = self.read();
            (
                state.graph.generation,
                state.graph.forest.clone(),
                state.graph.cluster.clone(),
                state.permissions,
            )
        };

        let mut marked = 0;
        // Work list of (node, ancestor ids); popped in pre-order
        let mut pending: Vec<(ResourceNode, Vec<NodeId>)> = roots
            .into_iter()
            .rev()
            .map(|root| (root, Vec::new()))
            .collect();

        while let Some((node, ancestors)) = pending.pop() {
            if !node.is_composite() || ancestors.contains(&node.id) {
                continue;
            }
            {
                let mut state = self.write();
                if state.graph.generation != generation {
                    debug!(generation, "expand-all overtaken by a newer pass");
                    return marked;
                }
                if state.graph.expanded.insert(node.id.clone()) {
                    marked += 1;
                }
            }

            self.ensure_children(generation, &node, cluster.as_deref(), permissions)
                .await;

            let kids = self.cached_children(&node.id);
            let mut path = ancestors;
            path.push(node.id.clone());
            pending.extend(kids.into_iter().rev().map(|kid| (kid, path.clone())));
        }

        debug!(generation, marked, "expand-all finished");
        marked
    }

    fn count_visible(&self) -> usize {
        self.read().graph.count_visible()
    }

    fn snapshot(&self) -> ForestSnapshot {
        self.read().graph.clone()
    }

    fn reset(&self) {
        let generation = self.begin_pass(LoadState::Idle);
        debug!(generation, "view reset");
    }
}
