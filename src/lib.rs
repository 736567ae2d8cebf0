//! xpgraph - inspect Crossplane resource trees
//!
//! Given the annotations of a catalog entity, this library locates the
//! Crossplane claim and composite resource in a remote cluster, walks
//! the composed resources below them and keeps the result in a lazily
//! expandable view, following hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`resource_graph`): resource model and pure algorithms
//! - **Application Layer** (`application`): resolver, graph view, use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use xpgraph::prelude::*;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let annotations = FileSystemReader::new().read_annotations(Path::new("catalog-info.yaml"))?;
//! let client = Arc::new(KubeProxyClient::new(ProxySettings {
//!     proxy_url: Some("http://localhost:7007/api/kubernetes/proxy".to_string()),
//!     ..Default::default()
//! })?);
//! let view = GraphView::new(client, StaticPermissionGate::allow_all());
//!
//! // Resolve and expand everything
//! let use_case = InspectGraphUseCase::new(view, StderrProgressReporter::new());
//! let response = use_case.execute(&annotations).await;
//!
//! // Format output
//! let model = ForestReadModelBuilder::build(&response.snapshot, chrono::Utc::now());
//! println!("{}", TreeFormatter::new(false).format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod resource_graph;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TreeFormatter};
    pub use crate::adapters::outbound::network::{KubeProxyClient, ProxySettings};
    pub use crate::adapters::outbound::permissions::StaticPermissionGate;
    pub use crate::application::dto::{InspectResponse, LoadOutcome, OutputFormat, ToggleOutcome};
    pub use crate::application::read_models::{ForestReadModel, ForestReadModelBuilder};
    pub use crate::application::use_cases::{
        FetchEventsUseCase, GraphResolver, InspectGraphUseCase,
    };
    pub use crate::application::view::{ForestSnapshot, GraphView};
    pub use crate::ports::inbound::GraphViewPort;
    pub use crate::ports::outbound::{
        EntityReader, ForestFormatter, OutputPresenter, PermissionGate, ProgressReporter,
        ResourceClient,
    };
    pub use crate::resource_graph::domain::{
        KindClass, LoadState, NodeId, NodeState, ResourceCoordinates, ResourceNode,
        ResourcePermissions, RootCoordinates,
    };
    pub use crate::resource_graph::services::IdentityExtractor;
    pub use crate::shared::error::{FetchError, GraphError};
    pub use crate::shared::Result;
}
