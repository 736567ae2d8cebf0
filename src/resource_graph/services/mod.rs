mod api_paths;
mod forest_summarizer;
mod identity_extractor;
mod node_materializer;
mod pluralizer;
mod tree_flattener;
mod visible_counter;

pub use api_paths::ApiPaths;
pub use forest_summarizer::{ForestSummarizer, ForestSummary};
pub use identity_extractor::IdentityExtractor;
pub use node_materializer::{NodeMaterializer, Placement};
pub use pluralizer::Pluralizer;
pub use tree_flattener::{TreeFlattener, TreeRow};
pub use visible_counter::VisibleCounter;

/// Annotation keys read from the owning entity
pub mod annotations {
    pub use super::identity_extractor::{
        CLAIM_GROUP, CLAIM_NAME, CLAIM_PLURAL, CLAIM_VERSION, COMPOSITE_GROUP, COMPOSITE_NAME,
        COMPOSITE_PLURAL, COMPOSITE_VERSION, LABEL_SELECTOR, MANAGED_BY_LOCATION,
    };
}
