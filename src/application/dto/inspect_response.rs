use super::LoadOutcome;
use crate::application::view::ForestSnapshot;
use crate::resource_graph::domain::RootCoordinates;
use crate::shared::error::GraphError;

/// InspectResponse - what one inspection of an entity produced
#[derive(Debug, Clone)]
pub struct InspectResponse {
    /// Root coordinates read from the entity annotations
    pub roots: RootCoordinates,
    /// Why a root class had no coordinates
    pub missing_coordinates: Vec<GraphError>,
    pub outcome: LoadOutcome,
    /// View state after the load settled
    pub snapshot: ForestSnapshot,
}
