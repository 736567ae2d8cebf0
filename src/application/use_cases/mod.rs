/// Use cases module containing application business logic orchestration
mod fetch_events;
mod inspect_graph;
mod resolve_graph;

pub use fetch_events::FetchEventsUseCase;
pub use inspect_graph::InspectGraphUseCase;
pub use resolve_graph::{GraphResolver, Resolution, RootResolution, MAX_DEPTH};
