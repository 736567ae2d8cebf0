//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of the visible forest for formatters.

mod forest_read_model;
mod forest_read_model_builder;
mod relative_age;

pub use forest_read_model::{EventLogView, EventView, ForestReadModel, NodeRowView};
pub use forest_read_model_builder::ForestReadModelBuilder;
pub use relative_age::relative_age;
