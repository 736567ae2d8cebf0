/// Application layer - Use cases, the graph view and DTOs
///
/// This layer orchestrates the domain services and talks to the
/// infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;
