/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod inspect_response;
mod outcomes;
mod output_format;

pub use inspect_response::InspectResponse;
pub use outcomes::{LoadOutcome, ToggleOutcome};
pub use output_format::OutputFormat;
