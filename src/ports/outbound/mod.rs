/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the cluster, the catalog entity, the console and the output.
pub mod entity_reader;
pub mod formatter;
pub mod output_presenter;
pub mod permission_gate;
pub mod progress_reporter;
pub mod resource_client;

pub use entity_reader::EntityReader;
pub use formatter::ForestFormatter;
pub use output_presenter::OutputPresenter;
pub use permission_gate::PermissionGate;
pub use progress_reporter::ProgressReporter;
pub use resource_client::ResourceClient;
