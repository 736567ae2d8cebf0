/// Mock implementations for testing
mod mock_permission_gate;
mod mock_progress_reporter;
mod mock_resource_client;

pub use mock_permission_gate::MockPermissionGate;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_resource_client::MockResourceClient;
