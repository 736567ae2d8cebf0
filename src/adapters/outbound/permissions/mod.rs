/// Permission adapters
mod static_gate;

pub use static_gate::StaticPermissionGate;
