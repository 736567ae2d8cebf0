//! Resource graph core - pure domain model and services.
//!
//! Nothing in this module performs I/O. Fetching happens in the
//! application layer through the `ResourceClient` port.
pub mod domain;
pub mod services;
