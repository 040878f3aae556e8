//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with storage and how the HTTP layer reaches use cases.
//!
//! Implementations of these traits live in the server crate.

pub mod repositories;
pub mod services;

// Re-exports
pub use repositories::*;
pub use services::*;
