//! Service Ports
//!
//! Use case interfaces the HTTP layer depends on.

mod vie_operations;

pub use vie_operations::*;
