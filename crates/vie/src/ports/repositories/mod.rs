//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod vie_repository;

pub use vie_repository::*;
