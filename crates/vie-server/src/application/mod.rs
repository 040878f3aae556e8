//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations on top of the repositories.

mod vie_service;

pub use vie_service::VieService;
