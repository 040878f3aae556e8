//! Vie API Data Models
//!
//! Request/response DTOs for the HTTP layer.

mod vie;

pub use vie::*;
