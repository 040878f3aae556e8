//! Domain Entities
//!
//! - Vie: a labeled record with an optional initial count

mod vie;

pub use vie::*;
