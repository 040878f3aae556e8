//! Value Objects
//!
//! Immutable domain values with built-in validation.

mod label;

pub use label::*;
