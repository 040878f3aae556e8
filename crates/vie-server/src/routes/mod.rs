//! Vie API Routes
//!
//! - /vies - Vie record management (nested under the configured base path)

pub mod swagger;
pub mod vie;
