//! Infrastructure Adapters
//!
//! Implementations of domain ports for storage backends.

pub mod memory;
pub mod postgres;

// Re-exports
pub use memory::InMemoryVieRepository;
pub use postgres::PgVieRepository;
