//! PostgreSQL Repository Implementations

mod vie_repository;

pub use vie_repository::PgVieRepository;
