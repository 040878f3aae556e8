//! Vie Repository Port
//!
//! Abstract interface for Vie persistence operations.
//! Implementations perform no validation; every write is visible to the
//! next read as soon as the call returns.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NewVie, Vie};

/// Repository interface for Vie entities
#[async_trait]
pub trait VieRepository: Send + Sync {
    /// Persist a new Vie and return it with its assigned id
    async fn create(&self, vie: &NewVie) -> Result<Vie, DomainError>;

    /// Find a Vie by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Vie>, DomainError>;

    /// Find all Vies, ordered by id
    async fn find_all(&self) -> Result<Vec<Vie>, DomainError>;

    /// Overwrite label and initial_count of an existing Vie.
    ///
    /// Fails with `DomainError::NotFound` when `vie.id` does not exist.
    async fn update(&self, vie: &Vie) -> Result<Vie, DomainError>;

    /// Delete a Vie by ID, returning whether a row was removed
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// Number of stored Vies
    async fn count(&self) -> Result<i64, DomainError>;
}
