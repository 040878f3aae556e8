//! Vie Operations Port
//!
//! The contract the HTTP controller is written against. Handlers hold an
//! `Arc<dyn VieOperations>` injected at startup.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NewVie, Vie};

#[async_trait]
pub trait VieOperations: Send + Sync {
    async fn create(&self, vie: NewVie) -> Result<Vie, DomainError>;

    /// Absence is `Ok(None)`, not an error
    async fn find_by_id(&self, id: i64) -> Result<Option<Vie>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Vie>, DomainError>;

    /// Fails with `DomainError::NotFound` when `vie.id` does not exist
    async fn update(&self, vie: Vie) -> Result<Vie, DomainError>;

    /// `Ok(false)` when nothing was there to delete
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    async fn count(&self) -> Result<i64, DomainError>;
}
