//! Vie Application Service (Use Case)
//!
//! Orchestrates store calls for Vie management and logs the lifecycle of
//! every operation.

use async_trait::async_trait;
use std::sync::Arc;

use vie::{DomainError, NewVie, Vie, VieOperations, VieRepository};

/// Application service for Vie operations
pub struct VieService<R: VieRepository> {
    repo: Arc<R>,
}

impl<R: VieRepository> VieService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

/// Log a storage failure and hand the error back unchanged
fn log_failure(action: &str, e: DomainError) -> DomainError {
    if e.is_not_found() {
        tracing::warn!("{}: {}", action, e);
    } else {
        tracing::error!("Error {}: {}", action, e);
    }
    e
}

#[async_trait]
impl<R: VieRepository> VieOperations for VieService<R> {
    async fn create(&self, vie: NewVie) -> Result<Vie, DomainError> {
        tracing::info!("Creating new Vie: label='{}'", vie.label);

        let created = self
            .repo
            .create(&vie)
            .await
            .map_err(|e| log_failure("creating Vie", e))?;

        tracing::info!("Vie created successfully with ID: {}", created.id);
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vie>, DomainError> {
        tracing::info!("Finding Vie with ID: {}", id);

        let vie = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| log_failure("finding Vie", e))?;

        if vie.is_none() {
            tracing::warn!("Vie not found with ID: {}", id);
        }
        Ok(vie)
    }

    async fn find_all(&self) -> Result<Vec<Vie>, DomainError> {
        tracing::info!("Fetching all Vies");

        let vies = self
            .repo
            .find_all()
            .await
            .map_err(|e| log_failure("fetching all Vies", e))?;

        tracing::info!("Found {} Vies", vies.len());
        Ok(vies)
    }

    async fn update(&self, vie: Vie) -> Result<Vie, DomainError> {
        tracing::info!("Updating Vie with ID: {}", vie.id);

        let mut existing = self
            .repo
            .find_by_id(vie.id)
            .await
            .map_err(|e| log_failure("updating Vie", e))?
            .ok_or_else(|| {
                tracing::warn!("Vie not found for update with ID: {}", vie.id);
                DomainError::not_found("Vie", vie.id)
            })?;

        // Only label and initial_count are writable
        existing.apply(&vie);

        let updated = self
            .repo
            .update(&existing)
            .await
            .map_err(|e| log_failure("updating Vie", e))?;

        tracing::info!("Vie updated successfully: {}", updated);
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        tracing::info!("Deleting Vie with ID: {}", id);

        let existing = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| log_failure("deleting Vie", e))?;

        if existing.is_none() {
            tracing::warn!("Vie not found for deletion with ID: {}", id);
            return Ok(false);
        }

        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| log_failure("deleting Vie", e))?;

        if deleted {
            tracing::info!("Deleted Vie: {}", id);
        } else {
            tracing::warn!("Vie {} vanished before deletion", id);
        }
        Ok(deleted)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        tracing::info!("Counting all Vies");

        let count = self
            .repo
            .count()
            .await
            .map_err(|e| log_failure("counting Vies", e))?;

        tracing::info!("Total Vies: {}", count);
        Ok(count)
    }
}
