//! Test doubles shared by unit tests

use async_trait::async_trait;

use vie::{DomainError, NewVie, Vie, VieRepository};

/// Repository whose every call fails like a lost database connection
pub struct FailingVieRepository;

fn fault() -> DomainError {
    DomainError::Repository("connection refused".to_string())
}

#[async_trait]
impl VieRepository for FailingVieRepository {
    async fn create(&self, _vie: &NewVie) -> Result<Vie, DomainError> {
        Err(fault())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Vie>, DomainError> {
        Err(fault())
    }

    async fn find_all(&self) -> Result<Vec<Vie>, DomainError> {
        Err(fault())
    }

    async fn update(&self, _vie: &Vie) -> Result<Vie, DomainError> {
        Err(fault())
    }

    async fn delete(&self, _id: i64) -> Result<bool, DomainError> {
        Err(fault())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Err(fault())
    }
}
