//! In-memory implementation of VieRepository
//!
//! Records live in a `BTreeMap` behind an async `RwLock`; ids start at 1
//! and are never reused.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use vie::{DomainError, NewVie, Vie, VieRepository};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Vie>,
    last_id: i64,
}

/// In-memory implementation of VieRepository
#[derive(Default)]
pub struct InMemoryVieRepository {
    table: RwLock<Table>,
}

impl InMemoryVieRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VieRepository for InMemoryVieRepository {
    async fn create(&self, vie: &NewVie) -> Result<Vie, DomainError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let created = vie.clone().with_id(table.last_id);
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vie>, DomainError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Vie>, DomainError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, vie: &Vie) -> Result<Vie, DomainError> {
        let mut table = self.table.write().await;
        let stored = table
            .rows
            .get_mut(&vie.id)
            .ok_or_else(|| DomainError::not_found("Vie", vie.id))?;
        stored.apply(vie);
        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Ok(self.table.read().await.rows.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_assigned_in_order() {
        let repo = InMemoryVieRepository::new();
        let a = repo.create(&NewVie::new("a", None)).await.unwrap();
        let b = repo.create(&NewVie::new("b", Some(2))).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryVieRepository::new();
        let a = repo.create(&NewVie::new("a", None)).await.unwrap();
        assert!(repo.delete(a.id).await.unwrap());

        let b = repo.create(&NewVie::new("b", None)).await.unwrap();
        assert_eq!(b.id, 2);
        assert_eq!(repo.find_by_id(a.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let repo = InMemoryVieRepository::new();
        let err = repo
            .update(&Vie {
                id: 5,
                label: "x".to_string(),
                initial_count: None,
            })
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_reports_removal() {
        let repo = InMemoryVieRepository::new();
        let a = repo.create(&NewVie::new("a", None)).await.unwrap();

        assert!(repo.delete(a.id).await.unwrap());
        assert!(!repo.delete(a.id).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
