//! PostgreSQL implementation of VieRepository
//!
//! Each call runs a single statement on a connection checked out of the
//! pool for the duration of that call.

use async_trait::async_trait;
use sqlx::PgPool;

use vie::{DomainError, NewVie, Vie, VieRepository};

/// PostgreSQL implementation of VieRepository
pub struct PgVieRepository {
    pool: PgPool,
}

impl PgVieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct VieRow {
    id: i64,
    label: String,
    initial_count: Option<i32>,
}

impl From<VieRow> for Vie {
    fn from(row: VieRow) -> Self {
        Self {
            id: row.id,
            label: row.label,
            initial_count: row.initial_count,
        }
    }
}

fn storage(e: sqlx::Error) -> DomainError {
    DomainError::Repository(e.to_string())
}

#[async_trait]
impl VieRepository for PgVieRepository {
    async fn create(&self, vie: &NewVie) -> Result<Vie, DomainError> {
        let row = sqlx::query_as::<_, VieRow>(
            r#"
            INSERT INTO vies (label, initial_count)
            VALUES ($1, $2)
            RETURNING id, label, initial_count
            "#,
        )
        .bind(&vie.label)
        .bind(vie.initial_count)
        .fetch_one(&self.pool)
        .await
        .map_err(storage)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vie>, DomainError> {
        let row = sqlx::query_as::<_, VieRow>(
            "SELECT id, label, initial_count FROM vies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Vie>, DomainError> {
        let rows =
            sqlx::query_as::<_, VieRow>("SELECT id, label, initial_count FROM vies ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(storage)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, vie: &Vie) -> Result<Vie, DomainError> {
        // Existence check and write in one statement
        let row = sqlx::query_as::<_, VieRow>(
            r#"
            UPDATE vies
            SET label = $2, initial_count = $3
            WHERE id = $1
            RETURNING id, label, initial_count
            "#,
        )
        .bind(vie.id)
        .bind(&vie.label)
        .bind(vie.initial_count)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?;

        row.map(Vie::from)
            .ok_or_else(|| DomainError::not_found("Vie", vie.id))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM vies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vies")
            .fetch_one(&self.pool)
            .await
            .map_err(storage)?;

        Ok(count)
    }
}
