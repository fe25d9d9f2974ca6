use super::story_store::{StoreError, StoryStore};
use crate::infrastructure::db::{check_connection, DbPool};
use async_trait::async_trait;
use std::sync::Arc;

/// Keeps the serialized library as one row of the `local_store` table
pub struct PostgresStoryStore {
    pool: Arc<DbPool>,
    key: String,
}

impl PostgresStoryStore {
    pub fn new(pool: Arc<DbPool>, key: String) -> Self {
        Self { pool, key }
    }
}

#[async_trait]
impl StoryStore for PostgresStoryStore {
    async fn load(&self) -> Result<Option<String>, StoreError> {
        let pool = self.pool.as_ref();
        let value = sqlx::query_scalar::<_, String>(
            r#"
            SELECT value
            FROM local_store
            WHERE key = $1
            "#,
        )
        .bind(&self.key)
        .fetch_optional(pool)
        .await?;

        Ok(value)
    }

    async fn save(&self, serialized: &str) -> Result<(), StoreError> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            INSERT INTO local_store (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key)
            DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            "#,
        )
        .bind(&self.key)
        .bind(serialized)
        .execute(pool)
        .await?;

        Ok(())
    }

    async fn check(&self) -> Result<(), StoreError> {
        check_connection(&self.pool).await?;
        Ok(())
    }
}
