//! SQLite implementation of the short link repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;

const SELECT_COLUMNS: &str =
    "id, original_url, short_code, created_at, visits_count, creator_ip, creator_agent";

/// SQLite repository for the `urls` table.
///
/// Uses bound parameters for every value.
pub struct SqliteShortLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteShortLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortLinkRepository for SqliteShortLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let link = sqlx::query_as::<_, ShortLink>(&format!(
            r#"
            INSERT INTO urls (original_url, short_code, created_at, visits_count, creator_ip, creator_agent)
            VALUES (?1, ?2, ?3, 0, ?4, ?5)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(&new_link.original_url)
        .bind(&new_link.short_code)
        .bind(Utc::now())
        .bind(&new_link.creator_ip)
        .bind(&new_link.creator_agent)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortLink>, AppError> {
        let link = sqlx::query_as::<_, ShortLink>(&format!(
            "SELECT {SELECT_COLUMNS} FROM urls WHERE short_code = ?1"
        ))
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortLink>, AppError> {
        let link = sqlx::query_as::<_, ShortLink>(&format!(
            "SELECT {SELECT_COLUMNS} FROM urls WHERE original_url = ?1"
        ))
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn record_visit(&self, short_code: &str) -> Result<Option<ShortLink>, AppError> {
        // Single statement: the increment is applied by SQLite, not read-modify-write.
        let link = sqlx::query_as::<_, ShortLink>(&format!(
            r#"
            UPDATE urls
            SET visits_count = visits_count + 1
            WHERE short_code = ?1
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
