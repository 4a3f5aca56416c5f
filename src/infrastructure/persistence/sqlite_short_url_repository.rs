//! SQLite implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// SQLite repository for short URL storage and retrieval.
///
/// Uses bound parameters throughout for SQL injection protection. Uniqueness
/// of `short_code` and `original_url` is enforced by unique indexes; a
/// violated index surfaces as [`AppError::Conflict`] through the sqlx error
/// mapping.
pub struct SqliteShortUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

/// Database row shape, converted into the domain entity at the boundary.
#[derive(sqlx::FromRow)]
struct ShortUrlRow {
    id: i64,
    short_code: String,
    original_url: String,
    visits: i64,
    created_at: DateTime<Utc>,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(row: ShortUrlRow) -> Self {
        ShortUrl::new(
            row.id,
            row.short_code,
            row.original_url,
            row.visits,
            row.created_at,
        )
    }
}

#[async_trait]
impl ShortUrlRepository for SqliteShortUrlRepository {
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            INSERT INTO urls (short_code, original_url, visits, created_at)
            VALUES (?1, ?2, 0, ?3)
            RETURNING id, short_code, original_url, visits, created_at
            "#,
        )
        .bind(&new_url.short_code)
        .bind(&new_url.original_url)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, short_code, original_url, visits, created_at
            FROM urls
            WHERE short_code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, short_code, original_url, visits, created_at
            FROM urls
            WHERE original_url = ?1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_visits(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("UPDATE urls SET visits = visits + 1 WHERE id = ?1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ShortUrl>, AppError> {
        // id breaks ties between records created within the same instant.
        let rows = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, short_code, original_url, visits, created_at
            FROM urls
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
