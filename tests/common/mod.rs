#![allow(dead_code)]

use chrono::{DateTime, Utc};
use shortlink::application::services::{RedirectService, ShortenerService};
use shortlink::infrastructure::persistence::SqliteShortUrlRepository;
use shortlink::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

pub const TEST_CODE_LENGTH: usize = 7;

/// In-memory SQLite pool with migrations applied.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    pool
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteShortUrlRepository::new(Arc::new(pool.clone())));

    AppState {
        shortener_service: Arc::new(ShortenerService::new(repository.clone(), TEST_CODE_LENGTH)),
        redirect_service: Arc::new(RedirectService::new(repository)),
        db: pool,
        base_url: Some("http://sho.rt".to_string()),
    }
}

pub async fn insert_test_url(pool: &SqlitePool, code: &str, url: &str) {
    insert_test_url_at(pool, code, url, Utc::now()).await;
}

pub async fn insert_test_url_at(
    pool: &SqlitePool,
    code: &str,
    url: &str,
    created_at: DateTime<Utc>,
) {
    sqlx::query(
        "INSERT INTO urls (short_code, original_url, visits, created_at) VALUES (?1, ?2, 0, ?3)",
    )
    .bind(code)
    .bind(url)
    .bind(created_at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn get_visits(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT visits FROM urls WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn get_id(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT id FROM urls WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
