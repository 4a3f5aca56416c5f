//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the short URL store.
///
/// Lookups by short code and by original URL, insertion, atomic visit
/// counting, and a full listing ordered newest first.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteShortUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Inserts a new record with `visits = 0` and the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code or the original URL
    /// already exists. Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortUrl))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Finds a record by its original URL.
    ///
    /// Used to detect that a URL has already been shortened.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError>;

    /// Increments the visit counter of a record by exactly 1.
    ///
    /// Executed as a single `UPDATE` statement, so concurrent increments on
    /// the same record do not lose updates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_visits(&self, id: i64) -> Result<(), AppError>;

    /// Lists all records, newest `created_at` first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<ShortUrl>, AppError>;
}
