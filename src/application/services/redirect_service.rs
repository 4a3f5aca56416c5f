//! Short code resolution for redirects.

use std::sync::Arc;

use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use serde_json::json;

/// Service resolving short codes to their destination URLs.
///
/// Each successful resolution counts a visit. Counting is best-effort: a
/// failed increment is logged and the redirect is served anyway.
pub struct RedirectService<R: ShortUrlRepository> {
    repository: Arc<R>,
}

impl<R: ShortUrlRepository> RedirectService<R> {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves a short code to its destination URL, counting the visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    /// Returns [`AppError::Internal`] on database errors during lookup.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let record = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        if let Err(e) = self.repository.increment_visits(record.id).await {
            tracing::warn!(code, error = %e, "failed to record visit");
        }

        Ok(record.original_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ShortUrl;
    use crate::domain::repositories::MockShortUrlRepository;
    use chrono::Utc;

    fn create_test_record(id: i64, code: &str, url: &str) -> ShortUrl {
        ShortUrl::new(id, code.to_string(), url.to_string(), 0, Utc::now())
    }

    #[tokio::test]
    async fn test_resolve_returns_destination_and_counts_visit() {
        let mut mock_repo = MockShortUrlRepository::new();

        let record = create_test_record(4, "abc1234", "https://example.com/target");
        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "abc1234")
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));

        mock_repo
            .expect_increment_visits()
            .withf(|id| *id == 4)
            .times(1)
            .returning(|_| Ok(()));

        let service = RedirectService::new(Arc::new(mock_repo));

        let destination = service.resolve("abc1234").await.unwrap();
        assert_eq!(destination, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let mut mock_repo = MockShortUrlRepository::new();

        mock_repo.expect_find_by_code().times(1).returning(|_| Ok(None));
        mock_repo.expect_increment_visits().times(0);

        let service = RedirectService::new(Arc::new(mock_repo));

        let result = service.resolve("missing").await;
        let err = result.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Short link not found");
    }

    #[tokio::test]
    async fn test_resolve_serves_redirect_when_increment_fails() {
        let mut mock_repo = MockShortUrlRepository::new();

        let record = create_test_record(4, "abc1234", "https://example.com/target");
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));

        mock_repo
            .expect_increment_visits()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = RedirectService::new(Arc::new(mock_repo));

        let destination = service.resolve("abc1234").await.unwrap();
        assert_eq!(destination, "https://example.com/target");
    }
}
