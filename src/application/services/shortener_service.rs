//! Short URL creation and listing service.

use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::is_valid_url;
use serde_json::json;

/// Maximum number of code generation attempts before giving up.
///
/// Exceeding the bound signals that the code space is too crowded for the
/// configured length and is reported as a server-side failure.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Result of a shorten call, distinguishing a fresh record from a
/// previously existing one so the HTTP layer can answer 201 vs 200.
#[derive(Debug)]
pub enum ShortenOutcome {
    Created(ShortUrl),
    Existing(ShortUrl),
}

impl ShortenOutcome {
    pub fn record(&self) -> &ShortUrl {
        match self {
            ShortenOutcome::Created(record) | ShortenOutcome::Existing(record) => record,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, ShortenOutcome::Created(_))
    }
}

/// Service for creating and listing shortened URLs.
///
/// Handles input validation, duplicate detection, and collision-free code
/// allocation. Shortening is idempotent per distinct URL: re-submitting an
/// already-shortened URL returns the existing record untouched.
pub struct ShortenerService<R: ShortUrlRepository> {
    repository: Arc<R>,
    code_length: usize,
}

impl<R: ShortUrlRepository> ShortenerService<R> {
    /// Creates a new shortener service.
    pub fn new(repository: Arc<R>, code_length: usize) -> Self {
        Self {
            repository,
            code_length,
        }
    }

    /// Shortens a URL, creating a record on first sight of it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if no URL was supplied or the URL is
    /// not an absolute http(s) URL. Returns [`AppError::CodeExhaustion`] when
    /// the collision-retry loop runs out of attempts.
    pub async fn shorten(&self, original_url: Option<String>) -> Result<ShortenOutcome, AppError> {
        let original_url = match original_url {
            Some(url) if !url.is_empty() => url,
            _ => {
                return Err(AppError::bad_request(
                    "Missing \"url\" in request body or query",
                    json!({ "field": "url" }),
                ));
            }
        };

        if !is_valid_url(&original_url) {
            return Err(AppError::bad_request(
                "Invalid URL",
                json!({ "url": original_url }),
            ));
        }

        if let Some(existing) = self.repository.find_by_original_url(&original_url).await? {
            return Ok(ShortenOutcome::Existing(existing));
        }

        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code(self.code_length);

            if self.repository.find_by_code(&code).await?.is_some() {
                continue;
            }

            let new_url = NewShortUrl {
                short_code: code,
                original_url: original_url.clone(),
            };

            match self.repository.insert(new_url).await {
                Ok(record) => return Ok(ShortenOutcome::Created(record)),
                Err(AppError::Conflict { .. }) => {
                    // Lost a race. If the same URL was inserted concurrently,
                    // the winner's record is the answer; otherwise the code
                    // collided and a fresh one is worth another attempt.
                    if let Some(existing) =
                        self.repository.find_by_original_url(&original_url).await?
                    {
                        return Ok(ShortenOutcome::Existing(existing));
                    }
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::CodeExhaustion)
    }

    /// Lists all records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_urls(&self) -> Result<Vec<ShortUrl>, AppError> {
        self.repository.list_all().await
    }
}
