//! DTOs for the shortening and listing endpoints.

use crate::domain::entities::ShortUrl;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/shorten`.
///
/// The original URL may arrive as `url` or under the `longUrl` alias.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenRequest {
    #[serde(default, alias = "longUrl")]
    pub url: Option<String>,
}

/// Query-string fallback for `POST /api/shorten?url=...`.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenQuery {
    pub url: Option<String>,
}

/// Wire representation of a short URL record.
///
/// `id` is serialized only on the create path; responses for an
/// already-shortened URL and list entries follow their own constructors.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub visits: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortUrlDto {
    /// DTO for a freshly created record (includes `id`).
    pub fn created(record: &ShortUrl, base_url: &str) -> Self {
        Self::build(record, base_url, true)
    }

    /// DTO for an already existing record (`id` omitted).
    pub fn existing(record: &ShortUrl, base_url: &str) -> Self {
        Self::build(record, base_url, false)
    }

    /// DTO for a list entry (includes `id`).
    pub fn listed(record: &ShortUrl, base_url: &str) -> Self {
        Self::build(record, base_url, true)
    }

    fn build(record: &ShortUrl, base_url: &str, include_id: bool) -> Self {
        Self {
            id: include_id.then_some(record.id),
            short_code: record.short_code.clone(),
            short_url: format!("{}/{}", base_url.trim_end_matches('/'), record.short_code),
            original_url: record.original_url.clone(),
            visits: record.visits,
            created_at: record.created_at,
        }
    }
}
