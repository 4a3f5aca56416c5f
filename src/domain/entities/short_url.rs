//! ShortUrl entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A persisted mapping between a short code and an original URL.
///
/// Both `short_code` and `original_url` are unique across all records and
/// immutable once assigned; `visits` is the only field that ever changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub visits: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        visits: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            visits,
            created_at,
        }
    }
}

/// Input data for creating a new record.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub short_code: String,
    pub original_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_short_url_creation() {
        let now = Utc::now();
        let record = ShortUrl::new(
            1,
            "abc1234".to_string(),
            "https://example.com".to_string(),
            0,
            now,
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.short_code, "abc1234");
        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.visits, 0);
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_new_short_url_creation() {
        let new_record = NewShortUrl {
            short_code: "xyz7890".to_string(),
            original_url: "https://rust-lang.org".to_string(),
        };

        assert_eq!(new_record.short_code, "xyz7890");
        assert_eq!(new_record.original_url, "https://rust-lang.org");
    }
}
