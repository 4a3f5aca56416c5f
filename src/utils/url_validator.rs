//! Submitted URL validation.

use url::Url;

/// Returns true iff `candidate` parses as an absolute URL with scheme
/// `http` or `https`.
///
/// Pure predicate; the accepted string is stored verbatim, so the same
/// submitted URL always maps to the same record.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
