//! Shared application state injected into handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{RedirectService, ShortenerService};
use crate::infrastructure::persistence::SqliteShortUrlRepository;

/// Application state shared across request handlers.
///
/// Built once by [`crate::server::run`]; the services own the repository,
/// the raw pool is kept for health checks.
#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<ShortenerService<SqliteShortUrlRepository>>,
    pub redirect_service: Arc<RedirectService<SqliteShortUrlRepository>>,
    pub db: SqlitePool,
    /// Configured public base URL; `None` means derive from the request host.
    pub base_url: Option<String>,
}
