//! API route configuration.

use crate::api::handlers::{list_urls_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /shorten` - Shorten a URL (idempotent per distinct URL)
/// - `GET  /urls`    - List all shortened URLs, newest first
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler))
}
