pub mod health;
pub mod redirect;
pub mod shorten;
pub mod urls;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use urls::list_urls_handler;

use crate::state::AppState;
use axum::http::{HeaderMap, header};

/// Base URL used to build fully-qualified short URLs.
///
/// The configured `BASE_URL` wins; otherwise the request's own `Host` header
/// is used, matching how the service is reached.
pub(crate) fn request_base_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(base_url) = &state.base_url {
        return base_url.trim_end_matches('/').to_string();
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost:3000");

    format!("http://{host}")
}
