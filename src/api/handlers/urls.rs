//! Handler for the URL listing endpoint.

use axum::{Json, extract::State, http::HeaderMap};

use crate::api::dto::shorten::ShortUrlDto;
use crate::api::handlers::request_base_url;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all shortened URLs, newest first.
///
/// # Endpoint
///
/// `GET /api/urls`
pub async fn list_urls_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ShortUrlDto>>, AppError> {
    let base_url = request_base_url(&state, &headers);

    let records = state.shortener_service.list_urls().await?;

    Ok(Json(
        records
            .iter()
            .map(|record| ShortUrlDto::listed(record, &base_url))
            .collect(),
    ))
}
