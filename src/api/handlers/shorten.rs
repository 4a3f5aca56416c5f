//! Handler for the URL shortening endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};

use crate::api::dto::shorten::{ShortUrlDto, ShortenQuery, ShortenRequest};
use crate::api::handlers::request_base_url;
use crate::application::services::ShortenOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL, or returns the existing record for a known one.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// The URL is taken from the JSON body (`url`, alias `longUrl`) or, when no
/// body is sent, from the `url` query parameter.
///
/// # Responses
///
/// - **201 Created** with the new record (including `id`)
/// - **200 OK** with the existing record when the URL was already shortened
/// - **400 Bad Request** when the URL is missing or invalid
/// - **500 Internal Server Error** on code-space exhaustion or storage failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ShortenQuery>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortUrlDto>), AppError> {
    // Requests without a JSON body fall back to the query parameter.
    let url = payload
        .ok()
        .and_then(|Json(body)| body.url)
        .or(query.url);

    let base_url = request_base_url(&state, &headers);

    match state.shortener_service.shorten(url).await? {
        ShortenOutcome::Created(record) => Ok((
            StatusCode::CREATED,
            Json(ShortUrlDto::created(&record, &base_url)),
        )),
        ShortenOutcome::Existing(record) => Ok((
            StatusCode::OK,
            Json(ShortUrlDto::existing(&record, &base_url)),
        )),
    }
}
