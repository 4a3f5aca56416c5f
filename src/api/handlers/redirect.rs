//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Resolution counts a visit as a side effect; a failed count never blocks
/// the redirect.
///
/// # Responses
///
/// - **302 Found** with `Location` set to the original URL
/// - **404 Not Found** (plain text) when the code is unknown
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let destination = state.redirect_service.resolve(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, destination)]))
}
