//! Handler for the link shortening endpoint.

use axum::{extract::State, Json};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns) the short code for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/very/long/path?q=1" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "vWL1NV",
///   "short_url": "http://localhost:3000/h/vWL1NV",
///   "long_url": "https://example.com/very/long/path?q=1"
/// }
/// ```
///
/// Shortening is idempotent: submitting the same URL again returns the same
/// code.
///
/// # Errors
///
/// Returns 400 Bad Request with a structured error body when the URL is
/// empty, malformed, non-HTTP(S), or has no host; 500 when code generation
/// fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state.link_service.shorten(&payload.url).await?;

    let short_url = format!(
        "{}/h/{}",
        state.base_url.trim_end_matches('/'),
        link.code
    );

    Ok(Json(ShortenResponse {
        code: link.code,
        short_url,
        long_url: payload.url,
    }))
}
