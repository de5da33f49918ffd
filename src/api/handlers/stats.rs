//! Handler for per-link statistics.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Reports visit statistics for a short code.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Response
///
/// An unknown code reports `{ "exists": false, "code": "..." }`; a known
/// code reports the decoded target URL, the total visit count, and every
/// recorded visit newest-first:
///
/// ```json
/// {
///   "exists": true,
///   "code": "vWL1NV",
///   "target": "https://example.com",
///   "visit_count": 3,
///   "visits": [
///     { "referer": "", "client_ip": "203.0.113.9", "visited_at": "2026-08-07 13:40:00" }
///   ]
/// }
/// ```
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    match state.stats_service.get_stats(&code).await? {
        Some(stats) => Ok(Json(StatsResponse::found(stats))),
        None => Ok(Json(StatsResponse::not_found(code))),
    }
}
