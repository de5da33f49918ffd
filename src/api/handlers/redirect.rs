//! Handler for short URL redirects.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;
use std::net::SocketAddr;

use crate::domain::entities::VISIT_TIME_FORMAT;
use crate::domain::visit_event::VisitEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL, recording the visit.
///
/// # Endpoint
///
/// `GET /h/{code}`
///
/// # Request Flow
///
/// 1. Resolve the code through the link service
/// 2. Enqueue a visit event (referer, client address, formatted timestamp)
///    for the background worker — only resolvable codes are recorded
/// 3. Return 302 Found with `Location` set to the original URL
///
/// # Visit Tracking
///
/// The event send is fire-and-forget over a bounded channel so the redirect
/// never waits on the database; a full queue drops the visit and logs the
/// loss.
///
/// # Errors
///
/// Returns 404 Not Found with a structured error body when the code was
/// never issued.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, AppError> {
    let target = state
        .link_service
        .unshorten(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

    let referer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let visited_at = Utc::now().format(VISIT_TIME_FORMAT).to_string();

    let event = VisitEvent::new(code, referer, addr.ip().to_string(), visited_at);
    if let Err(e) = state.visit_tx.try_send(event) {
        tracing::error!(error = %e, "dropping visit event");
    }

    Ok((StatusCode::FOUND, [(header::LOCATION, target)]).into_response())
}
