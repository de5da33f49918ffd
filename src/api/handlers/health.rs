//! Health check handler.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// Reports service liveness.
///
/// # Endpoint
///
/// `GET /health`
///
/// The visit queue is the only component that can degrade independently of
/// the request path: a closed channel means the background worker is gone
/// and visits are being lost.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let visit_queue_open = !state.visit_tx.is_closed();

    Json(json!({
        "status": if visit_queue_open { "ok" } else { "degraded" },
        "visit_queue_open": visit_queue_open,
    }))
}
