//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`      - Create (or return) a short code for a URL
//! - `GET  /h/{code}`     - Redirect to the original URL, recording a visit
//! - `GET  /stats/{code}` - Visit statistics for a code
//! - `GET  /health`       - Liveness check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/h/{code}", get(redirect_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
