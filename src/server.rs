//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, worker spawning, and the Axum
//! server lifecycle.

use crate::config::Config;
use crate::application::services::{LinkService, StatsService};
use crate::domain::visit_worker::run_visit_worker;
use crate::infrastructure::persistence::{SqliteLinkStore, SqliteStatsStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::ServiceExt;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Schema migrations
/// - Background visit worker
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if the database connection, migration, bind, or server
/// runtime fails.
pub async fn run(config: Config) -> Result<()> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let link_store = Arc::new(SqliteLinkStore::new(pool.clone()));
    let stats_store = Arc::new(SqliteStatsStore::new(pool));

    let link_service = Arc::new(LinkService::new(link_store.clone(), config.hash.clone()));
    let stats_service = Arc::new(StatsService::new(link_store, stats_store.clone()));

    let (visit_tx, visit_rx) = mpsc::channel(config.visit_queue_capacity);
    tokio::spawn(run_visit_worker(visit_rx, stats_store));
    tracing::info!("Visit worker started");

    let state = AppState {
        link_service,
        stats_service,
        visit_tx,
        base_url: config.base_url.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when SIGINT (Ctrl+C) or SIGTERM arrives, letting in-flight
/// requests and pending database writes finish before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server");
}
