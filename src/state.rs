//! Shared application state injected into all handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{LinkService, StatsService};
use crate::domain::visit_event::VisitEvent;
use crate::infrastructure::persistence::{SqliteLinkStore, SqliteStatsStore};

/// Application state shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkStore>>,
    pub stats_service: Arc<StatsService<SqliteLinkStore, SqliteStatsStore>>,
    /// Producer side of the visit event channel drained by the background
    /// worker.
    pub visit_tx: mpsc::Sender<VisitEvent>,
    /// Public base URL used to build short URLs in responses.
    pub base_url: String,
}
