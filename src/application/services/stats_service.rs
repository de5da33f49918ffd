//! Visit statistics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::repositories::{LinkStore, StatsStore};
use crate::error::AppError;
use crate::utils::url_codec;

/// Aggregated statistics for a single short link.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub code: String,
    /// Decoded original URL the code redirects to.
    pub target_url: String,
    pub visit_count: i64,
    /// Every recorded visit, most recent first.
    pub visits: Vec<Visit>,
}

/// Service for recording visits and reading per-link statistics.
///
/// Reads go through the link store first so statistics are only reported for
/// codes that actually exist; the visit log itself is weakly referenced.
pub struct StatsService<L: LinkStore, S: StatsStore> {
    link_store: Arc<L>,
    stats_store: Arc<S>,
}

impl<L: LinkStore, S: StatsStore> StatsService<L, S> {
    /// Creates a new statistics service.
    pub fn new(link_store: Arc<L>, stats_store: Arc<S>) -> Self {
        Self {
            link_store,
            stats_store,
        }
    }

    /// Records a single visit.
    ///
    /// In production visits arrive via the background worker; this method
    /// exists for direct recording and tests.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record_visit(&self, new_visit: NewVisit) -> Result<Visit, AppError> {
        self.stats_store.record_visit(new_visit).await
    }

    /// Retrieves aggregated statistics for a short code.
    ///
    /// Returns `Ok(None)` when the code was never issued. A code with no
    /// recorded visits reports a zero count and an empty visit list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors or a corrupt stored
    /// URL.
    pub async fn get_stats(&self, code: &str) -> Result<Option<LinkStats>, AppError> {
        let link = match self.link_store.find_by_code(code).await? {
            Some(link) => link,
            None => return Ok(None),
        };

        let target_url = url_codec::decode(&link.encoded_url).map_err(|e| {
            tracing::error!(code = %link.code, error = %e, "stored canonical URL failed to decode");
            AppError::internal("Stored URL is corrupt", json!({ "code": link.code }))
        })?;

        let visit_count = self.stats_store.visit_count(code).await?;
        let visits = self.stats_store.list_visits(code).await?;

        Ok(Some(LinkStats {
            code: link.code,
            target_url,
            visit_count,
            visits,
        }))
    }
}
