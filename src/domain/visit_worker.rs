//! Background worker persisting visit events.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::entities::NewVisit;
use crate::domain::repositories::StatsStore;
use crate::domain::visit_event::VisitEvent;

/// Consumes visit events from the channel and writes them through the stats
/// store until every sender is dropped.
///
/// A failed write loses that one visit; the failure is logged with the code
/// so losses are diagnosable, and the worker moves on to the next event.
pub async fn run_visit_worker<S: StatsStore>(mut rx: mpsc::Receiver<VisitEvent>, store: Arc<S>) {
    while let Some(event) = rx.recv().await {
        let new_visit = NewVisit {
            code: event.code,
            referer: event.referer,
            client_ip: event.client_ip,
            visited_at: event.visited_at,
        };

        if let Err(e) = store.record_visit(new_visit.clone()).await {
            tracing::error!(code = %new_visit.code, error = %e, "failed to record visit");
        }
    }

    tracing::debug!("visit channel closed, worker exiting");
}
