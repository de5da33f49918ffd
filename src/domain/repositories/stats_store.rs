//! Store trait for visit events and counters.

use crate::domain::entities::{NewVisit, Visit};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for visit tracking.
///
/// Handles both the append-only visit log and the per-code visit counter.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteStatsStore`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsStore: Send + Sync {
    /// Records one visit: appends an immutable visit row and increments the
    /// code's counter, creating it at 1 when absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_visit(&self, new_visit: NewVisit) -> Result<Visit, AppError>;

    /// Lists every visit for a code, most recent first (reverse insertion
    /// order). The ordering is a user-facing contract: stats consumers show
    /// the newest visit at the top.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_visits(&self, code: &str) -> Result<Vec<Visit>, AppError>;

    /// Total visits recorded for a code; 0 when no counter row exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn visit_count(&self, code: &str) -> Result<i64, AppError>;
}
