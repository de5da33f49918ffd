//! Store trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Error returned by [`LinkStore::insert`].
///
/// Uniqueness violations are classified per column so callers can recover:
/// a duplicate code means a concurrent writer claimed the candidate between
/// the probe and the insert (retry with the next salt attempt); a duplicate
/// URL means the same URL was shortened concurrently (re-read the winner's
/// row and return it).
#[derive(Debug, thiserror::Error)]
pub enum InsertError {
    #[error("short code already exists")]
    DuplicateCode,

    #[error("url already shortened")]
    DuplicateUrl,

    #[error(transparent)]
    Store(#[from] AppError),
}

/// Store interface for the code ⇄ canonical URL mapping.
///
/// Both lookup directions have at-most-one-row semantics, backed by UNIQUE
/// constraints in the concrete implementation. Records are immutable once
/// inserted; no operation updates or deletes them.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkStore`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Inserts a new short link.
    ///
    /// The insert is the linearization point for concurrent shortens: the
    /// store must never silently overwrite an existing row.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::DuplicateCode`] / [`InsertError::DuplicateUrl`]
    /// on a uniqueness violation, [`InsertError::Store`] on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, InsertError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its canonical (percent-encoded) URL.
    ///
    /// Used to keep shortening idempotent: an already-shortened URL returns
    /// its existing record instead of minting a second code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_url(&self, encoded_url: &str) -> Result<Option<Link>, AppError>;
}
