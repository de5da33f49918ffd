//! Link entity representing a short code to canonical URL mapping.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// Maps a fixed-length short code to the canonical (percent-encoded) form of
/// the original URL. Rows are written once and never updated or deleted;
/// both `code` and `encoded_url` are unique across the store.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub encoded_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, code: String, encoded_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            encoded_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub encoded_url: String,
}
