//! SQLite store implementations.
//!
//! Concrete implementations of the domain store traits over a shared
//! `sqlx` SQLite pool.
//!
//! # Stores
//!
//! - [`SqliteLinkStore`] - Link storage and retrieval
//! - [`SqliteStatsStore`] - Visit log and counter persistence

pub mod sqlite_link_store;
pub mod sqlite_stats_store;

pub use sqlite_link_store::SqliteLinkStore;
pub use sqlite_stats_store::SqliteStatsStore;
