//! Store trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`, and `mockall` generates the
//! in-memory mocks used by the service unit tests.

pub mod link_store;
pub mod stats_store;

pub use link_store::{InsertError, LinkStore};
pub use stats_store::StatsStore;

#[cfg(test)]
pub use link_store::MockLinkStore;
#[cfg(test)]
pub use stats_store::MockStatsStore;
