//! # shorturl
//!
//! A deterministic, collision-resistant URL shortening service built with
//! Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities, store traits, and the
//!   asynchronous visit pipeline
//! - **Application Layer** ([`application`]) - Shortening and statistics
//!   services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite store
//!   implementations
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Shortening Scheme
//!
//! URLs are validated, percent-encoded into a canonical form, and hashed
//! with SHA-256 into a fixed-length URL-safe code. The same URL always maps
//! to the same code; collisions are resolved deterministically by repeating
//! a salt prefix once more per retry. See
//! [`utils::code_generator`] and [`application::services::LinkService`].
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://shorturl.db?mode=rwc"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, LinkStats, StatsService};
    pub use crate::domain::entities::{Link, NewLink, NewVisit, Visit};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
