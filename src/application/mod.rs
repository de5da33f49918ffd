//! Application layer services implementing business logic.
//!
//! Services consume the domain store traits and provide a clean API for the
//! HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shortening and resolution
//! - [`services::stats_service::StatsService`] - Visit recording and statistics

pub mod services;
