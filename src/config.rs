//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Hash-generation settings travel as an explicit [`HashConfig`]
//! injected into the link service, never as process-wide mutable state.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite database URL (default: `sqlite://shorturl.db?mode=rwc`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public base used to build short URLs (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `VISIT_QUEUE_CAPACITY` - Visit event buffer size (default: 10000, min: 100)
//! - `HASH_SALT` - Salt prefix repeated on collision retries
//! - `HASH_MAX_ATTEMPTS` - Collision-probe attempt limit
//! - `SHORT_CODE_LENGTH` - Length of generated codes
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::Result;
use std::env;

use crate::utils::code_generator::HashConfig;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Public base URL prepended to `/h/{code}` in shorten responses.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub visit_queue_capacity: usize,
    /// Hash-generation settings handed to the link service.
    pub hash: HashConfig,

    // ── Pool settings ───────────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://shorturl.db?mode=rwc".to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let visit_queue_capacity = env::var("VISIT_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        let defaults = HashConfig::default();
        let hash = HashConfig {
            alphabet: defaults.alphabet,
            salt: env::var("HASH_SALT").unwrap_or(defaults.salt),
            code_length: env::var("SHORT_CODE_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.code_length),
            max_attempts: env::var("HASH_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_attempts),
        };

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            listen_addr,
            base_url,
            log_level,
            log_format,
            visit_queue_capacity,
            hash,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any setting is outside its supported range.
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.visit_queue_capacity < 100 {
            anyhow::bail!(
                "VISIT_QUEUE_CAPACITY must be at least 100, got {}",
                self.visit_queue_capacity
            );
        }

        if self.visit_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "VISIT_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.visit_queue_capacity
            );
        }

        if self.hash.salt.is_empty() {
            anyhow::bail!("HASH_SALT must not be empty");
        }

        // A SHA-256 digest yields 43 base64 characters before padding.
        if self.hash.code_length == 0 || self.hash.code_length > 43 {
            anyhow::bail!(
                "SHORT_CODE_LENGTH must be between 1 and 43, got {}",
                self.hash.code_length
            );
        }

        if self.hash.max_attempts == 0 {
            anyhow::bail!("HASH_MAX_ATTEMPTS must be at least 1");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Prints a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Visit queue capacity: {}", self.visit_queue_capacity);
        tracing::info!(
            "  Short codes: {} chars, {} attempts",
            self.hash.code_length,
            self.hash.max_attempts
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
