//! # Academy Config
//!
//! Configuration types for the Academy API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: Access token signing configuration
//! - [`cors`]: Allowed front-end origins
//! - [`database`]: Document store connection settings
//! - [`server`]: Listening address
//!
//! Every config type exposes `from_env()` plus a `from_lookup()` constructor
//! that takes a key lookup function, so parsing can be exercised without
//! touching the process environment.
//!
//! # Example
//!
//! ```ignore
//! use academy_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! let database_config = DatabaseConfig::from_env()?;
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Reads a variable and parses it, falling back to `default` when unset or
/// unparsable.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}
