//! Document store connection settings.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: full PostgreSQL connection string. Takes precedence.
//! - `DB_USER`, `DB_PASS`: credentials, required when `DATABASE_URL` is unset
//! - `DB_HOST`: `host:port` (default `localhost:5432`)
//! - `DB_NAME`: database name (default `global_chain_academy`)
//! - `DB_MAX_CONNECTIONS`: pool size (default 5)

use std::env;

use crate::{ConfigError, parse_or};

const DEFAULT_HOST: &str = "localhost:5432";
const DEFAULT_NAME: &str = "global_chain_academy";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = match lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
            Some(url) => url,
            None => {
                let user = lookup("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?;
                let pass = lookup("DB_PASS").ok_or(ConfigError::Missing("DB_PASS"))?;
                let host = lookup("DB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
                let name = lookup("DB_NAME").unwrap_or_else(|| DEFAULT_NAME.to_string());
                compose_url(&user, &pass, &host, &name)
            }
        };

        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 5);
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            url,
            max_connections,
        })
    }
}

fn compose_url(user: &str, pass: &str, host: &str, name: &str) -> String {
    format!("postgres://{user}:{pass}@{host}/{name}")
}
