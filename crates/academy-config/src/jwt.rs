use std::env;

use crate::{ConfigError, parse_or};

const DEVELOPMENT_SECRET: &str = "your-secret-key-change-in-production";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("ACCESS_TOKEN_SECRET")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                tracing::warn!("ACCESS_TOKEN_SECRET is not set, using the development secret");
                DEVELOPMENT_SECRET.to_string()
            });

        let access_token_expiry: i64 = parse_or(&lookup, "JWT_ACCESS_EXPIRY", 3600); // 1 hour
        if access_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                value: access_token_expiry.to_string(),
            });
        }

        Ok(Self {
            secret,
            access_token_expiry,
        })
    }
}
