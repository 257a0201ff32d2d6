//! Cross-origin configuration.
//!
//! Allowed origins come from the development and production front-end URLs
//! (`FRONTEND_URL`, `FRONTEND_URL_PRODUCTION`) plus an optional
//! comma-separated `ALLOWED_ORIGINS` list.

use std::env;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let front_ends = ["FRONTEND_URL", "FRONTEND_URL_PRODUCTION"]
            .into_iter()
            .filter_map(|key| lookup(key));
        let extra = lookup("ALLOWED_ORIGINS").unwrap_or_default();

        Self::new(front_ends.chain(extra.split(',').map(str::to_string)))
    }

    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut allowed_origins: Vec<String> = Vec::new();
        for origin in origins {
            // Browsers never send a trailing slash in Origin.
            let origin = origin.as_ref().trim().trim_end_matches('/');
            if !origin.is_empty() && !allowed_origins.iter().any(|o| o == origin) {
                allowed_origins.push(origin.to_string());
            }
        }

        Self { allowed_origins }
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }
}
