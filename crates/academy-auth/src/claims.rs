use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claim names the issuer controls. Values under these keys in a caller
/// payload are dropped before signing.
pub const RESERVED_CLAIMS: [&str; 3] = ["iat", "exp", "nbf"];

/// The identity a token speaks for: an email plus whatever else the caller
/// chose to embed (name, photo URL, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityPayload {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IdentityPayload {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            extra: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub(crate) fn without_reserved_claims(mut self) -> Self {
        for key in RESERVED_CLAIMS {
            self.extra.remove(key);
        }
        self
    }
}

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub identity: IdentityPayload,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    pub fn email(&self) -> &str {
        &self.identity.email
    }
}
