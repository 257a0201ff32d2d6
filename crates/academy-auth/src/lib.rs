//! # Academy Auth
//!
//! Access tokens for the Academy API.
//!
//! - [`claims`]: The identity payload and the claims embedded in a token
//! - [`jwt`]: Token issuing and verification
//!
//! Tokens are stateless HS256 JWTs. Whoever holds a validly signed, unexpired
//! token is the identity it names; there is no refresh or revocation.
//!
//! # Example
//!
//! ```ignore
//! use academy_auth::{IdentityPayload, issue_token, verify_token};
//! use academy_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let token = issue_token(&IdentityPayload::new("student@example.com"), &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.email(), "student@example.com");
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{Claims, IdentityPayload};
pub use jwt::{issue_token, issue_token_at, verify_token};
