//! Token issuing and verification.
//!
//! Tokens are signed with HS256 using the configured secret and expire
//! `access_token_expiry` seconds after issue. Verification checks the
//! signature and expiry with no clock leeway.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use academy_config::JwtConfig;
use academy_core::AppError;

use crate::claims::{Claims, IdentityPayload};

/// Issues an access token for `payload`, valid from now.
///
/// The payload is trusted as given; nothing checks that a user with that
/// email exists.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn issue_token(payload: &IdentityPayload, jwt_config: &JwtConfig) -> Result<String, AppError> {
    issue_token_at(payload, jwt_config, Utc::now().timestamp())
}

/// Issues an access token as if it were `issued_at` (Unix seconds).
pub fn issue_token_at(
    payload: &IdentityPayload,
    jwt_config: &JwtConfig,
    issued_at: i64,
) -> Result<String, AppError> {
    let iat = issued_at.max(0) as usize;
    let exp = issued_at
        .saturating_add(jwt_config.access_token_expiry)
        .max(0) as usize;

    let claims = Claims {
        identity: payload.clone().without_reserved_claims(),
        exp,
        iat,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(e).with_message("Failed to create token"))
}

/// Verifies an access token and returns the embedded claims.
///
/// # Errors
///
/// Returns [`AppError::invalid_token`] if the token is malformed, signed with
/// another secret, or expired.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    // Tokens are not scoped to an audience; an `aud` in the payload is data.
    validation.validate_aud = false;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(reason = %e, "Token rejected");
        AppError::invalid_token()
    })
}
