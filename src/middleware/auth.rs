use academy_auth::Claims;
use academy_config::JwtConfig;
use academy_core::AppError;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// The verified caller of a request.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn email(&self) -> &str {
        self.0.email()
    }
}

/// Reads and verifies the bearer token in `headers`.
///
/// An absent (or empty) `Authorization` header is a 403; a header that is
/// present but does not hold a valid `Bearer` token is a 401.
pub fn authenticate(headers: &HeaderMap, jwt_config: &JwtConfig) -> Result<AuthUser, AppError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AppError::missing_token()),
    };

    let token = value
        .to_str()
        .ok()
        .and_then(bearer_token)
        .ok_or_else(AppError::invalid_token)?;

    let claims = academy_auth::verify_token(token, jwt_config)?;
    Ok(AuthUser(claims))
}

/// The credential of a `Bearer` authorization value. The scheme is matched
/// case-insensitively; any other scheme yields `None`.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("Bearer") && !token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }
        authenticate(&parts.headers, &state.jwt_config)
    }
}

/// Rejects the request unless it carries a valid access token. The verified
/// caller is stored in the request extensions for later layers and handlers.
pub async fn verify_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate(req.headers(), &state.jwt_config)?;
    tracing::debug!(email = %user.email(), "Token verified");

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_auth::{IdentityPayload, issue_token};
    use axum::http::{HeaderValue, StatusCode};

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "middleware_test_secret".to_string(),
            access_token_expiry: 3600,
        }
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_missing_header_is_forbidden() {
        let error = authenticate(&HeaderMap::new(), &test_config()).unwrap_err();
        assert_eq!(error.status, StatusCode::FORBIDDEN);
        assert_eq!(error.public_message(), "No token provided");
    }

    #[test]
    fn test_empty_header_is_forbidden() {
        let error = authenticate(&headers_with(""), &test_config()).unwrap_err();
        assert_eq!(error.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_non_bearer_header_is_unauthorized() {
        let error = authenticate(&headers_with("Basic abc"), &test_config()).unwrap_err();
        assert_eq!(error.status, StatusCode::UNAUTHORIZED);
        assert_eq!(error.public_message(), "Unauthorized! Invalid token");
    }

    #[test]
    fn test_garbage_token_is_unauthorized() {
        let error = authenticate(&headers_with("Bearer not-a-jwt"), &test_config()).unwrap_err();
        assert_eq!(error.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let config = test_config();
        let token = issue_token(&IdentityPayload::new("ada@example.com"), &config).unwrap();

        for scheme in ["bearer", "BEARER", "Bearer"] {
            let user = authenticate(&headers_with(&format!("{scheme} {token}")), &config).unwrap();
            assert_eq!(user.email(), "ada@example.com");
        }
    }

    #[test]
    fn test_bearer_without_token_is_unauthorized() {
        let error = authenticate(&headers_with("Bearer "), &test_config()).unwrap_err();
        assert_eq!(error.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_valid_token_yields_caller() {
        let config = test_config();
        let token = issue_token(&IdentityPayload::new("ada@example.com"), &config).unwrap();

        let user = authenticate(&headers_with(&format!("Bearer {token}")), &config).unwrap();
        assert_eq!(user.email(), "ada@example.com");
    }
}
