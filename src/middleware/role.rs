//! Admin gate for privileged routes.
//!
//! The role is read from the user store on every request rather than from
//! the token, so granting or revoking admin takes effect immediately.

use academy_core::AppError;
use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;

/// Lets the request through only if the caller's user record has the admin
/// role. Must run after [`crate::middleware::auth::verify_token`].
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();
    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    if !UserService::is_admin(state.users.as_ref(), auth_user.email()).await? {
        warn!(email = %auth_user.email(), "Admin route refused");
        return Err(AppError::forbidden("forbidden access"));
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}
