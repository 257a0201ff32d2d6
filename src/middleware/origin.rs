use academy_core::AppError;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::state::AppState;

/// Refuses requests whose `Origin` is not an allowed front end.
///
/// Requests without an `Origin` header (curl, server-to-server) pass through.
pub async fn reject_disallowed_origin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(origin) = req.headers().get(header::ORIGIN) {
        let allowed = origin
            .to_str()
            .is_ok_and(|origin| state.cors_config.is_allowed(origin));

        if !allowed {
            warn!(origin = ?origin, "Rejected request from unknown origin");
            return Err(AppError::forbidden("Not allowed by CORS"));
        }
    }

    Ok(next.run(req).await)
}
