use crate::state::AppState;
use crate::validator::ValidatedJson;
use academy_auth::IdentityPayload;
use academy_core::AppError;
use axum::{Json, extract::State};
use tracing::instrument;

use super::model::{IssueTokenRequest, TokenResponse};

/// Issue an access token for the posted identity
///
/// Called by the front end right after its own sign-in succeeds. The payload
/// is signed as given; expiry is set by the server.
#[instrument(skip_all, fields(email = %request.email))]
pub async fn issue_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IssueTokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let payload = IdentityPayload::from(request);
    let token = academy_auth::issue_token(&payload, &state.jwt_config)?;
    Ok(Json(TokenResponse { token }))
}
