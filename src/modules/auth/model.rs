use academy_auth::IdentityPayload;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Body of `POST /jwt`: the identity the token should speak for.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IssueTokenRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<IssueTokenRequest> for IdentityPayload {
    fn from(request: IssueTokenRequest) -> Self {
        IdentityPayload {
            email: request.email,
            extra: request.extra,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
