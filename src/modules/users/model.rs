//! User data models and DTOs.
//!
//! A user record is a flat document: an email (unique), an optional role and
//! whatever profile fields the front end sends on first login. Only `email`
//! and `role` mean anything to this service; everything else is carried
//! through untouched.

use academy_db::InsertResult;
use academy_core::ApiResponse;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;
use validator::Validate;

/// The only role with meaning to this service. Any other value, or no role
/// at all, is a regular user.
pub const ADMIN_ROLE: &str = "admin";

/// Profile field never returned to clients.
pub const PASSWORD_FIELD: &str = "password";

/// Keys a client may not set when creating a record.
const SERVER_CONTROLLED_FIELDS: [&str; 2] = ["_id", "role"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }

    /// The record as it may be shown to clients.
    pub fn without_password(mut self) -> Self {
        self.profile.remove(PASSWORD_FIELD);
        self
    }
}

/// A user record about to be stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl NewUser {
    pub fn into_user(self, id: Uuid) -> User {
        User {
            id,
            email: self.email,
            role: self.role,
            profile: self.profile,
        }
    }
}

/// Body of `POST /user`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserDto {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl CreateUserDto {
    /// Drops fields the server owns. Roles are granted by an operator, never
    /// through sign-up.
    pub fn into_new_user(mut self) -> NewUser {
        for key in SERVER_CONTROLLED_FIELDS {
            self.profile.remove(key);
        }
        NewUser {
            email: self.email,
            role: None,
            profile: self.profile,
        }
    }
}

/// Query of `GET /user`.
#[derive(Debug, Deserialize)]
pub struct UserLookupQuery {
    pub email: Option<String>,
}

/// Answer of `GET /user/admin/{email}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStatusResponse {
    pub admin: bool,
}

/// Answer of `POST /user` when the email is already registered. Existing
/// clients look for a top-level `insertedId` of `null`.
#[derive(Debug, Clone, Serialize)]
pub struct ExistingUserResponse {
    #[serde(flatten)]
    pub envelope: ApiResponse<InsertResult>,
    #[serde(rename = "insertedId")]
    pub inserted_id: Option<Uuid>,
}

impl ExistingUserResponse {
    pub fn new() -> Self {
        Self {
            envelope: ApiResponse::success(
                "User with this email already exists",
                InsertResult::not_inserted(),
            ),
            inserted_id: None,
        }
    }
}

impl Default for ExistingUserResponse {
    fn default() -> Self {
        Self::new()
    }
}
