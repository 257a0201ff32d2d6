use crate::middleware::auth::AuthUser;
use crate::modules::users::model::{
    AdminStatusResponse, CreateUserDto, ExistingUserResponse, User, UserLookupQuery,
};
use crate::modules::users::service::{Registration, UserService};
use crate::state::AppState;
use crate::utils::parse_record_id;
use crate::validator::ValidatedJson;
use academy_core::{ApiResponse, AppError};
use academy_db::DeleteResult;
use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use tracing::{info, instrument, warn};

/// Create a user on first login
///
/// Unauthenticated. Registering an email that already exists is not an error.
#[instrument(skip_all, fields(email = %dto.email))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<Response, AppError> {
    match UserService::register(state.users.as_ref(), dto).await? {
        Registration::Created(result) => {
            info!("User registered");
            Ok(ApiResponse::success("Login successful", result).into_response())
        }
        Registration::AlreadyRegistered => Ok(Json(ExistingUserResponse::new()).into_response()),
    }
}

/// Get all users
///
/// Unauthenticated. Password fields are never returned.
#[instrument(skip_all)]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<User>>, AppError> {
    let users = UserService::get_users(state.users.as_ref()).await?;
    Ok(ApiResponse::success("All users", users))
}

/// Get a user's details by email (requires authentication)
///
/// An unknown email is answered with `data: null`.
#[instrument(skip_all, fields(caller = %auth_user.email()))]
pub async fn get_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<UserLookupQuery>,
) -> Result<ApiResponse<Option<User>>, AppError> {
    let email = query
        .email
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::bad_request(anyhow!("email is required")))?;

    let user = UserService::get_user_by_email(state.users.as_ref(), &email)
        .await
        .map_err(|e| e.with_message("Error fetching user details"))?;

    Ok(ApiResponse::success("User details", user))
}

/// Check whether the caller is an admin (requires authentication)
///
/// Callers may only ask about their own email.
#[instrument(skip_all, fields(email = %email))]
pub async fn check_admin(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<AdminStatusResponse>, AppError> {
    if email != auth_user.email() {
        warn!(caller = %auth_user.email(), "Admin status requested for another user");
        return Err(AppError::forbidden("forbidden access"));
    }

    let admin = UserService::is_admin(state.users.as_ref(), &email).await?;
    Ok(Json(AdminStatusResponse { admin }))
}

/// Delete a user by id (requires admin)
///
/// Deleting an id that does not exist reports `deletedCount: 0` and is still
/// a success.
#[instrument(skip_all, fields(id = %id))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<DeleteResult>, AppError> {
    let id = parse_record_id(&id)?;
    let result = UserService::delete_user(state.users.as_ref(), id).await?;

    info!(deleted = result.deleted_count, "User delete processed");
    Ok(ApiResponse::success("User deleted successfully", result))
}
