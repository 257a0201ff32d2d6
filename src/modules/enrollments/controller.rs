use crate::modules::enrollments::model::{CreateEnrollmentDto, Enrollment};
use crate::modules::enrollments::service::{EnrollmentOutcome, EnrollmentService};
use crate::state::AppState;
use crate::utils::parse_record_id;
use crate::validator::ValidatedJson;
use academy_core::{ApiResponse, AppError};
use academy_db::DeleteResult;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tracing::{info, instrument};

/// Enroll an email in a course
///
/// Unauthenticated. A repeated enrollment answers 200 with `success: false`
/// and the existing record as `data`.
#[instrument(skip_all, fields(email = %dto.email, course = %dto.course))]
pub async fn create_enrollment(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateEnrollmentDto>,
) -> Result<Response, AppError> {
    match EnrollmentService::enroll(state.enrollments.as_ref(), dto).await? {
        EnrollmentOutcome::Created(result) => {
            info!("Enrollment created");
            Ok(ApiResponse::success("You have enrolled successfully", result).into_response())
        }
        EnrollmentOutcome::AlreadyEnrolled(existing) => Ok(ApiResponse::rejected(
            "You have already enrolled in this course",
            existing,
        )
        .into_response()),
    }
}

/// List every enrollment (requires admin)
#[instrument(skip_all)]
pub async fn get_enrollments(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Enrollment>>, AppError> {
    let enrollments = EnrollmentService::get_enrollments(state.enrollments.as_ref()).await?;
    Ok(ApiResponse::success("All enrollments", enrollments))
}

/// Delete an enrollment by id (requires admin)
#[instrument(skip_all, fields(id = %id))]
pub async fn delete_enrollment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<DeleteResult>, AppError> {
    let id = parse_record_id(&id)?;
    let result = EnrollmentService::delete_enrollment(state.enrollments.as_ref(), id).await?;

    info!(deleted = result.deleted_count, "Enrollment delete processed");
    Ok(ApiResponse::success("Enrollment deleted successfully", result))
}
