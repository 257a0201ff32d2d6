use crate::modules::enrollments::{
    model::{CreateEnrollmentDto, Enrollment},
    repository::EnrollmentRepository,
};
use academy_core::AppError;
use academy_db::{DeleteResult, InsertOutcome, InsertResult};
use anyhow::{Context, anyhow};
use uuid::Uuid;

/// Outcome of an enrollment attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum EnrollmentOutcome {
    Created(InsertResult),
    /// The email is already enrolled in the course; carries the existing record.
    AlreadyEnrolled(Enrollment),
}

pub struct EnrollmentService;

impl EnrollmentService {
    pub async fn enroll(
        enrollments: &dyn EnrollmentRepository,
        dto: CreateEnrollmentDto,
    ) -> Result<EnrollmentOutcome, AppError> {
        let existing = enrollments
            .find_by_email_and_course(&dto.email, &dto.course)
            .await
            .context("Failed to look up enrollment")
            .map_err(AppError::database)?;

        if let Some(enrollment) = existing {
            return Ok(EnrollmentOutcome::AlreadyEnrolled(enrollment));
        }

        let email = dto.email.clone();
        let course = dto.course.clone();

        let outcome = enrollments
            .insert(dto.into_new_enrollment())
            .await
            .context("Failed to insert enrollment")
            .map_err(AppError::database)?;

        match outcome {
            InsertOutcome::Inserted(id) => {
                Ok(EnrollmentOutcome::Created(InsertResult::inserted(id)))
            }
            // Lost a race with a concurrent request for the same pair.
            InsertOutcome::Duplicate => {
                let winner = enrollments
                    .find_by_email_and_course(&email, &course)
                    .await
                    .context("Failed to fetch conflicting enrollment")
                    .map_err(AppError::database)?
                    .ok_or_else(|| {
                        AppError::internal(anyhow!(
                            "enrollment conflict reported but no record found"
                        ))
                    })?;
                Ok(EnrollmentOutcome::AlreadyEnrolled(winner))
            }
        }
    }

    pub async fn get_enrollments(
        enrollments: &dyn EnrollmentRepository,
    ) -> Result<Vec<Enrollment>, AppError> {
        let all = enrollments
            .list()
            .await
            .context("Failed to fetch enrollments")
            .map_err(AppError::database)?;

        Ok(all)
    }

    pub async fn delete_enrollment(
        enrollments: &dyn EnrollmentRepository,
        id: Uuid,
    ) -> Result<DeleteResult, AppError> {
        let result = enrollments
            .delete_by_id(id)
            .await
            .context("Failed to delete enrollment")
            .map_err(AppError::database)?;

        Ok(result)
    }
}
