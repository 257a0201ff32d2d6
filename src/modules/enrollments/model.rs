//! Enrollment data models and DTOs.
//!
//! An enrollment ties an email to a course. The `(email, course)` pair is
//! unique; any other fields the front end sends (price, transaction id, ...)
//! are stored as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub course: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// An enrollment about to be stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEnrollment {
    pub email: String,
    pub course: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl NewEnrollment {
    pub fn into_enrollment(self, id: Uuid) -> Enrollment {
        Enrollment {
            id,
            email: self.email,
            course: self.course,
            details: self.details,
        }
    }
}

/// Body of `POST /enroll`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEnrollmentDto {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "course is required"))]
    pub course: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl CreateEnrollmentDto {
    pub fn into_new_enrollment(mut self) -> NewEnrollment {
        self.details.remove("_id");
        NewEnrollment {
            email: self.email,
            course: self.course,
            details: self.details,
        }
    }
}
