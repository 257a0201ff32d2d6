pub mod auth;
pub mod enrollments;
pub mod users;

pub use self::enrollments::model::Enrollment;
pub use self::users::model::User;
