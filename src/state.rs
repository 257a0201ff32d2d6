use std::sync::Arc;

use academy_config::{CorsConfig, JwtConfig};
use academy_db::PgPool;

use crate::modules::enrollments::repository::{EnrollmentRepository, PgEnrollmentRepository};
use crate::modules::users::repository::{PgUserRepository, UserRepository};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub enrollments: Arc<dyn EnrollmentRepository>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        enrollments: Arc<dyn EnrollmentRepository>,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            users,
            enrollments,
            jwt_config,
            cors_config,
        }
    }

    /// State backed by the Postgres document tables.
    pub fn from_pool(pool: PgPool, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgEnrollmentRepository::new(pool)),
            jwt_config,
            cors_config,
        )
    }
}
