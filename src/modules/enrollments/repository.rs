//! Storage access for enrollment records.

use academy_db::document::{DocumentRow, to_document};
use academy_db::{DeleteResult, InsertOutcome, PgPool, RepositoryError};
use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use super::model::{Enrollment, NewEnrollment};

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn find_by_email_and_course(
        &self,
        email: &str,
        course: &str,
    ) -> Result<Option<Enrollment>, RepositoryError>;

    async fn list(&self) -> Result<Vec<Enrollment>, RepositoryError>;

    /// Stores `enrollment` unless the `(email, course)` pair is taken.
    async fn insert(&self, enrollment: NewEnrollment) -> Result<InsertOutcome, RepositoryError>;

    async fn delete_by_id(&self, id: Uuid) -> Result<DeleteResult, RepositoryError>;
}

/// [`EnrollmentRepository`] over the `enrollments` document table.
#[derive(Debug, Clone)]
pub struct PgEnrollmentRepository {
    pool: PgPool,
}

impl PgEnrollmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for PgEnrollmentRepository {
    #[instrument(skip(self))]
    async fn find_by_email_and_course(
        &self,
        email: &str,
        course: &str,
    ) -> Result<Option<Enrollment>, RepositoryError> {
        sqlx::query_as::<_, DocumentRow>(
            "SELECT id, doc FROM enrollments WHERE email = $1 AND course = $2",
        )
        .bind(email)
        .bind(course)
        .fetch_optional(&self.pool)
        .await?
        .map(DocumentRow::hydrate)
        .transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Enrollment>, RepositoryError> {
        sqlx::query_as::<_, DocumentRow>("SELECT id, doc FROM enrollments ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(DocumentRow::hydrate)
            .collect()
    }

    #[instrument(skip(self, enrollment), fields(email = %enrollment.email, course = %enrollment.course))]
    async fn insert(&self, enrollment: NewEnrollment) -> Result<InsertOutcome, RepositoryError> {
        let id = Uuid::new_v4();
        let doc = to_document(&enrollment)?;

        let result = sqlx::query(
            r#"
            INSERT INTO enrollments (id, email, course, doc)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email, course) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(&enrollment.email)
        .bind(&enrollment.course)
        .bind(sqlx::types::Json(doc))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(InsertOutcome::Duplicate);
        }
        Ok(InsertOutcome::Inserted(id))
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: Uuid) -> Result<DeleteResult, RepositoryError> {
        let result = sqlx::query("DELETE FROM enrollments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(DeleteResult::new(result.rows_affected()))
    }
}
