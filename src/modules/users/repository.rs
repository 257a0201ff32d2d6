//! Storage access for user records.

use academy_db::document::{DocumentRow, to_document};
use academy_db::{DeleteResult, InsertOutcome, PgPool, RepositoryError};
use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use super::model::{NewUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    async fn list(&self) -> Result<Vec<User>, RepositoryError>;

    /// Stores `user` unless its email is already taken.
    async fn insert(&self, user: NewUser) -> Result<InsertOutcome, RepositoryError>;

    async fn delete_by_id(&self, id: Uuid) -> Result<DeleteResult, RepositoryError>;

    /// Sets or clears the role of the user with `email`. Returns `false` when
    /// no such user exists.
    async fn set_role(&self, email: &str, role: Option<&str>) -> Result<bool, RepositoryError>;
}

/// [`UserRepository`] over the `users` document table.
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        sqlx::query_as::<_, DocumentRow>("SELECT id, doc FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .map(DocumentRow::hydrate)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        sqlx::query_as::<_, DocumentRow>("SELECT id, doc FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(DocumentRow::hydrate)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        sqlx::query_as::<_, DocumentRow>("SELECT id, doc FROM users ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(DocumentRow::hydrate)
            .collect()
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn insert(&self, user: NewUser) -> Result<InsertOutcome, RepositoryError> {
        let id = Uuid::new_v4();
        let doc = to_document(&user)?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (id, email, doc)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(&user.email)
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
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(DeleteResult::new(result.rows_affected()))
    }

    #[instrument(skip(self))]
    async fn set_role(&self, email: &str, role: Option<&str>) -> Result<bool, RepositoryError> {
        let result = match role {
            Some(role) => {
                sqlx::query(
                    "UPDATE users SET doc = jsonb_set(doc, '{role}', to_jsonb($2::text)) WHERE email = $1",
                )
                .bind(email)
                .bind(role)
                .execute(&self.pool)
                .await?
            }
            None => {
                sqlx::query("UPDATE users SET doc = doc - 'role' WHERE email = $1")
                    .bind(email)
                    .execute(&self.pool)
                    .await?
            }
        };

        Ok(result.rows_affected() > 0)
    }
}
