use crate::modules::users::{
    model::{CreateUserDto, User},
    repository::UserRepository,
};
use academy_core::AppError;
use academy_db::{DeleteResult, InsertOutcome, InsertResult};
use anyhow::Context;
use uuid::Uuid;

/// Outcome of a first-login registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Created(InsertResult),
    AlreadyRegistered,
}

pub struct UserService;

impl UserService {
    /// Inserts the user unless the email is already registered. A duplicate
    /// that slips past the lookup is caught by the store's unique index and
    /// reported the same way.
    pub async fn register(
        users: &dyn UserRepository,
        dto: CreateUserDto,
    ) -> Result<Registration, AppError> {
        let existing = users
            .find_by_email(&dto.email)
            .await
            .context("Failed to look up user by email")
            .map_err(AppError::database)?;

        if existing.is_some() {
            return Ok(Registration::AlreadyRegistered);
        }

        let outcome = users
            .insert(dto.into_new_user())
            .await
            .context("Failed to insert user")
            .map_err(AppError::database)?;

        Ok(match outcome {
            InsertOutcome::Inserted(id) => Registration::Created(InsertResult::inserted(id)),
            InsertOutcome::Duplicate => Registration::AlreadyRegistered,
        })
    }

    pub async fn get_user_by_email(
        users: &dyn UserRepository,
        email: &str,
    ) -> Result<Option<User>, AppError> {
        let user = users
            .find_by_email(email)
            .await
            .context("Failed to fetch user by email")
            .map_err(AppError::database)?;

        Ok(user.map(User::without_password))
    }

    pub async fn get_users(users: &dyn UserRepository) -> Result<Vec<User>, AppError> {
        let all = users
            .list()
            .await
            .context("Failed to fetch users")
            .map_err(AppError::database)?;

        Ok(all.into_iter().map(User::without_password).collect())
    }

    /// Whether the user with `email` exists and holds the admin role.
    pub async fn is_admin(users: &dyn UserRepository, email: &str) -> Result<bool, AppError> {
        let user = users
            .find_by_email(email)
            .await
            .context("Failed to fetch user role")
            .map_err(AppError::database)?;

        Ok(user.is_some_and(|u| u.is_admin()))
    }

    pub async fn delete_user(
        users: &dyn UserRepository,
        id: Uuid,
    ) -> Result<DeleteResult, AppError> {
        let result = users
            .delete_by_id(id)
            .await
            .context("Failed to delete user")
            .map_err(AppError::database)?;

        Ok(result)
    }
}
