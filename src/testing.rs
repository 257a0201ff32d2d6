//! In-memory repositories for tests.
//!
//! Enabled for unit tests and, through the `test-utils` feature, for the
//! integration tests under `tests/`. Every repository call bumps an operation
//! counter so tests can assert that a request never reached the store.

use std::sync::atomic::{AtomicUsize, Ordering};

use academy_db::{DeleteResult, InsertOutcome, RepositoryError};
use async_trait::async_trait;
use serde_json::Map;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::enrollments::model::{Enrollment, NewEnrollment};
use crate::modules::enrollments::repository::EnrollmentRepository;
use crate::modules::users::model::{NewUser, User};
use crate::modules::users::repository::UserRepository;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: RwLock<Vec<User>>,
    operations: AtomicUsize,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of repository calls made so far.
    pub fn operation_count(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    /// Stores a user directly, bypassing the operation counter.
    pub async fn seed_user(&self, email: &str, role: Option<&str>) -> User {
        self.seed(NewUser {
            email: email.to_string(),
            role: role.map(str::to_string),
            profile: Map::new(),
        })
        .await
    }

    pub async fn seed(&self, user: NewUser) -> User {
        let user = user.into_user(Uuid::new_v4());
        self.records.write().await.push(user.clone());
        user
    }

    /// Snapshot of every stored record.
    pub async fn records(&self) -> Vec<User> {
        self.records.read().await.clone()
    }

    fn touch(&self) {
        self.operations.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        self.touch();
        let records = self.records.read().await;
        Ok(records.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        self.touch();
        let records = self.records.read().await;
        Ok(records.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        self.touch();
        Ok(self.records.read().await.clone())
    }

    async fn insert(&self, user: NewUser) -> Result<InsertOutcome, RepositoryError> {
        self.touch();
        let mut records = self.records.write().await;
        if records.iter().any(|u| u.email == user.email) {
            return Ok(InsertOutcome::Duplicate);
        }
        let id = Uuid::new_v4();
        records.push(user.into_user(id));
        Ok(InsertOutcome::Inserted(id))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<DeleteResult, RepositoryError> {
        self.touch();
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|u| u.id != id);
        Ok(DeleteResult::new((before - records.len()) as u64))
    }

    async fn set_role(&self, email: &str, role: Option<&str>) -> Result<bool, RepositoryError> {
        self.touch();
        let mut records = self.records.write().await;
        match records.iter_mut().find(|u| u.email == email) {
            Some(user) => {
                user.role = role.map(str::to_string);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryEnrollmentRepository {
    records: RwLock<Vec<Enrollment>>,
    operations: AtomicUsize,
}

impl InMemoryEnrollmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operation_count(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    pub async fn seed(&self, enrollment: NewEnrollment) -> Enrollment {
        let enrollment = enrollment.into_enrollment(Uuid::new_v4());
        self.records.write().await.push(enrollment.clone());
        enrollment
    }

    pub async fn records(&self) -> Vec<Enrollment> {
        self.records.read().await.clone()
    }

    fn touch(&self) {
        self.operations.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn find_by_email_and_course(
        &self,
        email: &str,
        course: &str,
    ) -> Result<Option<Enrollment>, RepositoryError> {
        self.touch();
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|e| e.email == email && e.course == course)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Enrollment>, RepositoryError> {
        self.touch();
        Ok(self.records.read().await.clone())
    }

    async fn insert(&self, enrollment: NewEnrollment) -> Result<InsertOutcome, RepositoryError> {
        self.touch();
        let mut records = self.records.write().await;
        if records
            .iter()
            .any(|e| e.email == enrollment.email && e.course == enrollment.course)
        {
            return Ok(InsertOutcome::Duplicate);
        }
        let id = Uuid::new_v4();
        records.push(enrollment.into_enrollment(id));
        Ok(InsertOutcome::Inserted(id))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<DeleteResult, RepositoryError> {
        self.touch();
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|e| e.id != id);
        Ok(DeleteResult::new((before - records.len()) as u64))
    }
}

fn unavailable() -> RepositoryError {
    RepositoryError::Database(sqlx::Error::PoolTimedOut)
}

/// A user store whose every call fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, RepositoryError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, RepositoryError> {
        Err(unavailable())
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        Err(unavailable())
    }

    async fn insert(&self, _user: NewUser) -> Result<InsertOutcome, RepositoryError> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: Uuid) -> Result<DeleteResult, RepositoryError> {
        Err(unavailable())
    }

    async fn set_role(&self, _email: &str, _role: Option<&str>) -> Result<bool, RepositoryError> {
        Err(unavailable())
    }
}

/// An enrollment store whose every call fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingEnrollmentRepository;

#[async_trait]
impl EnrollmentRepository for FailingEnrollmentRepository {
    async fn find_by_email_and_course(
        &self,
        _email: &str,
        _course: &str,
    ) -> Result<Option<Enrollment>, RepositoryError> {
        Err(unavailable())
    }

    async fn list(&self) -> Result<Vec<Enrollment>, RepositoryError> {
        Err(unavailable())
    }

    async fn insert(&self, _enrollment: NewEnrollment) -> Result<InsertOutcome, RepositoryError> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: Uuid) -> Result<DeleteResult, RepositoryError> {
        Err(unavailable())
    }
}
