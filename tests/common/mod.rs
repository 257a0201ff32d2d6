use std::sync::Arc;

use academy::academy_auth::{IdentityPayload, issue_token};
use academy::academy_config::{CorsConfig, JwtConfig};
use academy::modules::enrollments::repository::EnrollmentRepository;
use academy::modules::users::repository::UserRepository;
use academy::router::init_router;
use academy::state::AppState;
use academy::testing::{InMemoryEnrollmentRepository, InMemoryUserRepository};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub const FRONTEND_ORIGIN: &str = "http://localhost:5173";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration_test_secret".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_cors_config() -> CorsConfig {
    CorsConfig::new([FRONTEND_ORIGIN, "https://academy.example.com"])
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepository>,
    pub enrollments: Arc<InMemoryEnrollmentRepository>,
    pub jwt_config: JwtConfig,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let enrollments = Arc::new(InMemoryEnrollmentRepository::new());
        let jwt_config = test_jwt_config();

        let state = AppState::new(
            users.clone(),
            enrollments.clone(),
            jwt_config.clone(),
            test_cors_config(),
        );

        Self {
            router: init_router(state),
            users,
            enrollments,
            jwt_config,
        }
    }

    /// App over arbitrary repositories, for failure injection.
    pub fn with_repositories(
        users: Arc<dyn UserRepository>,
        enrollments: Arc<dyn EnrollmentRepository>,
    ) -> Router {
        init_router(AppState::new(
            users,
            enrollments,
            test_jwt_config(),
            test_cors_config(),
        ))
    }

    pub fn token_for(&self, email: &str) -> String {
        issue_token(&IdentityPayload::new(email), &self.jwt_config).unwrap()
    }

    pub fn repository_calls(&self) -> usize {
        self.users.operation_count() + self.enrollments.operation_count()
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn delete_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub async fn json_body(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
