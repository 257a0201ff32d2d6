mod common;

use std::sync::Arc;

use academy::testing::{
    FailingEnrollmentRepository, FailingUserRepository, InMemoryEnrollmentRepository,
    InMemoryUserRepository,
};
use axum::Router;
use axum::http::StatusCode;
use common::{TestApp, get, get_with_token, json_body, post_json, test_jwt_config};
use academy::academy_auth::{IdentityPayload, issue_token};
use serde_json::json;
use tower::ServiceExt;

fn failing_app() -> Router {
    TestApp::with_repositories(
        Arc::new(FailingUserRepository),
        Arc::new(FailingEnrollmentRepository),
    )
}

fn token_for(email: &str) -> String {
    issue_token(&IdentityPayload::new(email), &test_jwt_config()).unwrap()
}

#[tokio::test]
async fn test_list_users_failure_is_generic_500() {
    let response = failing_app().oneshot(get("/users")).await.unwrap();
    let (status, body) = json_body(response).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "message": "Internal server error",
            "success": false,
            "error": true,
            "data": []
        })
    );
}

#[tokio::test]
async fn test_failure_detail_is_not_leaked() {
    let response = failing_app()
        .oneshot(post_json("/user", &json!({"email": "ada@example.com"})))
        .await
        .unwrap();
    let (status, body) = json_body(response).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.to_string().to_lowercase().contains("pool"));
}

#[tokio::test]
async fn test_get_user_failure_message() {
    let response = failing_app()
        .oneshot(get_with_token(
            "/user?email=ada@example.com",
            &token_for("ada@example.com"),
        ))
        .await
        .unwrap();
    let (status, body) = json_body(response).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error fetching user details");
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_role_check_failure_is_500() {
    let response = failing_app()
        .oneshot(get_with_token("/enrollments", &token_for("root@example.com")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_enrollment_store_failure_is_500() {
    let app = TestApp::with_repositories(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(FailingEnrollmentRepository),
    );

    let response = app
        .oneshot(post_json(
            "/enroll",
            &json!({"email": "ada@example.com", "course": "solidity-101"}),
        ))
        .await
        .unwrap();
    let (status, body) = json_body(response).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_user_store_failure_does_not_touch_enrollments() {
    let enrollments = Arc::new(InMemoryEnrollmentRepository::new());
    let app = TestApp::with_repositories(Arc::new(FailingUserRepository), enrollments.clone());

    let response = app
        .oneshot(get_with_token("/enrollments", &token_for("root@example.com")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(enrollments.operation_count(), 0);
}
