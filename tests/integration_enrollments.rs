mod common;

use academy::modules::enrollments::model::NewEnrollment;
use axum::http::StatusCode;
use common::{TestApp, delete_with_token, get_with_token, json_body, post_json};
use serde_json::{Map, json};
use uuid::Uuid;

fn enrollment(email: &str, course: &str) -> NewEnrollment {
    NewEnrollment {
        email: email.to_string(),
        course: course.to_string(),
        details: Map::new(),
    }
}

#[tokio::test]
async fn test_enroll() {
    let app = TestApp::new();

    let (status, body) = json_body(
        app.send(post_json(
            "/enroll",
            &json!({"email": "ada@example.com", "course": "solidity-101", "price": 49}),
        ))
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "You have enrolled successfully");
    assert_eq!(body["success"], true);
    assert!(body["data"]["insertedId"].is_string());

    let records = app.enrollments.records().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].details["price"], 49);
}

#[tokio::test]
async fn test_enroll_twice_returns_existing_record() {
    let app = TestApp::new();
    let request = json!({"email": "ada@example.com", "course": "solidity-101"});

    app.send(post_json("/enroll", &request)).await;
    let (status, body) = json_body(app.send(post_json("/enroll", &request)).await).await;

    let records = app.enrollments.records().await;
    assert_eq!(records.len(), 1);

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "You have already enrolled in this course");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], true);
    assert_eq!(body["data"]["_id"], records[0].id.to_string());
    assert_eq!(body["data"]["course"], "solidity-101");
}

#[tokio::test]
async fn test_same_email_different_courses() {
    let app = TestApp::new();

    for course in ["solidity-101", "rust-201"] {
        let (_, body) = json_body(
            app.send(post_json(
                "/enroll",
                &json!({"email": "ada@example.com", "course": course}),
            ))
            .await,
        )
        .await;
        assert_eq!(body["success"], true);
    }

    assert_eq!(app.enrollments.records().await.len(), 2);
}

#[tokio::test]
async fn test_enroll_requires_email_and_course() {
    let app = TestApp::new();

    let (status, body) = json_body(
        app.send(post_json("/enroll", &json!({"email": "ada@example.com"})))
            .await,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "course is required");

    let (status, _) = json_body(
        app.send(post_json(
            "/enroll",
            &json!({"email": "ada@example.com", "course": ""}),
        ))
        .await,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    assert!(app.enrollments.records().await.is_empty());
}

#[tokio::test]
async fn test_list_enrollments_as_admin() {
    let app = TestApp::new();
    app.users.seed_user("root@example.com", Some("admin")).await;
    app.enrollments
        .seed(enrollment("ada@example.com", "solidity-101"))
        .await;
    app.enrollments
        .seed(enrollment("bob@example.com", "solidity-101"))
        .await;
    let token = app.token_for("root@example.com");

    let (status, body) = json_body(app.send(get_with_token("/enrollments", &token)).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "All enrollments");
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_enrollments_rejects_non_admins() {
    let app = TestApp::new();
    app.users.seed_user("ada@example.com", None).await;

    for email in ["ada@example.com", "unregistered@example.com"] {
        let token = app.token_for(email);
        let (status, body) =
            json_body(app.send(get_with_token("/enrollments", &token)).await).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{email}");
        assert_eq!(body["message"], "forbidden access");
    }

    assert_eq!(app.enrollments.operation_count(), 0);
}

#[tokio::test]
async fn test_delete_enrollment() {
    let app = TestApp::new();
    app.users.seed_user("root@example.com", Some("admin")).await;
    let target = app
        .enrollments
        .seed(enrollment("ada@example.com", "solidity-101"))
        .await;
    let token = app.token_for("root@example.com");

    let (status, body) = json_body(
        app.send(delete_with_token(
            &format!("/enrollment/{}", target.id),
            &token,
        ))
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Enrollment deleted successfully");
    assert_eq!(body["data"]["deletedCount"], 1);
    assert!(app.enrollments.records().await.is_empty());

    let (_, body) = json_body(
        app.send(delete_with_token(
            &format!("/enrollment/{}", Uuid::new_v4()),
            &token,
        ))
        .await,
    )
    .await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["deletedCount"], 0);
}

#[tokio::test]
async fn test_delete_enrollment_requires_token() {
    let app = TestApp::new();
    let target = app
        .enrollments
        .seed(enrollment("ada@example.com", "solidity-101"))
        .await;

    let response = app
        .send(
            axum::http::Request::builder()
                .method("DELETE")
                .uri(format!("/enrollment/{}", target.id))
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.enrollments.records().await.len(), 1);
}
