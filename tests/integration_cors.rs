mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{FRONTEND_ORIGIN, TestApp, json_body};

fn get_from(origin: &str) -> Request<Body> {
    Request::builder()
        .uri("/users")
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_allowed_origin_gets_credentialed_cors_headers() {
    let app = TestApp::new();

    let response = app.send(get_from(FRONTEND_ORIGIN)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        FRONTEND_ORIGIN
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_unknown_origin_is_rejected() {
    let app = TestApp::new();

    let (status, body) = json_body(app.send(get_from("https://evil.example.com")).await).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Not allowed by CORS");
    assert_eq!(app.repository_calls(), 0);
}

#[tokio::test]
async fn test_preflight_from_allowed_origin() {
    let app = TestApp::new();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/enrollments")
        .header(header::ORIGIN, FRONTEND_ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        FRONTEND_ORIGIN
    );
    assert_eq!(app.repository_calls(), 0);
}

#[tokio::test]
async fn test_request_without_origin_passes() {
    let app = TestApp::new();

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
