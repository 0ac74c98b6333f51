use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use tower::ServiceExt;

use super::*;

// =============================================================================
// service_routes
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let app: Router = service_routes();
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn healthz_rejects_post() {
    let app: Router = service_routes();
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_service_path_is_not_found() {
    let app: Router = service_routes();
    let response = app
        .oneshot(Request::builder().uri("/api/bookings").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_handler_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}
