use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Extension, Router, middleware};
use tower::ServiceExt;

use voxtract::infrastructure::observability::{REQUEST_ID_HEADER, RequestId, request_id_middleware};

fn app() -> Router {
    Router::new()
        .route(
            "/whoami",
            get(|Extension(RequestId(id)): Extension<RequestId>| async move { id }),
        )
        .layer(middleware::from_fn(request_id_middleware))
}

#[tokio::test]
async fn given_incoming_id_when_handling_then_handler_sees_same_id() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header(REQUEST_ID_HEADER, "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "abc-123");
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"abc-123");
}

#[tokio::test]
async fn given_empty_incoming_id_when_handling_then_mints_uuid() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header(REQUEST_ID_HEADER, "")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(uuid::Uuid::parse_str(&id).is_ok());
}
