use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};


/// Creates a test context with the review tables and a router bound to its database.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let app = app(test.db.as_ref().unwrap());

    (test, app)
}

fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(db.clone()))
}

/// Sends a request through the router and decodes the JSON response body.
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();

    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    send(app, request).await
}

async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

async fn post_raw(app: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    send(app, request).await
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let (_test, app) = setup().await;

    let (status, body) = get(&app, "/nothing/here").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Resource not found" }));
}

#[tokio::test]
async fn serves_openapi_document() {
    let (_test, app) = setup().await;

    let (status, body) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/games"].is_object());
    assert!(body["paths"]["/games/{id}"].is_object());
    assert!(body["paths"]["/games/{id}/users"].is_object());
    assert!(body["paths"]["/reviews"].is_object());
}
