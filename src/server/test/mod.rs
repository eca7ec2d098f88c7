//! HTTP contract tests driving the full API router.
//!
//! Each test builds the router over a fresh in-memory database with the session layer
//! attached, then sends requests with `tower::ServiceExt::oneshot`. Session cookies are
//! carried between requests by hand.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{router::router, startup::session_layer, state::AppState};

mod catalogue;
mod character;

const ADMIN_PASSWORD: &str = "test-admin-secret";

/// Router under test together with the context owning its database.
struct TestApp {
    context: TestContext,
    router: Router,
}

/// Status, session cookie and parsed JSON body of a response.
struct TestResponse {
    status: StatusCode,
    cookie: Option<String>,
    body: Value,
}

impl TestApp {
    async fn new() -> Self {
        let mut context = TestBuilder::new().with_all_tables().build().await.unwrap();
        let store = context.session_store().await.unwrap();
        let db = context.db.clone().unwrap();

        let router = router()
            .with_state(AppState::new(db, ADMIN_PASSWORD))
            .layer(session_layer(store, false));

        Self { context, router }
    }

    fn db(&self) -> &DatabaseConnection {
        self.context.db.as_ref().unwrap()
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(str::to_string);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse {
            status,
            cookie,
            body,
        }
    }

    async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.send(build_request(Method::GET, uri, None, cookie)).await
    }

    async fn post(&self, uri: &str, body: Value, cookie: Option<&str>) -> TestResponse {
        self.send(build_request(Method::POST, uri, Some(body), cookie))
            .await
    }

    async fn delete(&self, uri: &str, body: Option<Value>, cookie: Option<&str>) -> TestResponse {
        self.send(build_request(Method::DELETE, uri, body, cookie))
            .await
    }

    /// Signs up a user and returns the session cookie.
    async fn sign_up(&self, username: &str) -> String {
        let response = self
            .post(
                "/api/auth/signup",
                serde_json::json!({
                    "username": username,
                    "email": format!("{}@example.com", username),
                    "password": "correct horse",
                }),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED);
        response.cookie.unwrap()
    }
}

fn build_request(
    method: Method,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
