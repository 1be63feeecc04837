/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - App construction over fresh in-memory stores
/// - Seeded credential login (admin and member session tokens)
/// - Request/response helpers
use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use cantoria_api::app::{build_router, AppState};
use cantoria_api::config::{ApiConfig, Config, SessionConfig, StoreConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Seeded admin credentials
pub const ADMIN_EMAIL: &str = "admin@cantoria.app";
pub const ADMIN_PASSWORD: &str = "Maestro#2024";

/// Seeded member credentials
pub const MEMBER_EMAIL: &str = "member@cantoria.app";
pub const MEMBER_PASSWORD: &str = "Louvor#2024";

/// Test context containing the app plus two logged-in sessions
pub struct TestContext {
    pub app: axum::Router,
    pub admin_token: String,
    pub member_token: String,
}

fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        session: SessionConfig {
            secret: "integration-test-secret-at-least-32-bytes".to_string(),
        },
        store: StoreConfig {
            latency_ms: 0,
            seed_demo: false,
        },
    }
}

impl TestContext {
    /// Creates a new test context with fresh stores and both seeded sessions
    pub async fn new() -> anyhow::Result<Self> {
        let state = AppState::new(test_config());
        state.seed().await?;
        let app = build_router(state);

        let admin_token = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await?;
        let member_token = login(&app, MEMBER_EMAIL, MEMBER_PASSWORD).await?;

        Ok(TestContext {
            app,
            admin_token,
            member_token,
        })
    }

    /// Sends a request with the admin session
    pub async fn admin(&self, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
        send(&self.app, method, uri, Some(&self.admin_token), body).await
    }

    /// Sends a request with the member session
    pub async fn member(&self, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
        send(&self.app, method, uri, Some(&self.member_token), body).await
    }

    /// Sends a request with no session at all
    pub async fn anonymous(&self, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
        send(&self.app, method, uri, None, body).await
    }

    /// Admin request that must succeed with the given status; returns the body
    pub async fn admin_json(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        expected: StatusCode,
    ) -> Value {
        let response = self.admin(method, uri, body).await;
        let status = response.status();
        let body = read_json(response).await;
        assert_eq!(status, expected, "unexpected status for {uri}: {body}");
        body
    }
}

/// Logs in through the API and returns the session token
pub async fn login(app: &axum::Router, email: &str, password: &str) -> anyhow::Result<String> {
    let response = send(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;

    if response.status() != StatusCode::OK {
        anyhow::bail!("login failed for {email}: {}", response.status());
    }

    let body = read_json(response).await;
    Ok(body["token"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("login response missing token"))?
        .to_string())
}

/// Builds and sends one request against a clone of the router
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// Reads a response body as JSON (empty bodies become `Value::Null`)
pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    }
}
