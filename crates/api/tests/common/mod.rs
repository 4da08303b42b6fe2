#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, LazyLock};

use axum::body::Body;
use axum::extract::connect_info::MockConnectInfo;
use axum::http::{Method, Request, Response};
use axum::Router;
use folio_core::rate_limit::RateLimit;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use folio_api::auth::admin_secret::{hash_secret, AdminGate};
use folio_api::config::{ClientUrls, CorsOrigins, ServerConfig};
use folio_api::middleware::rate_limit::AdminRateLimiter;
use folio_api::router::build_app_router;
use folio_api::state::AppState;

pub const ADMIN_SECRET: &str = "test-admin-secret";

/// Peer address reported to handlers when no `X-Forwarded-For` is sent.
pub const PEER_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 40000);

static ADMIN_SECRET_HASH: LazyLock<String> =
    LazyLock::new(|| hash_secret(ADMIN_SECRET).expect("hashing should succeed"));

/// Build a test `ServerConfig` with safe defaults.
///
/// Trusts `X-Forwarded-For` so tests can act as several origins.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        api_version: "v1".to_string(),
        client_urls: ClientUrls {
            api_url: "/api/v1/projects".to_string(),
            verify_url: "/api/v1/verify-admin".to_string(),
        },
        cors_origins: CorsOrigins::List(vec!["http://localhost:5173".parse().unwrap()]),
        request_timeout_secs: 30,
        admin_secret_hash: ADMIN_SECRET_HASH.clone(),
        admin_rate_limit: RateLimit::default(),
        like_cooldown_secs: 10,
        like_history_retention_hours: 24,
        trust_proxy: true,
    }
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config()).0
}

/// Like [`build_test_app`] with a custom config. Also returns the state so
/// tests can reach the rate limiter.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> (Router, AppState) {
    let state = AppState {
        pool,
        admin_gate: Arc::new(
            AdminGate::new(config.admin_secret_hash.as_str()).expect("test hash should parse"),
        ),
        admin_limiter: Arc::new(AdminRateLimiter::new(config.admin_rate_limit)),
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state.clone(), &config)
        .layer(MockConnectInfo(SocketAddr::from(PEER_ADDR)));
    (app, state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Builder for a single test request.
pub struct TestRequest {
    method: Method,
    uri: String,
    headers: Vec<(&'static str, String)>,
    body: Option<Value>,
}

impl TestRequest {
    pub fn new(method: Method, uri: &str) -> Self {
        Self {
            method,
            uri: uri.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn admin(self, secret: &str) -> Self {
        self.header("x-admin", secret)
    }

    pub fn origin(self, ip: &str) -> Self {
        self.header("x-forwarded-for", ip)
    }

    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub async fn send(self, app: &Router) -> Response<Body> {
        let mut builder = Request::builder().method(self.method).uri(self.uri);
        for (name, value) in self.headers {
            builder = builder.header(name, value);
        }
        let request = match self.body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    TestRequest::new(Method::GET, uri).send(app).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a project as admin and return its JSON `data`.
pub async fn create_project(app: &Router, body: Value) -> Value {
    let response = TestRequest::new(Method::POST, "/api/v1/projects")
        .admin(ADMIN_SECRET)
        .json(body)
        .send(app)
        .await;
    assert_eq!(response.status(), 201, "create should succeed");
    body_json(response).await["data"].clone()
}

pub fn project_body(title: &str) -> Value {
    serde_json::json!({
        "title": title,
        "description": "A project used by the integration tests",
        "category": "web",
    })
}
