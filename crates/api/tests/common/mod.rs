//! Common test utilities for integration tests.
//!
//! The router is driven in-process over the in-memory store set, so no
//! database is required.

// Not every integration test binary uses every helper.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use domain::store::memory::MemoryStore;
use domain::Stores;
use serde_json::Value;
use socialboost_api::{
    app::create_app,
    config::{
        AdminBootstrapConfig, Config, CookieConfig, DatabaseConfig, LoggingConfig, SecurityConfig,
        SeedConfig, ServerConfig,
    },
};
use tower::ServiceExt;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "integration-password";

/// Test configuration; nothing is read from the environment.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_secs: 30,
            max_body_size: 1_048_576,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            connect_timeout_secs: 1,
            idle_timeout_secs: 1,
        },
        logging: LoggingConfig {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig::default(),
        cookie: CookieConfig::default(),
        admin: AdminBootstrapConfig::default(),
        seed: SeedConfig::default(),
        environment: "test".to_string(),
    }
}

/// Fresh in-memory stores with the bootstrap admin already created.
pub async fn test_stores() -> Stores {
    let stores = MemoryStore::new().into_stores();
    let created =
        domain::services::admin_auth::create_admin(&stores, ADMIN_USERNAME, ADMIN_PASSWORD).await;
    assert!(created.success, "failed to create test admin");
    stores
}

/// Router plus a handle on its stores for direct fixture setup.
pub async fn create_test_app() -> (Router, Stores) {
    let stores = test_stores().await;
    (create_app(test_config(), stores.clone()), stores)
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn json_request_with_cookie(method: Method, uri: &str, body: Value, cookie: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, cookie)
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn request_with_cookie(method: Method, uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

pub async fn parse_response_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}

/// Logs in as the test admin and returns the `name=value` pair to send
/// back in a `Cookie` header.
pub async fn admin_cookie(app: &Router) -> String {
    let request = json_request(
        Method::POST,
        "/api/admin/login",
        serde_json::json!({"username": ADMIN_USERNAME, "password": ADMIN_PASSWORD}),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login did not set a cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

pub fn order_payload(email: &str) -> Value {
    serde_json::json!({
        "platform": "Instagram",
        "service": "Followers",
        "link": "https://instagram.com/someone",
        "quantity": 100,
        "total": 50.0,
        "name": "Jane Doe",
        "email": email,
        "message": "Please deliver gradually"
    })
}
