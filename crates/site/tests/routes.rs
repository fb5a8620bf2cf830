//! Router tests that run without a database.
//!
//! The pool points at a closed port and is connected lazily, so only the
//! paths that never reach `PostgreSQL` (or that degrade when it is down) are
//! exercised here.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;
use std::time::Duration;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use secrecy::SecretString;
use serde_json::{Value, json};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use hearth_site::config::{AdminCredentials, MediaConfig, SiteConfig};
use hearth_site::services::auth::hash_password;
use hearth_site::state::AppState;

fn test_config() -> SiteConfig {
    SiteConfig {
        database_url: SecretString::from("postgres://hearth@127.0.0.1:1/hearth_test"),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        admin: AdminCredentials {
            username: "owner".to_string(),
            password_hash: SecretString::from(hash_password("kitchen-door-42").unwrap()),
        },
        media: MediaConfig {
            upload_dir: PathBuf::from("target/test-uploads"),
            public_base_url: "http://localhost:3000/uploads".to_string(),
            max_upload_bytes: 1024,
        },
        log_json: false,
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

fn test_app() -> Router {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(250))
        .connect_lazy("postgres://hearth@127.0.0.1:1/hearth_test")
        .unwrap();

    hearth_site::app(AppState::new(test_config(), pool))
}

async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn send_json(method: Method, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, bytes) = send(request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn test_readiness_reports_unavailable_database() {
    let (status, _) = send(get("/health/ready")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_responses_carry_security_headers_and_request_id() {
    let response = test_app().oneshot(get("/health")).await.unwrap();
    let headers = response.headers();

    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_admin_routes_require_session() {
    let cases = [
        (Method::PUT, "/api/admin/business-info", json!({ "name": "Hearth" })),
        (Method::POST, "/api/admin/categories", json!({ "name": "Starters" })),
        (Method::PUT, "/api/admin/categories/1", json!({ "name": "Starters" })),
        (Method::DELETE, "/api/admin/menu-items/1", json!({})),
        (Method::POST, "/api/admin/photos", json!({ "url": "/uploads/a.png" })),
        (Method::DELETE, "/api/admin/gift-shop/3", json!({})),
        (Method::PUT, "/api/admin/settings/hero.title", json!("Welcome")),
        (Method::POST, "/api/admin/upload", json!({})),
    ];

    for (method, uri, body) in cases {
        let (status, json) = send_json(method.clone(), uri, &body).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(json["success"], false, "{method} {uri}");
        assert_eq!(json["error"], "Login required", "{method} {uri}");
    }
}

#[tokio::test]
async fn test_session_status_when_logged_out() {
    let (status, bytes) = send(get("/api/admin/session")).await;
    let json: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({ "success": true, "data": { "authenticated": false } })
    );
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let (status, json) = send_json(
        Method::POST,
        "/api/admin/login",
        &json!({ "username": "owner", "password": "front-door" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json, json!({ "success": false, "error": "Invalid credentials" }));
}

#[tokio::test]
async fn test_malformed_json_uses_error_envelope() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/admin/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, bytes) = send(request).await;
    let json: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_hours_fall_back_to_default_schedule() {
    let (status, bytes) = send(get("/api/business-info/hours")).await;
    let json: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["is_default"], true);
    assert_eq!(
        json["data"]["rows"],
        json!([
            "Mon Closed",
            "Tue\u{2013}Thu 10:00am \u{2013} 11:30pm",
            "Fri\u{2013}Sat 10:00am \u{2013} 1:00am",
            "Sun 10:00am \u{2013} 7:00pm",
        ])
    );
}

#[tokio::test]
async fn test_home_page_renders_default_hours() {
    let (status, bytes) = send(get("/")).await;
    let html = String::from_utf8(bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Hearth"));
    assert!(html.contains("Mon Closed"));
}

#[tokio::test]
async fn test_database_failure_hides_details() {
    let (status, bytes) = send(get("/api/categories")).await;
    let json: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json,
        json!({ "success": false, "error": "Internal server error" })
    );
}
