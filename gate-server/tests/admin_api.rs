//! Admin API tests
//!
//! Drives the composed axum app in-process with `tower::ServiceExt`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use gate_server::api;
use gate_server::core::{Config, ServerState};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

async fn test_app() -> (Router, ServerState, TempDir) {
    let dir = TempDir::new().expect("create temp dir");
    let config = Config::with_overrides(dir.path().to_string_lossy(), 0, "127.0.0.1:1");
    let state = ServerState::initialize(&config).await.expect("init state");
    (api::build_app(state.clone()), state, dir)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json body")
}

#[tokio::test]
async fn test_health() {
    let (app, _state, _dir) = test_app().await;

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_employee_crud_roundtrip() {
    let (app, _state, _dir) = test_app().await;

    // Create
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/employees",
            json!({"code": "E001", "first_name": "Ada", "last_name": "Lovelace", "department": "R&D"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = json_body(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["badges"], json!([]));

    // Add a badge (lowercase input is normalized)
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/employees/{id}/badges"),
            json!({"code_hex": "1a2b", "code_dec": "6699"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let badge = json_body(response).await;
    assert_eq!(badge["code_hex"], "1A2B");

    // Fetch shows the badge
    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/employees/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = json_body(response).await;
    assert_eq!(fetched["badges"][0]["code_hex"], "1A2B");

    // Duplicate badge is a conflict
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/employees/{id}/badges"),
            json!({"code_hex": "1A2B"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_employee_validation_and_not_found() {
    let (app, _state, _dir) = test_app().await;

    // Empty code → 400
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/employees",
            json!({"code": "  ", "first_name": "Ada", "last_name": "Lovelace"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown id → 404
    let response = app
        .clone()
        .oneshot(get_request("/api/employees/424242"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_access_window_rejected_over_http() {
    let (app, _state, _dir) = test_app().await;

    // Inverted (midnight-spanning) window → 400
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/accesses",
            json!({"name": "Night", "start_secs": 64800, "end_secs": 28800}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_access_grant_flow() {
    let (app, _state, _dir) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/employees",
            json!({"code": "E001", "first_name": "Ada", "last_name": "Lovelace"}),
        ))
        .await
        .unwrap();
    let employee = json_body(response).await;
    let employee_id = employee["id"].as_i64().unwrap();

    app.clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/employees/{employee_id}/badges"),
            json!({"code_hex": "1A2B"}),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/accesses",
            json!({"name": "Day", "start_secs": 28800, "end_secs": 64800}),
        ))
        .await
        .unwrap();
    let access = json_body(response).await;
    let access_id = access["id"].as_i64().unwrap();

    // Grant the badge; the employee snapshot is denormalized onto the grant
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/accesses/{access_id}/badges"),
            json!({"code_hex": "1A2B"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let grant = json_body(response).await;
    assert_eq!(grant["employee_name"], "Ada Lovelace");
    assert_eq!(grant["employee_code"], "E001");

    // Revoke and confirm
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/accesses/{access_id}/badges/1A2B"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/accesses/{access_id}")))
        .await
        .unwrap();
    let fetched = json_body(response).await;
    assert_eq!(fetched["badges"], json!([]));
}

#[tokio::test]
async fn test_events_list_empty() {
    let (app, _state, _dir) = test_app().await;

    let response = app.oneshot(get_request("/api/events")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["items"], json!([]));
}
