//! Integration tests for the `/api/stats` singleton endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: GET on an empty store creates and returns the defaults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_on_empty_store_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = get(app, "/api/stats").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["_id"], "stats");
    assert_eq!(json["projects"], 0);
    assert_eq!(json["tech"], 0);
    assert_eq!(json["years"], 0);
    assert_eq!(json["commit"], 100);
}

// ---------------------------------------------------------------------------
// Test: POST on an empty store creates the singleton with the given values
// ---------------------------------------------------------------------------

#[tokio::test]
async fn set_on_empty_store_then_get_returns_written_values() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = post_json(
        app.clone(),
        "/api/stats",
        json!({ "projects": 12, "tech": 8, "years": 3, "commit": 150 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let written = body_json(response).await;
    assert_eq!(written["projects"], 12);
    assert_eq!(written["commit"], 150);

    let fetched = body_json(get(app, "/api/stats").await).await;
    assert_eq!(fetched["projects"], 12);
    assert_eq!(fetched["tech"], 8);
    assert_eq!(fetched["years"], 3);
    assert_eq!(fetched["commit"], 150);
}

// ---------------------------------------------------------------------------
// Test: POST overwrites an existing singleton in place
// ---------------------------------------------------------------------------

#[tokio::test]
async fn set_overwrites_existing_record() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    // Initialize with defaults first.
    get(app.clone(), "/api/stats").await;

    post_json(
        app.clone(),
        "/api/stats",
        json!({ "projects": 1, "tech": 2, "years": 3, "commit": 4 }),
    )
    .await;

    let fetched = body_json(get(app, "/api/stats").await).await;
    assert_eq!(fetched["_id"], "stats");
    assert_eq!(fetched["projects"], 1);
    assert_eq!(fetched["tech"], 2);
    assert_eq!(fetched["years"], 3);
    assert_eq!(fetched["commit"], 4);
}

// ---------------------------------------------------------------------------
// Test: non-numeric input is rejected at deserialization
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_numeric_input_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = post_json(
        app,
        "/api/stats",
        json!({ "projects": "twelve", "tech": 8, "years": 3, "commit": 150 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
