//! Integration tests for the Axum web server.
//!
//! Each test drives the full router over an in-memory database.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{ADMIN, TESTER_ONE, TESTER_TWO, seeded_app, send};

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("OK"));
}

#[tokio::test]
async fn claim_release_reclaim() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::POST, "/api/tests/T1/assign", Some(TESTER_ONE), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["assignedTo"], TESTER_ONE);

    let (status, body) = send(&app, Method::POST, "/api/tests/T1/assign", Some(TESTER_TWO), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["type"], "ALREADY_ASSIGNED");

    let (status, body) = send(&app, Method::POST, "/api/tests/T1/unassign", Some(TESTER_TWO), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["type"], "NOT_OWNER");

    let (status, body) = send(&app, Method::POST, "/api/tests/T1/unassign", Some(TESTER_ONE), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["assignedTo"].is_null());

    let (status, body) = send(&app, Method::POST, "/api/tests/T1/assign", Some(TESTER_TWO), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["assignedTo"], TESTER_TWO);
}

#[tokio::test]
async fn admin_toggle_blocks_claims() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::POST, "/api/tests/T2/disabled", Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["disabled"], true);

    let (status, body) = send(&app, Method::POST, "/api/tests/T2/assign", Some(TESTER_ONE), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["type"], "DISABLED");

    // Explicit target is idempotent.
    for _ in 0..2 {
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/tests/T2/disabled",
            Some(ADMIN),
            Some(json!({ "disabled": false })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["disabled"], false);
    }
}

#[tokio::test]
async fn tester_cannot_toggle() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::POST, "/api/tests/T1/disabled", Some(TESTER_ONE), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["type"], "FORBIDDEN");
    assert_eq!(body["status"], 403);

    let (_, test) = send(&app, Method::GET, "/api/tests/T1", None, None).await;
    assert_eq!(test["disabled"], false);
}

#[tokio::test]
async fn missing_caller_header_is_unauthenticated() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::POST, "/api/tests/T1/assign", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["type"], "UNAUTHENTICATED");

    let (status, _) = send(&app, Method::GET, "/api/users/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_test_and_caller_are_not_found() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::GET, "/api/tests/T404", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["type"], "NOT_FOUND");

    let (status, _) = send(&app, Method::POST, "/api/tests/T1/assign", Some("ghost"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn progress_upsert_and_list_newest_first() {
    let app = seeded_app().await;

    for (caller, test) in [(TESTER_ONE, "T1"), (TESTER_TWO, "T2"), (TESTER_ONE, "T2")] {
        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/api/progress/{test}"),
            Some(caller),
            Some(json!({ "completed": true, "notes": "ok" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["userId"], caller);
    }

    let (status, body) = send(&app, Method::GET, "/api/progress", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 3);
    let stamps: Vec<&str> = records
        .iter()
        .map(|r| r["updatedAt"].as_str().unwrap())
        .collect();
    let parsed: Vec<chrono::DateTime<chrono::Utc>> =
        stamps.iter().map(|s| s.parse().unwrap()).collect();
    assert!(parsed.windows(2).all(|w| w[0] >= w[1]));

    let (_, mine) = send(&app, Method::GET, "/api/progress?userId=u1", None, None).await;
    assert_eq!(mine.as_array().unwrap().len(), 2);

    let (status, summary) = send(&app, Method::GET, "/api/users/u1/progress", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["completed"], 2);
    assert_eq!(summary["total"], 2);
}

#[tokio::test]
async fn progress_requires_completed_field() {
    let app = seeded_app().await;
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/progress/T1",
        Some(TESTER_ONE),
        Some(json!({ "notes": "forgot the flag" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "INVALID_INPUT");
}

#[tokio::test]
async fn create_test_is_admin_only_and_validated() {
    let app = seeded_app().await;
    let new_test = json!({ "id": "T3", "title": "Logout", "category": "auth" });

    let (status, _) = send(&app, Method::POST, "/api/tests", Some(TESTER_ONE), Some(new_test.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, Method::POST, "/api/tests", Some(ADMIN), Some(new_test.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "T3");

    let (status, body) = send(&app, Method::POST, "/api/tests", Some(ADMIN), Some(new_test)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["type"], "CONFLICT");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/tests",
        Some(ADMIN),
        Some(json!({ "id": "T4", "category": "auth" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "INVALID_INPUT");
}

#[tokio::test]
async fn users_and_cards() {
    let app = seeded_app().await;

    let (status, me) = send(&app, Method::GET, "/api/users/me", Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["role"], "admin");

    let (_, users) = send(&app, Method::GET, "/api/users", None, None).await;
    assert_eq!(users.as_array().unwrap().len(), 3);

    let (status, cards) = send(&app, Method::GET, "/api/tests/T1/cards", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cards, json!([]));

    let (status, _) = send(&app, Method::GET, "/api/tests/T404/cards", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
