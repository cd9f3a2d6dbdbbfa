//! Shared helpers for qatrack-axum integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use qatrack_axum::bootstrap::{CorsConfig, ServerConfig, bootstrap};
use qatrack_axum::routes::create_router;
use qatrack_core::{NewTestCase, NewUser, Role};

pub const ADMIN: &str = "a1";
pub const TESTER_ONE: &str = "u1";
pub const TESTER_TWO: &str = "u2";

/// Router over a fresh in-memory store seeded with one admin, two testers
/// and the tests `T1` and `T2`.
pub async fn seeded_app() -> Router {
    let ctx = bootstrap(ServerConfig::in_memory()).await.unwrap();

    for (id, role) in [
        (ADMIN, Role::Admin),
        (TESTER_ONE, Role::Tester),
        (TESTER_TWO, Role::Tester),
    ] {
        ctx.core
            .roles()
            .provision(&NewUser {
                id: id.to_string(),
                display_name: id.to_uppercase(),
                role,
            })
            .await
            .unwrap();
    }
    for id in ["T1", "T2"] {
        ctx.core
            .gate()
            .create_test(
                ADMIN,
                &NewTestCase {
                    id: id.to_string(),
                    title: format!("Test {id}"),
                    category: "smoke".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();
    }

    create_router(Arc::new(ctx), &CorsConfig::AllowAll)
}

/// Send one request and decode the JSON response (Null for empty bodies).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    caller: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(caller) = caller {
        builder = builder.header("x-user-id", caller);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, json)
}
