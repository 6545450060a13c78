// ABOUTME: End-to-end smoke test for the full counter lifecycle.
// ABOUTME: Tests creation, progress reads, listing, stop, and not-found over the in-memory store.

use std::sync::Arc;

use axum::body::Body;
use http::Request;
use tickd_core::CounterEngine;
use tickd_server::{AppState, create_router};
use tickd_store::MemoryStore;
use tower::ServiceExt;

/// Helper to create a test AppState over the in-memory store.
fn test_app_state() -> Arc<AppState> {
    let engine = CounterEngine::new(Arc::new(MemoryStore::new()));
    Arc::new(AppState::new(engine, "smoke-host".to_string()))
}

/// Helper to extract a JSON body from a response.
async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn smoke_test_full_lifecycle() {
    let state = test_app_state();

    // 1. GET / -> hostname
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let json = json_body(resp).await;
    assert_eq!(json["hostname"], "smoke-host");

    // 2. GET /counter -> empty list
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(Request::get("/counter").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let json = json_body(resp).await;
    assert_eq!(json["ids"].as_array().unwrap().len(), 0);

    // 3. POST /counter?to=1000 -> create
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(
            Request::post("/counter?to=1000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 201, "create counter should return 201");
    let json = json_body(resp).await;
    let id = json["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty(), "id should be present");

    // 4. GET /counter/{id} -> progress just started
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(
            Request::get(format!("/counter/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let json = json_body(resp).await;
    assert_eq!(json["to"], 1000);
    // A second may tick between create and read; current stays near 1.
    let current = json["current"].as_i64().unwrap();
    assert!((1..=2).contains(&current), "current was {}", current);

    // 5. GET /counter -> exactly the created id
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(Request::get("/counter").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = json_body(resp).await;
    let ids = json["ids"].as_array().unwrap();
    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0], id.as_str());

    // 6. POST /counter/{id}/stop -> 204
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(
            Request::post(format!("/counter/{}/stop", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 204, "stop should return 204");

    // 7. GET /counter/{id} -> gone
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(
            Request::get(format!("/counter/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let json = json_body(resp).await;
    assert_eq!(json["error"], format!("no such counter with {}", id));

    // 8. Stop again -> still 204 (idempotent)
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(
            Request::post(format!("/counter/{}/stop", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);
}

#[tokio::test]
async fn smoke_test_invalid_duration_rejected_at_the_edge() {
    let state = test_app_state();

    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(
            Request::post("/counter?to=tomorrow")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let json = json_body(resp).await;
    assert_eq!(json["error"], "the value tomorrow is invalid");

    // Nothing was created.
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(Request::get("/counter").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = json_body(resp).await;
    assert_eq!(json["ids"].as_array().unwrap().len(), 0);
}
