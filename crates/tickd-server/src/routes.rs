// ABOUTME: Route definitions for the tickd HTTP API.
// ABOUTME: Assembles all routes into a single Axum Router with shared state and request tracing.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::SharedState;

/// Build the complete Axum router with all routes and shared state.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(hostname))
        .route("/health", get(health))
        .route(
            "/counter",
            get(api::counters::list_counters).post(api::counters::create_counter),
        )
        .route("/counter/{id}", get(api::counters::get_counter))
        .route("/counter/{id}/stop", post(api::counters::stop_counter))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler. Returns 200 OK with a simple JSON body.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET / - Report which host answered.
async fn hostname(State(state): State<SharedState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "hostname": state.hostname }))
}

/// JSON 404 for unmatched routes.
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found" })),
    )
}
