// ABOUTME: Counter API handlers: list, create, read progress, and stop.
// ABOUTME: Translates engine results into JSON responses; duration validation lives here, not in the engine.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use tickd_core::EngineError;

use crate::app_state::SharedState;

/// Query parameters for counter creation.
#[derive(Debug, Deserialize)]
pub struct CreateParams {
    pub to: Option<String>,
}

/// Opaque 500 body; the specific engine error goes to the log, not the
/// caller.
fn internal_error(err: EngineError) -> (StatusCode, Json<serde_json::Value>) {
    tracing::error!(error = %err, "engine operation failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "Internal Server Error" })),
    )
}

/// GET /counter - List all registered counter ids.
pub async fn list_counters(State(state): State<SharedState>) -> impl IntoResponse {
    match state.engine.list_ids().await {
        Ok(ids) => (StatusCode::OK, Json(serde_json::json!({ "ids": ids }))).into_response(),
        Err(e) => internal_error(e).into_response(),
    }
}

/// POST /counter?to=[int] - Create a counter and return its id.
///
/// The engine accepts any integer duration, including non-positive ones;
/// the only validation here is that `to` is present and parses as i64.
pub async fn create_counter(
    State(state): State<SharedState>,
    Query(params): Query<CreateParams>,
) -> impl IntoResponse {
    let to = match params.to.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "param to is required" })),
            )
                .into_response();
        }
    };

    let duration: i64 = match to.parse() {
        Ok(d) => d,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": format!("the value {} is invalid", to) })),
            )
                .into_response();
        }
    };

    match state.engine.generate(duration).await {
        Ok(id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": id })),
        )
            .into_response(),
        Err(e) => internal_error(e).into_response(),
    }
}

/// GET /counter/{id} - Current progress of one counter.
pub async fn get_counter(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let result = match state.engine.get(&id).await {
        Ok(r) => r,
        Err(e) => return internal_error(e).into_response(),
    };

    if !result.exists {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("no such counter with {}", id) })),
        )
            .into_response();
    }

    Json(result).into_response()
}

/// POST /counter/{id}/stop - Delete a counter. Idempotent.
pub async fn stop_counter(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.engine.delete(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => internal_error(e).into_response(),
    }
}
