// ABOUTME: HTTP server for tickd, translating requests into counter engine calls.
// ABOUTME: Uses Axum with shared engine state; all counter semantics live in tickd-core.

pub mod api;
pub mod app_state;
pub mod config;
pub mod routes;

pub use app_state::{AppState, SharedState};
pub use config::{Config, ConfigError};
pub use routes::create_router;
