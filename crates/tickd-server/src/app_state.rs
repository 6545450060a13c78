// ABOUTME: Shared application state for the tickd HTTP server.
// ABOUTME: Holds the counter engine and the hostname reported at the root route.

use std::sync::Arc;

use tickd_core::CounterEngine;

/// Shared state accessible by all Axum handlers. The engine is stateless,
/// so handlers call it concurrently without coordination.
pub struct AppState {
    pub engine: CounterEngine,
    pub hostname: String,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(engine: CounterEngine, hostname: String) -> Self {
        Self { engine, hostname }
    }
}
