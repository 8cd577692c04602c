use std::sync::Arc;

use crate::llm_client::GenerativeModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model backend. Production wires `GeminiClient`; tests
    /// substitute a canned backend.
    pub model: Arc<dyn GenerativeModel>,
}
