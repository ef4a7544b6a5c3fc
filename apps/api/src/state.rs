use std::sync::Arc;

use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-submission data; every comparison is independent.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `LlmClient` in production, a scripted mock in tests.
    pub llm: Arc<dyn CompletionService>,
}
