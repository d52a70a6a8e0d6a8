use std::sync::Arc;

use crate::advice::references::ReferenceLibrary;
use crate::config::Config;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. Default: GeminiClient.
    pub llm: Arc<dyn CompletionService>,
    pub config: Config,
    /// Read-only reference tables, built once at startup.
    pub library: Arc<ReferenceLibrary>,
}
