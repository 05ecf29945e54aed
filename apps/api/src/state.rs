use std::sync::Arc;

use crate::config::Config;
use crate::ingest::store::ResumeStore;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Gemini in production; tests plug in a canned generator.
    pub llm: Arc<dyn TextGenerator>,
    pub store: Arc<dyn ResumeStore>,
    pub config: Arc<Config>,
}
