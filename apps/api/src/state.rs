use std::sync::Arc;

use crate::llm_client::ModelGateway;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Stateless model handle shared by every pipeline run.
    pub llm: Arc<dyn ModelGateway>,
}

impl AppState {
    pub fn new(llm: Arc<dyn ModelGateway>) -> Self {
        Self { llm }
    }
}
