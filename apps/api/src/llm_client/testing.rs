//! Scripted in-memory gateway for pipeline and handler tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{GenerationConfig, LlmError, ModelGateway, ModelRequest};

/// One request as the gateway saw it.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub schema: Value,
    pub config: GenerationConfig,
}

/// Replays queued responses in order and records every request.
/// Runs out with an API error rather than panicking inside the pipeline.
pub struct ScriptedGateway {
    responses: Mutex<VecDeque<Result<String, LlmError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedGateway {
    pub fn new(responses: impl IntoIterator<Item = Result<String, LlmError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Number of calls made with the given sampling preset.
    pub fn calls_with(&self, config: GenerationConfig) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.config == config)
            .count()
    }
}

#[async_trait]
impl ModelGateway for ScriptedGateway {
    fn model_name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &ModelRequest<'_>) -> Result<Option<String>, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: request.prompt.to_string(),
            schema: request.schema.clone(),
            config: request.config,
        });

        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(Some(text)),
            Some(Err(e)) => Err(e),
            None => Err(LlmError::Api {
                status: 599,
                message: "scripted gateway has no more responses".to_string(),
            }),
        }
    }
}
