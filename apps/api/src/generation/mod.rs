// Resume drafting pipeline: draft → validate → at most one revision.
// All model calls go through llm_client; nothing here talks to Gemini directly.

pub mod context;
pub mod generator;
pub mod handlers;
pub mod orchestrator;
pub mod prompts;
pub mod validator;

#[cfg(test)]
pub mod fixtures;
