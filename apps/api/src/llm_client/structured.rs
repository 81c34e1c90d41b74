//! Structured model calls: prompt → gateway → JSON → strict contract.
//!
//! Every pipeline that needs a typed payload from the model goes through
//! `call_contract`, so empty/invalid/mismatched output is classified and logged
//! the same way everywhere.

use thiserror::Error;
use tracing::{error, info, warn};

use crate::contracts::{self, Contract, SchemaError, SchemaIssue};
use crate::llm_client::{preview, GenerationConfig, LlmError, ModelGateway, ModelRequest};

/// Preview length logged for successful responses.
const RESPONSE_PREVIEW_CHARS: usize = 500;
/// Preview length logged when a response fails to parse.
const FAILURE_PREVIEW_CHARS: usize = 1000;

/// Identifies a structured call in error messages and log `kind` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// Human-readable label, e.g. "resume generation".
    pub label: &'static str,
    /// Log kind prefix, e.g. "gemini.resume-generate".
    pub log_kind: &'static str,
}

impl CallSite {
    pub const RESUME_GENERATE: Self = Self {
        label: "resume generation",
        log_kind: "gemini.resume-generate",
    };
    pub const DRAFT_VALIDATOR: Self = Self {
        label: "draft validator",
        log_kind: "gemini.resume-generate.validator",
    };
    pub const JOB_ANALYSIS: Self = Self {
        label: "job analysis",
        log_kind: "gemini.job-analysis",
    };
    pub const TAILORING_ANALYSIS: Self = Self {
        label: "resume analysis",
        log_kind: "gemini.resume-analysis",
    };

    fn kind(&self, suffix: &str) -> String {
        format!("{}.{suffix}", self.log_kind)
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Empty model response ({label})")]
    EmptyResponse { label: &'static str },

    #[error("Model returned invalid JSON ({label})")]
    InvalidJson {
        label: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Model output did not match schema ({label})")]
    SchemaMismatch {
        label: &'static str,
        issues: Vec<SchemaIssue>,
    },

    #[error("Model call failed ({label}): {source}")]
    Gateway {
        label: &'static str,
        #[source]
        source: LlmError,
    },
}

impl GenerationError {
    /// True when the model answered but the answer was unusable
    /// (as opposed to the call itself failing).
    pub fn is_bad_model_output(&self) -> bool {
        !matches!(self, GenerationError::Gateway { .. })
    }
}

/// Calls the model constrained to contract `T` and validates the result.
pub async fn call_contract<T: Contract>(
    gateway: &dyn ModelGateway,
    site: CallSite,
    prompt: &str,
    config: GenerationConfig,
) -> Result<T, GenerationError> {
    let schema = contracts::render::<T>();
    let request = ModelRequest {
        prompt,
        schema: &schema,
        config,
    };

    let text = match gateway.generate(&request).await {
        Ok(text) => text,
        Err(LlmError::EmptyResponse) => {
            warn!(kind = %site.kind("empty-response"), "Model returned an empty response");
            return Err(GenerationError::EmptyResponse { label: site.label });
        }
        Err(e) => {
            error!(
                kind = %site.kind("call-error"),
                model = %gateway.model_name(),
                prompt_len = prompt.len(),
                error = %e,
                "Model call failed"
            );
            return Err(GenerationError::Gateway {
                label: site.label,
                source: e,
            });
        }
    };

    info!(
        kind = %site.kind("response"),
        text_len = text.len(),
        text_preview = %preview(&text, RESPONSE_PREVIEW_CHARS),
        "Model response received ({})",
        site.label
    );

    contracts::parse::<T>(&text).map_err(|e| match e {
        SchemaError::InvalidJson(source) => {
            error!(
                kind = %site.kind("json-parse-error"),
                message = %source,
                text_len = text.len(),
                text_preview = %preview(&text, FAILURE_PREVIEW_CHARS),
                "Failed to parse model JSON ({})",
                site.label
            );
            GenerationError::InvalidJson {
                label: site.label,
                source,
            }
        }
        SchemaError::Mismatch { contract, issues } => {
            error!(
                kind = %site.kind("schema-parse-error"),
                contract,
                issues = ?issues.iter().map(ToString::to_string).collect::<Vec<_>>(),
                text_len = text.len(),
                text_preview = %preview(&text, FAILURE_PREVIEW_CHARS),
                "Model JSON did not match schema ({})",
                site.label
            );
            GenerationError::SchemaMismatch {
                label: site.label,
                issues,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::ValidatorReport;
    use crate::llm_client::testing::ScriptedGateway;

    const VALID_REPORT: &str = r#"{
        "needsRevision": false, "grounded": "yes", "unmetMustHaves": [],
        "potentialFabrications": [], "genericPhrases": [], "fixInstructions": "",
        "followUpQuestions": []
    }"#;

    #[tokio::test]
    async fn test_valid_output_parsed_and_schema_sent() {
        let gateway = ScriptedGateway::new([Ok(VALID_REPORT.to_string())]);
        let report: ValidatorReport = call_contract(
            &gateway,
            CallSite::DRAFT_VALIDATOR,
            "audit this",
            GenerationConfig::VALIDATOR,
        )
        .await
        .unwrap();

        assert!(!report.needs_revision);
        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].prompt, "audit this");
        assert_eq!(calls[0].config, GenerationConfig::VALIDATOR);
        assert_eq!(calls[0].schema, contracts::render::<ValidatorReport>());
    }

    #[tokio::test]
    async fn test_blank_output_is_empty_response() {
        let gateway = ScriptedGateway::new([Ok("   ".to_string())]);
        let err = call_contract::<ValidatorReport>(
            &gateway,
            CallSite::DRAFT_VALIDATOR,
            "p",
            GenerationConfig::VALIDATOR,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse { .. }));
        assert!(err.is_bad_model_output());
    }

    #[tokio::test]
    async fn test_prose_output_is_invalid_json() {
        let gateway = ScriptedGateway::new([Ok("Sure! Here is the report.".to_string())]);
        let err = call_contract::<ValidatorReport>(
            &gateway,
            CallSite::RESUME_GENERATE,
            "p",
            GenerationConfig::DRAFT,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, GenerationError::InvalidJson { .. }));
        assert_eq!(
            err.to_string(),
            "Model returned invalid JSON (resume generation)"
        );
    }

    #[tokio::test]
    async fn test_wrong_shape_is_schema_mismatch() {
        let gateway = ScriptedGateway::new([Ok(r#"{"needsRevision": "maybe"}"#.to_string())]);
        let err = call_contract::<ValidatorReport>(
            &gateway,
            CallSite::DRAFT_VALIDATOR,
            "p",
            GenerationConfig::VALIDATOR,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, GenerationError::SchemaMismatch { .. }));
    }

    #[tokio::test]
    async fn test_transport_failure_is_gateway_error() {
        let gateway = ScriptedGateway::new([Err(LlmError::Api {
            status: 500,
            message: "boom".to_string(),
        })]);
        let err = call_contract::<ValidatorReport>(
            &gateway,
            CallSite::DRAFT_VALIDATOR,
            "p",
            GenerationConfig::VALIDATOR,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, GenerationError::Gateway { .. }));
        assert!(!err.is_bad_model_output());
    }
}
