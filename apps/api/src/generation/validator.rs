//! Draft validator: an independent audit of a draft against the source material.
//!
//! The validator is advisory. Any failure (transport, empty output, bad JSON, schema
//! mismatch) yields `ValidatorOutcome::Unavailable` and never an error.

use std::sync::Arc;

use tracing::{info, warn};

use crate::contracts::{ResumeDraft, ValidatorReport};
use crate::generation::context::DraftContext;
use crate::generation::prompts::validation_prompt;
use crate::llm_client::structured::{call_contract, CallSite};
use crate::llm_client::{GenerationConfig, ModelGateway};

#[derive(Debug, Clone, PartialEq)]
pub enum ValidatorOutcome {
    Available(ValidatorReport),
    Unavailable,
}

pub struct DraftValidator {
    gateway: Arc<dyn ModelGateway>,
}

impl DraftValidator {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    pub async fn validate(&self, ctx: &DraftContext, draft: &ResumeDraft) -> ValidatorOutcome {
        let prompt = validation_prompt(ctx, draft);

        match call_contract::<ValidatorReport>(
            self.gateway.as_ref(),
            CallSite::DRAFT_VALIDATOR,
            &prompt,
            GenerationConfig::VALIDATOR,
        )
        .await
        {
            Ok(report) => {
                info!(
                    needs_revision = report.needs_revision,
                    grounded = %report.grounded,
                    unmet = report.unmet_must_haves.len(),
                    fabrications = report.potential_fabrications.len(),
                    "Draft validator report received"
                );
                ValidatorOutcome::Available(report)
            }
            Err(e) => {
                warn!(error = %e, "Draft validator unavailable, keeping current draft");
                ValidatorOutcome::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::fixtures::{draft_context, report_json, DRAFT_JSON};
    use crate::llm_client::testing::ScriptedGateway;
    use crate::llm_client::LlmError;

    fn draft() -> ResumeDraft {
        serde_json::from_str(DRAFT_JSON).unwrap()
    }

    async fn outcome_for(response: Result<String, LlmError>) -> (ValidatorOutcome, usize) {
        let gateway = Arc::new(ScriptedGateway::new([response]));
        let outcome = DraftValidator::new(gateway.clone())
            .validate(&draft_context(), &draft())
            .await;
        (outcome, gateway.calls_with(GenerationConfig::VALIDATOR))
    }

    #[tokio::test]
    async fn test_report_available() {
        let (outcome, calls) = outcome_for(Ok(report_json(true, "partial", "Surface Kubernetes"))).await;
        assert_eq!(calls, 1);
        match outcome {
            ValidatorOutcome::Available(report) => {
                assert!(report.needs_revision);
                assert_eq!(report.fix_instructions, "Surface Kubernetes");
            }
            ValidatorOutcome::Unavailable => panic!("expected a report"),
        }
    }

    #[tokio::test]
    async fn test_prompt_carries_draft_under_audit() {
        let gateway = Arc::new(ScriptedGateway::new([Ok(report_json(false, "yes", ""))]));
        DraftValidator::new(gateway.clone())
            .validate(&draft_context(), &draft())
            .await;
        let prompt = &gateway.calls()[0].prompt;
        assert!(prompt.contains("Carried the on-call pager for the payments platform"));
    }

    #[tokio::test]
    async fn test_unparsable_output_is_unavailable() {
        let (outcome, _) = outcome_for(Ok("I think the draft looks fine".to_string())).await;
        assert_eq!(outcome, ValidatorOutcome::Unavailable);
    }

    #[tokio::test]
    async fn test_empty_output_is_unavailable() {
        let (outcome, _) = outcome_for(Ok("\n".to_string())).await;
        assert_eq!(outcome, ValidatorOutcome::Unavailable);
    }

    #[tokio::test]
    async fn test_report_missing_fields_is_unavailable() {
        let (outcome, _) = outcome_for(Ok(r#"{"needsRevision": true}"#.to_string())).await;
        assert_eq!(outcome, ValidatorOutcome::Unavailable);
    }

    #[tokio::test]
    async fn test_gateway_failure_is_unavailable() {
        let (outcome, _) = outcome_for(Err(LlmError::Api {
            status: 503,
            message: "overloaded".to_string(),
        }))
        .await;
        assert_eq!(outcome, ValidatorOutcome::Unavailable);
    }
}
