//! Draft generator: one model call that yields one schema-valid `ResumeDraft`.
//!
//! Flow: draft_prompt → gateway (draft schema, temp 0.2, 8192 tokens) → JSON → contract.
//! Every failure is returned to the caller; nothing is retried here.

use std::sync::Arc;

use tracing::info;

use crate::contracts::ResumeDraft;
use crate::generation::context::{DraftContext, RevisionContext};
use crate::generation::prompts::draft_prompt;
use crate::llm_client::structured::{call_contract, CallSite, GenerationError};
use crate::llm_client::{GenerationConfig, ModelGateway};

pub struct DraftGenerator {
    gateway: Arc<dyn ModelGateway>,
}

impl DraftGenerator {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    /// Generates a draft. Pass `revision` only for the revision pass.
    pub async fn generate(
        &self,
        ctx: &DraftContext,
        revision: Option<&RevisionContext<'_>>,
    ) -> Result<ResumeDraft, GenerationError> {
        let prompt = draft_prompt(ctx, revision);

        let draft: ResumeDraft = call_contract(
            self.gateway.as_ref(),
            CallSite::RESUME_GENERATE,
            &prompt,
            GenerationConfig::DRAFT,
        )
        .await?;

        info!(
            revision = revision.is_some(),
            roles = draft.experience.len(),
            bullets = draft.bullet_count(),
            "Resume draft generated"
        );
        Ok(draft)
    }
}
