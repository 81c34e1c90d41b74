//! Draft orchestrator: draft → validate → (accept | revise once).
//!
//! ```text
//! Draft1 ──► Validate ──► Done(draft1)        validator unavailable or accepted
//!                    └──► Draft2 ──► Done     revision required, never re-validated
//! ```
//!
//! At most three model calls per run. Draft failures propagate; validator failures
//! fail open to the current draft.

use std::sync::Arc;

use tracing::{field, info, info_span, Instrument, Span};
use uuid::Uuid;

use crate::contracts::{ResumeDraft, ValidatorReport};
use crate::generation::context::{DraftContext, RevisionContext};
use crate::generation::generator::DraftGenerator;
use crate::generation::validator::{DraftValidator, ValidatorOutcome};
use crate::llm_client::structured::GenerationError;
use crate::llm_client::ModelGateway;

/// Terminal path a run took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPath {
    ValidatorUnavailable,
    Accepted,
    Revised,
}

impl DraftPath {
    pub fn as_str(self) -> &'static str {
        match self {
            DraftPath::ValidatorUnavailable => "validator_unavailable",
            DraftPath::Accepted => "accepted",
            DraftPath::Revised => "revised",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DraftOutcome {
    pub draft: ResumeDraft,
    pub path: DraftPath,
    /// The report that decided the path, when the validator produced one.
    pub report: Option<ValidatorReport>,
}

pub struct Orchestrator {
    generator: DraftGenerator,
    validator: DraftValidator,
}

impl Orchestrator {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self {
            generator: DraftGenerator::new(gateway.clone()),
            validator: DraftValidator::new(gateway),
        }
    }

    pub async fn run(&self, ctx: &DraftContext) -> Result<DraftOutcome, GenerationError> {
        let span = info_span!(
            "resume_draft",
            run_id = %Uuid::new_v4(),
            path = field::Empty
        );
        self.run_inner(ctx).instrument(span).await
    }

    async fn run_inner(&self, ctx: &DraftContext) -> Result<DraftOutcome, GenerationError> {
        let draft = self.generator.generate(ctx, None).await?;

        let report = match self.validator.validate(ctx, &draft).await {
            ValidatorOutcome::Unavailable => {
                return Ok(finish(draft, DraftPath::ValidatorUnavailable, None));
            }
            ValidatorOutcome::Available(report) => report,
        };

        if !report.requires_revision() {
            return Ok(finish(draft, DraftPath::Accepted, Some(report)));
        }

        info!(
            needs_revision = report.needs_revision,
            grounded = %report.grounded,
            "Validator requested a revision"
        );
        let revision = RevisionContext {
            fix_instructions: &report.fix_instructions,
            prior_draft: &draft,
        };
        let revised = self.generator.generate(ctx, Some(&revision)).await?;

        Ok(finish(revised, DraftPath::Revised, Some(report)))
    }
}

fn finish(draft: ResumeDraft, path: DraftPath, report: Option<ValidatorReport>) -> DraftOutcome {
    Span::current().record("path", path.as_str());
    info!(path = path.as_str(), "Resume draft pipeline finished");
    DraftOutcome {
        draft,
        path,
        report,
    }
}
