//! Audit report produced by the draft validator. Never persisted.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Contract;

/// The only `grounded` value that forces a revision on its own.
pub const UNGROUNDED: &str = "no";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ValidatorReport {
    /// True only if an unmet gap can be fixed from existing evidence.
    pub needs_revision: bool,
    /// "yes", "no", or "partial".
    pub grounded: String,
    /// Must-have requirements the draft does not address.
    pub unmet_must_haves: Vec<String>,
    /// Draft claims not traceable to the resume text, answers, or analyses.
    pub potential_fabrications: Vec<String>,
    /// Generic filler phrases that should be replaced or removed.
    pub generic_phrases: Vec<String>,
    /// Concrete edit instructions for a revision pass. Must not ask for new facts.
    pub fix_instructions: String,
    /// Questions for the candidate about gaps that cannot be fixed from evidence.
    pub follow_up_questions: Vec<String>,
}

impl ValidatorReport {
    /// Whether this report sends the pipeline into a revision pass.
    pub fn requires_revision(&self) -> bool {
        self.needs_revision || self.grounded == UNGROUNDED
    }
}

impl Contract for ValidatorReport {
    const NAME: &'static str = "resume_draft_validator_report";
}
