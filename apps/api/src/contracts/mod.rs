//! Schema contracts: strict structural definitions for every model-facing payload.
//!
//! Each contract is used twice: rendered as a JSON Schema that constrains the model's
//! output, then used again to validate whatever text the model actually returned.
//!
//! Strictness rules (all enforced by `parse`):
//! - unknown fields are rejected (`deny_unknown_fields` on every object)
//! - required fields must be present; only `Option` fields may be omitted
//! - enums are closed sets
//! - numeric ranges are checked by `Contract::check`

use std::fmt;

use schemars::gen::SchemaSettings;
use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

pub mod job_analysis;
pub mod resume_analysis;
pub mod resume_draft;
pub mod tailoring;
pub mod validator_report;

pub use job_analysis::JobAnalysis;
pub use resume_analysis::ResumeAnalysis;
pub use resume_draft::ResumeDraft;
pub use tailoring::TailoringAnalysis;
pub use validator_report::ValidatorReport;

/// A single reason a payload failed its contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaIssue {
    /// Dotted path relative to the payload root. Empty for whole-document errors.
    pub path: String,
    pub message: String,
}

impl SchemaIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Re-roots the issue under `prefix` (used by contracts that embed other contracts).
    pub fn nested(self, prefix: &str) -> Self {
        let path = if self.path.is_empty() {
            prefix.to_string()
        } else {
            format!("{prefix}.{}", self.path)
        };
        Self { path, ..self }
    }
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("{contract} did not match schema: {}", join_issues(.issues))]
    Mismatch {
        contract: &'static str,
        issues: Vec<SchemaIssue>,
    },
}

fn join_issues(issues: &[SchemaIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A model-facing payload type.
///
/// Structure comes from the serde/schemars derives; `check` covers the constraints
/// serde cannot express on its own (numeric ranges and the like).
pub trait Contract: Serialize + DeserializeOwned + JsonSchema {
    /// Stable name used in logs and error messages.
    const NAME: &'static str;

    fn check(&self) -> Vec<SchemaIssue> {
        Vec::new()
    }
}

/// Renders the contract as a self-contained JSON Schema (no `$ref`, no `$schema`).
///
/// Optional fields are left out of `required` rather than typed as nullable, and every
/// object carries `additionalProperties: false`.
pub fn render<T: Contract>() -> Value {
    let settings = SchemaSettings::draft07().with(|s| {
        s.inline_subschemas = true;
        s.option_add_null_type = false;
        s.option_nullable = false;
        s.meta_schema = None;
    });
    let root = settings.into_generator().into_root_schema_for::<T>();
    serde_json::to_value(root).unwrap_or(Value::Null)
}

/// Parses raw model text and validates it against contract `T`.
pub fn parse<T: Contract>(raw: &str) -> Result<T, SchemaError> {
    let value: Value = serde_json::from_str(raw).map_err(SchemaError::InvalidJson)?;
    from_value(value)
}

/// Validates an already-parsed JSON value against contract `T`.
pub fn from_value<T: Contract>(value: Value) -> Result<T, SchemaError> {
    let parsed: T = serde_json::from_value(value).map_err(|e| SchemaError::Mismatch {
        contract: T::NAME,
        issues: vec![SchemaIssue::new("", e.to_string())],
    })?;

    let issues = parsed.check();
    if issues.is_empty() {
        Ok(parsed)
    } else {
        Err(SchemaError::Mismatch {
            contract: T::NAME,
            issues,
        })
    }
}
