//! `resume_analysis_core.v1`: how well a resume fits a job, and what is missing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Contract, SchemaIssue};

const MIN_MATCH_SCORE: f64 = 0.0;
const MAX_MATCH_SCORE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ResumeAnalysisVersion {
    #[serde(rename = "resume_analysis_core.v1")]
    V1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OverallFit {
    /// Match score between 0 and 100 inclusive.
    #[schemars(range(min = 0, max = 100))]
    pub match_score: f64,
    pub summary: String,
}

/// A concrete piece of information missing from the resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MissingInfo {
    /// A direct question the candidate can answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// What information is missing (e.g. metric, tool, scope, timeline).
    pub field: String,
    /// How it would improve tailoring or credibility.
    pub why: String,
    /// An example of the kind of answer expected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_answer: Option<String>,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResumeAnalysis {
    pub schema: ResumeAnalysisVersion,
    pub overall: OverallFit,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendations: Vec<String>,
    pub missing_info: Vec<MissingInfo>,
}

impl Contract for ResumeAnalysis {
    const NAME: &'static str = "resume_analysis_core.v1";

    fn check(&self) -> Vec<SchemaIssue> {
        let score = self.overall.match_score;
        if (MIN_MATCH_SCORE..=MAX_MATCH_SCORE).contains(&score) {
            Vec::new()
        } else {
            vec![SchemaIssue::new(
                "overall.matchScore",
                format!("must be between 0 and 100, got {score}"),
            )]
        }
    }
}
