//! Combined job + resume analysis returned by a single tailoring-analysis call.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Contract, JobAnalysis, ResumeAnalysis, SchemaIssue};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TailoringAnalysis {
    pub job_analysis: JobAnalysis,
    pub resume_analysis: ResumeAnalysis,
}

impl Contract for TailoringAnalysis {
    const NAME: &'static str = "tailoring_analysis";

    fn check(&self) -> Vec<SchemaIssue> {
        self.job_analysis
            .check()
            .into_iter()
            .map(|i| i.nested("jobAnalysis"))
            .chain(
                self.resume_analysis
                    .check()
                    .into_iter()
                    .map(|i| i.nested("resumeAnalysis")),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::{parse, SchemaError};
    use serde_json::json;

    fn payload(score: f64) -> String {
        json!({
            "jobAnalysis": {
                "schema": "job_analysis_core.v1",
                "job": {"level": "mid"},
                "req": {"must": ["Rust"], "nice": [], "keywords": []},
                "signals": {}
            },
            "resumeAnalysis": {
                "schema": "resume_analysis_core.v1",
                "overall": {"matchScore": score, "summary": "ok"},
                "strengths": [],
                "gaps": [],
                "recommendations": [],
                "missingInfo": []
            }
        })
        .to_string()
    }

    #[test]
    fn test_combined_analysis_parses() {
        let combined: TailoringAnalysis = parse(&payload(64.0)).unwrap();
        assert_eq!(combined.job_analysis.req.must, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_nested_range_violation_reported_under_resume_analysis() {
        match parse::<TailoringAnalysis>(&payload(150.0)) {
            Err(SchemaError::Mismatch { issues, .. }) => {
                assert_eq!(issues[0].path, "resumeAnalysis.overall.matchScore");
            }
            other => panic!("expected Mismatch, got {other:?}"),
        }
    }
}
