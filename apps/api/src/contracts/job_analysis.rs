//! `job_analysis_core.v1`: normalized role metadata and requirement buckets.
//! Produced by the analysis pipeline; consumed as optional context by drafting.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Contract;

/// Version tag. Only one version is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum JobAnalysisVersion {
    #[serde(rename = "job_analysis_core.v1")]
    V1,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SeniorityLevel {
    Intern,
    Junior,
    Mid,
    Senior,
    Staff,
    Principal,
    Manager,
    Director,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RoleMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub level: SeniorityLevel,
    /// Job function, e.g. "Backend Engineering".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RequirementBuckets {
    /// Must-have requirements.
    pub must: Vec<String>,
    /// Nice-to-have requirements.
    pub nice: Vec<String>,
    /// ATS keywords, acronyms, domains.
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RoleSignals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leadership: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobAnalysis {
    pub schema: JobAnalysisVersion,
    pub job: RoleMeta,
    pub req: RequirementBuckets,
    pub signals: RoleSignals,
}

impl Contract for JobAnalysis {
    const NAME: &'static str = "job_analysis_core.v1";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::{parse, SchemaError};
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "schema": "job_analysis_core.v1",
            "job": {"company": "Acme", "title": "Senior Backend Engineer", "level": "senior"},
            "req": {"must": ["Go", "On-call experience"], "nice": ["Kubernetes"], "keywords": ["SRE"]},
            "signals": {"minYears": 5, "leadership": false}
        })
    }

    #[test]
    fn test_job_analysis_parses() {
        let analysis: JobAnalysis = parse(&sample().to_string()).unwrap();
        assert_eq!(analysis.job.level, SeniorityLevel::Senior);
        assert_eq!(analysis.req.must.len(), 2);
        assert_eq!(analysis.signals.min_years, Some(5));
        assert!(analysis.job.location.is_none());
    }

    #[test]
    fn test_wrong_version_tag_rejected() {
        let mut payload = sample();
        payload["schema"] = json!("job_analysis_core.v2");
        assert!(matches!(
            parse::<JobAnalysis>(&payload.to_string()),
            Err(SchemaError::Mismatch { .. })
        ));
    }

    #[test]
    fn test_level_outside_closed_set_rejected() {
        let mut payload = sample();
        payload["job"]["level"] = json!("wizard");
        assert!(parse::<JobAnalysis>(&payload.to_string()).is_err());
    }

    #[test]
    fn test_negative_min_years_rejected() {
        let mut payload = sample();
        payload["signals"]["minYears"] = json!(-1);
        assert!(parse::<JobAnalysis>(&payload.to_string()).is_err());
    }

    #[test]
    fn test_extra_field_in_nested_object_rejected() {
        let mut payload = sample();
        payload["req"]["bonus"] = json!([]);
        assert!(parse::<JobAnalysis>(&payload.to_string()).is_err());
    }

    #[test]
    fn test_version_tag_rendered_as_single_value_enum() {
        let schema = crate::contracts::render::<JobAnalysis>();
        assert_eq!(
            schema["properties"]["schema"]["enum"],
            json!(["job_analysis_core.v1"])
        );
    }
}
