//! Shared fixtures for drafting pipeline tests.

use serde_json::{json, Value};

use crate::generation::context::DraftContext;
use crate::models::job::Requirements;
use crate::models::JobPosting;

pub const DRAFT_JSON: &str = r#"{
    "headline": "Senior Backend Engineer",
    "summary": "Backend engineer with five years of Go and production on-call ownership.",
    "experience": [{
        "company": "Pay Inc",
        "title": "Backend Engineer",
        "start": "2019",
        "end": "Present",
        "bullets": ["Built payment APIs in Go", "Carried the on-call pager for the payments platform"]
    }],
    "projects": "",
    "skills": "Go, PostgreSQL",
    "education": "BSc Computer Science"
}"#;

/// A second, distinguishable draft for revision-pass assertions.
pub const REVISED_DRAFT_JSON: &str = r#"{
    "headline": "Senior Backend Engineer (Go)",
    "summary": "Go backend engineer who owns payments reliability end to end.",
    "experience": [{
        "company": "Pay Inc",
        "title": "Backend Engineer",
        "bullets": ["Carried the on-call pager for the payments platform", "Built payment APIs in Go"]
    }],
    "projects": "",
    "skills": "Go, PostgreSQL",
    "education": "BSc Computer Science"
}"#;

pub fn report_json(needs_revision: bool, grounded: &str, fix_instructions: &str) -> String {
    let report: Value = json!({
        "needsRevision": needs_revision,
        "grounded": grounded,
        "unmetMustHaves": if needs_revision { json!(["Kubernetes"]) } else { json!([]) },
        "potentialFabrications": [],
        "genericPhrases": [],
        "fixInstructions": fix_instructions,
        "followUpQuestions": []
    });
    report.to_string()
}

pub fn draft_context() -> DraftContext {
    DraftContext::new(
        JobPosting {
            company: "Acme".to_string(),
            role_title: "Senior Backend Engineer".to_string(),
            description_text: "Senior Backend Engineer...".to_string(),
            requirements: Requirements {
                must_have: vec!["Go".to_string(), "Kubernetes".to_string()],
                ..Default::default()
            },
            ..Default::default()
        },
        "5 years Go, on-call...",
    )
}
