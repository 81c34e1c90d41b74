//! The tailored resume draft: the only entity the drafting pipeline produces.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Contract;

/// One role in the experience section. Bullets keep the model's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExperienceItem {
    pub company: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Start date as written in the resume (e.g. "2019-04" or "Apr 2019").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// End date as written in the resume, or "Present".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// Achievement bullets, strongest first. Only facts present in the source material.
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResumeDraft {
    /// One-line professional headline targeted at the role.
    pub headline: String,
    /// Short professional summary (2-4 sentences).
    pub summary: String,
    pub experience: Vec<ExperienceItem>,
    /// Projects section as plain text.
    pub projects: String,
    /// Skills section as plain text.
    pub skills: String,
    /// Education section as plain text.
    pub education: String,
}

impl ResumeDraft {
    pub fn bullet_count(&self) -> usize {
        self.experience.iter().map(|e| e.bullets.len()).sum()
    }
}

impl Contract for ResumeDraft {
    const NAME: &'static str = "resume_draft";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::parse;
    use serde_json::json;

    #[test]
    fn test_draft_round_trips_through_contract() {
        let draft = ResumeDraft {
            headline: "Senior Backend Engineer".to_string(),
            summary: "Backend engineer with 5 years of Go.".to_string(),
            experience: vec![ExperienceItem {
                company: "Acme".to_string(),
                title: "Backend Engineer".to_string(),
                location: None,
                start: Some("2019".to_string()),
                end: Some("Present".to_string()),
                bullets: vec![
                    "Built payment APIs in Go".to_string(),
                    "Ran weekly on-call rotation".to_string(),
                ],
            }],
            projects: String::new(),
            skills: "Go, PostgreSQL".to_string(),
            education: "BSc Computer Science".to_string(),
        };

        let json = serde_json::to_string(&draft).unwrap();
        let recovered: ResumeDraft = parse(&json).unwrap();
        assert_eq!(recovered, draft);
        assert_eq!(recovered.bullet_count(), 2);
    }

    #[test]
    fn test_experience_as_string_rejected() {
        // Older drafts stored experience as free text; the contract requires items.
        let payload = json!({
            "headline": "h", "summary": "s", "experience": "Acme 2019-2024",
            "projects": "", "skills": "", "education": ""
        });
        assert!(parse::<ResumeDraft>(&payload.to_string()).is_err());
    }

    #[test]
    fn test_experience_item_requires_bullets() {
        let payload = json!({
            "headline": "h", "summary": "s",
            "experience": [{"company": "Acme", "title": "Engineer"}],
            "projects": "", "skills": "", "education": ""
        });
        assert!(parse::<ResumeDraft>(&payload.to_string()).is_err());
    }
}
