use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Candidate-supplied answers keyed by missing-info identifier.
/// Ordered so prompt serialization is deterministic.
pub type Answers = BTreeMap<String, String>;

/// User-entered requirement chips, bucketed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Requirements {
    pub must_have: Vec<String>,
    pub nice_to_have: Vec<String>,
    pub keywords: Vec<String>,
}

impl Requirements {
    /// Trims every chip, drops blank ones, and removes duplicates within each list.
    /// First occurrence wins, so order is preserved.
    pub fn normalized(&self) -> Self {
        Self {
            must_have: dedup_chips(&self.must_have),
            nice_to_have: dedup_chips(&self.nice_to_have),
            keywords: dedup_chips(&self.keywords),
        }
    }
}

fn dedup_chips(items: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let trimmed = item.trim();
        if !trimmed.is_empty() && !out.iter().any(|existing| existing == trimmed) {
            out.push(trimmed.to_string());
        }
    }
    out
}

/// A job posting as entered by the user. Absent fields default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPosting {
    pub company: String,
    pub role_title: String,
    pub location: String,
    pub seniority: String,
    pub description_text: String,
    pub requirements: Requirements,
}

/// The metadata subset of a posting that goes into prompts as JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMeta<'a> {
    pub company: &'a str,
    pub role_title: &'a str,
    pub location: &'a str,
    pub seniority: &'a str,
}

impl JobPosting {
    pub fn meta(&self) -> JobMeta<'_> {
        JobMeta {
            company: &self.company,
            role_title: &self.role_title,
            location: &self.location,
            seniority: &self.seniority,
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description_text.trim().is_empty()
    }

    /// Copy of the posting with requirement chips normalized.
    pub fn normalized(mut self) -> Self {
        self.requirements = self.requirements.normalized();
        self
    }
}
