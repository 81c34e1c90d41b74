//! Request-scoped inputs shared by every stage of the drafting pipeline.

use crate::contracts::{JobAnalysis, ResumeAnalysis, ResumeDraft};
use crate::models::{Answers, JobPosting};

/// Everything the generator and validator see. Built once per request.
#[derive(Debug, Clone, Default)]
pub struct DraftContext {
    pub job: JobPosting,
    pub resume_text: String,
    pub job_analysis: Option<JobAnalysis>,
    pub resume_analysis: Option<ResumeAnalysis>,
    pub answers: Answers,
}

impl DraftContext {
    /// Context with requirement chips normalized and no optional inputs.
    pub fn new(job: JobPosting, resume_text: impl Into<String>) -> Self {
        Self {
            job: job.normalized(),
            resume_text: resume_text.into(),
            ..Default::default()
        }
    }

    /// Answers with blank values dropped and surrounding whitespace trimmed.
    pub fn answered(&self) -> Answers {
        self.answers
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(k, v)| (k.clone(), v.trim().to_string()))
            .collect()
    }
}

/// Extra input for the single revision pass.
#[derive(Debug, Clone, Copy)]
pub struct RevisionContext<'a> {
    /// Validator instructions, passed through verbatim.
    pub fix_instructions: &'a str,
    pub prior_draft: &'a ResumeDraft,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::Requirements;

    #[test]
    fn test_new_normalizes_requirements() {
        let job = JobPosting {
            description_text: "Backend role".to_string(),
            requirements: Requirements {
                must_have: vec!["Go".into(), "Go".into(), " ".into()],
                ..Default::default()
            },
            ..Default::default()
        };
        let ctx = DraftContext::new(job, "resume");
        assert_eq!(ctx.job.requirements.must_have, vec!["Go".to_string()]);
    }

    #[test]
    fn test_answered_drops_blank_answers() {
        let mut ctx = DraftContext::new(JobPosting::default(), "resume");
        ctx.answers.insert("k8s".into(), "  Ran 40 services on GKE ".into());
        ctx.answers.insert("team_size".into(), "   ".into());

        let answered = ctx.answered();
        assert_eq!(answered.len(), 1);
        assert_eq!(answered["k8s"], "Ran 40 services on GKE");
    }
}
