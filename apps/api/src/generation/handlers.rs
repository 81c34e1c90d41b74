//! Axum route handlers for the drafting API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::contracts::{JobAnalysis, ResumeAnalysis, ResumeDraft};
use crate::errors::AppError;
use crate::generation::context::DraftContext;
use crate::generation::orchestrator::Orchestrator;
use crate::models::{Answers, JobPosting};
use crate::routes::Data;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDraftRequest {
    pub job: Option<JobPosting>,
    pub resume_text: Option<String>,
    pub job_analysis: Option<JobAnalysis>,
    pub resume_analysis: Option<ResumeAnalysis>,
    pub answers: Option<Answers>,
}

impl ResumeDraftRequest {
    /// Checks required inputs and builds the pipeline context.
    pub fn into_context(self) -> Result<DraftContext, AppError> {
        let job = self
            .job
            .ok_or_else(|| AppError::Validation("Missing job payload".to_string()))?;
        if !job.has_description() {
            return Err(AppError::Validation(
                "Missing job descriptionText".to_string(),
            ));
        }
        let resume_text = self
            .resume_text
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Missing resumeText".to_string()))?;

        let mut ctx = DraftContext::new(job, resume_text);
        ctx.job_analysis = self.job_analysis;
        ctx.resume_analysis = self.resume_analysis;
        ctx.answers = self.answers.unwrap_or_default();
        Ok(ctx)
    }
}

/// POST /resume-draft
///
/// Draft → validate → at most one revision. Returns the selected draft.
pub async fn handle_resume_draft(
    State(state): State<AppState>,
    payload: Result<Json<ResumeDraftRequest>, JsonRejection>,
) -> Result<Json<Data<ResumeDraft>>, AppError> {
    let Json(request) = payload?;
    let ctx = request.into_context()?;

    let outcome = Orchestrator::new(state.llm.clone()).run(&ctx).await?;
    tracing::info!(
        path = outcome.path.as_str(),
        follow_up_questions = outcome
            .report
            .as_ref()
            .map_or(0, |r| r.follow_up_questions.len()),
        "Resume draft ready"
    );

    Ok(Json(Data::new(outcome.draft)))
}
