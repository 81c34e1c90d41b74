//! Axum route handlers for the analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::analysis::{analyze_job, analyze_tailoring};
use crate::contracts::{JobAnalysis, TailoringAnalysis};
use crate::errors::AppError;
use crate::models::JobPosting;
use crate::routes::Data;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisRequest {
    pub job: Option<JobPosting>,
    pub resume_text: Option<String>,
}

impl AnalysisRequest {
    fn job(&mut self) -> Result<JobPosting, AppError> {
        let job = self
            .job
            .take()
            .ok_or_else(|| AppError::Validation("Missing job payload".to_string()))?;
        if !job.has_description() {
            return Err(AppError::Validation(
                "Missing job descriptionText".to_string(),
            ));
        }
        Ok(job.normalized())
    }

    fn resume_text(&mut self) -> Result<String, AppError> {
        self.resume_text
            .take()
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Missing resumeText".to_string()))
    }
}

/// POST /job-analysis
pub async fn handle_job_analysis(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<Data<JobAnalysis>>, AppError> {
    let Json(mut request) = payload?;
    let job = request.job()?;

    let analysis = analyze_job(state.llm.as_ref(), &job).await?;
    Ok(Json(Data::new(analysis)))
}

/// POST /resume-analysis
///
/// Job analysis and resume analysis in one model call.
pub async fn handle_resume_analysis(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<Data<TailoringAnalysis>>, AppError> {
    let Json(mut request) = payload?;
    let job = request.job()?;
    let resume_text = request.resume_text()?;

    let analysis = analyze_tailoring(state.llm.as_ref(), &job, &resume_text).await?;
    Ok(Json(Data::new(analysis)))
}
