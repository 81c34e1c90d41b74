// Analysis pipeline: structured job analysis and combined job + resume tailoring analysis.
// One model call per request, no validator, no revision.

pub mod handlers;
pub mod prompts;

use tracing::info;

use crate::contracts::{JobAnalysis, TailoringAnalysis};
use crate::llm_client::structured::{call_contract, CallSite, GenerationError};
use crate::llm_client::{GenerationConfig, ModelGateway};
use crate::models::JobPosting;

/// Extracts a `JobAnalysis` from a posting.
pub async fn analyze_job(
    gateway: &dyn ModelGateway,
    job: &JobPosting,
) -> Result<JobAnalysis, GenerationError> {
    let analysis: JobAnalysis = call_contract(
        gateway,
        CallSite::JOB_ANALYSIS,
        &prompts::job_analysis_prompt(job),
        GenerationConfig::JOB_ANALYSIS,
    )
    .await?;

    info!(
        must = analysis.req.must.len(),
        nice = analysis.req.nice.len(),
        "Job analysis complete"
    );
    Ok(analysis)
}

/// Analyzes the job and scores the resume against it in a single call.
pub async fn analyze_tailoring(
    gateway: &dyn ModelGateway,
    job: &JobPosting,
    resume_text: &str,
) -> Result<TailoringAnalysis, GenerationError> {
    let analysis: TailoringAnalysis = call_contract(
        gateway,
        CallSite::TAILORING_ANALYSIS,
        &prompts::tailoring_analysis_prompt(job, resume_text),
        GenerationConfig::TAILORING_ANALYSIS,
    )
    .await?;

    info!(
        match_score = analysis.resume_analysis.overall.match_score,
        missing_info = analysis.resume_analysis.missing_info.len(),
        "Tailoring analysis complete"
    );
    Ok(analysis)
}
