// Prompts for the analysis pipeline.

use crate::llm_client::prompts::{PromptBuilder, JSON_ONLY_INSTRUCTION};
use crate::models::JobPosting;

const JOB_ANALYSIS_INSTRUCTIONS: &[&str] = &[
    "You are an expert resume strategist. Extract structured job information.",
    JSON_ONLY_INSTRUCTION,
];

const JOB_ANALYSIS_RULES: &[&str] = &[
    "schema must be \"job_analysis_core.v1\".",
    "req.must holds hard requirements only; preferences go in req.nice.",
    "Use level \"unknown\" when the posting does not make seniority clear.",
    "Keep lists short (prefer 5-10 items each) and remove duplicates.",
];

const TAILORING_INSTRUCTIONS: &[&str] = &[
    "You are an expert resume strategist and resume reviewer.",
    "Return a SINGLE JSON object with EXACTLY two top-level keys: \"jobAnalysis\" and \"resumeAnalysis\".",
    "Be conservative: do not invent facts; only cite evidence present in the resume text.",
    JSON_ONLY_INSTRUCTION,
];

const TAILORING_RULES: &[&str] = &[
    "jobAnalysis.schema must be \"job_analysis_core.v1\".",
    "resumeAnalysis.schema must be \"resume_analysis_core.v1\".",
    "resumeAnalysis.overall.matchScore is a number from 0 to 100.",
    "Do NOT ask generic open-ended questions. Populate resumeAnalysis.missingInfo with concrete, answerable missing details.",
    "Give every missingInfo item a concise candidate-facing question whenever possible.",
    "Keep lists short (prefer 5-10 items each) and remove duplicates.",
];

fn with_job(builder: PromptBuilder, job: &JobPosting) -> PromptBuilder {
    builder
        .json("Job meta", &job.meta())
        .json("Structured requirements (user-provided)", &job.requirements)
}

pub fn job_analysis_prompt(job: &JobPosting) -> String {
    let builder = PromptBuilder::new()
        .instructions(JOB_ANALYSIS_INSTRUCTIONS)
        .rules("Output constraints", JOB_ANALYSIS_RULES);
    with_job(builder, job)
        .text("Job description", &job.description_text)
        .build()
}

pub fn tailoring_analysis_prompt(job: &JobPosting, resume_text: &str) -> String {
    let builder = PromptBuilder::new()
        .instructions(TAILORING_INSTRUCTIONS)
        .rules("Output constraints", TAILORING_RULES);
    with_job(builder, job)
        .text("Job description", &job.description_text)
        .text("Resume text", resume_text)
        .build()
}
