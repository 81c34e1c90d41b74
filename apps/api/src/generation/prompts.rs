// Prompts for the drafting pipeline: initial draft, revision, and validation audit.
// Pure functions of their inputs; no model calls, no I/O.

use crate::contracts::ResumeDraft;
use crate::generation::context::{DraftContext, RevisionContext};
use crate::llm_client::prompts::{PromptBuilder, GROUNDING_RULES, JSON_ONLY_INSTRUCTION};

pub const REVISION_TITLE: &str = "Validator fix instructions (follow exactly, do not add facts)";
pub const PRIOR_DRAFT_TITLE: &str = "Prior draft (for reference)";
pub const DRAFT_UNDER_AUDIT_TITLE: &str = "Draft under audit";

const DRAFT_INSTRUCTIONS: &[&str] = &[
    "You are an expert resume writer. Rewrite the candidate's resume so it is tailored to the job below.",
    JSON_ONLY_INSTRUCTION,
];

const DRAFT_FORMAT_RULES: &[&str] = &[
    "headline: one line aimed at the target role title.",
    "summary: 2-4 sentences, no first-person pronouns.",
    "experience: keep every role from the resume, most recent first; 3-6 bullets for recent roles, each opening with a strong verb.",
    "Lead with the evidence that best covers the must-have requirements.",
    "Use job keywords only where the resume or answers support them. Never keyword-stuff.",
    "Avoid generic filler such as \"results-driven\", \"team player\", or \"passionate\".",
    "projects, skills, education: plain text built only from the candidate's own facts.",
];

const AUDIT_INSTRUCTIONS: &[&str] = &[
    "You are a strict resume auditor. Check the draft against the source material below.",
    "Do NOT rewrite the draft and do NOT add facts.",
    JSON_ONLY_INSTRUCTION,
];

const AUDIT_RULES: &[&str] = &[
    "Treat a claim as supported ONLY if it is traceable to the resume text, the candidate answers, or evidence explicitly cited in the job or resume analysis.",
    "List in potentialFabrications every bullet or phrase that introduces an unsupported tool, metric, or claim.",
    "List in unmetMustHaves each must-have requirement the draft does not address.",
    "List in genericPhrases filler phrases that carry no evidence.",
    "Set needsRevision to true ONLY if an unmet or unsupported item can be fixed from existing evidence (rewording, reordering, surfacing facts already present, or removing unsupported claims).",
    "Never recommend adding unverified facts. Turn such gaps into followUpQuestions instead.",
    "grounded: \"yes\" if every claim is supported, \"partial\" for minor issues, \"no\" if the draft contains fabrications.",
    "fixInstructions: concrete edits only; an empty string when needsRevision is false.",
];

/// Structured context blocks followed by the raw source text, in fixed order.
fn with_context(builder: PromptBuilder, ctx: &DraftContext) -> PromptBuilder {
    builder
        .json("Job meta", &ctx.job.meta())
        .json(
            "Structured requirements (user-provided)",
            &ctx.job.requirements,
        )
        .json("Job analysis JSON", &ctx.job_analysis)
        .json("Resume analysis JSON", &ctx.resume_analysis)
        .json("Candidate answers (verified by the candidate)", &ctx.answered())
}

fn with_source_text(builder: PromptBuilder, ctx: &DraftContext) -> PromptBuilder {
    builder
        .text("Job description", &ctx.job.description_text)
        .text("Resume text", &ctx.resume_text)
}

/// Draft prompt. With a revision context carrying non-blank fix instructions, the
/// instructions and the prior draft are appended after the base prompt.
pub fn draft_prompt(ctx: &DraftContext, revision: Option<&RevisionContext<'_>>) -> String {
    let builder = PromptBuilder::new()
        .instructions(DRAFT_INSTRUCTIONS)
        .rules("GROUNDING RULES", GROUNDING_RULES)
        .rules("FORMATTING RULES", DRAFT_FORMAT_RULES);
    let builder = with_source_text(with_context(builder, ctx), ctx);

    match revision.filter(|r| !r.fix_instructions.trim().is_empty()) {
        Some(revision) => builder
            .text(REVISION_TITLE, revision.fix_instructions)
            .json(PRIOR_DRAFT_TITLE, revision.prior_draft)
            .build(),
        None => builder.build(),
    }
}

/// Audit prompt for the validator. The draft goes in as the last structured block.
pub fn validation_prompt(ctx: &DraftContext, draft: &ResumeDraft) -> String {
    let builder = PromptBuilder::new()
        .instructions(AUDIT_INSTRUCTIONS)
        .rules("AUDIT RULES", AUDIT_RULES);
    let builder = with_context(builder, ctx).json(DRAFT_UNDER_AUDIT_TITLE, draft);
    with_source_text(builder, ctx).build()
}
