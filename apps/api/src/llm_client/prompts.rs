// Shared prompt fragments and the section builder every prompt is assembled with.
// Each pipeline keeps its own prompts.rs for use-case specific text.
//
// Section order is fixed for every prompt:
//   instructions → rules → structured context blocks (JSON) → raw source text
// followed, for revisions only, by the revision block.

use serde::Serialize;

/// Appended to every instruction block.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY valid JSON that matches the provided JSON Schema. \
    Do NOT include any text outside the JSON object. Do NOT use markdown code fences.";

/// Grounding rules shared by drafting and auditing.
pub const GROUNDING_RULES: &[&str] = &[
    "Every claim must be traceable to the resume text, the candidate answers, or evidence explicitly cited in the analyses.",
    "Do NOT invent employers, titles, dates, tools, metrics, team sizes, or outcomes.",
    "If the evidence does not support a requirement, leave it out rather than implying it.",
];

/// Builds a prompt out of blank-line separated sections.
#[derive(Debug, Default)]
pub struct PromptBuilder {
    sections: Vec<String>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-form instruction lines, one per line.
    pub fn instructions(mut self, lines: &[&str]) -> Self {
        self.sections.push(lines.join("\n"));
        self
    }

    /// A titled bullet list of rules.
    pub fn rules(mut self, title: &str, rules: &[&str]) -> Self {
        let body = rules
            .iter()
            .map(|r| format!("- {r}"))
            .collect::<Vec<_>>()
            .join("\n");
        self.sections.push(format!("{title}:\n{body}"));
        self
    }

    /// A titled block holding `value` as compact JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, title: &str, value: &T) -> Self {
        self.sections.push(format!("{title}:\n{}", to_json(value)));
        self
    }

    /// A titled block holding raw text verbatim.
    pub fn text(mut self, title: &str, body: &str) -> Self {
        self.sections.push(format!("{title}:\n{body}"));
        self
    }

    pub fn build(self) -> String {
        self.sections.join("\n\n")
    }
}

/// Compact JSON for prompt blocks. Our prompt inputs are plain structs and
/// string-keyed maps, which always serialize; "null" covers the impossible case.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}
