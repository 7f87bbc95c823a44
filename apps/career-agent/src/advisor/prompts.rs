// Prompt constants for the career predictor and the resume text enhancer.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, NO_FABRICATION_INSTRUCTION};

/// System prompt for career prediction.
pub fn predict_system() -> String {
    format!(
        "You are an experienced career counsellor who maps skill sets to job roles. {JSON_ONLY_SYSTEM}"
    )
}

/// Career prediction prompt template. Replace `{skills}` before sending.
pub const PREDICT_PROMPT_TEMPLATE: &str = r#"A candidate lists the following skills:

{skills}

Suggest the single job role that best fits this skill set.

Return a JSON object with this EXACT schema (no extra fields):
{"role": "Data Analyst"}

Rules:
- "role" is a short, conventional job title (2 to 5 words).
- Do not include seniority unless the skills clearly imply it.
- Do not include the company, location or any explanation."#;

/// System prompt for resume text refinement.
pub fn refine_system() -> String {
    format!(
        "You are a professional resume writer. You rewrite weak resume text into \
        concise, achievement-oriented statements in the first-person implied style \
        (no \"I\"). {NO_FABRICATION_INSTRUCTION}"
    )
}

/// Refinement prompt template. Replace `{text}` before sending.
pub const REFINE_PROMPT_TEMPLATE: &str = r#"Rewrite the following resume text so it is clear, specific and results-oriented.
Start bullet points with strong action verbs. Keep the same facts.

Text:
{text}

Reply with the improved text only: no preamble, no quotes, no markdown headings."#;

pub fn build_predict_prompt(skills: &[String]) -> String {
    let listed: Vec<String> = skills.iter().map(|s| format!("- {s}")).collect();
    PREDICT_PROMPT_TEMPLATE.replace("{skills}", &listed.join("\n"))
}

pub fn build_refine_prompt(text: &str) -> String {
    REFINE_PROMPT_TEMPLATE.replace("{text}", text.trim())
}
