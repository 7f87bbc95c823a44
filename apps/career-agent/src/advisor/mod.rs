//! Career Advisor: career prediction and resume text refinement.
//!
//! Both operations are pass-throughs to the generative-AI backend. Input
//! validation happens here so every surface (HTML pages, JSON API) rejects
//! blank input the same way, before any network call.
//!
//! `AppState` holds an `Arc<dyn CareerAdvisor>`; the default is `LlmCareerAdvisor`.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::matching::skills::split_skills;

pub const MAX_REFINE_CHARS: usize = 8000;

#[async_trait]
pub trait CareerAdvisor: Send + Sync {
    /// Suggests one role name for a list of skills.
    async fn predict_career(&self, skills: &[String]) -> Result<String, AppError>;

    /// Rewrites resume text.
    async fn refine_text(&self, text: &str) -> Result<String, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmCareerAdvisor
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmCareerAdvisor {
    llm: LlmClient,
}

impl LlmCareerAdvisor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[derive(Debug, Deserialize)]
struct RolePrediction {
    role: String,
}

#[async_trait]
impl CareerAdvisor for LlmCareerAdvisor {
    async fn predict_career(&self, skills: &[String]) -> Result<String, AppError> {
        let prompt = prompts::build_predict_prompt(skills);
        let prediction = self
            .llm
            .call_json::<RolePrediction>(&prompt, &prompts::predict_system())
            .await
            .map_err(|e| AppError::AiService(format!("Career prediction failed: {e}")))?;

        clean_role(&prediction.role)
    }

    async fn refine_text(&self, text: &str) -> Result<String, AppError> {
        let prompt = prompts::build_refine_prompt(text);
        self.llm
            .call_text(&prompt, &prompts::refine_system())
            .await
            .map_err(|e| AppError::AiService(format!("Text refinement failed: {e}")))
    }
}

/// Strips quotes and markdown emphasis a model sometimes wraps a title in.
fn clean_role(raw: &str) -> Result<String, AppError> {
    let role = raw
        .trim()
        .trim_matches(|c: char| c == '"' || c == '*' || c == '`' || c == '\'')
        .trim();
    if role.is_empty() {
        return Err(AppError::AiService(
            "Career prediction returned a blank role".to_string(),
        ));
    }
    Ok(role.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Entry points used by handlers
// ────────────────────────────────────────────────────────────────────────────

/// Predicts a role from a comma-separated skills string.
pub async fn predict_role(advisor: &dyn CareerAdvisor, raw_skills: &str) -> Result<String, AppError> {
    predict_role_from(advisor, &split_skills(raw_skills)).await
}

/// Predicts a role from already separated skills (blank entries are ignored).
pub async fn predict_role_from(
    advisor: &dyn CareerAdvisor,
    skills: &[String],
) -> Result<String, AppError> {
    let skills = split_skills(&skills.join(","));
    if skills.is_empty() {
        return Err(AppError::Validation(
            "Enter at least one skill to get a prediction.".to_string(),
        ));
    }

    let role = advisor.predict_career(&skills).await?;
    info!(skills = skills.len(), role = %role, "Predicted career role");
    Ok(role)
}

/// Rewrites resume text after validating it.
pub async fn enhance_text(advisor: &dyn CareerAdvisor, text: &str) -> Result<String, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Validation(
            "Enter some text to enhance.".to_string(),
        ));
    }
    if text.chars().count() > MAX_REFINE_CHARS {
        return Err(AppError::Validation(format!(
            "Text is too long to enhance (limit {MAX_REFINE_CHARS} characters)."
        )));
    }

    let improved = advisor.refine_text(text).await?;
    info!(
        input_chars = text.len(),
        output_chars = improved.len(),
        "Enhanced resume text"
    );
    Ok(improved)
}
