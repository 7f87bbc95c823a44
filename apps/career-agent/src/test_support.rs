//! Shared fixtures for unit and router tests.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tempfile::TempDir;
use uuid::Uuid;

use crate::advisor::CareerAdvisor;
use crate::config::Config;
use crate::errors::AppError;
use crate::matching::source::JobSource;
use crate::models::job::JobRow;
use crate::resume::form::ResumeForm;
use crate::session::store::SessionStore;
use crate::state::AppState;

/// A valid 1×1 RGBA PNG.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

pub fn job_row(title: &str, company: &str, skills: &[&str]) -> JobRow {
    JobRow {
        id: Uuid::new_v4(),
        title: title.to_string(),
        company: company.to_string(),
        location: "Remote".to_string(),
        salary: "$100k".to_string(),
        description: format!("{title} at {company}"),
        job_type: "Full-time".to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        created_at: Utc::now(),
    }
}

pub fn sample_form() -> ResumeForm {
    ResumeForm {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+44 20 7946 0000".to_string(),
        linkedin: "linkedin.com/in/ada".to_string(),
        role: "Data Analyst".to_string(),
        summary: "Analyst with a taste for engines.".to_string(),
        experience: "Wrote the first published algorithm.\n\nTranslated Menabrea's notes.".to_string(),
        education: "Private tutoring in mathematics".to_string(),
        skills: "Python, SQL, python".to_string(),
    }
}

pub struct StaticJobSource {
    rows: Vec<JobRow>,
}

impl StaticJobSource {
    pub fn new(rows: Vec<JobRow>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl JobSource for StaticJobSource {
    async fn active_postings(&self) -> Result<Vec<JobRow>, AppError> {
        Ok(self.rows.clone())
    }
}

/// Behaves like an unreachable database.
pub struct FailingJobSource;

#[async_trait]
impl JobSource for FailingJobSource {
    async fn active_postings(&self) -> Result<Vec<JobRow>, AppError> {
        Err(AppError::DataSource(sqlx::Error::PoolTimedOut))
    }
}

/// Deterministic advisor: "Role for A+B" and "Improved: <text>", or always failing.
#[derive(Default)]
pub struct StubAdvisor {
    fail: bool,
}

impl StubAdvisor {
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl CareerAdvisor for StubAdvisor {
    async fn predict_career(&self, skills: &[String]) -> Result<String, AppError> {
        if self.fail {
            return Err(AppError::AiService("stub outage".to_string()));
        }
        Ok(format!("Role for {}", skills.join("+")))
    }

    async fn refine_text(&self, text: &str) -> Result<String, AppError> {
        if self.fail {
            return Err(AppError::AiService("stub outage".to_string()));
        }
        Ok(format!("Improved: {text}"))
    }
}

pub fn test_config(upload_dir: PathBuf) -> Config {
    Config {
        database_url: "postgres://localhost/career_agent_test".to_string(),
        anthropic_api_key: "test-key".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
        upload_dir,
        llm_timeout_secs: 5,
        match_limit: 20,
        match_min_score: 1,
        session_ttl_minutes: 60,
        max_photo_bytes: 1024 * 1024,
    }
}

/// App state over the given collaborators. The returned directory receives
/// photo uploads and must be kept alive for the test's duration.
pub fn test_state(
    jobs: impl JobSource + 'static,
    advisor: impl CareerAdvisor + 'static,
) -> (AppState, TempDir) {
    let dir = tempfile::tempdir().expect("create upload dir");
    let config = test_config(dir.path().to_path_buf());
    let state = AppState {
        sessions: SessionStore::new(chrono::Duration::minutes(config.session_ttl_minutes)),
        config,
        jobs: Arc::new(jobs),
        advisor: Arc::new(advisor),
    };
    (state, dir)
}
