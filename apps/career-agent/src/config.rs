use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Directory for transient photo uploads. Files never outlive a request.
    pub upload_dir: PathBuf,
    pub llm_timeout_secs: u64,
    pub match_limit: usize,
    pub match_min_score: u32,
    pub session_ttl_minutes: i64,
    pub max_photo_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| std::env::temp_dir()),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 60)?,
            match_limit: parse_env("MATCH_LIMIT", 20)?,
            match_min_score: parse_env("MATCH_MIN_SCORE", 1)?,
            session_ttl_minutes: parse_env("SESSION_TTL_MINUTES", 60)?,
            max_photo_bytes: parse_env("MAX_PHOTO_BYTES", 5 * 1024 * 1024)?,
        })
    }

    /// Upper bound for a whole request body: the photo plus the text fields.
    pub fn max_body_bytes(&self) -> usize {
        self.max_photo_bytes + 1024 * 1024
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
