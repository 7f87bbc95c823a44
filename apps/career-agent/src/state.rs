use std::sync::Arc;

use crate::advisor::CareerAdvisor;
use crate::config::Config;
use crate::matching::scorer::RankOptions;
use crate::matching::source::JobSource;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Job postings for the matcher. Default: `PgJobSource`.
    pub jobs: Arc<dyn JobSource>,
    /// AI-backed predictor and enhancer. Default: `LlmCareerAdvisor`.
    pub advisor: Arc<dyn CareerAdvisor>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn rank_options(&self) -> RankOptions {
        RankOptions {
            min_score: self.config.match_min_score,
            limit: self.config.match_limit,
        }
    }
}
