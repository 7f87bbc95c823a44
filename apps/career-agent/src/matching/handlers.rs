//! Axum route handlers for the job matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::fetch_jobs;
use crate::matching::scorer::JobPosting;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchJobsRequest {
    pub skills: String,
}

#[derive(Debug, Serialize)]
pub struct MatchJobsResponse {
    pub count: usize,
    pub jobs: Vec<JobPosting>,
}

/// POST /api/v1/jobs/match
///
/// Ranks open postings against a comma-separated skills string.
/// Blank skills return an empty list rather than an error.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Json(request): Json<MatchJobsRequest>,
) -> Result<Json<MatchJobsResponse>, AppError> {
    let jobs = fetch_jobs(state.jobs.as_ref(), &request.skills, state.rank_options()).await?;

    Ok(Json(MatchJobsResponse {
        count: jobs.len(),
        jobs,
    }))
}
