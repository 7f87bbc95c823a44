// Skills Matcher: tokenises a skills string and ranks job postings against it.
// Storage sits behind `JobSource`; scoring is pure and lives in `scorer`.

pub mod handlers;
pub mod scorer;
pub mod skills;
pub mod source;

use tracing::info;

use crate::errors::AppError;
use crate::matching::scorer::{rank_postings, JobPosting, RankOptions};
use crate::matching::skills::skill_query;
use crate::matching::source::JobSource;

/// Returns postings ranked by descending match score for a comma-separated skills string.
///
/// Blank input yields an empty list without touching the source.
pub async fn fetch_jobs(
    source: &dyn JobSource,
    skills: &str,
    options: RankOptions,
) -> Result<Vec<JobPosting>, AppError> {
    let query = skill_query(skills);
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let rows = source.active_postings().await?;
    let ranked = rank_postings(&rows, &query, options);

    info!(
        skills = query.len(),
        candidates = rows.len(),
        matches = ranked.len(),
        "Ranked job postings"
    );
    Ok(ranked)
}
