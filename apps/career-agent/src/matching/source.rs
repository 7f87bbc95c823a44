use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::job::JobRow;

/// Where job postings come from. Carried in `AppState` as `Arc<dyn JobSource>`.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// All postings currently open for matching.
    async fn active_postings(&self) -> Result<Vec<JobRow>, AppError>;
}

/// PostgreSQL-backed source reading the `job_postings` table.
pub struct PgJobSource {
    pool: PgPool,
}

impl PgJobSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobSource for PgJobSource {
    async fn active_postings(&self) -> Result<Vec<JobRow>, AppError> {
        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT id, title, company, location, salary, description, job_type, skills, created_at
            FROM job_postings
            WHERE is_active
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("Loaded {} active job postings", rows.len());
        Ok(rows)
    }
}
