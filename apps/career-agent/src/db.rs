use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the `job_postings` table if needed and seeds it when empty.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS job_postings (
            id          UUID PRIMARY KEY,
            title       TEXT NOT NULL,
            company     TEXT NOT NULL,
            location    TEXT NOT NULL DEFAULT '',
            salary      TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            job_type    TEXT NOT NULL DEFAULT 'Full-time',
            skills      TEXT[] NOT NULL DEFAULT '{}',
            is_active   BOOLEAN NOT NULL DEFAULT TRUE,
            created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_job_postings_active ON job_postings (is_active, created_at DESC)",
    )
    .execute(pool)
    .await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM job_postings")
        .fetch_one(pool)
        .await?;

    if count == 0 {
        seed_job_postings(pool).await?;
    }

    info!("Database schema ready ({count} existing job postings)");
    Ok(())
}

struct SeedPosting {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    salary: &'static str,
    description: &'static str,
    job_type: &'static str,
    skills: &'static [&'static str],
}

const SEED_POSTINGS: &[SeedPosting] = &[
    SeedPosting {
        title: "Data Analyst",
        company: "Northwind Analytics",
        location: "Remote",
        salary: "$70k - $90k",
        description: "Build dashboards and reporting pipelines for the sales organisation.",
        job_type: "Full-time",
        skills: &["Python", "SQL", "Excel", "Tableau"],
    },
    SeedPosting {
        title: "Backend Engineer",
        company: "Ferrous Systems Co",
        location: "Berlin, DE",
        salary: "€75k - €95k",
        description: "Design and operate the services behind our payments platform.",
        job_type: "Full-time",
        skills: &["Rust", "PostgreSQL", "Docker", "Kubernetes"],
    },
    SeedPosting {
        title: "Machine Learning Engineer",
        company: "Lumen AI",
        location: "San Francisco, CA",
        salary: "$150k - $190k",
        description: "Train, evaluate and ship recommendation models to production.",
        job_type: "Full-time",
        skills: &["Python", "PyTorch", "SQL", "AWS"],
    },
    SeedPosting {
        title: "Frontend Developer",
        company: "Pixel Harbor",
        location: "Toronto, CA",
        salary: "$85k - $105k",
        description: "Own the customer-facing web app and its design system.",
        job_type: "Contract",
        skills: &["JavaScript", "TypeScript", "React", "CSS"],
    },
    SeedPosting {
        title: "Database Administrator",
        company: "Atlas Logistics",
        location: "Austin, TX",
        salary: "$95k - $120k",
        description: "Keep our Postgres fleet fast, backed up and highly available.",
        job_type: "Full-time",
        skills: &["SQL", "Postgres", "Linux", "Bash"],
    },
    SeedPosting {
        title: "Marketing Coordinator",
        company: "Brightside Media",
        location: "London, UK",
        salary: "£32k - £38k",
        description: "Plan campaigns and report on their performance.",
        job_type: "Part-time",
        skills: &["Copywriting", "SEO", "Excel"],
    },
];

async fn seed_job_postings(pool: &PgPool) -> Result<(), sqlx::Error> {
    for posting in SEED_POSTINGS {
        let skills: Vec<String> = posting.skills.iter().map(|s| s.to_string()).collect();
        sqlx::query(
            r#"
            INSERT INTO job_postings
                (id, title, company, location, salary, description, job_type, skills)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(uuid::Uuid::new_v4())
        .bind(posting.title)
        .bind(posting.company)
        .bind(posting.location)
        .bind(posting.salary)
        .bind(posting.description)
        .bind(posting.job_type)
        .bind(skills)
        .execute(pool)
        .await?;
    }

    info!("Seeded {} sample job postings", SEED_POSTINGS.len());
    Ok(())
}
