//! Skill-overlap scoring: ranks stored job postings against a candidate's skills.
//!
//! Algorithm, per posting:
//! 1. For each required skill tag of the posting:
//!    - exact (case-insensitive) match with a candidate skill → strength 1.0
//!    - one contains the other, shorter side ≥ 3 chars → strength 0.6
//!    - otherwise → strength 0.0
//! 2. score = round(mean strength × 100), 0 – 100
//! 3. Postings below `min_score` are dropped; the rest sort by score descending,
//!    then title and company ascending.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::skills::normalize_skill;
use crate::models::job::JobRow;

const EXACT_STRENGTH: f32 = 1.0;
const PARTIAL_STRENGTH: f32 = 0.6;
const MIN_PARTIAL_LEN: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// A job posting annotated with how well it matches the candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    #[serde(rename = "type")]
    pub job_type: String,
    /// Percentage, 0 – 100.
    pub score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct RankOptions {
    pub min_score: u32,
    pub limit: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            min_score: 1,
            limit: 20,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

fn skill_strength(required: &str, query: &[String]) -> f32 {
    let mut best = 0.0_f32;
    for candidate in query {
        if candidate == required {
            return EXACT_STRENGTH;
        }
        let shorter = candidate.len().min(required.len());
        if shorter >= MIN_PARTIAL_LEN
            && (candidate.contains(required) || required.contains(candidate.as_str()))
        {
            best = PARTIAL_STRENGTH;
        }
    }
    best
}

/// Scores one posting against normalised query tokens.
pub fn score_posting(row: &JobRow, query: &[String]) -> JobPosting {
    let mut total = 0.0_f32;
    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for skill in &row.skills {
        let strength = skill_strength(&normalize_skill(skill), query);
        total += strength;
        if strength > 0.0 {
            matched_skills.push(skill.clone());
        } else {
            missing_skills.push(skill.clone());
        }
    }

    let score = if row.skills.is_empty() {
        0
    } else {
        ((total / row.skills.len() as f32) * 100.0).round() as u32
    };

    JobPosting {
        id: row.id,
        title: row.title.clone(),
        company: row.company.clone(),
        location: row.location.clone(),
        salary: row.salary.clone(),
        description: row.description.clone(),
        job_type: row.job_type.clone(),
        score: score.min(100),
        matched_skills,
        missing_skills,
    }
}

fn compare_ranked(a: &JobPosting, b: &JobPosting) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        .then_with(|| a.company.to_lowercase().cmp(&b.company.to_lowercase()))
}

/// Scores, filters, orders and truncates postings for a query.
pub fn rank_postings(rows: &[JobRow], query: &[String], options: RankOptions) -> Vec<JobPosting> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<JobPosting> = rows
        .iter()
        .map(|row| score_posting(row, query))
        .filter(|posting| posting.score >= options.min_score)
        .collect();

    ranked.sort_by(compare_ranked);
    ranked.truncate(options.limit);
    ranked
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
