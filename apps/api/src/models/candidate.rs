use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle status of a candidate. Mutated by screening actions; only
/// `shortlisted` candidates are eligible for project matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "candidate_status", rename_all = "snake_case")]
pub enum CandidateStatus {
    New,
    Shortlisted,
    Interviewed,
    Rejected,
    Hired,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub project_domains: Vec<String>,
    pub experience_years: f64,
    pub education: Option<String>,
    pub domain: Option<String>,
    pub location: Option<String>,
    pub current_ctc: Option<f64>,
    pub expected_ctc: Option<f64>,
    pub status: CandidateStatus,
    /// Supplied by the external resume-screening step; opaque to this service.
    pub ats_score: i32,
    pub skills_score: Option<i32>,
    pub projects_score: Option<i32>,
    pub experience_score: Option<i32>,
    pub education_score: Option<i32>,
    pub overall_score: Option<i32>,
    pub created_at: DateTime<Utc>,
}
