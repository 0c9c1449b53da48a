use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub title: String,
    pub client_name: Option<String>,
    pub description: Option<String>,
    /// Free-text domain label ("Web Development", "Data Engineering", ...).
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub project_type: String,
    pub required_skills: Vec<String>,
    /// One of the four labeled bands: "Junior (0-2 years)",
    /// "Mid-level (2-5 years)", "Senior (5+ years)", "Lead (8+ years)".
    pub experience_level: String,
    pub employees_needed: i32,
    /// Mutated only by the assignment operation. May exceed employees_needed;
    /// the caller is responsible for warning about over-assignment.
    pub employees_assigned: i32,
    pub status: String,
    pub priority: String,
    pub created_at: DateTime<Utc>,
}
