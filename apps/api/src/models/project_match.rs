use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One-directional state machine: `suggested → assigned`. There is no
/// unassign transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "match_status", rename_all = "snake_case")]
pub enum MatchStatus {
    Suggested,
    Assigned,
}

/// Persisted match linking one candidate to one project. Suggested matches
/// are ephemeral (recomputed on demand); a row is written only on assignment,
/// upserted per (project_id, candidate_id) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectMatchRow {
    pub id: Uuid,
    pub project_id: Uuid,
    pub candidate_id: Uuid,
    pub match_score: i32,
    pub skills_score: i32,
    pub experience_score: i32,
    pub domain_score: i32,
    pub education_score: i32,
    pub availability_score: i32,
    pub status: MatchStatus,
    pub assigned_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
