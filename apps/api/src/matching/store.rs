//! Persistence seam for the assignment transaction.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::matching::engine::MatchScores;
use crate::models::project_match::MatchStatus;

/// Storage operations the assignment transaction depends on. Postgres-backed
/// in production; tests substitute an in-memory double.
#[async_trait]
pub trait AssignmentStore: Send + Sync {
    /// Upserts the match row keyed on (project_id, candidate_id).
    /// Re-assigning the same pair overwrites rather than duplicates.
    async fn upsert_match(
        &self,
        project_id: Uuid,
        candidate_id: Uuid,
        scores: &MatchScores,
        status: MatchStatus,
        assigned_at: Option<DateTime<Utc>>,
    ) -> Result<()>;

    /// Increments the project's assigned headcount and returns the new value.
    /// Must be atomic: concurrent assignments to the same project must not
    /// lose updates.
    async fn increment_assigned(&self, project_id: Uuid) -> Result<i32>;
}

pub struct PgAssignmentStore {
    pool: PgPool,
}

impl PgAssignmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentStore for PgAssignmentStore {
    async fn upsert_match(
        &self,
        project_id: Uuid,
        candidate_id: Uuid,
        scores: &MatchScores,
        status: MatchStatus,
        assigned_at: Option<DateTime<Utc>>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO project_matches
                (project_id, candidate_id, match_score, skills_score,
                 experience_score, domain_score, education_score,
                 availability_score, status, assigned_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (project_id, candidate_id) DO UPDATE SET
                match_score = EXCLUDED.match_score,
                skills_score = EXCLUDED.skills_score,
                experience_score = EXCLUDED.experience_score,
                domain_score = EXCLUDED.domain_score,
                education_score = EXCLUDED.education_score,
                availability_score = EXCLUDED.availability_score,
                status = EXCLUDED.status,
                assigned_at = EXCLUDED.assigned_at
            "#,
        )
        .bind(project_id)
        .bind(candidate_id)
        .bind(scores.match_score)
        .bind(scores.skills_score)
        .bind(scores.experience_score)
        .bind(scores.domain_score)
        .bind(scores.education_score)
        .bind(scores.availability_score)
        .bind(status)
        .bind(assigned_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn increment_assigned(&self, project_id: Uuid) -> Result<i32> {
        // Single-statement increment: the database serializes concurrent
        // updates, so no read-modify-write race is possible.
        let updated: Option<i32> = sqlx::query_scalar(
            r#"
            UPDATE projects
            SET employees_assigned = employees_assigned + 1
            WHERE id = $1
            RETURNING employees_assigned
            "#,
        )
        .bind(project_id)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| anyhow::anyhow!("project {project_id} not found"))
    }
}
