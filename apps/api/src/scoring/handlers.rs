//! Axum route handlers for candidate ingestion and screening.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{CandidateRow, CandidateStatus};
use crate::scoring::candidate_scorer::CandidateAttributes;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IngestCandidateRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub project_domains: Vec<String>,
    #[serde(default)]
    pub experience_years: f64,
    pub education: Option<String>,
    pub domain: Option<String>,
    pub location: Option<String>,
    pub current_ctc: Option<f64>,
    pub expected_ctc: Option<f64>,
    /// From the upstream resume-screening step.
    pub ats_score: i32,
}

/// POST /api/v1/candidates
///
/// Ingests one candidate: runs the scorer once and persists the row with all
/// five score fields set. Score fields are not recomputed afterwards.
pub async fn handle_ingest_candidate(
    State(state): State<AppState>,
    Json(request): Json<IngestCandidateRequest>,
) -> Result<(StatusCode, Json<CandidateRow>), AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    if request.email.trim().is_empty() {
        return Err(AppError::Validation("email cannot be empty".to_string()));
    }

    let attrs = CandidateAttributes {
        skills: request.skills.clone(),
        project_domains: request.project_domains.clone(),
        experience_years: request.experience_years,
        ats_score: request.ats_score,
        education: request.education.clone().unwrap_or_default(),
    };
    let card = state.scorer.score(&attrs).await;

    let row = sqlx::query_as::<_, CandidateRow>(
        r#"
        INSERT INTO candidates
            (name, email, phone, skills, project_domains, experience_years,
             education, domain, location, current_ctc, expected_ctc, status,
             ats_score, skills_score, projects_score, experience_score,
             education_score, overall_score)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                $13, $14, $15, $16, $17, $18)
        RETURNING *
        "#,
    )
    .bind(&request.name)
    .bind(&request.email)
    .bind(&request.phone)
    .bind(&request.skills)
    .bind(&request.project_domains)
    .bind(request.experience_years.max(0.0))
    .bind(&request.education)
    .bind(&request.domain)
    .bind(&request.location)
    .bind(request.current_ctc)
    .bind(request.expected_ctc)
    .bind(CandidateStatus::New)
    .bind(card.ats_score)
    .bind(card.skills_score)
    .bind(card.projects_score)
    .bind(card.experience_score)
    .bind(card.education_score)
    .bind(card.overall_score)
    .fetch_one(&state.db)
    .await?;

    tracing::info!("Ingested candidate {} (overall {})", row.id, card.overall_score);

    Ok((StatusCode::CREATED, Json(row)))
}

#[derive(Debug, Deserialize)]
pub struct CandidateListQuery {
    pub status: Option<CandidateStatus>,
    pub min_ats_score: Option<i32>,
}

/// GET /api/v1/candidates
///
/// Screening view: filter by status and/or ATS threshold, best scores first.
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Query(params): Query<CandidateListQuery>,
) -> Result<Json<Vec<CandidateRow>>, AppError> {
    let rows = sqlx::query_as::<_, CandidateRow>(
        r#"
        SELECT * FROM candidates
        WHERE ($1::candidate_status IS NULL OR status = $1)
          AND ($2::int IS NULL OR ats_score >= $2)
        ORDER BY ats_score DESC, created_at DESC
        "#,
    )
    .bind(params.status)
    .bind(params.min_ats_score)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: CandidateStatus,
}

/// PATCH /api/v1/candidates/:id/status
///
/// Screening action (shortlist / reject / interviewed / hired). Matching
/// eligibility follows from this: only shortlisted candidates are ranked.
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<StatusUpdate>,
) -> Result<Json<CandidateRow>, AppError> {
    let row = sqlx::query_as::<_, CandidateRow>(
        "UPDATE candidates SET status = $1 WHERE id = $2 RETURNING *",
    )
    .bind(request.status)
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;

    Ok(Json(row))
}
