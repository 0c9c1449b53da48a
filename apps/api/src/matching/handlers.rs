//! Axum route handlers for the project and match workflow.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::assignment::{assign_candidate, AssignmentOutcome};
use crate::matching::engine::{calculate_matches, RankedMatch};
use crate::models::candidate::{CandidateRow, CandidateStatus};
use crate::models::project::ProjectRow;
use crate::models::project_match::ProjectMatchRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub title: String,
    pub client_name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub project_type: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub experience_level: String,
    pub employees_needed: i32,
    pub priority: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchListResponse {
    pub project: ProjectRow,
    pub matches: Vec<RankedMatch>,
}

#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    pub candidate_id: Uuid,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/projects
pub async fn handle_create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectRow>), AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if request.employees_needed < 1 {
        return Err(AppError::Validation(
            "employees_needed must be at least 1".to_string(),
        ));
    }

    let row = sqlx::query_as::<_, ProjectRow>(
        r#"
        INSERT INTO projects
            (title, client_name, description, type, required_skills,
             experience_level, employees_needed, employees_assigned, status, priority)
        VALUES ($1, $2, $3, $4, $5, $6, $7, 0, 'active', $8)
        RETURNING *
        "#,
    )
    .bind(&request.title)
    .bind(&request.client_name)
    .bind(&request.description)
    .bind(&request.project_type)
    .bind(&request.required_skills)
    .bind(&request.experience_level)
    .bind(request.employees_needed)
    .bind(request.priority.as_deref().unwrap_or("medium"))
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/projects
pub async fn handle_list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectRow>>, AppError> {
    let rows =
        sqlx::query_as::<_, ProjectRow>("SELECT * FROM projects ORDER BY created_at DESC")
            .fetch_all(&state.db)
            .await?;
    Ok(Json(rows))
}

/// GET /api/v1/projects/:id
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> Result<Json<ProjectRow>, AppError> {
    let project = fetch_project(&state.db, project_id).await?;
    Ok(Json(project))
}

/// GET /api/v1/projects/:id/matches
///
/// Ranks the shortlisted pool against the project and returns the top
/// matches (at most 10). Suggested matches are not persisted.
pub async fn handle_get_matches(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> Result<Json<MatchListResponse>, AppError> {
    let project = fetch_project(&state.db, project_id).await?;
    let pool = fetch_shortlisted(&state.db).await?;

    let matches = calculate_matches(&project, &pool);

    Ok(Json(MatchListResponse { project, matches }))
}

/// GET /api/v1/projects/:id/assignments
///
/// Persisted match rows for the project (assigned candidates).
pub async fn handle_list_assignments(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> Result<Json<Vec<ProjectMatchRow>>, AppError> {
    // 404 on unknown project rather than an empty list
    fetch_project(&state.db, project_id).await?;

    let rows = sqlx::query_as::<_, ProjectMatchRow>(
        "SELECT * FROM project_matches WHERE project_id = $1 ORDER BY match_score DESC",
    )
    .bind(project_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// POST /api/v1/projects/:id/assign
///
/// Commits a suggested match. The ranking is recomputed server-side and the
/// candidate must appear in it, so the persisted sub-scores always come from
/// the engine rather than the client.
pub async fn handle_assign(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Json(request): Json<AssignRequest>,
) -> Result<Json<AssignmentOutcome>, AppError> {
    let project = fetch_project(&state.db, project_id).await?;
    let pool = fetch_shortlisted(&state.db).await?;

    let ranked = calculate_matches(&project, &pool);
    let suggested = ranked
        .iter()
        .find(|m| m.candidate.id == request.candidate_id)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Candidate {} is not in the current ranking for project {project_id}",
                request.candidate_id
            ))
        })?;

    let outcome = assign_candidate(
        state.assignment_store.as_ref(),
        project_id,
        request.candidate_id,
        &suggested.scores,
    )
    .await?;

    Ok(Json(outcome))
}

// ────────────────────────────────────────────────────────────────────────────
// Shared queries
// ────────────────────────────────────────────────────────────────────────────

async fn fetch_project(pool: &PgPool, project_id: Uuid) -> Result<ProjectRow, AppError> {
    sqlx::query_as::<_, ProjectRow>("SELECT * FROM projects WHERE id = $1")
        .bind(project_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project {project_id} not found")))
}

/// The eligible pool: shortlisted candidates, newest first. The engine's
/// stable sort preserves this order across equal match scores.
async fn fetch_shortlisted(pool: &PgPool) -> Result<Vec<CandidateRow>, AppError> {
    Ok(sqlx::query_as::<_, CandidateRow>(
        "SELECT * FROM candidates WHERE status = $1 ORDER BY created_at DESC",
    )
    .bind(CandidateStatus::Shortlisted)
    .fetch_all(pool)
    .await?)
}
