pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::matching::handlers as match_handlers;
use crate::scoring::handlers as candidate_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Candidate API (ingestion + screening)
        .route(
            "/api/v1/candidates",
            post(candidate_handlers::handle_ingest_candidate)
                .get(candidate_handlers::handle_list_candidates),
        )
        .route(
            "/api/v1/candidates/:id/status",
            patch(candidate_handlers::handle_update_status),
        )
        // Project & match API
        .route(
            "/api/v1/projects",
            post(match_handlers::handle_create_project).get(match_handlers::handle_list_projects),
        )
        .route("/api/v1/projects/:id", get(match_handlers::handle_get_project))
        .route(
            "/api/v1/projects/:id/matches",
            get(match_handlers::handle_get_matches),
        )
        .route(
            "/api/v1/projects/:id/assignments",
            get(match_handlers::handle_list_assignments),
        )
        .route(
            "/api/v1/projects/:id/assign",
            post(match_handlers::handle_assign),
        )
        .with_state(state)
}
