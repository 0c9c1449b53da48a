use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::matching::store::AssignmentStore;
use crate::scoring::candidate_scorer::CandidateScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable ingestion scorer. Default: HeuristicCandidateScorer.
    pub scorer: Arc<dyn CandidateScorer>,
    /// Persistence seam for the assignment transaction; Postgres-backed in
    /// production, substituted with an in-memory double in tests.
    pub assignment_store: Arc<dyn AssignmentStore>,
}
