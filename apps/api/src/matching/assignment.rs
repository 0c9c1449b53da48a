//! Assignment transaction: persist the match, then bump the headcount.

use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::engine::MatchScores;
use crate::matching::store::AssignmentStore;
use crate::models::project_match::MatchStatus;

#[derive(Debug, Serialize)]
pub struct AssignmentOutcome {
    pub project_id: Uuid,
    pub candidate_id: Uuid,
    pub match_score: i32,
    /// Headcount after this assignment. May exceed employees_needed; the
    /// caller is responsible for warning about over-assignment.
    pub employees_assigned: i32,
}

/// Commits a suggested match as `assigned`.
///
/// Ordering is load-bearing: the match row is persisted before the counter
/// moves, so a failed upsert leaves the project untouched. The reverse
/// failure (match persisted, increment failed) surfaces as an error with the
/// match already on record.
pub async fn assign_candidate(
    store: &dyn AssignmentStore,
    project_id: Uuid,
    candidate_id: Uuid,
    scores: &MatchScores,
) -> Result<AssignmentOutcome, AppError> {
    store
        .upsert_match(
            project_id,
            candidate_id,
            scores,
            MatchStatus::Assigned,
            Some(Utc::now()),
        )
        .await
        .map_err(|e| AppError::Assignment(format!("failed to persist match: {e}")))?;

    let employees_assigned = store.increment_assigned(project_id).await.map_err(|e| {
        AppError::Assignment(format!("match persisted but headcount update failed: {e}"))
    })?;

    info!("Assigned candidate {candidate_id} to project {project_id} (headcount now {employees_assigned})");

    Ok(AssignmentOutcome {
        project_id,
        candidate_id,
        match_score: scores.match_score,
        employees_assigned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryStore {
        matches: Mutex<HashMap<(Uuid, Uuid), (MatchScores, MatchStatus)>>,
        assigned: AtomicI32,
        fail_upsert: bool,
    }

    #[async_trait]
    impl AssignmentStore for InMemoryStore {
        async fn upsert_match(
            &self,
            project_id: Uuid,
            candidate_id: Uuid,
            scores: &MatchScores,
            status: MatchStatus,
            _assigned_at: Option<DateTime<Utc>>,
        ) -> Result<()> {
            if self.fail_upsert {
                anyhow::bail!("storage unavailable");
            }
            self.matches
                .lock()
                .unwrap()
                .insert((project_id, candidate_id), (scores.clone(), status));
            Ok(())
        }

        async fn increment_assigned(&self, _project_id: Uuid) -> Result<i32> {
            Ok(self.assigned.fetch_add(1, Ordering::SeqCst) + 1)
        }
    }

    fn scores(match_score: i32) -> MatchScores {
        MatchScores {
            skills_score: 50,
            experience_score: 100,
            domain_score: 100,
            education_score: 100,
            availability_score: 100,
            match_score,
        }
    }

    #[tokio::test]
    async fn test_assign_persists_match_then_increments() {
        let store = InMemoryStore::default();
        let project_id = Uuid::new_v4();
        let candidate_id = Uuid::new_v4();

        let outcome = assign_candidate(&store, project_id, candidate_id, &scores(83))
            .await
            .unwrap();

        assert_eq!(outcome.match_score, 83);
        assert_eq!(outcome.employees_assigned, 1);
        let matches = store.matches.lock().unwrap();
        let (saved, status) = matches.get(&(project_id, candidate_id)).unwrap();
        assert_eq!(saved.match_score, 83);
        assert_eq!(*status, MatchStatus::Assigned);
    }

    #[tokio::test]
    async fn test_failed_upsert_never_touches_the_counter() {
        let store = InMemoryStore {
            fail_upsert: true,
            ..Default::default()
        };

        let err = assign_candidate(&store, Uuid::new_v4(), Uuid::new_v4(), &scores(83))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Assignment(_)));
        assert_eq!(store.assigned.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_reassigning_same_pair_overwrites_the_match_row() {
        let store = InMemoryStore::default();
        let project_id = Uuid::new_v4();
        let candidate_id = Uuid::new_v4();

        assign_candidate(&store, project_id, candidate_id, &scores(83))
            .await
            .unwrap();
        assign_candidate(&store, project_id, candidate_id, &scores(91))
            .await
            .unwrap();

        let matches = store.matches.lock().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches.get(&(project_id, candidate_id)).unwrap().0.match_score, 91);
        // the counter is uncapped: re-assignment still increments
        assert_eq!(store.assigned.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_concurrent_assignments_do_not_lose_updates() {
        let store = Arc::new(InMemoryStore::default());
        let project_id = Uuid::new_v4();
        let n = 50;

        let mut handles = Vec::new();
        for _ in 0..n {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                assign_candidate(store.as_ref(), project_id, Uuid::new_v4(), &scores(83))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.assigned.load(Ordering::SeqCst), n);
    }
}
