//! Candidate Scorer — pluggable, trait-based scorer that derives the five
//! ingestion-time score fields from a candidate's raw attributes.
//!
//! Default: `HeuristicCandidateScorer` (pure-Rust, fast, deterministic).
//! A model-backed scorer can implement the same trait and be swapped in at
//! startup without touching handler code.
//!
//! `AppState` holds an `Arc<dyn CandidateScorer>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::scoring::weights::{OverallWeights, OVERALL_WEIGHTS};

// ────────────────────────────────────────────────────────────────────────────
// Input / output data models (shared across all scorer backends)
// ────────────────────────────────────────────────────────────────────────────

/// Raw attributes available at ingestion time.
#[derive(Debug, Clone)]
pub struct CandidateAttributes {
    pub skills: Vec<String>,
    pub project_domains: Vec<String>,
    pub experience_years: f64,
    /// From the external resume-screening step; clamped to [0, 100] here.
    pub ats_score: i32,
    pub education: String,
}

/// The five score fields persisted on the candidate row. All in [0, 100].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub ats_score: i32,
    pub skills_score: i32,
    pub projects_score: i32,
    pub experience_score: i32,
    pub education_score: i32,
    pub overall_score: i32,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definitions
// ────────────────────────────────────────────────────────────────────────────

/// The ingestion scorer trait. Implement this to swap backends without
/// touching the endpoint or handler code.
#[async_trait]
pub trait CandidateScorer: Send + Sync {
    async fn score(&self, attrs: &CandidateAttributes) -> ScoreCard;
}

/// Bounded perturbation added to the count-based sub-scores.
///
/// The upstream extraction pipeline historically used random noise here; that
/// made scores irreproducible, so the perturbation is now an injectable
/// strategy. Production default adds nothing.
pub trait ScoreNoise: Send + Sync {
    /// Returns a value in [0, upper). Out-of-band values are clamped by the
    /// caller.
    fn sample(&self, upper: f64) -> f64;
}

/// Deterministic zero perturbation — the production default.
pub struct NoNoise;

impl ScoreNoise for NoNoise {
    fn sample(&self, _upper: f64) -> f64 {
        0.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicCandidateScorer — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Count-and-band heuristic scorer.
///
/// Algorithm:
/// - skills:     min(100, |skills| * 10 + noise),         noise in [0, 20)
/// - projects:   min(100, |project_domains| * 15 + noise), noise in [0, 25)
/// - experience: piecewise-linear in years — [40,60] up to 2y, [60,80] up to
///   5y, [80,100] beyond, saturating at 15y
/// - education:  keyword band inside [70, 100)
/// - overall:    round of the convex combination under `OVERALL_WEIGHTS`
pub struct HeuristicCandidateScorer {
    noise: Box<dyn ScoreNoise>,
}

impl HeuristicCandidateScorer {
    pub fn new(noise: Box<dyn ScoreNoise>) -> Self {
        Self { noise }
    }
}

impl Default for HeuristicCandidateScorer {
    fn default() -> Self {
        Self::new(Box::new(NoNoise))
    }
}

#[async_trait]
impl CandidateScorer for HeuristicCandidateScorer {
    async fn score(&self, attrs: &CandidateAttributes) -> ScoreCard {
        compute_score_card(attrs, self.noise.as_ref(), &OVERALL_WEIGHTS)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring functions (total — clamp, never fail)
// ────────────────────────────────────────────────────────────────────────────

pub fn compute_score_card(
    attrs: &CandidateAttributes,
    noise: &dyn ScoreNoise,
    weights: &OverallWeights,
) -> ScoreCard {
    let ats = f64::from(attrs.ats_score).clamp(0.0, 100.0);
    let skills = skills_score(attrs.skills.len(), noise.sample(20.0).clamp(0.0, 20.0));
    let projects = projects_score(attrs.project_domains.len(), noise.sample(25.0).clamp(0.0, 25.0));
    let experience = experience_score(attrs.experience_years);
    let education = education_score(&attrs.education);

    let overall = weights.ats * ats
        + weights.skills * skills
        + weights.projects * projects
        + weights.experience * experience
        + weights.education * education;

    ScoreCard {
        ats_score: ats.round() as i32,
        skills_score: skills.round() as i32,
        projects_score: projects.round() as i32,
        experience_score: experience.round() as i32,
        education_score: education.round() as i32,
        overall_score: overall.round().clamp(0.0, 100.0) as i32,
    }
}

fn skills_score(skill_count: usize, noise: f64) -> f64 {
    (skill_count as f64 * 10.0 + noise).min(100.0)
}

fn projects_score(domain_count: usize, noise: f64) -> f64 {
    (domain_count as f64 * 15.0 + noise).min(100.0)
}

/// Piecewise-linear experience score. Negative years (defective upstream
/// parsing) clamp to zero.
pub fn experience_score(years: f64) -> f64 {
    let years = years.max(0.0);
    if years <= 2.0 {
        40.0 + (years / 2.0) * 20.0
    } else if years <= 5.0 {
        60.0 + ((years - 2.0) / 3.0) * 20.0
    } else {
        (80.0 + ((years - 5.0) / 10.0) * 20.0).min(100.0)
    }
}

/// Keyword band inside [70, 100) — the range the original education stub
/// occupied. Technical degrees rank above generic degrees, which rank above
/// everything else.
pub fn education_score(education: &str) -> f64 {
    let education = education.to_lowercase();
    if education.contains("computer") || education.contains("engineering") || education.contains("tech")
    {
        95.0
    } else if education.contains("bachelor") || education.contains("master") {
        85.0
    } else {
        70.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
