#![allow(dead_code)]

//! Named weight vectors for the two aggregate scores.
//!
//! Both aggregates are convex combinations: each vector must sum to 1.0 so
//! the result stays inside [0, 100]. Scoring policy changes happen here, not
//! in the scoring or ranking code.

/// Weights for the ingestion-time overall score.
pub const OVERALL_WEIGHTS: OverallWeights = OverallWeights {
    ats: 0.30,
    skills: 0.25,
    projects: 0.20,
    experience: 0.15,
    education: 0.10,
};

/// Weights for the per-project match score.
/// Skills dominate: a candidate who cannot cover the required stack is a
/// poor match regardless of seniority.
pub const MATCH_WEIGHTS: MatchWeights = MatchWeights {
    skills: 0.35,
    experience: 0.25,
    domain: 0.20,
    education: 0.10,
    availability: 0.10,
};

#[derive(Debug, Clone, Copy)]
pub struct OverallWeights {
    pub ats: f64,
    pub skills: f64,
    pub projects: f64,
    pub experience: f64,
    pub education: f64,
}

impl OverallWeights {
    pub fn sum(&self) -> f64 {
        self.ats + self.skills + self.projects + self.experience + self.education
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub domain: f64,
    pub education: f64,
    pub availability: f64,
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.domain + self.education + self.availability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overall_weights_sum_to_one() {
        assert!((OVERALL_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn match_weights_sum_to_one() {
        assert!((MATCH_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }
}
