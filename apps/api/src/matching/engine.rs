//! Pure ranking computation: five sub-scores per candidate, one weighted
//! aggregate, stable descending sort, top-10 truncation.
//!
//! Sub-scores are computed unrounded; the aggregate is taken from the
//! unrounded values and rounded exactly once. Each sub-score is rounded
//! independently only for storage and display.

use serde::Serialize;

use crate::models::candidate::{CandidateRow, CandidateStatus};
use crate::models::project::ProjectRow;
use crate::scoring::weights::{MatchWeights, MATCH_WEIGHTS};

/// Ranking never returns more than this many candidates.
pub const MAX_MATCHES: usize = 10;

/// Rounded sub-scores and aggregate for one (project, candidate) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchScores {
    pub skills_score: i32,
    pub experience_score: i32,
    pub domain_score: i32,
    pub education_score: i32,
    pub availability_score: i32,
    pub match_score: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedMatch {
    pub candidate: CandidateRow,
    #[serde(flatten)]
    pub scores: MatchScores,
}

/// Ranks the candidate pool against one project's requirements.
///
/// Only shortlisted candidates are eligible. The sort is stable: ties keep
/// pool order, which carries recency meaning upstream. An empty result is a
/// valid outcome, not an error.
pub fn calculate_matches(project: &ProjectRow, candidates: &[CandidateRow]) -> Vec<RankedMatch> {
    let mut ranked: Vec<RankedMatch> = candidates
        .iter()
        .filter(|c| c.status == CandidateStatus::Shortlisted)
        .map(|c| RankedMatch {
            candidate: c.clone(),
            scores: score_candidate(project, c, &MATCH_WEIGHTS),
        })
        .collect();

    ranked.sort_by(|a, b| b.scores.match_score.cmp(&a.scores.match_score));
    ranked.truncate(MAX_MATCHES);
    ranked
}

fn score_candidate(
    project: &ProjectRow,
    candidate: &CandidateRow,
    weights: &MatchWeights,
) -> MatchScores {
    let skills = skills_match_score(&project.required_skills, &candidate.skills);
    let experience =
        experience_band_score(&project.experience_level, candidate.experience_years.max(0.0));
    let domain = domain_match_score(&project.project_type, &candidate.project_domains);
    let education = education_match_score(candidate.education.as_deref().unwrap_or(""));
    // The pool is pre-filtered to shortlisted candidates, assumed available.
    let availability = 100.0;

    let match_score = weights.skills * skills
        + weights.experience * experience
        + weights.domain * domain
        + weights.education * education
        + weights.availability * availability;

    MatchScores {
        skills_score: skills.round() as i32,
        experience_score: experience.round() as i32,
        domain_score: domain.round() as i32,
        education_score: education.round() as i32,
        availability_score: availability as i32,
        match_score: match_score.round() as i32,
    }
}

/// Fraction of required skills covered, as a percentage. A required skill is
/// covered when it appears case-insensitively inside any candidate skill
/// ("react" covers "React.js"). No requirements means zero, not an error.
fn skills_match_score(required: &[String], candidate_skills: &[String]) -> f64 {
    if required.is_empty() {
        return 0.0;
    }
    let candidate_lower: Vec<String> =
        candidate_skills.iter().map(|s| s.to_lowercase()).collect();
    let matching = required
        .iter()
        .filter(|req| {
            let req = req.to_lowercase();
            candidate_lower.iter().any(|skill| skill.contains(&req))
        })
        .count();
    matching as f64 / required.len() as f64 * 100.0
}

/// Banded experience score keyed off the project's level label. Inside the
/// band scores 100; outside decays linearly. Unrecognized labels score zero.
fn experience_band_score(level: &str, years: f64) -> f64 {
    if level.contains("Junior") {
        if (0.0..=2.0).contains(&years) {
            100.0
        } else {
            (100.0 - (years - 1.0).abs() * 20.0).max(0.0)
        }
    } else if level.contains("Mid-level") {
        if (2.0..=5.0).contains(&years) {
            100.0
        } else {
            (100.0 - (years - 3.5).abs() * 20.0).max(0.0)
        }
    } else if level.contains("Senior") {
        if years >= 5.0 {
            100.0
        } else {
            (years * 20.0).max(0.0)
        }
    } else if level.contains("Lead") {
        if years >= 8.0 {
            100.0
        } else {
            (years * 12.5).max(0.0)
        }
    } else {
        0.0
    }
}

/// 100 on a containment hit either way between the project's type label and
/// any candidate domain; 50 when the candidate has domain data at all; 0
/// otherwise. The bare-presence rule is inherited behavior.
fn domain_match_score(project_type: &str, candidate_domains: &[String]) -> f64 {
    let project_type = project_type.to_lowercase();
    let hit = candidate_domains
        .iter()
        .map(|d| d.to_lowercase())
        .any(|d| project_type.contains(&d) || d.contains(&project_type));
    if hit {
        100.0
    } else if !candidate_domains.is_empty() {
        50.0
    } else {
        0.0
    }
}

fn education_match_score(education: &str) -> f64 {
    let education = education.to_lowercase();
    if education.contains("computer") || education.contains("engineering") || education.contains("tech")
    {
        100.0
    } else if education.contains("bachelor") || education.contains("master") {
        70.0
    } else {
        50.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_project(required_skills: Vec<&str>, experience_level: &str, project_type: &str) -> ProjectRow {
        ProjectRow {
            id: Uuid::new_v4(),
            title: "Checkout revamp".to_string(),
            client_name: None,
            description: None,
            project_type: project_type.to_string(),
            required_skills: required_skills.into_iter().map(String::from).collect(),
            experience_level: experience_level.to_string(),
            employees_needed: 3,
            employees_assigned: 0,
            status: "active".to_string(),
            priority: "high".to_string(),
            created_at: Utc::now(),
        }
    }

    fn make_candidate(
        name: &str,
        skills: Vec<&str>,
        years: f64,
        domains: Vec<&str>,
        education: &str,
    ) -> CandidateRow {
        CandidateRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{name}@example.com"),
            phone: None,
            skills: skills.into_iter().map(String::from).collect(),
            project_domains: domains.into_iter().map(String::from).collect(),
            experience_years: years,
            education: Some(education.to_string()),
            domain: None,
            location: None,
            current_ctc: None,
            expected_ctc: None,
            status: CandidateStatus::Shortlisted,
            ats_score: 75,
            skills_score: Some(50),
            projects_score: Some(30),
            experience_score: Some(67),
            education_score: Some(85),
            overall_score: Some(61),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_end_to_end_scenario_scores_83() {
        let project = make_project(
            vec!["React", "Node.js"],
            "Mid-level (2-5 years)",
            "Web Development",
        );
        let candidate = make_candidate(
            "asha",
            vec!["React", "Python"],
            3.0,
            vec!["Web Development"],
            "Bachelor's in Computer Science",
        );

        let ranked = calculate_matches(&project, &[candidate]);
        assert_eq!(ranked.len(), 1);
        let scores = &ranked[0].scores;
        assert_eq!(scores.skills_score, 50);
        assert_eq!(scores.experience_score, 100);
        assert_eq!(scores.domain_score, 100);
        assert_eq!(scores.education_score, 100);
        assert_eq!(scores.availability_score, 100);
        // round(50*0.35 + 100*0.25 + 100*0.20 + 100*0.10 + 100*0.10) = 83
        assert_eq!(scores.match_score, 83);
    }

    #[test]
    fn test_skills_match_is_case_insensitive_substring() {
        assert_eq!(
            skills_match_score(&["react".to_string()], &["React.js".to_string()]),
            100.0
        );
        assert_eq!(
            skills_match_score(
                &["React".to_string(), "Go".to_string()],
                &["Django".to_string(), "react native".to_string()]
            ),
            50.0
        );
    }

    #[test]
    fn test_empty_required_skills_scores_zero() {
        assert_eq!(skills_match_score(&[], &["React".to_string()]), 0.0);
    }

    #[test]
    fn test_experience_band_boundaries() {
        assert_eq!(experience_band_score("Junior (0-2 years)", 1.0), 100.0);
        assert_eq!(experience_band_score("Mid-level (2-5 years)", 3.5), 100.0);
        assert_eq!(experience_band_score("Senior (5+ years)", 10.0), 100.0);
        assert_eq!(experience_band_score("Lead (8+ years)", 8.0), 100.0);
    }

    #[test]
    fn test_experience_decays_outside_band() {
        // Junior at 4 years: 100 - |4-1|*20 = 40
        assert_eq!(experience_band_score("Junior (0-2 years)", 4.0), 40.0);
        // Mid-level at 8 years: 100 - |8-3.5|*20 = 10
        assert_eq!(experience_band_score("Mid-level (2-5 years)", 8.0), 10.0);
        // Senior at 3 years: 3*20 = 60
        assert_eq!(experience_band_score("Senior (5+ years)", 3.0), 60.0);
        // Lead at 4 years: 4*12.5 = 50
        assert_eq!(experience_band_score("Lead (8+ years)", 4.0), 50.0);
    }

    #[test]
    fn test_unrecognized_experience_label_scores_zero() {
        assert_eq!(experience_band_score("Principal", 12.0), 0.0);
        assert_eq!(experience_band_score("", 3.0), 0.0);
    }

    #[test]
    fn test_domain_score_rules() {
        let web = vec!["Web Development".to_string()];
        assert_eq!(domain_match_score("Web Development", &web), 100.0);
        // containment either way
        assert_eq!(domain_match_score("Web", &web), 100.0);
        // unrelated domains still score 50 for mere presence
        assert_eq!(domain_match_score("Embedded", &web), 50.0);
        assert_eq!(domain_match_score("Embedded", &[]), 0.0);
    }

    #[test]
    fn test_education_match_rules() {
        assert_eq!(education_match_score("MSc Computer Science"), 100.0);
        assert_eq!(education_match_score("Bachelor of Arts"), 70.0);
        assert_eq!(education_match_score("Diploma"), 50.0);
    }

    #[test]
    fn test_only_shortlisted_candidates_are_ranked() {
        let project = make_project(vec!["React"], "Senior (5+ years)", "Web Development");
        let mut hired = make_candidate("hired", vec!["React"], 6.0, vec![], "B.Tech");
        hired.status = CandidateStatus::Hired;
        let shortlisted = make_candidate("listed", vec!["React"], 6.0, vec![], "B.Tech");

        let ranked = calculate_matches(&project, &[hired, shortlisted.clone()]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].candidate.id, shortlisted.id);
    }

    #[test]
    fn test_ranking_sorted_descending_and_truncated_to_ten() {
        let project = make_project(vec!["React"], "Senior (5+ years)", "Web Development");
        let pool: Vec<CandidateRow> = (0..1000)
            .map(|i| {
                // vary skills coverage so scores differ
                let skills = if i % 2 == 0 { vec!["React"] } else { vec!["Cobol"] };
                make_candidate(&format!("c{i}"), skills, 6.0, vec![], "B.Tech")
            })
            .collect();

        let ranked = calculate_matches(&project, &pool);
        assert_eq!(ranked.len(), MAX_MATCHES);
        for pair in ranked.windows(2) {
            assert!(pair[0].scores.match_score >= pair[1].scores.match_score);
        }
    }

    #[test]
    fn test_ties_preserve_pool_order() {
        let project = make_project(vec!["React"], "Senior (5+ years)", "Web Development");
        let pool: Vec<CandidateRow> = (0..20)
            .map(|i| make_candidate(&format!("c{i}"), vec!["React"], 6.0, vec![], "B.Tech"))
            .collect();
        let expected: Vec<Uuid> = pool.iter().take(MAX_MATCHES).map(|c| c.id).collect();

        let ranked = calculate_matches(&project, &pool);
        let got: Vec<Uuid> = ranked.iter().map(|m| m.candidate.id).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_empty_pool_is_a_valid_empty_result() {
        let project = make_project(vec!["React"], "Senior (5+ years)", "Web Development");
        assert!(calculate_matches(&project, &[]).is_empty());
    }

    #[test]
    fn test_all_sub_scores_stay_in_range() {
        let project = make_project(vec!["React", "Go", "Rust"], "Lead (8+ years)", "Systems");
        let candidate = make_candidate("x", vec![], -5.0, vec![], "");
        let ranked = calculate_matches(&project, &[candidate]);
        let s = &ranked[0].scores;
        for score in [
            s.skills_score,
            s.experience_score,
            s.domain_score,
            s.education_score,
            s.availability_score,
            s.match_score,
        ] {
            assert!((0..=100).contains(&score), "score {score} out of range");
        }
    }
}
