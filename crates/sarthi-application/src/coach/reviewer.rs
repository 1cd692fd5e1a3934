//! Simulated project reviewer.
//!
//! Produces a fixed review report for any repository. Only the overall score
//! varies: it is the weighted category score plus a small random jitter.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sarthi_core::config::SimulationConfig;
use sarthi_core::error::{Result, SarthiError};
use sarthi_core::project_review::ProjectReview;
use sarthi_core::skill_gap::Priority;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::simulate::latency;

/// Maximum distance of the overall score from the weighted category score.
pub const SCORE_JITTER: i32 = 4;

/// Repository submitted for review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSubmission {
    pub project_name: String,
    pub github_url: String,
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub label: String,
    pub score: u8,
    /// Share of the overall score, in percent
    pub weight: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewIssue {
    pub priority: Priority,
    pub text: String,
}

/// Full reviewer output. Only `review` is kept in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewReport {
    pub review: ProjectReview,
    pub categories: Vec<CategoryScore>,
    pub strengths: Vec<String>,
    pub issues: Vec<ReviewIssue>,
}

fn category(label: &str, score: u8, weight: u8) -> CategoryScore {
    CategoryScore {
        label: label.to_string(),
        score,
        weight,
    }
}

fn issue(priority: Priority, text: &str) -> ReviewIssue {
    ReviewIssue {
        priority,
        text: text.to_string(),
    }
}

fn canned_categories() -> Vec<CategoryScore> {
    vec![
        category("Code Quality", 72, 40),
        category("Security", 55, 30),
        category("Production Ready", 48, 20),
        category("Documentation", 30, 10),
    ]
}

fn canned_strengths() -> Vec<String> {
    [
        "Clean folder structure",
        "Good variable naming conventions",
        "REST API endpoints follow standards",
        "Proper use of async/await",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn canned_issues() -> Vec<ReviewIssue> {
    vec![
        issue(Priority::High, "No .env file, API keys hardcoded in source"),
        issue(Priority::High, "No input validation on POST routes"),
        issue(Priority::Medium, "Missing error handling middleware"),
        issue(Priority::Medium, "No rate limiting on API endpoints"),
        issue(Priority::Low, "README is minimal, needs improvement"),
        issue(Priority::Low, "No unit tests present"),
    ]
}

/// Weighted mean of the category scores, rounded half up.
pub fn weighted_score(categories: &[CategoryScore]) -> u8 {
    let total_weight: u32 = categories.iter().map(|c| u32::from(c.weight)).sum();
    if total_weight == 0 {
        return 0;
    }
    let weighted: u32 = categories
        .iter()
        .map(|c| u32::from(c.score) * u32::from(c.weight))
        .sum();
    ((2 * weighted + total_weight) / (2 * total_weight)).min(100) as u8
}

pub struct ProjectReviewer {
    simulation: SimulationConfig,
    rng: Mutex<StdRng>,
}

impl ProjectReviewer {
    pub fn new(simulation: SimulationConfig) -> Self {
        Self::with_rng(simulation, StdRng::from_entropy())
    }

    /// Reviewer with a seeded generator, for reproducible scores.
    pub fn with_seed(simulation: SimulationConfig, seed: u64) -> Self {
        Self::with_rng(simulation, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(simulation: SimulationConfig, rng: StdRng) -> Self {
        Self {
            simulation,
            rng: Mutex::new(rng),
        }
    }

    fn jitter(&self) -> i32 {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(-SCORE_JITTER..=SCORE_JITTER)
    }

    /// Reviews a submission. Rejects a blank project name or URL before
    /// waiting.
    pub async fn review(&self, submission: ProjectSubmission) -> Result<ReviewReport> {
        if submission.project_name.trim().is_empty() {
            return Err(SarthiError::invalid_input("project name is empty"));
        }
        if submission.github_url.trim().is_empty() {
            return Err(SarthiError::invalid_input("repository URL is empty"));
        }

        latency(self.simulation.review_delay()).await;

        let categories = canned_categories();
        let base = i32::from(weighted_score(&categories));
        let overall = (base + self.jitter()).clamp(0, 100) as u8;

        let tech_stack = submission
            .tech_stack
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        let review = ProjectReview::reviewed(
            submission.project_name.trim(),
            submission.github_url.trim(),
            tech_stack,
            overall,
        );

        tracing::info!(
            project = %review.project_name,
            score = review.overall_score,
            "Project review finished"
        );

        Ok(ReviewReport {
            review,
            categories,
            strengths: canned_strengths(),
            issues: canned_issues(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ProjectSubmission {
        ProjectSubmission {
            project_name: "Notes API".to_string(),
            github_url: "https://github.com/vikassharma/notes-api".to_string(),
            tech_stack: vec![
                "Node.js".to_string(),
                " PostgreSQL ".to_string(),
                "Node.js".to_string(),
                "".to_string(),
            ],
        }
    }

    #[test]
    fn test_weighted_score_of_canned_categories() {
        // 72*.4 + 55*.3 + 48*.2 + 30*.1 = 57.9
        assert_eq!(weighted_score(&canned_categories()), 58);
        assert_eq!(weighted_score(&[]), 0);
    }

    #[tokio::test]
    async fn test_review_score_stays_within_jitter() {
        let reviewer = ProjectReviewer::with_seed(SimulationConfig::instant(), 7);
        for _ in 0..20 {
            let report = reviewer.review(submission()).await.unwrap();
            let score = i32::from(report.review.overall_score);
            assert!((58 - SCORE_JITTER..=58 + SCORE_JITTER).contains(&score));
        }
    }

    #[tokio::test]
    async fn test_same_seed_same_scores() {
        let a = ProjectReviewer::with_seed(SimulationConfig::instant(), 42);
        let b = ProjectReviewer::with_seed(SimulationConfig::instant(), 42);
        for _ in 0..5 {
            let ra = a.review(submission()).await.unwrap();
            let rb = b.review(submission()).await.unwrap();
            assert_eq!(ra.review.overall_score, rb.review.overall_score);
        }
    }

    #[tokio::test]
    async fn test_report_contents() {
        let reviewer = ProjectReviewer::with_seed(SimulationConfig::instant(), 1);
        let report = reviewer.review(submission()).await.unwrap();
        assert_eq!(report.review.tech_stack, vec!["Node.js", "PostgreSQL"]);
        assert_eq!(report.categories.len(), 4);
        assert_eq!(report.strengths.len(), 4);
        assert_eq!(
            report.issues.iter().filter(|i| i.priority == Priority::High).count(),
            2
        );
    }

    #[tokio::test]
    async fn test_blank_submission_is_rejected() {
        let reviewer = ProjectReviewer::with_seed(SimulationConfig::instant(), 1);
        let mut blank = submission();
        blank.project_name = "  ".to_string();
        assert!(reviewer.review(blank).await.unwrap_err().is_invalid_input());

        let mut no_url = submission();
        no_url.github_url = String::new();
        assert!(reviewer.review(no_url).await.unwrap_err().is_invalid_input());
    }
}
