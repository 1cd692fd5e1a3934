//! ProjectReview domain model.
//!
//! Reviews are append-only history entries; the store never edits one in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Reviewed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReview {
    pub id: String,
    pub project_name: String,
    /// Repository URL the review was requested for
    pub github_url: String,
    pub tech_stack: Vec<String>,
    /// Within `0..=100`
    pub overall_score: u8,
    pub submitted_at: DateTime<Utc>,
    pub status: ReviewStatus,
}

impl ProjectReview {
    /// Creates a reviewed entry with a fresh id and the current timestamp.
    ///
    /// Duplicate tech-stack entries are dropped, keeping first occurrences in
    /// order. The score is clamped to 100.
    pub fn reviewed(
        project_name: impl Into<String>,
        github_url: impl Into<String>,
        tech_stack: Vec<String>,
        overall_score: u8,
    ) -> Self {
        let mut stack: Vec<String> = Vec::with_capacity(tech_stack.len());
        for tech in tech_stack {
            if !stack.contains(&tech) {
                stack.push(tech);
            }
        }

        Self {
            id: Uuid::new_v4().to_string(),
            project_name: project_name.into(),
            github_url: github_url.into(),
            tech_stack: stack,
            overall_score: overall_score.min(100),
            submitted_at: Utc::now(),
            status: ReviewStatus::Reviewed,
        }
    }
}
