//! Dashboard figures derived from the application state.
//!
//! Nothing here is stored; every value is recomputed from an [`AppState`].

use serde::Serialize;

use crate::state::AppState;

/// Headline numbers for the dashboard and progress pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub tasks_done: usize,
    pub tasks_total: usize,
    pub overall_progress: u8,
    pub weeks_completed: usize,
    pub current_week: u32,
    pub total_weeks: u32,
    /// `(current_week - 1) * 7 + tasks_done % 5`
    pub days_active: u32,
    /// Number of strong skills reported by the last analysis
    pub skills_learned: usize,
    pub readiness_score: u8,
    pub unread_notifications: usize,
    pub reviews_submitted: usize,
    pub average_review_score: Option<f32>,
    pub questions_attempted: u32,
    pub unique_questions_solved: usize,
    pub mock_sessions_completed: u32,
}

impl DashboardStats {
    pub fn from_state(state: &AppState) -> Self {
        let path = &state.learning_path;
        let counts = path.task_counts();
        let days_active = path
            .current_week
            .saturating_sub(1)
            .saturating_mul(7)
            .saturating_add((counts.done % 5) as u32);

        let reviews = &state.project_reviews;
        let average_review_score = (!reviews.is_empty()).then(|| {
            reviews.iter().map(|r| f32::from(r.overall_score)).sum::<f32>() / reviews.len() as f32
        });

        Self {
            tasks_done: counts.done,
            tasks_total: counts.total,
            overall_progress: path.overall_progress,
            weeks_completed: path.weeks_completed(),
            current_week: path.current_week,
            total_weeks: path.total_weeks,
            days_active,
            skills_learned: state.skill_gap.strong_skills.len(),
            readiness_score: state.skill_gap.readiness_score,
            unread_notifications: state.unread_notification_count(),
            reviews_submitted: reviews.len(),
            average_review_score,
            questions_attempted: state.interview_prep.questions_attempted,
            unique_questions_solved: state.interview_prep.unique_solved_questions().len(),
            mock_sessions_completed: state.interview_prep.mock_sessions_completed,
        }
    }
}

impl From<&AppState> for DashboardStats {
    fn from(state: &AppState) -> Self {
        Self::from_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project_review::ProjectReview;

    #[test]
    fn test_demo_stats() {
        let stats = DashboardStats::from_state(&AppState::default());
        assert_eq!(stats.tasks_done, 12);
        assert_eq!(stats.tasks_total, 30);
        assert_eq!(stats.overall_progress, 40);
        assert_eq!(stats.weeks_completed, 2);
        // (3 - 1) * 7 + 12 % 5
        assert_eq!(stats.days_active, 16);
        assert_eq!(stats.skills_learned, 5);
        assert_eq!(stats.readiness_score, 62);
        assert_eq!(stats.unread_notifications, 3);
        assert_eq!(stats.reviews_submitted, 1);
        assert_eq!(stats.average_review_score, Some(62.0));
        assert_eq!(stats.unique_questions_solved, 5);
    }

    #[test]
    fn test_days_active_saturates_on_huge_week_pointer() {
        let mut state = AppState::default();
        state.learning_path.current_week = u32::MAX;
        assert_eq!(DashboardStats::from_state(&state).days_active, u32::MAX);
    }

    #[test]
    fn test_average_review_score() {
        let mut state = AppState::default();
        state.project_reviews = vec![
            ProjectReview::reviewed("a", "", vec![], 50),
            ProjectReview::reviewed("b", "", vec![], 71),
        ];
        assert_eq!(DashboardStats::from(&state).average_review_score, Some(60.5));

        state.project_reviews.clear();
        assert_eq!(DashboardStats::from(&state).average_review_score, None);
    }
}
