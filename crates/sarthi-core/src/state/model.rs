//! Application state domain model.

use serde::{Deserialize, Serialize};
use version_migrate::DeriveQueryable as Queryable;

use crate::interview::InterviewPrepData;
use crate::learning_path::LearningPathData;
use crate::notification::Notification;
use crate::profile::UserProfile;
use crate::project_review::ProjectReview;
use crate::skill_gap::SkillGapData;

/// Everything the dashboard knows about the current user session.
///
/// This is the unit of persistence: the whole struct is written as one record
/// after each mutation and read back once at startup. `Default` yields the
/// seeded demo state (see [`crate::state::demo_state`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable)]
#[queryable(entity = "sarthi_store")]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub user: UserProfile,
    pub skill_gap: SkillGapData,
    pub learning_path: LearningPathData,
    /// Oldest first
    pub project_reviews: Vec<ProjectReview>,
    pub interview_prep: InterviewPrepData,
    pub onboarding_complete: bool,
    pub active_section: String,
    /// Newest first
    pub notifications: Vec<Notification>,
    pub mobile_menu_open: bool,
}

impl AppState {
    /// Creates the seeded demo state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn notification(&self, id: &str) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }
}

impl Default for AppState {
    fn default() -> Self {
        super::demo::demo_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_demo_state() {
        let state = AppState::default();
        assert_eq!(state.user.name, "Vikas Sharma");
        assert!(state.onboarding_complete);
        assert_eq!(state.active_section, "dashboard");
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_unread_count() {
        let state = AppState::new();
        assert_eq!(state.unread_notification_count(), 3);
        assert!(state.notification("n3").is_some_and(|n| n.read));
        assert!(state.notification("missing").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let state = AppState::new();
        let json = serde_json::to_string(&state).unwrap();
        let restored: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
