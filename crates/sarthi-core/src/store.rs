//! The application state store.
//!
//! `SarthiStore` is the single owner of [`AppState`]. Views never write fields
//! directly; every change goes through a named mutator which
//!
//! 1. applies the change,
//! 2. recomputes derived values (learning path progress),
//! 3. publishes a [`StoreSnapshot`] on a watch channel.
//!
//! Step 3 always runs after step 2, so a subscriber can never observe a
//! snapshot whose progress lags behind its tasks. Persistence is one such
//! subscriber and lives outside this crate.

use std::sync::Arc;

use strum::{AsRefStr, Display};
use tokio::sync::watch;

use crate::error::Result;
use crate::learning_path::LearningPathPatch;
use crate::notification::Notification;
use crate::profile::UserProfilePatch;
use crate::project_review::ProjectReview;
use crate::skill_gap::SkillGapPatch;
use crate::state::AppState;

/// The mutation that produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum StoreAction {
    /// Initial state the store was created with
    Hydrate,
    SetUser,
    SetSkillGap,
    SetLearningPath,
    AddProjectReview,
    UpdateTaskComplete,
    MarkWeekComplete,
    AddSolvedQuestion,
    CompleteMockSession,
    SetOnboardingComplete,
    AddNotification,
    MarkNotificationRead,
    MarkAllNotificationsRead,
    SetActiveSection,
    SetMobileMenuOpen,
    /// Back to the demo state; persisted by clearing the stored record
    Reset,
}

/// An immutable view of the store after one mutation.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    /// Monotonic counter, 0 for the initial state
    pub revision: u64,
    pub action: StoreAction,
    pub state: Arc<AppState>,
}

impl StoreSnapshot {
    pub fn is_initial(&self) -> bool {
        self.action == StoreAction::Hydrate
    }
}

/// Single source of truth for one dashboard session.
#[derive(Debug)]
pub struct SarthiStore {
    state: AppState,
    revision: u64,
    changes: watch::Sender<StoreSnapshot>,
}

impl Default for SarthiStore {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl SarthiStore {
    /// Creates a store holding `state` (typically rehydrated from storage).
    pub fn new(state: AppState) -> Self {
        let (changes, _) = watch::channel(StoreSnapshot {
            revision: 0,
            action: StoreAction::Hydrate,
            state: Arc::new(state.clone()),
        });

        Self {
            state,
            revision: 0,
            changes,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Subscribes to change notifications.
    ///
    /// The receiver always holds the latest snapshot; intermediate snapshots
    /// may be skipped when the subscriber falls behind.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.changes.subscribe()
    }

    fn publish(&mut self, action: StoreAction) {
        self.revision += 1;
        self.changes.send_replace(StoreSnapshot {
            revision: self.revision,
            action,
            state: Arc::new(self.state.clone()),
        });
    }

    // ============================================================================
    // Mutators
    // ============================================================================

    /// Merges profile fields from a settings or onboarding form.
    pub fn set_user(&mut self, patch: UserProfilePatch) {
        patch.apply_to(&mut self.state.user);
        self.publish(StoreAction::SetUser);
    }

    /// Merges analysis fields. The readiness score is clamped to 100.
    pub fn set_skill_gap(&mut self, patch: SkillGapPatch) {
        patch.apply_to(&mut self.state.skill_gap);
        self.publish(StoreAction::SetSkillGap);
    }

    /// Merges learning path fields. See [`LearningPathPatch::apply_to`] for
    /// when progress is recomputed.
    pub fn set_learning_path(&mut self, patch: LearningPathPatch) {
        patch.apply_to(&mut self.state.learning_path);
        self.publish(StoreAction::SetLearningPath);
    }

    /// Appends a review to the history. Ids are not checked for uniqueness.
    pub fn add_project_review(&mut self, review: ProjectReview) {
        self.state.project_reviews.push(review);
        self.publish(StoreAction::AddProjectReview);
    }

    /// Toggles one daily task and recomputes overall progress.
    ///
    /// Returns the task's new completion flag. Out-of-range indices leave the
    /// state untouched and publish nothing.
    pub fn update_task_complete(&mut self, week_index: usize, task_index: usize) -> Result<bool> {
        let completed = self
            .state
            .learning_path
            .toggle_task(week_index, task_index)?;
        self.publish(StoreAction::UpdateTaskComplete);
        Ok(completed)
    }

    /// Completes a week and every task in it, recomputes progress and moves
    /// `current_week` to `min(week_index + 2, total_weeks)`.
    pub fn mark_week_complete(&mut self, week_index: usize) -> Result<()> {
        self.state.learning_path.complete_week(week_index)?;
        self.publish(StoreAction::MarkWeekComplete);
        Ok(())
    }

    /// Counts an attempt and records the id, even if it was solved before.
    pub fn add_solved_question(&mut self, id: impl Into<String>) {
        let prep = &mut self.state.interview_prep;
        prep.questions_attempted += 1;
        prep.questions_solved.push(id.into());
        self.publish(StoreAction::AddSolvedQuestion);
    }

    pub fn complete_mock_session(&mut self) {
        self.state.interview_prep.mock_sessions_completed += 1;
        self.publish(StoreAction::CompleteMockSession);
    }

    /// One-way: there is no way to clear the flag short of [`reset`](Self::reset).
    pub fn set_onboarding_complete(&mut self) {
        self.state.onboarding_complete = true;
        self.publish(StoreAction::SetOnboardingComplete);
    }

    /// Prepends, keeping the list newest first.
    pub fn add_notification(&mut self, notification: Notification) {
        self.state.notifications.insert(0, notification);
        self.publish(StoreAction::AddNotification);
    }

    /// Marks the notification with `id` as read.
    ///
    /// Returns false and publishes nothing when no notification has that id.
    pub fn mark_notification_read(&mut self, id: &str) -> bool {
        let Some(notification) = self.state.notifications.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        notification.read = true;
        self.publish(StoreAction::MarkNotificationRead);
        true
    }

    pub fn mark_all_notifications_read(&mut self) {
        for notification in &mut self.state.notifications {
            notification.read = true;
        }
        self.publish(StoreAction::MarkAllNotificationsRead);
    }

    pub fn set_active_section(&mut self, section: impl Into<String>) {
        self.state.active_section = section.into();
        self.publish(StoreAction::SetActiveSection);
    }

    pub fn set_mobile_menu_open(&mut self, open: bool) {
        self.state.mobile_menu_open = open;
        self.publish(StoreAction::SetMobileMenuOpen);
    }

    /// Replaces everything with the demo state.
    pub fn reset(&mut self) {
        self.state = AppState::default();
        self.publish(StoreAction::Reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning_path::{DailyTask, LearningPathData, TaskType, WeekPlan};
    use crate::notification::NotificationKind;

    fn week(number: u32, done: usize, total: usize) -> WeekPlan {
        WeekPlan {
            week: number,
            theme: format!("Theme {number}"),
            completed: false,
            topics: vec![],
            daily_tasks: (0..total)
                .map(|i| DailyTask {
                    day: format!("Day {i}"),
                    task: format!("Task {i}"),
                    task_type: TaskType::Code,
                    duration: "1h".to_string(),
                    resource: String::new(),
                    completed: i < done,
                })
                .collect(),
            dsa_topics: vec![],
            weekly_project: String::new(),
        }
    }

    fn store_with_weeks(weeks: Vec<WeekPlan>) -> SarthiStore {
        let mut state = AppState::default();
        state.learning_path = LearningPathData::from_weeks(weeks, 1);
        SarthiStore::new(state)
    }

    #[test]
    fn test_ten_task_scenario() {
        let mut store = store_with_weeks(vec![week(1, 2, 5), week(2, 0, 5)]);
        assert_eq!(store.state().learning_path.overall_progress, 20);

        let done = store.update_task_complete(0, 2).unwrap();
        assert!(done);
        assert_eq!(store.state().learning_path.overall_progress, 30);
    }

    #[test]
    fn test_double_toggle_cancels_out() {
        let mut store = store_with_weeks(vec![week(1, 1, 4)]);
        store.update_task_complete(0, 3).unwrap();
        store.update_task_complete(0, 3).unwrap();
        assert_eq!(store.state().learning_path.overall_progress, 25);
        assert!(!store.state().learning_path.weekly_plan[0].daily_tasks[3].completed);
    }

    #[test]
    fn test_toggle_out_of_range_publishes_nothing() {
        let mut store = store_with_weeks(vec![week(1, 0, 2)]);
        let before = store.state().clone();

        assert!(store.update_task_complete(1, 0).unwrap_err().is_out_of_range());
        assert!(store.update_task_complete(0, 9).unwrap_err().is_out_of_range());
        assert_eq!(store.state(), &before);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_mark_week_complete_sets_pointer_and_progress() {
        let weeks = (1..=6).map(|n| week(n, 0, 5)).collect();
        let mut store = store_with_weeks(weeks);

        store.mark_week_complete(2).unwrap();
        let path = &store.state().learning_path;
        assert_eq!(path.current_week, 4);
        assert!(path.weekly_plan[2].completed);
        assert!(path.weekly_plan[2].all_tasks_done());
        assert_eq!(path.overall_progress, 17);

        store.mark_week_complete(5).unwrap();
        assert_eq!(store.state().learning_path.current_week, 6);
    }

    #[test]
    fn test_mark_week_complete_is_idempotent() {
        let mut store = store_with_weeks(vec![week(1, 3, 5), week(2, 0, 5)]);
        store.mark_week_complete(0).unwrap();
        let once = store.state().learning_path.clone();
        store.mark_week_complete(0).unwrap();
        assert_eq!(store.state().learning_path, once);
    }

    #[test]
    fn test_mark_week_complete_out_of_range() {
        let mut store = store_with_weeks(vec![week(1, 0, 5)]);
        assert!(store.mark_week_complete(1).is_err());
        assert_eq!(store.state().learning_path.current_week, 1);
    }

    #[test]
    fn test_add_solved_question_keeps_duplicates() {
        let mut store = SarthiStore::default();
        let attempted = store.state().interview_prep.questions_attempted;
        let solved = store.state().interview_prep.questions_solved.len();

        store.add_solved_question("q1");
        store.add_solved_question("q1");

        let prep = &store.state().interview_prep;
        assert_eq!(prep.questions_attempted, attempted + 2);
        assert_eq!(prep.questions_solved.len(), solved + 2);
        assert_eq!(prep.questions_solved.last().map(String::as_str), Some("q1"));
    }

    #[test]
    fn test_notifications_prepend_and_mark_all() {
        let mut store = SarthiStore::default();
        let n = Notification::new("Week 3 unlocked", NotificationKind::Info);
        let id = n.id.clone();

        store.add_notification(n);
        assert_eq!(store.state().notifications[0].id, id);

        store.mark_all_notifications_read();
        assert!(store.state().notifications.iter().all(|n| n.read));
        assert_eq!(store.state().unread_notification_count(), 0);
    }

    #[test]
    fn test_mark_unknown_notification_is_noop() {
        let mut store = SarthiStore::default();
        let before = store.state().notifications.clone();

        assert!(!store.mark_notification_read("does-not-exist"));
        assert_eq!(store.state().notifications, before);
        assert_eq!(store.revision(), 0);

        assert!(store.mark_notification_read("n1"));
        assert!(store.state().notification("n1").is_some_and(|n| n.read));
    }

    #[test]
    fn test_set_user_merges() {
        let mut store = SarthiStore::default();
        store.set_user(UserProfilePatch {
            city: Some("Bengaluru".to_string()),
            ..Default::default()
        });
        assert_eq!(store.state().user.city, "Bengaluru");
        assert_eq!(store.state().user.name, "Vikas Sharma");
    }

    #[test]
    fn test_ui_toggles_and_onboarding() {
        let mut store = SarthiStore::default();
        store.set_mobile_menu_open(true);
        store.set_active_section("skills");
        store.set_onboarding_complete();

        let state = store.state();
        assert!(state.mobile_menu_open);
        assert_eq!(state.active_section, "skills");
        assert!(state.onboarding_complete);
    }

    #[test]
    fn test_subscribers_see_recomputed_progress() {
        let mut store = store_with_weeks(vec![week(1, 2, 5), week(2, 0, 5)]);
        let mut rx = store.subscribe();
        assert!(rx.borrow_and_update().is_initial());

        store.update_task_complete(1, 0).unwrap();

        assert!(rx.has_changed().unwrap());
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.revision, 1);
        assert_eq!(snapshot.action, StoreAction::UpdateTaskComplete);
        assert_eq!(snapshot.state.learning_path.overall_progress, 30);
    }

    #[test]
    fn test_reset_restores_demo_state() {
        let mut store = SarthiStore::default();
        store.set_active_section("settings");
        store.add_solved_question("q99");
        store.reset();

        assert_eq!(store.state().active_section, "dashboard");
        assert!(!store.state().interview_prep.has_solved("q99"));
        assert_eq!(store.subscribe().borrow().action, StoreAction::Reset);
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn test_action_names() {
        assert_eq!(StoreAction::MarkWeekComplete.to_string(), "mark_week_complete");
        assert_eq!(StoreAction::Hydrate.as_ref(), "hydrate");
    }
}
