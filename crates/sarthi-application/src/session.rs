//! Dashboard session: the composition root.
//!
//! A session owns one [`SarthiStore`], rehydrated from a [`StateRepository`],
//! and a background [`SnapshotPersister`] that writes every change back. The
//! simulated coach services are wired to the store here.

use anyhow::{Context, Result};
use sarthi_core::config::SarthiConfig;
use sarthi_core::notification::Notification;
use sarthi_core::skill_gap::SkillGapData;
use sarthi_core::state::repository::StateRepository;
use sarthi_core::{AppState, DashboardStats, SarthiStore};
use sarthi_infrastructure::{FileStateRepository, PersistReport, SarthiPaths, SnapshotPersister};
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::coach::{
    BehavioralCoach, ChatMessage, CoachChat, ProjectReviewer, ProjectSubmission, ReviewReport,
    SkillGapAnalyzer, StarAnswer, StarFeedback,
};
use crate::onboarding::OnboardingForm;
use crate::simulate::latency;

pub const ANALYSIS_READY_TEXT: &str = "Your skill gap analysis is ready!";

pub struct SarthiSession {
    store: SarthiStore,
    persister: JoinHandle<PersistReport>,
    config: SarthiConfig,
    analyzer: SkillGapAnalyzer,
    reviewer: ProjectReviewer,
    chat: CoachChat,
    behavioral: BehavioralCoach,
}

impl SarthiSession {
    /// Opens a session on `repository`.
    ///
    /// A missing record starts from the demo state. So does a record that
    /// cannot be read, after logging the failure; the next change overwrites
    /// it.
    pub async fn open(repository: Arc<dyn StateRepository>, config: SarthiConfig) -> Self {
        let state = match repository.load_state().await {
            Ok(Some(state)) => {
                tracing::info!("Restored saved dashboard state");
                state
            }
            Ok(None) => {
                tracing::info!("No saved state; starting from demo data");
                AppState::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load saved state; starting from demo data");
                AppState::default()
            }
        };

        let store = SarthiStore::new(state);
        let persister = SnapshotPersister::spawn(repository, store.subscribe());
        let simulation = config.simulation.clone();

        Self {
            store,
            persister,
            analyzer: SkillGapAnalyzer::new(simulation.clone()),
            reviewer: ProjectReviewer::new(simulation.clone()),
            chat: CoachChat::new(simulation.clone()),
            behavioral: BehavioralCoach::new(simulation),
            config,
        }
    }

    /// Opens a session backed by the snapshot file under `paths`.
    ///
    /// An unreadable snapshot file is moved aside and the session starts
    /// from the demo state.
    pub async fn open_file(paths: &SarthiPaths, config: SarthiConfig) -> Result<Self> {
        let repository = FileStateRepository::new(paths)
            .await
            .context("Failed to open the saved dashboard state")?;
        Ok(Self::open(Arc::new(repository), config).await)
    }

    /// Replaces the reviewer, e.g. with a seeded one.
    pub fn with_reviewer(mut self, reviewer: ProjectReviewer) -> Self {
        self.reviewer = reviewer;
        self
    }

    pub fn config(&self) -> &SarthiConfig {
        &self.config
    }

    pub fn store(&self) -> &SarthiStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SarthiStore {
        &mut self.store
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_state(self.store.state())
    }

    /// Runs the skill gap analysis for the current profile and stores it.
    pub async fn analyze_skills(&mut self) -> SkillGapData {
        let profile = self.store.state().user.clone();
        let result = self.analyzer.analyze(&profile).await;

        self.store.set_skill_gap(result.clone().into());
        self.store.add_notification(Notification::success(ANALYSIS_READY_TEXT));
        result
    }

    /// Reviews a project and appends it to the review history.
    pub async fn review_project(&mut self, submission: ProjectSubmission) -> Result<ReviewReport> {
        let report = self.reviewer.review(submission).await?;

        self.store.add_project_review(report.review.clone());
        self.store.add_notification(Notification::success(format!(
            "Project review ready: {} scored {}/100",
            report.review.project_name, report.review.overall_score
        )));
        Ok(report)
    }

    pub async fn ask_coach(&self, question: &str) -> Result<ChatMessage> {
        Ok(self.chat.ask(&self.store.state().user, question).await?)
    }

    pub async fn dsa_hint(&self, question: &str) -> Result<ChatMessage> {
        Ok(self.chat.hint(question).await?)
    }

    /// Scores a behavioral answer. Nothing is stored.
    pub async fn evaluate_star(&self, answer: &StarAnswer) -> Result<StarFeedback> {
        Ok(self.behavioral.evaluate(answer).await?)
    }

    /// Applies the onboarding form to the profile and completes onboarding.
    ///
    /// The form is validated before the simulated submission delay; an
    /// invalid form leaves the store untouched.
    pub async fn submit_onboarding(&mut self, form: OnboardingForm) -> Result<()> {
        let patch = form.into_patch()?;
        latency(self.config.simulation.onboarding_delay()).await;

        let first_name = patch
            .name
            .as_deref()
            .and_then(|n| n.split_whitespace().next())
            .unwrap_or("there")
            .to_string();
        self.store.set_user(patch);
        self.store.set_onboarding_complete();
        self.store.add_notification(Notification::success(format!(
            "Welcome to Sarthi, {first_name}! Your dashboard is ready."
        )));
        tracing::info!("Onboarding completed");
        Ok(())
    }

    /// Restores the demo state and clears the saved record.
    pub fn reset(&mut self) {
        self.store.reset();
        tracing::info!("Dashboard reset to demo data");
    }

    /// Current state as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self.store.state()).context("Failed to serialize state")
    }

    /// Closes the store and waits for the last snapshot to be written.
    pub async fn shutdown(self) -> PersistReport {
        let Self {
            store, persister, ..
        } = self;
        drop(store);

        match persister.await {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!(error = %e, "Snapshot persister did not finish cleanly");
                PersistReport::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coach::DSA_HINT;
    use sarthi_core::SarthiError;
    use sarthi_core::config::SimulationConfig;
    use sarthi_infrastructure::InMemoryStateRepository;
    use tempfile::TempDir;

    fn instant_config() -> SarthiConfig {
        SarthiConfig {
            simulation: SimulationConfig::instant(),
            ..SarthiConfig::default()
        }
    }

    struct BrokenRepository;

    #[async_trait::async_trait]
    impl StateRepository for BrokenRepository {
        async fn save_state(&self, _state: AppState) -> sarthi_core::Result<()> {
            Err(SarthiError::io("disk full"))
        }

        async fn load_state(&self) -> sarthi_core::Result<Option<AppState>> {
            Err(SarthiError::data_access("unreadable"))
        }

        async fn clear(&self) -> sarthi_core::Result<()> {
            Err(SarthiError::io("disk full"))
        }
    }

    #[tokio::test]
    async fn test_empty_repository_starts_with_demo_state() {
        let repo = Arc::new(InMemoryStateRepository::new());
        let session = SarthiSession::open(repo.clone(), instant_config()).await;
        assert_eq!(session.state().user.name, "Vikas Sharma");

        let report = session.shutdown().await;
        assert_eq!(report.saved, 0);
        assert!(repo.load_state().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_saved_state_is_restored() {
        let mut saved = AppState::default();
        saved.active_section = "interview".to_string();
        let repo = Arc::new(InMemoryStateRepository::with_state(saved));

        let session = SarthiSession::open(repo, instant_config()).await;
        assert_eq!(session.state().active_section, "interview");
    }

    #[tokio::test]
    async fn test_broken_repository_does_not_stop_session() {
        let mut session = SarthiSession::open(Arc::new(BrokenRepository), instant_config()).await;
        session.store_mut().update_task_complete(2, 2).unwrap();
        assert_eq!(session.stats().tasks_done, 13);

        let report = session.shutdown().await;
        assert_eq!(report.failed, 1);
    }

    #[tokio::test]
    async fn test_analysis_stores_result_and_notifies() {
        let repo = Arc::new(InMemoryStateRepository::new());
        let mut session = SarthiSession::open(repo.clone(), instant_config()).await;

        let result = session.analyze_skills().await;
        assert_eq!(session.state().skill_gap, result);
        assert_eq!(session.state().notifications[0].text, ANALYSIS_READY_TEXT);
        assert_eq!(session.stats().unread_notifications, 4);

        session.shutdown().await;
        let saved = repo.load_state().await.unwrap().unwrap();
        assert_eq!(saved.skill_gap, result);
    }

    #[tokio::test]
    async fn test_review_appends_history() {
        let repo = Arc::new(InMemoryStateRepository::new());
        let mut session = SarthiSession::open(repo, instant_config())
            .await
            .with_reviewer(ProjectReviewer::with_seed(SimulationConfig::instant(), 3));

        let report = session
            .review_project(ProjectSubmission {
                project_name: "Notes API".to_string(),
                github_url: "https://github.com/vikassharma/notes-api".to_string(),
                tech_stack: vec!["Node.js".to_string()],
            })
            .await
            .unwrap();

        let reviews = &session.state().project_reviews;
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].id, "pr1");
        assert_eq!(reviews[1], report.review);
        assert!(session.state().notifications[0].text.contains("Notes API"));
    }

    #[tokio::test]
    async fn test_invalid_review_changes_nothing() {
        let repo = Arc::new(InMemoryStateRepository::new());
        let mut session = SarthiSession::open(repo, instant_config()).await;
        let result = session
            .review_project(ProjectSubmission {
                project_name: String::new(),
                github_url: "https://github.com/x/y".to_string(),
                tech_stack: vec![],
            })
            .await;
        assert!(result.is_err());
        assert_eq!(session.store().revision(), 0);
    }

    #[tokio::test]
    async fn test_onboarding_updates_profile() {
        let repo = Arc::new(InMemoryStateRepository::new());
        let mut session = SarthiSession::open(repo, instant_config()).await;

        session
            .submit_onboarding(OnboardingForm {
                full_name: "Ananya Rao".to_string(),
                target_role: "Frontend SDE".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let state = session.state();
        assert_eq!(state.user.name, "Ananya Rao");
        assert_eq!(state.user.avatar, "AR");
        assert_eq!(state.user.college, "Poornima University");
        assert!(state.onboarding_complete);
        assert!(state.notifications[0].text.starts_with("Welcome to Sarthi, Ananya!"));
    }

    #[tokio::test]
    async fn test_chat_uses_profile() {
        let repo = Arc::new(InMemoryStateRepository::new());
        let session = SarthiSession::open(repo, instant_config()).await;
        let reply = session.ask_coach("Am I on track?").await.unwrap();
        assert!(reply.content.contains("Backend SDE"));
        assert_eq!(session.dsa_hint("Two Sum").await.unwrap().content, DSA_HINT);
    }

    #[tokio::test]
    async fn test_star_feedback_leaves_state_alone() {
        let repo = Arc::new(InMemoryStateRepository::new());
        let session = SarthiSession::open(repo, instant_config()).await;
        let answer = StarAnswer {
            situation: "Tight deadline".to_string(),
            task: "Ship the payment page".to_string(),
            action: "I split the work and paired on the hard parts".to_string(),
            result: "Shipped a day early".to_string(),
        };

        let feedback = session.evaluate_star(&answer).await.unwrap();
        assert_eq!(feedback.score, 8);
        assert!(session.evaluate_star(&StarAnswer::default()).await.is_err());
        assert_eq!(session.store().revision(), 0);
    }

    #[tokio::test]
    async fn test_reset_clears_saved_record() {
        let mut saved = AppState::default();
        saved.mobile_menu_open = true;
        let repo = Arc::new(InMemoryStateRepository::with_state(saved));
        let mut session = SarthiSession::open(repo.clone(), instant_config()).await;

        session.reset();
        assert!(!session.state().mobile_menu_open);

        let report = session.shutdown().await;
        assert_eq!(report.cleared, 1);
        assert!(repo.load_state().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_export_is_pretty_json_of_state() {
        let repo = Arc::new(InMemoryStateRepository::new());
        let session = SarthiSession::open(repo, instant_config()).await;
        let json = session.export_json().unwrap();
        assert!(json.contains("\n  \"user\""));
        let parsed: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, session.state());
    }

    #[tokio::test]
    async fn test_file_session_survives_restart() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SarthiPaths::new(Some(temp_dir.path().to_path_buf()));

        let mut session = SarthiSession::open_file(&paths, instant_config()).await.unwrap();
        session.store_mut().mark_week_complete(2).unwrap();
        session.store_mut().complete_mock_session();
        session.shutdown().await;

        let reopened = SarthiSession::open_file(&paths, instant_config()).await.unwrap();
        let stats = reopened.stats();
        assert_eq!(stats.weeks_completed, 3);
        assert_eq!(stats.current_week, 4);
        assert_eq!(stats.mock_sessions_completed, 4);
    }

    #[tokio::test]
    async fn test_corrupt_file_starts_from_demo() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("sarthi-store.json"), "garbage").unwrap();
        let paths = SarthiPaths::new(Some(temp_dir.path().to_path_buf()));

        let session = SarthiSession::open_file(&paths, instant_config()).await.unwrap();
        let demo = AppState::default();
        assert_eq!(session.state().user, demo.user);
        assert_eq!(session.state().learning_path, demo.learning_path);
        assert!(temp_dir.path().join("sarthi-store.json.corrupt").exists());
    }
}
