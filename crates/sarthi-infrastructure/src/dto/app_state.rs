//! AppState DTOs and migrations
//!
//! V1.0.0 is the shape the browser dashboard kept in `localStorage`: numbers
//! are untyped floats and timestamps are ISO strings. V1.1.0 is the typed
//! snapshot this crate writes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, MigratesTo, Versioned};

use sarthi_core::interview::InterviewPrepData;
use sarthi_core::learning_path::{LearningPathData, WeekPlan, overall_progress};
use sarthi_core::notification::{Notification, NotificationKind};
use sarthi_core::profile::UserProfile;
use sarthi_core::project_review::{ProjectReview, ReviewStatus};
use sarthi_core::skill_gap::{MAX_READINESS, MissingSkill, SkillGapData};
use sarthi_core::state::AppState;

/// Entity name the snapshot is registered under.
pub const APP_STATE_ENTITY: &str = "sarthi_store";

// ============================================================================
// V1.0.0 (browser shape)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapV1_0 {
    pub analyzed: bool,
    pub readiness_score: f64,
    pub current_level: String,
    pub estimated_weeks: f64,
    pub strong_skills: Vec<String>,
    pub missing_skills: Vec<MissingSkill>,
    pub summary: String,
    #[serde(default)]
    pub analyzed_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathV1_0 {
    pub generated: bool,
    pub total_weeks: f64,
    pub current_week: f64,
    pub weekly_plan: Vec<WeekPlan>,
    pub overall_progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReviewV1_0 {
    pub id: String,
    pub project_name: String,
    pub github_url: String,
    pub tech_stack: Vec<String>,
    pub overall_score: f64,
    #[serde(default)]
    pub submitted_at: String,
    pub status: ReviewStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationV1_0 {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    #[serde(default)]
    pub created_at: String,
}

/// Store snapshot V1.0.0 (browser `localStorage` record).
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct AppStateV1_0 {
    pub user: UserProfile,
    pub skill_gap: SkillGapV1_0,
    pub learning_path: LearningPathV1_0,
    #[serde(default)]
    pub project_reviews: Vec<ProjectReviewV1_0>,
    pub interview_prep: InterviewPrepData,
    #[serde(default)]
    pub onboarding_complete: bool,
    #[serde(default)]
    pub active_section: String,
    #[serde(default)]
    pub notifications: Vec<NotificationV1_0>,
    #[serde(default)]
    pub mobile_menu_open: bool,
}

// ============================================================================
// V1.1.0 (typed)
// ============================================================================

/// Store snapshot V1.1.0.
///
/// Scores are `u8` within `0..=100` and timestamps are RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.1.0")]
#[serde(rename_all = "camelCase")]
pub struct AppStateV1_1 {
    pub user: UserProfile,
    pub skill_gap: SkillGapData,
    pub learning_path: LearningPathData,
    #[serde(default)]
    pub project_reviews: Vec<ProjectReview>,
    pub interview_prep: InterviewPrepData,
    #[serde(default)]
    pub onboarding_complete: bool,
    #[serde(default)]
    pub active_section: String,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub mobile_menu_open: bool,
}

/// Type alias for the latest AppState version.
pub type AppStateDTO = AppStateV1_1;

impl Default for AppStateV1_0 {
    fn default() -> Self {
        let state = AppState::default();
        Self {
            user: state.user,
            skill_gap: SkillGapV1_0 {
                analyzed: state.skill_gap.analyzed,
                readiness_score: f64::from(state.skill_gap.readiness_score),
                current_level: state.skill_gap.current_level,
                estimated_weeks: f64::from(state.skill_gap.estimated_weeks),
                strong_skills: state.skill_gap.strong_skills,
                missing_skills: state.skill_gap.missing_skills,
                summary: state.skill_gap.summary,
                analyzed_at: state.skill_gap.analyzed_at.to_rfc3339(),
            },
            learning_path: LearningPathV1_0 {
                generated: state.learning_path.generated,
                total_weeks: f64::from(state.learning_path.total_weeks),
                current_week: f64::from(state.learning_path.current_week),
                weekly_plan: state.learning_path.weekly_plan,
                overall_progress: f64::from(state.learning_path.overall_progress),
            },
            project_reviews: Vec::new(),
            interview_prep: state.interview_prep,
            onboarding_complete: state.onboarding_complete,
            active_section: state.active_section,
            notifications: Vec::new(),
            mobile_menu_open: false,
        }
    }
}

impl Default for AppStateV1_1 {
    fn default() -> Self {
        Self::from_domain(AppState::default())
    }
}

// ============================================================================
// Migration implementations
// ============================================================================

/// Rounds a JS number into `0..=max`. NaN becomes 0.
fn clamp_number(value: f64, max: u32) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, f64::from(max)) as u32
}

fn score(value: f64) -> u8 {
    clamp_number(value, u32::from(MAX_READINESS)) as u8
}

/// Unparseable or empty timestamps fall back to now.
fn timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

impl From<SkillGapV1_0> for SkillGapData {
    fn from(dto: SkillGapV1_0) -> Self {
        SkillGapData {
            analyzed: dto.analyzed,
            readiness_score: score(dto.readiness_score),
            current_level: dto.current_level,
            estimated_weeks: clamp_number(dto.estimated_weeks, u32::MAX),
            strong_skills: dto.strong_skills,
            missing_skills: dto.missing_skills,
            summary: dto.summary,
            analyzed_at: timestamp(&dto.analyzed_at),
        }
    }
}

/// Converts a browser plan, re-deriving progress and pulling `currentWeek`
/// back into `1..=totalWeeks`.
///
/// `totalWeeks` is taken from the plan length; the browser never let the two
/// diverge except through a partial `setLearningPath`.
impl From<LearningPathV1_0> for LearningPathData {
    fn from(dto: LearningPathV1_0) -> Self {
        let total_weeks = dto.weekly_plan.len() as u32;
        let current_week = clamp_number(dto.current_week, total_weeks.max(1)).max(1);
        LearningPathData {
            generated: dto.generated,
            total_weeks,
            current_week,
            overall_progress: overall_progress(&dto.weekly_plan),
            weekly_plan: dto.weekly_plan,
        }
    }
}

impl From<ProjectReviewV1_0> for ProjectReview {
    fn from(dto: ProjectReviewV1_0) -> Self {
        ProjectReview {
            id: dto.id,
            project_name: dto.project_name,
            github_url: dto.github_url,
            tech_stack: dto.tech_stack,
            overall_score: score(dto.overall_score),
            submitted_at: timestamp(&dto.submitted_at),
            status: dto.status,
        }
    }
}

impl From<NotificationV1_0> for Notification {
    fn from(dto: NotificationV1_0) -> Self {
        Notification {
            id: dto.id,
            text: dto.text,
            kind: dto.kind,
            read: dto.read,
            created_at: timestamp(&dto.created_at),
        }
    }
}

/// Migration from AppStateV1_0 to AppStateV1_1.
/// Types the numeric fields and re-derives learning path progress.
impl MigratesTo<AppStateV1_1> for AppStateV1_0 {
    fn migrate(self) -> AppStateV1_1 {
        AppStateV1_1 {
            user: self.user,
            skill_gap: self.skill_gap.into(),
            learning_path: self.learning_path.into(),
            project_reviews: self.project_reviews.into_iter().map(Into::into).collect(),
            interview_prep: self.interview_prep,
            onboarding_complete: self.onboarding_complete,
            active_section: self.active_section,
            notifications: self.notifications.into_iter().map(Into::into).collect(),
            mobile_menu_open: self.mobile_menu_open,
        }
    }
}

// ============================================================================
// Domain model conversions
// ============================================================================

/// Convert AppStateV1_1 DTO to domain model.
impl IntoDomain<AppState> for AppStateV1_1 {
    fn into_domain(self) -> AppState {
        AppState {
            user: self.user,
            skill_gap: self.skill_gap,
            learning_path: self.learning_path,
            project_reviews: self.project_reviews,
            interview_prep: self.interview_prep,
            onboarding_complete: self.onboarding_complete,
            active_section: self.active_section,
            notifications: self.notifications,
            mobile_menu_open: self.mobile_menu_open,
        }
    }
}

/// Convert domain model to AppStateV1_1 DTO for persistence.
impl FromDomain<AppState> for AppStateV1_1 {
    fn from_domain(state: AppState) -> Self {
        AppStateV1_1 {
            user: state.user,
            skill_gap: state.skill_gap,
            learning_path: state.learning_path,
            project_reviews: state.project_reviews,
            interview_prep: state.interview_prep,
            onboarding_complete: state.onboarding_complete,
            active_section: state.active_section,
            notifications: state.notifications,
            mobile_menu_open: state.mobile_menu_open,
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates and configures a Migrator instance for the store snapshot.
///
/// # Migration Path
///
/// - V1.0 → V1.1: Types scores, parses timestamps, re-derives progress
/// - V1.1 → AppState: Converts DTO to domain model
pub fn create_app_state_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();

    let app_state_path = version_migrate::Migrator::define(APP_STATE_ENTITY)
        .from::<AppStateV1_0>()
        .step::<AppStateV1_1>()
        .into_with_save::<AppState>();

    migrator
        .register(app_state_path)
        .expect("Failed to register sarthi_store migration path");

    migrator
}

/// The record format the browser's persist middleware wrote:
/// `{"state": {...}, "version": 0}`.
#[derive(Debug, Deserialize)]
struct LegacyEnvelope {
    state: AppStateV1_0,
}

/// Imports a browser-exported snapshot, with or without the persist envelope.
pub fn import_legacy_snapshot(json: &str) -> sarthi_core::Result<AppState> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let legacy = if value.get("state").is_some() {
        serde_json::from_value::<LegacyEnvelope>(value)?.state
    } else {
        serde_json::from_value::<AppStateV1_0>(value)?
    };
    Ok(legacy.migrate().into_domain())
}
