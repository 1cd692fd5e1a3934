//! Simulated skill gap analyzer.
//!
//! Returns the canned backend analysis after the configured delay, minus any
//! missing skill the user already lists.

use chrono::Utc;
use sarthi_core::config::SimulationConfig;
use sarthi_core::profile::UserProfile;
use sarthi_core::skill_gap::SkillGapData;
use sarthi_core::state::demo_skill_gap;

use crate::simulate::latency;

#[derive(Debug, Clone)]
pub struct SkillGapAnalyzer {
    simulation: SimulationConfig,
}

impl SkillGapAnalyzer {
    pub fn new(simulation: SimulationConfig) -> Self {
        Self { simulation }
    }

    pub async fn analyze(&self, profile: &UserProfile) -> SkillGapData {
        latency(self.simulation.analysis_delay()).await;

        let mut result = demo_skill_gap();
        let known = |skill: &str| {
            profile
                .current_skills
                .iter()
                .any(|s| s.trim().eq_ignore_ascii_case(skill))
        };
        let before = result.missing_skills.len();
        result.missing_skills.retain(|m| !known(&m.skill));
        result.estimated_weeks = result.estimated_weeks.min(result.total_missing_weeks());
        result.analyzed_at = Utc::now();

        tracing::info!(
            target_role = %profile.target_role,
            readiness = result.readiness_score,
            missing = result.missing_skills.len(),
            already_known = before - result.missing_skills.len(),
            "Skill gap analysis finished"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarthi_core::AppState;

    #[tokio::test]
    async fn test_demo_profile_gets_full_analysis() {
        let analyzer = SkillGapAnalyzer::new(SimulationConfig::instant());
        let result = analyzer.analyze(&AppState::default().user).await;
        assert!(result.analyzed);
        assert_eq!(result.readiness_score, 62);
        assert_eq!(result.missing_skills.len(), 6);
        assert_eq!(result.estimated_weeks, 8);
    }

    #[tokio::test]
    async fn test_known_skills_are_dropped() {
        let mut profile = AppState::default().user;
        profile.current_skills.push("postgresql".to_string());
        profile.current_skills.push(" Unit Testing ".to_string());

        let result = SkillGapAnalyzer::new(SimulationConfig::instant())
            .analyze(&profile)
            .await;
        let skills: Vec<_> = result.missing_skills.iter().map(|m| m.skill.as_str()).collect();
        assert_eq!(
            skills,
            vec!["System Design", "Docker & Kubernetes", "Redis & Caching", "CI/CD Pipelines"]
        );
    }

    #[tokio::test]
    async fn test_nothing_missing_means_zero_weeks() {
        let mut profile = AppState::default().user;
        profile.current_skills = demo_skill_gap()
            .missing_skills
            .into_iter()
            .map(|m| m.skill)
            .collect();

        let result = SkillGapAnalyzer::new(SimulationConfig::instant())
            .analyze(&profile)
            .await;
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.estimated_weeks, 0);
    }
}
