//! Skill gap domain models.
//!
//! The readiness score and the missing-skill list are produced elsewhere (the
//! simulated analyzer) and only stored here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Upper bound of the readiness score.
pub const MAX_READINESS: u8 = 100;

/// How urgently a missing skill should be learned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingSkill {
    pub skill: String,
    pub priority: Priority,
    pub reason: String,
    pub estimated_weeks: u32,
}

/// Result of the most recent skill gap analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapData {
    pub analyzed: bool,
    /// Interview readiness, always within `0..=100`
    pub readiness_score: u8,
    pub current_level: String,
    pub estimated_weeks: u32,
    pub strong_skills: Vec<String>,
    pub missing_skills: Vec<MissingSkill>,
    pub summary: String,
    pub analyzed_at: DateTime<Utc>,
}

impl SkillGapData {
    /// Missing skills of the given priority, in stored order.
    pub fn missing_by_priority(&self, priority: Priority) -> impl Iterator<Item = &MissingSkill> {
        self.missing_skills
            .iter()
            .filter(move |missing| missing.priority == priority)
    }

    /// Sum of the estimated weeks over all missing skills.
    pub fn total_missing_weeks(&self) -> u32 {
        self.missing_skills.iter().map(|m| m.estimated_weeks).sum()
    }
}

/// Partial update for [`SkillGapData`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillGapPatch {
    pub analyzed: Option<bool>,
    pub readiness_score: Option<u8>,
    pub current_level: Option<String>,
    pub estimated_weeks: Option<u32>,
    pub strong_skills: Option<Vec<String>>,
    pub missing_skills: Option<Vec<MissingSkill>>,
    pub summary: Option<String>,
    pub analyzed_at: Option<DateTime<Utc>>,
}

impl SkillGapPatch {
    /// Merges the patch into `data`, clamping the readiness score.
    pub fn apply_to(self, data: &mut SkillGapData) {
        if let Some(analyzed) = self.analyzed {
            data.analyzed = analyzed;
        }
        if let Some(score) = self.readiness_score {
            data.readiness_score = score.min(MAX_READINESS);
        }
        if let Some(level) = self.current_level {
            data.current_level = level;
        }
        if let Some(weeks) = self.estimated_weeks {
            data.estimated_weeks = weeks;
        }
        if let Some(strong) = self.strong_skills {
            data.strong_skills = strong;
        }
        if let Some(missing) = self.missing_skills {
            data.missing_skills = missing;
        }
        if let Some(summary) = self.summary {
            data.summary = summary;
        }
        if let Some(at) = self.analyzed_at {
            data.analyzed_at = at;
        }
    }
}

impl From<SkillGapData> for SkillGapPatch {
    /// A patch that replaces every field.
    fn from(data: SkillGapData) -> Self {
        Self {
            analyzed: Some(data.analyzed),
            readiness_score: Some(data.readiness_score),
            current_level: Some(data.current_level),
            estimated_weeks: Some(data.estimated_weeks),
            strong_skills: Some(data.strong_skills),
            missing_skills: Some(data.missing_skills),
            summary: Some(data.summary),
            analyzed_at: Some(data.analyzed_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gap() -> SkillGapData {
        SkillGapData {
            analyzed: false,
            readiness_score: 10,
            current_level: "Beginner".to_string(),
            estimated_weeks: 12,
            strong_skills: vec![],
            missing_skills: vec![
                MissingSkill {
                    skill: "Docker".to_string(),
                    priority: Priority::High,
                    reason: "Deployment".to_string(),
                    estimated_weeks: 3,
                },
                MissingSkill {
                    skill: "Testing".to_string(),
                    priority: Priority::Low,
                    reason: "Quality".to_string(),
                    estimated_weeks: 1,
                },
            ],
            summary: String::new(),
            analyzed_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_patch_clamps_readiness() {
        let mut data = gap();
        SkillGapPatch {
            readiness_score: Some(250),
            analyzed: Some(true),
            ..Default::default()
        }
        .apply_to(&mut data);
        assert_eq!(data.readiness_score, MAX_READINESS);
        assert!(data.analyzed);
        assert_eq!(data.current_level, "Beginner");
    }

    #[test]
    fn test_missing_by_priority_and_total_weeks() {
        let data = gap();
        let high: Vec<_> = data.missing_by_priority(Priority::High).collect();
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].skill, "Docker");
        assert_eq!(data.total_missing_weeks(), 4);
    }

    #[test]
    fn test_priority_wire_format() {
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"medium\"");
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(Priority::Low.to_string(), "low");
    }
}
