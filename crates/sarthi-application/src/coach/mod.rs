//! Simulated coaching services.
//!
//! None of these call a model; they return canned results after the delays
//! configured in `[simulation]`.

mod analyzer;
mod behavioral;
mod chat;
mod reviewer;

pub use analyzer::SkillGapAnalyzer;
pub use behavioral::{BEHAVIORAL_QUESTIONS, BehavioralCoach, StarAnswer, StarFeedback};
pub use chat::{ChatMessage, ChatRole, CoachChat, DSA_HINT};
pub use reviewer::{
    CategoryScore, ProjectReviewer, ProjectSubmission, ReviewIssue, ReviewReport, SCORE_JITTER,
    weighted_score,
};
