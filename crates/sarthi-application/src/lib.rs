pub mod coach;
pub mod onboarding;
pub mod session;
mod simulate;

pub use coach::{
    BehavioralCoach, CoachChat, ProjectReviewer, ProjectSubmission, ReviewReport,
    SkillGapAnalyzer, StarAnswer, StarFeedback,
};
pub use onboarding::{OnboardingForm, split_list};
pub use session::SarthiSession;
