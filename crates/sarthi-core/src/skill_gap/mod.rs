//! Skill gap analysis domain module.

mod model;

pub use model::{MAX_READINESS, MissingSkill, Priority, SkillGapData, SkillGapPatch};
