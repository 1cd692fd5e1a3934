//! Learning path domain module.
//!
//! # Module Structure
//!
//! - `model`: weeks, daily tasks and the plan container
//! - `progress`: completion counting and the overall progress formula

mod model;
pub mod progress;

pub use model::{DailyTask, LearningPathData, LearningPathPatch, TaskType, WeekPlan};
pub use progress::{TaskCounts, overall_progress};
