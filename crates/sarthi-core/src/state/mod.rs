//! Application state: the full snapshot held by the store and persisted as a
//! single record.

mod demo;
pub mod model;
pub mod repository;

pub use demo::{DEMO_ACTIVE_SECTION, demo_skill_gap, demo_state, demo_weeks};
pub use model::AppState;
pub use repository::StateRepository;
