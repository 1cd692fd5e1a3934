pub mod config;
pub mod error;
pub mod interview;
pub mod learning_path;
pub mod notification;
pub mod profile;
pub mod project_review;
pub mod skill_gap;
pub mod state;
pub mod stats;
pub mod store;

// Re-export common types
pub use error::{Result, SarthiError};
pub use state::AppState;
pub use stats::DashboardStats;
pub use store::{SarthiStore, StoreAction, StoreSnapshot};
