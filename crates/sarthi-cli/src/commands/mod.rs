pub mod coach;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod notifications;
pub mod profile;
pub mod progress;
mod render;
