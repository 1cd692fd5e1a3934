pub mod config_service;
pub mod dto;
pub mod memory_state_repository;
pub mod paths;
pub mod persistence;
pub mod state_repository;

pub use crate::config_service::ConfigService;
pub use crate::memory_state_repository::InMemoryStateRepository;
pub use crate::paths::{SarthiPaths, ServiceType};
pub use crate::persistence::{PersistReport, SnapshotPersister};
pub use crate::state_repository::FileStateRepository;
