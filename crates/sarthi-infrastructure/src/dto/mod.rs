//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs represent the versioned schema of the persisted store snapshot.
//! They are private to the infrastructure layer and handle the evolution of
//! the storage format over time.
//!
//! ### Snapshot Version History
//! - **1.0.0**: Browser `localStorage` shape (float scores, string timestamps)
//! - **1.1.0**: Typed scores and timestamps, derived progress

mod app_state;

pub use app_state::{
    APP_STATE_ENTITY, AppStateDTO, AppStateV1_0, AppStateV1_1, create_app_state_migrator,
    import_legacy_snapshot,
};
