//! User profile domain module.
//!
//! # Usage
//!
//! ```ignore
//! use sarthi_core::profile::{UserProfile, UserProfilePatch};
//! ```

mod model;

pub use model::{UserProfile, UserProfilePatch, avatar_initials};
