//! Project review domain module.

mod model;

pub use model::{ProjectReview, ReviewStatus};
