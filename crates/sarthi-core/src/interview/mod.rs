//! Interview preparation domain module.

mod model;

pub use model::InterviewPrepData;
