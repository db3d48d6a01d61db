pub mod engine;
pub mod error;
pub mod models;
pub mod store;

// Re-exports
pub use engine::AggregationEngine;
pub use error::{Error, Result};
pub use models::{CourseAverage, GroupAverage, StudentAverage};
pub use store::GradeStore;
