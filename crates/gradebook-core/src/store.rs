use async_trait::async_trait;

use crate::{GroupAverage, Result};

/// Read-only access to a relational grade store.
///
/// Implementations must compute the grouping and the mean inside the store
/// and return one row per group. A call either returns every group or fails;
/// it never returns a partial set.
#[async_trait]
pub trait GradeStore: Send + Sync {
    /// Mean grade per student name, over students with at least one grade.
    async fn student_averages(&self) -> Result<Vec<GroupAverage>>;

    /// Mean grade per course name, over courses with at least one grade.
    async fn course_averages(&self) -> Result<Vec<GroupAverage>>;
}
