use axum::{extract::State, Json};
use gradebook_core::{CourseAverage, StudentAverage};

use crate::{error::ApiError, state::ApiState};

/// Average grade for every student that has at least one grade
pub async fn list_student_averages(
    State(state): State<ApiState>,
) -> Result<Json<Vec<StudentAverage>>, ApiError> {
    let averages = state
        .engine
        .get_student_averages()
        .await
        .map_err(ApiError::StudentAverages)?;

    Ok(Json(averages))
}

/// Average grade for every course that has at least one grade
pub async fn list_course_averages(
    State(state): State<ApiState>,
) -> Result<Json<Vec<CourseAverage>>, ApiError> {
    let averages = state
        .engine
        .get_course_averages()
        .await
        .map_err(ApiError::CourseAverages)?;

    Ok(Json(averages))
}
