use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{error::ApiError, state::ApiState};

/// Download the student averages as an `.xlsx` workbook
pub async fn export_student_averages(State(state): State<ApiState>) -> Result<Response, ApiError> {
    let records = state
        .engine
        .get_student_averages()
        .await
        .map_err(ApiError::Export)?;

    let report = state.reports.build(&records).map_err(ApiError::Export)?;

    tracing::info!(
        filename = %report.filename,
        rows = records.len(),
        "Exported grades report"
    );

    let headers = [
        (header::CONTENT_TYPE, report.content_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", report.filename),
        ),
    ];

    Ok((headers, report.into_bytes()).into_response())
}
