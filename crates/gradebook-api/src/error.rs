use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failures surfaced by the HTTP handlers, one per endpoint.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Error retrieving student grades")]
    StudentAverages(#[source] gradebook_core::Error),

    #[error("Error retrieving course averages")]
    CourseAverages(#[source] gradebook_core::Error),

    #[error("Error exporting student averages")]
    Export(#[source] gradebook_core::Error),
}

impl ApiError {
    fn cause(&self) -> &gradebook_core::Error {
        match self {
            ApiError::StudentAverages(err) | ApiError::CourseAverages(err) | ApiError::Export(err) => err,
        }
    }
}

/// The cause is logged; clients only ever get a generic 500.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.cause(), "{}", self);

        let body = Json(ErrorResponse {
            error: "Internal Server Error".to_string(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
