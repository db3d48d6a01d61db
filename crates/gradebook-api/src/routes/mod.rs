use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{handlers, state::ApiState};

pub fn create_router(state: ApiState, request_timeout: Duration) -> Router {
    Router::new()
        // Liveness only; never touches the grade store
        .route("/health", get(health_check))

        // Aggregates
        .route("/students", get(handlers::students::list_student_averages))
        .route("/students/courses", get(handlers::students::list_course_averages))

        // Spreadsheet export
        .route("/students/export", get(handlers::export::export_student_averages))

        // Add state
        .with_state(state)

        // A timed-out request drops its handler future, which hands any
        // pooled connection back.
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())

        // Add CORS
        .layer(CorsLayer::permissive())
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "gradebook-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
