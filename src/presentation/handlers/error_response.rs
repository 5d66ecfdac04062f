use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::PipelineError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
}

pub fn status_for(error: &PipelineError) -> StatusCode {
    match error {
        PipelineError::InputMissing | PipelineError::InvalidForm(_) => StatusCode::BAD_REQUEST,
        PipelineError::DocumentFormat(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PipelineError::Analysis(_) => StatusCode::BAD_GATEWAY,
        PipelineError::Busy => StatusCode::CONFLICT,
    }
}

pub fn pipeline_error_response(error: &PipelineError) -> Response {
    (
        status_for(error),
        Json(ErrorResponse {
            error: error.to_string(),
            kind: error.kind(),
        }),
    )
        .into_response()
}
