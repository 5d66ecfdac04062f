use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::domain::{AnalysisResult, REPORT_FILENAME};

use super::error_response::ErrorResponse;

/// Returns a result as the `analysis_report.json` attachment.
#[tracing::instrument(skip(result))]
pub async fn report_handler(Json(result): Json<AnalysisResult>) -> Response {
    match result.to_report_json() {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/json".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{REPORT_FILENAME}\""),
                ),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize report");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to serialize report: {e}"),
                    kind: "serialization",
                }),
            )
                .into_response()
        }
    }
}
