use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::PipelineError;
use crate::domain::AnalysisInput;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error_response::pipeline_error_response;
use super::upload::Upload;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn analyze_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Json(request): Json<AnalyzeRequest>,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    tracing::debug!(text = %sanitize_prompt(&request.text), "Processing analyze request");

    let input = AnalysisInput::pasted(request.text);
    match state.reader_service.run(input).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => pipeline_error_response(&e),
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_upload_handler<F, L>(
    State(state): State<AppState<F, L>>,
    mut multipart: Multipart,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let input = match read_file_field(&mut multipart).await {
        Ok(input) => input,
        Err(e) => return pipeline_error_response(&e),
    };

    match state.reader_service.run(input).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => pipeline_error_response(&e),
    }
}

/// Finds the `file` part; any other parts are skipped.
async fn read_file_field(multipart: &mut Multipart) -> Result<AnalysisInput, PipelineError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                tracing::warn!("Upload request with no file");
                return Ok(AnalysisInput::Missing);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return Err(PipelineError::InvalidForm(format!(
                    "failed to read multipart: {e}"
                )));
            }
        };

        if field.name() == Some("file") {
            let upload = Upload::read(field).await?;
            tracing::debug!(
                filename = %upload.filename,
                bytes = upload.data.len(),
                "File data received"
            );
            return upload.into_input();
        }
    }
}
