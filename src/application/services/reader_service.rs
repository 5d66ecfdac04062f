use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient};
use crate::domain::{AnalysisInput, AnalysisResult};
use crate::infrastructure::observability::sanitize_prompt;

use super::analysis_service::{AnalysisError, AnalysisService};

/// Runs one analysis trigger end to end: input check, text extraction,
/// completion and parsing.
pub struct ReaderService<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    file_loader: Arc<F>,
    analysis_service: AnalysisService<L>,
    in_flight: Semaphore,
}

impl<F, L> ReaderService<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    pub fn new(
        file_loader: Arc<F>,
        analysis_service: AnalysisService<L>,
        max_concurrent_analyses: usize,
    ) -> Self {
        Self {
            file_loader,
            analysis_service,
            in_flight: Semaphore::new(max_concurrent_analyses.max(1)),
        }
    }

    #[tracing::instrument(skip(self, input))]
    pub async fn run(&self, input: AnalysisInput) -> Result<AnalysisResult, PipelineError> {
        if matches!(input, AnalysisInput::Missing) {
            tracing::warn!("Analysis triggered without input");
            return Err(PipelineError::InputMissing);
        }

        // Held for extraction too, so a rejected trigger never parses its upload.
        let _permit = self.in_flight.try_acquire().map_err(|_| {
            tracing::warn!("Analysis rejected, another one is in flight");
            PipelineError::Busy
        })?;

        let text = match input {
            AnalysisInput::Missing => return Err(PipelineError::InputMissing),
            AnalysisInput::PastedText(text) => text,
            AnalysisInput::UploadedDocument { document, data } => {
                tracing::debug!(
                    filename = %document.filename,
                    size_bytes = document.size_bytes,
                    "Extracting uploaded document"
                );
                let text = self
                    .file_loader
                    .extract_text(&data, &document)
                    .await
                    .map_err(PipelineError::from)?;
                tracing::info!(
                    filename = %document.filename,
                    chars = text.chars().count(),
                    "Document text extracted"
                );
                text
            }
        };

        if text.trim().is_empty() {
            tracing::warn!("Analysis triggered without input text");
            return Err(PipelineError::InputMissing);
        }

        tracing::debug!(article = %sanitize_prompt(&text), "Starting analysis");

        self.analysis_service.analyze(&text).await.map_err(|e| {
            tracing::error!(error = %e, "Analysis failed");
            PipelineError::from(e)
        })
    }
}

/// Every way a single trigger can end without a report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("no article text was provided")]
    InputMissing,
    #[error("form could not be read: {0}")]
    InvalidForm(String),
    #[error("document could not be read: {0}")]
    DocumentFormat(String),
    #[error("analysis failed: {0}")]
    Analysis(String),
    #[error("another analysis is already in progress")]
    Busy,
}

impl PipelineError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InputMissing => "input_missing",
            Self::InvalidForm(_) => "invalid_form",
            Self::DocumentFormat(_) => "document_format",
            Self::Analysis(_) => "analysis",
            Self::Busy => "busy",
        }
    }
}

impl From<FileLoaderError> for PipelineError {
    fn from(error: FileLoaderError) -> Self {
        Self::DocumentFormat(error.to_string())
    }
}

impl From<AnalysisError> for PipelineError {
    fn from(error: AnalysisError) -> Self {
        Self::Analysis(error.to_string())
    }
}
