use axum::extract::multipart::Field;

use crate::application::services::PipelineError;
use crate::domain::{AnalysisInput, ContentType, Document};

pub struct Upload {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl Upload {
    pub async fn read(field: Field<'_>) -> Result<Self, PipelineError> {
        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(String::from);
        let data = field.bytes().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read uploaded file");
            PipelineError::DocumentFormat(format!("failed to read upload: {e}"))
        })?;

        Ok(Self {
            filename,
            content_type,
            data: data.to_vec(),
        })
    }

    /// A file input left empty still arrives as a part with no name and no bytes.
    pub fn is_empty(&self) -> bool {
        self.filename.is_empty() && self.data.is_empty()
    }

    pub fn into_input(self) -> Result<AnalysisInput, PipelineError> {
        if self.is_empty() {
            return Ok(AnalysisInput::Missing);
        }

        let content_type = ContentType::detect(&self.filename, self.content_type.as_deref())
            .ok_or_else(|| {
                tracing::warn!(
                    filename = %self.filename,
                    content_type = ?self.content_type,
                    "Unsupported upload type"
                );
                PipelineError::DocumentFormat(format!(
                    "only .docx files are supported, got {}",
                    if self.filename.is_empty() {
                        "an unnamed file"
                    } else {
                        self.filename.as_str()
                    }
                ))
            })?;

        let document = Document::new(self.filename, content_type, self.data.len() as u64);
        Ok(AnalysisInput::UploadedDocument {
            document,
            data: self.data,
        })
    }
}
