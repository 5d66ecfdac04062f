use async_trait::async_trait;

use crate::domain::Document;

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("not a valid Word document: {0}")]
    InvalidDocument(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
