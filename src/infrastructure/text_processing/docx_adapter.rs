use std::time::Duration;

use async_trait::async_trait;
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, Run, RunChild};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads the body paragraphs of a `.docx` file.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Joins the text of every body paragraph with `\n`, empty paragraphs
    /// included. Tables are not part of the paragraph sequence.
    pub fn extract_paragraphs(data: &[u8]) -> Result<String, FileLoaderError> {
        let docx = docx_rs::read_docx(data)
            .map_err(|e| FileLoaderError::InvalidDocument(e.to_string()))?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .collect();

        Ok(paragraphs.join("\n"))
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_paragraph_children(&paragraph.children, &mut text);
    text
}

fn push_paragraph_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, out),
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, out),
            _ => {}
        }
    }
}

fn push_run(run: &Run, out: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(
        skip(self, data, document),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            size_bytes = document.size_bytes,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let data_owned = data.to_vec();

        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_paragraphs(&data_owned)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("docx extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(chars = text.chars().count(), "docx text extraction complete");

        Ok(text)
    }
}
