use super::document::Document;

/// What the user supplied for a single analysis trigger.
#[derive(Debug, Clone)]
pub enum AnalysisInput {
    PastedText(String),
    UploadedDocument { document: Document, data: Vec<u8> },
    Missing,
}

impl AnalysisInput {
    /// Blank pasted text counts as no input at all.
    pub fn pasted(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            Self::Missing
        } else {
            Self::PastedText(text)
        }
    }
}
