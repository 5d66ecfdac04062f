use super::document_id::DocumentId;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub content_type: ContentType,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Docx,
}

impl ContentType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            DOCX_MIME => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, extension) = filename.rsplit_once('.')?;
        if extension.eq_ignore_ascii_case("docx") {
            Some(Self::Docx)
        } else {
            None
        }
    }

    /// Browsers frequently send `application/octet-stream` for Office files,
    /// so the extension wins over the declared MIME type.
    pub fn detect(filename: &str, mime: Option<&str>) -> Option<Self> {
        Self::from_filename(filename).or_else(|| mime.and_then(Self::from_mime))
    }
}

impl Document {
    pub fn new(filename: String, content_type: ContentType, size_bytes: u64) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            content_type,
            size_bytes,
        }
    }
}
