mod analysis_field;
mod analysis_input;
mod analysis_result;
mod completion_request;
mod document;
mod document_id;

pub use analysis_field::{AnalysisField, SectionStyle};
pub use analysis_input::AnalysisInput;
pub use analysis_result::{AnalysisResult, NOT_MENTIONED, REPORT_FILENAME};
pub use completion_request::CompletionRequest;
pub use document::{ContentType, DOCX_MIME, Document};
pub use document_id::DocumentId;
