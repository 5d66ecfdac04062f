mod analyze;
mod error_response;
mod health;
mod page;
mod report;
mod upload;

pub use analyze::{AnalyzeRequest, analyze_handler, analyze_upload_handler};
pub use error_response::{ErrorResponse, pipeline_error_response, status_for};
pub use health::{HealthResponse, health_handler};
pub use page::{index_handler, submit_handler};
pub use report::report_handler;
