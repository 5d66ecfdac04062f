mod init_tracing;
mod prompt_sanitizer;
mod request_id;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use prompt_sanitizer::sanitize_prompt;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use tracing_config::TracingConfig;
