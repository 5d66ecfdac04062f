mod analysis_service;
mod prompt;
mod reader_service;

pub use analysis_service::{
    AnalysisError, AnalysisOptions, AnalysisService, DEFAULT_MAX_INPUT_CHARS,
    DEFAULT_TEMPERATURE, parse_analysis,
};
pub use prompt::{SYSTEM_PROMPT, build_user_message, truncate_chars};
pub use reader_service::{PipelineError, ReaderService};
