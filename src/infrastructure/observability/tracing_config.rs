use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_filter: String,
}

impl TracingConfig {
    /// The configured level applies to this crate and the HTTP layer as well;
    /// article excerpts are logged at debug and must stay out of quieter setups.
    pub fn from_settings(settings: &LoggingSettings, environment: Environment) -> Self {
        let level = settings.level.trim().to_lowercase();
        Self {
            environment: environment.to_string(),
            json_format: settings.enable_json,
            default_filter: format!("{level},deepreader={level},tower_http={level}"),
        }
    }
}
