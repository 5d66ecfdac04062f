use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::AnalysisOptions;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub analysis: AnalysisSettings,
    pub upload: UploadSettings,
    pub logging: LoggingSettings,
    pub scaffold: ScaffoldSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Deserialize)]
pub struct LlmSettings {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub request_timeout_secs: u64,
}

impl LlmSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl std::fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    pub max_input_chars: usize,
    pub max_concurrent_analyses: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
}

impl UploadSettings {
    pub fn max_body_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

/// Scaffold mode swaps the completion endpoint for a canned local answer.
#[derive(Debug, Clone, Deserialize)]
pub struct ScaffoldSettings {
    pub enabled: bool,
    pub mock_delay_ms: u64,
}

impl ScaffoldSettings {
    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay_ms)
    }
}

/// Where the file and environment layers come from.
#[derive(Debug, Clone)]
pub struct SettingsSources {
    pub config_dir: PathBuf,
    /// Replaces the process environment when set.
    pub env_vars: Option<Vec<(String, String)>>,
}

impl Default for SettingsSources {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from("."),
            env_vars: None,
        }
    }
}

impl SettingsSources {
    pub(super) fn environment_source(&self) -> config::Environment {
        config::Environment::with_prefix("APP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(
                self.env_vars
                    .as_ref()
                    .map(|vars| vars.iter().cloned().collect()),
            )
    }
}

impl Settings {
    /// Layers built-in defaults, then `appsettings.<env>.toml` if present,
    /// then `APP_`-prefixed environment variables (`APP_LLM__API_KEY`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_from(environment, &SettingsSources::default())
    }

    pub fn load_from(
        environment: Environment,
        sources: &SettingsSources,
    ) -> Result<Self, ConfigError> {
        let file = sources
            .config_dir
            .join(format!("appsettings.{}", environment.as_str()));

        Self::builder()?
            .add_source(File::with_name(&file.to_string_lossy()).required(false))
            .add_source(sources.environment_source())
            .set_override("environment", environment.as_str())?
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults only; no file or environment lookups.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("environment", Environment::default().as_str())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("llm.base_url", "https://api.deepseek.com")?
            .set_default("llm.api_key", "")?
            .set_default("llm.model", "deepseek-chat")?
            .set_default("llm.temperature", 0.2)?
            .set_default("llm.request_timeout_secs", 120)?
            .set_default("analysis.max_input_chars", 10_000)?
            .set_default("analysis.max_concurrent_analyses", 1)?
            .set_default("upload.max_file_size_mb", 20)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .set_default("scaffold.enabled", false)?
            .set_default("scaffold.mock_delay_ms", 0)
    }

    /// Startup checks that deserialization alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scaffold.enabled && self.llm.api_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "llm.api_key is not set (APP_LLM__API_KEY); enable scaffold mode to run without one"
                    .to_string(),
            ));
        }
        if self.analysis.max_input_chars == 0 {
            return Err(ConfigError::Message(
                "analysis.max_input_chars must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            max_input_chars: self.analysis.max_input_chars,
            temperature: self.llm.temperature,
        }
    }
}
