use std::fmt;

use config::{Config, ConfigError};
use serde::Deserialize;

use super::settings::SettingsSources;

/// Deployment profile. Picks the `appsettings.<env>.toml` layer and is read
/// from `APP_ENVIRONMENT` through the same env source as the rest of the
/// settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Environment {
    #[default]
    Local,
    Test,
    Prod,
}

impl Environment {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_sources(&SettingsSources::default())
    }

    pub fn from_sources(sources: &SettingsSources) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("environment", Self::default().as_str())?
            .add_source(sources.environment_source())
            .build()?
            .get("environment")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Test => "test",
            Self::Prod => "prod",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "local" | "dev" => Ok(Self::Local),
            "test" => Ok(Self::Test),
            "prod" | "production" => Ok(Self::Prod),
            other => Err(format!(
                "unknown environment `{other}`, expected local, test or prod"
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
