use std::path::PathBuf;

use deepreader::application::services::{DEFAULT_MAX_INPUT_CHARS, DEFAULT_TEMPERATURE};
use deepreader::presentation::config::SettingsSources;
use deepreader::presentation::{Environment, Settings};

fn vars(pairs: &[(&str, &str)]) -> Option<Vec<(String, String)>> {
    Some(
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
    )
}

/// Unique scratch directory holding an optional `appsettings.test.toml`.
fn config_dir(test_toml: Option<&str>) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("deepreader-settings-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    if let Some(contents) = test_toml {
        std::fs::write(dir.join("appsettings.test.toml"), contents).unwrap();
    }
    dir
}

#[test]
fn given_no_sources_when_loading_defaults_then_matches_documented_values() {
    let settings = Settings::defaults().unwrap();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.llm.base_url, "https://api.deepseek.com");
    assert_eq!(settings.llm.model, "deepseek-chat");
    assert_eq!(settings.analysis.max_input_chars, DEFAULT_MAX_INPUT_CHARS);
    assert_eq!(settings.analysis.max_concurrent_analyses, 1);
    assert_eq!(settings.upload.max_body_bytes(), 20 * 1024 * 1024);
    assert_eq!(settings.environment, Environment::Local);
    assert!(!settings.scaffold.enabled);
    assert_eq!(settings.logging.level, "info");

    let options = settings.analysis_options();
    assert!((options.temperature - DEFAULT_TEMPERATURE).abs() < f32::EPSILON);
}

#[test]
fn given_settings_when_debug_printing_then_api_key_is_redacted() {
    let mut settings = Settings::defaults().unwrap();
    settings.llm.api_key = "sk-very-secret".to_string();

    let printed = format!("{settings:?}");

    assert!(!printed.contains("sk-very-secret"));
    assert!(printed.contains("[REDACTED]"));
}

#[test]
fn given_environment_names_when_parsing_then_accepts_aliases() {
    assert_eq!(
        Environment::try_from("Production".to_string()),
        Ok(Environment::Prod)
    );
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_app_environment_variable_when_reading_environment_then_uses_it() {
    let sources = SettingsSources {
        env_vars: vars(&[("APP_ENVIRONMENT", "Production")]),
        ..SettingsSources::default()
    };

    assert_eq!(Environment::from_sources(&sources).unwrap(), Environment::Prod);
}

#[test]
fn given_no_app_environment_variable_when_reading_environment_then_defaults_to_local() {
    let sources = SettingsSources {
        env_vars: vars(&[]),
        ..SettingsSources::default()
    };

    assert_eq!(Environment::from_sources(&sources).unwrap(), Environment::Local);
}

#[test]
fn given_unknown_environment_when_reading_environment_then_fails() {
    let sources = SettingsSources {
        env_vars: vars(&[("APP_ENVIRONMENT", "staging")]),
        ..SettingsSources::default()
    };

    assert!(Environment::from_sources(&sources).is_err());
}

#[test]
fn given_env_overrides_when_loading_then_they_win_over_defaults() {
    let sources = SettingsSources {
        config_dir: config_dir(None),
        env_vars: vars(&[
            ("APP_LLM__API_KEY", "sk-from-env"),
            ("APP_ANALYSIS__MAX_INPUT_CHARS", "2500"),
        ]),
    };

    let settings = Settings::load_from(Environment::Test, &sources).unwrap();

    assert_eq!(settings.llm.api_key, "sk-from-env");
    assert_eq!(settings.analysis.max_input_chars, 2500);
    assert_eq!(settings.llm.model, "deepseek-chat");
    assert_eq!(settings.environment, Environment::Test);

    std::fs::remove_dir_all(&sources.config_dir).ok();
}

#[test]
fn given_environment_file_when_loading_then_file_layers_between_defaults_and_env() {
    let sources = SettingsSources {
        config_dir: config_dir(Some(
            r#"
[llm]
model = "deepseek-reasoner"

[analysis]
max_input_chars = 500

[scaffold]
enabled = true
mock_delay_ms = 250
"#,
        )),
        env_vars: vars(&[("APP_ANALYSIS__MAX_INPUT_CHARS", "800")]),
    };

    let settings = Settings::load_from(Environment::Test, &sources).unwrap();

    assert_eq!(settings.llm.model, "deepseek-reasoner");
    assert_eq!(settings.analysis.max_input_chars, 800);
    assert!(settings.scaffold.enabled);
    assert_eq!(settings.scaffold.mock_delay().as_millis(), 250);
    assert_eq!(settings.server.port, 3000);

    std::fs::remove_dir_all(&sources.config_dir).ok();
}

#[test]
fn given_file_for_other_environment_when_loading_then_it_is_ignored() {
    let sources = SettingsSources {
        config_dir: config_dir(Some("[llm]\nmodel = \"only-for-test\"\n")),
        env_vars: vars(&[]),
    };

    let settings = Settings::load_from(Environment::Prod, &sources).unwrap();

    assert_eq!(settings.llm.model, "deepseek-chat");
    assert_eq!(settings.environment, Environment::Prod);

    std::fs::remove_dir_all(&sources.config_dir).ok();
}

#[test]
fn given_missing_api_key_when_validating_then_fails() {
    let settings = Settings::defaults().unwrap();

    let error = settings.validate().unwrap_err();

    assert!(error.to_string().contains("llm.api_key"));
}

#[test]
fn given_missing_api_key_in_scaffold_mode_when_validating_then_passes() {
    let mut settings = Settings::defaults().unwrap();
    settings.scaffold.enabled = true;

    assert!(settings.validate().is_ok());
}

#[test]
fn given_api_key_when_validating_then_passes() {
    let mut settings = Settings::defaults().unwrap();
    settings.llm.api_key = "sk-live".to_string();

    assert!(settings.validate().is_ok());
}

#[test]
fn given_zero_input_limit_when_validating_then_fails() {
    let mut settings = Settings::defaults().unwrap();
    settings.llm.api_key = "sk-live".to_string();
    settings.analysis.max_input_chars = 0;

    assert!(settings.validate().is_err());
}
