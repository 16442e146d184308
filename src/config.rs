//! Configuration for the BeeKind credential checker
//!
//! Loaded from built-in defaults, an optional `config.toml` (or the file named
//! by `BEEKIND_CONFIG`), then `BEEKIND_*` environment variables. Only the
//! presentation of results is configurable; the validation rules are fixed.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_VAR: &str = "BEEKIND_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "config";
const ENV_PREFIX: &str = "BEEKIND";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// List every validation error instead of only the first.
    /// Environment: BEEKIND_SHOW_ALL_ERRORS
    pub show_all_errors: bool,

    /// Append a strength line to password checks.
    /// Environment: BEEKIND_SHOW_STRENGTH
    pub show_strength: bool,

    /// Longest accepted input line, in bytes.
    pub max_line_length: usize,

    /// Prompt printed before each line; empty disables it.
    pub prompt: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            show_all_errors: true,
            show_strength: true,
            max_line_length: 512,
            prompt: "beekind> ".to_string(),
        }
    }
}

impl CheckerConfig {
    /// Load from the default location with environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    /// Load from `path` (extension optional, file may be missing) with environment overrides.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let settings = Self::defaults()?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;
        Self::finish(settings)
    }

    /// Parse TOML text layered over the defaults, without touching the environment.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let settings = Self::defaults()?
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?;
        Self::finish(settings)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("show_all_errors", defaults.show_all_errors)?
            .set_default("show_strength", defaults.show_strength)?
            .set_default("max_line_length", defaults.max_line_length as i64)?
            .set_default("prompt", defaults.prompt)
    }

    fn finish(settings: Config) -> Result<Self, ConfigError> {
        let config: CheckerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_line_length == 0 {
            return Err(ConfigError::Message(
                "max_line_length must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = CheckerConfig::from_toml("").unwrap();
        assert_eq!(config, CheckerConfig::default());
    }

    #[test]
    fn test_toml_overrides() {
        let config = CheckerConfig::from_toml(
            "show_all_errors = false\nmax_line_length = 64\nprompt = \"\"\n",
        )
        .unwrap();
        assert!(!config.show_all_errors);
        assert!(config.show_strength);
        assert_eq!(config.max_line_length, 64);
        assert_eq!(config.prompt, "");
    }

    #[test]
    fn test_zero_line_length_rejected() {
        let err = CheckerConfig::from_toml("max_line_length = 0").unwrap_err();
        assert!(err.to_string().contains("max_line_length"));
    }
}
