use anyhow::Result;
use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, ENV_PREFIX};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Settings {
    pub codec: CodecConfig,
    pub logging: LoggingConfig,
}

/// Line terminator written between content lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crlf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodecConfig {
    /// Version used when a caller does not name one explicitly.
    pub default_version: String,
    pub line_ending: LineEnding,
    /// Fold long 3.0 content lines at 75 octets.
    pub fold_lines: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            default_version: "3.0".to_string(),
            line_ending: LineEnding::Crlf,
            fold_lines: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables (`VCARDLIB_` prefix,
    /// `__` between nested keys) and an optional `vcardlib.toml`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder_with_defaults()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Loads configuration from TOML text layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the text is not valid TOML or does not deserialize.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(Self::builder_with_defaults()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>> {
        let defaults = Self::default();
        Ok(Config::builder()
            .set_default("codec.default_version", defaults.codec.default_version)?
            .set_default("codec.line_ending", "crlf")?
            .set_default("codec.fold_lines", defaults.codec.fold_lines)?
            .set_default("logging.level", defaults.logging.level)?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_overrides() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.codec.default_version, "3.0");
        assert_eq!(settings.codec.line_ending, LineEnding::Crlf);
        assert!(settings.codec.fold_lines);
    }

    #[test]
    fn toml_overrides_defaults() {
        let settings = Settings::from_toml_str(
            r#"
[codec]
default_version = "2.1"
line_ending = "lf"
fold_lines = false

[logging]
level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(settings.codec.default_version, "2.1");
        assert_eq!(settings.codec.line_ending, LineEnding::Lf);
        assert!(!settings.codec.fold_lines);
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let settings = Settings::from_toml_str("[codec]\nline_ending = \"lf\"\n").unwrap();
        assert_eq!(settings.codec.line_ending, LineEnding::Lf);
        assert_eq!(settings.codec.default_version, "3.0");
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn unknown_line_ending_is_rejected() {
        assert!(Settings::from_toml_str("[codec]\nline_ending = \"cr\"\n").is_err());
    }

    #[test]
    fn load_config_without_sources() {
        let settings = load_config().unwrap();
        assert!(!settings.codec.default_version.is_empty());
    }

    #[test]
    fn line_ending_strings() {
        assert_eq!(LineEnding::Crlf.as_str(), "\r\n");
        assert_eq!(LineEnding::Lf.as_str(), "\n");
    }
}
