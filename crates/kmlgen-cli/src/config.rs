//! Layered configuration for the kmlgen binary
//!
//! Precedence, highest first: CLI arguments, environment variables, config
//! file, defaults.

use crate::errors::CliError;
use kmlgen_core::models::style::DEFAULT_ICON_URL;
use kmlgen_core::render::MIN_COORDINATE_PRECISION;
use kmlgen_core::RenderOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

/// Default config file looked up in the current directory
pub const DEFAULT_CONFIG_FILE: &str = "kmlgen.toml";

pub const ENV_COORDINATE_PRECISION: &str = "KMLGEN_COORDINATE_PRECISION";
pub const ENV_DEFAULT_ICON_URL: &str = "KMLGEN_DEFAULT_ICON_URL";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    Default,
    File,
    Environment,
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Effective configuration for rendering
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub coordinate_precision: ConfigValue<usize>,
    pub default_icon_url: ConfigValue<String>,
}

impl LayeredConfig {
    pub fn with_defaults() -> Self {
        Self {
            coordinate_precision: ConfigValue::new(
                MIN_COORDINATE_PRECISION,
                ConfigSource::Default,
            ),
            default_icon_url: ConfigValue::new(DEFAULT_ICON_URL.to_string(), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|source| CliError::Read { path: path.to_path_buf(), source })?;

        let file_config: FileConfig = toml::from_str(&content)
            .map_err(|e| CliError::Parse { path: path.to_path_buf(), reason: e.to_string() })?;

        if let Some(precision) = file_config.coordinate_precision {
            self.coordinate_precision.update(validate_precision(precision)?, ConfigSource::File);
        }

        if let Some(url) = file_config.default_icon_url {
            self.default_icon_url.update(validate_icon_url(&url)?, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables; invalid values are skipped
    pub fn load_from_env(mut self) -> Self {
        if let Ok(raw) = env::var(ENV_COORDINATE_PRECISION) {
            match parse_precision(&raw) {
                Ok(precision) => {
                    self.coordinate_precision.update(precision, ConfigSource::Environment)
                }
                Err(e) => tracing::warn!("Ignoring {}='{}': {}", ENV_COORDINATE_PRECISION, raw, e),
            }
        }

        if let Ok(raw) = env::var(ENV_DEFAULT_ICON_URL) {
            match validate_icon_url(&raw) {
                Ok(url) => self.default_icon_url.update(url, ConfigSource::Environment),
                Err(e) => tracing::warn!("Ignoring {}='{}': {}", ENV_DEFAULT_ICON_URL, raw, e),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) -> Result<(), CliError> {
        if let Some(precision) = overrides.coordinate_precision {
            self.coordinate_precision.update(validate_precision(precision)?, ConfigSource::Cli);
        }

        if let Some(url) = overrides.default_icon_url {
            self.default_icon_url.update(validate_icon_url(&url)?, ConfigSource::Cli);
        }

        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::with_precision(self.coordinate_precision.value)
    }

    /// All configuration values with their sources, for inspection
    pub fn to_inspection_map(&self) -> BTreeMap<String, (String, ConfigSource)> {
        let mut map = BTreeMap::new();

        map.insert(
            "coordinate_precision".to_string(),
            (self.coordinate_precision.value.to_string(), self.coordinate_precision.source),
        );

        map.insert(
            "default_icon_url".to_string(),
            (self.default_icon_url.value.clone(), self.default_icon_url.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    coordinate_precision: Option<usize>,
    default_icon_url: Option<String>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub coordinate_precision: Option<usize>,
    pub default_icon_url: Option<String>,
}

/// Parse coordinate precision from string
pub fn parse_precision(s: &str) -> Result<usize, CliError> {
    let precision = s.trim().parse::<usize>().map_err(|_| CliError::ConfigInvalid {
        key: "coordinate_precision".to_string(),
        reason: format!("'{}' is not a non-negative integer", s),
    })?;
    validate_precision(precision)
}

fn validate_precision(precision: usize) -> Result<usize, CliError> {
    if precision < MIN_COORDINATE_PRECISION {
        return Err(CliError::ConfigInvalid {
            key: "coordinate_precision".to_string(),
            reason: format!("{} is below the minimum of {}", precision, MIN_COORDINATE_PRECISION),
        });
    }
    Ok(precision)
}

fn validate_icon_url(url: &str) -> Result<String, CliError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(CliError::ConfigInvalid {
            key: "default_icon_url".to_string(),
            reason: "URL is empty".to_string(),
        });
    }
    Ok(url.to_string())
}

/// Load configuration: an explicit path must exist, the default file is optional
pub fn load_config(
    explicit_path: Option<&Path>,
    overrides: CliConfigOverrides,
) -> Result<LayeredConfig, CliError> {
    let mut config = LayeredConfig::with_defaults();

    match explicit_path {
        Some(path) => config = config.load_from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                tracing::debug!("Loading {}", DEFAULT_CONFIG_FILE);
                config = config.load_from_file(default_path)?;
            }
        }
    }

    let mut config = config.load_from_env();
    config.update_from_cli(overrides)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.coordinate_precision.value, 6);
        assert_eq!(config.coordinate_precision.source, ConfigSource::Default);
        assert_eq!(config.default_icon_url.value, DEFAULT_ICON_URL);
        assert_eq!(config.render_options(), RenderOptions::default());
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(6, ConfigSource::Default);

        value.update(7, ConfigSource::File);
        assert_eq!(value.value, 7);
        assert_eq!(value.source, ConfigSource::File);

        value.update(8, ConfigSource::Environment);
        assert_eq!(value.value, 8);

        value.update(9, ConfigSource::Cli);
        assert_eq!(value.value, 9);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(10, ConfigSource::File);
        assert_eq!(value.value, 9);
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
coordinate_precision = 8
default_icon_url = "http://example.com/dot.png"
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.coordinate_precision.value, 8);
        assert_eq!(config.coordinate_precision.source, ConfigSource::File);
        assert_eq!(config.default_icon_url.value, "http://example.com/dot.png");
        assert_eq!(config.render_options().precision(), 8);
    }

    #[test]
    fn test_file_rejects_low_precision() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "coordinate_precision = 3").unwrap();

        let err = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, CliError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_file_rejects_unknown_keys() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "precision = 7").unwrap();

        let err = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Parse { .. }));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();
        config
            .update_from_cli(CliConfigOverrides {
                coordinate_precision: Some(10),
                default_icon_url: None,
            })
            .unwrap();

        assert_eq!(config.coordinate_precision.value, 10);
        assert_eq!(config.coordinate_precision.source, ConfigSource::Cli);
        assert_eq!(config.default_icon_url.source, ConfigSource::Default);
    }

    #[test]
    fn test_parse_precision() {
        assert_eq!(parse_precision("6").unwrap(), 6);
        assert_eq!(parse_precision(" 12 ").unwrap(), 12);
        assert!(parse_precision("5").is_err());
        assert!(parse_precision("six").is_err());
        assert!(parse_precision("-7").is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "coordinate_precision = 7").unwrap();

        env::set_var(ENV_COORDINATE_PRECISION, "9");
        let config =
            LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();
        env::remove_var(ENV_COORDINATE_PRECISION);

        assert_eq!(config.coordinate_precision.value, 9);
        assert_eq!(config.coordinate_precision.source, ConfigSource::Environment);
    }

    #[test]
    #[serial]
    fn test_invalid_env_value_ignored() {
        env::set_var(ENV_COORDINATE_PRECISION, "two");
        env::set_var(ENV_DEFAULT_ICON_URL, "   ");
        let config = LayeredConfig::with_defaults().load_from_env();
        env::remove_var(ENV_COORDINATE_PRECISION);
        env::remove_var(ENV_DEFAULT_ICON_URL);

        assert_eq!(config.coordinate_precision.source, ConfigSource::Default);
        assert_eq!(config.default_icon_url.source, ConfigSource::Default);
    }

    #[test]
    #[serial]
    fn test_load_config_missing_explicit_file() {
        let err = load_config(Some(Path::new("/nonexistent/kmlgen.toml")), Default::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }

    #[test]
    fn test_inspection_map() {
        let config = LayeredConfig::with_defaults();
        let map = config.to_inspection_map();

        let (precision, source) = &map["coordinate_precision"];
        assert_eq!(precision, "6");
        assert_eq!(*source, ConfigSource::Default);
        assert!(map.contains_key("default_icon_url"));
    }
}
