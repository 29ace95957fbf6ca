use crate::error::{FlattenError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default input document, read from the working directory
pub const DEFAULT_INPUT: &str = "export.geojson";

/// Default output document, written to the working directory
pub const DEFAULT_OUTPUT: &str = "locations.json";

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "locflat.toml";

pub const ENV_INPUT: &str = "LOCFLAT_INPUT";
pub const ENV_OUTPUT: &str = "LOCFLAT_OUTPUT";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
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
#[derive(Debug, Clone)]
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

/// Layered configuration for a conversion run
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub input: ConfigValue<PathBuf>,
    pub output: ConfigValue<PathBuf>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            input: ConfigValue::new(PathBuf::from(DEFAULT_INPUT), ConfigSource::Default),
            output: ConfigValue::new(PathBuf::from(DEFAULT_OUTPUT), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| FlattenError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file {}: {}", path.as_ref().display(), e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| FlattenError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(input) = file_config.input {
            self.input.update(input, ConfigSource::File);
        }

        if let Some(output) = file_config.output {
            self.output.update(output, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from a TOML file if it exists
    pub fn load_from_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        if path.as_ref().is_file() {
            self.load_from_file(path)
        } else {
            tracing::debug!("No config file at {}", path.as_ref().display());
            Ok(self)
        }
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // LOCFLAT_INPUT
        if let Some(input) = env_path(ENV_INPUT) {
            self.input.update(input, ConfigSource::Environment);
        }

        // LOCFLAT_OUTPUT
        if let Some(output) = env_path(ENV_OUTPUT) {
            self.output.update(output, ConfigSource::Environment);
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(input) = overrides.input {
            self.input.update(input, ConfigSource::Cli);
        }

        if let Some(output) = overrides.output {
            self.output.update(output, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> BTreeMap<String, (String, ConfigSource)> {
        let mut map = BTreeMap::new();

        map.insert(
            "input".to_string(),
            (self.input.value.display().to_string(), self.input.source),
        );
        map.insert(
            "output".to_string(),
            (self.output.value.display().to_string(), self.output.source),
        );

        map
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    let value = env::var(key).ok()?;
    if value.trim().is_empty() {
        tracing::warn!("Ignoring empty {} value", key);
        return None;
    }
    Some(PathBuf::from(value))
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}
