use crate::error::ConfigError;
use piet_palette::{PietMapper, DEFAULT_DIFF_THRESHOLD, DEFAULT_LEVEL_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "PIET_CLEANER_CONFIG";

/// Run parameters loaded from config.yaml and the command line
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemapConfig {
    /// Per-channel tolerance used to identify the 20 Piet colors
    #[serde(default = "default_diff_threshold")]
    pub diff_threshold: u32,

    /// Tolerance used to decide which channels define a color's hue
    #[serde(default = "default_level_threshold")]
    pub level_threshold: u32,

    /// Report the full color mapping after association
    #[serde(default)]
    pub verbose: bool,

    /// Write an indexed PNG whose palette is the canonical table
    #[serde(default)]
    pub indexed_output: bool,

    /// Default output name is `<stem>.<output_suffix>.png`
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
}

fn default_diff_threshold() -> u32 {
    DEFAULT_DIFF_THRESHOLD
}

fn default_level_threshold() -> u32 {
    DEFAULT_LEVEL_THRESHOLD
}

fn default_output_suffix() -> String {
    "remapped".to_string()
}

/// Values given on the command line; `None`/`false` leaves the file value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub diff_threshold: Option<u32>,
    pub level_threshold: Option<u32>,
    pub verbose: bool,
    pub indexed_output: bool,
}

impl RemapConfig {
    /// Load from `path`, or from the file named by `PIET_CLEANER_CONFIG`,
    /// or fall back to defaults when neither is set.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match path {
            Some(path) => Self::from_file(&path),
            None => {
                tracing::debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a YAML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            diff_threshold = config.diff_threshold,
            level_threshold = config.level_threshold,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse YAML text. An empty document yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(diff) = overrides.diff_threshold {
            self.diff_threshold = diff;
        }
        if let Some(level) = overrides.level_threshold {
            self.level_threshold = level;
        }
        self.verbose |= overrides.verbose;
        self.indexed_output |= overrides.indexed_output;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.level_threshold == 0 {
            return Err(ConfigError::Invalid(
                "level_threshold must be at least 1".to_string(),
            ));
        }
        if self.output_suffix.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "output_suffix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// `<dir>/<stem>.<output_suffix>.png` next to the input file
    pub fn default_output_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        input.with_file_name(format!("{stem}.{}.png", self.output_suffix))
    }

    /// Mapper configured with these thresholds
    pub fn mapper(&self) -> PietMapper {
        PietMapper::new()
            .diff_threshold(self.diff_threshold)
            .level_threshold(self.level_threshold)
            .verbose(self.verbose)
    }
}

impl Default for RemapConfig {
    fn default() -> Self {
        Self {
            diff_threshold: default_diff_threshold(),
            level_threshold: default_level_threshold(),
            verbose: false,
            indexed_output: false,
            output_suffix: default_output_suffix(),
        }
    }
}
