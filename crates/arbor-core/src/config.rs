//! Configuration for arbor
//!
//! Configuration is an optional TOML file. Every field has a default, so an
//! empty file (or no file at all) is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ArborError, Result};
use crate::format::OutputFormat;
use crate::graph::Weight;

/// Environment variable naming a config file when `--config` is not given
pub const CONFIG_ENV: &str = "ARBOR_CONFIG";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArborConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub grid: GridConfig,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level used when neither `--log-level` nor `--verbose` is given
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Grid construction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Weight of a grid passage without an explicit override
    #[serde(default = "default_grid_weight")]
    pub default_weight: Weight,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_weight: default_grid_weight(),
        }
    }
}

fn default_grid_weight() -> Weight {
    1
}

impl ArborConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ArborConfig = toml::from_str(&content)?;
        if u32::try_from(config.grid.default_weight).is_err() {
            return Err(ArborError::invalid_value(
                "grid.default_weight",
                config.grid.default_weight,
            ));
        }
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load from `explicit`, else from `$ARBOR_CONFIG`, else defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "load_config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ArborConfig::default();
        assert_eq!(config.output.format, OutputFormat::Human);
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json);
        assert_eq!(config.grid.default_weight, 1);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("arbor.toml");
        fs::write(&path, "").unwrap();

        let config = ArborConfig::load(&path).unwrap();
        assert_eq!(config, ArborConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("arbor.toml");
        fs::write(&path, "[output]\nformat = \"json\"\n\n[grid]\ndefault_weight = 4\n").unwrap();

        let config = ArborConfig::load(&path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.grid.default_weight, 4);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("arbor.toml");

        let mut config = ArborConfig::default();
        config.output.format = OutputFormat::Records;
        config.logging.json = true;
        config.save(&path).unwrap();

        let loaded = ArborConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_negative_grid_weight_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("arbor.toml");
        fs::write(&path, "[grid]\ndefault_weight = -2\n").unwrap();

        assert!(matches!(
            ArborConfig::load(&path),
            Err(ArborError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("arbor.toml");
        fs::write(&path, "[output\nformat = ").unwrap();

        assert!(matches!(ArborConfig::load(&path), Err(ArborError::Toml(_))));
    }

    #[test]
    fn test_oversized_grid_weight_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("arbor.toml");
        fs::write(&path, "[grid]\ndefault_weight = 4294967296\n").unwrap();

        assert!(matches!(
            ArborConfig::load(&path),
            Err(ArborError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("arbor.toml");
        fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let config = ArborConfig::resolve(Some(&path)).unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = ArborConfig::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ArborError::Io(_))));
    }
}
