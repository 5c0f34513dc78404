//! Configuration System
//!
//! Handles loading configuration for the `crm-studio` binary from a TOML
//! file and environment variables. Every field has a default, so running
//! without any config file is the normal case.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dashboard defaults
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DashboardConfig {
    /// Integration shown by `show` when none is given; first catalog entry otherwise
    #[serde(default)]
    pub default_integration: Option<String>,
}

/// How results are printed
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Table,
    /// Serialized view model
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Default config file locations, in search order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("crm-studio").join("config.toml")),
            Some(PathBuf::from("./crm-studio.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from the first default location that exists, or fall back to defaults
    pub fn load_default() -> Self {
        for path in Self::default_paths() {
            if path.exists() {
                match Self::load_with_env(&path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        let mut config = Config::default();
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply `CRM_STUDIO_*` overrides, reading variables through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(id) = lookup("CRM_STUDIO_DEFAULT_INTEGRATION") {
            self.dashboard.default_integration = Some(id);
        }

        if let Some(format) = lookup("CRM_STUDIO_OUTPUT_FORMAT") {
            match format.parse() {
                Ok(f) => self.output.format = f,
                Err(e) => tracing::warn!("Ignoring CRM_STUDIO_OUTPUT_FORMAT: {}", e),
            }
        }

        if let Some(level) = lookup("CRM_STUDIO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CRM_STUDIO_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Failed to write config file {path:?}: {error}")]
    Write { path: PathBuf, error: String },
}

/// Write the default config template to `path`
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, generate_default_config()).map_err(|e| ConfigError::Write {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# CRM Studio Configuration
#
# Environment variables override these settings:
# - CRM_STUDIO_DEFAULT_INTEGRATION
# - CRM_STUDIO_OUTPUT_FORMAT
# - CRM_STUDIO_LOG_LEVEL
# - CRM_STUDIO_LOG_FORMAT

[dashboard]
# Integration shown by `crm-studio show` when no id is given
# default_integration = "salesforce_cti"

[output]
# Output format: table or json
format = "table"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dashboard.default_integration, None);
        assert_eq!(config.output.format, OutputFormat::Table);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            r#"
            [dashboard]
            default_integration = "salesforce_sidebar"

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.dashboard.default_integration.as_deref(),
            Some("salesforce_sidebar")
        );
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_write_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crm-studio.toml");
        write_default_config(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("CRM_STUDIO_DEFAULT_INTEGRATION", "copper"),
            ("CRM_STUDIO_OUTPUT_FORMAT", "JSON"),
            ("CRM_STUDIO_LOG_LEVEL", "trace"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.dashboard.default_integration.as_deref(), Some("copper"));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_invalid_env_format_is_ignored() {
        let mut config = Config::default();
        config.apply_env_overrides(|key| {
            (key == "CRM_STUDIO_OUTPUT_FORMAT").then(|| "xml".to_string())
        });
        assert_eq!(config.output.format, OutputFormat::Table);
    }
}
