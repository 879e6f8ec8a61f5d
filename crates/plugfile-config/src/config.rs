//! Configuration management for plugfile

use plugfile_foundation::{ScaffoldError, ScaffoldResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the project root
pub const CONFIG_FILE: &str = "plugfile.toml";
/// Prefix for environment overrides, e.g. `PLUGFILE__LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "PLUGFILE__";

/// Header content written for new `.h` files.
///
/// Kept byte-for-byte as the project has always generated it.
pub const DEFAULT_HEADER_BOILERPLATE: &str = "# pragma once";
pub const DEFAULT_SOURCE_BOILERPLATE: &str = "//===================================================";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Content of generated files
    #[serde(default)]
    pub boilerplate: BoilerplateConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial content of newly created files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoilerplateConfig {
    pub header: String,
    pub source: String,
}

/// Log output format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format for development
    #[default]
    Pretty,
    /// Structured JSON format
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for BoilerplateConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER_BOILERPLATE.to_string(),
            source: DEFAULT_SOURCE_BOILERPLATE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Load configuration for a project rooted at `root`
    ///
    /// Configuration is loaded in the following priority order (highest to lowest):
    /// 1. Environment variables (PLUGFILE__*)
    /// 2. `plugfile.toml` in `root`
    /// 3. Default values
    pub fn load_from(root: &Path) -> ScaffoldResult<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Toml},
            Figment,
        };

        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "Loading TOML configuration");
            figment = figment.merge(Toml::file(&config_path));
        }

        let app_config: AppConfig = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ScaffoldError::config(format!("Failed to load configuration: {}", e)))?;

        app_config.validate()?;

        tracing::debug!(
            level = %app_config.logging.level,
            format = ?app_config.logging.format,
            "Configuration loaded successfully"
        );

        Ok(app_config)
    }

    /// Validate the configuration
    fn validate(&self) -> ScaffoldResult<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ScaffoldError::config(format!(
                "Invalid log level '{}', must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            )));
        }

        Ok(())
    }
}
