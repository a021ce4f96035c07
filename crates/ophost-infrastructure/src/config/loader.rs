//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values.

use crate::config::AppConfig;
use crate::constants::{CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_FILE};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use ophost_domain::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone, Default)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables, e.g. `OPHOST__SERVER__PORT`
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            figment = figment.merge(Toml::file(config_path));
            log_config_loaded(config_path, config_path.exists());
        } else {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                figment = figment.merge(Toml::file(&default_path));
                log_config_loaded(&default_path, true);
            }
        }

        figment =
            figment.merge(Env::prefixed(CONFIG_ENV_PREFIX).split(CONFIG_ENV_SEPARATOR));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        self.validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .config_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Validate loaded configuration
    ///
    /// Addressing mistakes are caught here so they surface before any
    /// listener starts.
    fn validate_config(&self, config: &AppConfig) -> Result<()> {
        if config.server.host.trim().is_empty() {
            return Err(Error::configuration("server.host must not be empty"));
        }

        if !config.server.base_path.starts_with('/') {
            return Err(Error::configuration(format!(
                "server.base_path must start with '/': {}",
                config.server.base_path
            )));
        }

        if config.server.relative_path.is_empty() {
            return Err(Error::configuration(
                "server.relative_path must not be empty",
            ));
        }

        if config.server.relative_path.contains('/') {
            return Err(Error::configuration(format!(
                "server.relative_path must be a single path segment: {}",
                config.server.relative_path
            )));
        }

        parse_log_level(&config.logging.level)?;

        Ok(())
    }
}
