//! Configuration management for the listing tools
//!
//! Holds the defaults the local filesystem adapter falls back on. Nothing here
//! changes how listings are rendered.

use config::{Config, ConfigError, Environment, File, FileFormat};
use log::info;
use serde::Deserialize;
use std::path::Path;

use crate::entry::PERM_MASK;

const ENV_PREFIX: &str = "RAX_LISTING";
const DEFAULT_CONFIG_PATH: &str = "listing";

/// Defaults for entries read from the local filesystem
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    /// Owner name shown when the backend cannot resolve one
    pub default_owner: String,

    /// Group name shown when the backend cannot resolve one
    pub default_group: String,

    /// Permission bits synthesized for files on platforms without Unix modes
    pub fallback_mode: u32,

    /// Permission bits synthesized for directories on platforms without Unix modes
    pub fallback_dir_mode: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_owner: "ftp".to_string(),
            default_group: "ftp".to_string(),
            fallback_mode: 0o644,
            fallback_dir_mode: 0o755,
        }
    }
}

impl ListingConfig {
    /// Load configuration from `path` (or `./listing.toml`) with environment overrides.
    ///
    /// A missing file is not an error; built-in defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let source = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };

        let settings = Self::defaults_builder()?
            .add_source(source)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: ListingConfig = settings.try_deserialize()?;
        config.validate()?;

        info!(
            "Loaded listing config (owner {}, group {})",
            config.default_owner, config.default_group
        );
        Ok(config)
    }

    /// Parse configuration from TOML text layered over the defaults
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let settings = Self::defaults_builder()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        let config: ListingConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn defaults_builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = ListingConfig::default();
        Config::builder()
            .set_default("default_owner", defaults.default_owner)?
            .set_default("default_group", defaults.default_group)?
            .set_default("fallback_mode", defaults.fallback_mode as u64)?
            .set_default("fallback_dir_mode", defaults.fallback_dir_mode as u64)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_owner.is_empty() {
            return Err(ConfigError::Message("default_owner cannot be empty".into()));
        }

        if self.default_group.is_empty() {
            return Err(ConfigError::Message("default_group cannot be empty".into()));
        }

        if self.fallback_mode > PERM_MASK || self.fallback_dir_mode > PERM_MASK {
            return Err(ConfigError::Message(
                "fallback modes must not exceed 0o7777".into(),
            ));
        }

        Ok(())
    }
}
