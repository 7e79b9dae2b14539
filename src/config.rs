//! Configuration file support for composer-graph.
//!
//! Provides YAML-based configuration through `composer-graph.config.yml`
//! files, including data structures, file loading, validation and merging
//! with command-line flags.

use anyhow::{bail, Context};
use composer_graph::adapters::outbound::process::DEFAULT_COMPOSER_BINARY;
use composer_graph::application::dto::OutputFormat;
use composer_graph::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "composer-graph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub install_missing_lock: Option<bool>,
    pub composer_binary: Option<String>,
    pub include_dev: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Settings after applying CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub install_missing_lock: bool,
    pub composer_binary: String,
    pub include_dev: bool,
}

impl Settings {
    /// CLI flags win; unset flags fall back to the config file, then to defaults.
    pub fn resolve(args: &Args, config: Option<&ConfigFile>) -> Result<Self> {
        let config_format = config
            .and_then(|c| c.format.as_deref())
            .map(OutputFormat::from_str)
            .transpose()
            .map_err(anyhow::Error::msg)?;

        Ok(Self {
            format: args.format.or(config_format).unwrap_or_default(),
            install_missing_lock: args.install
                || config.and_then(|c| c.install_missing_lock).unwrap_or(false),
            composer_binary: args
                .composer_bin
                .clone()
                .or_else(|| config.and_then(|c| c.composer_binary.clone()))
                .unwrap_or_else(|| DEFAULT_COMPOSER_BINARY.to_string()),
            include_dev: !args.no_dev && config.and_then(|c| c.include_dev).unwrap_or(true),
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if OutputFormat::from_str(format).is_err() {
            bail!(
                "Invalid config: format '{}' is not supported.\n\n\
                 💡 Hint: Use 'text' or 'json'.",
                format
            );
        }
    }

    if let Some(ref binary) = config.composer_binary {
        if binary.trim().is_empty() {
            bail!(
                "Invalid config: composer_binary must not be empty.\n\n\
                 💡 Hint: Remove the field to use 'composer' from your PATH."
            );
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
