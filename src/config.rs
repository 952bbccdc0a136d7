//! Configuration file support for cdx-harvest.
//!
//! Provides YAML-based configuration through `cdx-harvest.config.yml` files,
//! and resolves the effective [`Settings`] of a run from command-line
//! overrides, the file, and built-in defaults (in that order).

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::adapters::outbound::network::{DEFAULT_REPOSITORY_URL, DEFAULT_SEARCH_URL};
use crate::application::dto::HarvestRequest;
use crate::harvest::policies::VersionPolicy;
use crate::harvest::services::{DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE};
use crate::logging::{LogFormat, DEFAULT_LOG_LEVEL};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "cdx-harvest.config.yml";

/// Default number of retries for transient network failures
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Top-level configuration file schema.
///
/// Every field is optional. The same shape carries command-line overrides,
/// so that merging is a field-by-field `or`.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    pub min_components: Option<usize>,
    pub concurrency: Option<usize>,
    pub output: Option<PathBuf>,
    pub version_policy: Option<String>,
    pub page_size: Option<usize>,
    pub max_pages: Option<usize>,
    pub queue_capacity: Option<usize>,
    pub max_retries: Option<u32>,
    pub search_url: Option<String>,
    pub repository_url: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Fills every field unset in `self` from `fallback`.
    pub fn or(self, fallback: ConfigFile) -> ConfigFile {
        ConfigFile {
            min_components: self.min_components.or(fallback.min_components),
            concurrency: self.concurrency.or(fallback.concurrency),
            output: self.output.or(fallback.output),
            version_policy: self.version_policy.or(fallback.version_policy),
            page_size: self.page_size.or(fallback.page_size),
            max_pages: self.max_pages.or(fallback.max_pages),
            queue_capacity: self.queue_capacity.or(fallback.queue_capacity),
            max_retries: self.max_retries.or(fallback.max_retries),
            search_url: self.search_url.or(fallback.search_url),
            repository_url: self.repository_url.or(fallback.repository_url),
            log_level: self.log_level.or(fallback.log_level),
            log_format: self.log_format.or(fallback.log_format),
            unknown_fields: HashMap::new(),
        }
    }
}

/// Effective settings of one run, after merging and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub min_components: usize,
    pub concurrency: usize,
    pub output: PathBuf,
    pub version_policy: VersionPolicy,
    pub page_size: usize,
    pub max_pages: usize,
    pub queue_capacity: usize,
    pub max_retries: u32,
    pub search_url: String,
    pub repository_url: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Settings {
    /// Resolves settings: `overrides` first, then `file`, then defaults.
    pub fn resolve(overrides: ConfigFile, file: Option<ConfigFile>) -> Result<Settings> {
        let merged = overrides.or(file.unwrap_or_default());
        validate_config(&merged)?;

        let version_policy = match merged.version_policy.as_deref() {
            Some(policy) => VersionPolicy::from_str(policy).map_err(anyhow::Error::msg)?,
            None => VersionPolicy::default(),
        };
        let log_format = match merged.log_format.as_deref() {
            Some(format) => LogFormat::from_str(format).map_err(anyhow::Error::msg)?,
            None => LogFormat::default(),
        };

        Ok(Settings {
            min_components: merged
                .min_components
                .unwrap_or(HarvestRequest::DEFAULT_MIN_COMPONENTS),
            concurrency: merged
                .concurrency
                .unwrap_or(HarvestRequest::DEFAULT_CONCURRENCY),
            output: merged.output.unwrap_or_else(|| PathBuf::from(".")),
            version_policy,
            page_size: merged.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            max_pages: merged.max_pages.unwrap_or(DEFAULT_MAX_PAGES),
            queue_capacity: merged
                .queue_capacity
                .unwrap_or(HarvestRequest::DEFAULT_QUEUE_CAPACITY),
            max_retries: merged.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            search_url: merged
                .search_url
                .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string()),
            repository_url: merged
                .repository_url
                .unwrap_or_else(|| DEFAULT_REPOSITORY_URL.to_string()),
            log_level: merged
                .log_level
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format,
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

    // An empty file deserializes to YAML null rather than an empty mapping.
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
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

/// Validate merged settings, whether they came from the CLI or a config file.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let positive = [
        ("concurrency", config.concurrency),
        ("page_size", config.page_size),
        ("max_pages", config.max_pages),
        ("queue_capacity", config.queue_capacity),
    ];
    for (field, value) in positive {
        if value == Some(0) {
            bail!(
                "Invalid setting: {} must be at least 1.\n\n\
                 💡 Hint: Use a positive value, or leave it unset to use the default.",
                field
            );
        }
    }

    if let Some(ref policy) = config.version_policy {
        VersionPolicy::from_str(policy).map_err(anyhow::Error::msg)?;
    }
    if let Some(ref format) = config.log_format {
        LogFormat::from_str(format).map_err(anyhow::Error::msg)?;
    }
    for (field, value) in [
        ("search_url", &config.search_url),
        ("repository_url", &config.repository_url),
    ] {
        if let Some(url) = value {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                bail!(
                    "Invalid setting: {} must be an http(s) URL, got '{}'.",
                    field,
                    url
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
