//! Catalog configuration.
//!
//! Loaded from an optional `catalog.toml` in the project directory. Every key
//! is optional and falls back to the defaults below; unknown keys are
//! rejected to catch typos early.
//!
//! ```toml
//! images_dir = "public/images"   # Directory scanned for albums
//! output = "src/albums.json"     # Where the catalog is written
//! path_prefix = "public/images"  # Prefix of every path in the catalog
//! folder_prefix = "album"        # Optional word stripped from folder names
//!
//! # Categories listed here come first, in this order. Others follow
//! # alphabetically.
//! category_order = ["人像", "情侶", "登記", "婚宴", "活動"]
//! ```
//!
//! Relative `images_dir` and `output` paths are resolved against the
//! directory holding `catalog.toml`.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the project directory.
pub const CONFIG_FILENAME: &str = "catalog.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Catalog generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Directory scanned for album and special folders.
    pub images_dir: PathBuf,
    /// Path of the catalog document.
    pub output: PathBuf,
    /// Prefix written in front of every cover and photo path.
    pub path_prefix: String,
    /// Literal word stripped from the start of album folder names.
    /// Empty disables stripping.
    pub folder_prefix: String,
    /// Preferred order of known categories.
    pub category_order: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("public/images"),
            output: PathBuf::from("src/albums.json"),
            path_prefix: "public/images".to_string(),
            folder_prefix: "album".to_string(),
            category_order: ["人像", "情侶", "登記", "婚宴", "活動"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl CatalogConfig {
    /// Validate values that would otherwise produce a broken catalog.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "images_dir must not be empty".into(),
            ));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        if self.path_prefix.is_empty() {
            return Err(ConfigError::Validation(
                "path_prefix must not be empty".into(),
            ));
        }
        if self.path_prefix.ends_with('/') || self.path_prefix.contains('\\') {
            return Err(ConfigError::Validation(
                "path_prefix must use '/' separators and have no trailing '/'".into(),
            ));
        }
        if self.folder_prefix.contains('|') {
            return Err(ConfigError::Validation(
                "folder_prefix must not contain '|'".into(),
            ));
        }
        let mut seen = HashSet::new();
        for category in &self.category_order {
            if !seen.insert(category.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "category_order lists '{category}' more than once"
                )));
            }
        }
        Ok(())
    }

    /// Resolve relative `images_dir` and `output` against `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        if self.images_dir.is_relative() {
            self.images_dir = base.join(&self.images_dir);
        }
        if self.output.is_relative() {
            self.output = base.join(&self.output);
        }
        self
    }
}

/// Load `catalog.toml` from `dir`, falling back to defaults when absent.
///
/// Paths in the returned config are still as written; see
/// [`CatalogConfig::resolve_paths`].
pub fn load_config(dir: &Path) -> Result<CatalogConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(CatalogConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: CatalogConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `catalog.toml` with every key at its default.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Album Catalog Configuration
# ===========================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Directory scanned for album folders and the street/landscape folders.
# Relative paths are resolved against the directory holding this file.
images_dir = "public/images"

# Where the catalog document is written.
output = "src/albums.json"

# Prefix of every cover and photo path written into the catalog.
# Use '/' separators and no trailing slash.
path_prefix = "public/images"

# Word stripped from the start of album folder names, so that
# "album4-Title|情侶" reads like "4-Title|情侶". Set to "" to disable.
folder_prefix = "album"

# Categories listed here come first in the filter bar, in this order.
# Categories not listed follow in alphabetical order.
category_order = ["人像", "情侶", "登記", "婚宴", "活動"]
"##
}
