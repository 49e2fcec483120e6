//! Application configuration.
//!
//! Stored as TOML under the platform config directory. Holds the persisted
//! display-mode flag plus optional path overrides; the timer collection
//! itself lives in the data directory (see `store`). Loading fails open to
//! defaults so a damaged config never blocks startup.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item, Table};
use tracing::warn;

/// Environment override for the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "TEALTIMER_CONFIG_DIR";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub storage: StorageConfig,
    pub export: ExportConfig,
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Dark palette when true (the default), light palette otherwise.
    pub dark_mode: bool,
    /// Theme preselected for new timers.
    pub default_theme: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            default_theme: "digital".to_string(),
        }
    }
}

/// Storage settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding `timers.json`; platform data dir when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Snapshot export settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory snapshots are written to; current directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir).join("config.toml"));
        }
        dirs::config_dir()
            .map(|d| d.join("tealtimer").join("config.toml"))
            .context("no config directory available on this platform")
    }

    /// Load the config, failing open to defaults.
    ///
    /// A missing file is normal (first run); an unreadable or unparsable
    /// file is logged and replaced by defaults in memory.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
                return Ok(Self::default());
            }
        };
        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Write the config, creating the config directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }
        let encoded = toml::to_string_pretty(self)?;
        fs::write(&path, encoded)
            .with_context(|| format!("writing config file {}", path.display()))
    }
}

/// Outcome of an additive config migration.
#[derive(Debug, Clone)]
pub struct MigrationResult {
    /// Migrated file content (user comments and formatting preserved).
    pub content: String,
    /// Newly added fields as `section.key`.
    pub added_fields: Vec<String>,
    /// Sections that did not exist before.
    pub sections_added: Vec<String>,
}

impl MigrationResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add any missing fields from the default config to `existing`.
///
/// Purely additive: present keys keep their values, comments and layout are
/// preserved. An empty input produces the full default config.
pub fn migrate_config(existing: &str) -> Result<MigrationResult> {
    let mut doc: DocumentMut = existing.parse().context("parsing existing config")?;
    let default_text = toml::to_string_pretty(&Config::default())?;
    let default_doc: DocumentMut = default_text.parse().context("parsing default config")?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();
    let root = doc.as_table_mut();

    for (section, default_item) in default_doc.as_table().iter() {
        match default_item {
            Item::Table(default_table) => {
                if !matches!(root.get(section), Some(Item::Table(_))) {
                    root.insert(section, Item::Table(Table::new()));
                    sections_added.push(section.to_string());
                }
                if let Some(Item::Table(target)) = root.get_mut(section) {
                    for (key, value) in default_table.iter() {
                        if target.get(key).is_none() {
                            target.insert(key, value.clone());
                            added_fields.push(format!("{}.{}", section, key));
                        }
                    }
                }
            }
            other => {
                if root.get(section).is_none() {
                    root.insert(section, other.clone());
                    added_fields.push(section.to_string());
                }
            }
        }
    }

    Ok(MigrationResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
