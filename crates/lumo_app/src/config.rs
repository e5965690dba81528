//! Application configuration loaded from `lumo.toml`
//!
//! Every field has a default, so an empty file and a missing file both
//! yield a working configuration.

use anyhow::{bail, Context, Result};
use lumo_theme::{PreferenceStore, ThemeBundle, ThemePreference, ThemePreset};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration for a Lumo application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LumoConfig {
    /// Theme selection and persistence
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Window settings
    #[serde(default)]
    pub window: WindowConfig,
}

/// `[theme]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Preset catalog id (`lumo`, `slate`, `zinc`, `stone`, `neutral`)
    #[serde(default = "default_preset")]
    pub preset: String,

    /// Preference used when storage holds nothing usable
    #[serde(default)]
    pub default_preference: ThemePreference,

    /// Storage key the preference file is named after
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Directory the preference file lives in; empty string disables
    /// persistence entirely
    #[serde(default = "default_storage_dir")]
    pub storage_dir: Option<PathBuf>,
}

/// `[window]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,

    /// Logical width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Logical height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_preset() -> String {
    "lumo".to_string()
}

fn default_storage_key() -> String {
    "lumo-ui-theme".to_string()
}

fn default_storage_dir() -> Option<PathBuf> {
    Some(PathBuf::from(".lumo"))
}

fn default_title() -> String {
    "Lumo".to_string()
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            default_preference: ThemePreference::default(),
            storage_key: default_storage_key(),
            storage_dir: default_storage_dir(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl LumoConfig {
    /// Load configuration from a directory containing `lumo.toml`,
    /// or from a TOML file directly
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = if dir.is_file() {
            dir.to_path_buf()
        } else {
            dir.join("lumo.toml")
        };

        if !config_path.exists() {
            bail!("no lumo.toml found at {}", config_path.display());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: LumoConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    ///
    /// An unreadable or malformed file is still an error; only a missing
    /// file is silently defaulted.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let config_path = if dir.is_file() {
            dir.to_path_buf()
        } else {
            dir.join("lumo.toml")
        };

        if !config_path.exists() {
            tracing::debug!(
                "LumoConfig::load_or_default - no config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::load_from_dir(&config_path)
    }

    /// Serialize to TOML for writing a starter config file
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

impl ThemeConfig {
    /// Resolve the configured preset id to a theme bundle
    pub fn bundle(&self) -> Result<ThemeBundle> {
        let preset: ThemePreset = self
            .preset
            .parse()
            .with_context(|| format!("Unknown theme preset {:?} in config", self.preset))?;
        Ok(preset.bundle())
    }

    /// Build the preference persistence binding this config describes
    pub fn storage(&self) -> PreferenceStore {
        match &self.storage_dir {
            Some(dir) if !dir.as_os_str().is_empty() => {
                PreferenceStore::new(dir, &self.storage_key)
            }
            _ => PreferenceStore::disabled(),
        }
    }
}
