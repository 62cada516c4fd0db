//! On-disk configuration.
//!
//! A single JSON file under the platform config directory. Missing or corrupt
//! config falls back to defaults; saving is best-effort and logged.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language code preset into the language box at startup.
    pub language_code: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language_code: "tha".to_string(),
            window_width: 600.0,
            window_height: 360.0,
        }
    }
}

impl Config {
    /// The config file location, `None` when the platform exposes no config
    /// directory.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rea-tts").join("config.json"))
    }

    /// Loads the config, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), %err, "could not read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Best-effort save to the platform config path.
    pub fn save(&self) {
        let Some(path) = Self::path() else {
            return;
        };
        match self.save_to(&path) {
            Ok(()) => info!(path = %path.display(), "config saved"),
            Err(err) => warn!(path = %path.display(), %err, "could not save config"),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(self).context("serializing config")?;
        fs::write(path, raw).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
