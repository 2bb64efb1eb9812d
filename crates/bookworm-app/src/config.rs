//! Settings parser for bookworm's config.toml

use bookworm_core::prelude::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "bookworm";

/// Endpoint the search API lives on
pub const DEFAULT_BASE_URL: &str = "https://wares.commonsware.com";

/// Global application settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchSettings,
}

/// Search transport settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Base URL of the book-search API
    pub base_url: String,

    /// Optional request timeout in seconds. When unset, the transport's
    /// default applies (no overall deadline).
    pub timeout_secs: Option<u64>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Load settings from the given path, or the default location
/// (`<config_dir>/bookworm/config.toml`) when none is given.
///
/// A missing file yields defaults. A file that exists but does not parse
/// logs a warning and also yields defaults; a broken config never prevents
/// startup.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path(),
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str::<Settings>(&contents) {
            Ok(settings) => {
                debug!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Ignoring invalid config {}: {}", path.display(), e);
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(CONFIG_DIR).join(CONFIG_FILENAME)
}
