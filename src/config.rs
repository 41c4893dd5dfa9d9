//! Application preferences
//!
//! The JSON configuration document round-tripped with the frontend, stored in
//! the platform config directory. Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `<config_dir>/foliodesk/config.json`
//! 3. Environment variables: `FOLIODESK_*` prefix

use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::infrastructure::traits::FileSystem;

/// User-facing application preferences.
///
/// Field names are camelCase on disk; the frontend reads and writes the same
/// document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// UI language (en, de-ch, fr, it)
    pub locale: String,
    /// Enable autosave
    pub autosave: bool,
    /// ISO code of the base currency (e.g., "CHF")
    pub default_base_currency: String,
    /// ISO codes offered by default
    pub default_currencies: Vec<String>,
    /// Fields to hide in the tax report view
    pub tax_report_hidden_fields: Vec<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            locale: "de-ch".into(),
            autosave: true,
            default_base_currency: "CHF".into(),
            default_currencies: vec!["CHF".into(), "USD".into(), "EUR".into()],
            tax_report_hidden_fields: vec![
                "irr".into(),
                "committed".into(),
                "totalInvested".into(),
                "openCommitment".into(),
                "invested".into(),
                "divested".into(),
            ],
        }
    }
}

/// Platform config directory for foliodesk.
pub fn preferences_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "foliodesk").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path of the preferences file (exposed to the frontend for display).
pub fn preferences_path() -> Option<PathBuf> {
    preferences_dir().map(|dir| dir.join("config.json"))
}

impl Preferences {
    /// Load preferences: compiled defaults when no file exists, the parsed
    /// file otherwise, `FOLIODESK_*` environment overrides applied last.
    pub fn load(fs: &dyn FileSystem) -> ApplicationResult<Self> {
        let prefs = match preferences_path() {
            Some(path) if fs.exists(&path) => {
                let raw = fs
                    .read_to_string(&path)
                    .with_path_context("read preferences", &path)?;
                serde_json::from_str(&raw).map_err(|e| ApplicationError::Preferences {
                    message: format!("parse {}: {}", path.display(), e),
                })?
            }
            _ => Self::default(),
        };

        Self::apply_env_overrides(prefs)
    }

    /// Write preferences as pretty JSON, creating the config directory first.
    ///
    /// Returns the path written, for display.
    pub fn save(&self, fs: &dyn FileSystem) -> ApplicationResult<PathBuf> {
        let path = preferences_path().ok_or_else(|| ApplicationError::Preferences {
            message: "no config directory available on this platform".into(),
        })?;

        fs.ensure_parent(&path)
            .with_path_context("create config directory", &path)?;

        let data = serde_json::to_string_pretty(self).map_err(|e| {
            ApplicationError::Preferences {
                message: format!("serialize preferences: {e}"),
            }
        })?;
        fs.write(&path, &data)
            .with_path_context("write preferences", &path)?;

        Ok(path)
    }

    /// Apply `FOLIODESK_*` environment variables as explicit overrides.
    fn apply_env_overrides(mut prefs: Self) -> ApplicationResult<Self> {
        // Use the config crate just for env var parsing.
        let builder = Config::builder().add_source(
            Environment::with_prefix("FOLIODESK")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("default_currencies")
                .with_list_parse_key("tax_report_hidden_fields"),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("locale") {
            prefs.locale = val;
        }
        if let Ok(val) = config.get_bool("autosave") {
            prefs.autosave = val;
        }
        if let Ok(val) = config.get_string("default_base_currency") {
            prefs.default_base_currency = val;
        }
        if let Ok(val) = config.get::<Vec<String>>("default_currencies") {
            prefs.default_currencies = val;
        }
        if let Ok(val) = config.get::<Vec<String>>("tax_report_hidden_fields") {
            prefs.tax_report_hidden_fields = val;
        }

        Ok(prefs)
    }

    /// Effective preferences as pretty JSON.
    pub fn to_json(&self) -> ApplicationResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ApplicationError::Preferences {
            message: format!("serialize preferences: {e}"),
        })
    }
}


fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Preferences {
        message: e.to_string(),
    }
}
