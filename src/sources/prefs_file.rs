use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};

use super::{Settings, SettingsStore, Theme, ThemeStore};
use crate::config::{self, Preferences};

/// Settings and theme persisted together in one JSON file.
///
/// Every read goes to disk so that the settings and theme handles never
/// overwrite each other's writes. Reads degrade to defaults; writes report
/// their errors.
#[derive(Debug, Clone)]
pub struct PrefsFile {
    path: PathBuf,
}

impl PrefsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Preferences {
        match config::load_optional(&self.path) {
            Ok(Some(prefs)) => prefs,
            Ok(None) => {
                log::debug!("No preferences at {}, using defaults", self.path.display());
                Preferences::default()
            }
            Err(e) => {
                log::warn!("Failed to load preferences: {e:#}");
                Preferences::default()
            }
        }
    }
}

impl SettingsStore for PrefsFile {
    fn get(&self) -> Settings {
        self.load().settings
    }

    /// Writes only the keys `update` changed.
    fn set(&self, update: &dyn Fn(&Settings) -> Settings) -> Result<()> {
        let current = self.get();
        let before = to_object(&current)?;
        let mut changed = to_object(&update(&current))?;
        changed.retain(|key, value| before.get(key) != Some(value));
        if changed.is_empty() {
            return Ok(());
        }
        config::patch(&self.path, changed)
    }
}

fn to_object(settings: &Settings) -> Result<Map<String, Value>> {
    match serde_json::to_value(settings).context("serialize settings")? {
        Value::Object(map) => Ok(map),
        _ => Err(anyhow!("settings must serialize to a JSON object")),
    }
}

impl ThemeStore for PrefsFile {
    fn theme(&self) -> Theme {
        self.load().theme.unwrap_or_default()
    }

    fn set_theme(&self, theme: Theme) -> Result<()> {
        let mut fields = Map::new();
        fields.insert("theme".to_string(), Value::from(theme.as_str()));
        config::patch(&self.path, fields).with_context(|| format!("set theme to {theme}"))
    }
}
