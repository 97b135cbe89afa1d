use std::{env, fs, path::Path, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::sources::{Settings, Theme};

pub const CONFIG_ENV: &str = "SITENAV_CONFIG";

/// Everything the preferences file may hold. Keys this crate does not know
/// about stay in `settings.other`.
#[derive(Debug, Clone, Default)]
pub struct Preferences {
    pub theme: Option<Theme>,
    pub settings: Settings,
}

impl Preferences {
    /// Reads each known key on its own so one bad value only costs that key.
    pub fn from_object(mut obj: Map<String, Value>) -> Self {
        let defaults = Settings::default();
        let theme = take_field(&mut obj, "theme");
        let animations = take_field(&mut obj, "animations").unwrap_or(defaults.animations);
        let sound = take_field(&mut obj, "sound").unwrap_or(defaults.sound);
        Self {
            theme,
            settings: Settings {
                animations,
                sound,
                other: obj,
            },
        }
    }
}

fn take_field<T: DeserializeOwned>(obj: &mut Map<String, Value>, key: &str) -> Option<T> {
    let value = obj.remove(key)?;
    match serde_json::from_value(value.clone()) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("Ignoring preference '{key}' = {value}: {e}");
            None
        }
    }
}

pub fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(p) = env::var(CONFIG_ENV) {
        if !p.trim().is_empty() {
            return Some(PathBuf::from(p));
        }
    }

    let local = PathBuf::from("sitenav.json");
    if local.exists() {
        return Some(local);
    }

    if let Some(appdata) = env::var_os("APPDATA") {
        return Some(PathBuf::from(appdata).join("sitenav").join("config.json"));
    }

    if let Some(home) = env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config").join("sitenav").join("config.json"));
    }

    None
}

pub fn load_optional(path: &Path) -> Result<Option<Preferences>> {
    if !path.exists() {
        return Ok(None);
    }
    match read_json_or_empty_object(path)? {
        Value::Object(obj) => Ok(Some(Preferences::from_object(obj))),
        _ => Err(anyhow!("preferences root must be a JSON object")),
    }
}

/// Overwrites `fields` in the JSON object at `path`, keeping every other key.
pub fn patch(path: &Path, fields: Map<String, Value>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }

    let mut root = read_json_or_empty_object(path)?;
    let obj = root
        .as_object_mut()
        .ok_or_else(|| anyhow!("preferences root must be a JSON object"))?;
    obj.extend(fields);

    let mut s = serde_json::to_string_pretty(&root).context("serialize preferences")?;
    s.push('\n');
    fs::write(path, s.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    log::info!("Saved preferences to {}", path.display());
    Ok(())
}

fn read_json_or_empty_object(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Ok(Value::Object(Default::default()));
    }

    let bytes = fs::read(path).with_context(|| format!("reading preferences {}", path.display()))?;
    let v: Value =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_as_none() {
        let tmp = TempDir::new().unwrap();
        let loaded = load_optional(&tmp.path().join("nope.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_reads_theme_and_settings() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.json");
        fs::write(&path, r#"{ "theme": "light", "animations": false }"#).unwrap();

        let prefs = load_optional(&path).unwrap().unwrap();
        assert_eq!(prefs.theme, Some(Theme::Light));
        assert!(!prefs.settings.animations);
        assert!(prefs.settings.sound);
    }

    #[test]
    fn bad_value_only_drops_its_own_key() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.json");
        fs::write(
            &path,
            r#"{ "animations": false, "sound": "loud", "theme": "sepia", "lang": "ru" }"#,
        )
        .unwrap();

        let prefs = load_optional(&path).unwrap().unwrap();
        assert_eq!(prefs.theme, None);
        assert!(!prefs.settings.animations);
        assert!(prefs.settings.sound);
        assert_eq!(prefs.settings.other.get("lang"), Some(&Value::from("ru")));
        assert!(!prefs.settings.other.contains_key("theme"));
    }

    #[test]
    fn config_path_lookup_order() {
        let saved = [CONFIG_ENV, "APPDATA", "HOME"].map(|k| (k, env::var_os(k)));
        let tmp = TempDir::new().unwrap();

        env::set_var(CONFIG_ENV, tmp.path().join("explicit.json"));
        assert_eq!(resolve_config_path(), Some(tmp.path().join("explicit.json")));

        env::set_var(CONFIG_ENV, "   ");
        env::set_var("APPDATA", tmp.path().join("appdata"));
        env::set_var("HOME", tmp.path().join("home"));
        assert_eq!(
            resolve_config_path(),
            Some(tmp.path().join("appdata").join("sitenav").join("config.json"))
        );

        env::remove_var(CONFIG_ENV);
        env::remove_var("APPDATA");
        assert_eq!(
            resolve_config_path(),
            Some(
                tmp.path()
                    .join("home")
                    .join(".config")
                    .join("sitenav")
                    .join("config.json")
            )
        );

        env::remove_var("HOME");
        assert_eq!(resolve_config_path(), None);

        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }

    #[test]
    fn load_rejects_garbage() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();
        assert!(load_optional(&path).is_err());
    }

    #[test]
    fn patch_preserves_other_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("prefs.json");
        patch(&path, json!({ "sound": true, "custom": [1, 2] }).as_object().unwrap().clone())
            .unwrap();
        patch(&path, json!({ "sound": false }).as_object().unwrap().clone()).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, json!({ "sound": false, "custom": [1, 2] }));
    }

    #[test]
    fn patch_refuses_non_object_root() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(patch(&path, Map::new()).is_err());
    }
}
