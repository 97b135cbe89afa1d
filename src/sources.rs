use std::fmt;
use std::rc::Rc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod memory;
pub mod prefs_file;
pub mod presence;

/// User preferences kept by the settings store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_true")]
    pub animations: bool,

    #[serde(default = "default_true")]
    pub sound: bool,

    /// Fields owned by someone else; carried through every update untouched.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            animations: true,
            sound: true,
            other: Map::new(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DiscordStatus {
    Online,
    Idle,
    Dnd,
    Offline,
}

impl DiscordStatus {
    pub fn color(self) -> &'static str {
        match self {
            DiscordStatus::Online => "#10b981",
            DiscordStatus::Idle => "#fbbf24",
            DiscordStatus::Dnd => "#ef4444",
            DiscordStatus::Offline => "#6b7280",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub discord_status: DiscordStatus,
    pub loading: bool,
    pub color: String,
}

impl Status {
    pub fn new(discord_status: DiscordStatus) -> Self {
        Self {
            discord_status,
            loading: false,
            color: discord_status.color().to_string(),
        }
    }

    /// Nothing fetched yet.
    pub fn unavailable() -> Self {
        Self {
            loading: true,
            ..Self::new(DiscordStatus::Offline)
        }
    }

    /// Whether the menu should advertise the status page.
    pub fn is_visible(&self) -> bool {
        !self.loading && self.discord_status != DiscordStatus::Offline
    }
}

pub trait SettingsStore {
    fn get(&self) -> Settings;
    /// Replaces the stored settings with `update(current)`.
    fn set(&self, update: &dyn Fn(&Settings) -> Settings) -> Result<()>;
}

pub trait StatusSource {
    fn status(&self) -> Status;
}

pub trait ThemeStore {
    fn theme(&self) -> Theme;
    fn set_theme(&self, theme: Theme) -> Result<()>;
}

/// The three collaborators the navigation model reads from.
#[derive(Clone)]
pub struct Sources {
    pub settings: Rc<dyn SettingsStore>,
    pub status: Rc<dyn StatusSource>,
    pub theme: Rc<dyn ThemeStore>,
}
