use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};

use sitenav::config;
use sitenav::nav::{self, render, NavigationItems};
use sitenav::sources::memory::{MemorySettings, MemoryTheme, StaticStatus};
use sitenav::sources::prefs_file::PrefsFile;
use sitenav::sources::{
    presence, DiscordStatus, SettingsStore, Sources, Status, ThemeStore,
};

#[derive(Parser, Debug)]
#[command(name = "sitenav", version, about = "Site navigation and settings menus")]
struct Cli {
    /// Presence snapshot (Lanyard JSON) used for the status entry.
    #[arg(long, global = true, conflicts_with = "discord_status")]
    presence: Option<PathBuf>,

    /// Presence to assume instead of reading a snapshot.
    #[arg(long, global = true, value_enum)]
    discord_status: Option<DiscordStatus>,

    /// Treat presence as still loading.
    #[arg(long, global = true)]
    loading: bool,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the navigation menu.
    Menu,
    /// Prints the settings menu.
    Settings,
    /// Runs a settings action (e.g. "sound", "theme-dark") and prints the result.
    Activate { key: String },
    /// Prints the preferences path that would be used.
    ConfigPath,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let path = config::resolve_config_path();
    match (&cli.command, &path) {
        (Command::ConfigPath, Some(path)) => {
            println!("{}", path.display());
            return Ok(());
        }
        (Command::ConfigPath, None) => return Ok(()),
        (Command::Activate { .. }, None) => bail!(
            "No preferences path available (set {} or ensure APPDATA/HOME is present)",
            config::CONFIG_ENV
        ),
        _ => {}
    }

    let (settings, theme) = stores(path);
    let sources = Sources {
        settings,
        status: Rc::new(StaticStatus(load_status(&cli)?)),
        theme,
    };

    match &cli.command {
        Command::Menu => print_groups(&nav::compute_menus(&sources).menu, cli.json)?,
        Command::Settings => print_groups(&nav::compute_menus(&sources).settings, cli.json)?,
        Command::Activate { key } => {
            let menus = nav::compute_menus(&sources);
            let item = menus
                .find_action(key)
                .ok_or_else(|| anyhow!("Unknown action '{key}'"))?;
            item.activate().with_context(|| format!("activate '{key}'"))?;
            print_groups(&nav::compute_menus(&sources).settings, cli.json)?;
        }
        Command::ConfigPath => {}
    }

    Ok(())
}

/// Preferences file when there is one, otherwise defaults that are never saved.
fn stores(path: Option<PathBuf>) -> (Rc<dyn SettingsStore>, Rc<dyn ThemeStore>) {
    let Some(path) = path else {
        log::warn!("No preferences path available, showing defaults");
        let settings: Rc<dyn SettingsStore> = Rc::new(MemorySettings::default());
        let theme: Rc<dyn ThemeStore> = Rc::new(MemoryTheme::default());
        return (settings, theme);
    };
    let prefs = Rc::new(PrefsFile::new(path));
    let settings: Rc<dyn SettingsStore> = prefs.clone();
    let theme: Rc<dyn ThemeStore> = prefs;
    (settings, theme)
}

fn load_status(cli: &Cli) -> Result<Status> {
    let status = match (&cli.presence, cli.discord_status) {
        (Some(path), _) => presence::load(path)?,
        (None, Some(discord_status)) => Status::new(discord_status),
        (None, None) => return Ok(Status::unavailable()),
    };
    Ok(Status {
        loading: cli.loading,
        ..status
    })
}

fn print_groups(groups: &NavigationItems, json: bool) -> Result<()> {
    if json {
        let s = serde_json::to_string_pretty(groups).context("serialize menu")?;
        println!("{s}");
    } else {
        print!("{}", render::render_groups(groups));
    }
    Ok(())
}
