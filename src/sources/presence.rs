//! Presence snapshots in the shape served by Lanyard
//! (`{"success": true, "data": {"discord_status": "online", ...}}`).

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{DiscordStatus, Status};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Wrapped { data: Presence },
    Bare(Presence),
}

#[derive(Debug, Deserialize)]
struct Presence {
    discord_status: DiscordStatus,
}

pub fn parse(json: &str) -> Result<Status> {
    let doc: Document = serde_json::from_str(json).context("parsing presence snapshot")?;
    let presence = match doc {
        Document::Wrapped { data } => data,
        Document::Bare(p) => p,
    };
    Ok(Status::new(presence.discord_status))
}

pub fn load(path: &Path) -> Result<Status> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading presence {}", path.display()))?;
    parse(&json).with_context(|| format!("in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wrapped_document() {
        let json = r#"{
            "success": true,
            "data": { "discord_status": "dnd", "active_on_discord_web": false }
        }"#;
        let status = parse(json).unwrap();
        assert_eq!(status.discord_status, DiscordStatus::Dnd);
        assert!(!status.loading);
        assert_eq!(status.color, DiscordStatus::Dnd.color());
    }

    #[test]
    fn parses_bare_document() {
        let status = parse(r#"{ "discord_status": "idle" }"#).unwrap();
        assert_eq!(status.discord_status, DiscordStatus::Idle);
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(parse(r#"{ "discord_status": "invisible" }"#).is_err());
        assert!(parse(r#"{ "data": {} }"#).is_err());
    }
}
