use super::menu::{Icon, NavigationItem, NavigationItems};

const RULE: &str = "────────";

pub fn render_groups(groups: &NavigationItems) -> String {
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for item in group {
            out.push_str(&item_line(item));
            out.push('\n');
        }
    }
    out
}

fn item_line(item: &NavigationItem) -> String {
    match item {
        NavigationItem::Link {
            icon,
            text,
            href,
            external,
        } => {
            let arrow = if *external { "↗" } else { "→" };
            format!("{}  {text}  {arrow} {href}", icon_label(icon))
        }
        NavigationItem::Action {
            key,
            icon,
            end_icon: Some(end),
            text,
            ..
        } => format!("{}  {text}  {}  [{key}]", icon_label(icon), icon_label(end)),
        NavigationItem::Action {
            key,
            icon,
            end_icon: None,
            text,
            ..
        } => format!("{}  {text}  [{key}]", icon_label(icon)),
        NavigationItem::Divider => RULE.to_string(),
    }
}

fn icon_label(icon: &Icon) -> String {
    match icon {
        Icon::Named { name } => format!("<{}>", name.strip_prefix("feather:").unwrap_or(*name)),
        Icon::StatusIndicator { color, .. } => format!("● {color}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::model::compute_menus;
    use crate::sources::memory::{MemorySettings, MemoryTheme, StaticStatus};
    use crate::sources::{DiscordStatus, Settings, Sources, Status, Theme};
    use std::rc::Rc;

    fn sources(status: Status, theme: Theme) -> Sources {
        Sources {
            settings: Rc::new(MemorySettings::new(Settings::default())),
            status: Rc::new(StaticStatus(status)),
            theme: Rc::new(MemoryTheme::new(theme)),
        }
    }

    #[test]
    fn menu_lists_links_by_group() {
        let menus = compute_menus(&sources(Status::new(DiscordStatus::Online), Theme::System));
        let text = render_groups(&menus.menu);
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "<home>  Главная  → /");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "<send>  Телеграм  ↗ https://t.me/sh1zicus");
        assert_eq!(
            lines.last().copied(),
            Some("● #10b981  Статус  → /status")
        );
    }

    #[test]
    fn settings_mark_only_the_active_theme() {
        let menus = compute_menus(&sources(Status::unavailable(), Theme::Light));
        let text = render_groups(&menus.settings);
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "<image>  Анимации Вкл  <check-circle>  [animations]");
        assert_eq!(lines[2], RULE);
        assert_eq!(lines[3], "<monitor>  Системная тема  [theme-system]");
        assert_eq!(lines[4], "<sun>  Светлая тема  <check-circle>  [theme-light]");
        assert_eq!(lines[5], "<moon>  Темная тема  [theme-dark]");
    }
}
