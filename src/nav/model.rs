use std::rc::Rc;

use super::links::{self, STATUS_HREF, STATUS_TEXT};
use super::menu::{Icon, Menus, NavigationItem, NavigationItems};
use crate::sources::{Settings, Sources, Theme};

pub const ICON_CHECKED: &str = "feather:check-circle";
pub const ICON_UNCHECKED: &str = "feather:circle";

pub const KEY_ANIMATIONS: &str = "animations";
pub const KEY_SOUND: &str = "sound";

const THEMES: [(Theme, &str, &str, &str); 3] = [
    (Theme::System, "theme-system", "feather:monitor", "Системная тема"),
    (Theme::Light, "theme-light", "feather:sun", "Светлая тема"),
    (Theme::Dark, "theme-dark", "feather:moon", "Темная тема"),
];

/// Builds the menu and settings lists from the current state of `sources`.
///
/// Each collaborator is read once; callbacks on the returned actions are not
/// run here.
pub fn compute_menus(sources: &Sources) -> Menus {
    let settings = sources.settings.get();
    let status = sources.status.status();
    let theme = sources.theme.theme();

    let mut menu = links::static_menu();
    if status.is_visible() {
        log::debug!("status group added ({:?})", status.discord_status);
        menu.push(vec![NavigationItem::Link {
            icon: Icon::StatusIndicator {
                color: status.color,
                pulse: true,
            },
            text: STATUS_TEXT.to_string(),
            href: STATUS_HREF.to_string(),
            external: false,
        }]);
    } else {
        log::debug!(
            "status group omitted (loading={}, status={:?})",
            status.loading,
            status.discord_status
        );
    }

    Menus {
        menu,
        settings: settings_items(sources, &settings, theme),
    }
}

fn settings_items(sources: &Sources, settings: &Settings, theme: Theme) -> NavigationItems {
    let mut group = Vec::with_capacity(6);

    let store = Rc::clone(&sources.settings);
    group.push(NavigationItem::Action {
        key: KEY_ANIMATIONS,
        icon: Icon::named("feather:image"),
        end_icon: Some(Icon::named(check_icon(settings.animations))),
        text: format!("Анимации {}", on_off(settings.animations)),
        on_click: Rc::new(move || {
            store.set(&|s| Settings {
                animations: !s.animations,
                ..s.clone()
            })
        }),
    });

    let store = Rc::clone(&sources.settings);
    group.push(NavigationItem::Action {
        key: KEY_SOUND,
        icon: Icon::named(if settings.sound {
            "feather:volume-2"
        } else {
            "feather:volume-x"
        }),
        end_icon: Some(Icon::named(check_icon(settings.sound))),
        text: format!("Звук {}", on_off(settings.sound)),
        on_click: Rc::new(move || {
            store.set(&|s| Settings {
                sound: !s.sound,
                ..s.clone()
            })
        }),
    });

    group.push(NavigationItem::Divider);

    for (value, key, icon, text) in THEMES {
        let store = Rc::clone(&sources.theme);
        group.push(NavigationItem::Action {
            key,
            icon: Icon::named(icon),
            end_icon: (theme == value).then(|| Icon::named(ICON_CHECKED)),
            text: text.to_string(),
            on_click: Rc::new(move || store.set_theme(value)),
        });
    }

    vec![group]
}

fn check_icon(on: bool) -> &'static str {
    if on {
        ICON_CHECKED
    } else {
        ICON_UNCHECKED
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "Вкл"
    } else {
        "Выкл"
    }
}
