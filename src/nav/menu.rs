use std::fmt;
use std::rc::Rc;

use anyhow::Result;
use serde::Serialize;

/// Side effect run when an action item is activated.
pub type Callback = Rc<dyn Fn() -> Result<()>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Icon {
    Named { name: &'static str },
    StatusIndicator { color: String, pulse: bool },
}

impl Icon {
    pub const fn named(name: &'static str) -> Self {
        Icon::Named { name }
    }
}

#[derive(Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavigationItem {
    Link {
        icon: Icon,
        text: String,
        href: String,
        external: bool,
    },
    Action {
        key: &'static str,
        icon: Icon,
        #[serde(skip_serializing_if = "Option::is_none")]
        end_icon: Option<Icon>,
        text: String,
        #[serde(skip)]
        on_click: Callback,
    },
    Divider,
}

impl NavigationItem {
    pub fn text(&self) -> Option<&str> {
        match self {
            NavigationItem::Link { text, .. } | NavigationItem::Action { text, .. } => Some(text),
            NavigationItem::Divider => None,
        }
    }

    /// Runs the item's callback. Links and dividers have nothing to run.
    pub fn activate(&self) -> Result<()> {
        match self {
            NavigationItem::Action { on_click, .. } => on_click(),
            NavigationItem::Link { .. } | NavigationItem::Divider => Ok(()),
        }
    }
}

impl fmt::Debug for NavigationItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationItem::Link {
                icon,
                text,
                href,
                external,
            } => f
                .debug_struct("Link")
                .field("icon", icon)
                .field("text", text)
                .field("href", href)
                .field("external", external)
                .finish(),
            NavigationItem::Action {
                key,
                icon,
                end_icon,
                text,
                ..
            } => f
                .debug_struct("Action")
                .field("key", key)
                .field("icon", icon)
                .field("end_icon", end_icon)
                .field("text", text)
                .finish_non_exhaustive(),
            NavigationItem::Divider => f.write_str("Divider"),
        }
    }
}

/// Ordered groups of items; groups are drawn visually apart.
pub type NavigationItems = Vec<Vec<NavigationItem>>;

#[derive(Debug, Clone, Serialize)]
pub struct Menus {
    pub menu: NavigationItems,
    pub settings: NavigationItems,
}

impl Menus {
    pub fn find_action(&self, key: &str) -> Option<&NavigationItem> {
        self.settings
            .iter()
            .chain(&self.menu)
            .flatten()
            .find(|item| matches!(item, NavigationItem::Action { key: k, .. } if *k == key))
    }
}
