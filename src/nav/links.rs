use super::menu::{Icon, NavigationItem, NavigationItems};

pub struct LinkSpec {
    pub icon: &'static str,
    pub text: &'static str,
    pub href: &'static str,
    pub external: bool,
}

const fn page(icon: &'static str, text: &'static str, href: &'static str) -> LinkSpec {
    LinkSpec {
        icon,
        text,
        href,
        external: false,
    }
}

const fn profile(icon: &'static str, text: &'static str, href: &'static str) -> LinkSpec {
    LinkSpec {
        icon,
        text,
        href,
        external: true,
    }
}

pub const PAGES: [LinkSpec; 5] = [
    page("feather:home", "Главная", "/"),
    page("feather:edit-3", "Блог", "/blog"),
    page("feather:copy", "Проекты", "/projects"),
    page("feather:clock", "Таймлайн", "/timeline"),
    page("feather:link", "Резюме", "/resume"),
];

pub const PROFILES: [LinkSpec; 4] = [
    profile("feather:send", "Телеграм", "https://t.me/sh1zicus"),
    profile("feather:user", "Вконтакте", "https://vk.com/che_tam_s_bashkoj"),
    profile("feather:git-pull-request", "Codeberg", "https://codeberg.org/sh1zicus"),
    profile("feather:github", "GitHub", "https://github.com/sh1zicus"),
];

pub const STATUS_TEXT: &str = "Статус";
pub const STATUS_HREF: &str = "/status";

impl LinkSpec {
    pub fn to_item(&self) -> NavigationItem {
        NavigationItem::Link {
            icon: Icon::named(self.icon),
            text: self.text.to_string(),
            href: self.href.to_string(),
            external: self.external,
        }
    }
}

pub fn static_menu() -> NavigationItems {
    [&PAGES[..], &PROFILES[..]]
        .iter()
        .map(|group| group.iter().map(LinkSpec::to_item).collect())
        .collect()
}
