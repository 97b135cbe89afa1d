use std::cell::{Cell, RefCell};

use anyhow::Result;

use super::{Settings, SettingsStore, Status, StatusSource, Theme, ThemeStore};

#[derive(Debug, Default)]
pub struct MemorySettings {
    inner: RefCell<Settings>,
}

impl MemorySettings {
    pub fn new(settings: Settings) -> Self {
        Self {
            inner: RefCell::new(settings),
        }
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self) -> Settings {
        self.inner.borrow().clone()
    }

    fn set(&self, update: &dyn Fn(&Settings) -> Settings) -> Result<()> {
        let next = update(&self.inner.borrow());
        *self.inner.borrow_mut() = next;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryTheme {
    inner: Cell<Theme>,
}

impl MemoryTheme {
    pub fn new(theme: Theme) -> Self {
        Self {
            inner: Cell::new(theme),
        }
    }
}

impl ThemeStore for MemoryTheme {
    fn theme(&self) -> Theme {
        self.inner.get()
    }

    fn set_theme(&self, theme: Theme) -> Result<()> {
        self.inner.set(theme);
        Ok(())
    }
}

/// Status source that always reports the same snapshot.
#[derive(Debug, Clone)]
pub struct StaticStatus(pub Status);

impl StatusSource for StaticStatus {
    fn status(&self) -> Status {
        self.0.clone()
    }
}
