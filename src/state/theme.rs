//! Process-wide light/dark theme with persistence and change notification.
//!
//! DESIGN
//! ======
//! The store owns the active `Theme` and a list of observers. `toggle`
//! persists first, then notifies every observer, then returns, so any view
//! reading the theme afterwards sees the new value. Storage failures are
//! logged and the theme keeps working in memory.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::util::storage::SharedStore;

/// Visual theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything unrecognized is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Label for the toggle button, naming the theme a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "🌙 Dark",
            Self::Dark => "☀️ Light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle returned by `ThemeStore::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(Theme)>;

/// Owner of the active theme.
pub struct ThemeStore {
    theme: Theme,
    storage: SharedStore,
    key: String,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme)
            .field("key", &self.key)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    /// Build the store from the persisted preference under `key`, defaulting
    /// to `Theme::Light`.
    pub fn load(storage: SharedStore, key: impl Into<String>) -> Self {
        let key = key.into();
        let theme = match storage.get_item(&key) {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
                log::warn!("ignoring unknown theme {raw:?} under {key}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("theme preference unreadable, using default: {e}");
                Theme::default()
            }
        };
        Self { theme, storage, key, observers: Vec::new(), next_id: 0 }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme, persist it, and notify observers.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled())
    }

    /// Switch to `theme`, persist it, and notify observers.
    pub fn set(&mut self, theme: Theme) -> Theme {
        self.theme = theme;
        if let Err(e) = self.storage.set_item(&self.key, theme.as_str()) {
            log::warn!("theme {theme} not persisted: {e}");
        }
        for (_, observer) in &self.observers {
            observer(theme);
        }
        theme
    }

    /// Register `observer` to be called with the new theme after each change.
    pub fn subscribe(&mut self, observer: impl Fn(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
