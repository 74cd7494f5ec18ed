//! Theme - the fixed, ordered set of page themes
//!
//! Identifiers are opaque to the gallery: the stylesheet keys its palettes
//! off `data-theme` on the document root.

use std::fmt;

use dioxus::core::spawn_forever;
use dioxus::logger::tracing::{debug, warn};

use crate::error::{GalleryError, Result};
use crate::storage::KeyValueStore;

pub const THEME_KEY: &str = "bookmarklet-theme";
const TRANSITION_CLASS: &str = "theme-transition";
const TRANSITION_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
    Ocean,
    Sunset,
    Midnight,
}

impl Theme {
    /// Cycle order
    pub const ALL: &[Self] = &[Self::Light, Self::Dark, Self::Ocean, Self::Sunset, Self::Midnight];

    pub const DEFAULT: Self = Self::Dark;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Ocean => "ocean",
            Self::Sunset => "sunset",
            Self::Midnight => "midnight",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == id)
    }

    /// Next theme, wrapping past the end
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted theme, replacing a missing or unknown value with the default.
pub fn restore(store: &mut dyn KeyValueStore) -> Theme {
    let saved = store.get(THEME_KEY);
    if let Some(theme) = saved.as_deref().and_then(Theme::parse) {
        return theme;
    }
    debug!("stored theme {saved:?} is not usable, falling back to {}", Theme::DEFAULT);
    if let Err(err) = store.set(THEME_KEY, Theme::DEFAULT.as_str()) {
        warn!("could not persist default theme: {err}");
    }
    Theme::DEFAULT
}

/// Advance from `current` and persist the result.
pub fn cycle(store: &mut dyn KeyValueStore, current: Theme) -> Theme {
    let next = current.next();
    if let Err(err) = store.set(THEME_KEY, next.as_str()) {
        warn!("could not persist theme: {err}");
    }
    next
}

/// Set `data-theme` on the document root.
///
/// With `transition`, the root also carries the transition class for a
/// moment; its removal runs on a detached timer.
pub fn apply(theme: Theme, transition: bool) -> Result<()> {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or(GalleryError::MissingMount("html"))?;

    if transition {
        let _ = root.class_list().add_1(TRANSITION_CLASS);
        let root = root.clone();
        spawn_forever(async move {
            gloo_timers::future::TimeoutFuture::new(TRANSITION_MS).await;
            let _ = root.class_list().remove_1(TRANSITION_CLASS);
        });
    }

    root.set_attribute("data-theme", theme.as_str())
        .map_err(|err| GalleryError::Thrown(crate::error::js_message(&err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn cycle_is_total_permutation() {
        let mut store = MemoryStore::new();
        for &start in Theme::ALL {
            let mut theme = start;
            for _ in 0..Theme::ALL.len() {
                theme = cycle(&mut store, theme);
                assert_eq!(store.get(THEME_KEY).as_deref(), Some(theme.as_str()));
            }
            assert_eq!(theme, start);
        }
    }

    #[test]
    fn next_wraps() {
        assert_eq!(Theme::Midnight.next(), Theme::Light);
        assert_eq!(Theme::Light.next(), Theme::Dark);
    }

    #[test]
    fn restore_reads_valid_value() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "ocean").unwrap();
        assert_eq!(restore(&mut store), Theme::Ocean);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("ocean"));
    }

    #[test]
    fn restore_corrects_unknown_value() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "neon").unwrap();
        assert_eq!(restore(&mut store), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn restore_fills_missing_value() {
        let mut store = MemoryStore::new();
        assert_eq!(restore(&mut store), Theme::DEFAULT);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn parse_round_trips_identifiers() {
        for &theme in Theme::ALL {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("Dark"), None);
    }
}
