//! Three-way theme support: Auto (system) / Light / Dark.
//!
//! The user's *preference* is what gets persisted; the *resolved theme* is
//! what gets applied to the document. In Auto the resolved theme follows the
//! `prefers-color-scheme` media query, so a system switch re-resolves without
//! touching the stored preference.

use crate::util;

pub const STORAGE_KEY: &str = "portfolio-theme-preference";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Auto,
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Auto => "auto",
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parses a stored value; anything unrecognized falls back to `None` so
    /// a corrupted store key behaves like a fresh visit.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "auto" => Some(ThemePreference::Auto),
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    /// Auto -> Light -> Dark -> Auto.
    pub fn cycle(self) -> Self {
        match self {
            ThemePreference::Auto => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Auto,
        }
    }

    pub fn resolve(self, system_prefers_dark: bool) -> Theme {
        match self {
            ThemePreference::Auto => {
                if system_prefers_dark {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            }
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
        }
    }

    /// Tooltip text for the toggle button.
    pub fn label(self, resolved: Theme) -> String {
        match self {
            ThemePreference::Auto => format!(
                "Auto (System: {})",
                if resolved == Theme::Dark { "Dark" } else { "Light" }
            ),
            ThemePreference::Light => "Light".to_string(),
            ThemePreference::Dark => "Dark".to_string(),
        }
    }
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// `theme-color` meta value for mobile browser chrome.
    pub fn meta_color(self) -> &'static str {
        match self {
            Theme::Light => "#F8F9FA",
            Theme::Dark => "#070A0D",
        }
    }
}

/// Stored preference, or Auto when nothing (or garbage) is stored: a fresh
/// visit honors the system preference until the user makes an explicit choice.
pub fn load_preference() -> ThemePreference {
    util::local_storage()
        .and_then(|s| s.get_item(STORAGE_KEY).ok())
        .flatten()
        .and_then(|raw| ThemePreference::parse(&raw))
        .unwrap_or_default()
}

/// Persists an explicit user choice. Never called on startup, so a user who
/// never touched the toggle keeps following the system preference.
pub fn store_preference(pref: ThemePreference) {
    if let Some(storage) = util::local_storage() {
        let _ = storage.set_item(STORAGE_KEY, pref.as_str());
    }
}

pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Applies a resolved theme: `data-theme` on the document element plus the
/// `theme-color` meta tag.
pub fn apply(theme: Theme) {
    let Some(doc) = util::document() else {
        return;
    };
    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Ok(Some(meta)) = doc.query_selector("meta[name=\"theme-color\"]") {
        let _ = meta.set_attribute("content", theme.meta_color());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_all_three_modes_and_wraps() {
        let start = ThemePreference::Auto;
        let once = start.cycle();
        let twice = once.cycle();
        let thrice = twice.cycle();
        assert_eq!(once, ThemePreference::Light);
        assert_eq!(twice, ThemePreference::Dark);
        assert_eq!(thrice, start);
    }

    #[test]
    fn auto_resolves_to_the_system_preference() {
        assert_eq!(ThemePreference::Auto.resolve(true), Theme::Dark);
        assert_eq!(ThemePreference::Auto.resolve(false), Theme::Light);
    }

    #[test]
    fn explicit_choices_ignore_the_system_preference() {
        assert_eq!(ThemePreference::Light.resolve(true), Theme::Light);
        assert_eq!(ThemePreference::Dark.resolve(false), Theme::Dark);
    }

    #[test]
    fn stored_values_round_trip_and_garbage_is_rejected() {
        for pref in [ThemePreference::Auto, ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(ThemePreference::parse(pref.as_str()), Some(pref));
        }
        assert_eq!(ThemePreference::parse("solarized"), None);
        assert_eq!(ThemePreference::parse(""), None);
    }
}
