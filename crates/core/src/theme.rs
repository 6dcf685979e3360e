//! Light/dark theme preference.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Storage key for the visitor's saved theme.
pub const THEME_PREFERENCE_KEY: &str = "theme-preference";

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Pick the theme to render.
    ///
    /// A saved `"light"` or `"dark"` always wins. Anything else (nothing
    /// saved, or a value we don't recognise) defers to the system hint.
    ///
    /// ```
    /// use quill_core::Theme;
    ///
    /// assert_eq!(Theme::preferred(Some("light"), true), Theme::Light);
    /// assert_eq!(Theme::preferred(None, true), Theme::Dark);
    /// assert_eq!(Theme::preferred(Some("sepia"), false), Theme::Light);
    /// ```
    #[must_use]
    pub fn preferred(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        match stored.and_then(|s| s.parse().ok()) {
            Some(theme) => theme,
            None if system_prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to the `data-theme` attribute and to storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("invalid theme: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_value_overrides_system() {
        assert_eq!(Theme::preferred(Some("light"), true), Theme::Light);
        assert_eq!(Theme::preferred(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn test_system_hint_when_nothing_stored() {
        assert_eq!(Theme::preferred(None, true), Theme::Dark);
        assert_eq!(Theme::preferred(None, false), Theme::Light);
    }

    #[test]
    fn test_unrecognised_stored_value_is_ignored() {
        assert_eq!(Theme::preferred(Some("DARK"), false), Theme::Light);
        assert_eq!(Theme::preferred(Some(""), true), Theme::Dark);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("auto".parse::<Theme>().is_err());
    }
}
