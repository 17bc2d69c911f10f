use crate::theme::Theme;
use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::str::FromStr;

/// Which color scheme the user wants.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ThemePreference {
    /// Follow the platform's light/dark setting.
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    /// Picks the concrete theme. `system_prefers_dark` is only consulted for
    /// [`ThemePreference::System`].
    pub fn resolve(&self, system_prefers_dark: bool) -> Theme {
        match self {
            Self::System if system_prefers_dark => Theme::Dark,
            Self::System => Theme::Light,
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
        }
    }

    /// Reads `CONVERTER_THEME` ("system", "light" or "dark", any case).
    /// Unset or unrecognized values fall back to `System`.
    pub fn from_env() -> Self {
        env::var("CONVERTER_THEME")
            .ok()
            .and_then(|s| Self::from_str(s.trim()).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_system() {
        assert_eq!(ThemePreference::System.resolve(true), Theme::Dark);
        assert_eq!(ThemePreference::System.resolve(false), Theme::Light);
    }

    #[test]
    fn explicit_choice_ignores_system() {
        assert_eq!(ThemePreference::Light.resolve(true), Theme::Light);
        assert_eq!(ThemePreference::Dark.resolve(false), Theme::Dark);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(ThemePreference::from_str("DARK"), Ok(ThemePreference::Dark));
        assert_eq!(ThemePreference::from_str("Light"), Ok(ThemePreference::Light));
        assert_eq!(ThemePreference::from_str("system"), Ok(ThemePreference::System));
        assert!(ThemePreference::from_str("sepia").is_err());
    }
}
