use super::theme_preference::ThemePreference;
use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::time::Duration;

/// How long a toast stays on screen unless configured otherwise.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 2000;

/// Represents all user prefs. Intended for saving to a file, editing in a settings dialog, etc.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPrefs {
    theme_preference: ThemePreference,
    toast_duration_ms: u64,
}

impl UserPrefs {
    pub fn new(theme_preference: ThemePreference, toast_duration_ms: u64) -> Self {
        Self {
            theme_preference,
            toast_duration_ms,
        }
    }

    pub fn theme_preference(&self) -> ThemePreference {
        self.theme_preference
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Builds prefs from environment variables, with in-code defaults.
    ///
    /// # Environment Variables
    /// - `CONVERTER_THEME`: "system", "light" or "dark".
    /// - `CONVERTER_TOAST_MS`: toast display time in milliseconds; must be > 0.
    pub fn from_env() -> Self {
        let toast_duration_ms = env::var("CONVERTER_TOAST_MS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TOAST_DURATION_MS);

        Self {
            theme_preference: ThemePreference::from_env(),
            toast_duration_ms,
        }
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_json() {
        let prefs: UserPrefs =
            serde_json::from_str(r#"{"theme_preference":"dark","toast_duration_ms":3500}"#)
                .unwrap();
        assert_eq!(prefs, UserPrefs::new(ThemePreference::Dark, 3500));
        assert_eq!(prefs.toast_duration(), Duration::from_millis(3500));
    }

    #[test]
    fn serializes_round_trip() {
        let prefs = UserPrefs::new(ThemePreference::Light, 1500);
        let json = serde_json::to_string(&prefs).unwrap();
        assert!(json.contains(r#""theme_preference":"light""#));
        assert_eq!(serde_json::from_str::<UserPrefs>(&json).unwrap(), prefs);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let result = serde_json::from_str::<UserPrefs>(r#"{"theme_preference":"sepia"}"#);
        assert!(result.is_err());
    }
}
