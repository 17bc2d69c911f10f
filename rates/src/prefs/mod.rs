pub mod theme_preference;
pub mod user_prefs;
