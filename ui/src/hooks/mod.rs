pub mod use_prefers_dark;
