//! Light and dark color schemes for the converter screen.

/// A concrete color scheme.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors used by the converter screen. All values are CSS colors.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Style {
    pub background: &'static str,
    pub text: &'static str,
    pub tile_background: &'static str,
    pub tile_text: &'static str,
    pub tile_shadow: &'static str,
    pub selected_tile_background: &'static str,
    pub result_text: &'static str,
    pub input_background: &'static str,
    pub input_border: &'static str,
}

impl Theme {
    /// Returns the scheme's name, e.g. "dark". Used as `data-theme`.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Light => Style {
                background: "#f5f6fa",
                text: "#000000",
                tile_background: "#ffffff",
                tile_text: "#2d3436",
                tile_shadow: "#333333",
                selected_tile_background: "#ffeaa7",
                result_text: "#000000",
                input_background: "#ffffff",
                input_border: "#2d3436",
            },
            Self::Dark => Style {
                background: "#515151",
                text: "#ffffff",
                tile_background: "#3d3d3d",
                tile_text: "#ffffff",
                tile_shadow: "#000000",
                selected_tile_background: "#ffeaa7",
                result_text: "#ffffff",
                input_background: "#ffffff",
                input_border: "#000000",
            },
        }
    }
}

impl Style {
    /// Renders the colors as CSS custom properties for the app stylesheet.
    ///
    /// The selected tile keeps a light background in both schemes, so its
    /// label is always drawn dark.
    pub fn to_css_vars(&self) -> String {
        let Style {
            background,
            text,
            tile_background,
            tile_text,
            tile_shadow,
            selected_tile_background,
            result_text,
            input_background,
            input_border,
        } = self;

        format!(
            r#":root {{
    --cc-background: {background};
    --cc-text: {text};
    --cc-tile-background: {tile_background};
    --cc-tile-text: {tile_text};
    --cc-tile-shadow: {tile_shadow};
    --cc-selected-tile-background: {selected_tile_background};
    --cc-selected-tile-text: #2d3436;
    --cc-result-text: {result_text};
    --cc-input-background: {input_background};
    --cc-input-border: {input_border};
}}
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn tile_text_follows_scheme() {
        assert_eq!(Theme::Light.style().tile_text, "#2d3436");
        assert_eq!(Theme::Dark.style().tile_text, "#ffffff");
    }

    #[test]
    fn selected_tile_is_highlighted_in_every_scheme() {
        for theme in Theme::iter() {
            let style = theme.style();
            assert_eq!(style.selected_tile_background, "#ffeaa7");
            assert_ne!(style.selected_tile_background, style.tile_background);
        }
    }

    #[test]
    fn css_vars_contain_every_color() {
        let style = Theme::Dark.style();
        let css = style.to_css_vars();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--cc-background: #515151;"));
        assert!(css.contains("--cc-tile-text: #ffffff;"));
        assert!(css.contains("--cc-selected-tile-background: #ffeaa7;"));
        assert!(css.trim_end().ends_with('}'));
    }

    #[test]
    fn names() {
        assert_eq!(Theme::Light.name(), "light");
        assert_eq!(Theme::Dark.name(), "dark");
    }
}
