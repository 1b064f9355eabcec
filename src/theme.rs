use serde::Deserialize;

const SANS: &str = r#""Helvetica Neue", Helvetica, Arial, sans-serif"#;
const SERIF: &str = r#""Times New Roman", Times, Georgia, serif"#;

/// Visual preset shared by the gate page and the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Classic,
    Serif,
    Minimal,
    Compact,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeTokens {
    pub body_font: &'static str,
    pub heading_font: &'static str,
    pub accent: &'static str,
    pub accent_hover: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub surface: &'static str,
    pub field_height_px: u16,
    pub gap_px: u16,
}

impl Theme {
    pub fn tokens(self) -> ThemeTokens {
        let classic = ThemeTokens {
            body_font: SANS,
            heading_font: SERIF,
            accent: "#8b7355",
            accent_hover: "#6d5a44",
            success: "#2d6a4f",
            error: "#c53030",
            text: "#1a1a1a",
            muted: "#888888",
            border: "#c9c9c9",
            surface: "#f8f8f7",
            field_height_px: 44,
            gap_px: 12,
        };

        match self {
            Theme::Classic => classic,
            Theme::Serif => ThemeTokens {
                body_font: SERIF,
                heading_font: SERIF,
                accent: "#5c4a36",
                accent_hover: "#46382a",
                surface: "#f7f6f3",
                ..classic
            },
            Theme::Minimal => ThemeTokens {
                heading_font: SANS,
                accent: "#1a1a1a",
                accent_hover: "#333333",
                border: "#e0e0e0",
                surface: "#ffffff",
                ..classic
            },
            Theme::Compact => ThemeTokens {
                field_height_px: 38,
                gap_px: 8,
                ..classic
            },
        }
    }

    /// CSS custom properties read by the page-level stylesheets.
    pub fn stylesheet(self) -> String {
        let t = self.tokens();
        let vars = [
            ("body-font", t.body_font.to_string()),
            ("heading-font", t.heading_font.to_string()),
            ("accent", t.accent.to_string()),
            ("accent-hover", t.accent_hover.to_string()),
            ("success", t.success.to_string()),
            ("error", t.error.to_string()),
            ("text", t.text.to_string()),
            ("muted", t.muted.to_string()),
            ("border", t.border.to_string()),
            ("surface", t.surface.to_string()),
            ("field-height", format!("{}px", t.field_height_px)),
            ("gap", format!("{}px", t.gap_px)),
        ];

        let mut css = String::from(":root {\n");
        for (name, value) in vars {
            css.push_str(&format!("  --rs-{}: {};\n", name, value));
        }
        css.push_str("}\n");
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_only_tightens_spacing() {
        let classic = Theme::Classic.tokens();
        let compact = Theme::Compact.tokens();
        assert!(compact.field_height_px < classic.field_height_px);
        assert!(compact.gap_px < classic.gap_px);
        assert_eq!(compact.accent, classic.accent);
    }

    #[test]
    fn stylesheet_carries_theme_values() {
        let css = Theme::Serif.stylesheet();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--rs-accent: #5c4a36;"));
        assert!(css.contains("--rs-field-height: 44px;"));
        assert!(css.contains("Times New Roman"));
    }
}
