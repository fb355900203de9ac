//! CSS custom property output for palettes and theme tokens.
use color_generator::ColorPalette;

use crate::theme::ThemeTokens;

/// Whether `role` can be written as a `--role` custom property as is.
pub fn is_valid_role_name(role: &str) -> bool {
    !role.is_empty()
        && role
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Renders every role of `palette` as a custom property inside `selector`.
///
/// ```
/// # use libbrandkit::css::palette_css;
/// # use libbrandkit::color_generator::ColorPalette;
/// let mut palette = ColorPalette::new();
/// palette.insert("background".to_string(), "#ffffff".to_string());
///
/// assert_eq!(palette_css(":root", &palette), ":root {\n  --background: #ffffff;\n}\n");
/// ```
pub fn palette_css(selector: &str, palette: &ColorPalette) -> String {
    let mut css = format!("{} {{\n", selector);

    for (role, value) in palette {
        css.push_str(&format!("  --{}: {};\n", role, value));
    }

    css.push_str("}\n");
    css
}

/// Mode independent tokens: radius, fonts, spacing and shadows.
pub fn tokens_css(selector: &str, tokens: &ThemeTokens) -> String {
    let mut css = format!("{} {{\n", selector);

    css.push_str(&format!("  --radius: {};\n", tokens.border_radius.md));
    css.push_str(&format!("  --radius-sm: {};\n", tokens.border_radius.sm));
    css.push_str(&format!("  --radius-md: {};\n", tokens.border_radius.md));
    css.push_str(&format!("  --radius-lg: {};\n", tokens.border_radius.lg));

    css.push_str(&format!("  --font-sans: {};\n", tokens.typography.font_sans));
    css.push_str(&format!("  --font-heading: {};\n", tokens.typography.font_heading));
    css.push_str(&format!("  --font-mono: {};\n", tokens.typography.font_mono));
    css.push_str(&format!("  --font-size-base: {};\n", tokens.typography.base_size));
    css.push_str(&format!("  --line-height: {};\n", tokens.typography.line_height));

    for (name, value) in &tokens.spacing {
        css.push_str(&format!("  --spacing-{}: {};\n", name, value));
    }

    for (name, value) in &tokens.shadows {
        css.push_str(&format!("  --shadow-{}: {};\n", name, value));
    }

    css.push_str("}\n");
    css
}

/// Full stylesheet for a theme. The light palette is the default and also
/// applies under `.light`, the dark one under `.dark`.
pub fn theme_css(tokens: &ThemeTokens) -> String {
    let mut css = palette_css(":root, .light", &tokens.colors);
    css.push('\n');
    css.push_str(&palette_css(".dark", &tokens.dark_colors));
    css.push('\n');
    css.push_str(&tokens_css(":root", tokens));
    css
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::theme::{default_shadows, default_spacing, RadiusStyle, TypographyStyle};
    use pretty_assertions::assert_eq;

    fn palette(entries: &[(&str, &str)]) -> ColorPalette {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn tokens() -> ThemeTokens {
        ThemeTokens {
            colors: palette(&[("background", "#ffffff"), ("primary", "#1A2B5F")]),
            dark_colors: palette(&[("background", "#0f172a"), ("primary", "#1A2B5F")]),
            typography: TypographyStyle::Modern.preset(),
            spacing: default_spacing(),
            border_radius: RadiusStyle::Sharp.preset(),
            shadows: default_shadows(),
        }
    }

    #[test]
    fn role_names() {
        assert!(is_valid_role_name("primary-foreground"));
        assert!(is_valid_role_name("chart-2"));
        assert!(!is_valid_role_name(""));
        assert!(!is_valid_role_name("Primary"));
        assert!(!is_valid_role_name("x;}body{color:red"));
        assert!(!is_valid_role_name("</style>"));
    }

    #[test]
    fn keeps_palette_order_and_case() {
        let css = palette_css(
            ".brand",
            &palette(&[("primary", "#1A2B5F"), ("background", "#ffffff")]),
        );

        assert_eq!(
            css,
            indoc! {"
                .brand {
                  --primary: #1A2B5F;
                  --background: #ffffff;
                }
            "}
        );
    }

    #[test]
    fn emits_light_and_dark_blocks() {
        let css = theme_css(&tokens());

        let light = css.find(":root, .light {").unwrap();
        let dark = css.find(".dark {").unwrap();
        assert!(light < dark);

        assert!(css[dark..].contains("--background: #0f172a;"));
        assert!(css[light..dark].contains("--background: #ffffff;"));
    }

    #[test]
    fn emits_design_tokens() {
        let css = tokens_css(":root", &tokens());

        assert!(css.contains("  --radius: 0.25rem;\n"));
        assert!(css.contains("  --font-sans: Inter, ui-sans-serif, system-ui, sans-serif;\n"));
        assert!(css.contains("  --font-heading: "));
        assert!(css.contains("  --font-mono: "));
        assert!(css.contains("  --spacing-md: 1rem;\n"));
        assert!(css.contains("  --spacing-2xl: 3rem;\n"));
        assert!(css.contains("  --shadow-sm: "));
    }
}
