//! Themes that ship with brandkit.
use std::sync::Arc;

use color_generator::{BrandColor, ColorPalette};

use crate::registry::ThemeRegistry;
use crate::theme::{ComponentRef, Components, RadiusStyle, Theme, TypographyStyle};
use crate::theme_generator::{build_theme, ThemeParams};
use crate::Result;

fn palette(entries: &[(&str, &str)]) -> ColorPalette {
    entries
        .iter()
        .map(|(role, value)| (role.to_string(), value.to_string()))
        .collect()
}

fn tags(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

fn default_theme() -> ThemeParams {
    ThemeParams {
        name: Some("Default".to_string()),
        description: Some("Neutral slate and blue, light first".to_string()),
        category: Some("neutral".to_string()),
        tags: tags(&["light", "minimal", "blue"]),
        brand_colors: vec![
            BrandColor::new("Blue", "#2563eb").primary(),
            BrandColor::new("Slate", "#64748b").secondary(),
            BrandColor::new("Amber", "#f59e0b").accent(),
        ],
        ..Default::default()
    }
}

fn midnight_theme() -> ThemeParams {
    // Dark surfaces in both modes
    let surfaces = palette(&[("background", "#0b1120"), ("text", "#e2e8f0")]);

    ThemeParams {
        name: Some("Midnight".to_string()),
        description: Some("Deep navy surfaces with indigo and cyan highlights".to_string()),
        category: Some("dark".to_string()),
        tags: tags(&["dark", "technical", "indigo"]),
        brand_colors: vec![
            BrandColor::new("Indigo", "#6366f1").primary(),
            BrandColor::new("Cyan", "#22d3ee").accent(),
        ],
        locked_light: surfaces.clone(),
        locked_dark: surfaces,
        radius: RadiusStyle::Sharp,
        typography: TypographyStyle::Technical,
        ..Default::default()
    }
}

fn agency_theme() -> ThemeParams {
    let components: Components = [
        ("hero", "agency/HeroBanner"),
        ("navigation", "agency/Navigation"),
        ("footer", "agency/Footer"),
    ]
    .iter()
    .map(|(slot, component)| (slot.to_string(), Some(ComponentRef(component.to_string()))))
    .collect();

    ThemeParams {
        name: Some("Agency".to_string()),
        description: Some("Brand forward navy and coral with custom layout pieces".to_string()),
        category: Some("agency".to_string()),
        tags: tags(&["bold", "marketing", "coral"]),
        brand_colors: vec![
            BrandColor::new("Navy", "#1A2B5F").primary(),
            BrandColor::new("Slate", "#708090").secondary(),
            BrandColor::new("Coral", "#FF6B6B").accent(),
        ],
        temperature: Some(1.6),
        radius: RadiusStyle::Pill,
        typography: TypographyStyle::Classic,
        components,
        ..Default::default()
    }
}

/// Registers `default`, `midnight` and `agency`. Already registered ids are
/// left alone, so calling this twice is harmless.
pub fn register_builtin_themes(registry: &ThemeRegistry) -> Result<Vec<Arc<Theme>>> {
    [default_theme(), midnight_theme(), agency_theme()]
        .into_iter()
        .map(|params| build_theme(params).map(|theme| registry.register(theme)))
        .collect()
}
