use std::sync::Arc;

use color_generator::{
    generate_theme_palettes, lightness_ramp, relative_luminance, AccessibilityLevel, BrandColor,
    ColorPalette, ContrastMatrix, ThemePaletteOptions,
};
use tracing::debug;

use crate::css::{is_valid_role_name, theme_css};
use crate::registry::ThemeRegistry;
use crate::theme::{
    default_shadows, default_spacing, empty_components, Components, RadiusStyle, Theme,
    ThemeMetadata, ThemeTokens, TypographyStyle,
};
use crate::{slug, Error, Result};

pub const DEFAULT_NAME: &str = "Custom Theme";
pub const DEFAULT_PRIMARY: &str = "#1A2B5F";
pub const DEFAULT_ACCENT: &str = "#FF6B6B";
pub const DEFAULT_CATEGORY: &str = "custom";
pub const DEFAULT_TEMPERATURE: f32 = 1.2;
pub const MAX_TEMPERATURE: f32 = color_generator::MAX_TEMPERATURE;

/// Everything `generate_theme` takes. Unset fields fall back to defaults.
///
/// The shorthand `primary_color`/`secondary_color`/`accent_color` fields are
/// only used to build brand colors when `brand_colors` is empty. They also
/// pick the bases for the `primary-*` and `accent-*` ramps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub brand_colors: Vec<BrandColor>,
    pub temperature: Option<f32>,
    pub accessibility_level: AccessibilityLevel,
    pub locked_light: ColorPalette,
    pub locked_dark: ColorPalette,
    pub light_matrix: Option<ContrastMatrix>,
    pub dark_matrix: Option<ContrastMatrix>,
    pub radius: RadiusStyle,
    pub typography: TypographyStyle,
    /// Slot bindings layered over the empty default slots.
    pub components: Components,
}

impl ThemeParams {
    fn brand_colors(&self) -> Vec<BrandColor> {
        if !self.brand_colors.is_empty() {
            return self.brand_colors.clone();
        }

        let mut colors = vec![BrandColor::new("primary", &self.primary_base()).primary()];
        if let Some(secondary) = &self.secondary_color {
            colors.push(BrandColor::new("secondary", secondary).secondary());
        }
        colors.push(BrandColor::new("accent", &self.accent_base()).accent());
        colors
    }

    fn primary_base(&self) -> String {
        self.primary_color
            .clone()
            .or_else(|| {
                self.brand_colors
                    .iter()
                    .find(|c| c.is_primary)
                    .map(|c| c.value.clone())
            })
            .unwrap_or_else(|| DEFAULT_PRIMARY.to_string())
    }

    fn accent_base(&self) -> String {
        self.accent_color
            .clone()
            .or_else(|| {
                self.brand_colors
                    .iter()
                    .find(|c| c.is_accent)
                    .map(|c| c.value.clone())
            })
            .unwrap_or_else(|| DEFAULT_ACCENT.to_string())
    }

    fn verify(&self) -> Result<()> {
        let mut colors: Vec<(&str, &str)> = vec![];

        for (field, value) in [
            ("primary_color", &self.primary_color),
            ("secondary_color", &self.secondary_color),
            ("accent_color", &self.accent_color),
        ] {
            if let Some(value) = value {
                colors.push((value.as_str(), field));
            }
        }
        for color in &self.brand_colors {
            colors.push((color.value.as_str(), "brand colors"));
        }
        for value in self.locked_light.values() {
            colors.push((value.as_str(), "locked light colors"));
        }
        for value in self.locked_dark.values() {
            colors.push((value.as_str(), "locked dark colors"));
        }

        if let Some((color, context)) = colors
            .into_iter()
            .find(|(color, _)| relative_luminance(color).is_err())
        {
            return Err(Error::invalid_color(color, context));
        }

        let roles = self
            .locked_light
            .keys()
            .map(|role| (role, "locked light colors"))
            .chain(self.locked_dark.keys().map(|role| (role, "locked dark colors")))
            .chain(
                [&self.light_matrix, &self.dark_matrix]
                    .into_iter()
                    .flatten()
                    .flat_map(|m| m.nodes.iter())
                    .map(|role| (role, "contrast matrix nodes")),
            );
        for (role, context) in roles {
            if !is_valid_role_name(role) {
                return Err(Error::invalid_role_name(role, context));
            }
        }

        if let Some(temperature) = self.temperature {
            if !(0.0..=MAX_TEMPERATURE).contains(&temperature) {
                return Err(Error::invalid_temperature(temperature));
            }
        }

        for (mode, matrix) in [("light", &self.light_matrix), ("dark", &self.dark_matrix)] {
            if let Some(problem) = matrix.as_ref().and_then(|m| m.problems().into_iter().next()) {
                return Err(Error::invalid_matrix(mode, &problem));
            }
        }

        Ok(())
    }
}

/// Solves light and dark palettes for `params` and registers the resulting
/// theme under a fresh id derived from its name.
pub fn generate_theme(registry: &ThemeRegistry, params: ThemeParams) -> Result<Arc<Theme>> {
    let theme = build_theme(params)?;
    Ok(registry.register_unique(theme))
}

/// Builds the theme for `params` without registering it. Its id is the slug
/// of its name.
pub fn build_theme(params: ThemeParams) -> Result<Theme> {
    params.verify()?;

    let name = params
        .name
        .clone()
        .unwrap_or_else(|| DEFAULT_NAME.to_string());

    debug!(theme = %name, "generating theme");

    let palettes = generate_theme_palettes(
        &params.brand_colors(),
        &ThemePaletteOptions {
            temperature: params.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            accessibility_level: params.accessibility_level,
            locked_light: params.locked_light.clone(),
            locked_dark: params.locked_dark.clone(),
            light_matrix: params.light_matrix.clone(),
            dark_matrix: params.dark_matrix.clone(),
        },
    );

    let mut colors = palettes.light;
    let mut dark_colors = palettes.dark;

    for (prefix, base) in [
        ("primary", params.primary_base()),
        ("accent", params.accent_base()),
    ] {
        let ramp = lightness_ramp(&base).map_err(|_| Error::invalid_color(&base, prefix))?;

        for (step, value) in ramp {
            let role = format!("{}-{}", prefix, step);
            colors.entry(role.clone()).or_insert_with(|| value.clone());
            dark_colors.entry(role).or_insert(value);
        }
    }

    let mut components = empty_components();
    components.extend(params.components.clone());

    let tokens = ThemeTokens {
        colors,
        dark_colors,
        typography: params.typography.preset(),
        spacing: default_spacing(),
        border_radius: params.radius.preset(),
        shadows: default_shadows(),
    };

    Ok(Theme {
        metadata: ThemeMetadata {
            id: slug::slugify(&name),
            description: params
                .description
                .unwrap_or_else(|| format!("Generated theme for {}", name)),
            name,
            category: params
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            tags: params.tags,
        },
        components,
        css: theme_css(&tokens),
        tokens,
    })
}
