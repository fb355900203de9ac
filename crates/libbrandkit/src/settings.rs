use std::path::{Path, PathBuf};

use color_generator::{AccessibilityLevel, BrandColor, ColorPalette, ContrastMatrix};

use crate::css::is_valid_role_name;
use crate::theme::{Components, RadiusStyle, TypographyStyle};
use crate::theme_generator::{ThemeParams, DEFAULT_TEMPERATURE, MAX_TEMPERATURE};
use crate::{Error, Result, SETTINGS_FILE_NAME};

/// Content of the `brandkit.yaml` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub brand_colors: Vec<BrandColor>,
    pub temperature: f32,
    pub accessibility_level: AccessibilityLevel,
    pub locked: PerMode<ColorPalette>,
    pub contrast_matrix: PerMode<Option<ContrastMatrix>>,
    pub radius: RadiusStyle,
    pub typography: TypographyStyle,
    pub components: Components,
}

/// A value with a light and a dark variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerMode<T> {
    pub light: T,
    pub dark: T,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            name: "Brand".to_string(),
            description: None,
            category: None,
            tags: vec![],
            brand_colors: vec![],
            temperature: DEFAULT_TEMPERATURE,
            accessibility_level: AccessibilityLevel::AA,
            locked: PerMode::default(),
            contrast_matrix: PerMode::default(),
            radius: RadiusStyle::default(),
            typography: TypographyStyle::default(),
            components: Components::new(),
        }
    }
}

impl Settings {
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Ok(Settings::default());
        }

        serde_yaml::from_str::<Settings>(input).map_err(|e| {
            Error::from_serde_yaml(
                e,
                format!("Invalid {}", SETTINGS_FILE_NAME),
                Some(PathBuf::from(SETTINGS_FILE_NAME)),
            )
        })
    }

    /// Starter settings file written by `brandkit init`.
    pub fn template(name: &str) -> String {
        formatdoc! {r##"
            ---
            name: {name}
            description: {name} brand theme
            category: custom
            tags: []

            brand_colors:
              - name: Primary
                value: "#1A2B5F"
                primary: true
              - name: Secondary
                value: "#708090"
                secondary: true
              - name: Accent
                value: "#FF6B6B"
                accent: true

            # How many candidate variants to explore, from 0 to {max}
            temperature: {temperature}
            accessibility_level: AA

            # Roles listed here are used as is
            locked:
              light: {{}}
              dark: {{}}

            radius: rounded
            typography: modern
            "##,
            name = name,
            max = MAX_TEMPERATURE,
            temperature = DEFAULT_TEMPERATURE,
        }
    }

    pub fn verify(&self, errors: &mut Vec<Error>) {
        self.verify_colors(errors);
        self.verify_role_names(errors);
        self.verify_temperature(errors);
        self.verify_matrices(errors);
    }

    fn verify_colors(&self, errors: &mut Vec<Error>) {
        let brand = self
            .brand_colors
            .iter()
            .map(|c| (c.value.as_str(), "brand_colors"));
        let light = self
            .locked
            .light
            .values()
            .map(|v| (v.as_str(), "locked.light"));
        let dark = self
            .locked
            .dark
            .values()
            .map(|v| (v.as_str(), "locked.dark"));

        for (color, context) in brand.chain(light).chain(dark) {
            if color_generator::relative_luminance(color).is_err() {
                errors.push(
                    Error::invalid_color(color, context).in_file(Path::new(SETTINGS_FILE_NAME)),
                );
            }
        }
    }

    fn verify_role_names(&self, errors: &mut Vec<Error>) {
        let light = self.locked.light.keys().map(|r| (r, "locked.light"));
        let dark = self.locked.dark.keys().map(|r| (r, "locked.dark"));
        let light_nodes = self
            .contrast_matrix
            .light
            .iter()
            .flat_map(|m| m.nodes.iter())
            .map(|r| (r, "contrast_matrix.light"));
        let dark_nodes = self
            .contrast_matrix
            .dark
            .iter()
            .flat_map(|m| m.nodes.iter())
            .map(|r| (r, "contrast_matrix.dark"));

        for (role, context) in light.chain(dark).chain(light_nodes).chain(dark_nodes) {
            if !is_valid_role_name(role) {
                errors.push(
                    Error::invalid_role_name(role, context).in_file(Path::new(SETTINGS_FILE_NAME)),
                );
            }
        }
    }

    fn verify_temperature(&self, errors: &mut Vec<Error>) {
        if !(0.0..=MAX_TEMPERATURE).contains(&self.temperature) {
            errors.push(
                Error::invalid_temperature(self.temperature).in_file(Path::new(SETTINGS_FILE_NAME)),
            );
        }
    }

    fn verify_matrices(&self, errors: &mut Vec<Error>) {
        for (mode, matrix) in [
            ("light", &self.contrast_matrix.light),
            ("dark", &self.contrast_matrix.dark),
        ] {
            if let Some(matrix) = matrix {
                for problem in matrix.problems() {
                    errors.push(
                        Error::invalid_matrix(mode, &problem).in_file(Path::new(SETTINGS_FILE_NAME)),
                    );
                }
            }
        }
    }

    pub fn theme_params(&self) -> ThemeParams {
        ThemeParams {
            name: Some(self.name.clone()),
            description: self.description.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            brand_colors: self.brand_colors.clone(),
            temperature: Some(self.temperature),
            accessibility_level: self.accessibility_level,
            locked_light: self.locked.light.clone(),
            locked_dark: self.locked.dark.clone(),
            light_matrix: self.contrast_matrix.light.clone(),
            dark_matrix: self.contrast_matrix.dark.clone(),
            radius: self.radius,
            typography: self.typography,
            components: self.components.clone(),
            ..Default::default()
        }
    }
}
