use color_generator::ColorPalette;
use indexmap::IndexMap;

/// A named bundle of resolved colors, design tokens and optional component
/// bindings. Identity is `metadata.id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub metadata: ThemeMetadata,
    pub components: Components,
    pub tokens: ThemeTokens,
    /// CSS custom properties for `tokens`, ready to drop into a stylesheet.
    pub css: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeMetadata {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// Reference to a UI implementation of a component slot, e.g.
/// `agency/HeroBanner`. Resolving it is up to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRef(pub String);

impl std::fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Component slot name to its implementation. A slot that is present but
/// `None` falls back to the default component.
pub type Components = IndexMap<String, Option<ComponentRef>>;

pub const COMPONENT_SLOTS: [&str; 6] = ["button", "card", "input", "navigation", "hero", "footer"];

pub fn empty_components() -> Components {
    COMPONENT_SLOTS
        .iter()
        .map(|slot| (slot.to_string(), None))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeTokens {
    /// Light appearance. This is the default palette.
    pub colors: ColorPalette,
    pub dark_colors: ColorPalette,
    pub typography: Typography,
    pub spacing: IndexMap<String, String>,
    pub border_radius: BorderRadius,
    pub shadows: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub font_sans: String,
    pub font_heading: String,
    pub font_mono: String,
    pub base_size: String,
    pub line_height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderRadius {
    pub sm: String,
    pub md: String,
    pub lg: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusStyle {
    Sharp,
    #[default]
    Rounded,
    Pill,
}

impl RadiusStyle {
    pub fn preset(self) -> BorderRadius {
        let (sm, md, lg) = match self {
            RadiusStyle::Sharp => ("0.125rem", "0.25rem", "0.375rem"),
            RadiusStyle::Rounded => ("0.375rem", "0.5rem", "0.75rem"),
            RadiusStyle::Pill => ("0.75rem", "1.5rem", "9999px"),
        };

        BorderRadius {
            sm: sm.to_string(),
            md: md.to_string(),
            lg: lg.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypographyStyle {
    #[default]
    Modern,
    Classic,
    Technical,
}

impl TypographyStyle {
    pub fn preset(self) -> Typography {
        let (sans, heading, mono, line_height) = match self {
            TypographyStyle::Modern => (
                "Inter, ui-sans-serif, system-ui, sans-serif",
                "Inter, ui-sans-serif, system-ui, sans-serif",
                "ui-monospace, SFMono-Regular, Menlo, monospace",
                1.5,
            ),
            TypographyStyle::Classic => (
                "Source Sans Pro, Helvetica, Arial, sans-serif",
                "Playfair Display, Georgia, serif",
                "Courier New, monospace",
                1.6,
            ),
            TypographyStyle::Technical => (
                "IBM Plex Sans, ui-sans-serif, sans-serif",
                "IBM Plex Sans, ui-sans-serif, sans-serif",
                "JetBrains Mono, IBM Plex Mono, monospace",
                1.45,
            ),
        };

        Typography {
            font_sans: sans.to_string(),
            font_heading: heading.to_string(),
            font_mono: mono.to_string(),
            base_size: "16px".to_string(),
            line_height,
        }
    }
}

pub fn default_spacing() -> IndexMap<String, String> {
    [
        ("xs", "0.25rem"),
        ("sm", "0.5rem"),
        ("md", "1rem"),
        ("lg", "1.5rem"),
        ("xl", "2rem"),
        ("2xl", "3rem"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

pub fn default_shadows() -> IndexMap<String, String> {
    [
        ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
        (
            "md",
            "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
        ),
        (
            "lg",
            "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
        ),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn radius_presets_grow() {
        assert_eq!(RadiusStyle::Sharp.preset().md, "0.25rem");
        assert_eq!(RadiusStyle::Pill.preset().lg, "9999px");
        assert_eq!(RadiusStyle::default(), RadiusStyle::Rounded);
    }

    #[test]
    fn typography_presets_differ() {
        let modern = TypographyStyle::Modern.preset();
        let classic = TypographyStyle::Classic.preset();
        let technical = TypographyStyle::Technical.preset();

        assert_ne!(modern.font_heading, classic.font_heading);
        assert!(technical.font_mono.starts_with("JetBrains Mono"));
    }

    #[test]
    fn styles_use_lowercase_names() {
        let style: RadiusStyle = serde_yaml::from_str("pill").unwrap();
        assert_eq!(style, RadiusStyle::Pill);

        let style: TypographyStyle = serde_yaml::from_str("technical").unwrap();
        assert_eq!(style, TypographyStyle::Technical);
    }

    #[test]
    fn component_refs_serialize_as_strings() {
        let mut components = empty_components();
        components.insert("hero".into(), Some(ComponentRef("agency/Hero".into())));

        let json = serde_json::to_value(&components).unwrap();
        assert_eq!(json["hero"], "agency/Hero");
        assert!(json["button"].is_null());
    }
}
