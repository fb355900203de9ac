use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::candidates::generate_candidates;
use crate::contrast::{
    contrast_ratio, ratio_from_luminance, ratio_to_score, relative_luminance, AccessibilityLevel,
};
use crate::matrix::ContrastMatrix;
use crate::readable::ensure_readable;

/// Role name to color string, in the order roles were resolved.
pub type ColorPalette = IndexMap<String, String>;

/// `role -> role -> entry`, for every pair with a nonzero target.
pub type ContrastAnalysis = IndexMap<String, IndexMap<String, ContrastEntry>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandColor {
    #[serde(default)]
    pub name: String,
    pub value: String,
    #[serde(default, rename = "primary")]
    pub is_primary: bool,
    #[serde(default, rename = "secondary")]
    pub is_secondary: bool,
    #[serde(default, rename = "accent")]
    pub is_accent: bool,
}

impl BrandColor {
    pub fn new(name: &str, value: &str) -> Self {
        BrandColor {
            name: name.to_string(),
            value: value.to_string(),
            ..Default::default()
        }
    }

    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }

    pub fn secondary(mut self) -> Self {
        self.is_secondary = true;
        self
    }

    pub fn accent(mut self) -> Self {
        self.is_accent = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastEntry {
    pub target: f32,
    pub actual: f32,
    pub ratio: f32,
    pub pass: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaletteParams {
    pub brand_colors: Vec<BrandColor>,
    pub locked_colors: ColorPalette,
    pub contrast_matrix: Option<ContrastMatrix>,
    /// Candidate exploration breadth, clamped to `0..=MAX_TEMPERATURE`.
    pub temperature: f32,
    pub dark_mode: bool,
    pub accessibility_level: AccessibilityLevel,
}

impl Default for PaletteParams {
    fn default() -> Self {
        PaletteParams {
            brand_colors: vec![],
            locked_colors: ColorPalette::new(),
            contrast_matrix: None,
            temperature: 1.2,
            dark_mode: false,
            accessibility_level: AccessibilityLevel::AA,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedPalette {
    pub color_palette: ColorPalette,
    pub contrast_analysis: ContrastAnalysis,
}

const CORE_ROLES: [&str; 7] = [
    "background",
    "text",
    "primary",
    "secondary",
    "accent",
    "muted",
    "border",
];

const FOREGROUND_ROLES: [(&str, &str); 4] = [
    ("primary", "background"),
    ("secondary", "background"),
    ("accent", "background"),
    ("muted", "text"),
];

const ALIASES: [(&str, &str); 7] = [
    ("ring", "primary"),
    ("foreground", "text"),
    ("card", "background"),
    ("card-foreground", "text"),
    ("popover", "background"),
    ("popover-foreground", "text"),
    ("input", "border"),
];

fn default_color(role: &str, dark_mode: bool) -> &'static str {
    if dark_mode {
        match role {
            "background" => "#0f172a",
            "text" => "#f8fafc",
            "primary" => "#3b82f6",
            "secondary" => "#94a3b8",
            "accent" => "#fbbf24",
            "muted" => "#1e293b",
            "border" => "#334155",
            _ => "#94a3b8",
        }
    } else {
        match role {
            "background" => "#ffffff",
            "text" => "#0f172a",
            "primary" => "#2563eb",
            "secondary" => "#64748b",
            "accent" => "#f59e0b",
            "muted" => "#f1f5f9",
            "border" => "#e2e8f0",
            _ => "#64748b",
        }
    }
}

/// Semantic status colors and their foregrounds. Fixed per mode: saturated
/// fills with white text in light mode, pale fills with dark text in dark
/// mode.
fn semantic_colors(dark_mode: bool) -> [(&'static str, &'static str, &'static str); 4] {
    if dark_mode {
        [
            ("success", "#4ade80", "#0f172a"),
            ("warning", "#fbbf24", "#0f172a"),
            ("destructive", "#f87171", "#0f172a"),
            ("info", "#60a5fa", "#0f172a"),
        ]
    } else {
        [
            ("success", "#15803d", "#ffffff"),
            ("warning", "#b45309", "#ffffff"),
            ("destructive", "#dc2626", "#ffffff"),
            ("info", "#2563eb", "#ffffff"),
        ]
    }
}

struct Candidate {
    color: String,
    luminance: f32,
}

fn luminance_or_warn(role: &str, color: &str) -> Option<f32> {
    match relative_luminance(color) {
        Ok(l) => Some(l),
        Err(e) => {
            warn!(error = %e, role, "ignoring unparseable palette color while scoring");
            None
        }
    }
}

/// Picks the candidate with the least total deviation from the targets
/// between `matrix.nodes[index]` and the roles already in `palette`.
///
/// Returns `None` when no target applies, i.e. the node is unconstrained by
/// anything resolved so far.
fn best_candidate(
    matrix: &ContrastMatrix,
    index: usize,
    palette: &ColorPalette,
    candidates: &[Candidate],
) -> Option<String> {
    let targets: Vec<(Option<f32>, f32)> = matrix
        .nodes
        .iter()
        .enumerate()
        .filter(|(other, _)| *other != index)
        .filter_map(|(other, node)| {
            let target = matrix.target(index, other);
            let color = palette.get(node)?;

            if target > 0.0 {
                Some((luminance_or_warn(node, color), target))
            } else {
                None
            }
        })
        .collect();

    if targets.is_empty() {
        return None;
    }

    let mut best: Option<(&Candidate, f32)> = None;

    for candidate in candidates {
        let deviation: f32 = targets
            .iter()
            .map(|(luminance, target)| {
                let ratio = luminance
                    .map(|l| ratio_from_luminance(candidate.luminance, l))
                    .unwrap_or(1.0);
                (ratio_to_score(ratio) - target).abs()
            })
            .sum();
        let score = -deviation;

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    best.map(|(candidate, _)| candidate.color.clone())
}

/// Resolves a complete semantic palette from brand colors.
///
/// Roles are filled in a fixed order and a role, once set, is never
/// overwritten: locked colors, then flagged brand colors, then
/// background/text defaults, then every remaining matrix node in
/// `fill_order`, then derived foregrounds, status colors and aliases.
pub fn generate_accessible_palette(params: &PaletteParams) -> GeneratedPalette {
    let dark_mode = params.dark_mode;
    let matrix = params
        .contrast_matrix
        .clone()
        .unwrap_or_else(|| ContrastMatrix::for_mode(dark_mode));

    let mut palette = params.locked_colors.clone();

    let brand_roles: [(&str, fn(&BrandColor) -> bool); 3] = [
        ("primary", |b| b.is_primary),
        ("secondary", |b| b.is_secondary),
        ("accent", |b| b.is_accent),
    ];

    for (role, flagged) in brand_roles {
        if palette.contains_key(role) {
            continue;
        }
        if let Some(brand) = params.brand_colors.iter().find(|b| flagged(b)) {
            palette.insert(role.to_string(), brand.value.clone());
        }
    }

    for role in ["background", "text"] {
        palette
            .entry(role.to_string())
            .or_insert_with(|| default_color(role, dark_mode).to_string());
    }

    let mut candidates: Option<Vec<Candidate>> = None;

    for (index, node) in matrix.nodes.iter().enumerate() {
        if palette.contains_key(node) {
            continue;
        }

        let candidates = candidates.get_or_insert_with(|| {
            let seeds: Vec<&str> = params
                .brand_colors
                .iter()
                .map(|b| b.value.as_str())
                .collect();

            generate_candidates(&seeds, dark_mode, params.temperature)
                .into_iter()
                .filter_map(|color| {
                    let luminance = relative_luminance(&color).ok()?;
                    Some(Candidate { color, luminance })
                })
                .collect()
        });

        let color = best_candidate(&matrix, index, &palette, candidates).unwrap_or_else(|| {
            debug!(role = node.as_str(), "no contrast target applies, using default");
            default_color(node, dark_mode).to_string()
        });

        palette.insert(node.clone(), color);
    }

    for role in CORE_ROLES {
        palette
            .entry(role.to_string())
            .or_insert_with(|| default_color(role, dark_mode).to_string());
    }

    for (role, preferred) in FOREGROUND_ROLES {
        let key = format!("{}-foreground", role);
        if palette.contains_key(&key) {
            continue;
        }

        let foreground = ensure_readable(
            &palette[role],
            &palette[preferred],
            params.accessibility_level,
        );
        palette.insert(key, foreground);
    }

    for (role, color, foreground) in semantic_colors(dark_mode) {
        palette
            .entry(role.to_string())
            .or_insert_with(|| color.to_string());
        palette
            .entry(format!("{}-foreground", role))
            .or_insert_with(|| foreground.to_string());
    }

    for (alias, source) in ALIASES {
        if !palette.contains_key(alias) {
            let color = palette[source].clone();
            palette.insert(alias.to_string(), color);
        }
    }

    let contrast_analysis = analyze_contrast(&palette, &matrix);

    GeneratedPalette {
        color_palette: palette,
        contrast_analysis,
    }
}

/// Measures a finished palette against the matrix. A pair passes when its
/// actual score reaches the target.
pub fn analyze_contrast(palette: &ColorPalette, matrix: &ContrastMatrix) -> ContrastAnalysis {
    let mut analysis = ContrastAnalysis::new();

    for (i, from) in matrix.nodes.iter().enumerate() {
        let Some(from_color) = palette.get(from) else {
            continue;
        };

        for (j, to) in matrix.nodes.iter().enumerate() {
            let target = matrix.target(i, j);
            if i == j || target <= 0.0 {
                continue;
            }
            let Some(to_color) = palette.get(to) else {
                continue;
            };

            let ratio = contrast_ratio(from_color, to_color);
            let actual = ratio_to_score(ratio);

            analysis.entry(from.clone()).or_default().insert(
                to.clone(),
                ContrastEntry {
                    target,
                    actual,
                    ratio,
                    pass: actual >= target,
                },
            );
        }
    }

    analysis
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemePaletteOptions {
    pub temperature: f32,
    pub accessibility_level: AccessibilityLevel,
    pub locked_light: ColorPalette,
    pub locked_dark: ColorPalette,
    pub light_matrix: Option<ContrastMatrix>,
    pub dark_matrix: Option<ContrastMatrix>,
}

impl Default for ThemePaletteOptions {
    fn default() -> Self {
        ThemePaletteOptions {
            temperature: 1.2,
            accessibility_level: AccessibilityLevel::AA,
            locked_light: ColorPalette::new(),
            locked_dark: ColorPalette::new(),
            light_matrix: None,
            dark_matrix: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemePaletteAnalysis {
    pub light: ContrastAnalysis,
    pub dark: ContrastAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemePalettes {
    pub light: ColorPalette,
    pub dark: ColorPalette,
    pub analysis: ThemePaletteAnalysis,
}

/// Solves the light and dark palettes for the same brand.
pub fn generate_theme_palettes(
    brand_colors: &[BrandColor],
    options: &ThemePaletteOptions,
) -> ThemePalettes {
    let solve = |dark_mode: bool, locked: &ColorPalette, matrix: &Option<ContrastMatrix>| {
        generate_accessible_palette(&PaletteParams {
            brand_colors: brand_colors.to_vec(),
            locked_colors: locked.clone(),
            contrast_matrix: matrix.clone(),
            temperature: options.temperature,
            dark_mode,
            accessibility_level: options.accessibility_level,
        })
    };

    let light = solve(false, &options.locked_light, &options.light_matrix);
    let dark = solve(true, &options.locked_dark, &options.dark_matrix);

    ThemePalettes {
        light: light.color_palette,
        dark: dark.color_palette,
        analysis: ThemePaletteAnalysis {
            light: light.contrast_analysis,
            dark: dark.contrast_analysis,
        },
    }
}
