//! Contrast-driven palette generation.
//!
//! Takes a handful of brand colors and a matrix of desired contrast
//! relationships between UI roles, and searches a generated candidate space
//! for the colors that best satisfy the targets. Everything here is pure and
//! synchronous: no I/O, no shared state.

use thiserror::Error;

pub mod candidates;
pub mod color;
pub mod contrast;
pub mod matrix;
pub mod ramp;
pub mod readable;
pub mod solver;

pub use candidates::{generate_candidates, MAX_TEMPERATURE};
pub use contrast::{
    contrast_ratio, ratio_to_score, relative_luminance, score_to_ratio, AccessibilityLevel,
};
pub use matrix::ContrastMatrix;
pub use ramp::{lightness_ramp, Ramp, RAMP_STEPS};
pub use readable::ensure_readable;
pub use solver::{
    generate_accessible_palette, generate_theme_palettes, BrandColor, ColorPalette,
    ContrastAnalysis, ContrastEntry, GeneratedPalette, PaletteParams, ThemePaletteAnalysis,
    ThemePaletteOptions, ThemePalettes,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid color `{0}` found")]
    InvalidColor(String),
}
