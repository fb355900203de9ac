//! WCAG 2.1 contrast math and the 0-100 "contrast score" used by the
//! contrast matrix.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::{luminance_of, parse_color};
use crate::Result;

/// Relative luminance of a color string, in `[0, 1]`.
pub fn relative_luminance(color: &str) -> Result<f32> {
    parse_color(color).map(luminance_of)
}

/// Contrast ratio between two colors, in `[1, 21]`.
///
/// Unparseable input is logged and treated as "no contrast" so that one bad
/// color can't abort a whole palette.
pub fn contrast_ratio(a: &str, b: &str) -> f32 {
    match (relative_luminance(a), relative_luminance(b)) {
        (Ok(la), Ok(lb)) => ratio_from_luminance(la, lb),
        (Err(e), _) | (_, Err(e)) => {
            warn!(error = %e, a, b, "could not compute contrast ratio");
            1.0
        }
    }
}

pub fn ratio_from_luminance(a: f32, b: f32) -> f32 {
    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };

    (lighter + 0.05) / (darker + 0.05)
}

/// Maps a ratio onto `[0, 100]` logarithmically: 1 -> 0, 21 -> 100.
pub fn ratio_to_score(ratio: f32) -> f32 {
    let ratio = ratio.max(1.0);

    (100.0 * ratio.ln() / 21f32.ln()).round().clamp(0.0, 100.0)
}

pub fn score_to_ratio(score: f32) -> f32 {
    21f32.powf(score.clamp(0.0, 100.0) / 100.0)
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessibilityLevel {
    #[default]
    AA,
    AAA,
}

impl AccessibilityLevel {
    pub fn min_contrast(self) -> f32 {
        match self {
            AccessibilityLevel::AA => 4.5,
            AccessibilityLevel::AAA => 7.0,
        }
    }
}

impl std::fmt::Display for AccessibilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AccessibilityLevel::AA => "AA",
            AccessibilityLevel::AAA => "AAA",
        };

        write!(f, "{}", name)
    }
}
