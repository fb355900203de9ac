use tracing::warn;

use crate::color::{fit_to_gamut, parse_oklch, to_hex, with_lightness, BLACK, WHITE};
use crate::contrast::{ratio_from_luminance, relative_luminance, AccessibilityLevel};

/// Returns a foreground for `background` that meets the contrast `level`.
///
/// The preferred foreground is kept when it already passes. Otherwise its
/// hue and chroma are kept and its lightness pushed to the far end (0.9 on
/// dark backgrounds, 0.1 on light ones), and failing that it falls back to
/// white or black.
///
/// AA is always reachable since the better of black and white reaches at
/// least 4.58:1 on any background. AAA isn't attainable on mid-luminance
/// backgrounds, in which case the best of black or white is returned.
pub fn ensure_readable(background: &str, preferred: &str, level: AccessibilityLevel) -> String {
    let min_contrast = level.min_contrast();

    let background_luminance = match relative_luminance(background) {
        Ok(l) => l,
        Err(e) => {
            warn!(error = %e, "cannot check readability against background");
            return BLACK.to_string();
        }
    };

    let passes = |color: &str| {
        relative_luminance(color)
            .map(|l| ratio_from_luminance(background_luminance, l) >= min_contrast)
            .unwrap_or(false)
    };

    if passes(preferred) {
        return preferred.to_string();
    }

    let is_dark = background_luminance < 0.5;

    if let Ok(foreground) = parse_oklch(preferred) {
        let target = if is_dark { 0.9 } else { 0.1 };
        let adjusted = to_hex(fit_to_gamut(with_lightness(foreground, target)));

        if passes(&adjusted) {
            return adjusted;
        }
    }

    let fallback = if is_dark { WHITE } else { BLACK };
    if passes(fallback) {
        return fallback.to_string();
    }

    let on_white = ratio_from_luminance(background_luminance, 1.0);
    let on_black = ratio_from_luminance(background_luminance, 0.0);

    if on_white >= on_black {
        WHITE.to_string()
    } else {
        BLACK.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::contrast_ratio;

    #[test]
    fn keeps_a_passing_foreground() {
        let fg = ensure_readable("#ffffff", "#0F172A", AccessibilityLevel::AA);
        assert_eq!(fg, "#0F172A");
    }

    #[test]
    fn lightens_on_dark_backgrounds() {
        let fg = ensure_readable("#1a2b5f", "#0f172a", AccessibilityLevel::AA);

        assert_ne!(fg, "#0f172a");
        assert!(contrast_ratio("#1a2b5f", &fg) >= 4.5);
        assert!(relative_luminance(&fg).unwrap() > relative_luminance("#1a2b5f").unwrap());
    }

    #[test]
    fn darkens_on_light_backgrounds() {
        let fg = ensure_readable("#fde68a", "#fef3c7", AccessibilityLevel::AA);

        assert!(contrast_ratio("#fde68a", &fg) >= 4.5);
        assert!(relative_luminance(&fg).unwrap() < 0.1);
    }

    #[test]
    fn aaa_is_stricter() {
        let fg = ensure_readable("#2563eb", "#93c5fd", AccessibilityLevel::AAA);
        assert!(contrast_ratio("#2563eb", &fg) >= 7.0 || fg == "#ffffff" || fg == "#000000");
    }

    #[test]
    fn mid_gray_gets_the_better_extreme() {
        // White reaches only ~4.48:1 here, black ~4.69:1.
        let fg = ensure_readable("#777777", "#787878", AccessibilityLevel::AA);

        assert!(contrast_ratio("#777777", &fg) >= 4.5);
    }

    #[test]
    fn invalid_background_falls_back_to_black() {
        assert_eq!(
            ensure_readable("nonsense", "#ffffff", AccessibilityLevel::AA),
            "#000000"
        );
    }

    #[test]
    fn invalid_preferred_foreground_falls_back() {
        let fg = ensure_readable("#0f172a", "nonsense", AccessibilityLevel::AA);
        assert_eq!(fg, "#ffffff");
    }
}
