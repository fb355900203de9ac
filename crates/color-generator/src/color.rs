use palette::convert::FromColorUnclamped;
use palette::{FromColor, IntoColor, IsWithinBounds, LinSrgb, OklabHue, Oklch, Srgb};

use crate::{Error, Result};

pub const WHITE: &str = "#ffffff";
pub const BLACK: &str = "#000000";

/// Parses any CSS color (`#rgb`, `#rrggbb`, named colors, ...) into sRGB.
pub fn parse_color(color: &str) -> Result<Srgb> {
    let c = csscolorparser::parse(color.trim()).map_err(|_| Error::InvalidColor(color.to_string()))?;

    Ok(Srgb::new(c.r as f32, c.g as f32, c.b as f32))
}

pub fn parse_oklch(color: &str) -> Result<Oklch> {
    parse_color(color).map(Oklch::from_color)
}

/// WCAG relative luminance of an sRGB color.
pub fn luminance_of(color: Srgb) -> f32 {
    let linear: LinSrgb = color.into_linear();

    0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
}

pub fn to_hex(color: Oklch) -> String {
    let srgb: Srgb = color.into_color();
    srgb_to_hex(srgb)
}

pub fn srgb_to_hex(color: Srgb) -> String {
    let r = (color.red * 255.0).round().clamp(0.0, 255.0) as u8;
    let g = (color.green * 255.0).round().clamp(0.0, 255.0) as u8;
    let b = (color.blue * 255.0).round().clamp(0.0, 255.0) as u8;

    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Normalizes any parseable color to lowercase `#rrggbb`.
pub fn normalize_hex(color: &str) -> Result<String> {
    parse_color(color).map(srgb_to_hex)
}

/// Pulls chroma in until the color is representable in sRGB, so that
/// clamping channels later doesn't shift its lightness.
pub fn fit_to_gamut(color: Oklch) -> Oklch {
    let mut fitted = color;

    for _ in 0..24 {
        let srgb = Srgb::from_color_unclamped(fitted);
        if srgb.is_within_bounds() {
            break;
        }
        fitted.chroma *= 0.9;
    }

    fitted
}

pub fn with_lightness(color: Oklch, lightness: f32) -> Oklch {
    Oklch::new(lightness.clamp(0.0, 1.0), color.chroma, color.hue)
}

pub fn with_chroma(color: Oklch, chroma: f32) -> Oklch {
    Oklch::new(color.l, chroma.max(0.0), color.hue)
}

pub fn rotate_hue(color: Oklch, degrees: f32) -> Oklch {
    let hue = color.hue.into_inner();
    let hue = if hue.is_nan() { 0.0 } else { hue };

    Oklch::new(
        color.l,
        color.chroma,
        OklabHue::from_degrees((hue + degrees).rem_euclid(360.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(normalize_hex("#fff").unwrap(), "#ffffff");
        assert_eq!(normalize_hex("#1A2B5F").unwrap(), "#1a2b5f");
    }

    #[test]
    fn parses_css_color_names() {
        assert_eq!(normalize_hex("slategray").unwrap(), "#708090");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_color("#nothex"),
            Err(Error::InvalidColor(c)) if c == "#nothex"
        ));
    }

    #[test]
    fn hex_survives_a_trip_through_oklch() {
        let oklch = parse_oklch("#1a2b5f").unwrap();
        assert_eq!(to_hex(oklch), "#1a2b5f");
    }

    #[test]
    fn raising_lightness_raises_luminance() {
        let base = parse_oklch("#708090").unwrap();

        let darker = parse_color(&to_hex(with_lightness(base, 0.3))).unwrap();
        let lighter = parse_color(&to_hex(with_lightness(base, 0.8))).unwrap();

        assert!(luminance_of(lighter) > luminance_of(darker));
    }

    #[test]
    fn gamut_fitting_keeps_lightness() {
        let loud = Oklch::new(0.95, 0.3, 30.0);
        let fitted = fit_to_gamut(loud);

        assert_eq!(fitted.l, loud.l);
        assert!(fitted.chroma < loud.chroma);
    }
}
