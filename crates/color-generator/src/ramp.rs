use indexmap::IndexMap;

use crate::color::{fit_to_gamut, parse_oklch, to_hex, with_chroma, with_lightness};
use crate::Result;

pub const RAMP_STEPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

const RAMP_LIGHTNESS: [f32; 11] = [
    0.97, 0.93, 0.87, 0.79, 0.70, 0.62, 0.54, 0.46, 0.38, 0.31, 0.25,
];

/// Step (50..950) to hex color, lightest first.
pub type Ramp = IndexMap<u16, String>;

/// Builds an 11 step lightness ramp around the hue of `base`.
///
/// Lightness falls monotonically from step 50 to 950. Chroma peaks in the
/// middle of the ramp and tapers towards both ends, where sRGB has little
/// room for it anyway.
pub fn lightness_ramp(base: &str) -> Result<Ramp> {
    let base = parse_oklch(base)?;

    let ramp = RAMP_STEPS
        .iter()
        .zip(RAMP_LIGHTNESS)
        .map(|(step, lightness)| {
            let taper = (1.0 - (lightness - 0.62).abs() / 0.62).max(0.25);
            let color = with_chroma(with_lightness(base, lightness), base.chroma * taper);

            (*step, to_hex(fit_to_gamut(color)))
        })
        .collect();

    Ok(ramp)
}
