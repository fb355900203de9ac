use indexmap::IndexSet;
use palette::Oklch;
use tracing::warn;

use crate::color::{
    fit_to_gamut, normalize_hex, parse_oklch, rotate_hue, to_hex, with_chroma, with_lightness,
};

/// Highest useful temperature. Larger values are treated as this one.
pub const MAX_TEMPERATURE: f32 = 2.4;

const LIGHT_NEUTRALS: &[&str] = &[
    "#ffffff", "#fcfcfd", "#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b",
    "#475569", "#334155", "#1e293b", "#0f172a",
];

const DARK_NEUTRALS: &[&str] = &[
    "#000000", "#020617", "#09090b", "#0f172a", "#1e293b", "#334155", "#475569", "#64748b",
    "#94a3b8", "#cbd5e1", "#e2e8f0", "#f8fafc",
];

/// Expands seed colors into a deduplicated list of candidate hex colors.
///
/// `temperature` controls how many variants each seed gets: `floor(t * 20)`
/// lightness, chroma and (above 1.5) hue steps, with `t` clamped to
/// `0..=MAX_TEMPERATURE`. The favoured lightness
/// direction follows the mode, but both directions are always explored.
/// Output only depends on the inputs.
pub fn generate_candidates<S: AsRef<str>>(
    seeds: &[S],
    dark_mode: bool,
    temperature: f32,
) -> Vec<String> {
    let mut candidates: IndexSet<String> = IndexSet::new();

    let bases: Vec<Oklch> = seeds
        .iter()
        .filter_map(|seed| match parse_oklch(seed.as_ref()) {
            Ok(base) => Some(base),
            Err(e) => {
                warn!(error = %e, "skipping seed color");
                None
            }
        })
        .collect();

    for seed in seeds {
        if let Ok(hex) = normalize_hex(seed.as_ref()) {
            candidates.insert(hex);
        }
    }

    let temperature = if temperature.is_finite() {
        temperature.clamp(0.0, MAX_TEMPERATURE)
    } else {
        0.0
    };
    let variation_count = (temperature * 20.0).floor() as usize;

    for base in &bases {
        for i in 1..=variation_count {
            let t = i as f32 / variation_count as f32;

            let (lighten, darken) = if dark_mode {
                (0.2 * t, 0.45 * t)
            } else {
                (0.45 * t, 0.2 * t)
            };

            let mut variants = vec![
                with_lightness(*base, base.l + lighten),
                with_lightness(*base, base.l - darken),
                with_chroma(*base, base.chroma * (1.0 + t)),
                with_chroma(*base, base.chroma * (1.0 - 0.8 * t)),
            ];

            if temperature > 1.5 {
                variants.push(rotate_hue(*base, 30.0 * t));
                variants.push(rotate_hue(*base, -30.0 * t));
            }

            for variant in variants {
                candidates.insert(to_hex(fit_to_gamut(variant)));
            }
        }
    }

    let neutrals = if dark_mode {
        DARK_NEUTRALS
    } else {
        LIGHT_NEUTRALS
    };
    candidates.extend(neutrals.iter().map(|n| n.to_string()));

    candidates.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::relative_luminance;

    const BRAND: [&str; 3] = ["#1A2B5F", "#708090", "#FF6B6B"];

    #[test]
    fn starts_with_the_seeds() {
        let candidates = generate_candidates(&BRAND, false, 1.2);

        assert_eq!(&candidates[..3], &["#1a2b5f", "#708090", "#ff6b6b"]);
    }

    #[test]
    fn has_no_duplicates() {
        let candidates = generate_candidates(&BRAND, false, 2.0);
        let unique: IndexSet<_> = candidates.iter().collect();

        assert_eq!(unique.len(), candidates.len());
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(
            generate_candidates(&BRAND, true, 1.7),
            generate_candidates(&BRAND, true, 1.7)
        );
    }

    #[test]
    fn zero_temperature_is_seeds_and_neutrals() {
        let candidates = generate_candidates(&BRAND, false, 0.0);

        assert_eq!(candidates.len(), 3 + LIGHT_NEUTRALS.len());
        assert!(candidates.contains(&"#ffffff".to_string()));
    }

    #[test]
    fn more_temperature_means_more_candidates() {
        let cool = generate_candidates(&BRAND, false, 0.5).len();
        let warm = generate_candidates(&BRAND, false, 1.2).len();
        let hot = generate_candidates(&BRAND, false, 2.0).len();

        assert!(cool < warm);
        assert!(warm < hot);
    }

    #[test]
    fn temperature_is_clamped() {
        assert_eq!(
            generate_candidates(&BRAND, false, 1e9),
            generate_candidates(&BRAND, false, MAX_TEMPERATURE)
        );
        assert_eq!(
            generate_candidates(&BRAND, false, -3.0),
            generate_candidates(&BRAND, false, 0.0)
        );
    }

    #[test]
    fn explores_both_lightness_directions() {
        let seed_luminance = relative_luminance("#708090").unwrap();

        for dark_mode in [false, true] {
            let candidates = generate_candidates(&["#708090"], dark_mode, 1.0);
            let variants = &candidates[1..candidates.len() - LIGHT_NEUTRALS.len()];

            let lums: Vec<f32> = variants
                .iter()
                .map(|c| relative_luminance(c).unwrap())
                .collect();

            assert!(lums.iter().any(|l| *l > seed_luminance));
            assert!(lums.iter().any(|l| *l < seed_luminance));
        }
    }

    #[test]
    fn unparseable_seeds_are_skipped() {
        let candidates = generate_candidates(&["#1a2b5f", "nope"], false, 0.5);

        assert!(!candidates.iter().any(|c| c == "nope"));
        assert!(candidates.contains(&"#1a2b5f".to_string()));
    }

    #[test]
    fn empty_seeds_still_yield_neutrals() {
        let seeds: [&str; 0] = [];
        assert_eq!(generate_candidates(&seeds, true, 1.2), DARK_NEUTRALS.to_vec());
    }
}
