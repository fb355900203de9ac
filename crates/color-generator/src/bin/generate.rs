use color_generator::color::parse_color;
use color_generator::{
    contrast_ratio, generate_theme_palettes, BrandColor, ColorPalette, ThemePaletteOptions,
};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <primary> [secondary] [accent]", args[0]);
        eprintln!("Examples:");
        eprintln!("  {} \"#1A2B5F\"", args[0]);
        eprintln!("  {} \"#1A2B5F\" \"#708090\" \"#FF6B6B\"", args[0]);
        std::process::exit(1);
    }

    let names = ["primary", "secondary", "accent"];

    for (name, color) in names.iter().zip(&args[1..]) {
        if parse_color(color).is_err() {
            eprintln!(
                "Error: Invalid {} color '{}'. Use #RRGGBB, #RGB or a CSS color name",
                name, color
            );
            std::process::exit(1);
        }
    }

    let brand_colors: Vec<BrandColor> = names
        .iter()
        .zip(&args[1..])
        .map(|(name, value)| {
            let color = BrandColor::new(name, value);
            match *name {
                "primary" => color.primary(),
                "secondary" => color.secondary(),
                _ => color.accent(),
            }
        })
        .collect();

    println!("🎨 Generating palettes for: {}", args[1..].join(", "));
    println!();

    let palettes = generate_theme_palettes(&brand_colors, &ThemePaletteOptions::default());

    println!("🌅 LIGHT MODE");
    print_palette(&palettes.light);

    println!();

    println!("🌙 DARK MODE");
    print_palette(&palettes.dark);
}

fn print_palette(palette: &ColorPalette) {
    let background = palette.get("background").cloned().unwrap_or_default();

    for (role, color) in palette {
        println!(
            "    {:<22} {} {:<9} {:>5.2}:1",
            role,
            color_swatch(color),
            color,
            contrast_ratio(color, &background)
        );
    }
}

fn color_swatch(color: &str) -> String {
    match parse_color(color) {
        Ok(rgb) => {
            let rgb = rgb.into_format::<u8>();
            // 24-bit foreground escape around a block
            format!(
                "\x1b[38;2;{};{};{}m██\x1b[0m",
                rgb.red, rgb.green, rgb.blue
            )
        }
        Err(_) => "  ".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_expands_short_hex() {
        assert_eq!(color_swatch("#abc"), color_swatch("#aabbcc"));
        assert_eq!(color_swatch("#aabbcc"), "\x1b[38;2;170;187;204m██\x1b[0m");
    }

    #[test]
    fn swatch_accepts_named_colors() {
        assert_eq!(color_swatch("red"), "\x1b[38;2;255;0;0m██\x1b[0m");
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(parse_color("#zzzzzz").is_err());
        assert_eq!(color_swatch("#zzzzzz"), "  ");
    }
}
