use crate::builder::load_verified_settings;
use crate::Result;
use libbrandkit::color_generator::{
    color::parse_color, contrast_ratio, generate_accessible_palette, ColorPalette,
    ContrastAnalysis, PaletteParams,
};
use owo_colors::{OwoColorize as _, Stream};

use std::path::PathBuf;

pub struct PaletteArgs<'a, W: std::io::Write> {
    pub working_dir: PathBuf,
    pub dark: bool,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: PaletteArgs<W>) -> Result<()> {
    let settings = load_verified_settings(args.stdout, &args.working_dir)?;

    let (locked, matrix) = if args.dark {
        (&settings.locked.dark, &settings.contrast_matrix.dark)
    } else {
        (&settings.locked.light, &settings.contrast_matrix.light)
    };

    let generated = generate_accessible_palette(&PaletteParams {
        brand_colors: settings.brand_colors.clone(),
        locked_colors: locked.clone(),
        contrast_matrix: matrix.clone(),
        temperature: settings.temperature,
        dark_mode: args.dark,
        accessibility_level: settings.accessibility_level,
    });

    writeln!(
        args.stdout,
        "{} palette for {}",
        if args.dark { "Dark" } else { "Light" },
        settings
            .name
            .if_supports_color(Stream::Stdout, |s| s.bold())
    )?;
    writeln!(args.stdout)?;

    print_palette(args.stdout, &generated.color_palette)?;
    writeln!(args.stdout)?;

    writeln!(
        args.stdout,
        "Contrast targets ({})",
        settings.accessibility_level
    )?;
    print_analysis(args.stdout, &generated.contrast_analysis)?;

    Ok(())
}

fn print_palette<W: std::io::Write>(stdout: &mut W, palette: &ColorPalette) -> Result<()> {
    let background = palette.get("background").cloned().unwrap_or_default();

    for (role, color) in palette {
        writeln!(
            stdout,
            "  {:<24} {} {:<9} {:>5.2}:1",
            role,
            swatch(color),
            color,
            contrast_ratio(color, &background)
        )?;
    }

    Ok(())
}

fn print_analysis<W: std::io::Write>(stdout: &mut W, analysis: &ContrastAnalysis) -> Result<()> {
    for (role, pairs) in analysis {
        for (other, entry) in pairs {
            let mark = if entry.pass {
                format!("{}", "✓".if_supports_color(Stream::Stdout, |s| s.green()))
            } else {
                format!("{}", "✗".if_supports_color(Stream::Stdout, |s| s.red()))
            };

            writeln!(
                stdout,
                "  {} {:<12} -> {:<12} target {:>3} actual {:>3} ({:.2}:1)",
                mark, role, other, entry.target, entry.actual, entry.ratio
            )?;
        }
    }

    Ok(())
}

fn swatch(color: &str) -> String {
    match parse_color(color) {
        Ok(rgb) => {
            let rgb = rgb.into_format::<u8>();
            format!(
                "{}",
                "██".if_supports_color(Stream::Stdout, |s| s.truecolor(
                    rgb.red,
                    rgb.green,
                    rgb.blue
                ))
            )
        }
        Err(_) => "  ".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use temp_dir::TempDir;

    const SETTINGS: &str = indoc! {r##"
        ---
        name: Acme
        brand_colors:
          - value: "#1A2B5F"
            primary: true
          - value: "#708090"
            secondary: true
          - value: "#FF6B6B"
            accent: true
        locked:
          dark: { ring: "#00FF00" }
    "##};

    fn palette_output(dark: bool) -> String {
        let working_dir = TempDir::new().unwrap();
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        fs::write(working_dir.path().join("brandkit.yaml"), SETTINGS).unwrap();

        let result = run(PaletteArgs {
            working_dir: working_dir.path().to_path_buf(),
            dark,
            stdout: &mut fake_stdout,
        });

        if let Err(err) = result {
            panic!("{}", err);
        }

        String::from_utf8(fake_stdout.into_inner()).unwrap()
    }

    #[test]
    fn prints_the_light_palette() {
        let output = palette_output(false);

        assert!(output.contains("Light palette for"));
        assert!(output.contains("#1A2B5F"));
        assert!(output.contains("background"));
        assert!(output.contains("primary-foreground"));
        assert!(output.contains("Contrast targets (AA)"));
        assert!(output.contains("target  95"), "{}", output);
    }

    #[test]
    fn prints_the_dark_palette_with_locks() {
        let output = palette_output(true);

        assert!(output.contains("Dark palette for"));
        assert!(output.contains("#0f172a"));
        assert!(output.contains("#00FF00"));
    }

    #[test]
    fn fails_without_settings() {
        let working_dir = TempDir::new().unwrap();
        let mut fake_stdout = std::io::sink();

        let result = run(PaletteArgs {
            working_dir: working_dir.path().to_path_buf(),
            dark: false,
            stdout: &mut fake_stdout,
        });

        assert!(matches!(result, Err(crate::Error::Settings(_))));
    }
}
