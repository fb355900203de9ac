use crate::{Error, Result};
use std::path::Path;
use std::sync::Arc;

use libbrandkit::preview::PreviewRenderer;
use libbrandkit::{generate_theme, load_settings, Settings, Theme, ThemeRegistry};
use owo_colors::{OwoColorize as _, Stream};
use tracing::debug;

pub(crate) const BUILD_DIR: &str = "_build";

/// Writes each issue the way `build` reports them.
pub(crate) fn report_issues<W: std::io::Write>(
    stdout: &mut W,
    issues: &[libbrandkit::Error],
) -> Result<()> {
    writeln!(
        stdout,
        "Found {} issues in {}",
        issues.len(),
        libbrandkit::SETTINGS_FILE_NAME
    )?;

    for issue in issues {
        writeln!(
            stdout,
            "--------------------------------------------\n{} {}\n",
            issue.message.if_supports_color(Stream::Stdout, |s| s.bold()),
            issue
                .file
                .as_ref()
                .map(|f| format!("[{}]", f.display()))
                .unwrap_or_default()
                .if_supports_color(Stream::Stdout, |s| s.bold())
        )?;
        writeln!(stdout, "{}", issue.description)?;
    }

    writeln!(stdout, "--------------------------------------------")?;

    Ok(())
}

/// Loads `brandkit.yaml` from `working_dir`, reporting every problem found
/// in it before giving up.
pub(crate) fn load_verified_settings<W: std::io::Write>(
    stdout: &mut W,
    working_dir: &Path,
) -> Result<Settings> {
    let settings = match load_settings(working_dir) {
        Ok(settings) => settings,
        Err(e) => {
            report_issues(stdout, std::slice::from_ref(&e))?;
            return Err(Error::Settings(vec![e]));
        }
    };

    let mut issues = vec![];
    settings.verify(&mut issues);

    if !issues.is_empty() {
        report_issues(stdout, &issues)?;
        return Err(Error::Settings(issues));
    }

    Ok(settings)
}

/// Generates the theme described by `working_dir` and writes its stylesheet,
/// JSON and preview page into a freshly emptied `out_dir`.
pub(crate) fn build<W: std::io::Write>(
    stdout: &mut W,
    working_dir: &Path,
    out_dir: &Path,
) -> Result<Arc<Theme>> {
    let start = std::time::Instant::now();
    writeln!(stdout, "Verifying {}...", libbrandkit::SETTINGS_FILE_NAME)?;

    let settings = load_verified_settings(stdout, working_dir)?;

    let registry = ThemeRegistry::new();
    let theme = match generate_theme(&registry, settings.theme_params()) {
        Ok(theme) => theme,
        Err(e) => {
            report_issues(stdout, std::slice::from_ref(&e))?;
            return Err(Error::Settings(vec![e]));
        }
    };

    if out_dir.exists() {
        debug!(dir = %out_dir.display(), "cleaning build directory");
        std::fs::remove_dir_all(out_dir)?;
    }
    std::fs::create_dir_all(out_dir)?;

    std::fs::write(out_dir.join("theme.css"), &theme.css)?;

    let json = libbrandkit::serde_json::to_string_pretty(&*theme)
        .map_err(|e| Error::General(format!("Failed to serialize theme: {}", e)))?;
    std::fs::write(out_dir.join("theme.json"), json)?;

    let html = PreviewRenderer::new()
        .and_then(|renderer| renderer.render(&theme))
        .map_err(|e| Error::General(format!("Failed to render preview: {}", e)))?;
    std::fs::write(out_dir.join("index.html"), html)?;

    writeln!(
        stdout,
        "{} {}",
        "Build complete in".if_supports_color(Stream::Stdout, |s| s.green()),
        format!("{:?}", start.elapsed()).if_supports_color(Stream::Stdout, |s| s.bold()),
    )?;

    Ok(theme)
}
