use crate::Result;
use libbrandkit::{Settings, SETTINGS_FILE_NAME};
use owo_colors::{OwoColorize as _, Stream};

use std::path::Path;

pub struct InitArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    pub name: Option<&'a str>,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: InitArgs<W>) -> Result<()> {
    let settings_path = args.working_dir.join(SETTINGS_FILE_NAME);

    if settings_path.exists() {
        return Err(crate::Error::General(format!(
            "{} already exists in {}",
            SETTINGS_FILE_NAME,
            args.working_dir.display()
        )));
    }

    write!(args.stdout, "Creating {}...", SETTINGS_FILE_NAME)?;
    std::fs::create_dir_all(args.working_dir)?;
    std::fs::write(
        settings_path,
        Settings::template(args.name.unwrap_or("My Brand")),
    )?;
    writeln!(
        args.stdout,
        "{}",
        "✓".if_supports_color(Stream::Stdout, |s| s.green())
    )?;

    writeln!(
        args.stdout,
        "Done! Run `brandkit palette` to see your colors, or `brandkit dev` to preview the theme",
    )?;

    Ok(())
}
