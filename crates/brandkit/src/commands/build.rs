use crate::builder::build;

use std::path::PathBuf;

pub struct BuildArgs<'a, W: std::io::Write> {
    pub working_dir: PathBuf,
    pub out_dir: PathBuf,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: BuildArgs<W>) -> crate::Result<()> {
    build(args.stdout, &args.working_dir, &args.out_dir)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use temp_dir::TempDir;

    const SETTINGS: &str = indoc! {r##"
        ---
        name: Hello World
        brand_colors:
          - value: "#1A2B5F"
            primary: true
          - value: "#FF6B6B"
            accent: true
    "##};

    #[test]
    fn builds_a_theme() {
        let working_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        let mut fake_stdout = std::io::sink();

        fs::write(working_dir.path().join("brandkit.yaml"), SETTINGS).unwrap();

        let result = run(BuildArgs {
            working_dir: working_dir.path().to_path_buf(),
            out_dir: out_dir.path().to_path_buf(),
            stdout: &mut fake_stdout,
        });

        if let Err(err) = result {
            panic!("{}", err);
        }

        for file in ["theme.css", "theme.json", "index.html"] {
            assert!(
                fs::metadata(out_dir.path().join(file)).is_ok(),
                "{} not created",
                file
            );
        }

        let css = fs::read_to_string(out_dir.path().join("theme.css")).unwrap();
        assert!(css.contains("  --primary: #1A2B5F;\n"));

        let json = fs::read_to_string(out_dir.path().join("theme.json")).unwrap();
        assert!(json.contains("\"id\": \"hello-world\""));
    }

    #[test]
    fn logs_that_the_theme_was_built() {
        let working_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        fs::write(working_dir.path().join("brandkit.yaml"), SETTINGS).unwrap();

        let result = run(BuildArgs {
            working_dir: working_dir.path().to_path_buf(),
            out_dir: out_dir.path().to_path_buf(),
            stdout: &mut fake_stdout,
        });

        if let Err(err) = result {
            panic!("{}", err);
        }

        let fake_stdout = String::from_utf8(fake_stdout.into_inner()).unwrap();

        assert!(fake_stdout.contains("Verifying brandkit.yaml"));
        assert!(
            fake_stdout.contains("Build complete"),
            "Built theme not logged"
        );
    }

    #[test]
    fn cleans_up_the_build_directory() {
        let working_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        let mut fake_stdout = std::io::sink();

        fs::write(working_dir.path().join("brandkit.yaml"), SETTINGS).unwrap();
        fs::write(out_dir.path().join("foo.txt"), "").unwrap();

        let result = run(BuildArgs {
            working_dir: working_dir.path().to_path_buf(),
            out_dir: out_dir.path().to_path_buf(),
            stdout: &mut fake_stdout,
        });

        assert!(result.is_ok());
        assert!(!out_dir.path().join("foo.txt").exists());
        assert!(out_dir.path().join("theme.css").exists());
    }

    #[test]
    fn does_not_build_invalid_settings() {
        let working_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        let mut fake_stdout = std::io::sink();

        fs::write(
            working_dir.path().join("brandkit.yaml"),
            "---\nbrand_colors:\n  - value: \"#12\"\n",
        )
        .unwrap();

        let result = run(BuildArgs {
            working_dir: working_dir.path().to_path_buf(),
            out_dir: out_dir.path().to_path_buf(),
            stdout: &mut fake_stdout,
        });

        assert!(matches!(result, Err(crate::Error::Settings(_))));
        assert!(!out_dir.path().join("theme.css").exists());
    }
}
