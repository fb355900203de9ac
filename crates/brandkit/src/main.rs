use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use owo_colors::{OwoColorize as _, Stream};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use brandkit::commands::build::{run as build, BuildArgs};
use brandkit::commands::dev::{run as dev, DevArgs};
use brandkit::commands::init::{run as init, InitArgs};
use brandkit::commands::palette::{run as palette, PaletteArgs};
use brandkit::commands::themes::{run as themes, ThemesArgs};

#[derive(Parser, Debug, Clone)]
#[command(about = "Brandkit, accessible color palettes and themes from your brand colors")]
#[command(version, long_about = None)]
struct Args {
    #[clap(long, global = true, default_value = "auto")]
    color: Color,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Color {
    Always,
    Auto,
    Never,
}

impl Color {
    fn init(self) {
        match self {
            Color::Always => owo_colors::set_override(true),
            Color::Auto => {}
            Color::Never => owo_colors::set_override(false),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Create a starter brandkit.yaml. Defaults to the current directory.
    Init {
        #[arg(default_value = ".")]
        working_dir: PathBuf,
        /// Brand name to put in the settings file
        #[arg(long)]
        name: Option<String>,
    },
    /// Print the solved palette and how it meets the contrast targets
    Palette {
        #[arg(default_value = ".")]
        working_dir: PathBuf,
        /// Solve the dark mode palette instead of the light one
        #[arg(long)]
        dark: bool,
    },
    /// Write the theme stylesheet, JSON and preview page to _build
    Build {
        #[arg(default_value = ".")]
        working_dir: PathBuf,
    },
    /// List the built-in themes
    Themes {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        tag: Option<String>,
    },
    /// Build the theme and serve a local preview
    Dev {
        #[arg(default_value = ".")]
        working_dir: PathBuf,
        #[arg(long, short)]
        port: Option<u16>,
    },
}

fn main() {
    let args = Args::parse();
    args.color.init();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout();

    let result = match args.command {
        Some(Commands::Init { working_dir, name }) => init(InitArgs {
            working_dir: &working_dir,
            name: name.as_deref(),
            stdout: &mut stdout,
        }),
        Some(Commands::Palette { working_dir, dark }) => palette(PaletteArgs {
            working_dir,
            dark,
            stdout: &mut stdout,
        }),
        Some(Commands::Build { working_dir }) => build(BuildArgs {
            out_dir: working_dir.join("_build"),
            working_dir,
            stdout: &mut stdout,
        }),
        Some(Commands::Themes { category, tag }) => themes(ThemesArgs {
            category: category.as_deref(),
            tag: tag.as_deref(),
            stdout: &mut stdout,
        }),
        Some(Commands::Dev { working_dir, port }) => dev(DevArgs {
            working_dir,
            port,
            stdout: &mut stdout,
        }),
        None => {
            let _ = Args::command().print_help();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!(
            "{} {}",
            "Error:".if_supports_color(Stream::Stderr, |s| s.red()),
            e
        );
        std::process::exit(1);
    }
}
