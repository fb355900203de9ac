use crate::Result;
use indoc::formatdoc;
use libbrandkit::builtin::register_builtin_themes;
use libbrandkit::ThemeRegistry;
use owo_colors::{OwoColorize as _, Stream};

pub struct ThemesArgs<'a, W: std::io::Write> {
    pub category: Option<&'a str>,
    pub tag: Option<&'a str>,
    pub stdout: &'a mut W,
}

/// Lists the built-in themes, optionally narrowed down by category and tag.
pub fn run<W: std::io::Write>(args: ThemesArgs<W>) -> Result<()> {
    let registry = ThemeRegistry::new();
    register_builtin_themes(&registry)?;

    let mut themes = match args.category {
        Some(category) => registry.get_themes_by_category(category),
        None => registry.get_all_themes(),
    };

    if let Some(tag) = args.tag {
        themes.retain(|t| t.metadata.tags.iter().any(|t| t == tag));
    }

    if themes.is_empty() {
        writeln!(args.stdout, "No themes match")?;
        return Ok(());
    }

    for theme in themes {
        let tags = theme
            .metadata
            .tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");

        write!(
            args.stdout,
            "{}",
            formatdoc! {"
                {id} ({category})
                  {name}: {description}
                  {tags}
                ",
                id = theme.metadata.id.if_supports_color(Stream::Stdout, |s| s.bold()),
                category = theme.metadata.category,
                name = theme.metadata.name,
                description = theme.metadata.description,
                tags = tags,
            }
        )?;
    }

    Ok(())
}
