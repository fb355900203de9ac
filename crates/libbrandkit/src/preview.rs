use color_generator::{contrast_ratio, ensure_readable, AccessibilityLevel};
use minijinja::{context, Environment};

use crate::theme::Theme;
use crate::Result;

const PREVIEW_TEMPLATE: &str = "preview.html.jinja";

/// Renders the static HTML swatch page for a theme.
pub struct PreviewRenderer {
    env: Environment<'static>,
}

impl PreviewRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(
            PREVIEW_TEMPLATE,
            include_str!("./templates/preview.html.jinja"),
        )?;

        env.add_function("contrast", contrast);
        env.add_function("readable_on", readable_on);

        Ok(PreviewRenderer { env })
    }

    pub fn render(&self, theme: &Theme) -> Result<String> {
        let template = self.env.get_template(PREVIEW_TEMPLATE)?;

        Ok(template.render(context! { theme => theme })?)
    }
}

/// Contrast ratio of two colors, formatted for display
fn contrast(a: String, b: String) -> String {
    format!("{:.2}", contrast_ratio(&a, &b))
}

fn readable_on(background: String) -> String {
    ensure_readable(&background, "#ffffff", AccessibilityLevel::AA)
}
