#[macro_use]
extern crate indoc;
#[macro_use]
extern crate serde;

pub use color_generator;
pub use serde_json;

pub mod builtin;
pub mod css;
pub mod preview;
pub mod registry;
pub mod settings;
mod slug;
pub mod theme;
pub mod theme_generator;

pub use registry::ThemeRegistry;
pub use settings::Settings;
pub use theme::{
    BorderRadius, ComponentRef, Components, RadiusStyle, Theme, ThemeMetadata, ThemeTokens,
    Typography, TypographyStyle,
};
pub use theme_generator::{generate_theme, ThemeParams};

use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "brandkit.yaml";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Eq, PartialOrd, Ord)]
pub struct Error {
    pub code: usize,
    pub message: String,
    pub description: String,
    pub file: Option<PathBuf>,
}

impl Error {
    pub const MISSING_SETTINGS: usize = 10;
    pub const INVALID_SETTINGS: usize = 11;
    pub const INVALID_COLOR: usize = 20;
    pub const INVALID_CONTRAST_MATRIX: usize = 21;
    pub const INVALID_TEMPERATURE: usize = 22;
    pub const INVALID_ROLE_NAME: usize = 23;
    pub const THEME_NOT_FOUND: usize = 30;
    pub const COMPONENT_NOT_FOUND: usize = 31;
    pub const IO_ERROR: usize = 40;
    pub const TEMPLATE_ERROR: usize = 50;

    fn in_file(mut self, path: &Path) -> Self {
        self.file = Some(path.to_owned());
        self
    }

    pub(crate) fn invalid_color(color: &str, context: &str) -> Self {
        Error {
            code: Error::INVALID_COLOR,
            message: format!("Invalid color in {}", context),
            description: format!(
                "Invalid color `{}` found\n\nExpected a HEX color code, or a valid CSS color name.",
                color
            ),
            file: None,
        }
    }

    pub(crate) fn invalid_temperature(temperature: f32) -> Self {
        Error {
            code: Error::INVALID_TEMPERATURE,
            message: "Invalid temperature".to_string(),
            description: format!(
                "Temperature must be between 0 and {}, found {}",
                theme_generator::MAX_TEMPERATURE,
                temperature
            ),
            file: None,
        }
    }

    pub(crate) fn invalid_role_name(role: &str, context: &str) -> Self {
        Error {
            code: Error::INVALID_ROLE_NAME,
            message: format!("Invalid role name in {}", context),
            description: format!(
                "Invalid role name `{}` found\n\nRole names may only contain lowercase letters, digits and dashes.",
                role
            ),
            file: None,
        }
    }

    pub(crate) fn invalid_matrix(mode: &str, problem: &str) -> Self {
        Error {
            code: Error::INVALID_CONTRAST_MATRIX,
            message: format!("Invalid {} contrast matrix", mode),
            description: problem.to_string(),
            file: None,
        }
    }

    fn from_serde_yaml(serde_error: serde_yaml::Error, message: String, file: Option<PathBuf>) -> Self {
        Error {
            code: Self::INVALID_SETTINGS,
            message,
            file,
            description: format!("{}", serde_error),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{} [{}]: {}", self.message, file.display(), self.description),
            None => write!(f, "{}: {}", self.message, self.description),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for crate::Error {
    fn from(other: std::io::Error) -> Self {
        Error {
            code: Self::IO_ERROR,
            message: "IO error occurred".to_owned(),
            description: format!("{}", other),
            file: None,
        }
    }
}

impl From<serde_yaml::Error> for crate::Error {
    fn from(other: serde_yaml::Error) -> Self {
        Error::from_serde_yaml(
            other,
            format!("Invalid {}", SETTINGS_FILE_NAME),
            Some(PathBuf::from(SETTINGS_FILE_NAME)),
        )
    }
}

impl From<minijinja::Error> for crate::Error {
    fn from(other: minijinja::Error) -> Self {
        Error {
            code: Self::TEMPLATE_ERROR,
            message: "Error rendering template".to_string(),
            description: format!("{}", other),
            file: None,
        }
    }
}

/// Reads and parses the settings file from `working_dir`.
pub fn load_settings(working_dir: &Path) -> Result<Settings> {
    let path = working_dir.join(SETTINGS_FILE_NAME);

    let content = std::fs::read_to_string(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error {
                code: Error::MISSING_SETTINGS,
                message: format!("Missing {}", SETTINGS_FILE_NAME),
                description: format!(
                    "Could not find {} in {}. Run `brandkit init` to create one.",
                    SETTINGS_FILE_NAME,
                    working_dir.display()
                ),
                file: Some(PathBuf::from(SETTINGS_FILE_NAME)),
            }
        } else {
            Error::from(e).in_file(Path::new(SETTINGS_FILE_NAME))
        }
    })?;

    Settings::parse(&content)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_settings_file_has_its_own_code() {
        let dir = temp_dir::TempDir::new().unwrap();

        let error = load_settings(dir.path()).unwrap_err();

        assert_eq!(error.code, Error::MISSING_SETTINGS);
        assert_eq!(error.file, Some(PathBuf::from(SETTINGS_FILE_NAME)));
    }

    #[test]
    fn loads_settings_from_the_working_dir() {
        let dir = temp_dir::TempDir::new().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE_NAME), "name: Acme\n").unwrap();

        assert_eq!(load_settings(dir.path()).unwrap().name, "Acme");
    }

    #[test]
    fn displays_message_and_file() {
        let error = Error::invalid_color("#zz", "brand colors").in_file(Path::new("brandkit.yaml"));

        assert!(error
            .to_string()
            .starts_with("Invalid color in brand colors [brandkit.yaml]: Invalid color `#zz` found"));
    }
}
