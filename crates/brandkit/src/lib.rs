use thiserror::Error;

pub mod commands {
    pub mod build;
    pub mod dev;
    pub mod init;
    pub mod palette;
    pub mod themes;
}

mod builder;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    IoError(#[from] std::io::Error),
    #[error("{0}")]
    General(String),
    #[error("Found {} issue(s) in your brand settings", .0.len())]
    Settings(Vec<libbrandkit::Error>),
}

impl From<libbrandkit::Error> for Error {
    fn from(other: libbrandkit::Error) -> Self {
        Error::Settings(vec![other])
    }
}
