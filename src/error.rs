use std::{io, path::PathBuf};

/// Coarse classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ConfigCorrupt,
    SettingsWrite,
    CatalogMissing,
    CatalogCorrupt,
    UnknownLanguage,
    InvalidName,
    AlreadyExists,
    FilesystemError,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read settings from `{}`: {reason}", path.display())]
    ConfigCorrupt { path: PathBuf, reason: String },

    #[error("failed to save settings to `{}`: {source}", path.display())]
    SettingsWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("locale file not found: {}", path.display())]
    CatalogMissing { path: PathBuf },

    #[error("invalid locale file `{}`: {reason}", path.display())]
    CatalogCorrupt { path: PathBuf, reason: String },

    #[error("unknown language `{name}`")]
    UnknownLanguage { name: String },

    #[error("invalid project name: `{name}`")]
    InvalidName { name: String },

    #[error("folder `{name}` already exists at {date}")]
    AlreadyExists { name: String, date: String },

    #[error("failed to create `{}`: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ConfigCorrupt { .. } => ErrorKind::ConfigCorrupt,
            Error::SettingsWrite { .. } => ErrorKind::SettingsWrite,
            Error::CatalogMissing { .. } => ErrorKind::CatalogMissing,
            Error::CatalogCorrupt { .. } => ErrorKind::CatalogCorrupt,
            Error::UnknownLanguage { .. } => ErrorKind::UnknownLanguage,
            Error::InvalidName { .. } => ErrorKind::InvalidName,
            Error::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Error::Filesystem { .. } => ErrorKind::FilesystemError,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
