use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Coarse classification of every failure the catalog can report.
///
/// The `Display` form is what lands in the error log after the raw input,
/// so it must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    MalformedEntry,
    InvalidIsbn,
    DuplicateIsbn,
    NotFound,
    IoFailure,
    InvalidFileName,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::MalformedEntry => "MalformedEntry",
            ErrorKind::InvalidIsbn => "InvalidISBN",
            ErrorKind::DuplicateIsbn => "DuplicateISBN",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::IoFailure => "IOFailure",
            ErrorKind::InvalidFileName => "InvalidFileName",
            ErrorKind::Config => "Config",
        };
        f.write_str(name)
    }
}

/// Why a raw catalog line was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0}")]
    MalformedEntry(String),

    #[error("{0}")]
    InvalidIsbn(String),
}

impl ValidationError {
    pub fn malformed(message: impl Into<String>) -> Self {
        ValidationError::MalformedEntry(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::MalformedEntry(_) => ErrorKind::MalformedEntry,
            ValidationError::InvalidIsbn(_) => ErrorKind::InvalidIsbn,
        }
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Duplicate ISBN found: {0}")]
    DuplicateIsbn(String),

    #[error("No book with ISBN {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Invalid(e) => e.kind(),
            CatalogError::DuplicateIsbn(_) => ErrorKind::DuplicateIsbn,
            CatalogError::NotFound(_) => ErrorKind::NotFound,
            CatalogError::Io(_) => ErrorKind::IoFailure,
            CatalogError::InvalidFileName(_) => ErrorKind::InvalidFileName,
            CatalogError::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
