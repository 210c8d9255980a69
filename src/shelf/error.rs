use crate::model::Field;
use crate::validate::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Invalid {field}: {source}")]
    Validation {
        field: Field,
        #[source]
        source: ValidationError,
    },

    #[error("No book at position {} (library has {len})", .index + 1)]
    IndexOutOfRange { index: usize, len: usize },

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Snapshot version {found} is not supported (expected {expected})")]
    IncompatibleSnapshot { found: u32, expected: u32 },

    #[error("Config error: {0}")]
    Config(String),
}

impl ShelfError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ShelfError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn validation(field: Field, source: ValidationError) -> Self {
        ShelfError::Validation { field, source }
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
