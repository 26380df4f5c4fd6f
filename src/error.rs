use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::meta::Kind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Not a pointer: expected a value to walk into, found nothing")]
    NotAPointer,

    #[error("Not a struct: only objects can be walked")]
    NotAStruct,

    #[error("Type not supported: {kind} (field '{key}')")]
    TypeNotSupported { key: String, kind: Kind },

    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to encode config: {0}")]
    EncodeError(#[source] serde_json::Error),

    #[error("Invalid integer '{value}' for '{key}': {source}")]
    ParseInt {
        key: String,
        value: String,
        source: ParseIntError,
    },

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

impl ConfigError {
    /// True when the error is a missing config file.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::IoError { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
