//! Config file loading and saving.
//!
//! The file is always `{path}/{file_name}` from [`Settings`](crate::types::Settings).
//!
//! # Loading
//!
//! A missing file is fine unless it's marked required; the target is then left
//! as it was. A present file must hold a JSON object, which the caller overlays
//! onto the target before walking.
//!
//! # Saving
//!
//! Saving updates an existing file; it never creates one. The directory is
//! created if needed, but the file itself must already be there.

use std::path::Path;

use serde::de::Error as _;
use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Read and parse the config file at `file_path`.
///
/// Returns `None` if the file is missing and not `required`.
pub fn load_file(file_path: &Path, required: bool) -> Result<Option<Map<String, Value>>, ConfigError> {
    let content = match std::fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            tracing::debug!(path = %file_path.display(), "config file not found, skipping");
            return Ok(None);
        }
        Err(e) => {
            return Err(ConfigError::IoError {
                path: file_path.to_path_buf(),
                source: e,
            });
        }
    };

    let parse_error = |source: serde_json::Error| ConfigError::ParseError {
        path: file_path.to_path_buf(),
        source,
    };

    match serde_json::from_str::<Value>(&content).map_err(parse_error)? {
        Value::Object(obj) => Ok(Some(obj)),
        _ => Err(parse_error(serde_json::Error::custom(
            "expected a JSON object at the top level",
        ))),
    }
}

/// Write `value` as tab-indented JSON over the existing file at `file_path`.
///
/// Creates `dir` if it doesn't exist (mode `0700` on unix).
pub fn save_file(dir: &Path, file_path: &Path, value: &Value) -> Result<(), ConfigError> {
    if !dir.exists() {
        create_dir(dir).map_err(|e| ConfigError::IoError {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::metadata(file_path).map_err(|e| ConfigError::IoError {
        path: file_path.to_path_buf(),
        source: e,
    })?;

    let content = to_tab_indented(value)?;

    std::fs::write(file_path, content).map_err(|e| ConfigError::IoError {
        path: file_path.to_path_buf(),
        source: e,
    })
}

fn to_tab_indented(value: &Value) -> Result<Vec<u8>, ConfigError> {
    use serde::Serialize;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).map_err(ConfigError::EncodeError)?;
    Ok(buf)
}

#[cfg(unix)]
fn create_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    std::fs::DirBuilder::new().mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir(dir)
}
