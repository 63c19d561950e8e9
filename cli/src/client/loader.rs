use crate::core::error::PmresError;
use crate::debug_log;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads and parses a JSON document from disk.
pub fn load_json_document(path: &Path) -> Result<Value, PmresError> {
    let display_path = crate::core::paths::clean_path(path);

    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => PmresError::FileNotFound(display_path.clone()),
        _ => PmresError::Io(err),
    })?;
    debug_log!("Read {} bytes from {display_path}", content.len());

    serde_json::from_str(&content).map_err(|source| PmresError::InvalidJson {
        path: display_path,
        source,
    })
}
