use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::errors::{LoaderError, Result};

/// Reads `path` and parses its whole contents as a single JSON value.
pub fn read_json_file(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path).map_err(|source| LoaderError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| LoaderError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `contents` to a per-process scratch file and returns its path.
#[cfg(test)]
pub(crate) fn write_temp_file(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("load-ddb-{}-{name}", std::process::id()));
    fs::write(&path, contents).expect("scratch file should be writable");
    path
}
