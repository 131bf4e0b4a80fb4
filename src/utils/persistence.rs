//! Paths under ~/.cluedo/ and JSON file reading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::errors::{CluedoError, Result};

/// Get the ~/.cluedo/ directory path, creating it if needed.
pub fn cluedo_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".cluedo");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.cluedo/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(cluedo_dir()?.join(filename))
}

/// Read a JSON file. A missing file is `Ok(None)`; unreadable or malformed
/// content is an error.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|source| CluedoError::Config {
            path: path.to_path_buf(),
            source,
        })
}
