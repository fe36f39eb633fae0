//! Reading and writing the two file formats leagueops touches: plain text and JSON.
//!
//! Writes go through [`super::atomic::safe_write`].

use crate::core::LeagueOpsError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads a text file, mapping a missing file to [`LeagueOpsError::FileNotFound`].
///
/// # Errors
/// Returns an error with context if the file is missing or cannot be read
pub fn read_text_file(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(LeagueOpsError::FileNotFound {
                path: path.display().to_string(),
            }
            .into())
        }
        Err(e) => Err(anyhow::Error::from(e))
            .with_context(|| format!("Failed to read file: {}", path.display())),
    }
}

/// Writes a text file atomically.
///
/// # Errors
/// Returns an error with context if the file cannot be written
pub fn write_text_file(path: &Path, content: &str) -> Result<()> {
    super::atomic::safe_write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Serializes a JSON value with two-space indentation and a trailing newline.
pub fn to_pretty_json<T>(data: &T) -> Result<String>
where
    T: serde::Serialize,
{
    let mut json = serde_json::to_string_pretty(data).map_err(LeagueOpsError::from)?;
    json.push('\n');
    Ok(json)
}

/// Writes data as pretty JSON to a file atomically.
///
/// # Errors
/// Returns an error if serialization fails or the file cannot be written
pub fn write_json_file<T>(path: &Path, data: &T) -> Result<()>
where
    T: serde::Serialize,
{
    let json = to_pretty_json(data)?;
    write_text_file(path, &json)
        .with_context(|| format!("Failed to write JSON file: {}", path.display()))
}
