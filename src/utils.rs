// ABOUTME: Utility functions for the reveal-deck library
// ABOUTME: Filesystem helpers used when exporting presentations

use crate::errors::{DeckError, Result};
use std::path::Path;

/// Ensure a directory exists, creating it if necessary.
///
/// Creating an already-existing directory is not an error.
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(DeckError::Io)?;
    } else if !path.is_dir() {
        return Err(DeckError::InvalidArgument(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a file's parent directory exists.
pub fn ensure_parent_directory_exists(file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory_exists(parent)?;
        }
    }
    Ok(())
}
