//! Whole-file JSON persistence for the data artifacts.
//!
//! Every artifact is small and rewritten in full on each run. Writes
//! are staged to a temporary file in the destination directory and
//! renamed into place, because the performance history is
//! read-modify-write across runs and a partial write would corrupt it
//! for every later run.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::errors::{Error, Result};

/// Read a JSON file, returning `None` when it does not exist yet.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(&raw)?))
}

/// Serialize `value` pretty-printed and rename it into place, creating
/// the parent directory when needed.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');

    // Stage next to the destination so the final rename stays on one
    // filesystem; a crash mid-write leaves the previous file intact.
    let mut staged = NamedTempFile::new_in(parent)?;
    staged.write_all(json.as_bytes())?;
    staged.persist(path).map_err(|e| Error::Persist {
        path: path.display().to_string(),
        message: e.error.to_string(),
    })?;

    debug!("Wrote {}", path.display());
    Ok(())
}
