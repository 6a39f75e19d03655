//! Reading layout files.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::fs;
use std::path::Path;

use venue_canvas::doc::{SceneSnapshot, SceneStore};

use crate::CliError;

/// Parse and validate a `{ "scenes": [...], "activeSceneId": ... }` document.
///
/// # Errors
///
/// Returns [`CliError::Json`] for malformed JSON and [`CliError::Doc`] when
/// the scenes break the collection rules (empty, duplicate ids).
pub fn parse_layout(text: &str) -> Result<SceneStore, CliError> {
    let snapshot: SceneSnapshot = serde_json::from_str(text)?;
    Ok(SceneStore::try_from_snapshot(snapshot)?)
}

/// # Errors
///
/// As [`parse_layout`], plus [`CliError::Io`] when the file cannot be read.
pub fn load_layout(path: &Path) -> Result<SceneStore, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io { path: path.display().to_string(), source })?;
    parse_layout(&text)
}
