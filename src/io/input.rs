//! Reading screen exports.
//!
//! An export is either `{ "screens": [...] }` or a bare array of screens.

use crate::core::{Error, Result, Screen};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse a screen export file. Nothing is returned on partial success.
pub fn load_screens(path: &Path) -> Result<Vec<Screen>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read screen export", path, e))?;

    let screens = parse_screens(&contents).map_err(|message| Error::input(path, message))?;
    tracing::debug!("Loaded {} screen(s) from {}", screens.len(), path.display());
    Ok(screens)
}

pub fn parse_screens(json: &str) -> std::result::Result<Vec<Screen>, String> {
    let document: Value = serde_json::from_str(json).map_err(|e| e.to_string())?;

    let screens = match document {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => match map.remove("screens") {
            Some(screens @ Value::Array(_)) => screens,
            Some(_) => return Err("\"screens\" must be an array".to_string()),
            None => return Err("expected a \"screens\" array or a bare array of screens".to_string()),
        },
        _ => return Err("expected a \"screens\" array or a bare array of screens".to_string()),
    };

    serde_json::from_value(screens).map_err(|e| e.to_string())
}
