//! Course catalog: the built-in course plus file-based replacements.

use std::fs;
use std::path::Path;

use primer_core::model::Course;

use crate::error::ContentError;

/// JSON source for the built-in course, compiled into the binary.
const CALLING_CONVENTIONS: &str = include_str!("courses/calling_conventions.json");

/// Parses the built-in calling-conventions course.
///
/// # Errors
///
/// Returns `ContentError::Parse` if the embedded asset does not
/// deserialize, which only happens when the asset itself has been edited
/// into an invalid state.
pub fn embedded_course() -> Result<Course, ContentError> {
    Ok(serde_json::from_str(CALLING_CONVENTIONS)?)
}

/// Loads a replacement course from a JSON file on disk.
///
/// # Errors
///
/// Returns `ContentError::Io` if the file cannot be read and
/// `ContentError::Parse` if its contents do not deserialize.
pub fn load_course(path: &Path) -> Result<Course, ContentError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
