//! Typed path parameter helpers.

use notes_core::error::AppError;

/// Parses a positive integer id from a path segment.
pub fn parse_id(s: &str) -> Result<i64, AppError> {
    match s.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::validation(format!("Invalid id: {s}"))),
    }
}
