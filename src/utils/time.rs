//! Duration utilities: task time is always whole minutes.

use crate::errors::{AppError, AppResult};

/// Parse a task duration in rounded minutes. Negative values are rejected.
pub fn parse_duration(s: &str) -> AppResult<i64> {
    let trimmed = s.trim();
    match trimmed.parse::<i64>() {
        Ok(m) if m >= 0 => Ok(m),
        _ => Err(AppError::InvalidDuration(trimmed.to_string())),
    }
}
