//! Validation errors shared by the add form and the edit session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum task text length in characters, measured after trimming.
pub const MIN_TASK_TEXT_LENGTH: usize = 3;

/// Reasons a task text is rejected.
///
/// These are presentation hints rather than faults: the rejected input is
/// dropped and the previous valid state is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// The text is empty or whitespace only.
    #[error("Task is required")]
    Empty,
    /// The trimmed text is shorter than [`MIN_TASK_TEXT_LENGTH`].
    #[error("Task minimum length is 3")]
    TooShort,
}

impl ValidationError {
    /// Stable machine-readable code (`"empty"` or `"too_short"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::TooShort => "too_short",
        }
    }
}

/// Validates task text for both the add form and the edit session.
///
/// Returns the trimmed text on success. Length is counted in characters so
/// multi-byte input is not penalized.
///
/// # Errors
///
/// Returns [`ValidationError::Empty`] when nothing but whitespace remains,
/// or [`ValidationError::TooShort`] when fewer than
/// [`MIN_TASK_TEXT_LENGTH`] characters remain.
pub fn validate_task_text(text: &str) -> Result<&str, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if trimmed.chars().count() < MIN_TASK_TEXT_LENGTH {
        return Err(ValidationError::TooShort);
    }
    Ok(trimmed)
}
