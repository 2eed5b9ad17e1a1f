//! Bound checks shared by question titles, choice texts and points.

use thiserror::Error;

/// Title length limits (in characters).
pub const TITLE_MIN_LENGTH: usize = 1;
pub const TITLE_MAX_LENGTH: usize = 200;

/// Choice text length limits (in characters).
pub const CHOICE_TEXT_MIN_LENGTH: usize = 1;
pub const CHOICE_TEXT_MAX_LENGTH: usize = 200;

/// Points limits.
pub const POINTS_MIN: u32 = 1;
pub const POINTS_MAX: u32 = 100;

/// Points awarded when none are given.
pub const DEFAULT_POINTS: u32 = 1;

/// Rejected input for a question or one of its choices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("points must be between {min} and {max} (got {points})")]
    PointsOutOfRange { points: u32, min: u32, max: u32 },

    #[error("a question cannot hold more than {max} choices")]
    TooManyChoices { max: u32 },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Empty { field } | ValidationError::TooLong { field, .. } => field,
            ValidationError::PointsOutOfRange { .. } => "points",
            ValidationError::TooManyChoices { .. } => "choices",
        }
    }
}

/// Validates a question title.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    validate_length("title", title, TITLE_MIN_LENGTH, TITLE_MAX_LENGTH)
}

/// Validates the text of a choice.
pub fn validate_choice_text(text: &str) -> Result<(), ValidationError> {
    validate_length("choice text", text, CHOICE_TEXT_MIN_LENGTH, CHOICE_TEXT_MAX_LENGTH)
}

/// Validates the points a question is worth.
pub fn validate_points(points: u32) -> Result<(), ValidationError> {
    if !(POINTS_MIN..=POINTS_MAX).contains(&points) {
        return Err(ValidationError::PointsOutOfRange {
            points,
            min: POINTS_MIN,
            max: POINTS_MAX,
        });
    }

    Ok(())
}

/// Lengths are counted in chars, not bytes, so "é" is one character.
/// Whitespace is not trimmed.
fn validate_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();

    if actual < min {
        return Err(ValidationError::Empty { field });
    }

    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }

    Ok(())
}
