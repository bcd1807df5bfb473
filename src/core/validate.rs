//! # Query Validation
//!
//! Synchronous checks applied at the input boundary, before any
//! classification happens. Rules run in a fixed order and the first
//! failure wins; a query that passes all three is handed to the responder.

use std::fmt;

/// Minimum raw length (in characters) for a submittable question.
pub const MIN_QUERY_CHARS: usize = 10;

/// The three ways a query can be rejected. `Display` is the exact text
/// shown in the error banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing but whitespace.
    Empty,
    /// Fewer than [`MIN_QUERY_CHARS`] characters, measured on the raw
    /// untrimmed text.
    TooShort,
    /// No ASCII alphabetic character anywhere in the text.
    NoAlphabetic,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "Please enter a question"),
            ValidationError::TooShort => {
                write!(f, "Question too short - please provide more details")
            }
            ValidationError::NoAlphabetic => write!(f, "Please enter a valid question"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate raw query text. Pure; no side effects, no panics.
///
/// Length is deliberately measured on the untrimmed text: "   hello  "
/// passes the length check on padding alone. This mirrors the behavior the
/// form has always had; changing it would reject queries users could
/// previously submit.
pub fn validate(query: &str) -> Result<(), ValidationError> {
    if query.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    if query.chars().count() < MIN_QUERY_CHARS {
        return Err(ValidationError::TooShort);
    }

    if !query.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::NoAlphabetic);
    }

    Ok(())
}
