//! Error types for time conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar validation and instant parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is outside its valid range.
    InvalidDate(&'static str),
    /// An ISO-8601 instant string could not be parsed.
    Parse(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::Parse(msg) => write!(f, "instant parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
