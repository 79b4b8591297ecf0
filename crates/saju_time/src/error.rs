//! Error types for civil date/time handling.

use thiserror::Error;

/// Errors from civil date/time construction or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The (year, month, day) triple does not name a proleptic Gregorian date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour or minute out of range.
    #[error("invalid wall-clock time {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
    /// Text input did not match the expected format.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<chrono::ParseError> for TimeError {
    fn from(e: chrono::ParseError) -> Self {
        Self::Parse(e.to_string())
    }
}
