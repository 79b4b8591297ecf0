//! Error types for saju calculations.

use saju_time::TimeError;
use thiserror::Error;

use crate::branch::Branch;
use crate::stem::Stem;

/// Errors from chart construction, analysis, and period projection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SajuError {
    /// Caller supplied a date or time that does not exist.
    #[error("invalid date: {0}")]
    InvalidDate(#[from] TimeError),
    /// Decade direction needs a gender and none was given.
    #[error("gender is required to determine decade direction")]
    MissingGender,
    /// The operation needs a pillar the chart does not have.
    #[error("incomplete chart: {0}")]
    IncompleteChart(&'static str),
    /// A stem and branch of different parity were paired.
    #[error("{stem:?} and {branch:?} do not form a sexagenary pillar")]
    MismatchedPolarity { stem: Stem, branch: Branch },
}
