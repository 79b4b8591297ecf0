//! Error type for the convenience layer.

use saju_base::SajuError;
use saju_time::TimeError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReadingError {
    /// Date or time text could not be parsed or does not exist.
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Saju(#[from] SajuError),
    /// Options document could not be decoded.
    #[error("invalid options: {0}")]
    Options(#[from] serde_json::Error),
}
