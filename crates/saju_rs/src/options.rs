//! Bundled options for the convenience functions.

use saju_base::{ChartConfig, CompatibilityWeights, FortuneConfig};
use serde::{Deserialize, Serialize};

use crate::error::ReadingError;

/// Chart, fortune, and compatibility options in one document. Missing
/// fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingOptions {
    pub chart: ChartConfig,
    pub fortune: FortuneConfig,
    pub compatibility: CompatibilityWeights,
}

impl ReadingOptions {
    /// Decode from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, ReadingError> {
        Ok(serde_json::from_str(text)?)
    }
}
