//! Convenience wrapper for the saju Four Pillars engine.
//!
//! Accepts dates and times as text, fills in "today" from the local
//! clock, and bundles chart, analysis and fortune into one `Reading`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use saju_rs::*;
//!
//! let r = reading("1990-05-20", Some("14:00"), Gender::Female).unwrap();
//! println!("day master: {}", r.chart.day_master().korean_name());
//! println!("strength: {:?}", r.analysis.strength.level);
//! ```

pub mod convenience;
pub mod error;
pub mod options;

pub use convenience::{
    Reading, chart, chart_for, compatibility, daily_fortune, hour_candidates, monthly_fortune,
    parse_birth, reading, reading_as_of, today,
};
pub use error::ReadingError;
pub use options::ReadingOptions;

// Re-export core types so callers don't need to depend on saju_base directly.
pub use saju_base::{
    Branch, Chart, ChartAnalysis, ChartConfig, CompatibilityResult, CompatibilityWeights,
    DailyPeriod, Element, FortuneConfig, FortuneOverview, Gender, Grade, MonthlyPeriod,
    PeriodCategory, Pillar, PillarPosition, Sinsal, Stem, StrengthLevel, TenGod, YearHighlight,
    ZiHourPolicy,
};
pub use saju_time::{BirthMoment, CivilDate, WallTime};
