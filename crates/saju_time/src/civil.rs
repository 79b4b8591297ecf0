//! Civil (local wall-clock) date and time values.
//!
//! No timezone or DST handling: a birth is charted on the wall-clock
//! reading the caller supplies.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::julian_day_number;

/// A validated proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CivilDate(NaiveDate);

impl CivilDate {
    /// Validate and build a date. Rejects e.g. Feb 30.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(TimeError::InvalidDate { year, month, day })
    }

    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub const fn naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month, 1-based.
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Day of month, 1-based.
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Julian Day Number of this date.
    pub fn jdn(self) -> i64 {
        julian_day_number(self.year(), self.month(), self.day())
    }

    /// Date shifted by a signed number of days. `None` outside chrono's range.
    pub fn add_days(self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(Duration::days(days)).map(Self)
    }

    /// The following civil day (saturates at the end of the supported range).
    pub fn next_day(self) -> Self {
        self.add_days(1).unwrap_or(self)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?))
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Local wall-clock time of day, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWallTime", into = "RawWallTime")]
pub struct WallTime {
    hour: u8,
    minute: u8,
}

#[derive(Serialize, Deserialize)]
struct RawWallTime {
    hour: u32,
    minute: u32,
}

impl TryFrom<RawWallTime> for WallTime {
    type Error = TimeError;

    fn try_from(raw: RawWallTime) -> Result<Self, Self::Error> {
        Self::new(raw.hour, raw.minute)
    }
}

impl From<WallTime> for RawWallTime {
    fn from(t: WallTime) -> Self {
        Self {
            hour: t.hour as u32,
            minute: t.minute as u32,
        }
    }
}

impl WallTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 {
            return Err(TimeError::InvalidTime { hour, minute });
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }
}

impl FromStr for WallTime {
    type Err = TimeError;

    /// Parse `HH:MM` (24-hour clock).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = NaiveTime::parse_from_str(s.trim(), "%H:%M")?;
        Self::new(t.hour(), t.minute())
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A birth (or query) instant: a date plus an optional time of day.
///
/// `time == None` means the time is unknown, not midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthMoment {
    pub date: CivilDate,
    pub time: Option<WallTime>,
}

impl BirthMoment {
    pub const fn new(date: CivilDate, time: Option<WallTime>) -> Self {
        Self { date, time }
    }

    pub const fn date_only(date: CivilDate) -> Self {
        Self { date, time: None }
    }
}
