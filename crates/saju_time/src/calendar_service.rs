//! Boundary to an external calendar service (solar terms, lunar dates).
//!
//! The engine only needs the dates of the twelve sectional terms of a
//! civil year. A service that has no data for a year returns `None` and
//! the fixed cutover tables are used instead; that is a normal branch,
//! not an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::civil::CivilDate;
use crate::solar_term::{SolarTerm, SolarTermEntry, fixed_cutover_day, fixed_ipchun_day};

/// A date in the Korean lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    /// True inside an intercalary (윤달) month.
    pub is_leap_month: bool,
}

/// Source of solar-term and lunar-date data.
pub trait CalendarService {
    /// Dated solar terms of a civil year, in any order. `None` if unavailable.
    fn solar_terms_for_year(&self, year: i32) -> Option<Vec<SolarTermEntry>>;

    /// Lunar date for a civil date. `None` if unavailable.
    fn lunar_for(&self, date: CivilDate) -> Option<LunarDate>;
}

/// Service with no data: every lookup falls back to the fixed tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCalendar;

impl CalendarService for FixedCalendar {
    fn solar_terms_for_year(&self, _year: i32) -> Option<Vec<SolarTermEntry>> {
        None
    }

    fn lunar_for(&self, _date: CivilDate) -> Option<LunarDate> {
        None
    }
}

/// In-memory service filled by the host, e.g. from a cached government
/// calendar feed.
#[derive(Debug, Clone, Default)]
pub struct TabulatedCalendar {
    terms: HashMap<i32, Vec<SolarTermEntry>>,
    lunar: HashMap<CivilDate, LunarDate>,
}

impl TabulatedCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add solar-term entries. Entries are filed under their own civil year.
    pub fn with_terms(mut self, entries: impl IntoIterator<Item = SolarTermEntry>) -> Self {
        for entry in entries {
            self.terms.entry(entry.date.year()).or_default().push(entry);
        }
        self
    }

    pub fn with_lunar(mut self, date: CivilDate, lunar: LunarDate) -> Self {
        self.lunar.insert(date, lunar);
        self
    }
}

impl CalendarService for TabulatedCalendar {
    fn solar_terms_for_year(&self, year: i32) -> Option<Vec<SolarTermEntry>> {
        self.terms.get(&year).cloned()
    }

    fn lunar_for(&self, date: CivilDate) -> Option<LunarDate> {
        self.lunar.get(&date).copied()
    }
}

/// Day-of-month on which each civil month's solar month begins, for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarTermCutovers {
    year: i32,
    /// Index 0 = January. February's entry is the 입춘 day.
    days: [u32; 12],
}

impl SolarTermCutovers {
    /// Cutovers from the fixed tables only.
    pub fn fixed(year: i32) -> Self {
        let mut days = [0u32; 12];
        for (i, day) in days.iter_mut().enumerate() {
            *day = fixed_cutover_day(i as u32 + 1);
        }
        days[1] = fixed_ipchun_day(year);
        Self { year, days }
    }

    /// Cutovers refined by the service where it has sectional-term dates for
    /// `year`; any month it does not cover keeps its fixed day.
    pub fn resolve(service: &dyn CalendarService, year: i32) -> Self {
        let mut cutovers = Self::fixed(year);
        let Some(entries) = service.solar_terms_for_year(year) else {
            debug!(year, "no solar-term data from calendar service, using fixed cutovers");
            return cutovers;
        };
        for entry in entries
            .iter()
            .filter(|e| e.term.is_sectional() && e.date.year() == year)
        {
            let month = entry.date.month();
            if SolarTerm::sectional_for_month(month) == entry.term {
                cutovers.days[(month - 1) as usize] = entry.date.day();
            }
        }
        cutovers
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// February day on which the solar year begins.
    pub const fn ipchun_day(&self) -> u32 {
        self.days[1]
    }

    /// Day on which civil `month` (1-12) enters its own solar month.
    pub fn cutover_day(&self, month: u32) -> u32 {
        self.days[((month + 11) % 12) as usize]
    }
}
