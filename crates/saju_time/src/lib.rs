//! Civil calendar support for saju chart construction.
//!
//! This crate provides:
//! - Validated civil date and wall-clock time values (`CivilDate`, `WallTime`)
//! - Julian Day Number conversions for day counting
//! - The 24 solar terms and their fixed rule-of-thumb cutover days
//! - The `CalendarService` boundary for externally supplied term dates

pub mod calendar_service;
pub mod civil;
pub mod error;
pub mod julian;
pub mod solar_term;

pub use calendar_service::{
    CalendarService, FixedCalendar, LunarDate, SolarTermCutovers, TabulatedCalendar,
};
pub use civil::{BirthMoment, CivilDate, WallTime};
pub use error::TimeError;
pub use julian::{J2000_JDN, jdn_to_calendar, julian_day_number};
pub use solar_term::{
    ALL_SOLAR_TERMS, SolarTerm, SolarTermEntry, fixed_cutover_day, fixed_ipchun_day,
};
