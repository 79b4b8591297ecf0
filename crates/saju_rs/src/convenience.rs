use chrono::Local;
use saju_base::{
    Chart, ChartAnalysis, CompatibilityResult, DailyPeriod, FortuneOverview, Gender,
    MonthlyPeriod, Pillar, analyze, build_chart_with, candidate_hour_pillars, daily_period,
    fortune_overview, project_months, score_compatibility_with,
};
use saju_time::{BirthMoment, CivilDate, FixedCalendar, WallTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ReadingError;
use crate::options::ReadingOptions;

/// Chart, analysis and fortune overview for one birth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub birth: BirthMoment,
    pub chart: Chart,
    pub analysis: ChartAnalysis,
    pub fortune: FortuneOverview,
}

/// Today's date on the local clock.
pub fn today() -> CivilDate {
    CivilDate::from_naive(Local::now().date_naive())
}

/// Parse `YYYY-MM-DD` and optional `HH:MM`. A `None` or blank time means
/// the time is unknown.
pub fn parse_birth(date: &str, time: Option<&str>) -> Result<BirthMoment, ReadingError> {
    let date: CivilDate = date.parse()?;
    let time = match time.map(str::trim) {
        Some(t) if !t.is_empty() => Some(t.parse::<WallTime>()?),
        _ => None,
    };
    Ok(BirthMoment::new(date, time))
}

/// Build a chart from a parsed birth with the given options.
pub fn chart_for(birth: BirthMoment, options: &ReadingOptions) -> Chart {
    build_chart_with(birth.date, birth.time, &options.chart, &FixedCalendar)
}

/// Build a chart from date/time text with default options.
///
/// Shorthand for `chart_for(parse_birth(date, time)?, &ReadingOptions::default())`.
pub fn chart(date: &str, time: Option<&str>) -> Result<Chart, ReadingError> {
    Ok(chart_for(parse_birth(date, time)?, &ReadingOptions::default()))
}

/// Full reading as of a given date.
///
/// The chart follows `options.chart.zi_hour`, so a late 子 hour birth may
/// be charted on the next day. Age and decade timing still count from the
/// civil birth date.
pub fn reading_as_of(
    birth: BirthMoment,
    gender: Gender,
    as_of: CivilDate,
    options: &ReadingOptions,
) -> Result<Reading, ReadingError> {
    let chart = chart_for(birth, options);
    let analysis = analyze(&chart);
    let fortune = fortune_overview(&chart, birth.date, Some(gender), as_of, &options.fortune)?;
    debug!(birth = %birth.date, %as_of, "reading assembled");
    Ok(Reading {
        birth,
        chart,
        analysis,
        fortune,
    })
}

/// Full reading from text as of today, with default options.
pub fn reading(date: &str, time: Option<&str>, gender: Gender) -> Result<Reading, ReadingError> {
    reading_as_of(
        parse_birth(date, time)?,
        gender,
        today(),
        &ReadingOptions::default(),
    )
}

/// Compatibility of two births given as text.
pub fn compatibility(
    a: (&str, Option<&str>),
    b: (&str, Option<&str>),
    options: &ReadingOptions,
) -> Result<CompatibilityResult, ReadingError> {
    let chart_a = chart_for(parse_birth(a.0, a.1)?, options);
    let chart_b = chart_for(parse_birth(b.0, b.1)?, options);
    Ok(score_compatibility_with(
        &chart_a,
        &chart_b,
        &options.compatibility,
    ))
}

/// The twelve possible hour pillars for a birth date whose time is unknown.
pub fn hour_candidates(date: &str) -> Result<[Pillar; 12], ReadingError> {
    let chart = chart(date, None)?;
    Ok(candidate_hour_pillars(chart.day_master()))
}

/// Twelve solar months of `year` for the birth's day master.
pub fn monthly_fortune(
    date: &str,
    time: Option<&str>,
    year: i32,
) -> Result<Vec<MonthlyPeriod>, ReadingError> {
    let chart = chart(date, time)?;
    Ok(project_months(chart.day_master(), year)?)
}

/// One day's period for the birth's day master.
pub fn daily_fortune(
    date: &str,
    time: Option<&str>,
    on: CivilDate,
) -> Result<DailyPeriod, ReadingError> {
    let chart = chart(date, time)?;
    Ok(daily_period(chart.day_master(), on))
}
