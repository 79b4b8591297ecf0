//! Fortune period projection: decades (대운), years (세운), months
//! (월운) and days (일운).
//!
//! Both projectors are pure: they return a freshly generated, ordered
//! sequence and never advance shared state.

pub mod annual;
pub mod decade;
pub mod score;
pub mod short_term;
pub mod types;

pub use annual::{
    annual_pillar, default_year_window, find_current_year, korean_age, project_years,
};
pub use decade::{
    decade_start_age, decade_transition, find_active_decade, find_next_decade, life_graph,
    project_decades, traversal,
};
pub use score::period_score;
pub use short_term::{
    clashing_stem, daily_period, month_calendar, monthly_period, project_months,
    short_term_relation, short_term_score,
};
pub use types::{
    AnnualPeriod, DEFAULT_DECADE_COUNT, DailyPeriod, DecadePeriod, DecadeTransition,
    FortuneConfig, FortuneOverview, Gender, LifePoint, MonthlyPeriod, PeriodCategory,
    ShortTermRelation, Traversal, YearHighlight,
};

use saju_time::CivilDate;

use crate::chart::Chart;
use crate::error::SajuError;

/// Decades and the default year window around `as_of`, with the current
/// decade, next decade, transition flag, and current year resolved.
///
/// `birth` is the civil birth date. Age, decade start age and the year
/// window count from it even when the chart's day pillar was taken from
/// the following day under a next-day 子 hour policy.
pub fn fortune_overview(
    chart: &Chart,
    birth: CivilDate,
    gender: Option<Gender>,
    as_of: CivilDate,
    config: &FortuneConfig,
) -> Result<FortuneOverview, SajuError> {
    let gender = gender.ok_or(SajuError::MissingGender)?;
    let decades = project_decades(chart, birth.year(), birth.month(), Some(gender), config)?;
    let age = korean_age(birth.year(), as_of.year());
    let years = project_years(
        chart,
        birth.year(),
        default_year_window(as_of.year()),
        as_of.year(),
    );

    Ok(FortuneOverview {
        traversal: traversal(chart.year.stem(), gender),
        start_age: decade_start_age(birth.month()),
        age,
        current_decade: find_active_decade(&decades, age).copied(),
        next_decade: find_next_decade(&decades, age).copied(),
        transition: decade_transition(&decades, age, config),
        current_year: find_current_year(&years).copied(),
        life_graph: life_graph(&decades),
        decades,
        years,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::build_chart;

    #[test]
    fn overview_resolves_current() {
        let birth = CivilDate::new(1990, 5, 20).unwrap();
        let chart = build_chart(birth, None);
        let as_of = CivilDate::new(2026, 10, 18).unwrap();
        let o = fortune_overview(
            &chart,
            birth,
            Some(Gender::Female),
            as_of,
            &FortuneConfig::default(),
        )
        .unwrap();
        assert_eq!(o.age, 37);
        assert_eq!(o.decades.len(), 8);
        let current = o.current_decade.unwrap();
        assert!(current.contains_age(37));
        assert_eq!(o.next_decade.unwrap().order, current.order + 1);
        assert_eq!(o.current_year.unwrap().year, 2026);
        assert_eq!(o.years.len(), 8);
        assert_eq!(o.life_graph.len(), 80);
        assert_eq!(o.life_graph[0].age, o.decades[0].start_age);
    }

    #[test]
    fn overview_needs_gender() {
        let birth = CivilDate::new(1990, 5, 20).unwrap();
        let chart = build_chart(birth, None);
        assert_eq!(
            fortune_overview(&chart, birth, None, birth, &FortuneConfig::default()),
            Err(SajuError::MissingGender)
        );
    }
}
