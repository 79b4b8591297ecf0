//! Year fortune (세운) projection.
//!
//! Year pillars come straight from the calendar year: no solar-term
//! adjustment applies to a whole-year window.

use std::ops::RangeInclusive;

use crate::chart::Chart;
use crate::ganji::{Pillar, year_ganji};
use crate::interaction::is_six_clash;
use crate::ten_god::ten_god;

use super::score::period_score;
use super::types::AnnualPeriod;

/// Years before the reference year included by default.
pub const YEARS_BEFORE: i32 = 2;
/// Years after the reference year included by default.
pub const YEARS_AFTER: i32 = 5;

/// Traditional East-Asian age: 1 in the birth year, +1 each new year.
pub const fn korean_age(birth_year: i32, year: i32) -> i32 {
    year - birth_year + 1
}

/// Pillar of a calendar year, `(year - 1984) mod 60`.
pub const fn annual_pillar(year: i32) -> Pillar {
    year_ganji(year)
}

/// `as_of_year - 2 ..= as_of_year + 5`.
pub const fn default_year_window(as_of_year: i32) -> RangeInclusive<i32> {
    (as_of_year - YEARS_BEFORE)..=(as_of_year + YEARS_AFTER)
}

/// One period per year of `window`, in order.
pub fn project_years(
    chart: &Chart,
    birth_year: i32,
    window: RangeInclusive<i32>,
    as_of_year: i32,
) -> Vec<AnnualPeriod> {
    let dm = chart.day_master();
    let natal_branch = chart.year.branch();
    window
        .map(|year| {
            let pillar = annual_pillar(year);
            AnnualPeriod {
                year,
                age: korean_age(birth_year, year),
                pillar,
                ten_god: ten_god(dm, pillar.stem()),
                score: period_score(dm, pillar),
                is_current: year == as_of_year,
                clashes_natal_year: is_six_clash(pillar.branch(), natal_branch),
            }
        })
        .collect()
}

/// The period flagged current, if the window includes it.
pub fn find_current_year(years: &[AnnualPeriod]) -> Option<&AnnualPeriod> {
    years.iter().find(|y| y.is_current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> Chart {
        Chart {
            year: Pillar::from_cycle_index(6), // 경오
            month: Pillar::from_cycle_index(15),
            day: Pillar::from_cycle_index(0),
            hour: None,
        }
    }

    #[test]
    fn ages() {
        assert_eq!(korean_age(1990, 1990), 1);
        assert_eq!(korean_age(1990, 2026), 37);
    }

    #[test]
    fn window_defaults() {
        let w = default_year_window(2026);
        assert_eq!(*w.start(), 2024);
        assert_eq!(*w.end(), 2031);
    }

    #[test]
    fn years_in_order() {
        let ys = project_years(&chart(), 1990, default_year_window(2026), 2026);
        assert_eq!(ys.len(), 8);
        assert_eq!(ys[0].year, 2024);
        assert_eq!(ys[0].pillar.korean_name(), "갑진");
        assert_eq!(ys[2].pillar.korean_name(), "병오");
        assert_eq!(find_current_year(&ys).map(|y| y.year), Some(2026));
        assert_eq!(ys.iter().filter(|y| y.is_current).count(), 1);
    }

    #[test]
    fn clash_with_natal_year() {
        // 오 natal year; 2032 is 임자
        let ys = project_years(&chart(), 1990, 2031..=2033, 2026);
        let flagged: Vec<_> = ys.iter().filter(|y| y.clashes_natal_year).map(|y| y.year).collect();
        assert_eq!(flagged, vec![2032]);
        assert!(find_current_year(&ys).is_none());
    }
}
