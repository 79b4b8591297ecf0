//! Decade fortune (대운) projection.
//!
//! Decades step from the month pillar, one cycle position per decade,
//! forward or backward by gender and year-stem polarity.

use tracing::debug;

use crate::chart::Chart;
use crate::error::SajuError;
use crate::stem::Stem;
use crate::ten_god::ten_god;

use super::score::{PERIOD_CEILING, PERIOD_FLOOR, period_score};
use super::types::{
    DecadePeriod, DecadeTransition, FortuneConfig, Gender, LifePoint, Traversal, YEARS_PER_DECADE,
};

// ── Direction and start age ──────────────────────────────────────────

/// Forward for a yang year and male, or a yin year and female.
pub const fn traversal(year_stem: Stem, gender: Gender) -> Traversal {
    match (gender, year_stem.is_yang()) {
        (Gender::Male, true) | (Gender::Female, false) => Traversal::Forward,
        _ => Traversal::Reverse,
    }
}

/// Age at which the first decade begins, estimated from the birth month
/// alone: `floor((month * 3 + 1) / 12) + 1`, bounded to 1-10.
///
/// Approximation: the traditional rule counts the days from birth to the
/// nearest sectional term and divides by three.
pub const fn decade_start_age(birth_month: u32) -> u8 {
    let age = (birth_month * 3 + 1) / 12 + 1;
    if age > 10 { 10 } else { age as u8 }
}

// ── Generation ───────────────────────────────────────────────────────

/// Project `config.decade_count` decades for `chart`.
///
/// Decade `k` (1-based) covers ages `start + (k-1)*10 ..= start + (k-1)*10 + 9`
/// and carries the month pillar stepped `k` positions in the traversal
/// direction. Fails with `MissingGender` when `gender` is `None`.
pub fn project_decades(
    chart: &Chart,
    birth_year: i32,
    birth_month: u32,
    gender: Option<Gender>,
    config: &FortuneConfig,
) -> Result<Vec<DecadePeriod>, SajuError> {
    let gender = gender.ok_or(SajuError::MissingGender)?;
    let direction = traversal(chart.year.stem(), gender);
    let start_age = decade_start_age(birth_month) as u16;
    let dm = chart.day_master();
    debug!(?direction, start_age, "projecting decades");

    let periods = (1..=config.decade_count)
        .map(|order| {
            let start = start_age + (order as u16 - 1) * YEARS_PER_DECADE;
            let end = start + YEARS_PER_DECADE - 1;
            let pillar = chart.month.offset(direction.step() * order as i64);
            DecadePeriod {
                order,
                start_age: start,
                end_age: end,
                start_year: birth_year + start as i32 - 1,
                end_year: birth_year + end as i32 - 1,
                pillar,
                ten_god: ten_god(dm, pillar.stem()),
                score: period_score(dm, pillar),
            }
        })
        .collect();
    Ok(periods)
}

// ── Queries ──────────────────────────────────────────────────────────

/// Decade whose age range contains `age`.
pub fn find_active_decade(decades: &[DecadePeriod], age: i32) -> Option<&DecadePeriod> {
    decades.iter().find(|d| d.contains_age(age))
}

/// Decade right after the one containing `age`; the first decade when
/// `age` precedes them all.
pub fn find_next_decade(decades: &[DecadePeriod], age: i32) -> Option<&DecadePeriod> {
    decades.iter().find(|d| d.start_age as i32 > age)
}

/// Years until the current decade ends, and whether the next decade begins
/// within the configured window. `None` outside the projected span; never
/// transitioning inside the last projected decade.
pub fn decade_transition(
    decades: &[DecadePeriod],
    age: i32,
    config: &FortuneConfig,
) -> Option<DecadeTransition> {
    let current = find_active_decade(decades, age)?;
    let years_until_next = current.end_age as i32 + 1 - age;
    let has_next = find_next_decade(decades, age).is_some();
    Some(DecadeTransition {
        years_until_next,
        is_transitioning: has_next && years_until_next <= config.transition_window_years as i32,
    })
}

// ── Life curve ───────────────────────────────────────────────────────

/// One point per age across `decades`: the decade score swung by
/// `sin(age / 2) * 10`, clamped to 20-95 and rounded.
pub fn life_graph(decades: &[DecadePeriod]) -> Vec<LifePoint> {
    decades
        .iter()
        .flat_map(|d| (d.start_age..=d.end_age).map(move |age| (age, d.score)))
        .map(|(age, base)| {
            let swing = (f64::from(age) * 0.5).sin() * 10.0;
            let score = (f64::from(base) + swing)
                .clamp(f64::from(PERIOD_FLOOR), f64::from(PERIOD_CEILING))
                .round();
            LifePoint { age, score: score as u8 }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganji::Pillar;

    fn chart(year: i64, month: i64) -> Chart {
        Chart {
            year: Pillar::from_cycle_index(year),
            month: Pillar::from_cycle_index(month),
            day: Pillar::from_cycle_index(0),
            hour: None,
        }
    }

    #[test]
    fn direction_rule() {
        assert_eq!(traversal(Stem::Gap, Gender::Male), Traversal::Forward);
        assert_eq!(traversal(Stem::Gap, Gender::Female), Traversal::Reverse);
        assert_eq!(traversal(Stem::Eul, Gender::Male), Traversal::Reverse);
        assert_eq!(traversal(Stem::Eul, Gender::Female), Traversal::Forward);
    }

    #[test]
    fn start_ages() {
        assert_eq!(decade_start_age(1), 1);
        assert_eq!(decade_start_age(4), 2);
        assert_eq!(decade_start_age(8), 3);
        assert_eq!(decade_start_age(12), 4);
        for m in 1..=12 {
            assert!((1..=10).contains(&decade_start_age(m)));
        }
    }

    #[test]
    fn missing_gender() {
        let r = project_decades(&chart(0, 14), 1984, 3, None, &FortuneConfig::default());
        assert_eq!(r, Err(SajuError::MissingGender));
    }

    #[test]
    fn forward_steps() {
        // 갑 year (yang), male: forward from 무인 (14)
        let c = chart(0, 14);
        let d = project_decades(&c, 1984, 3, Some(Gender::Male), &FortuneConfig::default())
            .unwrap();
        assert_eq!(d.len(), 8);
        assert_eq!(d[0].pillar.cycle_index(), 15);
        assert_eq!(d[1].pillar, c.month.offset(2));
        assert_eq!(d[7].pillar.cycle_index(), 22);
        assert_eq!(d[0].order, 1);
    }

    #[test]
    fn reverse_steps_wrap() {
        // 갑 year, female: reverse from 갑자 (0)
        let c = chart(0, 0);
        let d = project_decades(&c, 1984, 3, Some(Gender::Female), &FortuneConfig::default())
            .unwrap();
        assert_eq!(d[0].pillar.korean_name(), "계해");
        assert_eq!(d[1].pillar.korean_name(), "임술");
    }

    #[test]
    fn ages_and_years() {
        // March birth: start age floor(10/12)+1 = 1
        let cfg = FortuneConfig::default();
        let d = project_decades(&chart(0, 14), 1984, 3, Some(Gender::Male), &cfg).unwrap();
        assert_eq!((d[0].start_age, d[0].end_age), (1, 10));
        assert_eq!((d[1].start_age, d[1].end_age), (11, 20));
        assert_eq!((d[0].start_year, d[0].end_year), (1984, 1993));
        for w in d.windows(2) {
            assert_eq!(w[0].end_age + 1, w[1].start_age);
        }
    }

    #[test]
    fn active_and_transition() {
        let cfg = FortuneConfig::default();
        let d = project_decades(&chart(0, 14), 1984, 3, Some(Gender::Male), &cfg).unwrap();
        assert_eq!(find_active_decade(&d, 15).map(|p| p.order), Some(2));
        assert_eq!(find_next_decade(&d, 15).map(|p| p.order), Some(3));
        assert_eq!(find_active_decade(&d, 200), None);

        let t = decade_transition(&d, 19, &cfg).unwrap();
        assert_eq!(t.years_until_next, 2);
        assert!(t.is_transitioning);
        let t = decade_transition(&d, 15, &cfg).unwrap();
        assert_eq!(t.years_until_next, 6);
        assert!(!t.is_transitioning);
    }

    #[test]
    fn no_transition_out_of_last_decade() {
        let cfg = FortuneConfig {
            decade_count: 3,
            ..FortuneConfig::default()
        };
        let d = project_decades(&chart(0, 14), 1984, 3, Some(Gender::Male), &cfg).unwrap();
        // third decade spans 21-30
        assert_eq!(find_next_decade(&d, 29), None);
        let t = decade_transition(&d, 29, &cfg).unwrap();
        assert_eq!(t.years_until_next, 2);
        assert!(!t.is_transitioning);
        assert!(decade_transition(&d, 19, &cfg).unwrap().is_transitioning);
    }

    #[test]
    fn custom_count() {
        let cfg = FortuneConfig {
            decade_count: 3,
            ..FortuneConfig::default()
        };
        let d = project_decades(&chart(0, 14), 1984, 3, Some(Gender::Male), &cfg).unwrap();
        assert_eq!(d.len(), 3);
    }

    fn with_score(mut d: Vec<DecadePeriod>, score: u8) -> Vec<DecadePeriod> {
        for p in &mut d {
            p.score = score;
        }
        d
    }

    #[test]
    fn life_graph_follows_swing() {
        let cfg = FortuneConfig { decade_count: 2, ..FortuneConfig::default() };
        let d = project_decades(&chart(0, 14), 1984, 3, Some(Gender::Male), &cfg).unwrap();
        let g = life_graph(&with_score(d, 60));
        assert_eq!(g.len(), 20);
        assert_eq!(g.first().map(|p| p.age), Some(1));
        assert_eq!(g.last().map(|p| p.age), Some(20));
        let at = |age: u16| g.iter().find(|p| p.age == age).map(|p| p.score);
        assert_eq!(at(1), Some(65));
        assert_eq!(at(3), Some(70));
        assert_eq!(at(7), Some(56));
        assert_eq!(at(10), Some(50));
    }

    #[test]
    fn life_graph_clamps() {
        let cfg = FortuneConfig { decade_count: 1, ..FortuneConfig::default() };
        let d = project_decades(&chart(0, 14), 1984, 3, Some(Gender::Male), &cfg).unwrap();
        let high = life_graph(&with_score(d.clone(), 90));
        assert_eq!(high[2].age, 3);
        assert_eq!(high[2].score, 95);
        let low = life_graph(&with_score(d, 25));
        assert_eq!(low[9].age, 10);
        assert_eq!(low[9].score, 20);
        assert!(life_graph(&[]).is_empty());
    }
}
