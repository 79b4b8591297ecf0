//! Month (월운) and day (일운) periods.
//!
//! Short periods are scored on a lighter scale than decades and years:
//! baseline 65, the stem's relation to the day master, and the branch
//! element either feeding or controlling it. Clamped to 20-95.

use std::iter::successors;

use saju_time::CivilDate;

use crate::chart::{day_pillar, solar_month_pillar};
use crate::element::{ElementRelation, ElementRole};
use crate::error::SajuError;
use crate::ganji::{Pillar, year_ganji};
use crate::interaction::stem_combination;
use crate::stem::Stem;
use crate::ten_god::ten_god;

use super::score::{PERIOD_CEILING, PERIOD_FLOOR};
use super::types::{DailyPeriod, MonthlyPeriod, PeriodCategory, ShortTermRelation};

pub const SHORT_TERM_BASELINE: i32 = 65;
pub const LUCKY_DAY_SCORE: u8 = 75;
pub const CAUTION_DAY_SCORE: u8 = 40;
pub const MAX_LUCKY_DAYS: usize = 5;
pub const MAX_CAUTION_DAYS: usize = 3;

/// The stem that clashes with `day_master` in short-period readings.
///
/// Not symmetric: earth masters clash with the wood stem of their own
/// polarity, the rest with the stem that controls them.
pub const fn clashing_stem(day_master: Stem) -> Stem {
    match day_master {
        Stem::Gap => Stem::Gyeong,
        Stem::Eul => Stem::Sin,
        Stem::Byeong => Stem::Im,
        Stem::Jeong => Stem::Gye,
        Stem::Mu => Stem::Gap,
        Stem::Gi => Stem::Eul,
        Stem::Gyeong => Stem::Gap,
        Stem::Sin => Stem::Eul,
        Stem::Im => Stem::Byeong,
        Stem::Gye => Stem::Jeong,
    }
}

/// Relation of a period stem to the day master; first match wins.
pub const fn short_term_relation(day_master: Stem, stem: Stem) -> ShortTermRelation {
    if stem_combination(day_master, stem).is_some() {
        return ShortTermRelation::StemCombination;
    }
    if clashing_stem(day_master) as u8 == stem as u8 {
        return ShortTermRelation::StemClash;
    }
    match day_master.element().relation_to(stem.element()) {
        ElementRelation::Generates => ShortTermRelation::Output,
        ElementRelation::GeneratedBy => ShortTermRelation::Resource,
        ElementRelation::Controls => ShortTermRelation::Wealth,
        ElementRelation::ControlledBy => ShortTermRelation::Officer,
        ElementRelation::Same => ShortTermRelation::Companion,
    }
}

pub const fn relation_adjustment(relation: ShortTermRelation) -> i32 {
    match relation {
        ShortTermRelation::StemCombination => 15,
        ShortTermRelation::StemClash => -15,
        ShortTermRelation::Resource => 10,
        ShortTermRelation::Output | ShortTermRelation::Wealth => 5,
        ShortTermRelation::Officer => -10,
        ShortTermRelation::Companion => 0,
    }
}

/// Score of a month or day pillar for `day_master`.
pub const fn short_term_score(day_master: Stem, pillar: Pillar) -> u8 {
    let dm = day_master.element();
    let branch = match dm.relation_to(pillar.branch().element()) {
        ElementRelation::GeneratedBy => 8,
        ElementRelation::ControlledBy => -8,
        _ => 0,
    };
    let score = SHORT_TERM_BASELINE
        + relation_adjustment(short_term_relation(day_master, pillar.stem()))
        + branch;
    if score < PERIOD_FLOOR {
        PERIOD_FLOOR as u8
    } else if score > PERIOD_CEILING {
        PERIOD_CEILING as u8
    } else {
        score as u8
    }
}

pub fn daily_period(day_master: Stem, date: CivilDate) -> DailyPeriod {
    let pillar = day_pillar(date);
    let score = short_term_score(day_master, pillar);
    DailyPeriod {
        date,
        pillar,
        ten_god: ten_god(day_master, pillar.stem()),
        relation: short_term_relation(day_master, pillar.stem()),
        score,
        category: PeriodCategory::from_score(score),
        lucky_element: ElementRole::Resource.element_for(day_master.element()),
    }
}

/// Every day of a civil month, in order.
pub fn month_calendar(
    day_master: Stem,
    year: i32,
    month: u32,
) -> Result<Vec<DailyPeriod>, SajuError> {
    let first = CivilDate::new(year, month, 1)?;
    Ok(successors(Some(first), |d| d.add_days(1))
        .take_while(|d| d.month() == month)
        .map(|d| daily_period(day_master, d))
        .collect())
}

/// Solar month `month` (1 = 寅) of `year`, with lucky and caution days
/// taken from the civil month of the same number.
pub fn monthly_period(
    day_master: Stem,
    year: i32,
    month: u32,
) -> Result<MonthlyPeriod, SajuError> {
    let days = month_calendar(day_master, year, month)?;
    let pillar = solar_month_pillar(year_ganji(year).stem(), (month - 1) as u8);
    let score = short_term_score(day_master, pillar);

    let lucky_days = days
        .iter()
        .filter(|d| d.score >= LUCKY_DAY_SCORE)
        .map(|d| d.date.day())
        .take(MAX_LUCKY_DAYS)
        .collect();
    let caution_days = days
        .iter()
        .filter(|d| d.score <= CAUTION_DAY_SCORE)
        .map(|d| d.date.day())
        .take(MAX_CAUTION_DAYS)
        .collect();

    Ok(MonthlyPeriod {
        year,
        month,
        pillar,
        ten_god: ten_god(day_master, pillar.stem()),
        relation: short_term_relation(day_master, pillar.stem()),
        score,
        category: PeriodCategory::from_score(score),
        lucky_days,
        caution_days,
    })
}

/// All twelve months of `year`.
pub fn project_months(day_master: Stem, year: i32) -> Result<Vec<MonthlyPeriod>, SajuError> {
    (1..=12).map(|m| monthly_period(day_master, year, m)).collect()
}
