//! Four-Pillars chart construction.
//!
//! Year and month pillars follow the solar-term calendar: the year turns
//! at 입춘 and each month at its sectional term. Day pillars count whole
//! civil days from a 갑자 epoch. Hour pillars use the twelve two-hour
//! windows starting at 23:00.

use saju_time::{CalendarService, CivilDate, FixedCalendar, SolarTermCutovers, WallTime};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::branch::{ALL_BRANCHES, Branch};
use crate::error::SajuError;
use crate::ganji::{Pillar, day_ganji, year_ganji};
use crate::stem::Stem;

/// Which pillar of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All four positions, outermost first.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }

    /// Hangul name (년주, 월주, 일주, 시주).
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Year => "년주",
            Self::Month => "월주",
            Self::Day => "일주",
            Self::Hour => "시주",
        }
    }
}

/// Handling of births in the late 자 hour (23:00-23:59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZiHourPolicy {
    /// The day has already turned: chart every pillar on the next civil day.
    #[default]
    NextDay,
    /// Keep the civil date; only the hour branch is 자.
    SameDay,
}

/// Chart construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub zi_hour: ZiHourPolicy,
}

/// A Four-Pillars chart. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    /// `None` when the birth time is unknown.
    pub hour: Option<Pillar>,
}

impl Chart {
    /// The day stem (일간), reference point of every relational score.
    pub const fn day_master(&self) -> Stem {
        self.day.stem()
    }

    pub const fn has_hour(&self) -> bool {
        self.hour.is_some()
    }

    /// Pillar at `position`; `None` only for an absent hour pillar.
    pub const fn pillar(&self, position: PillarPosition) -> Option<Pillar> {
        match position {
            PillarPosition::Year => Some(self.year),
            PillarPosition::Month => Some(self.month),
            PillarPosition::Day => Some(self.day),
            PillarPosition::Hour => self.hour,
        }
    }

    /// Like [`Chart::pillar`], but an absent pillar is an error.
    pub fn require(&self, position: PillarPosition) -> Result<Pillar, SajuError> {
        self.pillar(position)
            .ok_or(SajuError::IncompleteChart("chart has no hour pillar"))
    }

    /// Present pillars with their positions, year first.
    pub fn pillars(&self) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
        ALL_POSITIONS
            .into_iter()
            .filter_map(|pos| self.pillar(pos).map(|p| (pos, p)))
    }

    /// Number of stem/branch characters: 8, or 6 without an hour pillar.
    pub fn character_count(&self) -> usize {
        self.pillars().count() * 2
    }
}

// ---------------------------------------------------------------------------
// Individual pillars
// ---------------------------------------------------------------------------

/// Year pillar. Births in January, or in February before 입춘, belong to
/// the previous solar year.
pub fn year_pillar(date: CivilDate, cutovers: &SolarTermCutovers) -> Pillar {
    year_ganji(solar_year(date, cutovers))
}

fn solar_year(date: CivilDate, cutovers: &SolarTermCutovers) -> i32 {
    let before_spring =
        date.month() == 1 || (date.month() == 2 && date.day() < cutovers.ipchun_day());
    if before_spring {
        date.year() - 1
    } else {
        date.year()
    }
}

/// Solar month offset: 0 = 寅 month (opens at 입춘) .. 11 = 丑 month.
pub fn solar_month_offset(date: CivilDate, cutovers: &SolarTermCutovers) -> u8 {
    let month = date.month();
    let adjusted = if date.day() < cutovers.cutover_day(month) {
        if month == 1 { 12 } else { month - 1 }
    } else {
        month
    };
    ((adjusted + 10) % 12) as u8
}

/// Month pillar. The branch follows the solar month (寅 first); the stem
/// starts from the year stem's family (五虎遁): 갑기→병인, 을경→무인,
/// 병신→경인, 정임→임인, 무계→갑인, then advances one step per month.
pub fn month_pillar(date: CivilDate, year_stem: Stem, cutovers: &SolarTermCutovers) -> Pillar {
    solar_month_pillar(year_stem, solar_month_offset(date, cutovers))
}

/// Pillar of solar month `offset` (0 = 寅 month) in a year with stem `year_stem`.
pub const fn solar_month_pillar(year_stem: Stem, offset: u8) -> Pillar {
    let family = (year_stem.index() % 5) as i64;
    // 병인 = 2, 무인 = 14, 경인 = 26, 임인 = 38, 갑인 = 50
    Pillar::from_cycle_index(family * 12 + 2 + offset as i64)
}

/// Day pillar: days elapsed since the 갑자 epoch, mod 60.
pub fn day_pillar(date: CivilDate) -> Pillar {
    day_ganji(date.jdn())
}

/// Hour pillar. The stem starts from the day stem's family (五鼠遁):
/// 갑기→갑자, 을경→병자, 병신→무자, 정임→경자, 무계→임자.
pub fn hour_pillar(day_stem: Stem, time: WallTime) -> Pillar {
    hour_pillar_for_branch(day_stem, Branch::from_hour(time.hour()))
}

fn hour_pillar_for_branch(day_stem: Stem, branch: Branch) -> Pillar {
    let family = (day_stem.index() % 5) as i64;
    // 갑자 = 0, 병자 = 12, 무자 = 24, 경자 = 36, 임자 = 48
    Pillar::from_cycle_index(family * 12 + branch.index() as i64)
}

/// The twelve possible hour pillars of a day with stem `day_stem`, in
/// branch order. Used when the birth time is unknown.
pub fn candidate_hour_pillars(day_stem: Stem) -> [Pillar; 12] {
    ALL_BRANCHES.map(|b| hour_pillar_for_branch(day_stem, b))
}

// ---------------------------------------------------------------------------
// Whole chart
// ---------------------------------------------------------------------------

/// Build a chart with default options and the fixed solar-term tables.
pub fn build_chart(date: CivilDate, time: Option<WallTime>) -> Chart {
    build_chart_with(date, time, &ChartConfig::default(), &FixedCalendar)
}

/// Build a chart, refining solar-term cutovers from `calendar` where it
/// has data for the charted year.
pub fn build_chart_with(
    date: CivilDate,
    time: Option<WallTime>,
    config: &ChartConfig,
    calendar: &dyn CalendarService,
) -> Chart {
    let date = match (config.zi_hour, time) {
        (ZiHourPolicy::NextDay, Some(t)) if t.hour() == 23 => date.next_day(),
        _ => date,
    };
    let cutovers = SolarTermCutovers::resolve(calendar, date.year());

    let year = year_pillar(date, &cutovers);
    let month = month_pillar(date, year.stem(), &cutovers);
    let day = day_pillar(date);
    let hour = time.map(|t| hour_pillar(day.stem(), t));

    trace!(
        %date,
        year = %year,
        month = %month,
        day = %day,
        hour = ?hour.map(|p| p.korean_name()),
        "built chart"
    );
    Chart {
        year,
        month,
        day,
        hour,
    }
}
