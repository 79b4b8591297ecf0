//! Core types for period projection (대운 / 세운).

use serde::{Deserialize, Serialize};

use saju_time::CivilDate;

use crate::element::Element;
use crate::ganji::Pillar;
use crate::ten_god::TenGod;

/// Years spanned by one decade period.
pub const YEARS_PER_DECADE: u16 = 10;

/// Decades projected by default.
pub const DEFAULT_DECADE_COUNT: u8 = 8;

/// Years before the next decade within which the current one counts as
/// "in transition" by default.
pub const DEFAULT_TRANSITION_WINDOW: u8 = 2;

/// Gender of the chart's subject; decides decade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Direction decade pillars step through the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Traversal {
    /// 순행: +1 per decade.
    Forward,
    /// 역행: -1 per decade.
    Reverse,
}

impl Traversal {
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }
}

/// Projection options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FortuneConfig {
    pub decade_count: u8,
    pub transition_window_years: u8,
}

impl Default for FortuneConfig {
    fn default() -> Self {
        Self {
            decade_count: DEFAULT_DECADE_COUNT,
            transition_window_years: DEFAULT_TRANSITION_WINDOW,
        }
    }
}

/// A decade-long fortune period (대운).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecadePeriod {
    /// 1-indexed position in the sequence.
    pub order: u8,
    /// Traditional age at the start, inclusive.
    pub start_age: u16,
    /// Traditional age at the end, inclusive.
    pub end_age: u16,
    /// Calendar years covered, inclusive.
    pub start_year: i32,
    pub end_year: i32,
    pub pillar: Pillar,
    /// Ten god of the period stem toward the day master.
    pub ten_god: TenGod,
    pub score: u8,
}

impl DecadePeriod {
    pub const fn contains_age(&self, age: i32) -> bool {
        age >= self.start_age as i32 && age <= self.end_age as i32
    }

    pub const fn keyword(&self) -> &'static str {
        self.ten_god.keyword()
    }
}

/// A single-year fortune period (세운).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualPeriod {
    pub year: i32,
    /// Traditional age reached during the year.
    pub age: i32,
    pub pillar: Pillar,
    pub ten_god: TenGod,
    pub score: u8,
    pub is_current: bool,
    /// Year branch clashes with the chart's year branch.
    pub clashes_natal_year: bool,
}

impl AnnualPeriod {
    pub const fn keyword(&self) -> &'static str {
        self.ten_god.keyword()
    }

    pub const fn highlight(&self) -> YearHighlight {
        YearHighlight::from_score(self.score)
    }
}

/// Which months of a year stand out, by the year's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearHighlight {
    /// Score 70+: the 3rd, 7th and 11th months peak.
    KeyMonths,
    /// Score 50-69: spring and autumn bring openings.
    SpringAndAutumn,
    /// Below 50: guard the summer, recover over winter.
    GuardSummer,
}

impl YearHighlight {
    pub const fn from_score(score: u8) -> Self {
        if score >= 70 {
            Self::KeyMonths
        } else if score >= 50 {
            Self::SpringAndAutumn
        } else {
            Self::GuardSummer
        }
    }

    /// Civil months the highlight points at; for `GuardSummer` these are
    /// the months to be careful in.
    pub const fn months(self) -> &'static [u32] {
        match self {
            Self::KeyMonths => &[3, 7, 11],
            Self::SpringAndAutumn => &[3, 4, 5, 9, 10, 11],
            Self::GuardSummer => &[6, 7, 8],
        }
    }
}

/// One point of the per-age life curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifePoint {
    pub age: u16,
    pub score: u8,
}

/// Nearness of the next decade boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecadeTransition {
    pub years_until_next: i32,
    pub is_transitioning: bool,
}

/// Decades and years around a reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneOverview {
    pub traversal: Traversal,
    pub start_age: u8,
    /// Traditional age at the reference date.
    pub age: i32,
    pub decades: Vec<DecadePeriod>,
    pub current_decade: Option<DecadePeriod>,
    pub next_decade: Option<DecadePeriod>,
    pub transition: Option<DecadeTransition>,
    pub years: Vec<AnnualPeriod>,
    pub current_year: Option<AnnualPeriod>,
    /// Per-age curve across the projected decades.
    pub life_graph: Vec<LifePoint>,
}

// ── Month and day periods ────────────────────────────────────────────

/// How a month or day stem meets the day master. Combination and clash
/// take precedence over the element relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShortTermRelation {
    /// 천간합
    StemCombination,
    /// 천간충
    StemClash,
    /// 생조: the stem generates the day master.
    Resource,
    /// 설기: the day master generates the stem.
    Output,
    /// 극출: the day master controls the stem.
    Wealth,
    /// 극입: the stem controls the day master.
    Officer,
    /// Same element.
    Companion,
}

/// Five-step rating of a month or day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PeriodCategory {
    Bad,
    Caution,
    Normal,
    Good,
    Excellent,
}

impl PeriodCategory {
    /// 80+ excellent, 65+ good, 50+ normal, 35+ caution, else bad.
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            65..=79 => Self::Good,
            50..=64 => Self::Normal,
            35..=49 => Self::Caution,
            _ => Self::Bad,
        }
    }

    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Excellent => "대길",
            Self::Good => "길",
            Self::Normal => "보통",
            Self::Caution => "주의",
            Self::Bad => "흉",
        }
    }
}

/// A single day (일운).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPeriod {
    pub date: CivilDate,
    pub pillar: Pillar,
    pub ten_god: TenGod,
    pub relation: ShortTermRelation,
    pub score: u8,
    pub category: PeriodCategory,
    /// Element that generates the day master; the day's lucky element.
    pub lucky_element: Element,
}

/// A solar month (월운).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPeriod {
    pub year: i32,
    /// 1 = 寅 month .. 12 = 丑 month.
    pub month: u32,
    pub pillar: Pillar,
    pub ten_god: TenGod,
    pub relation: ShortTermRelation,
    pub score: u8,
    pub category: PeriodCategory,
    /// Best days of the civil month with the same number, at most five.
    pub lucky_days: Vec<u32>,
    /// Weakest days of that civil month, at most three.
    pub caution_days: Vec<u32>,
}
