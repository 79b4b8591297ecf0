//! Ten gods (십신): the relation of any stem to the day master.
//!
//! The element relation picks one of five families; matching polarity
//! picks the first member of the family, differing polarity the second.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::chart::{Chart, PillarPosition};
use crate::element::ElementRelation;
use crate::error::SajuError;
use crate::hidden_stem::hidden_stems;
use crate::stem::Stem;

/// The ten gods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    /// 비견: same element, same polarity.
    Bigyeon,
    /// 겁재: same element, other polarity.
    Geobjae,
    /// 식신: day master generates, same polarity.
    Siksin,
    /// 상관: day master generates, other polarity.
    Sanggwan,
    /// 편재: day master controls, same polarity.
    Pyeonjae,
    /// 정재: day master controls, other polarity.
    Jeongjae,
    /// 편관: controls day master, same polarity.
    Pyeongwan,
    /// 정관: controls day master, other polarity.
    Jeonggwan,
    /// 편인: generates day master, same polarity.
    Pyeonin,
    /// 정인: generates day master, other polarity.
    Jeongin,
}

pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Bigyeon,
    TenGod::Geobjae,
    TenGod::Siksin,
    TenGod::Sanggwan,
    TenGod::Pyeonjae,
    TenGod::Jeongjae,
    TenGod::Pyeongwan,
    TenGod::Jeonggwan,
    TenGod::Pyeonin,
    TenGod::Jeongin,
];

impl TenGod {
    pub const fn index(self) -> u8 {
        match self {
            Self::Bigyeon => 0,
            Self::Geobjae => 1,
            Self::Siksin => 2,
            Self::Sanggwan => 3,
            Self::Pyeonjae => 4,
            Self::Jeongjae => 5,
            Self::Pyeongwan => 6,
            Self::Jeonggwan => 7,
            Self::Pyeonin => 8,
            Self::Jeongin => 9,
        }
    }

    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Bigyeon => "비견",
            Self::Geobjae => "겁재",
            Self::Siksin => "식신",
            Self::Sanggwan => "상관",
            Self::Pyeonjae => "편재",
            Self::Jeongjae => "정재",
            Self::Pyeongwan => "편관",
            Self::Jeonggwan => "정관",
            Self::Pyeonin => "편인",
            Self::Jeongin => "정인",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Bigyeon => "比肩",
            Self::Geobjae => "劫財",
            Self::Siksin => "食神",
            Self::Sanggwan => "傷官",
            Self::Pyeonjae => "偏財",
            Self::Jeongjae => "正財",
            Self::Pyeongwan => "偏官",
            Self::Jeonggwan => "正官",
            Self::Pyeonin => "偏印",
            Self::Jeongin => "正印",
        }
    }

    /// Short theme keyword. Placeholder content; hosts localise.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Bigyeon => "independence",
            Self::Geobjae => "competition",
            Self::Siksin => "expression",
            Self::Sanggwan => "creativity",
            Self::Pyeonjae => "enterprise",
            Self::Jeongjae => "stability",
            Self::Pyeongwan => "challenge",
            Self::Jeonggwan => "honor",
            Self::Pyeonin => "change",
            Self::Jeongin => "learning",
        }
    }

    /// Element relation of the family this god belongs to, seen from the day master.
    pub const fn relation(self) -> ElementRelation {
        match self {
            Self::Bigyeon | Self::Geobjae => ElementRelation::Same,
            Self::Siksin | Self::Sanggwan => ElementRelation::Generates,
            Self::Pyeonjae | Self::Jeongjae => ElementRelation::Controls,
            Self::Pyeongwan | Self::Jeonggwan => ElementRelation::ControlledBy,
            Self::Pyeonin | Self::Jeongin => ElementRelation::GeneratedBy,
        }
    }

    /// Period-score adjustment: 정관/정인/정재 +10, 편관/겁재/상관 -5.
    pub const fn fortune_adjustment(self) -> i32 {
        match self {
            Self::Jeonggwan | Self::Jeongin | Self::Jeongjae => 10,
            Self::Pyeongwan | Self::Geobjae | Self::Sanggwan => -5,
            _ => 0,
        }
    }
}

/// Ten god of `other` relative to `day_master`.
pub const fn ten_god(day_master: Stem, other: Stem) -> TenGod {
    let same_polarity = day_master.index() % 2 == other.index() % 2;
    match (day_master.element().relation_to(other.element()), same_polarity) {
        (ElementRelation::Same, true) => TenGod::Bigyeon,
        (ElementRelation::Same, false) => TenGod::Geobjae,
        (ElementRelation::Generates, true) => TenGod::Siksin,
        (ElementRelation::Generates, false) => TenGod::Sanggwan,
        (ElementRelation::Controls, true) => TenGod::Pyeonjae,
        (ElementRelation::Controls, false) => TenGod::Jeongjae,
        (ElementRelation::ControlledBy, true) => TenGod::Pyeongwan,
        (ElementRelation::ControlledBy, false) => TenGod::Jeonggwan,
        (ElementRelation::GeneratedBy, true) => TenGod::Pyeonin,
        (ElementRelation::GeneratedBy, false) => TenGod::Jeongin,
    }
}

/// Ten god of a branch: that of its main hidden stem.
pub const fn branch_ten_god(day_master: Stem, branch: Branch) -> TenGod {
    ten_god(day_master, hidden_stems(branch).main)
}

/// Ten gods of every character of a chart except the day master itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartTenGods {
    pub year_stem: TenGod,
    pub month_stem: TenGod,
    pub hour_stem: Option<TenGod>,
    pub year_branch: TenGod,
    pub month_branch: TenGod,
    pub day_branch: TenGod,
    pub hour_branch: Option<TenGod>,
}

pub fn chart_ten_gods(chart: &Chart) -> ChartTenGods {
    let dm = chart.day_master();
    ChartTenGods {
        year_stem: ten_god(dm, chart.year.stem()),
        month_stem: ten_god(dm, chart.month.stem()),
        hour_stem: chart.hour.map(|p| ten_god(dm, p.stem())),
        year_branch: branch_ten_god(dm, chart.year.branch()),
        month_branch: branch_ten_god(dm, chart.month.branch()),
        day_branch: branch_ten_god(dm, chart.day.branch()),
        hour_branch: chart.hour.map(|p| branch_ten_god(dm, p.branch())),
    }
}

/// Ten god of the stem at `position`. The day position yields 비견.
/// Fails with `IncompleteChart` for the hour of a chart without one.
pub fn ten_god_at(chart: &Chart, position: PillarPosition) -> Result<TenGod, SajuError> {
    let pillar = chart.require(position)?;
    Ok(ten_god(chart.day_master(), pillar.stem()))
}
