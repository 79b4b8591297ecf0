//! The sexagenary cycle (육십갑자) and the `Pillar` value type.
//!
//! A pillar is always one of the 60 cycle entries: stem and branch share
//! ordinal parity. Constructors go through the cycle index, never through
//! an independent choice of stem and branch.
//!
//! Reference epochs: CE 1984 is a 갑자 year; 1900-02-20 (JDN 2 415 071)
//! is a 갑자 day.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::error::SajuError;
use crate::stem::Stem;

/// Reference epoch: CE 1984 = 갑자 (cycle index 0).
pub const SEXAGENARY_EPOCH_YEAR: i32 = 1984;

/// Reference epoch: JDN of 1900-02-20, a 갑자 day.
pub const SEXAGENARY_EPOCH_JDN: i64 = 2_415_071;

/// Length of the cycle.
pub const CYCLE_LEN: i64 = 60;

/// One stem-branch pair of the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPillar", into = "RawPillar")]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

#[derive(Serialize, Deserialize)]
struct RawPillar {
    stem: Stem,
    branch: Branch,
}

impl TryFrom<RawPillar> for Pillar {
    type Error = SajuError;

    fn try_from(raw: RawPillar) -> Result<Self, Self::Error> {
        Self::try_new(raw.stem, raw.branch).ok_or(SajuError::MismatchedPolarity {
            stem: raw.stem,
            branch: raw.branch,
        })
    }
}

impl From<Pillar> for RawPillar {
    fn from(p: Pillar) -> Self {
        Self {
            stem: p.stem,
            branch: p.branch,
        }
    }
}

impl Pillar {
    /// Cycle entry at `index`; any integer wraps modulo 60 (0 = 갑자).
    pub const fn from_cycle_index(index: i64) -> Self {
        Self {
            stem: Stem::from_index(index),
            branch: Branch::from_index(index),
        }
    }

    /// Pair `stem` with `branch` if they share parity.
    pub const fn try_new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// 0-based position in the cycle (갑자=0 .. 계해=59).
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        (6 * s - 5 * b).rem_euclid(CYCLE_LEN) as u8
    }

    /// Entry `steps` positions later (negative = earlier).
    pub const fn offset(self, steps: i64) -> Self {
        Self::from_cycle_index(self.cycle_index() as i64 + steps)
    }

    /// The two branches skipped by this pillar's ten-day decade (공망).
    pub const fn void_branches(self) -> [Branch; 2] {
        let start = self.branch.index() as i64 - self.stem.index() as i64;
        [Branch::from_index(start + 10), Branch::from_index(start + 11)]
    }

    /// Hangul name, e.g. "갑자".
    pub fn korean_name(self) -> String {
        format!("{}{}", self.stem.korean_name(), self.branch.korean_name())
    }

    /// Hanja name, e.g. "甲子".
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem.korean_name(), self.branch.korean_name())
    }
}

/// All 60 pillars in cycle order.
pub fn sexagenary_cycle() -> impl Iterator<Item = Pillar> {
    (0..CYCLE_LEN).map(Pillar::from_cycle_index)
}

/// Pillar of a (solar-term adjusted) year: `(year - 1984) mod 60`.
pub const fn year_ganji(year: i32) -> Pillar {
    Pillar::from_cycle_index((year - SEXAGENARY_EPOCH_YEAR) as i64)
}

/// Pillar of the civil day with Julian Day Number `jdn`.
pub const fn day_ganji(jdn: i64) -> Pillar {
    Pillar::from_cycle_index(jdn - SEXAGENARY_EPOCH_JDN)
}
