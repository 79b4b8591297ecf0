//! The twelve earthly branches (지지).
//!
//! Each branch carries an element, a polarity, a zodiac animal, a
//! two-hour window of the day and a compass direction.

use serde::{Deserialize, Serialize};

use crate::element::{Element, YinYang};

/// The twelve branches, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in order (index 0 = 자).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const KOREAN_NAMES: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

/// Seasonal direction group (방합). Each holds three consecutive branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// 인묘진
    East,
    /// 사오미
    South,
    /// 신유술
    West,
    /// 해자축
    North,
}

impl Direction {
    /// Element of the season the group spans.
    pub const fn element(self) -> Element {
        match self {
            Self::East => Element::Wood,
            Self::South => Element::Fire,
            Self::West => Element::Metal,
            Self::North => Element::Water,
        }
    }
}

impl Branch {
    /// 0-based index (자=0 .. 해=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch at a cycle position; any integer wraps modulo 12.
    pub const fn from_index(i: i64) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    /// Romanized name, e.g. "Chuk".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ja => "Ja",
            Self::Chuk => "Chuk",
            Self::In => "In",
            Self::Myo => "Myo",
            Self::Jin => "Jin",
            Self::Sa => "Sa",
            Self::O => "O",
            Self::Mi => "Mi",
            Self::Sin => "Sin",
            Self::Yu => "Yu",
            Self::Sul => "Sul",
            Self::Hae => "Hae",
        }
    }

    pub const fn korean_name(self) -> &'static str {
        KOREAN_NAMES[self.index() as usize]
    }

    pub const fn hanja(self) -> &'static str {
        HANJA[self.index() as usize]
    }

    /// Zodiac animal, English.
    pub const fn animal(self) -> &'static str {
        ANIMALS[self.index() as usize]
    }

    pub const fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    pub const fn polarity(self) -> YinYang {
        YinYang::from_ordinal(self.index())
    }

    /// Wall-clock window `(start_hour, end_hour)`, end exclusive.
    /// 자 wraps midnight: (23, 1).
    pub const fn hour_range(self) -> (u8, u8) {
        let start = (self.index() * 2 + 23) % 24;
        (start, (start + 2) % 24)
    }

    /// Branch whose window contains `hour` (0-23). 23:00-00:59 is 자.
    pub const fn from_hour(hour: u8) -> Self {
        if hour >= 23 {
            Self::Ja
        } else {
            ALL_BRANCHES[(((hour + 1) / 2) % 12) as usize]
        }
    }

    /// Branch six steps away (충 partner).
    pub const fn opposite(self) -> Self {
        ALL_BRANCHES[((self.index() + 6) % 12) as usize]
    }

    pub const fn direction(self) -> Direction {
        match self {
            Self::In | Self::Myo | Self::Jin => Direction::East,
            Self::Sa | Self::O | Self::Mi => Direction::South,
            Self::Sin | Self::Yu | Self::Sul => Direction::West,
            Self::Hae | Self::Ja | Self::Chuk => Direction::North,
        }
    }

    /// Look up a branch by its Hangul syllable.
    pub fn from_korean_name(name: &str) -> Option<Self> {
        KOREAN_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| ALL_BRANCHES[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Branch::from_index(i as i64), *b);
        }
        assert_eq!(Branch::from_index(-1), Branch::Hae);
    }

    #[test]
    fn hour_windows() {
        assert_eq!(Branch::Ja.hour_range(), (23, 1));
        assert_eq!(Branch::Chuk.hour_range(), (1, 3));
        assert_eq!(Branch::O.hour_range(), (11, 13));
        assert_eq!(Branch::Hae.hour_range(), (21, 23));
    }

    #[test]
    fn from_hour_table() {
        assert_eq!(Branch::from_hour(23), Branch::Ja);
        assert_eq!(Branch::from_hour(0), Branch::Ja);
        assert_eq!(Branch::from_hour(1), Branch::Chuk);
        assert_eq!(Branch::from_hour(12), Branch::O);
        assert_eq!(Branch::from_hour(22), Branch::Hae);
        for h in 0..24u8 {
            let (start, end) = Branch::from_hour(h).hour_range();
            let inside = if start < end {
                h >= start && h < end
            } else {
                h >= start || h < end
            };
            assert!(inside, "hour {h}");
        }
    }

    #[test]
    fn elements_and_animals() {
        assert_eq!(Branch::Ja.element(), Element::Water);
        assert_eq!(Branch::Sul.element(), Element::Earth);
        assert_eq!(Branch::In.animal(), "Tiger");
        assert_eq!(Branch::Mi.korean_name(), "미");
        assert_eq!(Branch::Mi.hanja(), "未");
    }

    #[test]
    fn opposite_is_involution() {
        assert_eq!(Branch::Ja.opposite(), Branch::O);
        for b in ALL_BRANCHES {
            assert_eq!(b.opposite().opposite(), b);
        }
    }

    #[test]
    fn directions_hold_three() {
        for d in [
            Direction::East,
            Direction::South,
            Direction::West,
            Direction::North,
        ] {
            assert_eq!(ALL_BRANCHES.iter().filter(|b| b.direction() == d).count(), 3);
        }
    }
}
