//! The ten heavenly stems (천간).

use serde::{Deserialize, Serialize};

use crate::element::{Element, YinYang};

/// The ten stems, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in order (index 0 = 갑).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const KOREAN_NAMES: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl Stem {
    /// 0-based index (갑=0 .. 계=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem at a cycle position; any integer wraps modulo 10.
    pub const fn from_index(i: i64) -> Self {
        ALL_STEMS[i.rem_euclid(10) as usize]
    }

    /// Romanized name, e.g. "Byeong".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gap => "Gap",
            Self::Eul => "Eul",
            Self::Byeong => "Byeong",
            Self::Jeong => "Jeong",
            Self::Mu => "Mu",
            Self::Gi => "Gi",
            Self::Gyeong => "Gyeong",
            Self::Sin => "Sin",
            Self::Im => "Im",
            Self::Gye => "Gye",
        }
    }

    pub const fn korean_name(self) -> &'static str {
        KOREAN_NAMES[self.index() as usize]
    }

    pub const fn hanja(self) -> &'static str {
        HANJA[self.index() as usize]
    }

    /// Stems pair off by element: 갑을 Wood, 병정 Fire, 무기 Earth, 경신 Metal, 임계 Water.
    pub const fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    pub const fn polarity(self) -> YinYang {
        YinYang::from_ordinal(self.index())
    }

    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Look up a stem by its Hangul syllable.
    pub fn from_korean_name(name: &str) -> Option<Self> {
        KOREAN_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| ALL_STEMS[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as i64), *s);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Stem::from_index(10), Stem::Gap);
        assert_eq!(Stem::from_index(-1), Stem::Gye);
    }

    #[test]
    fn elements_pair_off() {
        assert_eq!(Stem::Gap.element(), Element::Wood);
        assert_eq!(Stem::Gi.element(), Element::Earth);
        assert_eq!(Stem::Gye.element(), Element::Water);
        for pair in ALL_STEMS.chunks(2) {
            assert_eq!(pair[0].element(), pair[1].element());
            assert_eq!(pair[0].polarity(), YinYang::Yang);
            assert_eq!(pair[1].polarity(), YinYang::Yin);
        }
    }

    #[test]
    fn names() {
        assert_eq!(Stem::Byeong.korean_name(), "병");
        assert_eq!(Stem::Byeong.hanja(), "丙");
        assert_eq!(Stem::from_korean_name("기"), Some(Stem::Gi));
        assert_eq!(Stem::from_korean_name("자"), None);
    }
}
