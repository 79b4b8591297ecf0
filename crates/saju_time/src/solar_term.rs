//! The 24 solar terms (절기) and the fixed cutover-day approximations.
//!
//! The twelve "sectional" terms (절, even indices here) open the twelve
//! solar months used for month pillars; 입춘 opens the solar year.
//! Days are the conventional rule-of-thumb dates, not astronomical ones.

use serde::{Deserialize, Serialize};

use crate::civil::CivilDate;

/// The 24 solar terms in civil-calendar order, starting from 소한 (early January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum SolarTerm {
    Sohan,
    Daehan,
    Ipchun,
    Usu,
    Gyeongchip,
    Chunbun,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baengno,
    Chubun,
    Hallo,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
}

/// All 24 terms in order (index 0 = 소한).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Sohan,
    SolarTerm::Daehan,
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baengno,
    SolarTerm::Chubun,
    SolarTerm::Hallo,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
];

const KOREAN_NAMES: [&str; 24] = [
    "소한", "대한", "입춘", "우수", "경칩", "춘분", "청명", "곡우", "입하", "소만", "망종", "하지",
    "소서", "대서", "입추", "처서", "백로", "추분", "한로", "상강", "입동", "소설", "대설", "동지",
];

/// Conventional civil day-of-month of each term, same order as [`ALL_SOLAR_TERMS`].
const FIXED_DAYS: [u32; 24] = [
    6, 20, 4, 19, 6, 21, 5, 20, 6, 21, 6, 21, 7, 23, 8, 23, 8, 23, 8, 23, 7, 22, 7, 22,
];

impl SolarTerm {
    /// 0-based index (소한=0 .. 동지=23).
    pub const fn index(self) -> u8 {
        match self {
            Self::Sohan => 0,
            Self::Daehan => 1,
            Self::Ipchun => 2,
            Self::Usu => 3,
            Self::Gyeongchip => 4,
            Self::Chunbun => 5,
            Self::Cheongmyeong => 6,
            Self::Gogu => 7,
            Self::Ipha => 8,
            Self::Soman => 9,
            Self::Mangjong => 10,
            Self::Haji => 11,
            Self::Soseo => 12,
            Self::Daeseo => 13,
            Self::Ipchu => 14,
            Self::Cheoseo => 15,
            Self::Baengno => 16,
            Self::Chubun => 17,
            Self::Hallo => 18,
            Self::Sanggang => 19,
            Self::Ipdong => 20,
            Self::Soseol => 21,
            Self::Daeseol => 22,
            Self::Dongji => 23,
        }
    }

    /// Hangul name, e.g. "입춘".
    pub const fn korean_name(self) -> &'static str {
        KOREAN_NAMES[self.index() as usize]
    }

    /// True for the twelve sectional terms that open a solar month.
    pub const fn is_sectional(self) -> bool {
        self.index() % 2 == 0
    }

    /// Civil month (1-12) the term conventionally falls in.
    pub const fn civil_month(self) -> u32 {
        self.index() as u32 / 2 + 1
    }

    /// Conventional day-of-month, ignoring year-to-year drift.
    pub const fn fixed_day(self) -> u32 {
        FIXED_DAYS[self.index() as usize]
    }

    /// The sectional term that opens the solar month starting in civil `month`.
    /// Months outside 1-12 wrap.
    pub const fn sectional_for_month(month: u32) -> Self {
        let m = (month + 11) % 12;
        ALL_SOLAR_TERMS[(m * 2) as usize]
    }

    /// Look up a term by its Hangul name.
    pub fn from_korean_name(name: &str) -> Option<Self> {
        KOREAN_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| ALL_SOLAR_TERMS[i])
    }
}

/// One dated solar-term occurrence, as supplied by a calendar service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarTermEntry {
    pub term: SolarTerm,
    pub date: CivilDate,
}

/// February day of 입춘 for years with a known tabulated date; 4 otherwise.
pub const fn fixed_ipchun_day(year: i32) -> u32 {
    match year {
        2021 | 2025 | 2029 | 2033 => 3,
        _ => 4,
    }
}

/// Fixed cutover day of civil `month` (the day its sectional term begins).
pub const fn fixed_cutover_day(month: u32) -> u32 {
    SolarTerm::sectional_for_month(month).fixed_day()
}
