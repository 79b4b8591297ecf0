//! Spirit stars (신살) of a chart.
//!
//! Each star is a fixed lookup keyed on the day master, the year branch,
//! the month branch or the day pillar. A star is present when one of the
//! chart's characters matches the looked-up target.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::chart::{Chart, PillarPosition};
use crate::ganji::Pillar;
use crate::interaction::is_hidden_enmity;
use crate::stem::Stem;

/// The sixteen spirit stars, auspicious ones first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sinsal {
    /// 천을귀인
    Cheoneul,
    /// 천덕귀인
    Cheondeok,
    /// 월덕귀인
    Woldeok,
    /// 문창귀인
    Munchang,
    /// 학당귀인
    Hakdang,
    /// 금여록
    Geumyeo,
    /// 천관귀인
    Cheongwan,
    /// 도화살
    Dohwa,
    /// 역마살
    Yeokma,
    /// 화개살
    Hwagae,
    /// 백호대살
    Baekho,
    /// 귀문관살
    Gwimun,
    /// 양인살
    Yangin,
    /// 공망
    Gongmang,
    /// 원진살
    Wonjin,
    /// 괴강살
    Goegang,
}

pub const ALL_SINSALS: [Sinsal; 16] = [
    Sinsal::Cheoneul,
    Sinsal::Cheondeok,
    Sinsal::Woldeok,
    Sinsal::Munchang,
    Sinsal::Hakdang,
    Sinsal::Geumyeo,
    Sinsal::Cheongwan,
    Sinsal::Dohwa,
    Sinsal::Yeokma,
    Sinsal::Hwagae,
    Sinsal::Baekho,
    Sinsal::Gwimun,
    Sinsal::Yangin,
    Sinsal::Gongmang,
    Sinsal::Wonjin,
    Sinsal::Goegang,
];

impl Sinsal {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Cheoneul => "천을귀인",
            Self::Cheondeok => "천덕귀인",
            Self::Woldeok => "월덕귀인",
            Self::Munchang => "문창귀인",
            Self::Hakdang => "학당귀인",
            Self::Geumyeo => "금여록",
            Self::Cheongwan => "천관귀인",
            Self::Dohwa => "도화살",
            Self::Yeokma => "역마살",
            Self::Hwagae => "화개살",
            Self::Baekho => "백호대살",
            Self::Gwimun => "귀문관살",
            Self::Yangin => "양인살",
            Self::Gongmang => "공망",
            Self::Wonjin => "원진살",
            Self::Goegang => "괴강살",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Cheoneul => "天乙貴人",
            Self::Cheondeok => "天德貴人",
            Self::Woldeok => "月德貴人",
            Self::Munchang => "文昌貴人",
            Self::Hakdang => "學堂貴人",
            Self::Geumyeo => "金輿祿",
            Self::Cheongwan => "天官貴人",
            Self::Dohwa => "桃花殺",
            Self::Yeokma => "驛馬殺",
            Self::Hwagae => "華蓋殺",
            Self::Baekho => "白虎大殺",
            Self::Gwimun => "鬼門關殺",
            Self::Yangin => "羊刃殺",
            Self::Gongmang => "空亡",
            Self::Wonjin => "怨嗔殺",
            Self::Goegang => "魁罡殺",
        }
    }

    /// 길신 (true) or 흉신 (false).
    pub const fn is_auspicious(self) -> bool {
        (self as u8) <= Self::Cheongwan as u8
    }
}

/// What a star looks for: a stem or a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarTarget {
    Stem(Stem),
    Branch(Branch),
}

// ---------------------------------------------------------------------------
// Day-master tables
// ---------------------------------------------------------------------------

/// 천을귀인 branches of a day master.
pub const fn cheoneul_branches(dm: Stem) -> [Branch; 2] {
    use Branch::*;
    match dm {
        Stem::Gap | Stem::Mu | Stem::Gyeong => [Chuk, Mi],
        Stem::Eul | Stem::Gi => [Ja, Branch::Sin],
        Stem::Byeong | Stem::Jeong => [Hae, Yu],
        Stem::Sin => [In, O],
        Stem::Im | Stem::Gye => [Myo, Sa],
    }
}

/// 문창귀인 branch of a day master.
pub const fn munchang_branch(dm: Stem) -> Branch {
    use Branch::*;
    match dm {
        Stem::Gap => Sa,
        Stem::Eul => O,
        Stem::Byeong | Stem::Mu => Branch::Sin,
        Stem::Jeong | Stem::Gi => Yu,
        Stem::Gyeong => Hae,
        Stem::Sin => Ja,
        Stem::Im => In,
        Stem::Gye => Myo,
    }
}

/// 학당귀인 branch of a day master.
pub const fn hakdang_branch(dm: Stem) -> Branch {
    use Branch::*;
    match dm {
        Stem::Gap | Stem::Eul | Stem::Gye => Hae,
        Stem::Byeong | Stem::Jeong | Stem::Mu => In,
        Stem::Gi | Stem::Gyeong => Sa,
        Stem::Sin | Stem::Im => Branch::Sin,
    }
}

/// 금여록 branch of a day master.
pub const fn geumyeo_branch(dm: Stem) -> Branch {
    use Branch::*;
    match dm {
        Stem::Gap => Jin,
        Stem::Eul => Sa,
        Stem::Byeong | Stem::Mu => Mi,
        Stem::Jeong | Stem::Gi => Branch::Sin,
        Stem::Gyeong => Sul,
        Stem::Sin => Hae,
        Stem::Im => Chuk,
        Stem::Gye => In,
    }
}

/// 천관귀인 branch of a day master.
pub const fn cheongwan_branch(dm: Stem) -> Branch {
    use Branch::*;
    match dm {
        Stem::Gap => Mi,
        Stem::Eul => Jin,
        Stem::Byeong | Stem::Mu => Sa,
        Stem::Jeong | Stem::Gi => In,
        Stem::Gyeong => Hae,
        Stem::Sin => Sul,
        Stem::Im => Yu,
        Stem::Gye => Branch::Sin,
    }
}

/// 양인 branch of a day master.
pub const fn yangin_branch(dm: Stem) -> Branch {
    use Branch::*;
    match dm {
        Stem::Gap => Myo,
        Stem::Eul => Jin,
        Stem::Byeong | Stem::Mu => O,
        Stem::Jeong | Stem::Gi => Mi,
        Stem::Gyeong => Yu,
        Stem::Sin => Sul,
        Stem::Im => Ja,
        Stem::Gye => Chuk,
    }
}

// ---------------------------------------------------------------------------
// Month-branch tables
// ---------------------------------------------------------------------------

/// 천덕귀인 target of a month branch. Four months point at a branch
/// rather than a stem.
pub const fn cheondeok_target(month: Branch) -> StarTarget {
    use StarTarget::{Branch as B, Stem as S};
    match month {
        Branch::In => S(Stem::Jeong),
        Branch::Myo => B(Branch::Sin),
        Branch::Jin => S(Stem::Im),
        Branch::Sa => S(Stem::Sin),
        Branch::O => B(Branch::Hae),
        Branch::Mi => S(Stem::Gap),
        Branch::Sin => S(Stem::Gye),
        Branch::Yu => B(Branch::In),
        Branch::Sul => S(Stem::Byeong),
        Branch::Hae => S(Stem::Eul),
        Branch::Ja => B(Branch::Sa),
        Branch::Chuk => S(Stem::Gyeong),
    }
}

/// 월덕귀인 stem of a month branch, by three-harmony frame.
pub const fn woldeok_stem(month: Branch) -> Stem {
    use Branch::*;
    match month {
        In | O | Sul => Stem::Byeong,
        Hae | Myo | Mi => Stem::Gap,
        Sin | Ja | Jin => Stem::Im,
        Sa | Yu | Chuk => Stem::Gyeong,
    }
}

/// 백호대살 branch of a month branch: eight steps on.
pub const fn baekho_branch(month: Branch) -> Branch {
    Branch::from_index(month.index() as i64 + 8)
}

// ---------------------------------------------------------------------------
// Year-branch tables (by three-harmony frame)
// ---------------------------------------------------------------------------

/// 도화 branch: the branch after the growth branch of the year's frame.
pub const fn dohwa_branch(year: Branch) -> Branch {
    use Branch::*;
    match year {
        In | O | Sul => Myo,
        Sin | Ja | Jin => Yu,
        Sa | Yu | Chuk => O,
        Hae | Myo | Mi => Ja,
    }
}

/// 역마 branch: the clash of the frame's growth branch.
pub const fn yeokma_branch(year: Branch) -> Branch {
    use Branch::*;
    match year {
        In | O | Sul => Sin,
        Sin | Ja | Jin => In,
        Sa | Yu | Chuk => Hae,
        Hae | Myo | Mi => Sa,
    }
}

/// 화개 branch: the frame's storage branch.
pub const fn hwagae_branch(year: Branch) -> Branch {
    use Branch::*;
    match year {
        In | O | Sul => Sul,
        Sin | Ja | Jin => Jin,
        Sa | Yu | Chuk => Chuk,
        Hae | Myo | Mi => Mi,
    }
}

// ---------------------------------------------------------------------------
// Day-pillar tables
// ---------------------------------------------------------------------------

/// 귀문관 partners of a day branch.
pub const fn gwimun_branches(day: Branch) -> &'static [Branch] {
    use Branch::*;
    match day {
        Ja => &[Yu],
        Chuk => &[O],
        In => &[Sa, Mi],
        Myo => &[Jin, Sa],
        Jin => &[Myo, In],
        Sa => &[In, Myo],
        O => &[Chuk, Hae],
        Mi => &[Ja, In],
        Sin => &[Hae],
        Yu => &[Sul, Ja],
        Sul => &[Yu, Mi],
        Hae => &[O, Sin],
    }
}

/// 괴강: 경진, 임진, 경술, 임술 day pillars.
pub const fn is_goegang(day: Pillar) -> bool {
    matches!(
        (day.stem(), day.branch()),
        (Stem::Gyeong | Stem::Im, Branch::Jin | Branch::Sul)
    )
}

// ---------------------------------------------------------------------------
// Chart scan
// ---------------------------------------------------------------------------

/// A star present in a chart and the pillars that carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinsalFinding {
    pub sinsal: Sinsal,
    pub positions: Vec<PillarPosition>,
}

fn branch_positions(
    chart: &Chart,
    hit: impl Fn(PillarPosition, Branch) -> bool,
) -> Vec<PillarPosition> {
    chart
        .pillars()
        .filter(|&(pos, p)| hit(pos, p.branch()))
        .map(|(pos, _)| pos)
        .collect()
}

fn target_positions(chart: &Chart, target: StarTarget) -> Vec<PillarPosition> {
    chart
        .pillars()
        .filter(|(_, p)| match target {
            StarTarget::Stem(s) => p.stem() == s,
            StarTarget::Branch(b) => p.branch() == b,
        })
        .map(|(pos, _)| pos)
        .collect()
}

/// Pillars of `chart` carrying `sinsal`; empty when absent.
pub fn sinsal_positions(chart: &Chart, sinsal: Sinsal) -> Vec<PillarPosition> {
    let dm = chart.day_master();
    let year = chart.year.branch();
    let month = chart.month.branch();
    let day = chart.day.branch();
    match sinsal {
        Sinsal::Cheoneul => branch_positions(chart, |_, b| {
            let targets = cheoneul_branches(dm);
            b == targets[0] || b == targets[1]
        }),
        Sinsal::Cheondeok => target_positions(chart, cheondeok_target(month)),
        Sinsal::Woldeok => target_positions(chart, StarTarget::Stem(woldeok_stem(month))),
        Sinsal::Munchang => branch_positions(chart, |_, b| b == munchang_branch(dm)),
        Sinsal::Hakdang => branch_positions(chart, |_, b| b == hakdang_branch(dm)),
        Sinsal::Geumyeo => branch_positions(chart, |_, b| b == geumyeo_branch(dm)),
        Sinsal::Cheongwan => branch_positions(chart, |_, b| b == cheongwan_branch(dm)),
        Sinsal::Dohwa => branch_positions(chart, |_, b| b == dohwa_branch(year)),
        Sinsal::Yeokma => branch_positions(chart, |_, b| b == yeokma_branch(year)),
        Sinsal::Hwagae => branch_positions(chart, |_, b| b == hwagae_branch(year)),
        Sinsal::Baekho => branch_positions(chart, |_, b| b == baekho_branch(month)),
        Sinsal::Gwimun => branch_positions(chart, |pos, b| {
            pos != PillarPosition::Day && gwimun_branches(day).contains(&b)
        }),
        Sinsal::Yangin => branch_positions(chart, |_, b| b == yangin_branch(dm)),
        Sinsal::Gongmang => {
            let voids = [chart.year.void_branches(), chart.day.void_branches()];
            branch_positions(chart, |_, b| voids.iter().any(|v| v.contains(&b)))
        }
        Sinsal::Wonjin => branch_positions(chart, |_, b| is_hidden_enmity(year, b)),
        Sinsal::Goegang => {
            if is_goegang(chart.day) {
                vec![PillarPosition::Day]
            } else {
                Vec::new()
            }
        }
    }
}

/// Every star present in `chart`, in `ALL_SINSALS` order.
pub fn chart_sinsals(chart: &Chart) -> Vec<SinsalFinding> {
    ALL_SINSALS
        .into_iter()
        .filter_map(|sinsal| {
            let positions = sinsal_positions(chart, sinsal);
            (!positions.is_empty()).then_some(SinsalFinding { sinsal, positions })
        })
        .collect()
}
