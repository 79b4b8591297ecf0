//! Day-master strength (신강/신약) and favorable-element selection (용신).
//!
//! Scoring starts at 50. Each non-day-master character moves the score by
//! its element's role toward the day master; the month branch (월령)
//! counts twice. Strong hidden-stem roots add a fixed bonus.

use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::element::{ALL_ELEMENTS, Element, ElementRole};
use crate::hidden_stem::hidden_stems;

/// Neutral starting score.
pub const STRENGTH_BASELINE: i32 = 50;

/// Hidden-stem support (in tenths) at which the root bonus applies.
pub const ROOT_THRESHOLD_TENTHS: u32 = 20;

/// Bonus for a rooted day master.
pub const ROOT_BONUS: i32 = 5;

/// Five strength buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLevel {
    ExtremeWeak,
    Weak,
    Neutral,
    Strong,
    ExtremeStrong,
}

impl StrengthLevel {
    /// Bucket a 0-100 score: ≥75, ≥60, ≥40, ≥25, below.
    pub const fn from_score(score: u8) -> Self {
        match score {
            75.. => Self::ExtremeStrong,
            60..=74 => Self::Strong,
            40..=59 => Self::Neutral,
            25..=39 => Self::Weak,
            _ => Self::ExtremeWeak,
        }
    }

    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::ExtremeWeak => "극약",
            Self::Weak => "신약",
            Self::Neutral => "중화",
            Self::Strong => "신강",
            Self::ExtremeStrong => "극강",
        }
    }
}

/// Score contribution of one character by its role toward the day master.
pub const fn role_weight(role: ElementRole) -> i32 {
    match role {
        ElementRole::Companion => 8,
        ElementRole::Resource => 6,
        ElementRole::Output => -4,
        ElementRole::Wealth => -4,
        ElementRole::Officer => -7,
    }
}

/// Favorable and unfavorable elements for a day master.
///
/// `favorable()` and `unfavorable()` never overlap; together with the day
/// master's own element they cover all five.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavorableElements {
    /// 용신
    pub yongsin: Vec<Element>,
    /// 희신
    pub heeshin: Vec<Element>,
    /// 기신
    pub gishin: Vec<Element>,
    /// 구신
    pub gushin: Vec<Element>,
}

impl FavorableElements {
    pub fn favorable(&self) -> Vec<Element> {
        self.yongsin.iter().chain(&self.heeshin).copied().collect()
    }

    pub fn unfavorable(&self) -> Vec<Element> {
        self.gishin.iter().chain(&self.gushin).copied().collect()
    }

    pub fn is_favorable(&self, element: Element) -> bool {
        self.yongsin.contains(&element) || self.heeshin.contains(&element)
    }
}

/// Strength score, bucket and the derived element partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthAssessment {
    pub score: u8,
    pub level: StrengthLevel,
    pub favorable: FavorableElements,
}

/// Hidden-stem support for `element` across the chart's branches, in tenths.
pub fn root_support_tenths(chart: &Chart, element: Element) -> u32 {
    chart
        .pillars()
        .flat_map(|(_, p)| hidden_stems(p.branch()).iter())
        .filter(|(_, stem)| stem.element() == element)
        .map(|(role, _)| role.weight_tenths() as u32)
        .sum()
}

/// Raw strength score, clamped to 0-100.
pub fn strength_score(chart: &Chart) -> u8 {
    let dm = chart.day_master().element();
    let weight = |e: Element| role_weight(ElementRole::of(dm, e));

    let mut score = STRENGTH_BASELINE;
    score += weight(chart.year.stem().element());
    score += weight(chart.year.branch().element());
    score += weight(chart.month.stem().element());
    score += 2 * weight(chart.month.branch().element());
    score += weight(chart.day.branch().element());
    if let Some(hour) = chart.hour {
        score += weight(hour.stem().element());
        score += weight(hour.branch().element());
    }
    if root_support_tenths(chart, dm) >= ROOT_THRESHOLD_TENTHS {
        score += ROOT_BONUS;
    }
    score.clamp(0, 100) as u8
}

/// Weak-leaning: weak buckets, or neutral below the baseline.
pub const fn is_weak_leaning(level: StrengthLevel, score: u8) -> bool {
    match level {
        StrengthLevel::ExtremeWeak | StrengthLevel::Weak => true,
        StrengthLevel::Neutral => (score as i32) < STRENGTH_BASELINE,
        StrengthLevel::Strong | StrengthLevel::ExtremeStrong => false,
    }
}

/// Partition the five elements for a day master of element `dm`.
///
/// Weak: resource is 용신, own element 희신, officer and wealth 기신,
/// output 구신. Strong: output is 용신, officer 희신, resource and wealth
/// 기신; the own element is left out of both sides.
pub fn favorable_elements(dm: Element, weak_leaning: bool) -> FavorableElements {
    let el = |role: ElementRole| role.element_for(dm);
    if weak_leaning {
        FavorableElements {
            yongsin: vec![el(ElementRole::Resource)],
            heeshin: vec![el(ElementRole::Companion)],
            gishin: vec![el(ElementRole::Officer), el(ElementRole::Wealth)],
            gushin: vec![el(ElementRole::Output)],
        }
    } else {
        FavorableElements {
            yongsin: vec![el(ElementRole::Output)],
            heeshin: vec![el(ElementRole::Officer)],
            gishin: vec![el(ElementRole::Resource), el(ElementRole::Wealth)],
            gushin: Vec::new(),
        }
    }
}

/// Full assessment of a chart's day master.
pub fn assess_strength(chart: &Chart) -> StrengthAssessment {
    let score = strength_score(chart);
    let level = StrengthLevel::from_score(score);
    let favorable = favorable_elements(
        chart.day_master().element(),
        is_weak_leaning(level, score),
    );
    StrengthAssessment {
        score,
        level,
        favorable,
    }
}

/// Elements in neither favorable set (the own element when strong-leaning).
pub fn neutral_elements(favorable: &FavorableElements) -> Vec<Element> {
    let fav = favorable.favorable();
    let unfav = favorable.unfavorable();
    ALL_ELEMENTS
        .into_iter()
        .filter(|e| !fav.contains(e) && !unfav.contains(e))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganji::Pillar;

    fn chart(year: i64, month: i64, day: i64, hour: Option<i64>) -> Chart {
        Chart {
            year: Pillar::from_cycle_index(year),
            month: Pillar::from_cycle_index(month),
            day: Pillar::from_cycle_index(day),
            hour: hour.map(Pillar::from_cycle_index),
        }
    }

    #[test]
    fn buckets() {
        assert_eq!(StrengthLevel::from_score(100), StrengthLevel::ExtremeStrong);
        assert_eq!(StrengthLevel::from_score(75), StrengthLevel::ExtremeStrong);
        assert_eq!(StrengthLevel::from_score(74), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(50), StrengthLevel::Neutral);
        assert_eq!(StrengthLevel::from_score(39), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::ExtremeWeak);
    }

    #[test]
    fn all_wood_is_extreme_strong() {
        // 갑인 x4: every character wood
        let c = chart(50, 50, 50, Some(50));
        let a = assess_strength(&c);
        assert_eq!(a.level, StrengthLevel::ExtremeStrong);
        assert_eq!(a.score, 100);
        assert_eq!(a.favorable.yongsin, vec![Element::Fire]);
        assert_eq!(neutral_elements(&a.favorable), vec![Element::Wood]);
    }

    #[test]
    fn surrounded_by_metal_is_extreme_weak() {
        // 갑 day master among 경신/신유: officer everywhere
        let c = chart(56, 57, 0, Some(56));
        let a = assess_strength(&c);
        assert_eq!(a.level, StrengthLevel::ExtremeWeak);
        assert_eq!(a.favorable.yongsin, vec![Element::Water]);
        assert_eq!(a.favorable.heeshin, vec![Element::Wood]);
    }

    #[test]
    fn month_branch_counts_double() {
        // 갑 day master, 인 month branch vs 신 month branch
        let rooted = chart(0, 2, 0, None);
        let clashed = chart(0, 8, 0, None);
        assert!(strength_score(&rooted) > strength_score(&clashed));
    }

    #[test]
    fn root_support() {
        // 인 holds 갑 (main 10); 묘 holds 을 (main) and 갑 (residue 3)
        let c = chart(2, 3, 0, None);
        // branches 인, 묘, 자: wood hidden = 10 + 10 + 3
        assert_eq!(root_support_tenths(&c, Element::Wood), 23);
    }

    #[test]
    fn weak_leaning_rule() {
        assert!(is_weak_leaning(StrengthLevel::Weak, 30));
        assert!(is_weak_leaning(StrengthLevel::Neutral, 49));
        assert!(!is_weak_leaning(StrengthLevel::Neutral, 50));
        assert!(!is_weak_leaning(StrengthLevel::Strong, 65));
    }

    #[test]
    fn partition_covers_five() {
        for dm in ALL_ELEMENTS {
            for weak in [true, false] {
                let f = favorable_elements(dm, weak);
                let fav = f.favorable();
                let unfav = f.unfavorable();
                assert!(fav.iter().all(|e| !unfav.contains(e)));
                let mut all: Vec<Element> = fav.iter().chain(&unfav).copied().collect();
                if !all.contains(&dm) {
                    all.push(dm);
                }
                all.sort();
                assert_eq!(all, ALL_ELEMENTS.to_vec());
            }
        }
    }

    #[test]
    fn is_favorable_follows_leaning() {
        let weak = favorable_elements(Element::Wood, true);
        assert!(weak.is_favorable(Element::Water));
        assert!(weak.is_favorable(Element::Wood));
        assert!(!weak.is_favorable(Element::Metal));
        assert!(!weak.is_favorable(Element::Fire));

        let strong = favorable_elements(Element::Wood, false);
        assert!(strong.is_favorable(Element::Fire));
        assert!(strong.is_favorable(Element::Metal));
        assert!(!strong.is_favorable(Element::Wood));
        assert!(!strong.is_favorable(Element::Water));
        assert_eq!(neutral_elements(&strong), vec![Element::Wood]);
    }
}
