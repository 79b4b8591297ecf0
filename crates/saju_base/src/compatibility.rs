//! Two-chart compatibility scoring (궁합).
//!
//! Three sub-scores feed a weighted total: the relation of the two day
//! masters' elements, every cross pair among the year/month/day branches,
//! and the two day pillars head to head. Six category sub-scores refine
//! the picture; none of them feed the total.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::chart::{Chart, PillarPosition};
use crate::element::{Element, ElementRelation};
use crate::interaction::{
    is_hidden_enmity, is_six_clash, is_six_harm, same_direction, six_harmony, stem_combination,
    three_harmony,
};
use crate::stem::Stem;

/// Sub-score floor and ceiling for branch, day-pillar and category scores.
pub const SUB_SCORE_FLOOR: i32 = 40;
pub const SUB_SCORE_CEILING: i32 = 100;

const BRANCH_BASELINE: i32 = 70;
const DAY_PILLAR_BASELINE: i32 = 70;
const CATEGORY_BASELINE: i32 = 65;

/// Weights of the three sub-scores in the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatibilityWeights {
    pub element: f64,
    pub branch: f64,
    pub day_pillar: f64,
}

impl Default for CompatibilityWeights {
    fn default() -> Self {
        Self {
            element: 0.3,
            branch: 0.4,
            day_pillar: 0.3,
        }
    }
}

/// Banded grade of a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    Caution,
    NeedsEffort,
    Fair,
    Good,
    Excellent,
    Destined,
}

impl Grade {
    pub const fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Destined,
            80..=89 => Self::Excellent,
            70..=79 => Self::Good,
            60..=69 => Self::Fair,
            50..=59 => Self::NeedsEffort,
            _ => Self::Caution,
        }
    }

    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Destined => "천생연분",
            Self::Excellent => "매우좋음",
            Self::Good => "좋음",
            Self::Fair => "보통",
            Self::NeedsEffort => "노력필요",
            Self::Caution => "주의필요",
        }
    }
}

fn clamp_sub(score: i32) -> u8 {
    score.clamp(SUB_SCORE_FLOOR, SUB_SCORE_CEILING) as u8
}

// ---------------------------------------------------------------------------
// Element score
// ---------------------------------------------------------------------------

/// Day-master element score, seen from A: same 75, A generates B 85,
/// B generates A 90, A controls B 55, B controls A 50.
pub const fn element_score(a: Element, b: Element) -> u8 {
    match a.relation_to(b) {
        ElementRelation::Same => 75,
        ElementRelation::Generates => 85,
        ElementRelation::GeneratedBy => 90,
        ElementRelation::Controls => 55,
        ElementRelation::ControlledBy => 50,
    }
}

// ---------------------------------------------------------------------------
// Branch score
// ---------------------------------------------------------------------------

/// Relation found between a branch of A and a branch of B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrossRelation {
    SixHarmony,
    ThreeHarmony,
    SameDirection,
    SixClash,
    SixHarm,
    HiddenEnmity,
}

impl CrossRelation {
    /// Contribution to the branch score.
    pub const fn adjustment(self) -> i32 {
        match self {
            Self::SixHarmony => 15,
            Self::ThreeHarmony => 8,
            Self::SameDirection => 5,
            Self::SixClash => -12,
            Self::SixHarm => -8,
            Self::HiddenEnmity => -6,
        }
    }
}

/// One cross-chart branch finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrossFinding {
    pub relation: CrossRelation,
    pub a: (PillarPosition, Branch),
    pub b: (PillarPosition, Branch),
}

fn scanned_branches(chart: &Chart) -> [(PillarPosition, Branch); 3] {
    [
        (PillarPosition::Year, chart.year.branch()),
        (PillarPosition::Month, chart.month.branch()),
        (PillarPosition::Day, chart.day.branch()),
    ]
}

/// Every relation among the nine (A, B) year/month/day branch pairs.
pub fn cross_branch_findings(a: &Chart, b: &Chart) -> Vec<CrossFinding> {
    let mut findings = Vec::new();
    for left in scanned_branches(a) {
        for right in scanned_branches(b) {
            let (x, y) = (left.1, right.1);
            let hits = [
                (six_harmony(x, y).is_some(), CrossRelation::SixHarmony),
                (three_harmony(x, y).is_some(), CrossRelation::ThreeHarmony),
                (same_direction(x, y), CrossRelation::SameDirection),
                (is_six_clash(x, y), CrossRelation::SixClash),
                (is_six_harm(x, y), CrossRelation::SixHarm),
                (is_hidden_enmity(x, y), CrossRelation::HiddenEnmity),
            ];
            for (hit, relation) in hits {
                if hit {
                    findings.push(CrossFinding {
                        relation,
                        a: left,
                        b: right,
                    });
                }
            }
        }
    }
    findings
}

/// Branch score from findings: baseline 70 plus every adjustment, clamped 40-100.
pub fn branch_score(findings: &[CrossFinding]) -> u8 {
    let sum: i32 = findings.iter().map(|f| f.relation.adjustment()).sum();
    clamp_sub(BRANCH_BASELINE + sum)
}

// ---------------------------------------------------------------------------
// Day-pillar score
// ---------------------------------------------------------------------------

/// Strongest relation between the two day branches; checks run in this
/// order and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayBranchRelation {
    SixHarmony,
    SixClash,
    ThreeHarmony,
    HiddenEnmity,
}

impl DayBranchRelation {
    pub const fn adjustment(self) -> i32 {
        match self {
            Self::SixHarmony => 20,
            Self::SixClash => -15,
            Self::ThreeHarmony => 10,
            Self::HiddenEnmity => -8,
        }
    }
}

pub const fn day_branch_relation(a: Branch, b: Branch) -> Option<DayBranchRelation> {
    if six_harmony(a, b).is_some() {
        Some(DayBranchRelation::SixHarmony)
    } else if is_six_clash(a, b) {
        Some(DayBranchRelation::SixClash)
    } else if three_harmony(a, b).is_some() {
        Some(DayBranchRelation::ThreeHarmony)
    } else if is_hidden_enmity(a, b) {
        Some(DayBranchRelation::HiddenEnmity)
    } else {
        None
    }
}

/// A detected day-master stem combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StemCombination {
    pub stems: (Stem, Stem),
    pub element: Element,
}

/// Stem combination of the two day masters, if any.
pub fn day_master_combination(a: &Chart, b: &Chart) -> Option<StemCombination> {
    let stems = (a.day_master(), b.day_master());
    stem_combination(stems.0, stems.1).map(|element| StemCombination { stems, element })
}

/// Stem-combination bonus in the day-pillar score.
pub const STEM_COMBINATION_BONUS: i32 = 18;

/// Day-pillar score: baseline 70, +18 for a day-master combination, plus
/// the first-match day-branch adjustment; clamped 40-100.
pub fn day_pillar_score(a: &Chart, b: &Chart) -> u8 {
    let mut score = DAY_PILLAR_BASELINE;
    if day_master_combination(a, b).is_some() {
        score += STEM_COMBINATION_BONUS;
    }
    if let Some(rel) = day_branch_relation(a.day.branch(), b.day.branch()) {
        score += rel.adjustment();
    }
    clamp_sub(score)
}

// ---------------------------------------------------------------------------
// Category sub-scores
// ---------------------------------------------------------------------------

/// A category score with its grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: u8,
    pub grade: Grade,
}

impl CategoryScore {
    fn new(raw: i32) -> Self {
        let score = clamp_sub(raw);
        Self {
            score,
            grade: Grade::from_score(score),
        }
    }
}

/// Six relationship categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub intimacy: CategoryScore,
    pub personality: CategoryScore,
    pub wealth: CategoryScore,
    pub communication: CategoryScore,
    pub family: CategoryScore,
    pub future: CategoryScore,
}

fn intimacy(a: &Chart, b: &Chart, combined: bool) -> i32 {
    let mut score = CATEGORY_BASELINE;
    if combined {
        score += 25;
    }
    let (x, y) = (a.day.branch(), b.day.branch());
    if six_harmony(x, y).is_some() {
        score += 20;
    } else if is_six_clash(x, y) {
        score -= 10;
    } else if three_harmony(x, y).is_some() {
        score += 12;
    }
    if a.day_master().polarity() != b.day_master().polarity() {
        score += 8;
    }
    score
}

fn personality(relation: ElementRelation) -> i32 {
    match relation {
        ElementRelation::Same => 72,
        ElementRelation::Generates | ElementRelation::GeneratedBy => 85,
        ElementRelation::Controls | ElementRelation::ControlledBy => 55,
    }
}

fn wealth(a: &Chart, b: &Chart) -> i32 {
    let (ea, eb) = (a.day_master().element(), b.day_master().element());
    let mut score = CATEGORY_BASELINE;
    if ea.controls() == eb {
        score += 15;
    }
    if eb.controls() == ea {
        score += 15;
    }
    let branches: Vec<Branch> = scanned_branches(a)
        .into_iter()
        .chain(scanned_branches(b))
        .map(|(_, br)| br)
        .collect();
    let count = |el: Element| branches.iter().filter(|br| br.element() == el).count();
    if count(Element::Earth) >= 2 {
        score += 8;
    }
    if count(Element::Metal) >= 2 {
        score += 5;
    }
    score
}

fn communication(a: &Chart, b: &Chart, combined: bool) -> i32 {
    let mut score = CATEGORY_BASELINE;
    if combined {
        score += 20;
    }
    let (x, y) = (a.month.branch(), b.month.branch());
    if six_harmony(x, y).is_some() {
        score += 15;
    } else if is_six_clash(x, y) {
        score -= 10;
    }
    if three_harmony(x, y).is_some() {
        score += 10;
    }
    score
}

fn family(a: &Chart, b: &Chart) -> i32 {
    let mut score = CATEGORY_BASELINE;
    let (ya, yb) = (a.year.branch(), b.year.branch());
    if six_harmony(ya, yb).is_some() {
        score += 18;
    } else if is_six_clash(ya, yb) {
        score -= 8;
    }
    if three_harmony(ya, yb).is_some() {
        score += 12;
    }
    let (ma, mb) = (a.month.branch(), b.month.branch());
    if six_harmony(ma, mb).is_some() {
        score += 12;
    } else if three_harmony(ma, mb).is_some() {
        score += 8;
    }
    score
}

fn future(a: &Chart, b: &Chart, relation: ElementRelation, combined: bool) -> i32 {
    let mut score = CATEGORY_BASELINE;
    if matches!(
        relation,
        ElementRelation::Generates | ElementRelation::GeneratedBy
    ) {
        score += 15;
    }
    let frames = [
        three_harmony(a.year.branch(), b.year.branch()),
        three_harmony(a.month.branch(), b.month.branch()),
    ]
    .iter()
    .filter(|f| f.is_some())
    .count();
    score += match frames {
        2 => 12,
        1 => 8,
        _ => 0,
    };
    if combined {
        score += 15;
    }
    score
}

pub fn category_scores(a: &Chart, b: &Chart) -> CategoryScores {
    let relation = a.day_master().element().relation_to(b.day_master().element());
    let combined = day_master_combination(a, b).is_some();
    CategoryScores {
        intimacy: CategoryScore::new(intimacy(a, b, combined)),
        personality: CategoryScore::new(personality(relation)),
        wealth: CategoryScore::new(wealth(a, b)),
        communication: CategoryScore::new(communication(a, b, combined)),
        family: CategoryScore::new(family(a, b)),
        future: CategoryScore::new(future(a, b, relation, combined)),
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Compatibility of chart A with chart B.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Weighted total, 0-100.
    pub total: u8,
    pub grade: Grade,
    pub element_score: u8,
    /// Relation of B's day-master element seen from A's.
    pub element_relation: ElementRelation,
    pub branch_score: u8,
    pub branch_findings: Vec<CrossFinding>,
    pub day_pillar_score: u8,
    pub day_branch_relation: Option<DayBranchRelation>,
    pub stem_combination: Option<StemCombination>,
    pub categories: CategoryScores,
}

impl CompatibilityResult {
    /// Count of findings of one relation.
    pub fn count(&self, relation: CrossRelation) -> usize {
        self.branch_findings
            .iter()
            .filter(|f| f.relation == relation)
            .count()
    }
}

/// Score with default weights.
pub fn score(a: &Chart, b: &Chart) -> CompatibilityResult {
    score_with(a, b, &CompatibilityWeights::default())
}

pub fn score_with(a: &Chart, b: &Chart, weights: &CompatibilityWeights) -> CompatibilityResult {
    let (ea, eb) = (a.day_master().element(), b.day_master().element());
    let element_score = element_score(ea, eb);
    let branch_findings = cross_branch_findings(a, b);
    let branch_score = branch_score(&branch_findings);
    let day_pillar_score = day_pillar_score(a, b);

    let weighted = weights.element * element_score as f64
        + weights.branch * branch_score as f64
        + weights.day_pillar * day_pillar_score as f64;
    let total = weighted.round().clamp(0.0, 100.0) as u8;

    CompatibilityResult {
        total,
        grade: Grade::from_score(total),
        element_score,
        element_relation: ea.relation_to(eb),
        branch_score,
        branch_findings,
        day_pillar_score,
        day_branch_relation: day_branch_relation(a.day.branch(), b.day.branch()),
        stem_combination: day_master_combination(a, b),
        categories: category_scores(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganji::Pillar;

    fn chart(year: i64, month: i64, day: i64) -> Chart {
        Chart {
            year: Pillar::from_cycle_index(year),
            month: Pillar::from_cycle_index(month),
            day: Pillar::from_cycle_index(day),
            hour: None,
        }
    }

    #[test]
    fn element_bands() {
        assert_eq!(element_score(Element::Wood, Element::Wood), 75);
        assert_eq!(element_score(Element::Wood, Element::Fire), 85);
        assert_eq!(element_score(Element::Fire, Element::Wood), 90);
        assert_eq!(element_score(Element::Wood, Element::Earth), 55);
        assert_eq!(element_score(Element::Earth, Element::Wood), 50);
    }

    #[test]
    fn grades() {
        assert_eq!(Grade::from_score(95), Grade::Destined);
        assert_eq!(Grade::from_score(80), Grade::Excellent);
        assert_eq!(Grade::from_score(79), Grade::Good);
        assert_eq!(Grade::from_score(60), Grade::Fair);
        assert_eq!(Grade::from_score(50), Grade::NeedsEffort);
        assert_eq!(Grade::from_score(49), Grade::Caution);
    }

    #[test]
    fn gap_gi_day_masters_combine() {
        // 갑자 day vs 기사 day
        let a = chart(6, 15, 0);
        let b = chart(6, 15, 5);
        let r = score(&a, &b);
        assert_eq!(
            r.stem_combination,
            Some(StemCombination {
                stems: (Stem::Gap, Stem::Gi),
                element: Element::Earth,
            })
        );
        // 자 vs 사: no day-branch relation, so only the combination bonus
        assert_eq!(r.day_branch_relation, None);
        assert_eq!(r.day_pillar_score, 88);
    }

    #[test]
    fn ja_o_clash_lowers_branch_score() {
        // 갑자 year/month/day vs 경오 year/month/day: nine 자-오 clashes
        let a = chart(0, 0, 0);
        let b = chart(6, 6, 6);
        let r = score(&a, &b);
        assert_eq!(r.count(CrossRelation::SixClash), 9);
        assert!(r.branch_score < 70);
        assert_eq!(r.branch_score, 40);
        assert_eq!(r.day_branch_relation, Some(DayBranchRelation::SixClash));
    }

    #[test]
    fn single_harmony_adds() {
        // only the day branches 자/축 harmonise
        let a = chart(2, 2, 0); // 병인 병인 갑자
        let b = chart(2, 2, 1); // 병인 병인 을축
        let findings = cross_branch_findings(&a, &b);
        assert!(findings.iter().any(|f| f.relation == CrossRelation::SixHarmony
            && f.a.0 == PillarPosition::Day
            && f.b.0 == PillarPosition::Day));
        assert_eq!(
            day_branch_relation(Branch::Ja, Branch::Chuk),
            Some(DayBranchRelation::SixHarmony)
        );
    }

    #[test]
    fn self_comparison() {
        let a = chart(6, 15, 0);
        let r = score(&a, &a);
        assert_eq!(r.element_score, 75);
        assert_eq!(r.element_relation, ElementRelation::Same);
        assert_eq!(r.stem_combination, None);
    }

    #[test]
    fn totals_bounded_over_many_pairs() {
        for i in (0..60).step_by(7) {
            for j in (0..60).step_by(11) {
                let a = chart(i, (i + 13) % 60, (i * 3) % 60);
                let b = chart(j, (j + 29) % 60, (j * 7) % 60);
                let r = score(&a, &b);
                assert!(r.total <= 100);
                assert!((40..=100).contains(&r.branch_score));
                assert!((40..=100).contains(&r.day_pillar_score));
                for c in [
                    r.categories.intimacy,
                    r.categories.personality,
                    r.categories.wealth,
                    r.categories.communication,
                    r.categories.family,
                    r.categories.future,
                ] {
                    assert!((40..=100).contains(&c.score));
                    assert_eq!(c.grade, Grade::from_score(c.score));
                }
            }
        }
    }

    #[test]
    fn weighted_total() {
        let a = chart(6, 15, 0);
        let b = chart(6, 15, 5);
        let r = score(&a, &b);
        let expected = (0.3 * r.element_score as f64
            + 0.4 * r.branch_score as f64
            + 0.3 * r.day_pillar_score as f64)
            .round() as u8;
        assert_eq!(r.total, expected);
    }

    #[test]
    fn custom_weights() {
        let a = chart(6, 15, 0);
        let b = chart(6, 15, 5);
        let only_element = CompatibilityWeights {
            element: 1.0,
            branch: 0.0,
            day_pillar: 0.0,
        };
        let r = score_with(&a, &b, &only_element);
        assert_eq!(r.total, r.element_score);
    }

    #[test]
    fn intimacy_rewards_combination() {
        let a = chart(6, 15, 0);
        let gi = chart(6, 15, 5);
        let gap = chart(6, 15, 0);
        let with = category_scores(&a, &gi).intimacy.score;
        let without = category_scores(&a, &gap).intimacy.score;
        assert!(with > without);
    }
}
