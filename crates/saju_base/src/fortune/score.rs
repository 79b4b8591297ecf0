//! Period scoring against the day master.
//!
//! Baseline 50. The period stem's element, the period branch's element
//! and the stem's ten god each shift the score; the result is clamped
//! to 20-95.

use crate::element::ElementRelation;
use crate::ganji::Pillar;
use crate::stem::Stem;
use crate::ten_god::ten_god;

pub const PERIOD_BASELINE: i32 = 50;
pub const PERIOD_FLOOR: i32 = 20;
pub const PERIOD_CEILING: i32 = 95;

/// Stem adjustment by the stem element's relation to the day master.
pub const fn stem_adjustment(relation: ElementRelation) -> i32 {
    match relation {
        ElementRelation::Same => 10,
        ElementRelation::GeneratedBy => 20,
        ElementRelation::Generates => 5,
        ElementRelation::ControlledBy => -15,
        ElementRelation::Controls => 15,
    }
}

/// Branch adjustment; draining and controlled elements are neutral.
pub const fn branch_adjustment(relation: ElementRelation) -> i32 {
    match relation {
        ElementRelation::Same => 8,
        ElementRelation::GeneratedBy => 15,
        ElementRelation::ControlledBy => -10,
        ElementRelation::Generates | ElementRelation::Controls => 0,
    }
}

/// Score of a period pillar for `day_master`.
pub fn period_score(day_master: Stem, pillar: Pillar) -> u8 {
    let dm = day_master.element();
    let score = PERIOD_BASELINE
        + stem_adjustment(dm.relation_to(pillar.stem().element()))
        + branch_adjustment(dm.relation_to(pillar.branch().element()))
        + ten_god(day_master, pillar.stem()).fortune_adjustment();
    score.clamp(PERIOD_FLOOR, PERIOD_CEILING) as u8
}
