//! Stem and branch interaction tables, and their detection in a chart.
//!
//! Every table is a total function over the closed stem/branch
//! enumerations. A pair of characters may match several tables at once;
//! detection reports all of them.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::chart::{Chart, PillarPosition};
use crate::element::Element;
use crate::stem::Stem;

// ---------------------------------------------------------------------------
// Stem combination (천간합)
// ---------------------------------------------------------------------------

/// Five stem combinations: 갑기 Earth, 을경 Metal, 병신 Water, 정임 Wood,
/// 무계 Fire. Order of arguments does not matter.
pub const fn stem_combination(a: Stem, b: Stem) -> Option<Element> {
    use Stem::*;
    match (a, b) {
        (Gap, Gi) | (Gi, Gap) => Some(Element::Earth),
        (Eul, Gyeong) | (Gyeong, Eul) => Some(Element::Metal),
        (Byeong, Sin) | (Sin, Byeong) => Some(Element::Water),
        (Jeong, Im) | (Im, Jeong) => Some(Element::Wood),
        (Mu, Gye) | (Gye, Mu) => Some(Element::Fire),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Six harmony (육합)
// ---------------------------------------------------------------------------

/// Six harmonies: 자축 Earth, 인해 Wood, 묘술 Fire, 진유 Metal, 사신 Water,
/// 오미 Fire.
pub const fn six_harmony(a: Branch, b: Branch) -> Option<Element> {
    use Branch::*;
    match (a, b) {
        (Ja, Chuk) | (Chuk, Ja) => Some(Element::Earth),
        (In, Hae) | (Hae, In) => Some(Element::Wood),
        (Myo, Sul) | (Sul, Myo) => Some(Element::Fire),
        (Jin, Yu) | (Yu, Jin) => Some(Element::Metal),
        (Sa, Sin) | (Sin, Sa) => Some(Element::Water),
        (O, Mi) | (Mi, O) => Some(Element::Fire),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Three harmony (삼합)
// ---------------------------------------------------------------------------

/// The three-harmony frame a branch belongs to: 신자진 Water, 해묘미 Wood,
/// 인오술 Fire, 사유축 Metal. Every branch is in exactly one.
pub const fn three_harmony_frame(branch: Branch) -> Element {
    use Branch::*;
    match branch {
        Sin | Ja | Jin => Element::Water,
        Hae | Myo | Mi => Element::Wood,
        In | O | Sul => Element::Fire,
        Sa | Yu | Chuk => Element::Metal,
    }
}

/// Members of the frame for `element` (growth, peak, storage). Earth has none.
pub const fn three_harmony_members(element: Element) -> Option<[Branch; 3]> {
    use Branch::*;
    match element {
        Element::Water => Some([Sin, Ja, Jin]),
        Element::Wood => Some([Hae, Myo, Mi]),
        Element::Fire => Some([In, O, Sul]),
        Element::Metal => Some([Sa, Yu, Chuk]),
        Element::Earth => None,
    }
}

/// Two distinct branches of the same three-harmony frame.
pub const fn three_harmony(a: Branch, b: Branch) -> Option<Element> {
    let frame = three_harmony_frame(a);
    if a.index() != b.index() && frame.index() == three_harmony_frame(b).index() {
        Some(frame)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Six clash (육충), six harm (육해), hidden enmity (원진)
// ---------------------------------------------------------------------------

/// Branches six steps apart.
pub const fn is_six_clash(a: Branch, b: Branch) -> bool {
    (a.index() + 6) % 12 == b.index()
}

/// Six harms: 자미, 축오, 인사, 묘진, 신해, 유술.
pub const fn is_six_harm(a: Branch, b: Branch) -> bool {
    use Branch::*;
    matches!(
        (a, b),
        (Ja, Mi)
            | (Mi, Ja)
            | (Chuk, O)
            | (O, Chuk)
            | (In, Sa)
            | (Sa, In)
            | (Myo, Jin)
            | (Jin, Myo)
            | (Sin, Hae)
            | (Hae, Sin)
            | (Yu, Sul)
            | (Sul, Yu)
    )
}

/// Hidden enmity: 자미, 축오, 인유, 묘신, 진해, 사술.
pub const fn is_hidden_enmity(a: Branch, b: Branch) -> bool {
    use Branch::*;
    matches!(
        (a, b),
        (Ja, Mi)
            | (Mi, Ja)
            | (Chuk, O)
            | (O, Chuk)
            | (In, Yu)
            | (Yu, In)
            | (Myo, Sin)
            | (Sin, Myo)
            | (Jin, Hae)
            | (Hae, Jin)
            | (Sa, Sul)
            | (Sul, Sa)
    )
}

/// Two distinct branches of the same seasonal direction group.
pub const fn same_direction(a: Branch, b: Branch) -> bool {
    a.index() != b.index() && a.direction() as u8 == b.direction() as u8
}

// ---------------------------------------------------------------------------
// Punishment (형)
// ---------------------------------------------------------------------------

/// Kinds of punishment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PunishmentKind {
    /// 무은지형: any two of 인사신.
    Ungrateful,
    /// 지세지형: any two of 축술미.
    Bullying,
    /// 무례지형: 자묘.
    Rude,
    /// 자형: 진진, 오오, 유유, 해해.
    SelfPunishment,
}

pub const fn punishment(a: Branch, b: Branch) -> Option<PunishmentKind> {
    use Branch::*;
    match (a, b) {
        (In, Sa) | (Sa, In) | (Sa, Sin) | (Sin, Sa) | (In, Sin) | (Sin, In) => {
            Some(PunishmentKind::Ungrateful)
        }
        (Chuk, Sul) | (Sul, Chuk) | (Sul, Mi) | (Mi, Sul) | (Chuk, Mi) | (Mi, Chuk) => {
            Some(PunishmentKind::Bullying)
        }
        (Ja, Myo) | (Myo, Ja) => Some(PunishmentKind::Rude),
        (Jin, Jin) | (O, O) | (Yu, Yu) | (Hae, Hae) => Some(PunishmentKind::SelfPunishment),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// Interaction category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionKind {
    /// Two stems combine into the given element.
    StemCombination(Element),
    SixHarmony(Element),
    ThreeHarmony(Element),
    SixClash,
    SixHarm,
    Punishment(PunishmentKind),
}

impl InteractionKind {
    /// Combinations and harmonies bind; clashes, harms and punishments strain.
    pub const fn is_harmonious(self) -> bool {
        matches!(
            self,
            Self::StemCombination(_) | Self::SixHarmony(_) | Self::ThreeHarmony(_)
        )
    }
}

/// The two characters an interaction involves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Characters {
    Stems(Stem, Stem),
    Branches(Branch, Branch),
}

/// One detected interaction between two pillars of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interaction {
    pub kind: InteractionKind,
    pub positions: (PillarPosition, PillarPosition),
    pub characters: Characters,
}

/// Pillar pairs examined within one chart. The hour pairs only with the day.
pub const CHART_PAIRS: [(PillarPosition, PillarPosition); 4] = [
    (PillarPosition::Year, PillarPosition::Month),
    (PillarPosition::Year, PillarPosition::Day),
    (PillarPosition::Month, PillarPosition::Day),
    (PillarPosition::Day, PillarPosition::Hour),
];

/// Every table a branch pair matches, in table order.
pub fn branch_relations(a: Branch, b: Branch) -> Vec<InteractionKind> {
    let mut kinds = Vec::new();
    if let Some(e) = six_harmony(a, b) {
        kinds.push(InteractionKind::SixHarmony(e));
    }
    if let Some(e) = three_harmony(a, b) {
        kinds.push(InteractionKind::ThreeHarmony(e));
    }
    if is_six_clash(a, b) {
        kinds.push(InteractionKind::SixClash);
    }
    if is_six_harm(a, b) {
        kinds.push(InteractionKind::SixHarm);
    }
    if let Some(p) = punishment(a, b) {
        kinds.push(InteractionKind::Punishment(p));
    }
    kinds
}

/// All interactions across [`CHART_PAIRS`] (skipping the hour pair when absent).
pub fn chart_interactions(chart: &Chart) -> Vec<Interaction> {
    let mut found = Vec::new();
    for (pos_a, pos_b) in CHART_PAIRS {
        let (Some(a), Some(b)) = (chart.pillar(pos_a), chart.pillar(pos_b)) else {
            continue;
        };
        if let Some(e) = stem_combination(a.stem(), b.stem()) {
            found.push(Interaction {
                kind: InteractionKind::StemCombination(e),
                positions: (pos_a, pos_b),
                characters: Characters::Stems(a.stem(), b.stem()),
            });
        }
        for kind in branch_relations(a.branch(), b.branch()) {
            found.push(Interaction {
                kind,
                positions: (pos_a, pos_b),
                characters: Characters::Branches(a.branch(), b.branch()),
            });
        }
    }
    found
}

/// Completeness of a three-harmony frame within a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameCompleteness {
    /// All three branches present (삼합).
    Full,
    /// Two present (반합); the third is missing.
    Half { missing: Branch },
}

/// A three-harmony frame formed by the chart's branches as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmonyFrame {
    pub element: Element,
    pub completeness: FrameCompleteness,
}

/// Frames with at least two distinct members among the chart's branches.
pub fn harmony_frames(chart: &Chart) -> Vec<HarmonyFrame> {
    let present: Vec<Branch> = chart.pillars().map(|(_, p)| p.branch()).collect();
    let mut frames = Vec::new();
    for element in [Element::Water, Element::Wood, Element::Fire, Element::Metal] {
        let Some(members) = three_harmony_members(element) else {
            continue;
        };
        let missing: Vec<Branch> = members
            .into_iter()
            .filter(|m| !present.contains(m))
            .collect();
        let completeness = match missing.as_slice() {
            [] => FrameCompleteness::Full,
            [only] => FrameCompleteness::Half { missing: *only },
            _ => continue,
        };
        frames.push(HarmonyFrame {
            element,
            completeness,
        });
    }
    frames
}
