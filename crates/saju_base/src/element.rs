//! Five elements (오행), yin/yang polarity, and the generate/control cycles.

use serde::{Deserialize, Serialize};

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generating order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index in generating order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Hangul name (목, 화, 토, 금, 수).
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// Element this one generates (상생): Wood→Fire→Earth→Metal→Water→Wood.
    pub const fn generates(self) -> Self {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// Element this one controls (상극): Wood→Earth→Water→Fire→Metal→Wood.
    pub const fn controls(self) -> Self {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }

    /// Element that generates this one.
    pub const fn generated_by(self) -> Self {
        ALL_ELEMENTS[((self.index() + 4) % 5) as usize]
    }

    /// Element that controls this one.
    pub const fn controlled_by(self) -> Self {
        ALL_ELEMENTS[((self.index() + 3) % 5) as usize]
    }

    /// How `other` stands relative to `self`. Total: every ordered pair of
    /// elements falls in exactly one relation.
    pub const fn relation_to(self, other: Self) -> ElementRelation {
        match (other.index() + 5 - self.index()) % 5 {
            0 => ElementRelation::Same,
            1 => ElementRelation::Generates,
            2 => ElementRelation::Controls,
            3 => ElementRelation::ControlledBy,
            _ => ElementRelation::GeneratedBy,
        }
    }
}

/// Relation of a second element to a reference element, seen from the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRelation {
    Same,
    /// Reference generates the other.
    Generates,
    /// Other generates the reference.
    GeneratedBy,
    /// Reference controls the other.
    Controls,
    /// Other controls the reference.
    ControlledBy,
}

/// Day-master-relative role of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRole {
    /// Same element as the day master (비겁).
    Companion,
    /// Generates the day master (인성).
    Resource,
    /// Generated by the day master (식상).
    Output,
    /// Controlled by the day master (재성).
    Wealth,
    /// Controls the day master (관성).
    Officer,
}

impl ElementRole {
    pub const fn of(day_master: Element, other: Element) -> Self {
        match day_master.relation_to(other) {
            ElementRelation::Same => Self::Companion,
            ElementRelation::GeneratedBy => Self::Resource,
            ElementRelation::Generates => Self::Output,
            ElementRelation::Controls => Self::Wealth,
            ElementRelation::ControlledBy => Self::Officer,
        }
    }

    /// The concrete element playing this role for `day_master`.
    pub const fn element_for(self, day_master: Element) -> Element {
        match self {
            Self::Companion => day_master,
            Self::Resource => day_master.generated_by(),
            Self::Output => day_master.generates(),
            Self::Wealth => day_master.controls(),
            Self::Officer => day_master.controlled_by(),
        }
    }
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YinYang {
    Yang,
    Yin,
}

impl YinYang {
    /// Polarity from a stem/branch ordinal: even = yang, odd = yin.
    pub const fn from_ordinal(ordinal: u8) -> Self {
        if ordinal % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }

    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Yang => "양",
            Self::Yin => "음",
        }
    }
}
