//! Hidden stems (지장간) of each branch.
//!
//! Every branch holds a main stem and a residual stem; all but 자, 묘
//! and 유 also hold a middle stem.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;

/// Layer of a hidden stem inside its branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HiddenStemRole {
    /// 정기
    Main,
    /// 중기
    Middle,
    /// 여기
    Residue,
}

impl HiddenStemRole {
    /// Weight in tenths: main 1.0, middle 0.5, residue 0.3.
    pub const fn weight_tenths(self) -> u8 {
        match self {
            Self::Main => 10,
            Self::Middle => 5,
            Self::Residue => 3,
        }
    }
}

/// The hidden stems of one branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HiddenStems {
    pub main: Stem,
    pub middle: Option<Stem>,
    pub residue: Stem,
}

impl HiddenStems {
    /// Present stems with their roles, main first.
    pub fn iter(&self) -> impl Iterator<Item = (HiddenStemRole, Stem)> + use<> {
        [
            Some((HiddenStemRole::Main, self.main)),
            self.middle.map(|s| (HiddenStemRole::Middle, s)),
            Some((HiddenStemRole::Residue, self.residue)),
        ]
        .into_iter()
        .flatten()
    }
}

/// Hidden stems of `branch`.
pub const fn hidden_stems(branch: Branch) -> HiddenStems {
    use Branch::*;
    use Stem::*;

    let (main, middle, residue) = match branch {
        Ja => (Gye, None, Im),
        Chuk => (Gi, Some(Stem::Sin), Gye),
        In => (Gap, Some(Byeong), Mu),
        Myo => (Eul, None, Gap),
        Jin => (Mu, Some(Gye), Eul),
        Sa => (Byeong, Some(Gyeong), Mu),
        O => (Jeong, Some(Gi), Byeong),
        Mi => (Gi, Some(Eul), Jeong),
        Branch::Sin => (Gyeong, Some(Im), Mu),
        Yu => (Stem::Sin, None, Gyeong),
        Sul => (Mu, Some(Jeong), Stem::Sin),
        Hae => (Im, Some(Gap), Mu),
    };
    HiddenStems {
        main,
        middle,
        residue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;

    #[test]
    fn main_stem_shares_branch_element() {
        for b in ALL_BRANCHES {
            assert_eq!(hidden_stems(b).main.element(), b.element(), "{b:?}");
        }
    }

    #[test]
    fn three_branches_lack_middle() {
        let without: Vec<_> = ALL_BRANCHES
            .into_iter()
            .filter(|b| hidden_stems(*b).middle.is_none())
            .collect();
        assert_eq!(without, vec![Branch::Ja, Branch::Myo, Branch::Yu]);
    }

    #[test]
    fn iter_order() {
        let roles: Vec<_> = hidden_stems(Branch::In).iter().collect();
        assert_eq!(
            roles,
            vec![
                (HiddenStemRole::Main, Stem::Gap),
                (HiddenStemRole::Middle, Stem::Byeong),
                (HiddenStemRole::Residue, Stem::Mu),
            ]
        );
        assert_eq!(hidden_stems(Branch::Ja).iter().count(), 2);
    }
}
