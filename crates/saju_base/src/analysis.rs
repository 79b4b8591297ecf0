//! One-call analysis bundle for a chart.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::chart::{Chart, PillarPosition};
use crate::distribution::{ElementDistribution, element_distribution};
use crate::hidden_stem::{HiddenStems, hidden_stems};
use crate::interaction::{HarmonyFrame, Interaction, chart_interactions, harmony_frames};
use crate::sinsal::{SinsalFinding, chart_sinsals};
use crate::strength::{FavorableElements, StrengthAssessment, assess_strength};
use crate::ten_god::{ChartTenGods, chart_ten_gods};

/// Everything derived from a single chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartAnalysis {
    pub distribution: ElementDistribution,
    pub ten_gods: ChartTenGods,
    /// Hidden stems per present pillar branch, year first.
    pub hidden_stems: Vec<(PillarPosition, HiddenStems)>,
    pub interactions: Vec<Interaction>,
    pub harmony_frames: Vec<HarmonyFrame>,
    pub strength: StrengthAssessment,
    /// 공망 of the day pillar.
    pub void_branches: [Branch; 2],
    /// Spirit stars present in the chart.
    pub sinsals: Vec<SinsalFinding>,
}

impl ChartAnalysis {
    pub fn favorable_elements(&self) -> &FavorableElements {
        &self.strength.favorable
    }

    /// Present pillars whose branch falls in the day pillar's void.
    pub fn void_positions(&self, chart: &Chart) -> Vec<PillarPosition> {
        chart
            .pillars()
            .filter(|(pos, p)| {
                *pos != PillarPosition::Day && self.void_branches.contains(&p.branch())
            })
            .map(|(pos, _)| pos)
            .collect()
    }
}

pub fn analyze(chart: &Chart) -> ChartAnalysis {
    ChartAnalysis {
        distribution: element_distribution(chart),
        ten_gods: chart_ten_gods(chart),
        hidden_stems: chart
            .pillars()
            .map(|(pos, p)| (pos, hidden_stems(p.branch())))
            .collect(),
        interactions: chart_interactions(chart),
        harmony_frames: harmony_frames(chart),
        strength: assess_strength(chart),
        void_branches: chart.day.void_branches(),
        sinsals: chart_sinsals(chart),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganji::Pillar;

    #[test]
    fn bundle_sizes_follow_hour_presence() {
        let chart = Chart {
            year: Pillar::from_cycle_index(6),
            month: Pillar::from_cycle_index(15),
            day: Pillar::from_cycle_index(0),
            hour: None,
        };
        let a = analyze(&chart);
        assert_eq!(a.distribution.total(), 6);
        assert_eq!(a.hidden_stems.len(), 3);
        assert!(a.ten_gods.hour_stem.is_none());

        let with_hour = analyze(&Chart {
            hour: Some(Pillar::from_cycle_index(10)),
            ..chart
        });
        assert_eq!(with_hour.distribution.total(), 8);
        assert_eq!(with_hour.hidden_stems.len(), 4);
    }

    #[test]
    fn void_positions_skip_day() {
        // 갑자 day: void 술해. Hour 갑술 sits in the void.
        let chart = Chart {
            year: Pillar::from_cycle_index(6),
            month: Pillar::from_cycle_index(15),
            day: Pillar::from_cycle_index(0),
            hour: Some(Pillar::from_cycle_index(10)),
        };
        let a = analyze(&chart);
        assert_eq!(a.void_branches, [Branch::Sul, Branch::Hae]);
        assert_eq!(a.void_positions(&chart), vec![PillarPosition::Hour]);
    }

    #[test]
    fn sinsals_match_chart_scan() {
        let chart = Chart {
            year: Pillar::from_cycle_index(6),
            month: Pillar::from_cycle_index(15),
            day: Pillar::from_cycle_index(0),
            hour: Some(Pillar::from_cycle_index(10)),
        };
        let a = analyze(&chart);
        assert_eq!(a.sinsals, chart_sinsals(&chart));
        // hour 술 is in the 갑자 day's void
        let gongmang = a
            .sinsals
            .iter()
            .find(|f| f.sinsal == crate::sinsal::Sinsal::Gongmang)
            .unwrap();
        assert!(gongmang.positions.contains(&PillarPosition::Hour));
    }
}
