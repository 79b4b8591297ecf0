//! Element and yin/yang tally over a chart's characters.

use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::element::{ALL_ELEMENTS, Element, YinYang};

/// Counts over the 8 (or 6, without an hour pillar) stem/branch characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementDistribution {
    /// Indexed by [`Element::index`].
    pub counts: [u8; 5],
    pub yang: u8,
    pub yin: u8,
}

impl ElementDistribution {
    pub fn count(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    /// Total characters tallied; equals `yang + yin`.
    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// Element(s) with the highest count, in generating order.
    pub fn dominant(&self) -> Vec<Element> {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        ALL_ELEMENTS
            .into_iter()
            .filter(|e| self.count(*e) == max)
            .collect()
    }

    /// Elements absent from the chart.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .into_iter()
            .filter(|e| self.count(*e) == 0)
            .collect()
    }

    fn add(&mut self, element: Element, polarity: YinYang) {
        self.counts[element.index() as usize] += 1;
        match polarity {
            YinYang::Yang => self.yang += 1,
            YinYang::Yin => self.yin += 1,
        }
    }
}

/// Tally every present stem and branch of `chart`.
pub fn element_distribution(chart: &Chart) -> ElementDistribution {
    let mut dist = ElementDistribution::default();
    for (_, pillar) in chart.pillars() {
        dist.add(pillar.stem().element(), pillar.stem().polarity());
        dist.add(pillar.branch().element(), pillar.branch().polarity());
    }
    dist
}
