//! Integration tests for chart analysis and strength assessment.

use saju_base::{
    ALL_ELEMENTS, Element, InteractionKind, PillarPosition, StrengthLevel, analyze, build_chart,
};
use saju_time::{CivilDate, WallTime};

fn chart(y: i32, m: u32, d: u32, t: Option<(u32, u32)>) -> saju_base::Chart {
    let time = t.map(|(h, min)| WallTime::new(h, min).unwrap());
    build_chart(CivilDate::new(y, m, d).unwrap(), time)
}

#[test]
fn partition_holds_for_many_charts() {
    let mut date = CivilDate::new(1950, 1, 1).unwrap();
    for step in 0..400 {
        let c = build_chart(date, Some(WallTime::new(step % 24, 0).unwrap()));
        let a = analyze(&c);
        let fav = a.favorable_elements().favorable();
        let unfav = a.favorable_elements().unfavorable();
        assert!(fav.iter().all(|e| !unfav.contains(e)), "{date}");

        let own = c.day_master().element();
        let mut covered: Vec<Element> = fav.iter().chain(&unfav).copied().collect();
        if !covered.contains(&own) {
            covered.push(own);
        }
        covered.sort();
        assert_eq!(covered, ALL_ELEMENTS.to_vec(), "{date}");

        assert!(a.strength.score <= 100);
        assert_eq!(a.strength.level, StrengthLevel::from_score(a.strength.score));
        date = date.add_days(53).unwrap();
    }
}

#[test]
fn weak_leaning_favors_resource() {
    let mut date = CivilDate::new(1960, 1, 1).unwrap();
    for _ in 0..300 {
        let c = build_chart(date, None);
        let a = analyze(&c);
        let own = c.day_master().element();
        match a.strength.level {
            StrengthLevel::Weak | StrengthLevel::ExtremeWeak => {
                assert_eq!(a.strength.favorable.yongsin, vec![own.generated_by()]);
                assert_eq!(a.strength.favorable.heeshin, vec![own]);
            }
            StrengthLevel::Strong | StrengthLevel::ExtremeStrong => {
                assert_eq!(a.strength.favorable.yongsin, vec![own.generates()]);
                assert_eq!(a.strength.favorable.heeshin, vec![own.controlled_by()]);
            }
            StrengthLevel::Neutral => {}
        }
        date = date.add_days(41).unwrap();
    }
}

#[test]
fn interactions_only_on_examined_pairs() {
    let c = chart(1990, 5, 20, Some((14, 0)));
    let a = analyze(&c);
    for i in &a.interactions {
        let pair = i.positions;
        assert!(matches!(
            pair,
            (PillarPosition::Year, PillarPosition::Month)
                | (PillarPosition::Year, PillarPosition::Day)
                | (PillarPosition::Month, PillarPosition::Day)
                | (PillarPosition::Day, PillarPosition::Hour)
        ));
    }
}

#[test]
fn known_chart_interactions() {
    // 경오 신사 을유 계미: 경을 combine (year×day), 사유 three-harmony
    // (month×day). 오미 would harmonise, but the hour pairs only with the day.
    let c = chart(1990, 5, 20, Some((14, 0)));
    let a = analyze(&c);
    assert!(a.interactions.iter().any(|i| i.kind
        == InteractionKind::StemCombination(Element::Metal)
        && i.positions == (PillarPosition::Year, PillarPosition::Day)));
    assert!(a.interactions.iter().any(|i| i.kind
        == InteractionKind::ThreeHarmony(Element::Metal)
        && i.positions == (PillarPosition::Month, PillarPosition::Day)));
    assert!(!a
        .interactions
        .iter()
        .any(|i| matches!(i.kind, InteractionKind::SixHarmony(_))));
}

#[test]
fn analysis_serializes() {
    let c = chart(1990, 1, 15, None);
    let a = analyze(&c);
    let json = serde_json::to_string(&a).unwrap();
    let back: saju_base::ChartAnalysis = serde_json::from_str(&json).unwrap();
    assert_eq!(back, a);
}
