//! Integration tests for two-chart compatibility scoring.

use saju_base::compatibility::day_pillar_score;
use saju_base::{
    Chart, CrossRelation, DayBranchRelation, Element, Grade, Pillar, Stem, build_chart,
    score_compatibility,
};
use saju_time::CivilDate;

fn chart(y: i32, m: u32, d: u32) -> Chart {
    build_chart(CivilDate::new(y, m, d).unwrap(), None)
}

fn synthetic(year: i64, month: i64, day: i64) -> Chart {
    Chart {
        year: Pillar::from_cycle_index(year),
        month: Pillar::from_cycle_index(month),
        day: Pillar::from_cycle_index(day),
        hour: None,
    }
}

#[test]
fn gap_and_gi_day_masters() {
    // 2024-01-01 is a 갑자 day, 2024-01-06 a 기사 day.
    let a = chart(2024, 1, 1);
    let b = chart(2024, 1, 6);
    assert_eq!(a.day_master(), Stem::Gap);
    assert_eq!(b.day_master(), Stem::Gi);

    let r = score_compatibility(&a, &b);
    let combo = r.stem_combination.unwrap();
    assert_eq!(combo.element, Element::Earth);
    assert_eq!(combo.stems, (Stem::Gap, Stem::Gi));

    // The same day branches without the combination score exactly 18 less.
    let plain = synthetic(0, 0, 0);
    let other = Chart {
        day: Pillar::from_cycle_index(b.day.cycle_index() as i64 + 12),
        ..plain
    };
    assert_eq!(other.day.branch(), b.day.branch());
    let without = day_pillar_score(&plain, &other);
    assert_eq!(r.day_pillar_score as i32 - without as i32, 18);
}

#[test]
fn ja_o_clash_is_penalised() {
    let base = synthetic(2, 2, 0); // 병인 병인 갑자
    let clash = synthetic(2, 2, 6); // 병인 병인 경오
    let calm = synthetic(2, 2, 4); // 병인 병인 무진

    let r = score_compatibility(&base, &clash);
    assert!(r.branch_findings.iter().any(|f| f.relation == CrossRelation::SixClash
        && f.a.1 == saju_base::Branch::Ja
        && f.b.1 == saju_base::Branch::O));
    assert_eq!(r.day_branch_relation, Some(DayBranchRelation::SixClash));

    let r_calm = score_compatibility(&base, &calm);
    assert!(r.branch_score < r_calm.branch_score);
}

#[test]
fn self_comparison_element_band() {
    let mut d = CivilDate::new(1970, 1, 1).unwrap();
    for _ in 0..50 {
        let c = build_chart(d, None);
        let r = score_compatibility(&c, &c);
        assert_eq!(r.element_score, 75);
        d = d.add_days(97).unwrap();
    }
}

#[test]
fn scores_within_bounds() {
    let mut da = CivilDate::new(1960, 3, 1).unwrap();
    for _ in 0..40 {
        let mut db = CivilDate::new(1985, 7, 9).unwrap();
        for _ in 0..15 {
            let r = score_compatibility(&build_chart(da, None), &build_chart(db, None));
            assert!(r.total <= 100);
            assert!((40..=100).contains(&r.branch_score));
            assert!((40..=100).contains(&r.day_pillar_score));
            assert!([50, 55, 75, 85, 90].contains(&r.element_score));
            assert_eq!(r.grade, Grade::from_score(r.total));
            db = db.add_days(131).unwrap();
        }
        da = da.add_days(367).unwrap();
    }
}

#[test]
fn direction_dependent_element_score() {
    // 갑 (wood) with 병 (fire): wood generates fire
    let wood = synthetic(0, 0, 0);
    let fire = synthetic(0, 0, 2);
    assert_eq!(score_compatibility(&wood, &fire).element_score, 85);
    assert_eq!(score_compatibility(&fire, &wood).element_score, 90);
}
