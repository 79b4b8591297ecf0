use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{
    FortuneConfig, Gender, analyze, build_chart, project_decades, project_years,
    score_compatibility,
};
use saju_time::{CivilDate, WallTime};

fn chart_bench(c: &mut Criterion) {
    let date = CivilDate::new(1990, 5, 20).unwrap();
    let time = WallTime::new(14, 0).unwrap();

    let mut group = c.benchmark_group("chart");
    group.bench_function("build_chart", |b| {
        b.iter(|| build_chart(black_box(date), black_box(Some(time))))
    });
    let chart = build_chart(date, Some(time));
    group.bench_function("analyze", |b| b.iter(|| analyze(black_box(&chart))));
    group.finish();
}

fn compatibility_bench(c: &mut Criterion) {
    let a = build_chart(CivilDate::new(1990, 5, 20).unwrap(), None);
    let b_chart = build_chart(CivilDate::new(1992, 11, 3).unwrap(), None);

    c.bench_function("score_compatibility", |b| {
        b.iter(|| score_compatibility(black_box(&a), black_box(&b_chart)))
    });
}

fn fortune_bench(c: &mut Criterion) {
    let chart = build_chart(CivilDate::new(1990, 5, 20).unwrap(), None);
    let cfg = FortuneConfig::default();

    let mut group = c.benchmark_group("fortune");
    group.bench_function("project_decades", |b| {
        b.iter(|| project_decades(black_box(&chart), 1990, 5, Some(Gender::Male), &cfg))
    });
    group.bench_function("project_years", |b| {
        b.iter(|| project_years(black_box(&chart), 1990, 2020..=2040, 2026))
    });
    group.finish();
}

criterion_group!(benches, chart_bench, compatibility_bench, fortune_bench);
criterion_main!(benches);
