// Criterion benchmark suite: character inspection and script scanning.
//
// Run: cargo bench
// Specific group: cargo bench -- analyze
// HTML report: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use runa::analysis::ScriptAnalysis;
use runa::character::Character;

// ---------------------------------------------------------------------------
// Character construction
// ---------------------------------------------------------------------------

fn bench_inspect(c: &mut Criterion) {
    let mut group = c.benchmark_group("inspect");

    group.bench_function("ascii", |b| {
        b.iter(|| Character::new(black_box("A")).unwrap())
    });
    group.bench_function("multibyte", |b| {
        b.iter(|| Character::new(black_box("ß")).unwrap())
    });
    group.bench_function("supplementary", |b| {
        b.iter(|| Character::new(black_box("🍗")).unwrap())
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Script scanning
// ---------------------------------------------------------------------------

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    group.bench_function("latin", |b| {
        b.iter(|| ScriptAnalysis::new(black_box("administrator")).unwrap())
    });
    group.bench_function("homograph", |b| {
        b.iter(|| ScriptAnalysis::new(black_box("аdministrator")).unwrap())
    });
    group.bench_function("repeated", |b| {
        b.iter(|| ScriptAnalysis::new(black_box("aaaaaaaaaaaaaaaa")).unwrap())
    });
    group.bench_function("mixed_common", |b| {
        b.iter(|| ScriptAnalysis::new(black_box("user-42@example!")).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_inspect, bench_analyze);
criterion_main!(benches);
