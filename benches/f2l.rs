//! Benchmarks for the F2L pair solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use f2l::{classify_pair, solve_pair, survey, Algorithm, Cube, Frame, Slot, SolveOptions};

fn setup(text: &str) -> Cube {
    let mut cube = Cube::solved();
    cube.apply(&text.parse::<Algorithm>().unwrap());
    cube
}

/// Benchmark classifying a pair that needs the full decision tree.
fn bench_classify(c: &mut Criterion) {
    let cube = setup("F D' F' D F D F'");

    c.bench_function("classify_pair", |b| {
        b.iter(|| classify_pair(black_box(&cube), Slot::FRONT_RIGHT))
    });
}

/// Benchmark solving the longest case, cross sticker down and joined.
fn bench_solve_pair(c: &mut Criterion) {
    let cube = setup("F D' F' R' D2 R F D' F'");
    let options = SolveOptions {
        validate_moves: false,
    };

    c.bench_function("solve_pair", |b| {
        b.iter(|| {
            let mut cube = black_box(&cube).clone();
            solve_pair(&mut cube, Slot::FRONT_RIGHT, options)
        })
    });
}

/// Benchmark enumerating every configuration of one slot.
fn bench_configurations(c: &mut Criterion) {
    c.bench_function("configurations", |b| {
        b.iter(|| survey::configurations(black_box(Slot::FRONT_RIGHT), Frame::STANDARD))
    });
}

/// Benchmark the full survey of all four slots.
fn bench_survey(c: &mut Criterion) {
    let mut group = c.benchmark_group("survey");
    group.sample_size(10);
    group.bench_function("all_slots", |b| {
        b.iter(|| survey::run(black_box(&Slot::ALL), SolveOptions::default()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_classify,
    bench_solve_pair,
    bench_configurations,
    bench_survey
);
criterion_main!(benches);
