//! Benchmarks for the puzzle kernel.

use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cubeword::core::{IndexedCubeFace, LatticePoint, Moves, Side, touching};
use cubeword::dictionary::{Language, WordList};
use cubeword::generator::{GeneratorConfig, generate_seeded};
use cubeword::rules::{MoveRequest, Rules, Verifier};
use cubeword::solver::find_words;

/// Benchmark a full sweep of the touching table.
fn bench_touching(c: &mut Criterion) {
    let faces: Vec<IndexedCubeFace> = IndexedCubeFace::all().collect();

    c.bench_function("touching_all_pairs", |b| {
        b.iter(|| {
            faces
                .iter()
                .flat_map(|&a| faces.iter().map(move |&b| touching(a, b)))
                .filter(|&t| t)
                .count()
        });
    });
}

/// Benchmark verifying and applying one word to a fresh puzzle.
fn bench_apply(c: &mut Criterion) {
    let words = WordList::embedded();
    let verifier = Verifier::new(&words);
    let center = LatticePoint::CENTER;
    let path = vec![
        IndexedCubeFace::new(center, Side::Top),
        IndexedCubeFace::new(center, Side::Left),
        IndexedCubeFace::new(center, Side::Right),
    ];
    let puzzle = cubeword::core::Puzzle::uniform("E")
        .with_letter(path[0], "C")
        .with_letter(path[1], "A")
        .with_letter(path[2], "B");
    let played_at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

    c.bench_function("verify_and_apply", |b| {
        b.iter(|| {
            let mut puzzle = puzzle.clone();
            let mut moves = Moves::new();
            let request = MoveRequest::played_word(played_at, None, path.clone());
            verifier.apply(black_box(request), &mut puzzle, &mut moves)
        });
    });
}

/// Benchmark enumerating every word on a generated puzzle.
fn bench_find_words(c: &mut Criterion) {
    let words = WordList::embedded();
    let rules = Rules::default();
    let puzzle = generate_seeded(1, &words, Language::En, &GeneratorConfig::default()).puzzle;

    c.bench_function("find_words", |b| {
        b.iter(|| find_words(black_box(&puzzle), &words, Language::En, &rules, 8));
    });
}

/// Benchmark seeded generation.
fn bench_generate(c: &mut Criterion) {
    let words = WordList::embedded();
    let config = GeneratorConfig::default();

    let mut group = c.benchmark_group("generator");
    group.sample_size(10);
    group.bench_function("generate_seeded", |b| {
        b.iter(|| generate_seeded(black_box(42), &words, Language::En, &config));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_touching,
    bench_apply,
    bench_find_words,
    bench_generate
);
criterion_main!(benches);
