//! Performance benchmarks for puzzle generation and garden state persistence.
//!
//! Run with: cargo bench

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use moodgarden::clock::FixedClock;
use moodgarden::content::POSITIVE_WORDS;
use moodgarden::engine::GardenEngine;
use moodgarden::mood::Mood;
use moodgarden::puzzle::{derive_line_path, match_selection, PuzzleGenerator};
use moodgarden::store::{MemoryStore, SqliteStore};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Puzzle generation across grid sizes.
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for size in [8, 10, 15, 20] {
        let generator = PuzzleGenerator::new(size, POSITIVE_WORDS.len()).expect("valid size");
        group.bench_with_input(BenchmarkId::from_parameter(size), &generator, |b, generator| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| black_box(generator.generate(black_box(POSITIVE_WORDS), &mut rng)));
        });
    }

    group.finish();
}

/// Matching every placed word from both ends.
fn bench_match(c: &mut Criterion) {
    let puzzle = PuzzleGenerator::default()
        .generate(POSITIVE_WORDS, &mut ChaCha8Rng::seed_from_u64(7));
    let found = HashSet::new();

    c.bench_function("match_all_placed", |b| {
        b.iter(|| {
            for placed in &puzzle.placed {
                let (start, end) = (placed.cells[0], placed.cells[placed.cells.len() - 1]);
                let path = derive_line_path(end, start);
                black_box(match_selection(&puzzle.grid, &path, &puzzle.placed, &found));
            }
        });
    });
}

/// A year of daily check-ins against the memory and SQLite stores.
fn bench_check_ins(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_ins_365");
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");

    group.bench_function("memory", |b| {
        b.iter(|| {
            let clock = FixedClock::on(start);
            let mut engine = GardenEngine::load(MemoryStore::new(), &clock);
            for _ in 0..365 {
                engine.select_mood(Mood::Happy);
                clock.advance_days(1);
            }
            black_box(engine.score())
        });
    });

    group.sample_size(10);
    group.bench_function("sqlite_in_memory", |b| {
        b.iter(|| {
            let clock = FixedClock::on(start);
            let store = SqliteStore::open_in_memory().expect("in-memory database");
            let mut engine = GardenEngine::load(store, &clock);
            for _ in 0..365 {
                engine.select_mood(Mood::Happy);
                clock.advance_days(1);
            }
            black_box(engine.score())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_match, bench_check_ins);
criterion_main!(benches);
