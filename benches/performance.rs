// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for seq-chords
//!
//! Run with: cargo bench
//!
//! Chord resolution runs once per trigger in the control loop, so these
//! measure the per-call cost of each pipeline stage and of a full resolve.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use seq_chords::chords::{apply_voicing, expand, invert, voicing, QUALITY_COUNT};
use seq_chords::{resolve, Chord, ChordOutput, EqualDivision, Note, Scale, ScaleType};

/// Benchmark the individual pipeline stages
fn bench_stages(c: &mut Criterion) {
    let seventh = expand(2, 7).unwrap();
    let drop2 = voicing(2).unwrap();

    c.bench_function("expand_seventh", |b| {
        b.iter(|| expand(black_box(2), black_box(7)))
    });

    c.bench_function("invert_seventh", |b| {
        b.iter(|| invert(black_box(&seventh), black_box(-5), black_box(7)))
    });

    c.bench_function("apply_voicing_drop2", |b| {
        b.iter(|| apply_voicing(black_box(&seventh), black_box(drop2), black_box(7)))
    });
}

/// Benchmark a full resolve for every quality
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let scale = Scale::new(Note::C, ScaleType::Major);

    for quality in 0..QUALITY_COUNT as u8 {
        let chord = Chord::new(quality, 2, 7);
        group.bench_with_input(BenchmarkId::new("quality", quality), &chord, |b, chord| {
            b.iter(|| resolve(black_box(3), black_box(chord), &scale))
        });
    }

    let edo = EqualDivision::new(31);
    let chord = Chord::new(6, -3, 1);
    group.bench_function("edo31", |b| {
        b.iter(|| resolve(black_box(0), black_box(&chord), &edo))
    });

    group.finish();
}

/// Benchmark the output holder, including the rejected path
fn bench_output(c: &mut Criterion) {
    let scale = Scale::new(Note::D, ScaleType::Dorian);
    let good = Chord::new(4, 1, 0);
    let bad = Chord::new(99, 0, 0);

    c.bench_function("output_update", |b| {
        let mut output = ChordOutput::new();
        b.iter(|| output.update(black_box(2), black_box(&good), &scale).is_ok())
    });

    c.bench_function("output_update_rejected", |b| {
        let mut output = ChordOutput::new();
        b.iter(|| output.update(black_box(2), black_box(&bad), &scale).is_err())
    });
}

criterion_group!(benches, bench_stages, bench_resolve, bench_output);
criterion_main!(benches);
