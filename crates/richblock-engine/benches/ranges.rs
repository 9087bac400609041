use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use richblock_engine::models::inline_style::BOLD;
use richblock_engine::{BlockNode, find_ranges};
mod common;

fn bench_style_ranges(c: &mut Criterion) {
    let mut group = c.benchmark_group("style_ranges");
    group.sample_size(50);

    for (name, run_len) in [("long_runs", 512), ("short_runs", 3), ("single_chars", 1)] {
        let block = common::generate_styled_block(10_000, run_len);
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut count = 0usize;
                block.find_style_ranges(|_| true, |_, _| count += 1);
                black_box(count);
            });
        });
    }

    let block = common::generate_styled_block(10_000, 8);
    group.bench_function("filtered_bold", |b| {
        b.iter(|| {
            let mut covered = 0usize;
            block.find_style_ranges(|m| m.has_style(BOLD), |s, e| covered += e - s);
            black_box(covered);
        });
    });

    group.finish();
}

fn bench_entity_ranges(c: &mut Criterion) {
    let mut group = c.benchmark_group("entity_ranges");
    group.sample_size(50);

    let block = common::generate_styled_block(10_000, 8);
    group.bench_function("linked_runs", |b| {
        b.iter(|| {
            let mut count = 0usize;
            block.find_entity_ranges(|m| m.entity().is_some(), |_, _| count += 1);
            black_box(count);
        });
    });

    group.finish();
}

fn bench_find_ranges_raw(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_ranges");
    let items: Vec<u32> = (0..100_000).map(|i| i / 16).collect();

    group.bench_function("u32_runs", |b| {
        b.iter(|| {
            let mut count = 0usize;
            find_ranges(black_box(&items), |x, y| x == y, |_| true, |_, _| count += 1);
            black_box(count);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_style_ranges,
    bench_entity_ranges,
    bench_find_ranges_raw
);
criterion_main!(benches);
