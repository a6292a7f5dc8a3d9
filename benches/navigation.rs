// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for carousel navigation operations.
//!
//! Measures the pure index transitions (next/previous/jump) over a large
//! loaded page, without any network or rendering involvement.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_carousel::feed::ImageRecord;
use iced_carousel::navigation::Carousel;
use std::hint::black_box;

const PAGE_SIZE: usize = 1_000;

fn loaded_carousel() -> Carousel {
    let records = (0..PAGE_SIZE)
        .map(|i| ImageRecord {
            id: i.to_string(),
            download_url: format!("https://picsum.photos/id/{i}/5000/3333"),
            author: None,
        })
        .collect();
    let mut carousel = Carousel::new();
    carousel.load(records);
    carousel
}

fn bench_walk_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");
    let carousel = loaded_carousel();

    group.bench_function("walk_forward", |b| {
        b.iter(|| {
            let mut nav = carousel.clone();
            while nav.next() {}
            black_box(nav.current_index());
        });
    });

    group.finish();
}

fn bench_walk_backward(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");
    let mut carousel = loaded_carousel();
    carousel.jump_to(PAGE_SIZE - 1);

    group.bench_function("walk_backward", |b| {
        b.iter(|| {
            let mut nav = carousel.clone();
            while nav.previous() {}
            black_box(nav.current_index());
        });
    });

    group.finish();
}

fn bench_jump(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");
    let carousel = loaded_carousel();

    group.bench_function("jump_to_middle", |b| {
        b.iter(|| {
            let mut nav = carousel.clone();
            nav.jump_to(black_box(PAGE_SIZE / 2));
            black_box(nav.current_index());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_walk_forward, bench_walk_backward, bench_jump);
criterion_main!(benches);
