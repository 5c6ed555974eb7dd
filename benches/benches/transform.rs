// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use imageport_view2d::{Extent, Space, ViewportState};
use kurbo::{Point, Size, Vec2};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_unit(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|_| Point::new(rng.next_unit(), rng.next_unit()))
        .collect()
}

fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("view2d/round_trip");
    let mut state = ViewportState::new();
    state.set_valid_area(Extent::new(0.1, 0.0, 0.8, 1.0));
    state.set(Extent::new(0.2, 0.3, 0.4, 0.4));
    let t = state.transform(Size::new(1920.0, 1080.0), Size::new(960.0, 540.0));

    for len in [256_usize, 4_096] {
        let pts = points(len, 7);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("valid_area", len), &pts, |b, pts| {
            b.iter(|| {
                for &p in pts {
                    let px = t.point_to_pixels(p, Space::ValidArea);
                    black_box(t.point_from_pixels(px, Space::ValidArea));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("canvas", len), &pts, |b, pts| {
            b.iter(|| {
                for &p in pts {
                    let px = t.point_to_pixels(p, Space::Canvas);
                    black_box(t.point_from_pixels(px, Space::Canvas));
                }
            });
        });
    }
    group.finish();
}

fn bench_viewport_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("view2d/viewport");
    let anchors = points(1_024, 11);

    // Alternating zoom in/out keeps the viewport away from the clamps.
    group.bench_function("zoom_about", |b| {
        let mut state = ViewportState::new();
        b.iter(|| {
            for (i, &anchor) in anchors.iter().enumerate() {
                let amount = if i % 2 == 0 { -0.05 } else { 0.05 };
                black_box(state.zoom_about(anchor, amount));
            }
        });
    });

    group.bench_function("pan_by", |b| {
        let mut state = ViewportState::new();
        state.set(Extent::new(0.25, 0.25, 0.5, 0.5));
        b.iter(|| {
            for &anchor in &anchors {
                black_box(state.pan_by(Vec2::new(anchor.x - 0.5, anchor.y - 0.5)));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_round_trip, bench_viewport_writes);
criterion_main!(benches);
