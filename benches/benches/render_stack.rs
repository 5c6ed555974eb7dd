// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use imageport::{ImageViewport, ViewportConfig};
use imageport_event_state::pointer::{PointerButton, PointerEvent};
use imageport_render::testing::RecordingSurface;
use imageport_render::{
    CoordinateTransform, ElementRef, RenderElement, RenderStack, Surface, element_ref,
};
use imageport_view2d::{Extent, Space};
use kurbo::{Point, Size};
use peniko::Color;

struct Tile {
    z: f64,
    extent: Extent,
}

impl RenderElement for Tile {
    fn z_index(&self) -> f64 {
        self.z
    }

    fn render(&self, surface: &mut dyn Surface, t: &CoordinateTransform) {
        let rect = t.extent_to_pixels(self.extent, Space::ValidArea).to_rect();
        surface.fill_rect(rect, Color::WHITE);
    }
}

fn elements(n: usize) -> Vec<ElementRef> {
    (0..n)
        .map(|i| {
            // Interleave z-indices so inserts land mid-stack.
            let z = ((i * 7919) % n) as f64;
            let f = i as f64 / n as f64;
            element_ref(Tile {
                z,
                extent: Extent::new(f * 0.9, f * 0.9, 0.1, 0.1),
            })
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/stack_insert");
    for len in [64_usize, 512] {
        let items = elements(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            b.iter_batched(
                RenderStack::new,
                |mut stack| {
                    for el in items {
                        stack.insert(el.clone());
                    }
                    black_box(stack);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/frame");
    for len in [64_usize, 512] {
        let mut vp = ImageViewport::new(
            RecordingSurface::new(Size::new(1024.0, 768.0)),
            ViewportConfig::default(),
            true,
        );
        for el in elements(len) {
            vp.add_render_element(el);
        }
        vp.set_viewport(Extent::new(0.25, 0.25, 0.5, 0.5));
        vp.set_loupe_visible(true);
        vp.handle_event(&PointerEvent::moved(Point::new(512.0, 384.0)));

        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::new("redraw", len), |b| {
            b.iter(|| vp.redraw());
        });
        group.bench_function(BenchmarkId::new("wheel_event", len), |b| {
            b.iter(|| {
                let at = Point::new(512.0, 384.0);
                vp.handle_event(&PointerEvent::wheel(at, 1.0));
                vp.handle_event(&PointerEvent::wheel(at, -1.0));
                vp.handle_event(&PointerEvent::down(PointerButton::Secondary, at));
                vp.handle_event(&PointerEvent::up(PointerButton::Secondary, at));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_frame);
criterion_main!(benches);
