// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimap and loupe drawing through a recording surface.

use imageport_render::testing::{DrawCall, RecordingSurface};
use imageport_render::{
    CoordinateTransform, Loupe, Minimap, OverlayStyle, RenderElement, RenderStack, Surface,
    element_ref,
};
use imageport_view2d::{Extent, Space};
use kurbo::{Point, Rect, Size};
use peniko::Color;

struct Image;

impl RenderElement for Image {
    fn render(&self, surface: &mut dyn Surface, t: &CoordinateTransform) {
        let rect = t.extent_to_pixels(Extent::FULL, Space::ValidArea).to_rect();
        surface.fill_rect(rect, Color::WHITE);
    }
}

fn setup() -> (RenderStack, RecordingSurface, CoordinateTransform) {
    let mut stack = RenderStack::new();
    stack.insert(element_ref(Image));
    let size = Size::new(1000.0, 1000.0);
    let surface = RecordingSurface::new(size);
    let main = CoordinateTransform::new(Extent::new(0.0, 0.0, 0.5, 0.5), Extent::FULL, size, size);
    (stack, surface, main)
}

fn close(a: Rect, b: Rect) -> bool {
    (a.x0 - b.x0).abs() < 1e-6
        && (a.y0 - b.y0).abs() < 1e-6
        && (a.x1 - b.x1).abs() < 1e-6
        && (a.y1 - b.y1).abs() < 1e-6
}

#[test]
fn minimap_draws_whole_image_clipped_to_frame() {
    let (stack, mut surface, main) = setup();
    let style = OverlayStyle::minimap();
    Minimap::default().render(&mut surface, &main, &stack, &style);

    let frame = Rect::new(845.0, 845.0, 995.0, 995.0);
    let calls = surface.calls();
    assert_eq!(calls.len(), 6, "background, clip, image, marker, unclip, frame");
    let DrawCall::PushClip(clip) = calls[1] else {
        panic!("expected clip, got {:?}", calls[1]);
    };
    assert!(close(clip, frame));
    let DrawCall::FillRect { rect, color } = calls[2] else {
        panic!("expected image fill, got {:?}", calls[2]);
    };
    assert_eq!(color, Color::WHITE);
    assert!(close(rect, frame));
    let DrawCall::StrokeRect { rect: marker, .. } = calls[3] else {
        panic!("expected marker, got {:?}", calls[3]);
    };
    assert!(close(marker, Rect::new(845.0, 845.0, 920.0, 920.0)));
    assert_eq!(calls[4], DrawCall::PopClip);
}

#[test]
fn hidden_loupe_draws_nothing() {
    let (stack, mut surface, main) = setup();
    Loupe::default().render(&mut surface, &main, &stack, &OverlayStyle::loupe());
    assert!(surface.calls().is_empty());
}

#[test]
fn loupe_frame_is_centered_on_pointer() {
    let (stack, mut surface, main) = setup();
    let mut loupe = Loupe::default();
    loupe.track(Point::new(0.5, 0.5));
    loupe.render(&mut surface, &main, &stack, &OverlayStyle::loupe());

    let calls = surface.calls();
    let DrawCall::FillRect { rect, .. } = calls[0] else {
        panic!("expected loupe background, got {:?}", calls[0]);
    };
    assert!(close(rect, Rect::new(300.0, 300.0, 700.0, 700.0)));
    assert!(matches!(calls.last(), Some(DrawCall::StrokeRect { .. })));
}
