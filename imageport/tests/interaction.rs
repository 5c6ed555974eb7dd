// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-driven pan, zoom and auto-scroll.

use core::time::Duration;

use imageport::{ImageViewport, ViewportConfig};
use imageport_event_state::action::{Action, Cursor};
use imageport_event_state::pointer::{PointerButton, PointerEvent};
use imageport_render::testing::RecordingSurface;
use imageport_view2d::Extent;
use kurbo::{Point, Size};

fn viewport() -> ImageViewport<RecordingSurface> {
    let surface = RecordingSurface::new(Size::new(100.0, 100.0));
    ImageViewport::new(surface, ViewportConfig::default(), true)
}

fn approx(a: Extent, b: Extent) -> bool {
    (a.x - b.x).abs() < 1e-9
        && (a.y - b.y).abs() < 1e-9
        && (a.w - b.w).abs() < 1e-9
        && (a.h - b.h).abs() < 1e-9
}

fn click(vp: &mut ImageViewport<RecordingSurface>, button: PointerButton, at: Point) {
    vp.handle_event(&PointerEvent::down(button, at));
    vp.handle_event(&PointerEvent::up(button, at));
}

#[test]
fn wheel_forward_zooms_in_and_reset_restores() {
    let mut vp = viewport();
    vp.handle_event(&PointerEvent::wheel(Point::new(50.0, 50.0), 3.0));
    assert!(approx(vp.viewport(), Extent::new(0.0125, 0.0125, 0.95, 0.95)));
    assert!(vp.is_zoomed());

    vp.reset_viewport();
    assert_eq!(vp.viewport(), Extent::FULL);
    vp.reset_viewport();
    assert_eq!(vp.viewport(), Extent::FULL);
}

#[test]
fn wheel_backward_cannot_exceed_full_view() {
    let mut vp = viewport();
    vp.handle_event(&PointerEvent::wheel(Point::new(10.0, 90.0), -1.0));
    assert_eq!(vp.viewport(), Extent::FULL);
}

#[test]
fn click_zoom_in_then_action_resets() {
    let mut vp = viewport();
    vp.set_action(Action::ZoomIn);
    click(&mut vp, PointerButton::Primary, Point::new(50.0, 50.0));
    assert!(approx(vp.viewport(), Extent::new(0.05, 0.05, 0.8, 0.8)));
    assert_eq!(vp.action_context().action(), Action::None);
}

#[test]
fn burst_mode_keeps_zoom_action() {
    let mut vp = viewport();
    vp.set_action(Action::ZoomOut);
    vp.set_burst_mode(true);
    vp.set_viewport(Extent::new(0.25, 0.25, 0.5, 0.5));
    click(&mut vp, PointerButton::Primary, Point::new(50.0, 50.0));
    assert!(approx(vp.viewport(), Extent::new(0.225, 0.225, 0.6, 0.6)));
    assert_eq!(vp.action_context().action(), Action::ZoomOut);
}

#[test]
fn empty_zoom_area_drag_leaves_viewport() {
    let mut vp = viewport();
    vp.set_action(Action::ZoomArea);
    vp.handle_event(&PointerEvent::down(PointerButton::Primary, Point::new(40.0, 40.0)));
    let rect = vp.zoom_rectangle().map(|r| r.extent());
    assert!(approx(rect.unwrap(), Extent::new(0.4, 0.4, 0.0, 0.0)));
    vp.handle_event(&PointerEvent::up(PointerButton::Primary, Point::new(40.0, 40.0)));
    assert_eq!(vp.viewport(), Extent::FULL);
    assert!(vp.zoom_rectangle().is_none());
}

#[test]
fn leaving_with_empty_zoom_area_still_commits() {
    let mut vp = viewport();
    vp.set_action(Action::ZoomArea);
    vp.handle_event(&PointerEvent::down(PointerButton::Primary, Point::new(30.0, 30.0)));
    vp.handle_event(&PointerEvent::leave(Point::new(30.0, 30.0)));
    // Unlike release, leaving applies the rectangle and the clamp grows it.
    assert!(approx(vp.viewport(), Extent::new(0.3, 0.3, 0.01, 0.01)));
    assert!(vp.zoom_rectangle().is_none());
}

#[test]
fn zoom_area_drag_commits_square_viewport() {
    let mut vp = viewport();
    vp.set_action(Action::ZoomArea);
    vp.handle_event(&PointerEvent::down(PointerButton::Primary, Point::new(20.0, 20.0)));
    vp.handle_event(&PointerEvent::moved(Point::new(60.0, 40.0)));
    let rect = vp.zoom_rectangle().map(|r| r.extent());
    assert!(approx(rect.unwrap(), Extent::new(0.2, 0.2, 0.4, 0.2)));

    vp.handle_event(&PointerEvent::up(PointerButton::Primary, Point::new(60.0, 40.0)));
    assert!(approx(vp.viewport(), Extent::new(0.2, 0.2, 0.4, 0.4)));
    assert!(vp.zoom_rectangle().is_none());
    assert_eq!(vp.action_context().action(), Action::None);
}

#[test]
fn leaving_during_zoom_area_drag_commits() {
    let mut vp = viewport();
    vp.set_action(Action::ZoomArea);
    vp.handle_event(&PointerEvent::down(PointerButton::Primary, Point::new(20.0, 20.0)));
    vp.handle_event(&PointerEvent::moved(Point::new(40.0, 60.0)));
    vp.handle_event(&PointerEvent::leave(Point::new(40.0, 60.0)));
    assert!(approx(vp.viewport(), Extent::new(0.2, 0.2, 0.4, 0.4)));
    assert!(vp.zoom_rectangle().is_none());
    assert!(!vp.loupe().is_shown());
}

#[test]
fn secondary_drag_pans_and_clamps() {
    let mut vp = viewport();
    vp.set_viewport(Extent::new(0.25, 0.25, 0.5, 0.5));
    vp.handle_event(&PointerEvent::down(PointerButton::Secondary, Point::new(50.0, 50.0)));
    vp.handle_event(&PointerEvent::moved(Point::new(0.0, 50.0)));
    assert!(approx(vp.viewport(), Extent::new(0.375, 0.25, 0.5, 0.5)));

    // A huge drag runs into the right edge of the image.
    vp.handle_event(&PointerEvent::moved(Point::new(-1000.0, 50.0)));
    assert!(approx(vp.viewport(), Extent::new(0.5, 0.25, 0.5, 0.5)));
}

#[test]
fn pan_action_uses_primary_button_and_grab_cursor() {
    let mut vp = viewport();
    vp.set_action(Action::Pan);
    vp.set_viewport(Extent::new(0.5, 0.5, 0.5, 0.5));
    vp.handle_event(&PointerEvent::down(PointerButton::Primary, Point::new(10.0, 10.0)));
    vp.handle_event(&PointerEvent::moved(Point::new(30.0, 10.0)));
    assert!(approx(vp.viewport(), Extent::new(0.45, 0.5, 0.5, 0.5)));
    assert_eq!(vp.surface().cursor(), Cursor::Grab);

    vp.handle_event(&PointerEvent::up(PointerButton::Primary, Point::new(30.0, 10.0)));
    assert_eq!(vp.action_context().action(), Action::Pan);
}

#[test]
fn moving_without_button_only_tracks() {
    let mut vp = viewport();
    vp.set_viewport(Extent::new(0.25, 0.25, 0.5, 0.5));
    assert_eq!(vp.handle_event(&PointerEvent::moved(Point::new(1.0, 1.0))), None);
    assert!(approx(vp.viewport(), Extent::new(0.25, 0.25, 0.5, 0.5)));
    assert!(vp.loupe().is_shown());
}

#[test]
fn auto_scroll_runs_one_chain() {
    let mut vp = viewport();
    vp.set_viewport(Extent::new(0.03, 0.25, 0.5, 0.5));
    vp.handle_event(&PointerEvent::down(PointerButton::Primary, Point::new(2.0, 50.0)));

    // First move near the left edge starts the chain and nudges once.
    let next = vp.handle_event(&PointerEvent::moved(Point::new(2.0, 50.0)));
    assert_eq!(next, Some(Duration::from_millis(100)));
    assert!((vp.viewport().x - 0.02).abs() < 1e-9);
    assert!(vp.auto_scroll_alive());

    // Further moves while the chain is alive do not start another one.
    assert_eq!(vp.handle_event(&PointerEvent::moved(Point::new(1.0, 50.0))), None);
    assert!((vp.viewport().x - 0.02).abs() < 1e-9);

    // Ticks keep nudging until the origin is pinned at zero.
    assert!(vp.tick_auto_scroll().is_some());
    assert!((vp.viewport().x - 0.01).abs() < 1e-9);
    assert!(vp.tick_auto_scroll().is_some());
    assert!(vp.viewport().x.abs() < 1e-9);

    // Releasing the button ends the chain on the next tick.
    vp.handle_event(&PointerEvent::up(PointerButton::Primary, Point::new(1.0, 50.0)));
    assert_eq!(vp.tick_auto_scroll(), None);
    assert!(!vp.auto_scroll_alive());
}

#[test]
fn core_move_handler_arms_auto_scroll_without_redrawing() {
    let mut vp = viewport();
    vp.set_viewport(Extent::new(0.03, 0.25, 0.5, 0.5));
    let frames = vp.surface().frames();

    let core = vp.core_mut();
    core.on_pointer_down(&PointerEvent::down(PointerButton::Primary, Point::new(2.0, 50.0)));
    core.on_pointer_move(&PointerEvent::moved(Point::new(2.0, 50.0)));
    assert!(core.auto_scroll_alive());
    assert!((core.viewport().x - 0.02).abs() < 1e-9);
    assert_eq!(core.surface().frames(), frames);

    // The chain is already running, so dispatch has no new delay to report.
    assert_eq!(vp.handle_event(&PointerEvent::moved(Point::new(1.0, 50.0))), None);
    assert_eq!(vp.tick_auto_scroll(), Some(Duration::from_millis(100)));
}

#[test]
fn non_interactive_viewport_ignores_pointer() {
    let surface = RecordingSurface::new(Size::new(100.0, 100.0));
    let mut vp = ImageViewport::new(surface, ViewportConfig::default(), false);
    vp.handle_event(&PointerEvent::wheel(Point::new(50.0, 50.0), 1.0));
    assert_eq!(vp.viewport(), Extent::FULL);
    assert!(!vp.is_interactive());
}

#[test]
fn coordinates_account_for_page_offset_and_scaling() {
    let surface = RecordingSurface::new(Size::new(200.0, 200.0))
        .with_display_size(Size::new(100.0, 100.0))
        .with_page_offset(Point::new(10.0, 20.0));
    let vp = ImageViewport::new(surface, ViewportConfig::default(), true);
    let page = Point::new(60.0, 45.0);
    assert_eq!(vp.absolute_coordinates(page), Point::new(50.0, 25.0));
    let rel = vp.relative_coordinates(page, imageport_view2d::Space::Canvas);
    assert!((rel.x - 0.5).abs() < 1e-12 && (rel.y - 0.25).abs() < 1e-12);
}
