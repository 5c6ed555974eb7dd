// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::RefCell;

use imageport_event_state::pointer::PointerEvent;
use imageport_view2d::CoordinateTransform;

use crate::Surface;

/// Something drawn on the canvas: the image itself, an annotation, a helper
/// rectangle.
///
/// Elements draw themselves in model coordinates mapped through the
/// [`CoordinateTransform`] they are given, so the same element renders
/// correctly in the main view, the minimap and the loupe.
///
/// Pointer hooks are optional. `internal` is `true` when the viewport forwards
/// an event to an element it created itself.
pub trait RenderElement {
    /// Stacking order; lower values are drawn first.
    fn z_index(&self) -> f64 {
        0.0
    }

    /// Draws the element.
    fn render(&self, surface: &mut dyn Surface, transform: &CoordinateTransform);

    /// A button was pressed over the surface.
    fn on_pointer_down(
        &mut self,
        event: &PointerEvent,
        transform: &CoordinateTransform,
        internal: bool,
    ) {
        let _ = (event, transform, internal);
    }

    /// The pointer moved over the surface.
    fn on_pointer_move(
        &mut self,
        event: &PointerEvent,
        transform: &CoordinateTransform,
        internal: bool,
    ) {
        let _ = (event, transform, internal);
    }

    /// A button was released over the surface.
    fn on_pointer_up(&mut self, event: &PointerEvent, transform: &CoordinateTransform, internal: bool) {
        let _ = (event, transform, internal);
    }

    /// The pointer left the surface.
    fn on_pointer_leave(
        &mut self,
        event: &PointerEvent,
        transform: &CoordinateTransform,
        internal: bool,
    ) {
        let _ = (event, transform, internal);
    }
}

/// Shared handle to a render element.
///
/// The render stack compares handles by identity, so keep the handle you
/// inserted to update or remove the element later.
pub type ElementRef = Rc<RefCell<dyn RenderElement>>;

/// Wraps `element` in a fresh [`ElementRef`].
pub fn element_ref<E: RenderElement + 'static>(element: E) -> ElementRef {
    Rc::new(RefCell::new(element))
}
