// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use imageport_event_state::pointer::PointerEvent;
use imageport_view2d::{CoordinateTransform, Extent, Space};
use kurbo::{Point, Stroke};
use peniko::Color;

use crate::{RenderElement, Surface};

/// Rubber-band rectangle drawn while the user drags out a zoom area.
///
/// The rectangle spans from the press position to the latest pointer
/// position, in model coordinates, so it stays attached to the image while the
/// view auto-scrolls underneath it.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomRectangle {
    anchor: Point,
    corner: Point,
    z_index: f64,
    color: Color,
    stroke: Stroke,
}

impl ZoomRectangle {
    /// Creates an empty rectangle anchored at `anchor`.
    #[must_use]
    pub fn new(anchor: Point, z_index: f64, color: Color, stroke: Stroke) -> Self {
        Self {
            anchor,
            corner: anchor,
            z_index,
            color,
            stroke,
        }
    }

    /// Where the drag started.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Moves the free corner to `pos`.
    pub fn grow_to(&mut self, pos: Point) {
        self.corner = pos;
    }

    /// Area covered so far, with non-negative width and height.
    #[must_use]
    pub fn extent(&self) -> Extent {
        Extent::from_corners(
            self.anchor.x.min(self.corner.x),
            self.anchor.y.min(self.corner.y),
            self.anchor.x.max(self.corner.x),
            self.anchor.y.max(self.corner.y),
        )
    }
}

impl RenderElement for ZoomRectangle {
    fn z_index(&self) -> f64 {
        self.z_index
    }

    fn render(&self, surface: &mut dyn Surface, transform: &CoordinateTransform) {
        let rect = transform.extent_to_pixels(self.extent(), Space::ValidArea).to_rect();
        surface.stroke_rect(rect, &self.stroke, self.color);
    }

    fn on_pointer_down(&mut self, event: &PointerEvent, transform: &CoordinateTransform, _: bool) {
        let pos = transform.event_position(event.page_pos, Space::ValidArea);
        self.anchor = pos;
        self.corner = pos;
    }

    fn on_pointer_move(&mut self, event: &PointerEvent, transform: &CoordinateTransform, _: bool) {
        self.grow_to(transform.event_position(event.page_pos, Space::ValidArea));
    }
}
