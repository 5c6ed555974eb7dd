// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use imageport_event_state::action::Cursor;
use imageport_event_state::pointer::EventKind;
use kurbo::{Point, Rect, Size, Stroke};
use peniko::Color;

/// A 2D drawing target, usually a canvas element or a window.
///
/// Coordinates passed to drawing methods are drawing-buffer pixels. The
/// surface also reports the geometry needed to map pointer events, which
/// arrive in displayed pixels relative to the page.
///
/// Only the drawing primitives are required; the rest have no-op defaults for
/// surfaces that are never scaled, never clip, or have no cursor.
pub trait Surface {
    /// Size of the drawing buffer in pixels.
    fn buffer_size(&self) -> Size;

    /// Size the surface is displayed at, in pixels.
    ///
    /// Differs from [`Surface::buffer_size`] when the surface is scaled for
    /// display.
    fn display_size(&self) -> Size {
        self.buffer_size()
    }

    /// Position of the surface's top-left corner in page coordinates.
    fn page_offset(&self) -> Point {
        Point::ZERO
    }

    /// Called once at the start of every full redraw.
    fn begin_frame(&mut self) {}

    /// Fills `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Strokes the outline of `rect`.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke, color: Color);

    /// Returns the advance width of `text` at `font_size`.
    fn measure_text(&mut self, text: &str, font_size: f64) -> f64;

    /// Draws `text` with its baseline starting at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, font_size: f64, color: Color);

    /// Restricts drawing to `rect` until the matching [`Surface::pop_clip`].
    fn push_clip(&mut self, rect: Rect) {
        let _ = rect;
    }

    /// Removes the most recent clip.
    fn pop_clip(&mut self) {}

    /// Sets the cursor shown over the surface.
    fn set_cursor(&mut self, cursor: Cursor) {
        let _ = cursor;
    }

    /// Starts or stops delivering events of `kind` for this surface.
    fn set_listening(&mut self, kind: EventKind, listening: bool) {
        let _ = (kind, listening);
    }
}
