// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overview inset: the whole image in a corner, with the current view marked.

use imageport_view2d::{CoordinateTransform, Extent, Space};
use kurbo::Point;

use crate::{OverlayStyle, RenderStack, Surface};

/// Small overview of the full image.
///
/// The minimap occupies a square frame given in canvas-normalized units. It
/// renders the same elements as the main view, through a viewport covering
/// the whole image, and outlines the region the main view currently shows.
#[derive(Clone, Debug, PartialEq)]
pub struct Minimap {
    frame: Extent,
    visible: bool,
}

impl Default for Minimap {
    fn default() -> Self {
        Self::new(Point::new(0.845, 0.845), 0.15)
    }
}

impl Minimap {
    /// Creates a visible minimap with its top-left corner at `origin` and
    /// side `size`, both canvas-normalized.
    #[must_use]
    pub fn new(origin: Point, size: f64) -> Self {
        Self {
            frame: Extent::new(origin.x, origin.y, size, size),
            visible: true,
        }
    }

    /// Frame of the minimap in canvas-normalized units.
    #[must_use]
    pub fn frame(&self) -> Extent {
        self.frame
    }

    /// Returns `true` if the minimap is drawn when the view is zoomed.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the minimap. Returns `true` if the setting changed.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }

    /// Transform that draws the whole image inside the minimap frame.
    ///
    /// The main view's valid area is mapped into the frame so the image keeps
    /// the same letterboxing it has on the full surface.
    #[must_use]
    pub fn transform(&self, main: &CoordinateTransform) -> CoordinateTransform {
        let va = main.valid_area();
        let m = self.frame;
        main.with_viewport(Extent::FULL).with_valid_area(Extent::new(
            m.x + va.x * m.w,
            m.y + va.y * m.h,
            va.w * m.w,
            va.h * m.h,
        ))
    }

    /// Draws the minimap and its viewport marker.
    pub fn render(
        &self,
        surface: &mut dyn Surface,
        main: &CoordinateTransform,
        content: &RenderStack,
        style: &OverlayStyle,
    ) {
        let frame = main.extent_to_pixels(self.frame, Space::Canvas).to_rect();
        surface.fill_rect(frame, style.background);
        surface.push_clip(frame);
        let local = self.transform(main);
        content.render(surface, &local);
        let marker = local.extent_to_pixels(main.viewport(), Space::ValidArea).to_rect();
        surface.stroke_rect(marker, &style.marker_stroke, style.marker_color);
        surface.pop_clip();
        surface.stroke_rect(frame, &style.frame_stroke, style.frame_color);
    }
}
