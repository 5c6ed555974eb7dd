// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::{Coords, Extent, Space};

/// Coordinate mapping bound to one frame's viewport and surface geometry.
///
/// The forward direction (model → pixels) uses the surface's drawing-buffer
/// size; the inverse direction (pixels → model) uses its displayed size. The
/// two differ whenever the surface is scaled for display, and pointer events
/// are reported in displayed pixels while drawing happens in buffer pixels.
///
/// `CoordinateTransform` is a plain `Copy` snapshot: build one from
/// [`crate::ViewportState::transform`], hand it to whatever needs to draw, and
/// rebuild it after the viewport or the surface changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateTransform {
    viewport: Extent,
    valid_area: Extent,
    buffer_size: Size,
    display_size: Size,
    surface_origin: Point,
}

impl CoordinateTransform {
    /// Creates a transform for the given viewport, valid area and surface sizes.
    ///
    /// The surface is assumed to sit at the page origin; see
    /// [`CoordinateTransform::with_surface_origin`].
    #[must_use]
    pub fn new(viewport: Extent, valid_area: Extent, buffer_size: Size, display_size: Size) -> Self {
        Self {
            viewport,
            valid_area,
            buffer_size,
            display_size,
            surface_origin: Point::ZERO,
        }
    }

    /// Returns a copy positioned at `origin` in page coordinates.
    #[must_use]
    pub fn with_surface_origin(mut self, origin: Point) -> Self {
        self.surface_origin = origin;
        self
    }

    /// Returns a copy that looks through `viewport` instead.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Extent) -> Self {
        self.viewport = viewport;
        self
    }

    /// Returns a copy that places the image inside `valid_area` instead.
    #[must_use]
    pub fn with_valid_area(mut self, valid_area: Extent) -> Self {
        self.valid_area = valid_area;
        self
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Extent {
        self.viewport
    }

    /// Current valid area.
    #[must_use]
    pub fn valid_area(&self) -> Extent {
        self.valid_area
    }

    /// Drawing-buffer size in pixels.
    #[must_use]
    pub fn buffer_size(&self) -> Size {
        self.buffer_size
    }

    /// Displayed size in pixels.
    #[must_use]
    pub fn display_size(&self) -> Size {
        self.display_size
    }

    /// Maps `coords` into pixels (`inverse == false`) or back out of pixels
    /// (`inverse == true`) relative to `space`.
    #[must_use]
    pub fn transform(&self, coords: Coords, space: Space, inverse: bool) -> Coords {
        match coords {
            Coords::Point(p) => Coords::Point(self.map_point(p, space, inverse)),
            Coords::Extent(e) => Coords::Extent(self.map_extent(e, space, inverse)),
        }
    }

    /// Maps a model point to buffer pixels.
    #[must_use]
    pub fn point_to_pixels(&self, p: Point, space: Space) -> Point {
        self.map_point(p, space, false)
    }

    /// Maps a model extent to buffer pixels.
    #[must_use]
    pub fn extent_to_pixels(&self, e: Extent, space: Space) -> Extent {
        self.map_extent(e, space, false)
    }

    /// Maps a displayed-pixel point back to model coordinates.
    #[must_use]
    pub fn point_from_pixels(&self, p: Point, space: Space) -> Point {
        self.map_point(p, space, true)
    }

    /// Maps a displayed-pixel extent back to model coordinates.
    #[must_use]
    pub fn extent_from_pixels(&self, e: Extent, space: Space) -> Extent {
        self.map_extent(e, space, true)
    }

    /// Converts a page position into a surface-relative pixel position.
    #[must_use]
    pub fn surface_position(&self, page_pos: Point) -> Point {
        let offset: Vec2 = self.surface_origin.to_vec2();
        page_pos - offset
    }

    /// Converts a page position into model coordinates relative to `space`.
    #[must_use]
    pub fn event_position(&self, page_pos: Point, space: Space) -> Point {
        self.point_from_pixels(self.surface_position(page_pos), space)
    }

    fn map_point(&self, p: Point, space: Space, inverse: bool) -> Point {
        if inverse {
            Point::new(self.inverse_x(p.x, space), self.inverse_y(p.y, space))
        } else {
            Point::new(self.forward_x(p.x, space), self.forward_y(p.y, space))
        }
    }

    fn map_extent(&self, e: Extent, space: Space, inverse: bool) -> Extent {
        if inverse {
            Extent::new(
                self.inverse_x(e.x, space),
                self.inverse_y(e.y, space),
                self.inverse_w(e.w, space),
                self.inverse_h(e.h, space),
            )
        } else {
            Extent::new(
                self.forward_x(e.x, space),
                self.forward_y(e.y, space),
                self.forward_w(e.w, space),
                self.forward_h(e.h, space),
            )
        }
    }

    fn forward_x(&self, x: f64, space: Space) -> f64 {
        let px = self.buffer_size.width;
        match space {
            Space::Canvas => x * px,
            Space::ValidArea => {
                let rel = (x - self.viewport.x) / self.viewport.w;
                rel * (self.valid_area.w * px) + self.valid_area.x * px
            }
        }
    }

    fn forward_y(&self, y: f64, space: Space) -> f64 {
        let px = self.buffer_size.height;
        match space {
            Space::Canvas => y * px,
            Space::ValidArea => {
                let rel = (y - self.viewport.y) / self.viewport.h;
                rel * (self.valid_area.h * px) + self.valid_area.y * px
            }
        }
    }

    fn forward_w(&self, w: f64, space: Space) -> f64 {
        let px = self.buffer_size.width;
        match space {
            Space::Canvas => w * px,
            Space::ValidArea => (w / self.viewport.w) * (self.valid_area.w * px),
        }
    }

    fn forward_h(&self, h: f64, space: Space) -> f64 {
        let px = self.buffer_size.height;
        match space {
            Space::Canvas => h * px,
            Space::ValidArea => (h / self.viewport.h) * (self.valid_area.h * px),
        }
    }

    fn inverse_x(&self, x: f64, space: Space) -> f64 {
        let px = self.display_size.width;
        match space {
            Space::Canvas => x / px,
            Space::ValidArea => {
                let rel = (x - self.valid_area.x * px) / (self.valid_area.w * px);
                rel * self.viewport.w + self.viewport.x
            }
        }
    }

    fn inverse_y(&self, y: f64, space: Space) -> f64 {
        let px = self.display_size.height;
        match space {
            Space::Canvas => y / px,
            Space::ValidArea => {
                let rel = (y - self.valid_area.y * px) / (self.valid_area.h * px);
                rel * self.viewport.h + self.viewport.y
            }
        }
    }

    fn inverse_w(&self, w: f64, space: Space) -> f64 {
        let px = self.display_size.width;
        match space {
            Space::Canvas => w / px,
            Space::ValidArea => (w / (self.valid_area.w * px)) * self.viewport.w,
        }
    }

    fn inverse_h(&self, h: f64, space: Space) -> f64 {
        let px = self.display_size.height;
        match space {
            Space::Canvas => h / px,
            Space::ValidArea => (h / (self.valid_area.h * px)) * self.viewport.h,
        }
    }
}
