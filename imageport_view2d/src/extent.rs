// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Axis-aligned rectangle stored as origin plus extent.
///
/// Viewport, valid area and drag rectangles keep their width and height as
/// stored values rather than as a second corner (as [`kurbo::Rect`] does), so
/// that clamping and transforms operate on exactly the numbers they were given.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Extent {
    /// The whole normalized plane, `{0, 0, 1, 1}`.
    pub const FULL: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Creates an extent from origin and size components.
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Creates an extent spanning two corners.
    ///
    /// The corners are not reordered: a second corner above or to the left of
    /// the first yields a negative width or height.
    #[must_use]
    pub fn from_corners(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Creates an extent from a point and a size.
    #[must_use]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Converts a [`kurbo::Rect`] into an extent.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self::from_corners(rect.x0, rect.y0, rect.x1, rect.y1)
    }

    /// Converts this extent into a [`kurbo::Rect`].
    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.w, self.y + self.h)
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    #[must_use]
    pub fn size(self) -> Size {
        Size::new(self.w, self.h)
    }

    /// Right edge.
    #[must_use]
    pub fn max_x(self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge.
    #[must_use]
    pub fn max_y(self) -> f64 {
        self.y + self.h
    }

    /// Returns `true` if both width and height are strictly positive.
    #[must_use]
    pub fn has_area(self) -> bool {
        self.w > 0.0 && self.h > 0.0
    }
}

impl From<Rect> for Extent {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

impl From<Extent> for Rect {
    fn from(extent: Extent) -> Self {
        extent.to_rect()
    }
}

#[cfg(test)]
mod tests {
    use super::Extent;
    use kurbo::Rect;

    #[test]
    fn corners_keep_direction() {
        let e = Extent::from_corners(0.5, 0.5, 0.25, 0.75);
        assert_eq!(e.w, -0.25);
        assert_eq!(e.h, 0.25);
        assert!(!e.has_area());
    }

    #[test]
    fn rect_conversion_preserves_edges() {
        let e = Extent::new(0.25, 0.5, 0.5, 0.25);
        let r: Rect = e.into();
        assert_eq!(r, Rect::new(0.25, 0.5, 0.75, 0.75));
        assert_eq!(Extent::from(r), e);
    }

    #[test]
    fn zero_extent_has_no_area() {
        assert!(!Extent::new(0.3, 0.3, 0.0, 0.0).has_area());
        assert!(Extent::FULL.has_area());
    }
}
