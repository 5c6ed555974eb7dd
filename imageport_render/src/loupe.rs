// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Magnifier that follows the pointer.
//!
//! ```
//! use kurbo::Point;
//! use imageport_render::loupe::Loupe;
//! use imageport_view2d::Extent;
//!
//! let mut loupe = Loupe::new(0.4, 0.05);
//! assert!(loupe.frame().is_none());
//!
//! loupe.track(Point::new(0.5, 0.5));
//! let frame = loupe.frame().unwrap();
//! assert!((frame.x - 0.3).abs() < 1e-12 && (frame.w - 0.4).abs() < 1e-12);
//! ```

use imageport_view2d::{CoordinateTransform, Extent, Space};
use kurbo::Point;

use crate::{OverlayStyle, RenderStack, Surface};

/// A square inset magnifying the surface around the pointer.
///
/// Both the frame and the magnified source window are canvas-normalized and
/// centered on the tracked position. The loupe is hidden until
/// [`Loupe::track`] is called, and again after [`Loupe::hide`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Loupe {
    size: f64,
    margin: f64,
    center: Option<Point>,
}

impl Default for Loupe {
    fn default() -> Self {
        Self::new(0.4, 0.05)
    }
}

impl Loupe {
    /// Creates a hidden loupe with side `size` that magnifies a window
    /// extending `margin` around the pointer on each side.
    #[must_use]
    pub fn new(size: f64, margin: f64) -> Self {
        debug_assert!(size > 0.0 && margin > 0.0, "loupe size and margin must be positive");
        Self {
            size,
            margin,
            center: None,
        }
    }

    /// Centers the loupe on `pos`, canvas-normalized.
    pub fn track(&mut self, pos: Point) {
        self.center = Some(pos);
    }

    /// Hides the loupe. Returns `true` if it was shown.
    pub fn hide(&mut self) -> bool {
        self.center.take().is_some()
    }

    /// Returns `true` if the loupe has a position.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.center.is_some()
    }

    /// Where the loupe is drawn.
    #[must_use]
    pub fn frame(&self) -> Option<Extent> {
        let c = self.center?;
        let half = self.size / 2.0;
        Some(Extent::new(c.x - half, c.y - half, self.size, self.size))
    }

    /// The region of the surface shown magnified.
    #[must_use]
    pub fn source(&self) -> Option<Extent> {
        let c = self.center?;
        Some(Extent::from_corners(
            c.x - self.margin,
            c.y - self.margin,
            c.x + self.margin,
            c.y + self.margin,
        ))
    }

    /// Transform that draws the source window scaled up into the frame.
    ///
    /// Returns `None` while the loupe is hidden.
    #[must_use]
    pub fn transform(&self, main: &CoordinateTransform) -> Option<CoordinateTransform> {
        let frame = self.frame()?;
        let source = self.source()?;
        let va = main.valid_area();
        let sx = frame.w / source.w;
        let sy = frame.h / source.h;
        Some(main.with_valid_area(Extent::new(
            frame.x + (va.x - source.x) * sx,
            frame.y + (va.y - source.y) * sy,
            va.w * sx,
            va.h * sy,
        )))
    }

    /// Draws the loupe if it is shown.
    pub fn render(
        &self,
        surface: &mut dyn Surface,
        main: &CoordinateTransform,
        content: &RenderStack,
        style: &OverlayStyle,
    ) {
        let (Some(frame), Some(local)) = (self.frame(), self.transform(main)) else {
            return;
        };
        let frame = main.extent_to_pixels(frame, Space::Canvas).to_rect();
        surface.fill_rect(frame, style.background);
        surface.push_clip(frame);
        content.render(surface, &local);
        surface.pop_clip();
        surface.stroke_rect(frame, &style.frame_stroke, style.frame_color);
    }
}
