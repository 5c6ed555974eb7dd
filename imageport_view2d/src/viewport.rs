// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::{CoordinateTransform, Extent};

/// Smallest viewport side length accepted by [`ViewportState::set`].
pub const MIN_EXTENT: f64 = 0.01;

/// Pan/zoom state of an image canvas.
///
/// `ViewportState` owns two normalized rectangles:
/// - the **viewport**, the square window into image space that is currently
///   shown, and
/// - the **valid area**, the part of the surface that the image occupies.
///
/// Every write to the viewport goes through [`ViewportState::set`], which keeps
/// it square, inside `[0, 1]²` and no smaller than the minimum extent. The
/// valid area is trusted as given.
#[derive(Clone, Debug)]
pub struct ViewportState {
    viewport: Extent,
    valid_area: Extent,
    min_extent: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportState {
    /// Creates a fully zoomed-out state whose valid area covers the surface.
    #[must_use]
    pub fn new() -> Self {
        Self {
            viewport: Extent::FULL,
            valid_area: Extent::FULL,
            min_extent: MIN_EXTENT,
        }
    }

    /// Sets the smallest side length the viewport may shrink to.
    ///
    /// The value is limited to `(0, 1]`; the current viewport is not
    /// re-clamped until its next write.
    #[must_use]
    pub fn with_min_extent(mut self, min_extent: f64) -> Self {
        debug_assert!(
            min_extent > 0.0 && min_extent <= 1.0,
            "minimum extent must lie in (0, 1], got {min_extent}"
        );
        self.min_extent = min_extent.clamp(f64::MIN_POSITIVE, 1.0);
        self
    }

    /// Current viewport.
    #[must_use]
    pub fn get(&self) -> Extent {
        self.viewport
    }

    /// Current valid area.
    #[must_use]
    pub fn valid_area(&self) -> Extent {
        self.valid_area
    }

    /// Smallest side length the viewport may shrink to.
    #[must_use]
    pub fn min_extent(&self) -> f64 {
        self.min_extent
    }

    /// Returns `true` unless the viewport shows the whole image.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.viewport != Extent::FULL
    }

    /// Clamps `candidate` into a valid viewport, stores it, and returns it.
    ///
    /// The side length is the larger of the candidate's width and height,
    /// limited to `[min_extent, 1]`. The origin is then clamped to
    /// `[0, 1 - side]` on each axis, and the stored width and height are both
    /// `max(min_extent, min(1 - x, 1 - y, side))` so the result stays square
    /// and inside the unit square.
    pub fn set(&mut self, candidate: Extent) -> Extent {
        let size = candidate.w.max(candidate.h).min(1.0).max(self.min_extent);
        let x = (1.0 - size).min(candidate.x.max(0.0));
        let y = (1.0 - size).min(candidate.y.max(0.0));
        let side = (1.0 - x).min(1.0 - y).min(size).max(self.min_extent);
        self.viewport = Extent::new(x, y, side, side);
        log::trace!("viewport set to {:?} (requested {candidate:?})", self.viewport);
        self.viewport
    }

    /// Shows the whole image again.
    pub fn reset(&mut self) {
        self.viewport = Extent::FULL;
        log::debug!("viewport reset");
    }

    /// Replaces the valid area.
    pub fn set_valid_area(&mut self, area: Extent) {
        debug_assert!(area.has_area(), "valid area must have positive extent");
        self.valid_area = area;
        log::debug!("valid area set to {area:?}");
    }

    /// Pans against a pointer motion of `delta` valid-area-relative units.
    ///
    /// The motion is scaled by the viewport extent so that dragging across
    /// the whole view moves it by one viewport width.
    pub fn pan_by(&mut self, delta: Vec2) -> Extent {
        let mut vp = self.viewport;
        vp.x -= delta.x * self.viewport.w;
        vp.y -= delta.y * self.viewport.h;
        self.set(vp)
    }

    /// Moves the viewport origin by `offset` normalized units.
    pub fn shift_by(&mut self, offset: Vec2) -> Extent {
        let mut vp = self.viewport;
        vp.x += offset.x;
        vp.y += offset.y;
        self.set(vp)
    }

    /// Grows (`amount > 0`) or shrinks (`amount < 0`) the viewport around
    /// `anchor`, a valid-area-relative position.
    ///
    /// The new origin is the mean of the current origin and the origin that
    /// would center the resized viewport on `anchor`, so repeated zooms ease
    /// towards the pointer rather than pinning it in place.
    pub fn zoom_about(&mut self, anchor: Point, amount: f64) -> Extent {
        let current = self.viewport;
        let w = (1.0 + amount) * current.w;
        let h = (1.0 + amount) * current.h;
        let x = (anchor.x - w / 2.0 + current.x) / 2.0;
        let y = (anchor.y - h / 2.0 + current.y) / 2.0;
        self.set(Extent::new(x, y, w, h))
    }

    /// Builds a transform for the current state on a surface with the given
    /// drawing-buffer and displayed sizes.
    #[must_use]
    pub fn transform(&self, buffer_size: Size, display_size: Size) -> CoordinateTransform {
        CoordinateTransform::new(self.viewport, self.valid_area, buffer_size, display_size)
    }
}
