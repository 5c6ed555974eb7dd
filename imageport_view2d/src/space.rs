// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::Extent;

/// Reference frame for [`crate::CoordinateTransform::transform`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Space {
    /// The whole surface: normalized `[0, 1]` coordinates against pixels.
    Canvas,
    /// Image coordinates seen through the current viewport, placed inside the
    /// valid area of the surface.
    #[default]
    ValidArea,
}

/// Coordinates accepted by a transform: a bare point, or a point with extent.
///
/// The extent (`w`/`h`) of [`Coords::Extent`] is scaled like the origin but
/// never receives an additive offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Coords {
    /// A single position.
    Point(Point),
    /// A position plus width and height.
    Extent(Extent),
}

impl Coords {
    /// Returns the position part.
    #[must_use]
    pub fn origin(self) -> Point {
        match self {
            Self::Point(p) => p,
            Self::Extent(e) => e.origin(),
        }
    }

    /// Returns the extent, if this carries one.
    #[must_use]
    pub fn extent(self) -> Option<Extent> {
        match self {
            Self::Point(_) => None,
            Self::Extent(e) => Some(e),
        }
    }
}

impl From<Point> for Coords {
    fn from(p: Point) -> Self {
        Self::Point(p)
    }
}

impl From<Extent> for Coords {
    fn from(e: Extent) -> Self {
        Self::Extent(e)
    }
}
