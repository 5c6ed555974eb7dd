// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Imageport View 2D: normalized viewport state and coordinate transforms for
//! image canvases.
//!
//! An image canvas deals with three coordinate spaces:
//! - **normalized image space**: `[0, 1]²` over the whole image,
//! - the **valid area**: the normalized sub-rectangle of the surface that the
//!   image occupies (the rest may be letterboxing),
//! - **pixels** of the rendering surface.
//!
//! [`ViewportState`] keeps the current pan/zoom window (the *viewport*) and the
//! valid area, and clamps every viewport write so the window stays square and
//! inside the image. [`CoordinateTransform`] is a snapshot of that state plus
//! the surface geometry, converting in both directions.
//!
//! This crate does not draw anything and does not interpret input events;
//! `imageport_render` and `imageport` build on it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use imageport_view2d::{Extent, Space, ViewportState};
//!
//! let mut state = ViewportState::new();
//! // The image fills the middle half of an 800x800 surface.
//! state.set_valid_area(Extent::new(0.25, 0.0, 0.5, 1.0));
//!
//! // Zoom into the top-left quarter. Candidates are clamped to a square.
//! let vp = state.set(Extent::new(0.0, 0.0, 0.5, 0.4));
//! assert_eq!(vp, Extent::new(0.0, 0.0, 0.5, 0.5));
//!
//! let size = Size::new(800.0, 800.0);
//! let t = state.transform(size, size);
//! // The image center is now at the bottom-right corner of the valid area.
//! let px = t.point_to_pixels(Point::new(0.5, 0.5), Space::ValidArea);
//! assert_eq!(px, Point::new(600.0, 800.0));
//!
//! // And back again.
//! let model = t.point_from_pixels(px, Space::ValidArea);
//! assert_eq!(model, Point::new(0.5, 0.5));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod extent;
mod space;
mod transform;
mod viewport;

pub use extent::Extent;
pub use space::{Coords, Space};
pub use transform::CoordinateTransform;
pub use viewport::{MIN_EXTENT, ViewportState};
