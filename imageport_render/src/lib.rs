// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Imageport Render: what gets drawn on an image canvas, and in which order.
//!
//! - [`Surface`]: the drawing target, in buffer pixels, plus the geometry
//!   needed to map pointer events back.
//! - [`RenderElement`]: anything drawn in model coordinates through a
//!   [`CoordinateTransform`], with optional pointer hooks.
//! - [`RenderStack`]: elements kept in ascending z-order, with identity-based
//!   membership.
//! - [`Minimap`] and [`Loupe`]: insets that re-render the stack through a
//!   derived transform.
//! - [`ZoomRectangle`]: the rubber band drawn while dragging out a zoom area.
//!
//! The [`testing`] module has a [`Surface`] that records calls for assertions.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use peniko::Color;
//! use imageport_render::testing::{DrawCall, RecordingSurface};
//! use imageport_render::{RenderElement, RenderStack, Surface, element_ref};
//! use imageport_view2d::{CoordinateTransform, Extent, Space};
//!
//! struct Frame;
//!
//! impl RenderElement for Frame {
//!     fn render(&self, surface: &mut dyn Surface, t: &CoordinateTransform) {
//!         let rect = t.extent_to_pixels(Extent::FULL, Space::ValidArea).to_rect();
//!         surface.fill_rect(rect, Color::WHITE);
//!     }
//! }
//!
//! let mut stack = RenderStack::new();
//! let frame = element_ref(Frame);
//! assert!(stack.insert(frame.clone()));
//! assert!(!stack.insert(frame));
//!
//! let size = Size::new(100.0, 50.0);
//! let mut surface = RecordingSurface::new(size);
//! let t = CoordinateTransform::new(Extent::FULL, Extent::FULL, size, size);
//! stack.render(&mut surface, &t);
//! assert_eq!(
//!     surface.calls(),
//!     [DrawCall::FillRect { rect: Rect::new(0.0, 0.0, 100.0, 50.0), color: Color::WHITE }]
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod element;
pub mod loupe;
pub mod minimap;
mod stack;
mod style;
mod surface;
pub mod testing;
mod zoom_rect;

pub use element::{ElementRef, RenderElement, element_ref};
pub use loupe::Loupe;
pub use minimap::Minimap;
pub use stack::RenderStack;
pub use style::{OverlayStyle, ViewportStyle};
pub use surface::Surface;
pub use zoom_rect::ZoomRectangle;

pub use imageport_view2d::CoordinateTransform;
