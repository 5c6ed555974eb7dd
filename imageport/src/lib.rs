// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Imageport: a pan/zoom viewport for interactive image-annotation canvases.
//!
//! [`ImageViewport`] ties the lower-level crates together:
//!
//! - it owns the [`ViewportState`](imageport_view2d::ViewportState) and builds a
//!   [`CoordinateTransform`](imageport_view2d::CoordinateTransform) per frame,
//! - it draws the [`RenderStack`](imageport_render::RenderStack), the zoom
//!   rectangle, the minimap and the loupe on a [`Surface`](imageport_render::Surface),
//! - it dispatches pointer events through a per-kind callback registry and
//!   ships built-in handlers for panning, click and wheel zoom, zoom-to-area
//!   and edge auto-scroll, driven by the current
//!   [`Action`](imageport_event_state::action::Action).
//!
//! The crate never blocks or spawns. Auto-scroll is a repeating task the host
//! drives: when [`ImageViewport::handle_event`] returns a delay, call
//! [`ViewportCore::tick_auto_scroll`] after it, and keep doing so while that
//! returns a delay.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use imageport::{ImageViewport, ViewportConfig};
//! use imageport_event_state::pointer::PointerEvent;
//! use imageport_render::testing::RecordingSurface;
//! use imageport_view2d::Extent;
//!
//! let surface = RecordingSurface::new(Size::new(400.0, 400.0));
//! let mut viewport = ImageViewport::new(surface, ViewportConfig::default(), true);
//!
//! // Scroll the wheel forward over the center: zoom in by 5%.
//! viewport.handle_event(&PointerEvent::wheel(Point::new(200.0, 200.0), 1.0));
//! let vp = viewport.viewport();
//! assert!((vp.w - 0.95).abs() < 1e-12);
//! assert!((vp.x - 0.0125).abs() < 1e-12);
//!
//! viewport.reset_viewport();
//! assert_eq!(viewport.viewport(), Extent::FULL);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod viewport;

pub use config::ViewportConfig;
pub use controller::ViewportCore;
pub use viewport::{Callback, INTERACTION_ID, ImageViewport};
