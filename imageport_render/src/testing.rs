// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Surface`] that records calls instead of drawing.
//!
//! It does not rasterize anything. It is meant for tests and debugging that
//! want to assert on what was drawn, in which order, and how often the view
//! redrew.
//!
//! ```
//! use kurbo::{Rect, Size};
//! use peniko::Color;
//! use imageport_render::Surface;
//! use imageport_render::testing::{DrawCall, RecordingSurface};
//!
//! let mut surface = RecordingSurface::new(Size::new(200.0, 100.0));
//! surface.begin_frame();
//! surface.fill_rect(Rect::new(0.0, 0.0, 200.0, 100.0), Color::BLACK);
//! assert_eq!(surface.frames(), 1);
//! assert!(matches!(surface.calls()[0], DrawCall::FillRect { .. }));
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use imageport_event_state::action::Cursor;
use imageport_event_state::pointer::{EventKind, EventKinds};
use kurbo::{Point, Rect, Size, Stroke};
use peniko::Color;

use crate::Surface;

/// A recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    /// [`Surface::fill_rect`].
    FillRect {
        /// Filled rectangle, in buffer pixels.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// [`Surface::stroke_rect`].
    StrokeRect {
        /// Outlined rectangle, in buffer pixels.
        rect: Rect,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// [`Surface::fill_text`].
    FillText {
        /// The text.
        text: String,
        /// Baseline origin, in buffer pixels.
        origin: Point,
        /// Font size in pixels.
        font_size: f64,
        /// Text color.
        color: Color,
    },
    /// [`Surface::push_clip`].
    PushClip(Rect),
    /// [`Surface::pop_clip`].
    PopClip,
}

/// Surface that logs every call of the current frame.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    buffer_size: Size,
    display_size: Size,
    page_offset: Point,
    calls: Vec<DrawCall>,
    frames: usize,
    cursor: Cursor,
    listening: EventKinds,
}

impl RecordingSurface {
    /// Creates an unscaled surface at the page origin.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            buffer_size: size,
            display_size: size,
            page_offset: Point::ZERO,
            calls: Vec::new(),
            frames: 0,
            cursor: Cursor::Default,
            listening: EventKinds::empty(),
        }
    }

    /// Returns a copy displayed at `size` instead of its buffer size.
    #[must_use]
    pub fn with_display_size(mut self, size: Size) -> Self {
        self.display_size = size;
        self
    }

    /// Returns a copy positioned at `offset` in the page.
    #[must_use]
    pub fn with_page_offset(mut self, offset: Point) -> Self {
        self.page_offset = offset;
        self
    }

    /// Resizes the drawing buffer and the displayed size together.
    pub fn resize(&mut self, size: Size) {
        self.buffer_size = size;
        self.display_size = size;
    }

    /// Calls recorded since the last [`Surface::begin_frame`].
    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Number of frames begun so far.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// The cursor last set.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Event kinds currently delivered.
    #[must_use]
    pub fn listening(&self) -> EventKinds {
        self.listening
    }

    /// Texts drawn in the current frame, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn buffer_size(&self) -> Size {
        self.buffer_size
    }

    fn display_size(&self) -> Size {
        self.display_size
    }

    fn page_offset(&self) -> Point {
        self.page_offset
    }

    fn begin_frame(&mut self) {
        self.calls.clear();
        self.frames += 1;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke, color: Color) {
        self.calls.push(DrawCall::StrokeRect {
            rect,
            width: stroke.width,
            color,
        });
    }

    // Fixed half-em advance per character.
    fn measure_text(&mut self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * 0.5
    }

    fn fill_text(&mut self, text: &str, origin: Point, font_size: f64, color: Color) {
        self.calls.push(DrawCall::FillText {
            text: text.to_string(),
            origin,
            font_size,
            color,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.calls.push(DrawCall::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.calls.push(DrawCall::PopClip);
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    fn set_listening(&mut self, kind: EventKind, listening: bool) {
        self.listening.set(EventKinds::from(kind), listening);
    }
}
