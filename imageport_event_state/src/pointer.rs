// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer events as delivered by the host's event source.

use bitflags::bitflags;
use kurbo::Point;

/// A pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The main button (usually left).
    Primary,
    /// The button that always pans, whatever the current action (usually middle).
    Secondary,
    /// Any other button, identified by the host's button number.
    Other(u8),
}

/// Kind of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A button was pressed.
    Down,
    /// The pointer moved.
    Move,
    /// A button was released.
    Up,
    /// The pointer left the surface.
    Leave,
    /// The wheel was turned.
    Wheel,
}

impl EventKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 5] = [Self::Down, Self::Move, Self::Up, Self::Leave, Self::Wheel];

    /// Dense index of this kind, in `0..EventKind::ALL.len()`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Down => 0,
            Self::Move => 1,
            Self::Up => 2,
            Self::Leave => 3,
            Self::Wheel => 4,
        }
    }
}

bitflags! {
    /// A set of [`EventKind`]s, e.g. the kinds a surface should listen for.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventKinds: u8 {
        /// [`EventKind::Down`].
        const DOWN = 1 << 0;
        /// [`EventKind::Move`].
        const MOVE = 1 << 1;
        /// [`EventKind::Up`].
        const UP = 1 << 2;
        /// [`EventKind::Leave`].
        const LEAVE = 1 << 3;
        /// [`EventKind::Wheel`].
        const WHEEL = 1 << 4;
    }
}

impl From<EventKind> for EventKinds {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Down => Self::DOWN,
            EventKind::Move => Self::MOVE,
            EventKind::Up => Self::UP,
            EventKind::Leave => Self::LEAVE,
            EventKind::Wheel => Self::WHEEL,
        }
    }
}

/// A raw pointer event in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: EventKind,
    /// The button involved, for [`EventKind::Down`] and [`EventKind::Up`].
    pub button: Option<PointerButton>,
    /// Pointer position in page pixels.
    pub page_pos: Point,
    /// Signed wheel delta, for [`EventKind::Wheel`]; zero otherwise.
    pub wheel_delta: f64,
}

impl PointerEvent {
    /// A button press at `page_pos`.
    #[must_use]
    pub fn down(button: PointerButton, page_pos: Point) -> Self {
        Self {
            kind: EventKind::Down,
            button: Some(button),
            page_pos,
            wheel_delta: 0.0,
        }
    }

    /// A pointer move to `page_pos`.
    #[must_use]
    pub fn moved(page_pos: Point) -> Self {
        Self {
            kind: EventKind::Move,
            button: None,
            page_pos,
            wheel_delta: 0.0,
        }
    }

    /// A button release at `page_pos`.
    #[must_use]
    pub fn up(button: PointerButton, page_pos: Point) -> Self {
        Self {
            kind: EventKind::Up,
            button: Some(button),
            page_pos,
            wheel_delta: 0.0,
        }
    }

    /// The pointer leaving the surface at `page_pos`.
    #[must_use]
    pub fn leave(page_pos: Point) -> Self {
        Self {
            kind: EventKind::Leave,
            button: None,
            page_pos,
            wheel_delta: 0.0,
        }
    }

    /// A wheel turn of `delta` at `page_pos`.
    #[must_use]
    pub fn wheel(page_pos: Point, delta: f64) -> Self {
        Self {
            kind: EventKind::Wheel,
            button: None,
            page_pos,
            wheel_delta: delta,
        }
    }
}
