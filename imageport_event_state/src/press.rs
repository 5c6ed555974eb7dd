// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press state helper: which button is held and where the pointer was last seen.
//!
//! ## Usage
//!
//! 1) Call [`PressState::press`] on button down with the pointer position.
//! 2) On each move, call [`PressState::move_to`] to get the motion since the
//!    last recorded position.
//! 3) Call [`PressState::release`] on button up, or [`PressState::cancel`] when
//!    the pointer leaves the surface.
//!
//! Positions are whatever space the caller works in; the viewport records them
//! in valid-area-relative coordinates.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use imageport_event_state::pointer::PointerButton;
//! use imageport_event_state::press::PressState;
//!
//! let mut press = PressState::default();
//! press.press(PointerButton::Secondary, Point::new(0.5, 0.5));
//! assert_eq!(press.button(), Some(PointerButton::Secondary));
//!
//! let delta = press.move_to(Point::new(0.6, 0.5)).unwrap();
//! assert!((delta.x - 0.1).abs() < 1e-12);
//!
//! press.release();
//! assert!(!press.is_pressed());
//! assert_eq!(press.last_pos(), None);
//! ```

use kurbo::{Point, Vec2};

use crate::pointer::PointerButton;

/// Held button and last pointer position.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct PressState {
    button: Option<PointerButton>,
    last_pos: Option<Point>,
}

impl PressState {
    /// Records a press of `button` at `pos`.
    pub fn press(&mut self, button: PointerButton, pos: Point) {
        self.button = Some(button);
        self.last_pos = Some(pos);
    }

    /// Records the pointer at `pos`, returning the motion since the last
    /// recorded position, if there was one.
    ///
    /// The position is tracked whether or not a button is held.
    pub fn move_to(&mut self, pos: Point) -> Option<Vec2> {
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Ends the press and forgets the last position.
    pub fn release(&mut self) {
        self.button = None;
        self.last_pos = None;
    }

    /// Ends the press but keeps the last position.
    pub fn cancel(&mut self) {
        self.button = None;
    }

    /// The held button, if any.
    #[must_use]
    pub fn button(&self) -> Option<PointerButton> {
        self.button
    }

    /// Last recorded pointer position.
    #[must_use]
    pub fn last_pos(&self) -> Option<Point> {
        self.last_pos
    }

    /// Returns `true` while a button is held.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.button.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_released() {
        let press = PressState::default();
        assert!(!press.is_pressed());
        assert!(press.last_pos().is_none());
    }

    #[test]
    fn move_without_history_returns_none_and_records() {
        let mut press = PressState::default();
        assert_eq!(press.move_to(Point::new(0.2, 0.3)), None);
        assert_eq!(press.last_pos(), Some(Point::new(0.2, 0.3)));
        assert!(!press.is_pressed());
    }

    #[test]
    fn incremental_deltas() {
        let mut press = PressState::default();
        press.press(PointerButton::Primary, Point::new(0.0, 0.0));
        assert_eq!(press.move_to(Point::new(0.5, 0.25)), Some(Vec2::new(0.5, 0.25)));
        assert_eq!(press.move_to(Point::new(0.25, 0.25)), Some(Vec2::new(-0.25, 0.0)));
    }

    #[test]
    fn cancel_keeps_position() {
        let mut press = PressState::default();
        press.press(PointerButton::Other(4), Point::new(0.5, 0.5));
        press.cancel();
        assert!(!press.is_pressed());
        assert_eq!(press.last_pos(), Some(Point::new(0.5, 0.5)));
    }

    #[test]
    fn press_overwrites_previous_press() {
        let mut press = PressState::default();
        press.press(PointerButton::Primary, Point::new(0.1, 0.1));
        press.press(PointerButton::Secondary, Point::new(0.9, 0.9));
        assert_eq!(press.button(), Some(PointerButton::Secondary));
        assert_eq!(press.last_pos(), Some(Point::new(0.9, 0.9)));
    }
}
