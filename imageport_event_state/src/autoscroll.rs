// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge auto-scroll: nudge the view while a drag hovers near a border.
//!
//! [`AutoScroll`] is a repeating task without a timer of its own. The caller
//! runs one iteration with [`AutoScroll::tick`]; when that returns a nudge, the
//! chain is alive and the caller must schedule the next tick after
//! [`AutoScroll::interval`]. Each tick re-checks its continuation condition
//! (button held and pointer within the margin) before doing anything, and the
//! chain ends by itself when the condition fails.
//!
//! ```
//! use kurbo::Point;
//! use imageport_event_state::autoscroll::{AutoScroll, AutoScrollConfig};
//!
//! let mut scroll = AutoScroll::new(AutoScrollConfig::default());
//!
//! // Pointer near the left edge with a button held: nudge left.
//! let nudge = scroll.tick(true, Some(Point::new(0.02, 0.5))).unwrap();
//! assert_eq!((nudge.x, nudge.y), (-0.01, 0.0));
//! assert!(scroll.is_alive());
//!
//! // Button released: the next tick ends the chain.
//! assert_eq!(scroll.tick(false, Some(Point::new(0.02, 0.5))), None);
//! assert!(!scroll.is_alive());
//! ```

use core::time::Duration;

use kurbo::{Point, Vec2};

/// Tunables for [`AutoScroll`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoScrollConfig {
    /// Distance from an edge, in normalized units, that triggers scrolling.
    pub margin: f64,
    /// Origin shift per iteration, in normalized units.
    pub step: f64,
    /// Delay between iterations.
    pub interval: Duration,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            margin: 0.05,
            step: 0.01,
            interval: Duration::from_millis(100),
        }
    }
}

/// State of the auto-scroll chain.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AutoScroll {
    config: AutoScrollConfig,
    alive: bool,
}

impl AutoScroll {
    /// Creates an idle auto-scroller.
    #[must_use]
    pub fn new(config: AutoScrollConfig) -> Self {
        Self {
            config,
            alive: false,
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> AutoScrollConfig {
        self.config
    }

    /// Delay before the next [`AutoScroll::tick`] of a live chain.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.config.interval
    }

    /// Returns `true` while a chain is running and another tick is expected.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Ends the chain; the next scheduled tick, if any, does nothing.
    pub fn cancel(&mut self) {
        self.alive = false;
    }

    /// Nudge for a pointer at `pos`, with each axis handled independently.
    ///
    /// Returns a zero vector when `pos` is not within the margin of any edge.
    #[must_use]
    pub fn nudge(&self, pos: Point) -> Vec2 {
        Vec2::new(self.axis_nudge(pos.x), self.axis_nudge(pos.y))
    }

    /// Runs one iteration.
    ///
    /// Returns the nudge to apply and keeps the chain alive, or returns `None`
    /// and ends the chain when no button is held, no position is known, or the
    /// position is clear of every edge.
    pub fn tick(&mut self, button_held: bool, pos: Option<Point>) -> Option<Vec2> {
        let nudge = match pos {
            Some(pos) if button_held => self.nudge(pos),
            _ => Vec2::ZERO,
        };
        self.alive = nudge != Vec2::ZERO;
        if self.alive {
            log::trace!("auto-scroll nudge {nudge:?}");
            Some(nudge)
        } else {
            None
        }
    }

    fn axis_nudge(&self, v: f64) -> f64 {
        if v <= self.config.margin {
            -self.config.step
        } else if v >= 1.0 - self.config.margin {
            self.config.step
        } else {
            0.0
        }
    }
}
