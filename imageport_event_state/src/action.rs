// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The user's current tool selection.
//!
//! Toolbars and keyboard shortcuts decide *what* a drag or click on the canvas
//! means; the viewport reads that decision from an [`ActionContext`] and resets
//! it once a one-shot action has been applied.
//!
//! ```
//! use imageport_event_state::action::{Action, ActionContext};
//!
//! let mut ctx = ActionContext::new();
//! ctx.set_action(Action::ZoomIn);
//! assert!(ctx.finish_interaction());
//! assert_eq!(ctx.action(), Action::None);
//!
//! // Panning and burst mode survive a completed interaction.
//! ctx.set_action(Action::Pan);
//! assert!(!ctx.finish_interaction());
//! assert_eq!(ctx.action(), Action::Pan);
//! ```

/// What a pointer interaction on the canvas does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Action {
    /// No viewport action; clicks go to annotation tools.
    #[default]
    None,
    /// Drag to pan.
    Pan,
    /// Click to zoom in around the pointer.
    ZoomIn,
    /// Click to zoom out around the pointer.
    ZoomOut,
    /// Drag a rectangle that becomes the new viewport.
    ZoomArea,
}

/// Cursor hint for the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    /// The platform default arrow.
    #[default]
    Default,
    /// Open hand for panning.
    Grab,
    /// Magnifier with a plus.
    ZoomIn,
    /// Magnifier with a minus.
    ZoomOut,
    /// Crosshair for rectangle selection.
    Crosshair,
}

/// Current action plus the flags that modify it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionContext {
    action: Action,
    burst_mode: bool,
    loupe_visible: bool,
}

impl ActionContext {
    /// No action, burst mode off, loupe hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current action.
    #[must_use]
    pub fn action(&self) -> Action {
        self.action
    }

    /// Selects `action`.
    pub fn set_action(&mut self, action: Action) {
        if self.action != action {
            log::debug!("action {:?} -> {action:?}", self.action);
            self.action = action;
        }
    }

    /// Whether one-shot actions repeat instead of resetting after use.
    #[must_use]
    pub fn burst_mode(&self) -> bool {
        self.burst_mode
    }

    /// Enables or disables burst mode.
    pub fn set_burst_mode(&mut self, burst: bool) {
        self.burst_mode = burst;
    }

    /// Whether the magnifying loupe should follow the pointer.
    #[must_use]
    pub fn loupe_visible(&self) -> bool {
        self.loupe_visible
    }

    /// Shows or hides the loupe.
    pub fn set_loupe_visible(&mut self, visible: bool) {
        self.loupe_visible = visible;
    }

    /// Cursor hint matching the current action.
    #[must_use]
    pub fn default_cursor(&self) -> Cursor {
        match self.action {
            Action::None => Cursor::Default,
            Action::Pan => Cursor::Grab,
            Action::ZoomIn => Cursor::ZoomIn,
            Action::ZoomOut => Cursor::ZoomOut,
            Action::ZoomArea => Cursor::Crosshair,
        }
    }

    /// Resets the action to [`Action::None`] after a completed interaction,
    /// unless it is [`Action::Pan`] or burst mode is on.
    ///
    /// Returns `true` if the action was reset.
    pub fn finish_interaction(&mut self) -> bool {
        if self.action == Action::Pan || self.burst_mode || self.action == Action::None {
            return false;
        }
        self.set_action(Action::None);
        true
    }
}
