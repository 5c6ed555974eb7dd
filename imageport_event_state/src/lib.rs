// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Imageport Event State: pointer input bookkeeping for image canvases.
//!
//! This crate provides the small state machines and registries that sit
//! between a host's raw pointer events and the viewport:
//!
//! - [`pointer`]: event, button and event-kind types, plus the [`pointer::EventKinds`]
//!   flag set used to decide which events a surface listens for
//! - [`registry`]: handlers keyed by registrant id per event kind
//! - [`action`]: the current tool selection (pan, zoom, zoom-to-area) and the
//!   burst/loupe flags that modify it
//! - [`press`]: held button and last pointer position
//! - [`autoscroll`]: the repeating edge-scroll task
//!
//! Nothing here knows about rendering or viewport geometry; positions are
//! plain [`kurbo::Point`]s in whatever space the caller records them in.
//!
//! ## Tracking a pan drag
//!
//! ```rust
//! use kurbo::Point;
//! use imageport_event_state::action::{Action, ActionContext};
//! use imageport_event_state::pointer::PointerButton;
//! use imageport_event_state::press::PressState;
//!
//! let mut ctx = ActionContext::new();
//! ctx.set_action(Action::Pan);
//!
//! let mut press = PressState::default();
//! press.press(PointerButton::Primary, Point::new(0.5, 0.5));
//! let delta = press.move_to(Point::new(0.4, 0.5)).unwrap();
//!
//! let pans = press.is_pressed()
//!     && (press.button() == Some(PointerButton::Secondary) || ctx.action() == Action::Pan);
//! assert!(pans);
//! assert!((delta.x + 0.1).abs() < 1e-12);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod action;
pub mod autoscroll;
pub mod pointer;
pub mod press;
pub mod registry;
