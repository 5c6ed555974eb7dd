// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use core::ops::{Deref, DerefMut};
use core::time::Duration;

use imageport_event_state::pointer::{EventKind, EventKinds, PointerEvent};
use imageport_event_state::registry::CallbackRegistry;
use imageport_render::Surface;

use crate::{ViewportConfig, ViewportCore};

/// Registrant id of the built-in pan/zoom interactions.
pub const INTERACTION_ID: &str = "viewport";

/// A pointer event handler.
pub type Callback<S> = Box<dyn FnMut(&mut ViewportCore<S>, &PointerEvent)>;

/// An interactive image canvas.
///
/// Wraps a [`ViewportCore`] (reachable through `Deref`) with a callback
/// registry. Events handed to [`ImageViewport::handle_event`] run every
/// handler registered for their kind and then redraw once.
///
/// The surface only listens for kinds that have at least one handler; see
/// [`Surface::set_listening`].
pub struct ImageViewport<S> {
    core: ViewportCore<S>,
    callbacks: CallbackRegistry<String, Callback<S>>,
    listening: EventKinds,
    interactive: bool,
}

impl<S: core::fmt::Debug> core::fmt::Debug for ImageViewport<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ImageViewport")
            .field("core", &self.core)
            .field("callbacks", &self.callbacks)
            .field("listening", &self.listening)
            .field("interactive", &self.interactive)
            .finish()
    }
}

impl<S: Surface> ImageViewport<S> {
    /// Creates a viewport drawing on `surface` and renders the first frame.
    ///
    /// With `interactive` set, the built-in pan and zoom handlers are
    /// registered under [`INTERACTION_ID`].
    pub fn new(surface: S, config: ViewportConfig, interactive: bool) -> Self {
        let mut viewport = Self {
            core: ViewportCore::new(surface, config),
            callbacks: CallbackRegistry::new(),
            listening: EventKinds::empty(),
            interactive,
        };
        if interactive {
            viewport.install_interactions();
        }
        viewport.core.redraw();
        viewport
    }

    /// Returns `true` if the built-in interactions were installed.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// The viewport state without the registry.
    #[must_use]
    pub fn core(&self) -> &ViewportCore<S> {
        &self.core
    }

    /// Mutable access to the viewport state without the registry.
    pub fn core_mut(&mut self) -> &mut ViewportCore<S> {
        &mut self.core
    }

    /// Registers `handler` for `kind` under `id`.
    ///
    /// An id already registered for `kind` keeps its handler. Returns `true`
    /// if the handler was added.
    pub fn add_callback(
        &mut self,
        id: impl Into<String>,
        kind: EventKind,
        handler: impl FnMut(&mut ViewportCore<S>, &PointerEvent) + 'static,
    ) -> bool {
        let added = self.callbacks.add(id.into(), kind, Box::new(handler));
        if added {
            self.sync_listening();
        }
        added
    }

    /// Unregisters the handler for `kind` under `id`, if any.
    pub fn remove_callback(&mut self, id: &str, kind: EventKind) -> bool {
        let removed = self.callbacks.remove(id, kind);
        if removed {
            self.sync_listening();
        }
        removed
    }

    /// Returns `true` if `id` has a handler for `kind`.
    #[must_use]
    pub fn has_callback(&self, id: &str, kind: EventKind) -> bool {
        self.callbacks.contains(id, kind)
    }

    /// Kinds the surface is currently listening for.
    #[must_use]
    pub fn listening(&self) -> EventKinds {
        self.listening
    }

    /// Dispatches `event` to every handler for its kind, then redraws.
    ///
    /// After a pointer-up the action is reset to none unless it is panning or
    /// burst mode is on. Events of a kind with no handlers are ignored.
    ///
    /// Returns the delay before [`ViewportCore::tick_auto_scroll`] is due if
    /// the event started an auto-scroll chain.
    pub fn handle_event(&mut self, event: &PointerEvent) -> Option<Duration> {
        if !self.callbacks.has_any(event.kind) {
            return None;
        }
        log::trace!("dispatching {:?} at {:?}", event.kind, event.page_pos);
        let was_scrolling = self.core.auto_scroll_alive();
        for handler in self.callbacks.handlers_mut(event.kind) {
            handler(&mut self.core, event);
        }
        if event.kind == EventKind::Up {
            self.core.finish_interaction();
        }
        self.core.redraw();

        (!was_scrolling && self.core.auto_scroll_alive())
            .then(|| self.core.config().auto_scroll.interval)
    }

    fn install_interactions(&mut self) {
        self.add_callback(INTERACTION_ID, EventKind::Down, |core, event| {
            core.on_pointer_down(event);
        });
        self.add_callback(INTERACTION_ID, EventKind::Move, |core, event| {
            core.on_pointer_move(event);
        });
        self.add_callback(INTERACTION_ID, EventKind::Up, |core, event| {
            core.on_pointer_up(event);
        });
        self.add_callback(INTERACTION_ID, EventKind::Leave, |core, event| {
            core.on_pointer_leave(event);
        });
        self.add_callback(INTERACTION_ID, EventKind::Wheel, |core, event| {
            core.on_wheel(event);
        });
    }

    fn sync_listening(&mut self) {
        let active = self.callbacks.active_kinds();
        for kind in EventKind::ALL {
            let flag = EventKinds::from(kind);
            let on = active.contains(flag);
            if on != self.listening.contains(flag) {
                log::debug!("surface listening for {kind:?}: {on}");
                self.core.surface_mut().set_listening(kind, on);
            }
        }
        self.listening = active;
    }
}

impl<S> Deref for ImageViewport<S> {
    type Target = ViewportCore<S>;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl<S> DerefMut for ImageViewport<S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.core
    }
}
