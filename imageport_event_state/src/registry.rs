// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-kind handler registry keyed by registrant id.
//!
//! Components that want to hear about pointer events register a handler under
//! an id of their choosing. Ids are unique per event kind: registering the same
//! id twice for one kind keeps the first handler. The set of kinds with at least
//! one handler ([`CallbackRegistry::active_kinds`]) tells the host which events
//! the surface needs to listen for at all.
//!
//! ## Minimal example
//!
//! ```
//! use imageport_event_state::pointer::{EventKind, EventKinds};
//! use imageport_event_state::registry::CallbackRegistry;
//!
//! let mut registry: CallbackRegistry<&str, fn(u32) -> u32> = CallbackRegistry::new();
//! assert!(registry.add("viewport", EventKind::Move, |x| x + 1));
//! // Duplicate ids are ignored.
//! assert!(!registry.add("viewport", EventKind::Move, |x| x * 2));
//! assert_eq!(registry.active_kinds(), EventKinds::MOVE);
//!
//! let results: Vec<u32> = registry.handlers_mut(EventKind::Move).map(|h| h(1)).collect();
//! assert_eq!(results, vec![2]);
//!
//! assert!(registry.remove(&"viewport", EventKind::Move));
//! assert!(!registry.has_any(EventKind::Move));
//! ```

use core::borrow::Borrow;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::pointer::{EventKind, EventKinds};

/// Handlers grouped by [`EventKind`], keyed by registrant id.
///
/// Iteration order within a kind is unspecified.
pub struct CallbackRegistry<K, H> {
    handlers: [HashMap<K, H>; EventKind::ALL.len()],
}

impl<K, H> core::fmt::Debug for CallbackRegistry<K, H>
where
    K: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for kind in EventKind::ALL {
            let ids: alloc::vec::Vec<&K> = self.handlers[kind.index()].keys().collect();
            map.entry(&kind, &ids);
        }
        map.finish()
    }
}

impl<K, H> Default for CallbackRegistry<K, H> {
    fn default() -> Self {
        Self {
            handlers: core::array::from_fn(|_| HashMap::new()),
        }
    }
}

impl<K: Eq + Hash, H> CallbackRegistry<K, H> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `kind` under `id`.
    ///
    /// Returns `false` and drops `handler` if `id` is already registered for
    /// `kind`.
    pub fn add(&mut self, id: K, kind: EventKind, handler: H) -> bool {
        let map = &mut self.handlers[kind.index()];
        if map.contains_key(&id) {
            return false;
        }
        map.insert(id, handler);
        true
    }

    /// Removes the handler registered for `kind` under `id`.
    ///
    /// Returns `false` if there was none.
    pub fn remove<Q>(&mut self, id: &Q, kind: EventKind) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.handlers[kind.index()].remove(id).is_some()
    }

    /// Returns `true` if `id` has a handler for `kind`.
    #[must_use]
    pub fn contains<Q>(&self, id: &Q, kind: EventKind) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.handlers[kind.index()].contains_key(id)
    }

    /// Returns `true` if any handler is registered for `kind`.
    #[must_use]
    pub fn has_any(&self, kind: EventKind) -> bool {
        !self.handlers[kind.index()].is_empty()
    }

    /// Number of handlers registered for `kind`.
    #[must_use]
    pub fn len(&self, kind: EventKind) -> usize {
        self.handlers[kind.index()].len()
    }

    /// Returns `true` if no handler is registered for any kind.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.iter().all(HashMap::is_empty)
    }

    /// The kinds that have at least one handler.
    #[must_use]
    pub fn active_kinds(&self) -> EventKinds {
        EventKind::ALL
            .into_iter()
            .filter(|&kind| self.has_any(kind))
            .fold(EventKinds::empty(), |acc, kind| acc | EventKinds::from(kind))
    }

    /// Mutable access to every handler registered for `kind`.
    pub fn handlers_mut(&mut self, kind: EventKind) -> impl Iterator<Item = &mut H> {
        self.handlers[kind.index()].values_mut()
    }
}
