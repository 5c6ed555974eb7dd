// Copyright 2025 the Imageport Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use alloc::vec::Vec;

use imageport_view2d::CoordinateTransform;

use crate::{ElementRef, Surface};

/// Render elements kept in ascending z-order.
///
/// Membership is by handle identity: inserting a handle that is already
/// present does nothing, and removing a handle that is absent does nothing.
/// Elements with equal z-index keep the order they were inserted in.
///
/// Mutators report whether anything changed so the owner can decide whether
/// a redraw is due.
#[derive(Default)]
pub struct RenderStack {
    entries: Vec<ElementRef>,
}

impl core::fmt::Debug for RenderStack {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| e.borrow().z_index()))
            .finish()
    }
}

impl RenderStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `element` unless it is already present.
    ///
    /// Returns `true` if it was added.
    pub fn insert(&mut self, element: ElementRef) -> bool {
        if self.index_of(&element).is_some() {
            return false;
        }
        self.entries.push(element);
        self.sort();
        log::trace!("render stack: inserted, {} elements", self.entries.len());
        true
    }

    /// Replaces the entry at `index` and restores the z-order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; obtain it from
    /// [`RenderStack::index_of`].
    pub fn update(&mut self, index: usize, element: ElementRef) {
        self.entries[index] = element;
        self.sort();
    }

    /// Removes `element` if present.
    ///
    /// Returns `true` if it was removed.
    pub fn remove(&mut self, element: &ElementRef) -> bool {
        match self.index_of(element) {
            Some(index) => {
                self.entries.remove(index);
                log::trace!("render stack: removed at {index}");
                true
            }
            None => false,
        }
    }

    /// Position of `element` in render order.
    #[must_use]
    pub fn index_of(&self, element: &ElementRef) -> Option<usize> {
        self.entries.iter().position(|e| Rc::ptr_eq(e, element))
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Elements in render order.
    pub fn iter(&self) -> impl Iterator<Item = &ElementRef> {
        self.entries.iter()
    }

    /// Draws every element in ascending z-order.
    pub fn render(&self, surface: &mut dyn Surface, transform: &CoordinateTransform) {
        for element in &self.entries {
            element.borrow().render(surface, transform);
        }
    }

    fn sort(&mut self) {
        // `sort_by` is stable, which keeps insertion order among equal z-indices.
        self.entries
            .sort_by(|a, b| a.borrow().z_index().total_cmp(&b.borrow().z_index()));
    }
}
