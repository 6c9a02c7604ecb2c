// Copyright 2025 the Pantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact slot geometry captured from the unfiltered grid.
//!
//! When filtering begins the grid is still in its natural layout. Recording the
//! positions of every occupied cell, in reading order, yields the destinations
//! that filtered items are packed into. The set stays fixed while filtering is
//! engaged so items don't chase cells that the filter itself has hidden.

use alloc::vec::Vec;

use crate::item::{ItemSnapshot, SlotPos};

/// Destination positions for compacted items, in reading order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompactSlots {
    slots: Vec<SlotPos>,
}

impl CompactSlots {
    /// Creates an empty slot set.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Replaces the slot set with the positions of every present item in `items`.
    ///
    /// Positions are ordered by `y`, then `x`. Empty cells are ignored.
    pub fn capture<W>(&mut self, items: &[ItemSnapshot<W>]) {
        self.slots.clear();
        self.slots.extend(
            items
                .iter()
                .filter(|item| item.is_present())
                .map(|item| item.pos),
        );
        self.slots.sort_by(SlotPos::reading_order);
    }

    /// Captures from `items` only if no slots are held yet.
    ///
    /// Returns `true` if a capture happened.
    pub fn ensure_captured<W>(&mut self, items: &[ItemSnapshot<W>]) -> bool {
        if !self.slots.is_empty() {
            return false;
        }
        self.capture(items);
        true
    }

    /// Forgets every slot.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Returns `true` if no slots are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Slot `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<SlotPos> {
        self.slots.get(index).copied()
    }

    /// All slots in reading order.
    #[must_use]
    pub fn as_slice(&self) -> &[SlotPos] {
        &self.slots
    }
}
