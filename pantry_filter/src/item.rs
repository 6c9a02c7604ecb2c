// Copyright 2025 the Pantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item identities, grid positions, and per-frame cell snapshots.

use core::cmp::Ordering;
use core::fmt;

/// A raw item identifier as reported by the host.
///
/// Identifiers are signed because hosts use `0` and negative values to mark
/// empty or placeholder cells. Only identifiers for which [`ItemId::is_present`]
/// returns `true` take part in slot capture and layout.
///
/// Ordering is numeric; the layout engine uses it as the final tie-break.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct ItemId(pub i32);

impl ItemId {
    /// Returns `true` if this identifier names a real item.
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        self.0 > 0
    }

    /// Returns the raw numeric id.
    #[inline]
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A cell position in grid-local coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct SlotPos {
    /// Horizontal offset from the container origin.
    pub x: i32,
    /// Vertical offset from the container origin.
    pub y: i32,
}

impl SlotPos {
    /// Creates a position.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Compares two positions in reading order: top-to-bottom, then left-to-right.
    #[must_use]
    pub fn reading_order(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

/// An immutable description of one container cell for a single frame.
///
/// The host owns the underlying widget; `widget` is an opaque handle the engine
/// hands back through [`WidgetSink`](crate::WidgetSink) when it wants the cell
/// hidden or moved. Snapshots are rebuilt every frame and never retained.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ItemSnapshot<W> {
    /// Host handle for the cell.
    pub widget: W,
    /// The cell's index in the host's own ordering.
    pub index: usize,
    /// Raw (non-canonical) item identifier shown in the cell.
    pub item_id: ItemId,
    /// Where the cell is currently drawn.
    pub pos: SlotPos,
    /// Where the host's native layout placed the cell.
    pub original: SlotPos,
    /// Whether the cell is currently hidden.
    pub hidden: bool,
}

impl<W> ItemSnapshot<W> {
    /// Returns `true` if the cell holds a real item.
    #[inline]
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.item_id.is_present()
    }
}
