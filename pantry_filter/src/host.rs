// Copyright 2025 the Pantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host seams: the collaborators the engine reads from and writes to.
//!
//! The engine never talks to a widget toolkit or a game client directly. Hosts
//! implement these small traits over whatever they have (a live widget tree, a
//! cached item database, a test fixture) and pass them into each call.
//!
//! A typical host implements [`ItemContainer`], [`WidgetSink`], and
//! [`DefaultLayout`] on one adapter type wrapping its container widget, and
//! [`ItemMetadata`] on a separate handle to its item database.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::item::{ItemId, ItemSnapshot, SlotPos};

/// Error returned by [`ItemMetadata::market_price`].
///
/// These never escape the engine: a failed lookup is logged and treated as a
/// value of zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// The metadata service does not know this item.
    Unknown(ItemId),
    /// The service knows the item but could not produce a value right now.
    Unavailable(ItemId),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(id) => write!(f, "no metadata for item {id}"),
            Self::Unavailable(id) => write!(f, "price for item {id} is unavailable"),
        }
    }
}

impl core::error::Error for LookupError {}

/// Read-only item metadata service.
pub trait ItemMetadata {
    /// Collapse variants (noted, placeholder, charged) to their base item.
    fn canonicalize(&self, id: ItemId) -> ItemId;

    /// Inventory actions for `id`, or `None` if the item has no metadata.
    ///
    /// Hosts whose action lists contain empty slots should skip them.
    fn inventory_actions(&self, id: ItemId) -> Option<Vec<String>>;

    /// Display name for `id`, or `None` if unavailable.
    fn display_name(&self, id: ItemId) -> Option<String>;

    /// Current trade value of `id`.
    ///
    /// Negative values are treated as failures by the engine.
    fn market_price(&self, id: ItemId) -> Result<i64, LookupError>;
}

/// Read access to the item container.
pub trait ItemContainer<W> {
    /// Returns `true` while the container is rendered and not hidden.
    fn is_open(&self) -> bool;

    /// Write a snapshot of every cell into `out`, in the host's own order.
    ///
    /// Implementations should clear `out` first. Empty cells may be included;
    /// the engine skips them where appropriate.
    fn snapshot(&self, out: &mut Vec<ItemSnapshot<W>>);
}

/// Mutation access to individual cells.
pub trait WidgetSink<W> {
    /// Hide or show a cell.
    fn set_hidden(&mut self, widget: W, hidden: bool);

    /// Force a cell to be drawn at `pos`.
    fn set_position(&mut self, widget: W, pos: SlotPos);
}

/// The host's own layout pass for the container.
pub trait DefaultLayout {
    /// Re-run the native arrangement (and any search highlighting) of the container.
    fn relayout_default(&mut self);
}

/// Everything the state machine needs from the container side.
///
/// Blanket-implemented for any type providing the three container traits.
pub trait FilterHost<W>: ItemContainer<W> + WidgetSink<W> + DefaultLayout {}

impl<W, T> FilterHost<W> for T where T: ItemContainer<W> + WidgetSink<W> + DefaultLayout + ?Sized {}
