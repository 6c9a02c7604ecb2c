// Copyright 2025 the Pantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undo a filtered layout.

use crate::host::{DefaultLayout, WidgetSink};
use crate::item::ItemSnapshot;
use crate::slots::CompactSlots;

/// Show every cell at its original position, forget the compact slots, and
/// hand the container back to the host's own layout pass.
///
/// Every cell in `items` is touched, including empty ones, since the host may
/// have moved them too. Calls that would not change a cell are skipped, so
/// restoring an unfiltered container only re-runs the host layout.
///
/// Returns the number of cell mutations issued.
pub fn restore<W, H>(
    items: &[ItemSnapshot<W>],
    slots: &mut CompactSlots,
    host: &mut H,
) -> usize
where
    W: Copy,
    H: WidgetSink<W> + DefaultLayout + ?Sized,
{
    let mut calls = 0;
    for item in items {
        if item.hidden {
            host.set_hidden(item.widget, false);
            calls += 1;
        }
        if item.pos != item.original {
            host.set_position(item.widget, item.original);
            calls += 1;
        }
    }

    slots.clear();
    host.relayout_default();
    calls
}
