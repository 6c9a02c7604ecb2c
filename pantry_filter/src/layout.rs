// Copyright 2025 the Pantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout planning: from a frame snapshot to per-cell targets.
//!
//! Planning is split from mutation. [`plan_layout`] reads an immutable snapshot
//! and fills a [`LayoutPlan`]; [`LayoutPlan::apply`] then pushes the plan to a
//! [`WidgetSink`], issuing only the calls that change something.
//!
//! ## Example
//!
//! ```rust
//! use pantry_filter::{
//!     CompactSlots, ItemId, ItemMetadata, ItemSnapshot, LayoutPlan, LookupError,
//!     RankCache, SlotPos, SortMode, Target, plan_layout,
//! };
//!
//! struct Db;
//!
//! impl ItemMetadata for Db {
//!     fn canonicalize(&self, id: ItemId) -> ItemId { id }
//!     fn inventory_actions(&self, id: ItemId) -> Option<Vec<String>> {
//!         (id.0 == 385).then(|| vec!["Eat".into()])
//!     }
//!     fn display_name(&self, _id: ItemId) -> Option<String> { Some("Shark".into()) }
//!     fn market_price(&self, _id: ItemId) -> Result<i64, LookupError> { Ok(1_000) }
//! }
//!
//! let cell = |index: usize, id: i32, x: i32| ItemSnapshot {
//!     widget: index,
//!     index,
//!     item_id: ItemId(id),
//!     pos: SlotPos::new(x, 0),
//!     original: SlotPos::new(x, 0),
//!     hidden: false,
//! };
//! // A rune scimitar in the first cell, a shark in the second.
//! let items = [cell(0, 1333, 0), cell(1, 385, 36)];
//!
//! let mut slots = CompactSlots::new();
//! slots.capture(&items);
//!
//! let mut plan = LayoutPlan::new();
//! let summary = plan_layout(
//!     &items,
//!     &slots,
//!     &Db,
//!     &mut RankCache::new(),
//!     SortMode::MarketValue,
//!     &mut plan,
//! )
//! .unwrap();
//!
//! assert_eq!(summary.visible, 1);
//! assert_eq!(plan.target_of(1), Some(Target::Slot { index: 0, pos: SlotPos::new(0, 0) }));
//! assert_eq!(plan.target_of(0), Some(Target::Hidden));
//! ```

use alloc::vec::Vec;

use crate::classify::is_edible;
use crate::host::{ItemMetadata, WidgetSink};
use crate::item::{ItemId, ItemSnapshot, SlotPos};
use crate::rank::{RankCache, RankKey, SortMode};
use crate::slots::CompactSlots;

/// Where one cell should end up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// Visible at compact slot `index`.
    Slot {
        /// Index into the [`CompactSlots`] the plan was built against.
        index: usize,
        /// The slot's position.
        pos: SlotPos,
    },
    /// Not shown.
    Hidden,
}

impl Target {
    /// Returns `true` for [`Target::Hidden`].
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// The planned target of one cell, alongside the cell's state when planned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement<W> {
    /// The cell as it was in the snapshot.
    pub item: ItemSnapshot<W>,
    /// Where it should go.
    pub target: Target,
}

/// Counts describing one planning pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutSummary {
    /// Food placed into a compact slot.
    pub visible: usize,
    /// Non-food items hidden.
    pub filtered: usize,
    /// Food hidden because every slot was taken.
    pub overflow: usize,
}

impl LayoutSummary {
    /// Total hidden cells.
    #[must_use]
    pub const fn hidden(&self) -> usize {
        self.filtered + self.overflow
    }
}

/// A full set of placements for one frame.
///
/// Visible placements come first, in rank order, followed by overflow food and
/// then non-food. The plan owns its buffers so a long-lived plan can be reused
/// every frame without reallocating.
#[derive(Clone, Debug, Default)]
pub struct LayoutPlan<W> {
    placements: Vec<Placement<W>>,
    ranked: Vec<(RankKey, ItemSnapshot<W>)>,
    rejected: Vec<ItemSnapshot<W>>,
}

impl<W> LayoutPlan<W> {
    /// Creates an empty plan.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            placements: Vec::new(),
            ranked: Vec::new(),
            rejected: Vec::new(),
        }
    }

    /// All placements.
    #[must_use]
    pub fn placements(&self) -> &[Placement<W>] {
        &self.placements
    }

    /// Placements that end up visible, in slot order.
    pub fn visible(&self) -> impl Iterator<Item = &Placement<W>> + '_ {
        self.placements.iter().filter(|p| !p.target.is_hidden())
    }

    /// Returns `true` if nothing is planned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Clears every placement, keeping allocations.
    pub fn clear(&mut self) {
        self.placements.clear();
        self.ranked.clear();
        self.rejected.clear();
    }
}

impl<W: Copy + PartialEq> LayoutPlan<W> {
    /// The planned target of `widget`, if the plan covers it.
    #[must_use]
    pub fn target_of(&self, widget: W) -> Option<Target> {
        self.placements
            .iter()
            .find(|p| p.item.widget == widget)
            .map(|p| p.target)
    }
}

impl<W: Copy> LayoutPlan<W> {
    /// Push the plan to `sink`, skipping calls that would not change anything.
    ///
    /// Hidden targets only toggle visibility; the cell keeps its position so a
    /// later restore has nothing extra to undo. Returns the number of calls made.
    pub fn apply<S>(&self, sink: &mut S) -> usize
    where
        S: WidgetSink<W> + ?Sized,
    {
        let mut calls = 0;
        for placement in &self.placements {
            let item = &placement.item;
            match placement.target {
                Target::Hidden => {
                    if !item.hidden {
                        sink.set_hidden(item.widget, true);
                        calls += 1;
                    }
                }
                Target::Slot { pos, .. } => {
                    if item.hidden {
                        sink.set_hidden(item.widget, false);
                        calls += 1;
                    }
                    if item.pos != pos {
                        sink.set_position(item.widget, pos);
                        calls += 1;
                    }
                }
            }
        }
        calls
    }
}

/// Plan the filtered, ranked, and compacted layout of `items`.
///
/// - Only present items take part; empty cells are left alone.
/// - Returns `None`, leaving `plan` empty, if there are no present items or no
///   slots. Callers should treat that as "change nothing this frame".
/// - Items are first put in the host's order (by [`ItemSnapshot::index`]) so
///   the result does not depend on how the snapshot happened to be listed.
/// - Non-food is hidden. Food is ordered by [`RankKey`] under `mode` and zipped
///   against `slots`; food beyond the last slot is hidden.
///
/// Planning is deterministic: the same snapshot, slots, scores, and mode always
/// produce the same plan.
pub fn plan_layout<W, M>(
    items: &[ItemSnapshot<W>],
    slots: &CompactSlots,
    meta: &M,
    ranks: &mut RankCache,
    mode: SortMode,
    plan: &mut LayoutPlan<W>,
) -> Option<LayoutSummary>
where
    W: Copy,
    M: ItemMetadata + ?Sized,
{
    plan.clear();

    if slots.is_empty() || !items.iter().any(ItemSnapshot::is_present) {
        return None;
    }

    let LayoutPlan {
        placements,
        ranked,
        rejected,
    } = plan;

    for item in items.iter().filter(|item| item.is_present()) {
        if is_edible(meta, item.item_id) {
            ranked.push((ranks.key(meta, item.item_id, mode), *item));
        } else {
            rejected.push(*item);
        }
    }

    // Host order first, then rank; both sorts are stable so equal keys keep
    // their host order.
    ranked.sort_by_key(|(_, item)| item.index);
    ranked.sort_by(|(a, _), (b, _)| a.cmp(b));
    rejected.sort_by_key(|item| item.index);

    let mut summary = LayoutSummary::default();
    for (rank, (_, item)) in ranked.iter().enumerate() {
        let target = match slots.get(rank) {
            Some(pos) => {
                summary.visible += 1;
                Target::Slot { index: rank, pos }
            }
            None => {
                summary.overflow += 1;
                Target::Hidden
            }
        };
        placements.push(Placement {
            item: *item,
            target,
        });
    }

    summary.filtered = rejected.len();
    placements.extend(rejected.iter().map(|item| Placement {
        item: *item,
        target: Target::Hidden,
    }));

    Some(summary)
}

/// The rank order of the visible placements' item ids.
///
/// Convenience for hosts and tests that only care about "what shows, in what order".
pub fn visible_ids<W>(plan: &LayoutPlan<W>) -> Vec<ItemId> {
    plan.visible().map(|p| p.item.item_id).collect()
}
