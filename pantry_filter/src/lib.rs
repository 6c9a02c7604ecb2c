// Copyright 2025 the Pantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pantry_filter --heading-base-level=0

//! Pantry Filter: show only the food in an item grid, ranked and compacted.
//!
//! This crate is the engine behind a "food only" toggle for a bank-style item
//! container. While engaged, every frame it:
//!
//! - hides every item that is not food (an item is food when its inventory
//!   actions include "Eat"),
//! - ranks the food by trade value or by healing, and
//! - packs the food into the grid positions the container's items occupied
//!   when filtering began, so the result has no gaps.
//!
//! Disengaging, or the container closing, puts every cell back where the host
//! had it and hands the container back to the host's own layout pass.
//!
//! The crate does **not** know about any widget toolkit or game client. Hosts
//! implement a few small traits ([`ItemContainer`], [`WidgetSink`],
//! [`DefaultLayout`], and [`ItemMetadata`]) and drive a [`FoodFilter`] from
//! their frame loop and UI callbacks.
//!
//! The pieces are usable on their own:
//!
//! - [`is_edible`]: the food predicate.
//! - [`RankCache`]: per-session memoized trade and healing scores, with the
//!   healing values coming from [`HEALING_TABLE`].
//! - [`CompactSlots`]: the destination geometry, captured in reading order.
//! - [`plan_layout`] and [`LayoutPlan`]: the pure planning step and the thin
//!   adapter that pushes a plan to the host.
//! - [`restore`]: the undo path.
//!
//! ## Minimal example
//!
//! ```rust
//! use pantry_filter::{
//!     DefaultLayout, FilterConfig, FoodFilter, ItemContainer, ItemId, ItemMetadata,
//!     ItemSnapshot, LookupError, SlotPos, TickOutcome, WidgetSink,
//! };
//!
//! /// A one-row container of `(item id, position, hidden)` cells.
//! struct Bank {
//!     open: bool,
//!     cells: Vec<(i32, SlotPos, bool)>,
//! }
//!
//! impl ItemContainer<usize> for Bank {
//!     fn is_open(&self) -> bool {
//!         self.open
//!     }
//!
//!     fn snapshot(&self, out: &mut Vec<ItemSnapshot<usize>>) {
//!         out.clear();
//!         out.extend(self.cells.iter().enumerate().map(|(index, &(id, pos, hidden))| {
//!             ItemSnapshot {
//!                 widget: index,
//!                 index,
//!                 item_id: ItemId(id),
//!                 pos,
//!                 original: SlotPos::new(36 * index as i32, 0),
//!                 hidden,
//!             }
//!         }));
//!     }
//! }
//!
//! impl WidgetSink<usize> for Bank {
//!     fn set_hidden(&mut self, widget: usize, hidden: bool) {
//!         self.cells[widget].2 = hidden;
//!     }
//!
//!     fn set_position(&mut self, widget: usize, pos: SlotPos) {
//!         self.cells[widget].1 = pos;
//!     }
//! }
//!
//! impl DefaultLayout for Bank {
//!     fn relayout_default(&mut self) {}
//! }
//!
//! struct Db;
//!
//! impl ItemMetadata for Db {
//!     fn canonicalize(&self, id: ItemId) -> ItemId {
//!         id
//!     }
//!     fn inventory_actions(&self, id: ItemId) -> Option<Vec<String>> {
//!         Some(if id.0 == 385 { vec!["Eat".into()] } else { vec!["Wield".into()] })
//!     }
//!     fn display_name(&self, _id: ItemId) -> Option<String> {
//!         None
//!     }
//!     fn market_price(&self, _id: ItemId) -> Result<i64, LookupError> {
//!         Ok(1_000)
//!     }
//! }
//!
//! let mut bank = Bank {
//!     open: true,
//!     cells: vec![(1333, SlotPos::new(0, 0), false), (385, SlotPos::new(36, 0), false)],
//! };
//! let mut filter = FoodFilter::<usize>::new(FilterConfig::default());
//!
//! assert_eq!(filter.tick(&mut bank, &Db), TickOutcome::Opened);
//! assert!(filter.toggle_filter(&mut bank, &Db));
//!
//! // The scimitar is hidden and the shark moved into the first cell.
//! assert_eq!(bank.cells[0], (1333, SlotPos::new(0, 0), true));
//! assert_eq!(bank.cells[1], (385, SlotPos::new(0, 0), false));
//!
//! // Closing the bank restores everything.
//! bank.open = false;
//! assert_eq!(filter.tick(&mut bank, &Db), TickOutcome::Closed { restored: true });
//! assert_eq!(bank.cells[1], (385, SlotPos::new(36, 0), false));
//! assert!(!filter.signals().filter_enabled);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `tracing`: emit `tracing` events for state transitions, cache clears, and
//!   failed price lookups.
//! - `serde`: derive `Serialize`/`Deserialize` for [`FilterConfig`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod classify;
mod config;
mod filter;
pub mod host;
mod item;
mod layout;
mod nutrition;
mod rank;
mod restore;
mod slots;

pub use classify::{EAT_ACTION, is_edible};
pub use config::FilterConfig;
pub use filter::{FilterPhase, FilterSignals, FoodFilter, GameState, TickOutcome};
pub use host::{
    DefaultLayout, FilterHost, ItemContainer, ItemMetadata, LookupError, WidgetSink,
};
pub use item::{ItemId, ItemSnapshot, SlotPos};
pub use layout::{LayoutPlan, LayoutSummary, Placement, Target, plan_layout, visible_ids};
pub use nutrition::{HEALING_TABLE, healing_for_name};
pub use rank::{RankCache, RankKey, SortMode};
pub use restore::restore;
pub use slots::CompactSlots;
