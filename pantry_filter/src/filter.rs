// Copyright 2025 the Pantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The filter state machine.
//!
//! [`FoodFilter`] is driven from one thread by three kinds of input:
//!
//! 1) [`FoodFilter::tick`] once per host frame. It polls whether the container
//!    is open, restores the layout if the container closed while filtered, and
//!    otherwise re-applies the filter every frame so items the host adds,
//!    removes, or reorders are picked up.
//! 2) User commands: [`FoodFilter::toggle_filter`] and
//!    [`FoodFilter::toggle_sort_mode`].
//! 3) Game state changes via [`FoodFilter::on_game_state`], which drop cached
//!    scores on session boundaries.
//!
//! The view binds to [`FoodFilter::signals`] and can poll
//! [`FoodFilter::revision`] to find out whether anything changed.

use alloc::vec::Vec;

use crate::config::FilterConfig;
use crate::host::{FilterHost, ItemMetadata};
use crate::item::ItemSnapshot;
use crate::layout::{LayoutPlan, LayoutSummary, plan_layout};
use crate::rank::{RankCache, SortMode};
use crate::restore::restore;
use crate::slots::CompactSlots;

/// Client connection states relevant to cached scores.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    /// At the login screen.
    LoginScreen,
    /// Credentials submitted, not yet in game.
    LoggingIn,
    /// Loading a region.
    Loading,
    /// In game.
    LoggedIn,
    /// Lost the connection to the server.
    ConnectionLost,
    /// Switching worlds.
    Hopping,
}

impl GameState {
    /// Returns `true` for states after which cached prices may be stale.
    #[must_use]
    pub const fn is_session_boundary(self) -> bool {
        matches!(self, Self::Hopping | Self::LoginScreen | Self::ConnectionLost)
    }
}

/// Coarse state of the filter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FilterPhase {
    /// The container is closed.
    Idle,
    /// The container is open and shown as the host laid it out.
    OpenUnfiltered,
    /// The container is open and showing only food.
    OpenFiltered,
}

/// Display-facing view of the filter state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSignals {
    /// Filtering is engaged.
    pub filter_enabled: bool,
    /// The container was open at the last tick.
    pub container_open: bool,
    /// Food is ordered by healing rather than trade value.
    pub sort_by_nutrition: bool,
}

/// What a [`FoodFilter::tick`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The container is closed and was already closed.
    Idle,
    /// The container just opened. Filtering is off until toggled.
    Opened,
    /// The container just closed; `restored` is `true` if a filtered layout was undone.
    Closed {
        /// Whether a restore ran.
        restored: bool,
    },
    /// The container is open and unfiltered.
    Unfiltered,
    /// The filter was re-applied; `None` if the frame had nothing to lay out.
    Filtered(Option<LayoutSummary>),
}

/// Filters an item container down to its food, ranked and compacted.
///
/// `W` is the host's cell handle. All host access goes through the traits in
/// [`host`](crate::host), passed into each call; the filter itself owns only
/// its state, the score cache, the captured slots, and reusable frame buffers.
#[derive(Debug)]
pub struct FoodFilter<W> {
    engaged: bool,
    container_open: bool,
    sort: SortMode,
    ranks: RankCache,
    slots: CompactSlots,
    frame: Vec<ItemSnapshot<W>>,
    plan: LayoutPlan<W>,
    revision: u64,
}

impl<W> FoodFilter<W> {
    /// Creates a disengaged filter using the configured initial sort mode.
    #[must_use]
    pub fn new(config: FilterConfig) -> Self {
        Self {
            engaged: false,
            container_open: false,
            sort: config.initial_sort_mode(),
            ranks: RankCache::new(),
            slots: CompactSlots::new(),
            frame: Vec::new(),
            plan: LayoutPlan::new(),
            revision: 0,
        }
    }

    /// Current display signals.
    #[must_use]
    pub fn signals(&self) -> FilterSignals {
        FilterSignals {
            filter_enabled: self.engaged,
            container_open: self.container_open,
            sort_by_nutrition: self.sort.is_nutrition(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> FilterPhase {
        match (self.container_open, self.engaged) {
            (false, _) => FilterPhase::Idle,
            (true, false) => FilterPhase::OpenUnfiltered,
            (true, true) => FilterPhase::OpenFiltered,
        }
    }

    /// Returns `true` while filtering is engaged.
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// The active sort mode.
    #[must_use]
    pub fn sort_mode(&self) -> SortMode {
        self.sort
    }

    /// Cached scores.
    #[must_use]
    pub fn rank_cache(&self) -> &RankCache {
        &self.ranks
    }

    /// Slots captured for the current engagement, empty when disengaged.
    #[must_use]
    pub fn compact_slots(&self) -> &CompactSlots {
        &self.slots
    }

    /// The plan produced by the most recent layout pass.
    #[must_use]
    pub fn last_plan(&self) -> &LayoutPlan<W> {
        &self.plan
    }

    /// Monotonic counter bumped whenever a signal changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// React to a client state change.
    ///
    /// Session boundaries drop every cached score. Filtering is left alone; the
    /// container closing on its own drives the restore on the next tick.
    pub fn on_game_state(&mut self, state: GameState) {
        if !state.is_session_boundary() {
            return;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            ?state,
            market = self.ranks.market_len(),
            nutrition = self.ranks.nutrition_len(),
            "session boundary, clearing cached scores"
        );
        self.ranks.clear();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn set_engaged(&mut self, engaged: bool) {
        if self.engaged != engaged {
            self.engaged = engaged;
            self.bump_revision();

            #[cfg(feature = "tracing")]
            tracing::info!(engaged, "food filter toggled");
        }
    }
}

impl<W: Copy> FoodFilter<W> {
    /// Advance one host frame.
    pub fn tick<H, M>(&mut self, host: &mut H, meta: &M) -> TickOutcome
    where
        H: FilterHost<W> + ?Sized,
        M: ItemMetadata + ?Sized,
    {
        let open = host.is_open();
        let changed = open != self.container_open;
        if changed {
            self.container_open = open;
            self.bump_revision();

            #[cfg(feature = "tracing")]
            tracing::debug!(open, "container visibility changed");
        }

        if !open {
            if self.engaged {
                self.set_engaged(false);
                self.restore_layout(host);
                return TickOutcome::Closed { restored: true };
            }
            return if changed {
                TickOutcome::Closed { restored: false }
            } else {
                TickOutcome::Idle
            };
        }

        // A toggle can land between the container opening and the first tick
        // that sees it open; in that case the filter is already engaged.
        if self.engaged {
            TickOutcome::Filtered(self.relayout(host, meta))
        } else if changed {
            TickOutcome::Opened
        } else {
            TickOutcome::Unfiltered
        }
    }

    /// Flip filtering on or off.
    ///
    /// Ignored, returning `false`, while the container is closed. Engaging
    /// captures fresh slot geometry and lays out immediately; disengaging
    /// restores the host layout.
    pub fn toggle_filter<H, M>(&mut self, host: &mut H, meta: &M) -> bool
    where
        H: FilterHost<W> + ?Sized,
        M: ItemMetadata + ?Sized,
    {
        if !host.is_open() {
            return false;
        }

        self.set_engaged(!self.engaged);
        if self.engaged {
            host.snapshot(&mut self.frame);
            self.slots.capture(&self.frame);

            #[cfg(feature = "tracing")]
            tracing::debug!(slots = self.slots.len(), "captured compact slots");

            self.relayout(host, meta);
        } else {
            self.restore_layout(host);
        }
        true
    }

    /// Switch between trade-value and healing order.
    ///
    /// Re-applies the filter at once when engaged, reusing the captured slots.
    pub fn toggle_sort_mode<H, M>(&mut self, host: &mut H, meta: &M)
    where
        H: FilterHost<W> + ?Sized,
        M: ItemMetadata + ?Sized,
    {
        self.sort = self.sort.toggled();
        self.bump_revision();

        #[cfg(feature = "tracing")]
        tracing::info!(mode = ?self.sort, "sort mode changed");

        if self.engaged && host.is_open() {
            self.relayout(host, meta);
        }
    }

    /// Tear the filter down: restore the host layout and drop every cache.
    pub fn shut_down<H>(mut self, host: &mut H)
    where
        H: FilterHost<W> + ?Sized,
    {
        self.restore_layout(host);
        self.ranks.clear();

        #[cfg(feature = "tracing")]
        tracing::debug!("food filter shut down");
    }

    fn relayout<H, M>(&mut self, host: &mut H, meta: &M) -> Option<LayoutSummary>
    where
        H: FilterHost<W> + ?Sized,
        M: ItemMetadata + ?Sized,
    {
        host.snapshot(&mut self.frame);
        self.slots.ensure_captured(&self.frame);

        let summary = plan_layout(
            &self.frame,
            &self.slots,
            meta,
            &mut self.ranks,
            self.sort,
            &mut self.plan,
        )?;
        let _calls = self.plan.apply(host);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            visible = summary.visible,
            filtered = summary.filtered,
            overflow = summary.overflow,
            calls = _calls,
            "applied food layout"
        );
        Some(summary)
    }

    fn restore_layout<H>(&mut self, host: &mut H)
    where
        H: FilterHost<W> + ?Sized,
    {
        host.snapshot(&mut self.frame);
        let _calls = restore(&self.frame, &mut self.slots, host);
        self.plan.clear();

        #[cfg(feature = "tracing")]
        tracing::debug!(calls = _calls, "restored host layout");
    }
}
