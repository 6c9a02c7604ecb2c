// Copyright 2025 the Pantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ranking scores and their per-session cache.

use core::cmp::Ordering;

use hashbrown::HashMap;

use crate::host::ItemMetadata;
use crate::item::ItemId;
use crate::nutrition::healing_for_name;

/// Which score leads the ordering of visible food.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Highest trade value first, healing breaks ties.
    #[default]
    MarketValue,
    /// Highest healing first, trade value breaks ties.
    Nutrition,
}

impl SortMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::MarketValue => Self::Nutrition,
            Self::Nutrition => Self::MarketValue,
        }
    }

    /// Returns `true` for [`SortMode::Nutrition`].
    #[must_use]
    pub const fn is_nutrition(self) -> bool {
        matches!(self, Self::Nutrition)
    }
}

/// Composite sort key for one item under a [`SortMode`].
///
/// Keys order best-first: higher `primary`, then higher `secondary`, then the
/// lower raw id.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RankKey {
    /// Score of the active mode.
    pub primary: u32,
    /// Score of the other mode.
    pub secondary: u32,
    /// Raw (non-canonical) item id.
    pub id: ItemId,
}

impl RankKey {
    /// Builds a key from both scores.
    #[must_use]
    pub fn new(mode: SortMode, market: u32, nutrition: u32, id: ItemId) -> Self {
        let (primary, secondary) = match mode {
            SortMode::MarketValue => (market, nutrition),
            SortMode::Nutrition => (nutrition, market),
        };
        Self {
            primary,
            secondary,
            id,
        }
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .primary
            .cmp(&self.primary)
            .then(other.secondary.cmp(&self.secondary))
            .then(self.id.cmp(&other.id))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Memoized market and nutrition scores, keyed by canonical item id.
///
/// Entries are inserted on first lookup and never updated; the only way to
/// refresh a score is [`RankCache::clear`], which hosts call on session
/// boundaries. A failed price lookup is cached as `0` like any other result,
/// so a broken price source costs one call per item per session.
#[derive(Clone, Debug, Default)]
pub struct RankCache {
    market: HashMap<ItemId, u32>,
    nutrition: HashMap<ItemId, u32>,
}

impl RankCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trade value of `id`, clamped to be non-negative.
    pub fn market_value<M>(&mut self, meta: &M, id: ItemId) -> u32
    where
        M: ItemMetadata + ?Sized,
    {
        let canonical = meta.canonicalize(id);
        *self
            .market
            .entry(canonical)
            .or_insert_with(|| match meta.market_price(canonical) {
                Ok(price) => u32::try_from(price.max(0)).unwrap_or(u32::MAX),
                Err(_err) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(item = canonical.get(), error = %_err, "price lookup failed, caching 0");
                    0
                }
            })
    }

    /// Healing amount of `id` from [`HEALING_TABLE`](crate::HEALING_TABLE).
    pub fn nutrition_value<M>(&mut self, meta: &M, id: ItemId) -> u32
    where
        M: ItemMetadata + ?Sized,
    {
        let canonical = meta.canonicalize(id);
        *self.nutrition.entry(canonical).or_insert_with(|| {
            meta.display_name(canonical)
                .map_or(0, |name| healing_for_name(&name))
        })
    }

    /// Sort key for `id` under `mode`.
    pub fn key<M>(&mut self, meta: &M, id: ItemId, mode: SortMode) -> RankKey
    where
        M: ItemMetadata + ?Sized,
    {
        let market = self.market_value(meta, id);
        let nutrition = self.nutrition_value(meta, id);
        RankKey::new(mode, market, nutrition, id)
    }

    /// Drops every cached score.
    pub fn clear(&mut self) {
        self.market.clear();
        self.nutrition.clear();
    }

    /// Number of cached market values.
    #[must_use]
    pub fn market_len(&self) -> usize {
        self.market.len()
    }

    /// Number of cached nutrition values.
    #[must_use]
    pub fn nutrition_len(&self) -> usize {
        self.nutrition.len()
    }

    /// Returns `true` if neither table holds an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.market.is_empty() && self.nutrition.is_empty()
    }
}
