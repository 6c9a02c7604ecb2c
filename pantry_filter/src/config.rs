// Copyright 2025 the Pantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! User preferences read once at startup.

use crate::rank::SortMode;

/// Startup configuration for [`FoodFilter`](crate::FoodFilter).
///
/// With the `serde` feature this (de)serializes as
/// `{"sortByGePrice": true}`; a missing key keeps the default.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterConfig {
    /// Sort by trade value rather than healing when the overlay starts.
    #[cfg_attr(feature = "serde", serde(rename = "sortByGePrice"))]
    pub sort_by_market_value: bool,
}

impl FilterConfig {
    /// Config group the host stores this preference under.
    pub const GROUP: &'static str = "foodbankfilter";

    /// Key of [`FilterConfig::sort_by_market_value`] within [`FilterConfig::GROUP`].
    pub const SORT_BY_MARKET_VALUE_KEY: &'static str = "sortByGePrice";

    /// The sort mode the overlay starts in.
    #[must_use]
    pub const fn initial_sort_mode(&self) -> SortMode {
        if self.sort_by_market_value {
            SortMode::MarketValue
        } else {
            SortMode::Nutrition
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            sort_by_market_value: true,
        }
    }
}
