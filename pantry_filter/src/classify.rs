// Copyright 2025 the Pantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edibility classification.

use crate::host::ItemMetadata;
use crate::item::ItemId;

/// The inventory action that marks an item as food.
pub const EAT_ACTION: &str = "Eat";

/// Returns `true` if `id` is food.
///
/// The identifier is canonicalized first, so noted or placeholder variants of
/// a food share its classification. An item is food when its inventory actions
/// contain [`EAT_ACTION`], compared case-insensitively. Missing metadata means
/// "not food".
///
/// This is a pure predicate; it does no caching of its own.
#[must_use]
pub fn is_edible<M>(meta: &M, id: ItemId) -> bool
where
    M: ItemMetadata + ?Sized,
{
    let canonical = meta.canonicalize(id);
    meta.inventory_actions(canonical).is_some_and(|actions| {
        actions
            .iter()
            .any(|action| action.eq_ignore_ascii_case(EAT_ACTION))
    })
}
