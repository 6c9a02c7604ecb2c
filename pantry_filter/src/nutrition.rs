// Copyright 2025 the Pantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Healing amounts by item name.
//!
//! This is data, not logic: an ordered list of `(substring, healing)` rules
//! matched against the lowercased display name. The first rule whose substring
//! occurs in the name wins. Order is significant and must not be "fixed"; for
//! example `"cake"` precedes `"chocolate cake"`, so a chocolate cake heals 12.

/// Ordered `(lowercase substring, healing amount)` rules.
pub const HEALING_TABLE: &[(&str, u32)] = &[
    ("anglerfish", 22),
    ("manta ray", 22),
    ("dark crab", 22),
    ("sea turtle", 21),
    ("shark", 20),
    ("potato with cheese", 16),
    ("curry", 19),
    ("stew", 11),
    ("monkfish", 16),
    ("karambwan", 18),
    ("anchovy pizza", 18),
    ("pineapple pizza", 22),
    ("meat pizza", 16),
    ("plain pizza", 14),
    ("tuna potato", 22),
    ("egg potato", 16),
    ("chilli potato", 14),
    ("baked potato", 11),
    ("bass", 13),
    ("swordfish", 14),
    ("lobster", 12),
    ("trout", 7),
    ("salmon", 9),
    ("cake", 12),
    ("chocolate cake", 15),
    ("apple pie", 14),
    ("meat pie", 12),
    ("garden pie", 12),
    ("summer pie", 22),
    ("wild pie", 22),
    ("admiral pie", 16),
    ("fish pie", 12),
    ("redberry pie", 10),
    ("jugbler", 15),
    ("jangerberries", 2),
    ("strawberry", 1),
    ("watermelon", 5),
    ("banana", 2),
    ("tomato", 4),
    ("cabbage", 1),
];

/// Healing amount for a display name, or `0` if no rule matches.
///
/// Matching is case-insensitive.
#[must_use]
pub fn healing_for_name(name: &str) -> u32 {
    let name = name.to_lowercase();
    HEALING_TABLE
        .iter()
        .find(|(pattern, _)| name.contains(pattern))
        .map_or(0, |&(_, healing)| healing)
}
