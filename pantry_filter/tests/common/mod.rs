// Copyright 2025 the Pantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory bank and item database shared by the integration tests.

#![allow(dead_code, reason = "not every test file uses every helper")]

use std::cell::Cell;
use std::collections::HashMap;

use pantry_filter::{
    DefaultLayout, ItemContainer, ItemId, ItemMetadata, ItemSnapshot, LookupError, SlotPos,
    WidgetSink,
};

/// Cell pitch of the mock grid.
pub const CELL_W: i32 = 36;
pub const CELL_H: i32 = 32;

/// One cell of the mock container.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BankCell {
    pub item: ItemId,
    pub pos: SlotPos,
    pub original: SlotPos,
    pub hidden: bool,
}

/// A bank container laid out in rows of `columns` cells.
#[derive(Debug)]
pub struct MockBank {
    pub open: bool,
    pub cells: Vec<BankCell>,
    pub relayouts: u32,
    pub mutations: u32,
}

impl MockBank {
    /// Lays out `items` row-major, `columns` per row, and opens the bank.
    pub fn new(items: &[i32], columns: usize) -> Self {
        let cells = items
            .iter()
            .enumerate()
            .map(|(index, &id)| {
                let pos = grid_pos(index, columns);
                BankCell {
                    item: ItemId(id),
                    pos,
                    original: pos,
                    hidden: false,
                }
            })
            .collect();
        Self {
            open: true,
            cells,
            relayouts: 0,
            mutations: 0,
        }
    }

    /// The ids of visible cells, in reading order of their current positions.
    pub fn visible_in_reading_order(&self) -> Vec<ItemId> {
        let mut visible: Vec<_> = self.cells.iter().filter(|c| !c.hidden).collect();
        visible.sort_by(|a, b| a.pos.reading_order(&b.pos));
        visible.into_iter().map(|c| c.item).collect()
    }

    /// The cell showing `id`.
    pub fn cell_of(&self, id: i32) -> &BankCell {
        self.cells
            .iter()
            .find(|c| c.item == ItemId(id))
            .expect("item is in the bank")
    }

    /// Returns `true` if every cell is shown at its original position.
    pub fn is_pristine(&self) -> bool {
        self.cells.iter().all(|c| !c.hidden && c.pos == c.original)
    }
}

pub fn grid_pos(index: usize, columns: usize) -> SlotPos {
    let col = i32::try_from(index % columns).unwrap();
    let row = i32::try_from(index / columns).unwrap();
    SlotPos::new(col * CELL_W, row * CELL_H)
}

impl ItemContainer<usize> for MockBank {
    fn is_open(&self) -> bool {
        self.open
    }

    fn snapshot(&self, out: &mut Vec<ItemSnapshot<usize>>) {
        // Cells stay reportable while the container is hidden.
        out.clear();
        out.extend(self.cells.iter().enumerate().map(|(index, c)| ItemSnapshot {
            widget: index,
            index,
            item_id: c.item,
            pos: c.pos,
            original: c.original,
            hidden: c.hidden,
        }));
    }
}

impl WidgetSink<usize> for MockBank {
    fn set_hidden(&mut self, widget: usize, hidden: bool) {
        self.cells[widget].hidden = hidden;
        self.mutations += 1;
    }

    fn set_position(&mut self, widget: usize, pos: SlotPos) {
        self.cells[widget].pos = pos;
        self.mutations += 1;
    }
}

impl DefaultLayout for MockBank {
    fn relayout_default(&mut self) {
        self.relayouts += 1;
        for cell in &mut self.cells {
            cell.pos = cell.original;
        }
    }
}

/// Static item facts.
#[derive(Clone, Debug)]
pub struct ItemFacts {
    pub name: &'static str,
    pub edible: bool,
    pub price: Option<i64>,
}

/// A small item database with call counters.
///
/// Noted variants are `base + 1` and canonicalize to `base`.
#[derive(Debug, Default)]
pub struct ItemDb {
    pub items: HashMap<i32, ItemFacts>,
    pub price_calls: Cell<u32>,
    pub name_calls: Cell<u32>,
}

impl ItemDb {
    pub fn with(mut self, id: i32, name: &'static str, edible: bool, price: Option<i64>) -> Self {
        self.items.insert(id, ItemFacts { name, edible, price });
        self
    }

    /// Shark, lobster, trout, manta ray, cake, rune scimitar, and a dragon bones with no price.
    pub fn standard() -> Self {
        Self::default()
            .with(SHARK, "Shark", true, Some(1_000))
            .with(LOBSTER, "Lobster", true, Some(200))
            .with(TROUT, "Trout", true, Some(30))
            .with(MANTA, "Manta ray", true, Some(1_500))
            .with(CAKE, "Cake", true, Some(200))
            .with(SCIMITAR, "Rune scimitar", false, Some(15_000))
            .with(BONES, "Dragon bones", false, None)
    }
}

pub const SHARK: i32 = 385;
pub const SHARK_NOTED: i32 = 386;
pub const LOBSTER: i32 = 379;
pub const TROUT: i32 = 333;
pub const MANTA: i32 = 391;
pub const CAKE: i32 = 1891;
pub const SCIMITAR: i32 = 1333;
pub const BONES: i32 = 536;

impl ItemMetadata for ItemDb {
    fn canonicalize(&self, id: ItemId) -> ItemId {
        if !self.items.contains_key(&id.0) && self.items.contains_key(&(id.0 - 1)) {
            ItemId(id.0 - 1)
        } else {
            id
        }
    }

    fn inventory_actions(&self, id: ItemId) -> Option<Vec<String>> {
        self.items.get(&id.0).map(|facts| {
            let first = if facts.edible { "Eat" } else { "Wield" };
            vec![first.to_string(), "Drop".to_string()]
        })
    }

    fn display_name(&self, id: ItemId) -> Option<String> {
        self.name_calls.set(self.name_calls.get() + 1);
        self.items.get(&id.0).map(|facts| facts.name.to_string())
    }

    fn market_price(&self, id: ItemId) -> Result<i64, LookupError> {
        self.price_calls.set(self.price_calls.get() + 1);
        match self.items.get(&id.0) {
            Some(facts) => facts.price.ok_or(LookupError::Unavailable(id)),
            None => Err(LookupError::Unknown(id)),
        }
    }
}
