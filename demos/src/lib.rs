// Copyright 2025 the Pantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small in-memory bank and item database for the demos.
//!
//! Cells are laid out row-major on a 36x32 pitch. [`DemoBank::render`] draws
//! the grid as text so each demo step can be eyeballed.

use std::collections::HashMap;
use std::fmt::Write as _;

use pantry_filter::{
    DefaultLayout, ItemContainer, ItemId, ItemMetadata, ItemSnapshot, LookupError, SlotPos,
    WidgetSink,
};

const CELL_W: i32 = 36;
const CELL_H: i32 = 32;

#[derive(Copy, Clone, Debug)]
struct Cell {
    item: ItemId,
    pos: SlotPos,
    original: SlotPos,
    hidden: bool,
}

/// A bank container shown as a grid of cells.
#[derive(Debug)]
pub struct DemoBank {
    /// Whether the bank interface is showing.
    pub open: bool,
    columns: usize,
    cells: Vec<Cell>,
}

impl DemoBank {
    /// Lays out `items` row-major, `columns` per row. Id 0 is an empty cell.
    pub fn new(items: &[i32], columns: usize) -> Self {
        let columns = columns.max(1);
        let cells = items
            .iter()
            .zip(0_i32..)
            .map(|(&id, index)| {
                let pos = grid_pos(index, columns);
                Cell {
                    item: ItemId(id),
                    pos,
                    original: pos,
                    hidden: false,
                }
            })
            .collect();
        Self {
            open: true,
            columns,
            cells,
        }
    }

    /// Adds an item to the end of the bank, as a deposit would.
    pub fn deposit(&mut self, id: i32) {
        let index = i32::try_from(self.cells.len()).unwrap_or(i32::MAX);
        let pos = grid_pos(index, self.columns);
        self.cells.push(Cell {
            item: ItemId(id),
            pos,
            original: pos,
            hidden: false,
        });
    }

    /// Draws visible cells at their current grid positions.
    pub fn render(&self, db: &DemoDb) -> String {
        let rows = self
            .cells
            .iter()
            .map(|c| c.pos.y / CELL_H + 1)
            .max()
            .unwrap_or(0);
        let mut out = String::new();
        for row in 0..rows {
            for col in 0..self.columns {
                let at = SlotPos::new(i32::try_from(col).unwrap_or(0) * CELL_W, row * CELL_H);
                let label = self
                    .cells
                    .iter()
                    .find(|c| !c.hidden && c.pos == at)
                    .map_or("·", |c| db.label(c.item));
                let _ = write!(out, "{label:<16}");
            }
            out.push('\n');
        }
        out
    }
}

fn grid_pos(index: i32, columns: usize) -> SlotPos {
    let columns = i32::try_from(columns).unwrap_or(i32::MAX);
    SlotPos::new(index % columns * CELL_W, index / columns * CELL_H)
}

impl ItemContainer<usize> for DemoBank {
    fn is_open(&self) -> bool {
        self.open
    }

    fn snapshot(&self, out: &mut Vec<ItemSnapshot<usize>>) {
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

impl WidgetSink<usize> for DemoBank {
    fn set_hidden(&mut self, widget: usize, hidden: bool) {
        if let Some(cell) = self.cells.get_mut(widget) {
            cell.hidden = hidden;
        }
    }

    fn set_position(&mut self, widget: usize, pos: SlotPos) {
        if let Some(cell) = self.cells.get_mut(widget) {
            cell.pos = pos;
        }
    }
}

impl DefaultLayout for DemoBank {
    fn relayout_default(&mut self) {
        for cell in &mut self.cells {
            cell.pos = cell.original;
        }
    }
}

#[derive(Debug)]
struct Entry {
    name: &'static str,
    edible: bool,
    price: Option<i64>,
}

/// Item facts for the demo bank. Noted items are `base + 1`.
#[derive(Debug)]
pub struct DemoDb {
    items: HashMap<i32, Entry>,
}

impl DemoDb {
    /// A handful of foods and non-foods.
    pub fn new() -> Self {
        let items = [
            (385, "Shark", true, Some(1_020)),
            (379, "Lobster", true, Some(210)),
            (333, "Trout", true, Some(45)),
            (391, "Manta ray", true, Some(1_480)),
            (1891, "Cake", true, Some(180)),
            (1897, "Chocolate cake", true, Some(240)),
            (7946, "Monkfish", true, Some(310)),
            (2003, "Stew", true, None),
            (1333, "Rune scimitar", false, Some(15_000)),
            (536, "Dragon bones", false, Some(2_300)),
            (995, "Coins", false, Some(1)),
        ]
        .into_iter()
        .map(|(id, name, edible, price)| (id, Entry { name, edible, price }))
        .collect();
        Self { items }
    }

    fn label(&self, id: ItemId) -> &'static str {
        self.items
            .get(&self.canonicalize(id).0)
            .map_or("?", |entry| entry.name)
    }
}

impl Default for DemoDb {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemMetadata for DemoDb {
    fn canonicalize(&self, id: ItemId) -> ItemId {
        if !self.items.contains_key(&id.0) && self.items.contains_key(&(id.0 - 1)) {
            ItemId(id.0 - 1)
        } else {
            id
        }
    }

    fn inventory_actions(&self, id: ItemId) -> Option<Vec<String>> {
        self.items.get(&id.0).map(|entry| {
            let first = if entry.edible { "Eat" } else { "Wield" };
            vec![first.to_string(), "Drop".to_string()]
        })
    }

    fn display_name(&self, id: ItemId) -> Option<String> {
        self.items.get(&id.0).map(|entry| entry.name.to_string())
    }

    fn market_price(&self, id: ItemId) -> Result<i64, LookupError> {
        match self.items.get(&id.0) {
            Some(entry) => entry.price.ok_or(LookupError::Unavailable(id)),
            None => Err(LookupError::Unknown(id)),
        }
    }
}
