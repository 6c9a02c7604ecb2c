// Copyright 2025 the Pantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use pantry_filter::{
    CompactSlots, DefaultLayout, FilterConfig, FoodFilter, HEALING_TABLE, ItemContainer, ItemId,
    ItemMetadata, ItemSnapshot, LayoutPlan, LookupError, RankCache, SlotPos, SortMode, WidgetSink,
    plan_layout,
};

const COLUMNS: usize = 8;

/// Roughly two thirds food; prices and names repeat to produce ties.
struct Db;

impl ItemMetadata for Db {
    fn canonicalize(&self, id: ItemId) -> ItemId {
        id
    }

    fn inventory_actions(&self, id: ItemId) -> Option<Vec<String>> {
        let first = if id.0 % 3 == 0 { "Wield" } else { "Eat" };
        Some(vec![first.to_string(), "Drop".to_string()])
    }

    fn display_name(&self, id: ItemId) -> Option<String> {
        let index = usize::try_from(id.0).unwrap_or(0) % HEALING_TABLE.len();
        Some(HEALING_TABLE[index].0.to_string())
    }

    fn market_price(&self, id: ItemId) -> Result<i64, LookupError> {
        Ok(i64::from(id.0 % 97) * 25)
    }
}

#[derive(Clone)]
struct Grid {
    cells: Vec<(ItemId, SlotPos, SlotPos, bool)>,
}

impl Grid {
    fn new(n: usize) -> Self {
        let cells = (0..n)
            .map(|i| {
                let col = i32::try_from(i % COLUMNS).unwrap_or(0);
                let row = i32::try_from(i / COLUMNS).unwrap_or(i32::MAX / 32);
                let pos = SlotPos::new(col * 36, row * 32);
                // Spread ids so adjacent cells rarely share scores.
                let id = ItemId(i32::try_from((i * 7_919) % 20_000 + 1).unwrap_or(1));
                (id, pos, pos, false)
            })
            .collect();
        Self { cells }
    }
}

impl ItemContainer<usize> for Grid {
    fn is_open(&self) -> bool {
        true
    }

    fn snapshot(&self, out: &mut Vec<ItemSnapshot<usize>>) {
        out.clear();
        out.extend(
            self.cells
                .iter()
                .enumerate()
                .map(|(index, &(item_id, pos, original, hidden))| ItemSnapshot {
                    widget: index,
                    index,
                    item_id,
                    pos,
                    original,
                    hidden,
                }),
        );
    }
}

impl WidgetSink<usize> for Grid {
    fn set_hidden(&mut self, widget: usize, hidden: bool) {
        self.cells[widget].3 = hidden;
    }

    fn set_position(&mut self, widget: usize, pos: SlotPos) {
        self.cells[widget].1 = pos;
    }
}

impl DefaultLayout for Grid {
    fn relayout_default(&mut self) {
        for cell in &mut self.cells {
            cell.1 = cell.2;
        }
    }
}

fn snapshot(grid: &Grid) -> Vec<ItemSnapshot<usize>> {
    let mut items = Vec::new();
    grid.snapshot(&mut items);
    items
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/plan");

    for n in [100usize, 400, 800] {
        let grid = Grid::new(n);
        let items = snapshot(&grid);
        let mut slots = CompactSlots::new();
        slots.capture(&items);
        group.throughput(Throughput::Elements(n as u64));

        // Every score computed from scratch, as on the first frame of a session.
        group.bench_with_input(BenchmarkId::new("cold_cache", n), &items, |b, items| {
            b.iter_batched(
                RankCache::new,
                |mut ranks| {
                    let mut plan = LayoutPlan::new();
                    let summary = plan_layout(
                        items,
                        &slots,
                        &Db,
                        &mut ranks,
                        SortMode::MarketValue,
                        &mut plan,
                    );
                    black_box((summary, plan));
                },
                BatchSize::SmallInput,
            );
        });

        for mode in [SortMode::MarketValue, SortMode::Nutrition] {
            let mut ranks = RankCache::new();
            let mut plan = LayoutPlan::new();
            let label = format!("warm_cache_{mode:?}");
            group.bench_with_input(BenchmarkId::new(label, n), &items, |b, items| {
                b.iter(|| {
                    let summary = plan_layout(items, &slots, &Db, &mut ranks, mode, &mut plan);
                    black_box(summary);
                });
            });
        }
    }

    group.finish();
}

fn bench_steady_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/tick");

    // Per-frame cost once the layout has settled: plan, then apply with no changes.
    for n in [100usize, 400, 800] {
        let mut grid = Grid::new(n);
        let mut filter = FoodFilter::<usize>::new(FilterConfig::default());
        filter.tick(&mut grid, &Db);
        filter.toggle_filter(&mut grid, &Db);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(BenchmarkId::new("settled", n), |b| {
            b.iter(|| black_box(filter.tick(&mut grid, &Db)));
        });
    }

    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/toggle");

    // Engage then disengage: capture, first layout, and full restore.
    for n in [100usize, 400, 800] {
        let grid = Grid::new(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("engage_restore", n), &grid, |b, grid| {
            b.iter_batched(
                || (grid.clone(), FoodFilter::<usize>::new(FilterConfig::default())),
                |(mut grid, mut filter)| {
                    filter.tick(&mut grid, &Db);
                    filter.toggle_filter(&mut grid, &Db);
                    filter.toggle_filter(&mut grid, &Db);
                    black_box(grid);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_plan, bench_steady_tick, bench_toggle);
criterion_main!(benches);
