// Copyright 2025 the Pantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A bank session with the food filter.
//!
//! Opens a bank, filters it down to food, switches sort order, deposits an
//! item, hops worlds, and closes the bank, printing the grid after each step.
//!
//! Pass a JSON config file to override the initial sort order, for example
//! `{ "sortByGePrice": false }`. Set `RUST_LOG=pantry_filter=trace` to see
//! every layout pass.
//!
//! Run:
//! - `cargo run -p pantry_demos --example bank_session`
//! - `cargo run -p pantry_demos --example bank_session -- config.json`

use std::error::Error;

use pantry_demos::{DemoBank, DemoDb};
use pantry_filter::{FilterConfig, FoodFilter, GameState, TickOutcome};
use tracing_subscriber::EnvFilter;

fn load_config() -> Result<FilterConfig, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(FilterConfig::default()),
    }
}

fn show(step: &str, bank: &DemoBank, db: &DemoDb, outcome: Option<TickOutcome>) {
    match outcome {
        Some(outcome) => println!("== {step} ({outcome:?})"),
        None => println!("== {step}"),
    }
    println!("{}", bank.render(db));
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = load_config()?;
    tracing::info!(?config, "loaded filter config");

    let db = DemoDb::new();
    // Scimitar, shark, bones, trout, an empty cell, noted lobsters, manta ray,
    // coins, cake, chocolate cake, monkfish, stew.
    let mut bank = DemoBank::new(
        &[1333, 385, 536, 333, 0, 380, 391, 995, 1891, 1897, 7946, 2003],
        4,
    );
    let mut food = FoodFilter::<usize>::new(config);

    let outcome = food.tick(&mut bank, &db);
    show("bank opened", &bank, &db, Some(outcome));

    food.toggle_filter(&mut bank, &db);
    show(
        &format!("filter on, sorted by {:?}", food.sort_mode()),
        &bank,
        &db,
        None,
    );

    food.toggle_sort_mode(&mut bank, &db);
    show(
        &format!("sorted by {:?}", food.sort_mode()),
        &bank,
        &db,
        None,
    );

    bank.deposit(379);
    let outcome = food.tick(&mut bank, &db);
    show("deposited a lobster", &bank, &db, Some(outcome));

    food.on_game_state(GameState::Hopping);
    let outcome = food.tick(&mut bank, &db);
    show("hopped worlds", &bank, &db, Some(outcome));

    bank.open = false;
    let outcome = food.tick(&mut bank, &db);
    bank.open = true;
    show("bank closed and reopened", &bank, &db, Some(outcome));

    println!("signals: {:?}", food.signals());
    food.shut_down(&mut bank);
    Ok(())
}
