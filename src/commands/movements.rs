// Copyright (c) 2026 Minibank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::format;
use crate::models::Account;
use crate::session::App;
use crate::utils::{maybe_print_json, pretty_table};

#[derive(Serialize)]
pub struct MovementRow {
    pub index: usize,
    pub kind: String,
    pub date: String,
    pub amount: String,
}

/// Rows for the movement display, most recently appended first. When
/// `sorted` is set the rows come from the derived amount-ascending copy,
/// still listed in reverse.
pub fn movement_rows(account: &Account, sorted: bool, now: DateTime<Utc>) -> Vec<MovementRow> {
    let movements = if sorted {
        account.sorted_movements()
    } else {
        account.movements.clone()
    };
    let mut rows: Vec<MovementRow> = movements
        .iter()
        .enumerate()
        .map(|(i, m)| MovementRow {
            index: i + 1,
            kind: if m.amount < rust_decimal::Decimal::ZERO {
                "WITHDRAWAL".to_string()
            } else {
                "DEPOSIT".to_string()
            },
            date: format::movement_date(m.date, now, &account.locale),
            amount: format::money(m.amount, &account.currency, &account.locale),
        })
        .collect();
    rows.reverse();
    rows
}

/// Rebuild the whole account view: the movement table, then balance and
/// the in/out/interest totals.
pub fn render(account: &Account, sorted: bool, now: DateTime<Utc>) {
    let rows: Vec<Vec<String>> = movement_rows(account, sorted, now)
        .into_iter()
        .map(|r| vec![r.index.to_string(), r.kind, r.date, r.amount])
        .collect();
    println!("{}", pretty_table(&["#", "Type", "Date", "Amount"], rows));
    let ccy = &account.currency;
    let loc = &account.locale;
    println!("Balance:  {}", format::money(account.balance(), ccy, loc));
    println!("In:       {}", format::money(account.total_in(), ccy, loc));
    println!("Out:      {}", format::money(account.total_out(), ccy, loc));
    println!("Interest: {}", format::money(account.interest(), ccy, loc));
}

/// `summary`: re-render the current account, or emit the rows as JSON.
pub fn handle(app: &App, m: &clap::ArgMatches, now: DateTime<Utc>) -> Result<()> {
    let Some(account) = app.current() else {
        println!("Log in to get started");
        return Ok(());
    };
    let rows = movement_rows(account, app.sorted(), now);
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &rows)? {
        render(account, app.sorted(), now);
    }
    Ok(())
}

/// `sort`: flip the session's sort flag and re-render.
pub fn toggle(app: &mut App, now: DateTime<Utc>) -> Result<()> {
    if app.toggle_sort().is_err() {
        println!("Log in to get started");
        return Ok(());
    }
    if let Some(account) = app.current() {
        render(account, app.sorted(), now);
    }
    Ok(())
}
