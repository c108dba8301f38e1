// Copyright (c) 2026 Minibank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use minibank::bank::Bank;
use minibank::commands::movements::movement_rows;
use minibank::format;

fn now() -> DateTime<Utc> {
    "2024-01-20T13:00:00Z".parse().unwrap()
}

#[test]
fn rows_list_most_recent_movement_first() {
    let bank = Bank::demo();
    let account = bank.find("js").unwrap();
    let rows = movement_rows(account, false, now());

    assert_eq!(rows.len(), account.movements.len());
    // The last appended movement (1300 EUR) is the top row.
    assert_eq!(rows[0].index, account.movements.len());
    assert_eq!(rows[0].amount, "1 300,00 €");
    assert_eq!(rows[0].kind, "DEPOSIT");
    // The oldest movement sits at the bottom with index 1.
    assert_eq!(rows.last().unwrap().index, 1);
    assert_eq!(rows.last().unwrap().amount, "200,00 €");
}

#[test]
fn withdrawals_are_tagged_as_such() {
    let bank = Bank::demo();
    let account = bank.find("jd").unwrap();
    let rows = movement_rows(account, false, now());
    // Top row is the -30 USD withdrawal.
    assert_eq!(rows[0].kind, "WITHDRAWAL");
    assert_eq!(rows[0].amount, "-$30.00");
}

#[test]
fn sorted_view_orders_by_amount_without_touching_the_ledger() {
    let bank = Bank::demo();
    let account = bank.find("js").unwrap();

    let sorted = movement_rows(account, true, now());
    // Ascending by amount, displayed in reverse: largest on top.
    assert_eq!(sorted[0].amount, "25 000,00 €");
    assert_eq!(sorted.last().unwrap().amount, "-642,21 €");

    // Toggling back reproduces the insertion order, newest first.
    let unsorted = movement_rows(account, false, now());
    let ledger_newest_first: Vec<String> = account
        .movements
        .iter()
        .rev()
        .map(|m| format::money(m.amount, &account.currency, &account.locale))
        .collect();
    let displayed: Vec<String> = unsorted.into_iter().map(|r| r.amount).collect();
    assert_eq!(displayed, ledger_newest_first);
}

#[test]
fn row_dates_follow_the_account_locale() {
    let bank = Bank::demo();
    let jd = bank.find("jd").unwrap();
    let rows = movement_rows(jd, false, now());
    // 2024-01-18 is two days before `now`.
    assert_eq!(rows[0].date, "2 days ago, 12:01:20");
    // 2019-11-01 is far in the past: absolute month-first format for en-US.
    assert_eq!(rows.last().unwrap().date, "11/01/2019, 13:15:33");
}
