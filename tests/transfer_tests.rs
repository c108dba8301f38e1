// Copyright (c) 2026 Minibank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Duration, Utc};
use minibank::bank::{Bank, LedgerError};
use minibank::session::App;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn t0() -> DateTime<Utc> {
    "2024-01-18T12:00:00Z".parse().unwrap()
}

fn setup() -> App {
    let mut app = App::new(Bank::demo());
    app.login("js", 1111, t0()).unwrap();
    app
}

#[test]
fn valid_transfer_moves_amount_between_accounts() {
    let mut app = setup();
    let before: Decimal = app.bank.find("js").unwrap().balance() + app.bank.find("jd").unwrap().balance();
    let js_len = app.bank.find("js").unwrap().movements.len();
    let jd_len = app.bank.find("jd").unwrap().movements.len();

    app.transfer("jd", dec("90"), t0()).unwrap();

    let js = app.bank.find("js").unwrap();
    let jd = app.bank.find("jd").unwrap();
    assert_eq!(js.movements.len(), js_len + 1);
    assert_eq!(jd.movements.len(), jd_len + 1);
    assert_eq!(js.movements.last().unwrap().amount, dec("-90"));
    assert_eq!(jd.movements.last().unwrap().amount, dec("90"));
    // The combined total is conserved.
    assert_eq!(js.balance() + jd.balance(), before);
}

#[test]
fn overdraft_leaves_both_ledgers_unmodified() {
    let mut app = setup();
    let balance = app.bank.find("js").unwrap().balance();
    let js_len = app.bank.find("js").unwrap().movements.len();
    let jd_len = app.bank.find("jd").unwrap().movements.len();

    let err = app.transfer("jd", balance + dec("0.01"), t0()).unwrap_err();
    assert_eq!(err, LedgerError::InsufficientFunds);
    assert_eq!(app.bank.find("js").unwrap().movements.len(), js_len);
    assert_eq!(app.bank.find("jd").unwrap().movements.len(), jd_len);
}

#[test]
fn transfer_rejects_self_unknown_and_nonpositive() {
    let mut app = setup();
    assert_eq!(
        app.transfer("js", dec("10"), t0()).unwrap_err(),
        LedgerError::SelfTransfer
    );
    assert_eq!(
        app.transfer("zz", dec("10"), t0()).unwrap_err(),
        LedgerError::UnknownBeneficiary("zz".to_string())
    );
    assert_eq!(
        app.transfer("jd", dec("0"), t0()).unwrap_err(),
        LedgerError::InvalidAmount
    );
    assert_eq!(
        app.transfer("jd", dec("-5"), t0()).unwrap_err(),
        LedgerError::InvalidAmount
    );
}

#[test]
fn transfer_requires_a_session() {
    let mut app = App::new(Bank::demo());
    assert_eq!(
        app.transfer("jd", dec("10"), t0()).unwrap_err(),
        LedgerError::NotLoggedIn
    );
}

#[test]
fn every_attempt_resets_the_countdown() {
    let mut app = setup();
    let later = t0() + Duration::minutes(5);

    // A failing attempt still pushes the deadline out.
    let _ = app.transfer("jd", dec("-1"), later);
    let remaining = app.remaining(later).unwrap();
    assert_eq!(remaining, Duration::minutes(10));
}
