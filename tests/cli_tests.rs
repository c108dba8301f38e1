// Copyright (c) 2026 Minibank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use minibank::bank::Bank;
use minibank::session::App;
use minibank::{cli, commands};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn t0() -> DateTime<Utc> {
    "2024-01-18T12:00:00Z".parse().unwrap()
}

fn setup() -> App {
    App::new(Bank::demo())
}

#[test]
fn login_command_authenticates() {
    let mut app = setup();
    let matches = cli::build_cli().get_matches_from(["minibank", "login", "js", "1111"]);
    if let Some(("login", sub)) = matches.subcommand() {
        commands::session::login(&mut app, sub, t0()).unwrap();
    } else {
        panic!("no login subcommand");
    }
    assert!(app.logged_in());
    assert_eq!(app.current().unwrap().username, "js");
}

#[test]
fn non_numeric_pin_fails_silently() {
    let mut app = setup();
    let matches = cli::build_cli().get_matches_from(["minibank", "login", "js", "abcd"]);
    if let Some(("login", sub)) = matches.subcommand() {
        commands::session::login(&mut app, sub, t0()).unwrap();
    } else {
        panic!("no login subcommand");
    }
    assert!(!app.logged_in());
}

#[test]
fn transfer_command_appends_to_both_ledgers() {
    let mut app = setup();
    app.login("js", 1111, t0()).unwrap();
    let matches = cli::build_cli().get_matches_from(["minibank", "transfer", "jd", "90.50"]);
    if let Some(("transfer", sub)) = matches.subcommand() {
        commands::transfer::handle(&mut app, sub, t0()).unwrap();
    } else {
        panic!("no transfer subcommand");
    }
    assert_eq!(
        app.bank.find("js").unwrap().movements.last().unwrap().amount,
        dec("-90.50")
    );
    assert_eq!(
        app.bank.find("jd").unwrap().movements.last().unwrap().amount,
        dec("90.50")
    );
}

#[test]
fn transfer_command_with_bad_amount_changes_nothing() {
    let mut app = setup();
    app.login("js", 1111, t0()).unwrap();
    let js_len = app.bank.find("js").unwrap().movements.len();
    let matches = cli::build_cli().get_matches_from(["minibank", "transfer", "jd", "ninety"]);
    if let Some(("transfer", sub)) = matches.subcommand() {
        commands::transfer::handle(&mut app, sub, t0()).unwrap();
    } else {
        panic!("no transfer subcommand");
    }
    assert_eq!(app.bank.find("js").unwrap().movements.len(), js_len);
}

#[test]
fn loan_command_schedules_a_pending_credit() {
    let mut app = setup();
    app.login("js", 1111, t0()).unwrap();
    let matches = cli::build_cli().get_matches_from(["minibank", "loan", "1000"]);
    if let Some(("loan", sub)) = matches.subcommand() {
        commands::loan::handle(&mut app, sub, t0()).unwrap();
    } else {
        panic!("no loan subcommand");
    }
    assert_eq!(app.pending_loans().len(), 1);
    assert_eq!(app.pending_loans()[0].amount, dec("1000"));
}

#[test]
fn close_command_requires_matching_credentials() {
    let mut app = setup();
    app.login("js", 1111, t0()).unwrap();

    let matches = cli::build_cli().get_matches_from(["minibank", "close", "js", "9999"]);
    if let Some(("close", sub)) = matches.subcommand() {
        commands::session::close(&mut app, sub).unwrap();
    } else {
        panic!("no close subcommand");
    }
    assert_eq!(app.bank.accounts.len(), 2);
    assert!(app.logged_in());

    let matches = cli::build_cli().get_matches_from(["minibank", "close", "js", "1111"]);
    if let Some(("close", sub)) = matches.subcommand() {
        commands::session::close(&mut app, sub).unwrap();
    } else {
        panic!("no close subcommand");
    }
    assert_eq!(app.bank.accounts.len(), 1);
    assert!(!app.logged_in());
}

#[test]
fn repl_grammar_parses_without_binary_name() {
    // The REPL feeds raw words with the binary name suppressed.
    let res = cli::build_cli()
        .no_binary_name(true)
        .try_get_matches_from(["summary", "--json"]);
    let matches = res.unwrap();
    let (name, sub) = matches.subcommand().unwrap();
    assert_eq!(name, "summary");
    assert!(sub.get_flag("json"));

    assert!(
        cli::build_cli()
            .no_binary_name(true)
            .try_get_matches_from(["definitely-not-a-command"])
            .is_err()
    );
}
