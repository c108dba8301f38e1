// Copyright (c) 2026 Minibank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::commands::movements;
use crate::format;
use crate::session::App;
use crate::utils::parse_pin;

/// `login <username> <pin>`: on success show the welcome line, the current
/// date, and the full account view. A bad username, PIN, or non-numeric PIN
/// forces the logged-out state with no further explanation.
pub fn login(app: &mut App, m: &clap::ArgMatches, now: DateTime<Utc>) -> Result<()> {
    let username = m.get_one::<String>("username").unwrap();
    let ok = match parse_pin(m.get_one::<String>("pin").unwrap()) {
        Some(pin) => app.login(username, pin, now).is_ok(),
        None => {
            app.end_session();
            false
        }
    };
    if ok {
        if let Some(account) = app.current() {
            println!("Welcome back, {}", account.first_name());
            println!("{}", format::session_date(now, &account.locale));
            movements::render(account, false, now);
        }
    } else {
        println!("Log in to get started");
    }
    Ok(())
}

pub fn logout(app: &mut App) {
    app.end_session();
    println!("Log in to get started");
}

/// `close <username> <pin>`: both must match the current session's account.
/// Failure gives no feedback at all.
pub fn close(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    let username = m.get_one::<String>("username").unwrap();
    if let Some(pin) = parse_pin(m.get_one::<String>("pin").unwrap()) {
        if app.close(username, pin).is_ok() {
            println!("Log in to get started");
        }
    }
    Ok(())
}
