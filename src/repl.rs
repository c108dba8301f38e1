// Copyright (c) 2026 Minibank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The interactive loop. Before each command the pending work is ticked
//! (loan credits, countdown expiry), then the line is parsed against the
//! clap grammar and dispatched; after each command the remaining session
//! time is shown. Everything runs on this one thread.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::Utc;

use crate::cli;
use crate::commands;
use crate::format;
use crate::session::{App, TickEvent};

pub fn run(app: &mut App) -> Result<()> {
    println!("Minibank demo. Log in to get started ('accounts' lists the demo logins).");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let now = Utc::now();

        for event in app.tick(now) {
            match event {
                TickEvent::LoanCredited { username, amount } => {
                    if let Some(account) = app.current() {
                        if account.username == username {
                            println!(
                                "Loan of {} credited",
                                format::money(amount, &account.currency, &account.locale)
                            );
                            commands::movements::render(account, app.sorted(), now);
                        }
                    }
                }
                TickEvent::SessionExpired => println!("Log in to get started"),
            }
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }
        let matches = match cli::build_cli()
            .no_binary_name(true)
            .try_get_matches_from(words)
        {
            Ok(matches) => matches,
            Err(e) => {
                let _ = e.print();
                continue;
            }
        };

        match matches.subcommand() {
            Some(("login", sub)) => commands::session::login(app, sub, now)?,
            Some(("logout", _)) => commands::session::logout(app),
            Some(("close", sub)) => commands::session::close(app, sub)?,
            Some(("transfer", sub)) => commands::transfer::handle(app, sub, now)?,
            Some(("loan", sub)) => commands::loan::handle(app, sub, now)?,
            Some(("sort", _)) => commands::movements::toggle(app, now)?,
            Some(("summary", sub)) => commands::movements::handle(app, sub, now)?,
            Some(("accounts", sub)) => commands::accounts::handle(&app.bank, sub)?,
            Some(("quit", _)) => break,
            _ => {}
        }

        if let Some(remaining) = app.remaining(now) {
            println!(
                "You will be logged out in: {}",
                format::countdown(remaining)
            );
        }
    }
    Ok(())
}
