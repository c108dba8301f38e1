// Copyright (c) 2026 Minibank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::bank::LedgerError;
use crate::commands::movements;
use crate::session::App;
use crate::utils::parse_decimal;

/// `transfer <to> <amount>`: on success both ledgers gain a movement and the
/// view is rebuilt; on failure a one-line diagnostic and nothing else. The
/// inactivity countdown resets on every attempt either way.
pub fn handle(app: &mut App, m: &clap::ArgMatches, now: DateTime<Utc>) -> Result<()> {
    let to = m.get_one::<String>("to").unwrap();
    let outcome = match parse_decimal(m.get_one::<String>("amount").unwrap()) {
        Ok(amount) => app.transfer(to, amount, now),
        Err(_) => {
            app.touch(now);
            Err(LedgerError::InvalidAmount)
        }
    };
    match outcome {
        Ok(()) => {
            if let Some(account) = app.current() {
                movements::render(account, app.sorted(), now);
            }
        }
        Err(e) => println!("transfer failed: {}", e),
    }
    Ok(())
}
