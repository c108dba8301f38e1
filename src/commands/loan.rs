// Copyright (c) 2026 Minibank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::session::App;
use crate::utils::parse_decimal;

/// `loan <amount>`: an approved request is scheduled, not applied — the
/// credit lands once the review delay elapses and a tick picks it up. An
/// invalid request is ignored without feedback. The countdown resets on
/// every attempt.
pub fn handle(app: &mut App, m: &clap::ArgMatches, now: DateTime<Utc>) -> Result<()> {
    match parse_decimal(m.get_one::<String>("amount").unwrap()) {
        Ok(amount) => {
            let _ = app.request_loan(amount, now);
        }
        Err(_) => app.touch(now),
    }
    Ok(())
}
