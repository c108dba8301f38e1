// Copyright (c) 2026 Minibank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::bank::Bank;
use crate::utils::{maybe_print_json, pretty_table};

#[derive(Serialize)]
pub struct AccountRow {
    pub owner: String,
    pub username: String,
    pub currency: String,
    pub interest_rate: String,
}

/// `accounts`: list the demo accounts so users can discover the logins.
/// PINs are deliberately left out of the listing.
pub fn handle(bank: &Bank, m: &clap::ArgMatches) -> Result<()> {
    let data: Vec<AccountRow> = bank
        .accounts
        .iter()
        .map(|a| AccountRow {
            owner: a.owner.clone(),
            username: a.username.clone(),
            currency: a.currency.clone(),
            interest_rate: format!("{}%", a.interest_rate),
        })
        .collect();
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &data)? {
        let rows = data
            .into_iter()
            .map(|r| vec![r.owner, r.username, r.currency, r.interest_rate])
            .collect();
        println!(
            "{}",
            pretty_table(&["Owner", "Username", "CCY", "Interest"], rows)
        );
    }
    Ok(())
}
