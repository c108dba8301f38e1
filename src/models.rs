// Copyright (c) 2026 Minibank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single ledger entry. Positive amounts are deposits, negative ones are
/// withdrawals. Movements are append-only; insertion order is chronological.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub amount: Decimal,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub owner: String,
    /// Lowercased initials of the owner, used for login lookup. Derived
    /// deterministically from `owner`; uniqueness is not enforced.
    pub username: String,
    pub movements: Vec<Movement>,
    /// Annual interest rate in percent, e.g. 1.2 for 1.2%.
    pub interest_rate: Decimal,
    pub pin: u32,
    /// ISO 4217 code, e.g. "EUR".
    pub currency: String,
    /// BCP 47 tag, e.g. "pt-PT". Drives number and date formatting.
    pub locale: String,
}

impl Account {
    pub fn new(
        owner: &str,
        movements: Vec<Movement>,
        interest_rate: Decimal,
        pin: u32,
        currency: &str,
        locale: &str,
    ) -> Self {
        Account {
            owner: owner.to_string(),
            username: derive_username(owner),
            movements,
            interest_rate,
            pin,
            currency: currency.to_string(),
            locale: locale.to_string(),
        }
    }

    /// Balance is always the sum of movements; it is never stored.
    pub fn balance(&self) -> Decimal {
        self.movements.iter().map(|m| m.amount).sum()
    }

    /// Sum of all deposits.
    pub fn total_in(&self) -> Decimal {
        self.movements
            .iter()
            .filter(|m| m.amount > Decimal::ZERO)
            .map(|m| m.amount)
            .sum()
    }

    /// Absolute sum of all withdrawals.
    pub fn total_out(&self) -> Decimal {
        let out: Decimal = self
            .movements
            .iter()
            .filter(|m| m.amount < Decimal::ZERO)
            .map(|m| m.amount)
            .sum();
        out.abs()
    }

    /// Sum of per-deposit interest at `interest_rate`. A deposit only
    /// contributes if its own interest is at least one currency unit;
    /// smaller contributions are excluded entirely, not rounded.
    pub fn interest(&self) -> Decimal {
        self.movements
            .iter()
            .filter(|m| m.amount > Decimal::ZERO)
            .map(|m| m.amount * self.interest_rate / Decimal::ONE_HUNDRED)
            .filter(|i| *i >= Decimal::ONE)
            .sum()
    }

    /// Derived view of the movements sorted ascending by amount. Recomputed
    /// on every call so it can never go stale against the underlying list.
    pub fn sorted_movements(&self) -> Vec<Movement> {
        let mut sorted = self.movements.clone();
        sorted.sort_by(|a, b| a.amount.cmp(&b.amount));
        sorted
    }

    pub fn push(&mut self, amount: Decimal, date: DateTime<Utc>) {
        self.movements.push(Movement { amount, date });
    }

    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or(&self.owner)
    }
}

/// Lowercased initials of each word of the owner name: "Jonas Schmedtmann"
/// becomes "js".
pub fn derive_username(owner: &str) -> String {
    owner
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_lowercase())
        .collect()
}
