// Copyright (c) 2026 Minibank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Account, Movement};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("amount must be positive")]
    InvalidAmount,
    #[error("beneficiary '{0}' not found")]
    UnknownBeneficiary(String),
    #[error("cannot transfer to the same account")]
    SelfTransfer,
    #[error("amount exceeds available balance")]
    InsufficientFunds,
    #[error("no deposit covers 10% of the requested amount")]
    NoQualifyingDeposit,
    #[error("invalid credentials")]
    BadCredentials,
    #[error("no active session")]
    NotLoggedIn,
}

/// The in-memory account store. Everything resets on program start; the only
/// way an account leaves the store is a successful closure.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    pub accounts: Vec<Account>,
}

impl Bank {
    pub fn new(accounts: Vec<Account>) -> Self {
        Bank { accounts }
    }

    /// The hardcoded sample dataset the demo starts from.
    pub fn demo() -> Self {
        Bank::new(vec![
            Account::new(
                "Jonas Schmedtmann",
                vec![
                    mv("200", "2019-11-18T21:31:17.178Z"),
                    mv("455.23", "2019-12-23T07:42:02.383Z"),
                    mv("-306.5", "2020-01-28T09:15:04.904Z"),
                    mv("25000", "2020-04-01T10:17:24.185Z"),
                    mv("-642.21", "2020-05-08T14:11:59.604Z"),
                    mv("-133.9", "2020-05-27T17:01:17.194Z"),
                    mv("79.97", "2024-01-14T18:49:59.371Z"),
                    mv("1300", "2024-01-18T12:01:20.894Z"),
                ],
                dec("1.2"),
                1111,
                "EUR",
                "pt-PT",
            ),
            Account::new(
                "Jessica Davis",
                vec![
                    mv("5000", "2019-11-01T13:15:33.035Z"),
                    mv("3400", "2019-11-30T09:48:16.867Z"),
                    mv("-150", "2019-12-25T06:04:23.907Z"),
                    mv("-790", "2020-01-25T14:18:46.235Z"),
                    mv("-3210", "2020-02-05T16:33:06.386Z"),
                    mv("-1000", "2020-04-10T14:43:26.374Z"),
                    mv("8500", "2024-01-14T18:49:59.371Z"),
                    mv("-30", "2024-01-18T12:01:20.894Z"),
                ],
                dec("1.5"),
                2222,
                "USD",
                "en-US",
            ),
        ])
    }

    /// First account matching the username; uniqueness is not enforced.
    pub fn find(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username == username)
    }

    pub fn find_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.username == username)
    }

    fn position(&self, username: &str) -> Option<usize> {
        self.accounts.iter().position(|a| a.username == username)
    }

    pub fn authenticate(&self, username: &str, pin: u32) -> Result<&Account, LedgerError> {
        self.find(username)
            .filter(|a| a.pin == pin)
            .ok_or(LedgerError::BadCredentials)
    }

    /// Move `amount` from one account to another: one movement of `-amount`
    /// on the sender, one of `+amount` on the recipient, both dated `now`.
    /// On any validation failure neither account is touched.
    pub fn transfer(
        &mut self,
        from: &str,
        to: &str,
        amount: Decimal,
        now: DateTime<Utc>,
    ) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }
        let from_idx = self.position(from).ok_or(LedgerError::NotLoggedIn)?;
        let to_idx = self
            .position(to)
            .ok_or_else(|| LedgerError::UnknownBeneficiary(to.to_string()))?;
        if from_idx == to_idx {
            return Err(LedgerError::SelfTransfer);
        }
        if amount > self.accounts[from_idx].balance() {
            return Err(LedgerError::InsufficientFunds);
        }
        self.accounts[from_idx].push(-amount, now);
        self.accounts[to_idx].push(amount, now);
        Ok(())
    }

    /// A loan is granted only if some past movement is at least 10% of the
    /// requested amount.
    pub fn loan_qualifies(&self, username: &str, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }
        let account = self.find(username).ok_or(LedgerError::NotLoggedIn)?;
        let threshold = amount / Decimal::TEN;
        if account.movements.iter().any(|m| m.amount >= threshold) {
            Ok(())
        } else {
            Err(LedgerError::NoQualifyingDeposit)
        }
    }

    /// Apply an approved loan. A no-op if the account has since been closed.
    pub fn credit(&mut self, username: &str, amount: Decimal, now: DateTime<Utc>) {
        if let Some(account) = self.find_mut(username) {
            account.push(amount, now);
        }
    }

    /// Remove an account from the store by username.
    pub fn close(&mut self, username: &str) -> Option<Account> {
        let idx = self.position(username)?;
        Some(self.accounts.remove(idx))
    }
}

fn mv(amount: &str, date: &str) -> Movement {
    Movement {
        amount: dec(amount),
        date: date.parse().expect("valid demo timestamp"),
    }
}

fn dec(s: &str) -> Decimal {
    s.parse().expect("valid demo amount")
}
