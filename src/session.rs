// Copyright (c) 2026 Minibank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Application state: the bank, the authenticated session (if any), and the
//! deadline-based work the demo suspends — the 10-minute inactivity logout
//! and the 5-second delayed loan credits. Everything runs in one execution
//! context; deadlines are plain data evaluated against an explicit `now` on
//! every tick, so nothing here spawns threads or timers.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::bank::{Bank, LedgerError};
use crate::models::Account;

pub const SESSION_MINUTES: i64 = 10;
pub const LOAN_DELAY_SECONDS: i64 = 5;

/// The currently authenticated account plus its per-session view state.
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub sorted: bool,
    pub deadline: DateTime<Utc>,
}

/// An approved loan waiting out its review delay. Keyed to the account so it
/// can be cancelled if the account is closed or the session ends first.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingLoan {
    pub username: String,
    pub amount: Decimal,
    pub due: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    LoanCredited { username: String, amount: Decimal },
    SessionExpired,
}

pub struct App {
    pub bank: Bank,
    session: Option<Session>,
    pending_loans: Vec<PendingLoan>,
}

impl App {
    pub fn new(bank: Bank) -> Self {
        App {
            bank,
            session: None,
            pending_loans: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<&Account> {
        let session = self.session.as_ref()?;
        self.bank.find(&session.username)
    }

    pub fn sorted(&self) -> bool {
        self.session.as_ref().map(|s| s.sorted).unwrap_or(false)
    }

    pub fn logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn pending_loans(&self) -> &[PendingLoan] {
        &self.pending_loans
    }

    /// Remaining countdown time, if a session is active.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.session.as_ref().map(|s| s.deadline - now)
    }

    /// On success the account becomes the current session with a fresh
    /// countdown and an unsorted view. On failure any existing session ends;
    /// the caller surfaces nothing beyond the logged-out state.
    pub fn login(
        &mut self,
        username: &str,
        pin: u32,
        now: DateTime<Utc>,
    ) -> Result<(), LedgerError> {
        match self.bank.authenticate(username, pin) {
            Ok(account) => {
                let username = account.username.clone();
                self.end_session();
                self.session = Some(Session {
                    username,
                    sorted: false,
                    deadline: now + Duration::minutes(SESSION_MINUTES),
                });
                Ok(())
            }
            Err(e) => {
                self.end_session();
                Err(e)
            }
        }
    }

    /// Clear the session and cancel its pending loans.
    pub fn end_session(&mut self) {
        if let Some(session) = self.session.take() {
            self.pending_loans
                .retain(|loan| loan.username != session.username);
        }
    }

    /// Reset the inactivity countdown. Happens on every transfer and loan
    /// attempt, successful or not.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if let Some(session) = &mut self.session {
            session.deadline = now + Duration::minutes(SESSION_MINUTES);
        }
    }

    pub fn transfer(
        &mut self,
        to: &str,
        amount: Decimal,
        now: DateTime<Utc>,
    ) -> Result<(), LedgerError> {
        self.touch(now);
        let from = self
            .session
            .as_ref()
            .ok_or(LedgerError::NotLoggedIn)?
            .username
            .clone();
        self.bank.transfer(&from, to, amount, now)
    }

    /// Validate a loan request and, if approved, schedule the credit
    /// `LOAN_DELAY_SECONDS` out. The movement is only appended when a later
    /// tick reaches the due time.
    pub fn request_loan(
        &mut self,
        amount: Decimal,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, LedgerError> {
        self.touch(now);
        let username = self
            .session
            .as_ref()
            .ok_or(LedgerError::NotLoggedIn)?
            .username
            .clone();
        self.bank.loan_qualifies(&username, amount)?;
        let due = now + Duration::seconds(LOAN_DELAY_SECONDS);
        self.pending_loans.push(PendingLoan {
            username,
            amount,
            due,
        });
        Ok(due)
    }

    /// Close the current account. Requires the username and PIN to match the
    /// session's account exactly; on success the account leaves the store,
    /// its pending loans are cancelled, and the session ends.
    pub fn close(&mut self, username: &str, pin: u32) -> Result<(), LedgerError> {
        let session = self.session.as_ref().ok_or(LedgerError::NotLoggedIn)?;
        let account = self
            .bank
            .find(&session.username)
            .ok_or(LedgerError::NotLoggedIn)?;
        if account.username != username || account.pin != pin {
            return Err(LedgerError::BadCredentials);
        }
        self.bank.close(username);
        self.pending_loans.retain(|loan| loan.username != username);
        self.session = None;
        Ok(())
    }

    pub fn toggle_sort(&mut self) -> Result<bool, LedgerError> {
        let session = self.session.as_mut().ok_or(LedgerError::NotLoggedIn)?;
        session.sorted = !session.sorted;
        Ok(session.sorted)
    }

    /// Advance the cooperative clock: apply loan credits that have come due,
    /// then expire the session if the countdown has elapsed. Due loans are
    /// applied first — their due time always precedes the deadline that was
    /// reset alongside them.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Vec<TickEvent> {
        let mut events = Vec::new();

        let (due, pending): (Vec<PendingLoan>, Vec<PendingLoan>) = self
            .pending_loans
            .drain(..)
            .partition(|loan| loan.due <= now);
        self.pending_loans = pending;
        for loan in due {
            self.bank.credit(&loan.username, loan.amount, now);
            events.push(TickEvent::LoanCredited {
                username: loan.username,
                amount: loan.amount,
            });
        }

        if let Some(session) = &self.session {
            if now >= session.deadline {
                self.end_session();
                events.push(TickEvent::SessionExpired);
            }
        }
        events
    }
}
