// Copyright (c) 2026 Minibank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Locale-aware rendering of amounts, movement dates, and the logout
//! countdown. Only the conventions the demo accounts need are modelled:
//! "en-US" gets US separators and month-first dates, everything else gets
//! the European style the "pt-PT" account uses.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

struct Conventions {
    group: char,
    decimal: char,
    symbol_first: bool,
    month_first: bool,
}

fn conventions(locale: &str) -> Conventions {
    match locale {
        "en-US" => Conventions {
            group: ',',
            decimal: '.',
            symbol_first: true,
            month_first: true,
        },
        _ => Conventions {
            group: ' ',
            decimal: ',',
            symbol_first: false,
            month_first: false,
        },
    }
}

fn currency_symbol(code: &str) -> &str {
    match code {
        "EUR" => "€",
        "USD" => "$",
        "GBP" => "£",
        other => other,
    }
}

/// Locale-styled currency string with two decimal places, e.g.
/// `$1,234.56` (en-US) or `1 234,56 €` (pt-PT).
pub fn money(amount: Decimal, currency: &str, locale: &str) -> String {
    let conv = conventions(locale);
    let rounded = amount.round_dp(2);
    let negative = rounded < Decimal::ZERO;
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    let body = format!(
        "{}{}{}",
        group_digits(int_part, conv.group),
        conv.decimal,
        frac_part
    );
    let symbol = currency_symbol(currency);
    let positive = if conv.symbol_first {
        format!("{}{}", symbol, body)
    } else {
        format!("{} {}", body, symbol)
    };
    if negative {
        format!("-{}", positive)
    } else {
        positive
    }
}

/// Movement timestamps within the last 7 days render as a relative phrase
/// with a time component; older ones as a locale-ordered absolute date-time.
pub fn movement_date(date: DateTime<Utc>, now: DateTime<Utc>, locale: &str) -> String {
    let days_past = (now - date).num_days().abs();
    if days_past > 7 {
        return absolute(date, locale, true);
    }
    let time = date.format("%H:%M:%S");
    match days_past {
        0 => format!("Today, {}", time),
        1 => format!("Yesterday, {}", time),
        n => format!("{} days ago, {}", n, time),
    }
}

/// The "as of" line shown on login: locale-ordered date plus hours/minutes.
pub fn session_date(now: DateTime<Utc>, locale: &str) -> String {
    absolute(now, locale, false)
}

fn absolute(date: DateTime<Utc>, locale: &str, seconds: bool) -> String {
    let fmt = match (conventions(locale).month_first, seconds) {
        (true, true) => "%m/%d/%Y, %H:%M:%S",
        (true, false) => "%m/%d/%Y, %H:%M",
        (false, true) => "%d/%m/%Y, %H:%M:%S",
        (false, false) => "%d/%m/%Y, %H:%M",
    };
    date.format(fmt).to_string()
}

/// Remaining session time as "MM:SS", clamped at zero.
pub fn countdown(remaining: Duration) -> String {
    let secs = remaining.num_seconds().max(0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn group_digits(int_part: &str, sep: char) -> String {
    let digits: Vec<char> = int_part.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            out.push(sep);
        }
        out.push(*c);
    }
    out
}
