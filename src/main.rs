// Copyright (c) 2026 Minibank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use minibank::{bank::Bank, repl, session::App};

fn main() -> Result<()> {
    let mut app = App::new(Bank::demo());
    repl::run(&mut app)
}
