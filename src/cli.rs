// Copyright (c) Minibank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

/// The command grammar of the interactive session. The REPL parses every
/// input line against this tree with the binary name suppressed.
pub fn build_cli() -> Command {
    Command::new("minibank")
        .about("Interactive in-memory banking demo")
        .disable_version_flag(true)
        .subcommand(
            Command::new("login")
                .about("Log in to an account")
                .arg(Arg::new("username").required(true))
                .arg(Arg::new("pin").required(true)),
        )
        .subcommand(
            Command::new("transfer")
                .about("Transfer money to another account")
                .arg(Arg::new("to").required(true).help("Beneficiary username"))
                .arg(Arg::new("amount").required(true)),
        )
        .subcommand(
            Command::new("loan")
                .about("Request a loan (credited after a short review delay)")
                .arg(Arg::new("amount").required(true)),
        )
        .subcommand(
            Command::new("close")
                .about("Close the current account")
                .arg(Arg::new("username").required(true))
                .arg(Arg::new("pin").required(true)),
        )
        .subcommand(Command::new("sort").about("Toggle sorting movements by amount"))
        .subcommand(json_flags(
            Command::new("summary").about("Show movements and totals for the current account"),
        ))
        .subcommand(json_flags(
            Command::new("accounts").about("List the demo accounts"),
        ))
        .subcommand(Command::new("logout").about("End the current session"))
        .subcommand(Command::new("quit").about("Leave the demo"))
}
