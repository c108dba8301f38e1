// Copyright (c) Minibank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod bank;
pub mod cli;
pub mod commands;
pub mod format;
pub mod models;
pub mod repl;
pub mod session;
pub mod utils;
