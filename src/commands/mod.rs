// Copyright (c) Minibank.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod loan;
pub mod movements;
pub mod session;
pub mod transfer;
