//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

pub mod ip;
pub mod southbound;
pub mod yang;
