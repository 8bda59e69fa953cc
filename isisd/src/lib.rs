//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
// Sponsored by NLnet as part of the Next Generation Internet initiative.
// See: https://nlnet.nl/NGI0
//

pub mod address;
pub mod area;
pub mod auth;
pub mod circuit;
pub mod collections;
pub mod debug;
pub mod error;
pub mod instance;
pub mod levels;
pub mod northbound;
pub mod southbound;
pub mod tasks;
