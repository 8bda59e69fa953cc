//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
// Sponsored by NLnet as part of the Next Generation Internet initiative.
// See: https://nlnet.nl/NGI0
//

pub mod configuration;
pub mod yang;

use std::sync::LazyLock as Lazy;

use isisd_northbound::ProviderBase;
use regex::Regex;
use tracing::{Span, debug_span};

use crate::instance::Instance;

// ===== impl Instance =====

impl ProviderBase for Instance {
    fn debug_span(_name: &str) -> Span {
        debug_span!("isis")
    }
}

// ===== regular expressions =====

// Matches on a dotted NET: a leading byte followed by groups of two bytes,
// optionally terminated by a single byte.
pub static REGEX_NET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-Fa-f]{2}(\.[0-9A-Fa-f]{4})*(\.[0-9A-Fa-f]{2})?$")
        .unwrap()
});
