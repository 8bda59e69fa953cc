//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
// Sponsored by NLnet as part of the Next Generation Internet initiative.
// See: https://nlnet.nl/NGI0
//

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

// Authentication password.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct Passwd {
    pub method: PasswdMethod,
    pub secret: String,
    pub snp_auth: SnpAuthFlags,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum PasswdMethod {
    Cleartext,
    HmacMd5,
}

// Controls whether sequence number PDUs are authenticated as well.
bitflags! {
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    #[derive(Deserialize, Serialize)]
    #[serde(transparent)]
    pub struct SnpAuthFlags: u8 {
        const SEND = 0x01;
        const VALIDATE = 0x02;
    }
}

// ===== impl Passwd =====

impl Passwd {
    pub const MAX_LEN: usize = 254;

    pub fn new(
        method: PasswdMethod,
        secret: impl Into<String>,
        snp_auth: SnpAuthFlags,
    ) -> Passwd {
        Passwd {
            method,
            secret: secret.into(),
            snp_auth,
        }
    }

    // Checks whether the given secret can be installed.
    pub fn is_valid_secret(secret: &str) -> bool {
        !secret.is_empty() && secret.len() <= Self::MAX_LEN
    }
}
