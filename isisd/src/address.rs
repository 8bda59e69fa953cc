//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
// Sponsored by NLnet as part of the Next Generation Internet initiative.
// See: https://nlnet.nl/NGI0
//

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// Represents an IS-IS Area Address.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
#[derive(Deserialize, Serialize)]
pub struct AreaAddr(SmallVec<[u8; 13]>);

// Represents an IS-IS System ID.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(Deserialize, Serialize)]
pub struct SystemId([u8; 6]);

// Represents a Network Entity Title: an area address followed by the System
// ID and the NSEL byte.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct Net(SmallVec<[u8; 20]>);

// ===== impl AreaAddr =====

impl AreaAddr {
    pub const MAX_LEN: usize = 13;

    pub(crate) fn new(bytes: SmallVec<[u8; 13]>) -> Self {
        AreaAddr(bytes)
    }
}

impl AsRef<[u8]> for AreaAddr {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for AreaAddr {
    fn from(bytes: &[u8]) -> AreaAddr {
        AreaAddr(SmallVec::from_slice(bytes))
    }
}

// ===== impl SystemId =====

impl SystemId {
    pub const LEN: usize = 6;
}

impl AsRef<[u8]> for SystemId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 6]> for SystemId {
    fn from(bytes: [u8; 6]) -> SystemId {
        SystemId(bytes)
    }
}

// ===== impl Net =====

impl Net {
    pub const NSEL_LEN: usize = 1;
    pub const MIN_LEN: usize = 1 + SystemId::LEN + Self::NSEL_LEN;
    pub const MAX_LEN: usize = 20;

    pub(crate) fn new(bytes: SmallVec<[u8; 20]>) -> Self {
        Net(bytes)
    }

    // Returns the area address portion of the NET.
    pub fn area_addr(&self) -> AreaAddr {
        let len = self.0.len() - SystemId::LEN - Self::NSEL_LEN;
        AreaAddr::from(&self.0[..len])
    }

    pub fn system_id(&self) -> SystemId {
        let start = self.0.len() - SystemId::LEN - Self::NSEL_LEN;
        let mut bytes = [0; SystemId::LEN];
        bytes.copy_from_slice(&self.0[start..start + SystemId::LEN]);
        SystemId(bytes)
    }

    pub fn nsel(&self) -> u8 {
        self.0[self.0.len() - 1]
    }
}

impl AsRef<[u8]> for Net {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
