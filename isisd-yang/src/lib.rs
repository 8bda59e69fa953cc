//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

pub mod data;
pub mod error;
pub mod schema;

use std::borrow::Cow;

pub use crate::error::Error;

pub trait ToYang {
    // Return YANG textual representation of the value.
    fn to_yang(&self) -> Cow<'static, str>;
}

pub trait TryFromYang: Sized {
    // Construct value from YANG identity or enum value.
    fn try_from_yang(identity: &str) -> Option<Self>;
}

//
// YANG path type.
//
// Instances of this structure are declared alongside the schema table, and
// their use should be preferred over regular strings for extra type safety.
//
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct YangPath(&'static str);

// ===== impl YangPath =====

impl YangPath {
    pub const fn new(path: &'static str) -> YangPath {
        YangPath(path)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for YangPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for YangPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
