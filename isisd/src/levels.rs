//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
// Sponsored by NLnet as part of the Next Generation Internet initiative.
// See: https://nlnet.nl/NGI0
//

use serde::{Deserialize, Serialize};

// Represent an IS-IS level, or a combination of both of them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(Deserialize, Serialize)]
pub enum LevelType {
    L1,
    L2,
    All,
}

// An iterator over the IS-IS levels defined by a `LevelType`.
pub struct LevelTypeIterator {
    level_type: LevelType,
    idx: usize,
}

// Represents a single IS-IS level.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(Deserialize, Serialize)]
pub enum LevelNumber {
    L1 = 1,
    L2 = 2,
}

// Container for storing separate values for level 1 and level 2.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Levels<T> {
    pub l1: T,
    pub l2: T,
}

// ===== impl LevelType =====

impl LevelType {
    pub fn intersects(&self, level: impl Into<LevelType>) -> bool {
        let level = level.into();
        match self {
            LevelType::L1 => matches!(level, LevelType::L1 | LevelType::All),
            LevelType::L2 => matches!(level, LevelType::L2 | LevelType::All),
            LevelType::All => true,
        }
    }

    pub fn intersection(
        &self,
        level: impl Into<LevelType>,
    ) -> Option<LevelType> {
        let level = level.into();
        match (self, level) {
            (LevelType::L1, LevelType::L1) => Some(LevelType::L1),
            (LevelType::L2, LevelType::L2) => Some(LevelType::L2),
            (LevelType::All, _) => Some(level),
            (_, LevelType::All) => Some(*self),
            _ => None,
        }
    }
}

impl From<LevelNumber> for LevelType {
    fn from(level: LevelNumber) -> LevelType {
        match level {
            LevelNumber::L1 => LevelType::L1,
            LevelNumber::L2 => LevelType::L2,
        }
    }
}

impl IntoIterator for LevelType {
    type Item = LevelNumber;
    type IntoIter = LevelTypeIterator;

    fn into_iter(self) -> Self::IntoIter {
        LevelTypeIterator::new(self)
    }
}

// ===== impl LevelTypeIterator =====

impl LevelTypeIterator {
    const LEVELS: [LevelNumber; 2] = [LevelNumber::L1, LevelNumber::L2];

    fn new(level_type: LevelType) -> Self {
        Self { level_type, idx: 0 }
    }
}

impl Iterator for LevelTypeIterator {
    type Item = LevelNumber;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < Self::LEVELS.len() {
            let level = Self::LEVELS[self.idx];
            self.idx += 1;

            if self.level_type.intersects(level) {
                return Some(level);
            }
        }
        None
    }
}

// ===== impl LevelNumber =====

impl std::fmt::Display for LevelNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

// ===== impl Levels =====

impl<T> Levels<T> {
    pub fn new(l1: T, l2: T) -> Levels<T> {
        Levels { l1, l2 }
    }

    pub fn get(&self, level: LevelNumber) -> &T {
        match level {
            LevelNumber::L1 => &self.l1,
            LevelNumber::L2 => &self.l2,
        }
    }

    pub fn get_mut(&mut self, level: LevelNumber) -> &mut T {
        match level {
            LevelNumber::L1 => &mut self.l1,
            LevelNumber::L2 => &mut self.l2,
        }
    }
}

impl<T: Clone> Levels<T> {
    pub fn both(value: T) -> Levels<T> {
        Levels {
            l1: value.clone(),
            l2: value,
        }
    }
}

// ===== unit tests =====
