//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
// Sponsored by NLnet as part of the Next Generation Internet initiative.
// See: https://nlnet.nl/NGI0
//

use std::collections::BTreeSet;

use crate::address::AreaAddr;
use crate::auth::Passwd;
use crate::collections::{AreaIndex, CircuitIndex};
use crate::debug::Debug;
use crate::levels::{LevelNumber, LevelType};
use crate::northbound::configuration::AreaCfg;

#[derive(Debug)]
pub struct Area {
    pub index: AreaIndex,
    pub tag: String,
    pub config: AreaCfg,
    pub state: AreaState,
}

#[derive(Debug, Default)]
pub struct AreaState {
    // Configured area addresses, without System ID and NSEL.
    pub area_addrs: Vec<AreaAddr>,
    // Circuits configured in this area.
    pub circuits: BTreeSet<CircuitIndex>,
    // Number of circuits with IPv4 routing enabled.
    pub ip_circuits: usize,
    // Number of circuits with IPv6 routing enabled.
    pub ipv6_circuits: usize,
}

// ===== impl Area =====

impl Area {
    pub(crate) fn new(index: AreaIndex, tag: String) -> Area {
        Debug::AreaCreate(&tag).log();

        Area {
            index,
            tag,
            config: Default::default(),
            state: Default::default(),
        }
    }

    // Adds an area address. Returns false if the address was already
    // configured.
    pub(crate) fn area_addr_add(&mut self, addr: AreaAddr) -> bool {
        if self.state.area_addrs.contains(&addr) {
            Debug::AreaAddrDuplicate(&self.tag, &addr).log();
            return false;
        }

        Debug::AreaAddrAdd(&self.tag, &addr).log();
        self.state.area_addrs.push(addr);
        true
    }

    // Removes an area address. Returns false if the address wasn't
    // configured.
    pub(crate) fn area_addr_remove(&mut self, addr: &AreaAddr) -> bool {
        let Some(pos) = self.state.area_addrs.iter().position(|a| a == addr)
        else {
            return false;
        };

        Debug::AreaAddrDelete(&self.tag, addr).log();
        self.state.area_addrs.remove(pos);
        true
    }

    // Installs the authentication password of the given level.
    pub(crate) fn passwd_set(&mut self, level: LevelNumber, passwd: Passwd) {
        Debug::AreaPasswordSet(&self.tag, level).log();
        *self.config.passwd.get_mut(level) = Some(passwd);
    }

    // Removes the authentication password of the given level. Returns false
    // if no password was installed.
    pub(crate) fn passwd_unset(&mut self, level: LevelNumber) -> bool {
        if self.config.passwd.get_mut(level).take().is_none() {
            return false;
        }

        Debug::AreaPasswordUnset(&self.tag, level).log();
        true
    }

    // Returns the levels this area runs at.
    pub fn level_type(&self) -> LevelType {
        self.config.level_type
    }

    pub fn is_active(&self) -> bool {
        !self.state.area_addrs.is_empty()
    }
}

impl Drop for Area {
    fn drop(&mut self) {
        Debug::AreaDelete(&self.tag).log();
    }
}

// ===== unit tests =====

#[cfg(test)]
mod tests {
    use generational_arena::Arena;

    use super::*;
    use crate::auth::{PasswdMethod, SnpAuthFlags};

    fn area() -> Area {
        let mut arena = Arena::new();
        let index = arena.insert(());
        Area::new(index, "1".to_owned())
    }

    #[test]
    fn test_area_addr_duplicate() {
        let mut area = area();
        let addr = AreaAddr::from([0x49, 0x00, 0x01].as_slice());

        assert!(area.area_addr_add(addr.clone()));
        assert!(!area.area_addr_add(addr.clone()));
        assert_eq!(area.state.area_addrs.len(), 1);
        assert!(area.is_active());

        assert!(area.area_addr_remove(&addr));
        assert!(!area.area_addr_remove(&addr));
        assert!(!area.is_active());
    }

    #[test]
    fn test_passwd() {
        let mut area = area();
        let passwd =
            Passwd::new(PasswdMethod::HmacMd5, "secret", SnpAuthFlags::SEND);

        area.passwd_set(LevelNumber::L2, passwd.clone());
        assert_eq!(area.config.passwd.l2, Some(passwd));
        assert_eq!(area.config.passwd.l1, None);

        assert!(area.passwd_unset(LevelNumber::L2));
        assert!(!area.passwd_unset(LevelNumber::L2));
    }
}
