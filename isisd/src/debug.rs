//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
// Sponsored by NLnet as part of the Next Generation Internet initiative.
// See: https://nlnet.nl/NGI0
//

use std::borrow::Cow;

use isisd_yang::ToYang;
use tracing::{debug, debug_span};

use crate::address::{AreaAddr, SystemId};
use crate::circuit::fsm;
use crate::levels::LevelNumber;

// IS-IS debug messages.
#[derive(Debug)]
pub enum Debug<'a> {
    // Areas
    AreaCreate(&'a str),
    AreaDelete(&'a str),
    AreaAddrAdd(&'a str, &'a AreaAddr),
    AreaAddrDuplicate(&'a str, &'a AreaAddr),
    AreaAddrDelete(&'a str, &'a AreaAddr),
    AreaPasswordSet(&'a str, LevelNumber),
    AreaPasswordUnset(&'a str, LevelNumber),
    // Router identity
    SystemIdFix(&'a SystemId),
    SystemIdRelease,
    // Circuits
    CircuitCreate(&'a str),
    CircuitDelete(&'a str),
    CircuitFsmTransition(&'a str, Option<fsm::State>, Option<fsm::State>),
    CircuitAreaChange(&'a str, &'a str),
    // Southbound
    InterfaceUpdate(&'a str, bool),
    InterfaceDelete(&'a str),
}

// ===== impl Debug =====

impl Debug<'_> {
    // Log debug message using the tracing API.
    pub(crate) fn log(&self) {
        match self {
            Debug::AreaCreate(tag) | Debug::AreaDelete(tag) => {
                // Parent span(s): isis
                debug_span!("area", %tag).in_scope(|| {
                    debug!("{}", self);
                })
            }
            Debug::AreaAddrAdd(tag, addr)
            | Debug::AreaAddrDuplicate(tag, addr)
            | Debug::AreaAddrDelete(tag, addr) => {
                // Parent span(s): isis
                debug_span!("area", %tag).in_scope(|| {
                    debug!(addr = %addr.to_yang(), "{}", self);
                })
            }
            Debug::AreaPasswordSet(tag, level)
            | Debug::AreaPasswordUnset(tag, level) => {
                // Parent span(s): isis
                debug_span!("area", %tag).in_scope(|| {
                    debug!(%level, "{}", self);
                })
            }
            Debug::SystemIdFix(system_id) => {
                // Parent span(s): isis
                debug!(system_id = %system_id.to_yang(), "{}", self);
            }
            Debug::SystemIdRelease => {
                // Parent span(s): isis
                debug!("{}", self);
            }
            Debug::CircuitCreate(name) | Debug::CircuitDelete(name) => {
                // Parent span(s): isis
                debug_span!("circuit", %name).in_scope(|| {
                    debug!("{}", self);
                })
            }
            Debug::CircuitFsmTransition(name, old_state, new_state) => {
                // Parent span(s): isis
                debug_span!("circuit", %name).in_scope(|| {
                    let old_state = fsm_state_to_yang(old_state);
                    let new_state = fsm_state_to_yang(new_state);
                    debug!(%old_state, %new_state, "{}", self);
                })
            }
            Debug::CircuitAreaChange(name, area) => {
                // Parent span(s): isis
                debug_span!("circuit", %name).in_scope(|| {
                    debug!(%area, "{}", self);
                })
            }
            Debug::InterfaceUpdate(name, operative) => {
                // Parent span(s): isis
                debug!(%name, %operative, "{}", self);
            }
            Debug::InterfaceDelete(name) => {
                // Parent span(s): isis
                debug!(%name, "{}", self);
            }
        }
    }
}

impl std::fmt::Display for Debug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Debug::AreaCreate(..) => {
                write!(f, "area created")
            }
            Debug::AreaDelete(..) => {
                write!(f, "area deleted")
            }
            Debug::AreaAddrAdd(..) => {
                write!(f, "area address added")
            }
            Debug::AreaAddrDuplicate(..) => {
                write!(f, "area address already configured")
            }
            Debug::AreaAddrDelete(..) => {
                write!(f, "area address removed")
            }
            Debug::AreaPasswordSet(..) => {
                write!(f, "authentication password set")
            }
            Debug::AreaPasswordUnset(..) => {
                write!(f, "authentication password unset")
            }
            Debug::SystemIdFix(..) => {
                write!(f, "system ID set")
            }
            Debug::SystemIdRelease => {
                write!(f, "router has no system ID")
            }
            Debug::CircuitCreate(..) => {
                write!(f, "circuit created")
            }
            Debug::CircuitDelete(..) => {
                write!(f, "circuit deleted")
            }
            Debug::CircuitFsmTransition(..) => {
                write!(f, "state transition")
            }
            Debug::CircuitAreaChange(..) => {
                write!(f, "circuit moved to another area")
            }
            Debug::InterfaceUpdate(..) => {
                write!(f, "interface update")
            }
            Debug::InterfaceDelete(..) => {
                write!(f, "interface delete")
            }
        }
    }
}

// ===== helper functions =====

fn fsm_state_to_yang(state: &Option<fsm::State>) -> Cow<'static, str> {
    match state {
        Some(state) => state.to_yang(),
        None => "none".into(),
    }
}
