//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
// Sponsored by NLnet as part of the Next Generation Internet initiative.
// See: https://nlnet.nl/NGI0
//

use tracing::{warn, warn_span};

use crate::circuit::fsm;

// IS-IS errors.
#[derive(Debug)]
pub enum Error {
    // Southbound
    InterfaceNotFound(String),
    // Other
    CircuitUnexpectedEvent(String, Option<fsm::State>, fsm::Event),
}

// ===== impl Error =====

impl Error {
    pub fn log(&self) {
        match self {
            Error::InterfaceNotFound(name) => {
                warn!(%name, "{}", self);
            }
            Error::CircuitUnexpectedEvent(name, state, event) => {
                warn_span!("circuit", %name).in_scope(|| {
                    warn!(?state, ?event, "{}", self);
                })
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InterfaceNotFound(..) => {
                write!(f, "interface not found")
            }
            Error::CircuitUnexpectedEvent(..) => {
                write!(f, "unexpected circuit FSM event")
            }
        }
    }
}

impl std::error::Error for Error {}
