//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use tracing::{debug, debug_span, trace, trace_span};

use crate::CallbackOp;
use crate::configuration::CommitPhase;

#[derive(Debug)]
pub enum Debug<'a> {
    CommitStart(usize),
    CommitDone(usize, usize),
    ConfigurationCallback(CommitPhase, CallbackOp, &'a str),
    ApplyFinishCallback(&'a str),
    CallbackNotFound(CallbackOp, &'a str),
}

// ===== impl Debug =====

impl Debug<'_> {
    pub fn log(&self) {
        match self {
            Debug::CommitStart(changes) => {
                debug_span!("northbound").in_scope(|| {
                    debug!(%changes, "{}", self);
                });
            }
            Debug::CommitDone(changes, errors) => {
                debug_span!("northbound").in_scope(|| {
                    debug!(%changes, %errors, "{}", self);
                });
            }
            Debug::ConfigurationCallback(phase, operation, path) => {
                trace_span!("northbound").in_scope(|| {
                    trace!(
                        ?phase, %operation, %path,
                        "{}", self
                    )
                });
            }
            Debug::ApplyFinishCallback(path) => {
                trace_span!("northbound")
                    .in_scope(|| trace!(%path, "{}", self));
            }
            Debug::CallbackNotFound(operation, path) => {
                trace_span!("northbound")
                    .in_scope(|| trace!(%operation, %path, "{}", self));
            }
        }
    }
}

impl std::fmt::Display for Debug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Debug::CommitStart(..) => {
                write!(f, "starting configuration transaction")
            }
            Debug::CommitDone(..) => {
                write!(f, "configuration transaction committed")
            }
            Debug::ConfigurationCallback(..) => {
                write!(f, "configuration callback")
            }
            Debug::ApplyFinishCallback(..) => {
                write!(f, "apply_finish callback")
            }
            Debug::CallbackNotFound(..) => {
                write!(f, "no callbacks registered")
            }
        }
    }
}
