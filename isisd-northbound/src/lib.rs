//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

#![allow(type_alias_bounds)]

mod debug;

pub mod configuration;
pub mod error;
pub mod yang;

use derive_new::new;
use isisd_yang::schema::{LeafType, SchemaNode, SchemaNodeKind};
use serde::{Deserialize, Serialize};

// Operation performed on a configuration node.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(Deserialize, Serialize)]
pub enum CallbackOp {
    Create,
    Modify,
    Delete,
}

// Identifies a set of configuration callbacks: the schema path of the
// affected node and the operation performed on it.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, new)]
#[derive(Deserialize, Serialize)]
pub struct CallbackKey {
    pub path: String,
    pub operation: CallbackOp,
}

/// Base northbound provider trait.
pub trait ProviderBase
where
    Self: 'static + Sized,
{
    // Span under which all configuration callbacks are invoked.
    fn debug_span(name: &str) -> tracing::Span;
}

// ===== impl CallbackOp =====

impl CallbackOp {
    // Returns whether the operation applies to nodes of the given schema
    // node.
    pub fn is_valid(&self, snode: &SchemaNode) -> bool {
        match self {
            CallbackOp::Create => match snode.kind {
                SchemaNodeKind::PresenceContainer
                | SchemaNodeKind::List(_)
                | SchemaNodeKind::LeafList(_) => true,
                SchemaNodeKind::Leaf(leaf_type) => {
                    leaf_type == LeafType::Empty
                }
                SchemaNodeKind::Container => false,
            },
            CallbackOp::Modify => match snode.kind {
                SchemaNodeKind::Leaf(leaf_type) => {
                    leaf_type != LeafType::Empty && !snode.is_list_key()
                }
                _ => false,
            },
            CallbackOp::Delete => match snode.kind {
                SchemaNodeKind::PresenceContainer
                | SchemaNodeKind::List(_)
                | SchemaNodeKind::LeafList(_) => true,
                SchemaNodeKind::Leaf(LeafType::Empty) => true,
                SchemaNodeKind::Leaf(_) => {
                    !snode.is_list_key()
                        && snode.default.is_none()
                        && !snode.mandatory
                }
                SchemaNodeKind::Container => false,
            },
        }
    }
}

impl std::fmt::Display for CallbackOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallbackOp::Create => write!(f, "create"),
            CallbackOp::Modify => write!(f, "modify"),
            CallbackOp::Delete => write!(f, "delete"),
        }
    }
}
