//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock as Lazy;

// Schema node kinds relevant to configuration processing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SchemaNodeKind {
    Container,
    PresenceContainer,
    List(&'static [&'static str]),
    LeafList(LeafType),
    Leaf(LeafType),
}

// Built-in and derived types of leaf values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LeafType {
    String,
    Bool,
    Uint8,
    Uint16,
    Uint32,
    Enumeration(&'static [&'static str]),
    Empty,
}

#[derive(Debug, Eq, PartialEq)]
pub struct SchemaNode {
    pub path: &'static str,
    pub kind: SchemaNodeKind,
    pub default: Option<&'static str>,
    pub mandatory: bool,
}

// Enumerations.
const IS_TYPE: &[&str] = &["level-1", "level-1-2", "level-2-only"];
const METRIC_STYLE: &[&str] = &["narrow", "transition", "wide"];
const PASSWORD_TYPE: &[&str] = &["clear-text", "md5"];
const AUTHENTICATE_SNP: &[&str] = &["none", "send-only", "validate"];
const NETWORK_TYPE: &[&str] = &["broadcast", "point-to-point"];
const LEVEL: &[&str] = &["level-1", "level-2"];
const REDIST_PROTOCOL: &[&str] = &[
    "kernel",
    "connected",
    "static",
    "rip",
    "ripng",
    "ospf",
    "ospf6",
    "bgp",
    "table",
];

// Schema nodes of the supported YANG modules, parents before children.
static SCHEMA_NODES: &[SchemaNode] = &[
    // frr-isisd
    container("/frr-isisd:isis"),
    list("/frr-isisd:isis/instance", &["area-tag"]),
    leaf("/frr-isisd:isis/instance/area-tag", LeafType::String),
    leaf_dflt(
        "/frr-isisd:isis/instance/is-type",
        LeafType::Enumeration(IS_TYPE),
        "level-1-2",
    ),
    leaf_list("/frr-isisd:isis/instance/area-address", LeafType::String),
    leaf_dflt(
        "/frr-isisd:isis/instance/dynamic-hostname",
        LeafType::Bool,
        "true",
    ),
    leaf("/frr-isisd:isis/instance/attached", LeafType::Empty),
    leaf("/frr-isisd:isis/instance/overload", LeafType::Empty),
    leaf_dflt(
        "/frr-isisd:isis/instance/metric-style",
        LeafType::Enumeration(METRIC_STYLE),
        "wide",
    ),
    leaf("/frr-isisd:isis/instance/purge-originator", LeafType::Empty),
    container("/frr-isisd:isis/instance/lsp"),
    leaf_dflt("/frr-isisd:isis/instance/lsp/mtu", LeafType::Uint16, "1497"),
    container("/frr-isisd:isis/instance/lsp/refresh-interval"),
    leaf_dflt(
        "/frr-isisd:isis/instance/lsp/refresh-interval/level-1",
        LeafType::Uint16,
        "900",
    ),
    leaf_dflt(
        "/frr-isisd:isis/instance/lsp/refresh-interval/level-2",
        LeafType::Uint16,
        "900",
    ),
    container("/frr-isisd:isis/instance/lsp/maximum-lifetime"),
    leaf_dflt(
        "/frr-isisd:isis/instance/lsp/maximum-lifetime/level-1",
        LeafType::Uint16,
        "1200",
    ),
    leaf_dflt(
        "/frr-isisd:isis/instance/lsp/maximum-lifetime/level-2",
        LeafType::Uint16,
        "1200",
    ),
    container("/frr-isisd:isis/instance/lsp/generation-interval"),
    leaf_dflt(
        "/frr-isisd:isis/instance/lsp/generation-interval/level-1",
        LeafType::Uint16,
        "30",
    ),
    leaf_dflt(
        "/frr-isisd:isis/instance/lsp/generation-interval/level-2",
        LeafType::Uint16,
        "30",
    ),
    container("/frr-isisd:isis/instance/spf"),
    presence("/frr-isisd:isis/instance/spf/ietf-backoff-delay"),
    leaf_dflt(
        "/frr-isisd:isis/instance/spf/ietf-backoff-delay/init-delay",
        LeafType::Uint16,
        "50",
    ),
    leaf_dflt(
        "/frr-isisd:isis/instance/spf/ietf-backoff-delay/short-delay",
        LeafType::Uint16,
        "200",
    ),
    leaf_dflt(
        "/frr-isisd:isis/instance/spf/ietf-backoff-delay/long-delay",
        LeafType::Uint16,
        "5000",
    ),
    leaf_dflt(
        "/frr-isisd:isis/instance/spf/ietf-backoff-delay/hold-down",
        LeafType::Uint16,
        "10000",
    ),
    leaf_dflt(
        "/frr-isisd:isis/instance/spf/ietf-backoff-delay/time-to-learn",
        LeafType::Uint16,
        "500",
    ),
    container("/frr-isisd:isis/instance/spf/minimum-interval"),
    leaf_dflt(
        "/frr-isisd:isis/instance/spf/minimum-interval/level-1",
        LeafType::Uint16,
        "1",
    ),
    leaf_dflt(
        "/frr-isisd:isis/instance/spf/minimum-interval/level-2",
        LeafType::Uint16,
        "1",
    ),
    presence("/frr-isisd:isis/instance/area-password"),
    leaf_mandatory(
        "/frr-isisd:isis/instance/area-password/password",
        LeafType::String,
    ),
    leaf_dflt(
        "/frr-isisd:isis/instance/area-password/password-type",
        LeafType::Enumeration(PASSWORD_TYPE),
        "clear-text",
    ),
    leaf_dflt(
        "/frr-isisd:isis/instance/area-password/authenticate-snp",
        LeafType::Enumeration(AUTHENTICATE_SNP),
        "none",
    ),
    presence("/frr-isisd:isis/instance/domain-password"),
    leaf_mandatory(
        "/frr-isisd:isis/instance/domain-password/password",
        LeafType::String,
    ),
    leaf_dflt(
        "/frr-isisd:isis/instance/domain-password/password-type",
        LeafType::Enumeration(PASSWORD_TYPE),
        "clear-text",
    ),
    leaf_dflt(
        "/frr-isisd:isis/instance/domain-password/authenticate-snp",
        LeafType::Enumeration(AUTHENTICATE_SNP),
        "none",
    ),
    container("/frr-isisd:isis/instance/default-information-originate"),
    list(
        "/frr-isisd:isis/instance/default-information-originate/ipv4",
        &["level"],
    ),
    leaf(
        "/frr-isisd:isis/instance/default-information-originate/ipv4/level",
        LeafType::Enumeration(LEVEL),
    ),
    leaf(
        "/frr-isisd:isis/instance/default-information-originate/ipv4/always",
        LeafType::Empty,
    ),
    leaf(
        "/frr-isisd:isis/instance/default-information-originate/ipv4/route-map",
        LeafType::String,
    ),
    leaf(
        "/frr-isisd:isis/instance/default-information-originate/ipv4/metric",
        LeafType::Uint32,
    ),
    list(
        "/frr-isisd:isis/instance/default-information-originate/ipv6",
        &["level"],
    ),
    leaf(
        "/frr-isisd:isis/instance/default-information-originate/ipv6/level",
        LeafType::Enumeration(LEVEL),
    ),
    leaf(
        "/frr-isisd:isis/instance/default-information-originate/ipv6/always",
        LeafType::Empty,
    ),
    leaf(
        "/frr-isisd:isis/instance/default-information-originate/ipv6/route-map",
        LeafType::String,
    ),
    leaf(
        "/frr-isisd:isis/instance/default-information-originate/ipv6/metric",
        LeafType::Uint32,
    ),
    container("/frr-isisd:isis/instance/redistribute"),
    list(
        "/frr-isisd:isis/instance/redistribute/ipv4",
        &["protocol", "level"],
    ),
    leaf(
        "/frr-isisd:isis/instance/redistribute/ipv4/protocol",
        LeafType::Enumeration(REDIST_PROTOCOL),
    ),
    leaf(
        "/frr-isisd:isis/instance/redistribute/ipv4/level",
        LeafType::Enumeration(LEVEL),
    ),
    leaf(
        "/frr-isisd:isis/instance/redistribute/ipv4/route-map",
        LeafType::String,
    ),
    leaf(
        "/frr-isisd:isis/instance/redistribute/ipv4/metric",
        LeafType::Uint32,
    ),
    list(
        "/frr-isisd:isis/instance/redistribute/ipv6",
        &["protocol", "level"],
    ),
    leaf(
        "/frr-isisd:isis/instance/redistribute/ipv6/protocol",
        LeafType::Enumeration(REDIST_PROTOCOL),
    ),
    leaf(
        "/frr-isisd:isis/instance/redistribute/ipv6/level",
        LeafType::Enumeration(LEVEL),
    ),
    leaf(
        "/frr-isisd:isis/instance/redistribute/ipv6/route-map",
        LeafType::String,
    ),
    leaf(
        "/frr-isisd:isis/instance/redistribute/ipv6/metric",
        LeafType::Uint32,
    ),
    container("/frr-isisd:isis/instance/multi-topology"),
    presence("/frr-isisd:isis/instance/multi-topology/ipv4-multicast"),
    leaf(
        "/frr-isisd:isis/instance/multi-topology/ipv4-multicast/overload",
        LeafType::Empty,
    ),
    presence("/frr-isisd:isis/instance/multi-topology/ipv4-management"),
    leaf(
        "/frr-isisd:isis/instance/multi-topology/ipv4-management/overload",
        LeafType::Empty,
    ),
    presence("/frr-isisd:isis/instance/multi-topology/ipv6-unicast"),
    leaf(
        "/frr-isisd:isis/instance/multi-topology/ipv6-unicast/overload",
        LeafType::Empty,
    ),
    presence("/frr-isisd:isis/instance/multi-topology/ipv6-multicast"),
    leaf(
        "/frr-isisd:isis/instance/multi-topology/ipv6-multicast/overload",
        LeafType::Empty,
    ),
    presence("/frr-isisd:isis/instance/multi-topology/ipv6-management"),
    leaf(
        "/frr-isisd:isis/instance/multi-topology/ipv6-management/overload",
        LeafType::Empty,
    ),
    presence("/frr-isisd:isis/instance/multi-topology/ipv6-dstsrc"),
    leaf(
        "/frr-isisd:isis/instance/multi-topology/ipv6-dstsrc/overload",
        LeafType::Empty,
    ),
    leaf(
        "/frr-isisd:isis/instance/log-adjacency-changes",
        LeafType::Empty,
    ),
    presence("/frr-isisd:isis/mpls-te"),
    leaf("/frr-isisd:isis/mpls-te/router-address", LeafType::String),
    // frr-interface (with frr-isisd augmentations)
    container("/frr-interface:lib"),
    list("/frr-interface:lib/interface", &["name", "vrf"]),
    leaf("/frr-interface:lib/interface/name", LeafType::String),
    leaf("/frr-interface:lib/interface/vrf", LeafType::String),
    leaf("/frr-interface:lib/interface/description", LeafType::String),
    presence("/frr-interface:lib/interface/frr-isisd:isis"),
    leaf_mandatory(
        "/frr-interface:lib/interface/frr-isisd:isis/area-tag",
        LeafType::String,
    ),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/circuit-type",
        LeafType::Enumeration(IS_TYPE),
        "level-1-2",
    ),
    leaf(
        "/frr-interface:lib/interface/frr-isisd:isis/ipv4-routing",
        LeafType::Empty,
    ),
    leaf(
        "/frr-interface:lib/interface/frr-isisd:isis/ipv6-routing",
        LeafType::Empty,
    ),
    container("/frr-interface:lib/interface/frr-isisd:isis/csnp-interval"),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/csnp-interval/level-1",
        LeafType::Uint16,
        "10",
    ),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/csnp-interval/level-2",
        LeafType::Uint16,
        "10",
    ),
    container("/frr-interface:lib/interface/frr-isisd:isis/psnp-interval"),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/psnp-interval/level-1",
        LeafType::Uint16,
        "2",
    ),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/psnp-interval/level-2",
        LeafType::Uint16,
        "2",
    ),
    container("/frr-interface:lib/interface/frr-isisd:isis/hello"),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/hello/padding",
        LeafType::Bool,
        "true",
    ),
    container("/frr-interface:lib/interface/frr-isisd:isis/hello/interval"),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/hello/interval/level-1",
        LeafType::Uint32,
        "3",
    ),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/hello/interval/level-2",
        LeafType::Uint32,
        "3",
    ),
    container("/frr-interface:lib/interface/frr-isisd:isis/hello/multiplier"),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/hello/multiplier/level-1",
        LeafType::Uint16,
        "10",
    ),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/hello/multiplier/level-2",
        LeafType::Uint16,
        "10",
    ),
    container("/frr-interface:lib/interface/frr-isisd:isis/metric"),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/metric/level-1",
        LeafType::Uint32,
        "10",
    ),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/metric/level-2",
        LeafType::Uint32,
        "10",
    ),
    container("/frr-interface:lib/interface/frr-isisd:isis/priority"),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/priority/level-1",
        LeafType::Uint8,
        "64",
    ),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/priority/level-2",
        LeafType::Uint8,
        "64",
    ),
    leaf(
        "/frr-interface:lib/interface/frr-isisd:isis/network-type",
        LeafType::Enumeration(NETWORK_TYPE),
    ),
    leaf(
        "/frr-interface:lib/interface/frr-isisd:isis/passive",
        LeafType::Empty,
    ),
    presence("/frr-interface:lib/interface/frr-isisd:isis/password"),
    leaf_mandatory(
        "/frr-interface:lib/interface/frr-isisd:isis/password/password",
        LeafType::String,
    ),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/password/password-type",
        LeafType::Enumeration(PASSWORD_TYPE),
        "clear-text",
    ),
    leaf(
        "/frr-interface:lib/interface/frr-isisd:isis/disable-three-way-handshake",
        LeafType::Empty,
    ),
    container("/frr-interface:lib/interface/frr-isisd:isis/multi-topology"),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/multi-topology/ipv4-unicast",
        LeafType::Bool,
        "true",
    ),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/multi-topology/ipv4-multicast",
        LeafType::Bool,
        "true",
    ),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/multi-topology/ipv4-management",
        LeafType::Bool,
        "false",
    ),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/multi-topology/ipv6-unicast",
        LeafType::Bool,
        "true",
    ),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/multi-topology/ipv6-multicast",
        LeafType::Bool,
        "true",
    ),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/multi-topology/ipv6-management",
        LeafType::Bool,
        "false",
    ),
    leaf_dflt(
        "/frr-interface:lib/interface/frr-isisd:isis/multi-topology/ipv6-dstsrc",
        LeafType::Bool,
        "false",
    ),
];

// Schema nodes indexed by path.
static SCHEMA: Lazy<BTreeMap<&'static str, &'static SchemaNode>> =
    Lazy::new(|| {
        SCHEMA_NODES
            .iter()
            .map(|snode| (snode.path, snode))
            .collect()
    });

// Schema nodes indexed by the path of their parents. Top-level nodes are
// indexed by the empty string.
static SCHEMA_CHILDREN: Lazy<HashMap<&'static str, Vec<&'static SchemaNode>>> =
    Lazy::new(|| {
        let mut children: HashMap<_, Vec<_>> = HashMap::new();
        for snode in SCHEMA_NODES {
            children.entry(snode.parent_path()).or_default().push(snode);
        }
        children
    });

// ===== impl SchemaNodeKind =====

impl SchemaNodeKind {
    pub fn is_leaf(&self) -> bool {
        matches!(self, SchemaNodeKind::Leaf(_))
    }

    pub fn is_np_container(&self) -> bool {
        matches!(self, SchemaNodeKind::Container)
    }
}

// ===== impl LeafType =====

impl LeafType {
    // Checks whether the given canonical value is valid for this type.
    pub fn is_valid(&self, value: &str) -> bool {
        match self {
            LeafType::String => true,
            LeafType::Bool => matches!(value, "true" | "false"),
            LeafType::Uint8 => value.parse::<u8>().is_ok(),
            LeafType::Uint16 => value.parse::<u16>().is_ok(),
            LeafType::Uint32 => value.parse::<u32>().is_ok(),
            LeafType::Enumeration(values) => values.contains(&value),
            LeafType::Empty => value.is_empty(),
        }
    }
}

// ===== impl SchemaNode =====

impl SchemaNode {
    // Returns the node name, including the module prefix when present.
    pub fn name(&self) -> &'static str {
        let (_, name) = self.path.rsplit_once('/').unwrap_or(("", self.path));
        name
    }

    // Returns the schema path of the parent node, or the empty string for
    // top-level nodes.
    pub fn parent_path(&self) -> &'static str {
        self.path.rsplit_once('/').map(|(parent, _)| parent).unwrap_or("")
    }

    pub fn parent(&self) -> Option<&'static SchemaNode> {
        find(self.parent_path())
    }

    // Returns the type of leaf or leaf-list nodes.
    pub fn leaf_type(&self) -> Option<LeafType> {
        match self.kind {
            SchemaNodeKind::Leaf(leaf_type)
            | SchemaNodeKind::LeafList(leaf_type) => Some(leaf_type),
            _ => None,
        }
    }

    // Returns whether this node is a key of its parent list.
    pub fn is_list_key(&self) -> bool {
        match self.parent().map(|parent| parent.kind) {
            Some(SchemaNodeKind::List(keys)) => keys.contains(&self.name()),
            _ => false,
        }
    }

    pub fn children(&self) -> impl Iterator<Item = &'static SchemaNode> {
        children(self.path)
    }
}

// ===== helper functions =====

const fn container(path: &'static str) -> SchemaNode {
    SchemaNode {
        path,
        kind: SchemaNodeKind::Container,
        default: None,
        mandatory: false,
    }
}

const fn presence(path: &'static str) -> SchemaNode {
    SchemaNode {
        path,
        kind: SchemaNodeKind::PresenceContainer,
        default: None,
        mandatory: false,
    }
}

const fn list(path: &'static str, keys: &'static [&'static str]) -> SchemaNode {
    SchemaNode {
        path,
        kind: SchemaNodeKind::List(keys),
        default: None,
        mandatory: false,
    }
}

const fn leaf_list(path: &'static str, leaf_type: LeafType) -> SchemaNode {
    SchemaNode {
        path,
        kind: SchemaNodeKind::LeafList(leaf_type),
        default: None,
        mandatory: false,
    }
}

const fn leaf(path: &'static str, leaf_type: LeafType) -> SchemaNode {
    SchemaNode {
        path,
        kind: SchemaNodeKind::Leaf(leaf_type),
        default: None,
        mandatory: false,
    }
}

const fn leaf_dflt(
    path: &'static str,
    leaf_type: LeafType,
    default: &'static str,
) -> SchemaNode {
    SchemaNode {
        path,
        kind: SchemaNodeKind::Leaf(leaf_type),
        default: Some(default),
        mandatory: false,
    }
}

const fn leaf_mandatory(path: &'static str, leaf_type: LeafType) -> SchemaNode {
    SchemaNode {
        path,
        kind: SchemaNodeKind::Leaf(leaf_type),
        default: None,
        mandatory: true,
    }
}

// ===== global functions =====

// Looks up a schema node by its path.
pub fn find(path: &str) -> Option<&'static SchemaNode> {
    SCHEMA.get(path).copied()
}

// Returns the children of the schema node with the given path. The empty
// path refers to the schema root.
pub fn children(path: &str) -> impl Iterator<Item = &'static SchemaNode> {
    SCHEMA_CHILDREN
        .get(path)
        .into_iter()
        .flat_map(|children| children.iter().copied())
}

// Returns an iterator over all schema nodes.
pub fn iter() -> impl Iterator<Item = &'static SchemaNode> {
    SCHEMA_NODES.iter()
}
