//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;
use std::ops::Bound;

use itertools::{EitherOrBoth, Itertools};
use serde_json::{Map, Value};

use crate::error::Error;
use crate::schema::{self, LeafType, SchemaNode, SchemaNodeKind};

// Configuration data tree.
//
// Nodes are indexed by their data path, which uses XPath-like predicates to
// identify list entries and leaf-list values:
//
// /frr-isisd:isis/instance[area-tag='1']/area-address[.='49.0001.1921.6800.1001.00']
//
// Non-presence containers and leaves with default values are always
// instantiated under their existing parents, and flagged as default unless
// explicitly configured.
#[derive(Clone, Debug)]
pub struct DataTree {
    nodes: BTreeMap<String, DataNode>,
}

#[derive(Clone, Debug)]
struct DataNode {
    snode: &'static SchemaNode,
    value: Option<String>,
    default: bool,
}

// Reference to a node of a data tree.
#[derive(Clone, Copy)]
pub struct DataNodeRef<'a> {
    tree: &'a DataTree,
    path: &'a str,
    node: &'a DataNode,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DataDiffOp {
    Create,
    Delete,
    Replace,
}

// Differences between two data trees.
//
// Created and deleted subtrees are represented only by their topmost node.
// Deleted nodes refer to the old tree, all others to the new tree.
#[derive(Debug)]
pub struct DataDiff<'a> {
    ops: Vec<(DataDiffOp, DataNodeRef<'a>)>,
}

// ===== impl DataTree =====

impl DataTree {
    // Creates a data tree containing only implicit nodes.
    pub fn new() -> DataTree {
        let mut dtree = DataTree {
            nodes: Default::default(),
        };
        dtree.add_implicit_nodes();
        dtree
    }

    // Builds a data tree from RFC 7951 JSON encoded data.
    pub fn from_json(value: &Value) -> Result<DataTree, Error> {
        let obj = value
            .as_object()
            .ok_or_else(|| Error::UnexpectedJsonType("/".to_owned()))?;

        let mut dtree = DataTree {
            nodes: Default::default(),
        };
        dtree.load_json_object("", "", obj)?;
        dtree.add_implicit_nodes();
        dtree.check_mandatory()?;

        Ok(dtree)
    }

    pub fn from_json_str(data: &str) -> Result<DataTree, Error> {
        let value: Value = serde_json::from_str(data)?;
        DataTree::from_json(&value)
    }

    // Encodes the explicitly configured nodes as RFC 7951 JSON data.
    pub fn to_json(&self) -> Value {
        let roots = self
            .nodes
            .iter()
            .filter(|(path, _)| parent_path(path).is_none())
            .map(|(path, node)| DataNodeRef {
                tree: self,
                path,
                node,
            });
        Value::Object(nodes_to_json(roots))
    }

    // Looks up a data node by its full data path.
    pub fn find_path(&self, path: &str) -> Option<DataNodeRef<'_>> {
        self.nodes
            .get_key_value(path)
            .map(|(path, node)| DataNodeRef {
                tree: self,
                path,
                node,
            })
    }

    // Returns an iterator over all data nodes, parents before children.
    pub fn traverse(&self) -> impl Iterator<Item = DataNodeRef<'_>> {
        self.nodes.iter().map(|(path, node)| DataNodeRef {
            tree: self,
            path,
            node,
        })
    }

    // Computes the differences between this tree and a newer one.
    pub fn diff<'a>(&'a self, new: &'a DataTree) -> DataDiff<'a> {
        let mut ops = vec![];

        for item in self
            .nodes
            .iter()
            .merge_join_by(new.nodes.iter(), |(a, _), (b, _)| a.cmp(b))
        {
            match item {
                EitherOrBoth::Left((path, node)) => {
                    if parent_path(path)
                        .is_none_or(|parent| new.nodes.contains_key(parent))
                    {
                        let dnode = DataNodeRef {
                            tree: self,
                            path,
                            node,
                        };
                        ops.push((DataDiffOp::Delete, dnode));
                    }
                }
                EitherOrBoth::Right((path, node)) => {
                    if parent_path(path)
                        .is_none_or(|parent| self.nodes.contains_key(parent))
                    {
                        let dnode = DataNodeRef {
                            tree: new,
                            path,
                            node,
                        };
                        ops.push((DataDiffOp::Create, dnode));
                    }
                }
                EitherOrBoth::Both((_, old_node), (path, node)) => {
                    if old_node.value != node.value {
                        let dnode = DataNodeRef {
                            tree: new,
                            path,
                            node,
                        };
                        ops.push((DataDiffOp::Replace, dnode));
                    }
                }
            }
        }

        DataDiff { ops }
    }

    fn insert(
        &mut self,
        path: String,
        snode: &'static SchemaNode,
        value: Option<String>,
    ) -> Result<(), Error> {
        if self.nodes.contains_key(&path) {
            return Err(Error::DuplicateEntry(path));
        }
        let node = DataNode {
            snode,
            value,
            default: false,
        };
        self.nodes.insert(path, node);
        Ok(())
    }

    fn load_json_object(
        &mut self,
        data_parent: &str,
        schema_parent: &str,
        obj: &Map<String, Value>,
    ) -> Result<(), Error> {
        for (name, value) in obj {
            let spath = format!("{schema_parent}/{name}");
            let Some(snode) = schema::find(&spath) else {
                return Err(Error::UnknownNode(spath));
            };

            match snode.kind {
                SchemaNodeKind::Container
                | SchemaNodeKind::PresenceContainer => {
                    let Some(obj) = value.as_object() else {
                        return Err(Error::UnexpectedJsonType(spath));
                    };
                    let path = format!("{data_parent}/{name}");
                    self.insert(path.clone(), snode, None)?;
                    self.load_json_object(&path, snode.path, obj)?;
                }
                SchemaNodeKind::List(keys) => {
                    let Some(entries) = value.as_array() else {
                        return Err(Error::UnexpectedJsonType(spath));
                    };
                    for entry in entries {
                        let Some(entry) = entry.as_object() else {
                            return Err(Error::UnexpectedJsonType(spath));
                        };
                        let mut path = format!("{data_parent}/{name}");
                        for key in keys {
                            let value = entry.get(*key).ok_or_else(|| {
                                Error::MissingListKey(spath.clone(), *key)
                            })?;
                            let value = json_scalar(value).ok_or_else(|| {
                                Error::UnexpectedJsonType(spath.clone())
                            })?;
                            path.push_str(&predicate(key, &value));
                        }
                        self.insert(path.clone(), snode, None)?;
                        self.load_json_object(&path, snode.path, entry)?;
                    }
                }
                SchemaNodeKind::LeafList(leaf_type) => {
                    let Some(values) = value.as_array() else {
                        return Err(Error::UnexpectedJsonType(spath));
                    };
                    for value in values {
                        let Some(value) = json_scalar(value) else {
                            return Err(Error::UnexpectedJsonType(spath));
                        };
                        if !leaf_type.is_valid(&value) {
                            return Err(Error::InvalidValue(spath, value));
                        }
                        let path = format!(
                            "{data_parent}/{name}{}",
                            predicate(".", &value)
                        );
                        self.insert(path, snode, Some(value))?;
                    }
                }
                SchemaNodeKind::Leaf(leaf_type) => {
                    let value = if leaf_type == LeafType::Empty {
                        // RFC 7951 encodes empty leaves as "[null]".
                        match value.as_array().map(Vec::as_slice) {
                            Some([Value::Null]) => String::new(),
                            _ => return Err(Error::UnexpectedJsonType(spath)),
                        }
                    } else {
                        let Some(value) = json_scalar(value) else {
                            return Err(Error::UnexpectedJsonType(spath));
                        };
                        if !leaf_type.is_valid(&value) {
                            return Err(Error::InvalidValue(spath, value));
                        }
                        value
                    };
                    let path = format!("{data_parent}/{name}");
                    self.insert(path, snode, Some(value))?;
                }
            }
        }

        Ok(())
    }

    // Instantiates non-presence containers and default leaves under all
    // existing interior nodes, starting from the schema root.
    fn add_implicit_nodes(&mut self) {
        let mut parents = vec![(String::new(), "")];
        parents.extend(
            self.nodes
                .iter()
                .filter(|(_, node)| is_interior(node.snode))
                .map(|(path, node)| (path.clone(), node.snode.path)),
        );

        while let Some((parent, schema_parent)) = parents.pop() {
            for snode in schema::children(schema_parent) {
                let path = format!("{parent}/{}", snode.name());
                match snode.kind {
                    SchemaNodeKind::Container => {
                        if self.nodes.contains_key(&path) {
                            continue;
                        }
                        let node = DataNode {
                            snode,
                            value: None,
                            default: true,
                        };
                        self.nodes.insert(path.clone(), node);
                        parents.push((path, snode.path));
                    }
                    SchemaNodeKind::Leaf(_) => {
                        if let Some(default) = snode.default {
                            self.nodes.entry(path).or_insert_with(|| {
                                DataNode {
                                    snode,
                                    value: Some(default.to_owned()),
                                    default: true,
                                }
                            });
                        }
                    }
                    _ => (),
                }
            }
        }
    }

    fn check_mandatory(&self) -> Result<(), Error> {
        for (path, node) in self
            .nodes
            .iter()
            .filter(|(_, node)| is_interior(node.snode))
        {
            for snode in node.snode.children().filter(|snode| snode.mandatory)
            {
                let child = format!("{path}/{}", snode.name());
                if !self.nodes.contains_key(&child) {
                    return Err(Error::MissingMandatory(child));
                }
            }
        }

        Ok(())
    }
}

impl Default for DataTree {
    fn default() -> DataTree {
        DataTree::new()
    }
}

// ===== impl DataNodeRef =====

impl<'a> DataNodeRef<'a> {
    pub fn path(&self) -> &'a str {
        self.path
    }

    pub fn schema(&self) -> &'static SchemaNode {
        self.node.snode
    }

    // Returns the canonical value of leaf and leaf-list nodes. Empty leaves
    // hold an empty string.
    pub fn value(&self) -> Option<&'a str> {
        self.node.value.as_deref()
    }

    pub fn is_default(&self) -> bool {
        self.node.default
    }

    pub fn parent(&self) -> Option<DataNodeRef<'a>> {
        parent_path(self.path).and_then(|parent| self.tree.find_path(parent))
    }

    pub fn ancestors(&self) -> impl Iterator<Item = DataNodeRef<'a>> + use<'a> {
        std::iter::successors(self.parent(), |dnode| dnode.parent())
    }

    pub fn inclusive_ancestors(
        &self,
    ) -> impl Iterator<Item = DataNodeRef<'a>> + use<'a> {
        std::iter::successors(Some(*self), |dnode| dnode.parent())
    }

    pub fn children(&self) -> impl Iterator<Item = DataNodeRef<'a>> + use<'a> {
        let parent = self.path;
        self.descendants()
            .filter(move |dnode| parent_path(dnode.path) == Some(parent))
    }

    // Returns an iterator over this node and all its descendants, parents
    // before children.
    pub fn traverse(&self) -> impl Iterator<Item = DataNodeRef<'a>> + use<'a> {
        std::iter::once(*self).chain(self.descendants())
    }

    // Looks up a node using a path relative to this one. Absolute paths are
    // looked up from the root of the tree.
    pub fn find_relative(&self, path: &str) -> Option<DataNodeRef<'a>> {
        if path.starts_with('/') {
            return self.tree.find_path(path);
        }

        let mut dnode = *self;
        for segment in path.split('/') {
            match segment {
                "" | "." => (),
                ".." => dnode = dnode.parent()?,
                name => {
                    let path = format!("{}/{}", dnode.path, name);
                    dnode = self.tree.find_path(&path)?;
                }
            }
        }

        Some(dnode)
    }

    fn descendants(&self) -> impl Iterator<Item = DataNodeRef<'a>> + use<'a> {
        let tree = self.tree;
        let prefix = self.path;
        tree.nodes
            .range::<str, _>((Bound::Excluded(prefix), Bound::Unbounded))
            .take_while(move |(path, _)| path.starts_with(prefix))
            .filter(move |(path, _)| path[prefix.len()..].starts_with('/'))
            .map(move |(path, node)| DataNodeRef { tree, path, node })
    }
}

impl std::fmt::Debug for DataNodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataNodeRef")
            .field("path", &self.path)
            .field("value", &self.node.value)
            .finish()
    }
}

// ===== impl DataDiff =====

impl<'a> DataDiff<'a> {
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (DataDiffOp, DataNodeRef<'a>)> + '_ {
        self.ops.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

// ===== helper functions =====

fn is_interior(snode: &SchemaNode) -> bool {
    matches!(
        snode.kind,
        SchemaNodeKind::Container
            | SchemaNodeKind::PresenceContainer
            | SchemaNodeKind::List(_)
    )
}

fn json_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(value) => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        Value::Bool(value) => Some(value.to_string()),
        _ => None,
    }
}

fn leaf_to_json(leaf_type: LeafType, value: &str) -> Value {
    match leaf_type {
        LeafType::Bool => Value::Bool(value == "true"),
        LeafType::Uint8 | LeafType::Uint16 | LeafType::Uint32 => value
            .parse::<u64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(value.to_owned())),
        LeafType::Empty => Value::Array(vec![Value::Null]),
        _ => Value::String(value.to_owned()),
    }
}

fn nodes_to_json<'a>(
    dnodes: impl Iterator<Item = DataNodeRef<'a>>,
) -> Map<String, Value> {
    let mut obj = Map::new();

    for dnode in dnodes {
        let snode = dnode.schema();
        let name = snode.name().to_owned();
        match snode.kind {
            SchemaNodeKind::Container | SchemaNodeKind::PresenceContainer => {
                let inner = nodes_to_json(dnode.children());
                if snode.kind.is_np_container() && inner.is_empty() {
                    continue;
                }
                obj.insert(name, Value::Object(inner));
            }
            SchemaNodeKind::List(_) => {
                let inner = nodes_to_json(dnode.children());
                if let Value::Array(entries) =
                    obj.entry(name).or_insert_with(|| Value::Array(vec![]))
                {
                    entries.push(Value::Object(inner));
                }
            }
            SchemaNodeKind::LeafList(leaf_type) => {
                let value = leaf_to_json(leaf_type, dnode.value().unwrap_or(""));
                if let Value::Array(values) =
                    obj.entry(name).or_insert_with(|| Value::Array(vec![]))
                {
                    values.push(value);
                }
            }
            SchemaNodeKind::Leaf(leaf_type) => {
                if dnode.is_default() {
                    continue;
                }
                let value = leaf_to_json(leaf_type, dnode.value().unwrap_or(""));
                obj.insert(name, value);
            }
        }
    }

    obj
}

// Builds a list key or leaf-list value predicate.
fn predicate(name: &str, value: &str) -> String {
    if value.contains('\'') {
        format!("[{name}=\"{value}\"]")
    } else {
        format!("[{name}='{value}']")
    }
}

// Returns the data path of the parent node, or `None` for top-level nodes.
pub fn parent_path(path: &str) -> Option<&str> {
    let mut quote = None;
    let mut separator = None;
    for (idx, c) in path.char_indices() {
        match (quote, c) {
            (None, '\'' | '"') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (None, '/') => separator = Some(idx),
            _ => (),
        }
    }

    match separator {
        None | Some(0) => None,
        Some(idx) => Some(&path[..idx]),
    }
}

// ===== unit tests =====

#[cfg(test)]
mod tests {
    use maplit::btreeset;
    use serde_json::json;

    use super::*;

    const INSTANCE: &str = "/frr-isisd:isis/instance[area-tag='1']";
    const INTERFACE: &str =
        "/frr-interface:lib/interface[name='eth/0'][vrf='default']";

    fn config() -> DataTree {
        DataTree::from_json(&json!({
            "frr-isisd:isis": {
                "instance": [{
                    "area-tag": "1",
                    "area-address": ["49.0001.1111.1111.1111.00"],
                    "overload": [null],
                    "lsp": { "mtu": 1400 }
                }]
            },
            "frr-interface:lib": {
                "interface": [{
                    "name": "eth/0",
                    "vrf": "default",
                    "frr-isisd:isis": { "area-tag": "1" }
                }]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path("/frr-isisd:isis"), None);
        assert_eq!(
            parent_path(&format!("{INSTANCE}/lsp/mtu")),
            Some(format!("{INSTANCE}/lsp").as_str())
        );
        assert_eq!(
            parent_path(&format!("{INTERFACE}/frr-isisd:isis")),
            Some(INTERFACE)
        );
    }

    #[test]
    fn test_implicit_nodes() {
        let dtree = config();

        let dnode = dtree
            .find_path(&format!("{INSTANCE}/lsp/refresh-interval/level-1"))
            .unwrap();
        assert!(dnode.is_default());
        assert_eq!(dnode.value(), Some("900"));

        let dnode = dtree.find_path(&format!("{INSTANCE}/lsp/mtu")).unwrap();
        assert!(!dnode.is_default());
        assert_eq!(dnode.value(), Some("1400"));

        // Presence containers aren't instantiated implicitly.
        assert!(
            dtree
                .find_path(&format!("{INSTANCE}/area-password"))
                .is_none()
        );
    }

    #[test]
    fn test_relative_lookup() {
        let dtree = config();
        let dnode = dtree
            .find_path(&format!("{INTERFACE}/frr-isisd:isis/area-tag"))
            .unwrap();

        let name = dnode.find_relative("../../name").unwrap();
        assert_eq!(name.value(), Some("eth/0"));
        let circuit_type = dnode.find_relative("../circuit-type").unwrap();
        assert_eq!(circuit_type.value(), Some("level-1-2"));
        assert!(dnode.find_relative("../ipv4-routing").is_none());
    }

    #[test]
    fn test_children() {
        let dtree = config();
        let dnode = dtree.find_path(&format!("{INSTANCE}/lsp")).unwrap();

        let children = dnode
            .children()
            .map(|dnode| dnode.schema().name())
            .collect::<std::collections::BTreeSet<_>>();
        assert_eq!(
            children,
            btreeset! {
                "generation-interval",
                "maximum-lifetime",
                "mtu",
                "refresh-interval",
            }
        );
    }

    #[test]
    fn test_diff() {
        let old = config();
        let new = DataTree::from_json(&json!({
            "frr-isisd:isis": {
                "instance": [{
                    "area-tag": "1",
                    "area-address": ["49.0002.1111.1111.1111.00"],
                    "area-password": { "password": "foo" }
                }]
            }
        }))
        .unwrap();

        let ops = old
            .diff(&new)
            .iter()
            .map(|(op, dnode)| (op, dnode.path().to_owned()))
            .collect::<Vec<_>>();
        assert_eq!(
            ops,
            vec![
                (DataDiffOp::Delete, INTERFACE.to_owned()),
                (
                    DataDiffOp::Delete,
                    format!(
                        "{INSTANCE}/area-address[.='49.0001.1111.1111.1111.00']"
                    )
                ),
                (
                    DataDiffOp::Create,
                    format!(
                        "{INSTANCE}/area-address[.='49.0002.1111.1111.1111.00']"
                    )
                ),
                (DataDiffOp::Create, format!("{INSTANCE}/area-password")),
                (DataDiffOp::Replace, format!("{INSTANCE}/lsp/mtu")),
                (DataDiffOp::Delete, format!("{INSTANCE}/overload")),
            ]
        );
    }

    #[test]
    fn test_invalid_data() {
        let error = DataTree::from_json(&json!({
            "frr-isisd:isis": {
                "instance": [{ "area-tag": "1", "is-type": "level-3" }]
            }
        }))
        .unwrap_err();
        assert!(matches!(error, Error::InvalidValue(..)));

        let error = DataTree::from_json(&json!({
            "frr-isisd:isis": {
                "instance": [{
                    "area-tag": "1",
                    "domain-password": { "password-type": "md5" }
                }]
            }
        }))
        .unwrap_err();
        assert!(matches!(error, Error::MissingMandatory(..)));

        let error = DataTree::from_json(&json!({
            "frr-isisd:isis": { "foo": 1 }
        }))
        .unwrap_err();
        assert!(matches!(error, Error::UnknownNode(..)));
    }

    #[test]
    fn test_json_encoding() {
        let dtree = config();
        let value = dtree.to_json();
        assert_eq!(
            value["frr-isisd:isis"]["instance"][0]["overload"],
            json!([null])
        );
        assert_eq!(value["frr-isisd:isis"]["instance"][0]["lsp"]["mtu"], 1400);
        assert!(value["frr-isisd:isis"]["instance"][0].get("is-type").is_none());
    }
}
