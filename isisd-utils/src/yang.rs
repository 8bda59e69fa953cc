//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::str::FromStr;

use isisd_yang::data::DataNodeRef;
use isisd_yang::schema::LeafType;

/// Extension methods for `DataNodeRef`.
pub trait DataNodeRefExt {
    fn exists(&self, path: &str) -> bool;
    fn get_u8(&self) -> u8;
    fn get_u8_relative(&self, path: &str) -> Option<u8>;
    fn get_u16(&self) -> u16;
    fn get_u16_relative(&self, path: &str) -> Option<u16>;
    fn get_u32(&self) -> u32;
    fn get_u32_relative(&self, path: &str) -> Option<u32>;
    fn get_bool(&self) -> bool;
    fn get_bool_relative(&self, path: &str) -> Option<bool>;
    fn get_string(&self) -> String;
    fn get_string_relative(&self, path: &str) -> Option<String>;
}

// ===== impl DataNodeRef =====

impl DataNodeRefExt for DataNodeRef<'_> {
    fn exists(&self, path: &str) -> bool {
        self.find_relative(path).is_some()
    }

    fn get_u8(&self) -> u8 {
        get_number(self, LeafType::Uint8, "uint8")
    }

    fn get_u8_relative(&self, path: &str) -> Option<u8> {
        self.find_relative(path).map(|dnode| dnode.get_u8())
    }

    fn get_u16(&self) -> u16 {
        get_number(self, LeafType::Uint16, "uint16")
    }

    fn get_u16_relative(&self, path: &str) -> Option<u16> {
        self.find_relative(path).map(|dnode| dnode.get_u16())
    }

    fn get_u32(&self) -> u32 {
        get_number(self, LeafType::Uint32, "uint32")
    }

    fn get_u32_relative(&self, path: &str) -> Option<u32> {
        self.find_relative(path).map(|dnode| dnode.get_u32())
    }

    fn get_bool(&self) -> bool {
        match (self.schema().leaf_type(), self.value()) {
            (Some(LeafType::Bool), Some(value)) => value == "true",
            _ => panic_wrong_dnode_type(self, "bool"),
        }
    }

    fn get_bool_relative(&self, path: &str) -> Option<bool> {
        self.find_relative(path).map(|dnode| dnode.get_bool())
    }

    fn get_string(&self) -> String {
        self.value()
            .expect("data node doesn't hold any value")
            .to_owned()
    }

    fn get_string_relative(&self, path: &str) -> Option<String> {
        self.find_relative(path).map(|dnode| dnode.get_string())
    }
}

// ===== helper functions =====

fn get_number<T: FromStr>(
    dnode: &DataNodeRef<'_>,
    leaf_type: LeafType,
    type_name: &str,
) -> T {
    if dnode.schema().leaf_type() != Some(leaf_type) {
        panic_wrong_dnode_type(dnode, type_name);
    }
    dnode
        .value()
        .expect("data node doesn't hold any value")
        .parse()
        .unwrap_or_else(|_| panic_wrong_dnode_type(dnode, type_name))
}

fn panic_wrong_dnode_type(dnode: &DataNodeRef<'_>, expected: &str) -> ! {
    panic!(
        "wrong data node type: {} (expected {})",
        dnode.path(),
        expected
    );
}

// ===== unit tests =====

#[cfg(test)]
mod tests {
    use isisd_yang::data::DataTree;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_typed_getters() {
        let dtree = DataTree::from_json(&json!({
            "frr-interface:lib": {
                "interface": [{
                    "name": "eth0",
                    "vrf": "default",
                    "frr-isisd:isis": {
                        "area-tag": "1",
                        "ipv6-routing": [null],
                        "priority": { "level-2": 100 }
                    }
                }]
            }
        }))
        .unwrap();
        let dnode = dtree
            .find_path(
                "/frr-interface:lib/interface[name='eth0'][vrf='default']/frr-isisd:isis",
            )
            .unwrap();

        assert_eq!(dnode.get_string_relative("./area-tag").unwrap(), "1");
        assert_eq!(dnode.get_u8_relative("./priority/level-1"), Some(64));
        assert_eq!(dnode.get_u8_relative("./priority/level-2"), Some(100));
        assert_eq!(dnode.get_u32_relative("./hello/interval/level-1"), Some(3));
        assert_eq!(dnode.get_bool_relative("./hello/padding"), Some(true));
        assert!(dnode.exists("./ipv6-routing"));
        assert!(!dnode.exists("./ipv4-routing"));
        assert_eq!(dnode.get_u16_relative("./network-type"), None);
    }

    #[test]
    #[should_panic]
    fn test_wrong_type() {
        let dtree = DataTree::from_json(&json!({
            "frr-isisd:isis": { "instance": [{ "area-tag": "1" }] }
        }))
        .unwrap();
        let dnode = dtree
            .find_path("/frr-isisd:isis/instance[area-tag='1']/is-type")
            .unwrap();
        dnode.get_u16();
    }
}
