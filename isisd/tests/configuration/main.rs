//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
// Sponsored by NLnet as part of the Next Generation Internet initiative.
// See: https://nlnet.nl/NGI0
//

use std::sync::Once;

use isisd::auth::{Passwd, PasswdMethod, SnpAuthFlags};
use isisd::circuit::fsm;
use isisd::instance::Instance;
use isisd::levels::{LevelNumber, LevelType};
use isisd::northbound::configuration::{CALLBACKS, NetworkType};
use isisd::southbound::rx::{process_iface_delete, process_iface_update};
use isisd::tasks::messages::ProtocolOutputMsg;
use isisd::tasks::messages::output::{
    AreaDestroyedMsg, CircuitUpdMsg, LspGenerateMsg, LspRegenerateMsg,
    ProtocolMsg,
};
use isisd_northbound::CallbackOp;
use isisd_northbound::configuration::Datastore;
use isisd_northbound::error::Error;
use isisd_northbound::yang::{interface, isis};
use isisd_utils::southbound::{InterfaceFlags, InterfaceUpdateMsg};
use isisd_yang::data::DataTree;
use isisd_yang::schema;
use maplit::btreeset;
use serde_json::{Value, json};
use tokio::sync::mpsc::UnboundedReceiver;

const NET1: &str = "49.0001.1111.1111.1111.00";
const NET2: &str = "49.0002.1111.1111.1111.00";
const NET_OTHER_SYSID: &str = "49.0001.2222.2222.2222.00";

struct Router {
    datastore: Datastore<Instance>,
    rx: UnboundedReceiver<ProtocolOutputMsg>,
}

// ===== impl Router =====

impl Router {
    fn new() -> Router {
        setup();
        let (instance, rx) = Instance::with_channels();
        Router {
            datastore: Datastore::new(instance),
            rx,
        }
    }

    fn instance(&self) -> &Instance {
        &self.datastore.provider
    }

    fn commit(&mut self, value: Value) -> usize {
        let report = self.datastore.commit(config(value)).unwrap();
        assert!(report.errors.is_empty(), "{:?}", report.errors);
        report.changes
    }

    fn commit_err(&mut self, value: Value) -> Error {
        self.datastore.commit(config(value)).unwrap_err()
    }

    fn iface_update(&mut self, ifname: &str, operative: bool) {
        let mut flags = InterfaceFlags::BROADCAST;
        if operative {
            flags.insert(InterfaceFlags::OPERATIVE);
        }
        let msg = InterfaceUpdateMsg {
            ifname: ifname.to_owned(),
            vrf: "default".to_owned(),
            flags,
        };
        process_iface_update(&mut self.datastore.provider, msg).unwrap();
    }

    fn iface_delete(
        &mut self,
        ifname: &str,
    ) -> Result<(), isisd::error::Error> {
        process_iface_delete(&mut self.datastore.provider, ifname)
    }

    fn messages(&mut self) -> Vec<ProtocolMsg> {
        let mut msgs = vec![];
        while let Ok(msg) = self.rx.try_recv() {
            msgs.push(msg);
        }
        msgs
    }

    fn system_id(&self) -> Option<String> {
        self.instance().identity.system_id().map(|system_id| {
            let bytes = system_id.as_ref();
            bytes
                .chunks(2)
                .map(|chunk| format!("{:02X}{:02X}", chunk[0], chunk[1]))
                .collect::<Vec<_>>()
                .join(".")
        })
    }
}

// ===== helper functions =====

fn setup() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt::Subscriber::builder()
            .with_target(false)
            .with_ansi(false)
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .init();
    });
}

fn config(value: Value) -> DataTree {
    DataTree::from_json(&value).unwrap()
}

fn area_entry(tag: &str, addresses: &[&str]) -> Value {
    json!({
        "area-tag": tag,
        "area-address": addresses,
    })
}

fn iface_entry(ifname: &str, isis: Value) -> Value {
    json!({
        "name": ifname,
        "vrf": "default",
        "frr-isisd:isis": isis,
    })
}

fn tree(areas: Vec<Value>, interfaces: Vec<Value>) -> Value {
    let mut value = json!({
        "frr-isisd:isis": { "instance": areas },
    });
    if !interfaces.is_empty() {
        value["frr-interface:lib"] = json!({ "interface": interfaces });
    }
    value
}

fn lsp_generate(area: &str, level: LevelNumber) -> ProtocolMsg {
    ProtocolMsg::LspGenerate(LspGenerateMsg {
        area: area.to_owned(),
        level,
    })
}

fn lsp_regenerate(area: &str, level_type: LevelType) -> ProtocolMsg {
    ProtocolMsg::LspRegenerate(LspRegenerateMsg {
        area: area.to_owned(),
        level_type,
    })
}

// ===== area tests =====

#[test]
fn area_address_fixes_system_id() {
    let mut router = Router::new();

    router.commit(tree(vec![area_entry("1", &[NET1])], vec![]));
    assert_eq!(router.system_id().as_deref(), Some("1111.1111.1111"));
    let area = router.instance().arenas.areas.get_by_tag("1").unwrap();
    assert_eq!(area.state.area_addrs.len(), 1);
    assert!(area.is_active());
    assert_eq!(
        router.messages(),
        vec![
            lsp_generate("1", LevelNumber::L1),
            lsp_generate("1", LevelNumber::L2),
        ]
    );

    // Additional area addresses keep the System ID.
    router.commit(tree(vec![area_entry("1", &[NET1, NET2])], vec![]));
    let area = router.instance().arenas.areas.get_by_tag("1").unwrap();
    assert_eq!(area.state.area_addrs.len(), 2);
    assert_eq!(router.system_id().as_deref(), Some("1111.1111.1111"));
}

#[test]
fn area_address_system_id_mismatch() {
    let mut router = Router::new();
    router.commit(tree(vec![area_entry("1", &[NET1])], vec![]));
    router.messages();

    let areas = vec![area_entry("1", &[NET1, NET_OTHER_SYSID])];
    let error = router.commit_err(tree(areas, vec![]));
    match error {
        Error::ValidationCallback(error) => assert_eq!(
            error,
            "System ID must not change when defining additional area addresses"
        ),
        error => panic!("unexpected error: {error:?}"),
    }

    // Nothing changed.
    let area = router.instance().arenas.areas.get_by_tag("1").unwrap();
    assert_eq!(area.state.area_addrs.len(), 1);
    assert!(router.messages().is_empty());
    assert!(
        router
            .datastore
            .running()
            .find_path(
                "/frr-isisd:isis/instance[area-tag='1']/area-address\
                 [.='49.0001.2222.2222.2222.00']"
            )
            .is_none()
    );
}

#[test]
fn area_address_system_id_mismatch_same_commit() {
    let mut router = Router::new();

    // The System ID isn't fixed yet, but the new area addresses disagree.
    let areas = vec![area_entry("1", &[NET1, "49.0003.2222.2222.2222.00"])];
    let error = router.commit_err(tree(areas, vec![]));
    match error {
        Error::ValidationCallback(error) => assert_eq!(
            error,
            "all area addresses must share the same System ID"
        ),
        error => panic!("unexpected error: {error:?}"),
    }

    // Same thing with the addresses split across two areas.
    let areas = vec![
        area_entry("1", &[NET1]),
        area_entry("2", &[NET_OTHER_SYSID]),
    ];
    let error = router.commit_err(tree(areas, vec![]));
    assert!(matches!(error, Error::ValidationCallback(..)));

    assert!(router.instance().arenas.areas.is_empty());
    assert_eq!(router.system_id(), None);
    assert!(router.messages().is_empty());

    // Matching System IDs are fine.
    let areas = vec![area_entry("1", &[NET1]), area_entry("2", &[NET2])];
    router.commit(tree(areas, vec![]));
    assert_eq!(router.system_id().as_deref(), Some("1111.1111.1111"));
}

#[test]
fn area_address_release_system_id() {
    let mut router = Router::new();
    router.commit(tree(vec![area_entry("1", &[NET1])], vec![]));

    // Removing the last area address releases the System ID.
    router.commit(tree(vec![area_entry("1", &[])], vec![]));
    assert_eq!(router.system_id(), None);
    let area = router.instance().arenas.areas.get_by_tag("1").unwrap();
    assert!(!area.is_active());

    // A different System ID can now be used.
    router.commit(tree(vec![area_entry("1", &[NET_OTHER_SYSID])], vec![]));
    assert_eq!(router.system_id().as_deref(), Some("2222.2222.2222"));
}

#[test]
fn area_address_nsel() {
    let mut router = Router::new();

    let areas = vec![area_entry("1", &["49.0001.1111.1111.1111.01"])];
    let error = router.commit_err(tree(areas, vec![]));
    match error {
        Error::ValidationCallback(error) => assert_eq!(
            error,
            "nsel byte (last byte) in area address must be 0"
        ),
        error => panic!("unexpected error: {error:?}"),
    }

    let areas = vec![area_entry("1", &["bogus"])];
    let error = router.commit_err(tree(areas, vec![]));
    assert!(matches!(error, Error::ValidationCallback(..)));

    // Validation failures leave the instance untouched.
    assert!(router.instance().arenas.areas.is_empty());
    assert_eq!(router.system_id(), None);
    assert!(router.datastore.bindings().is_empty());
    assert!(router.messages().is_empty());
}

#[test]
fn area_address_duplicate() {
    let mut router = Router::new();

    // Both values decode to the same area address.
    router.commit(tree(
        vec![area_entry(
            "1",
            &["49.000a.1111.1111.1111.00", "49.000A.1111.1111.1111.00"],
        )],
        vec![],
    ));
    let area = router.instance().arenas.areas.get_by_tag("1").unwrap();
    assert_eq!(area.state.area_addrs.len(), 1);
}

#[test]
fn area_duplicate_system_id() {
    let mut router = Router::new();

    // The System ID is shared by all areas.
    router.commit(tree(vec![area_entry("1", &[NET1])], vec![]));
    let error = router.commit_err(tree(
        vec![area_entry("1", &[NET1]), area_entry("2", &[NET_OTHER_SYSID])],
        vec![],
    ));
    assert!(matches!(error, Error::ValidationCallback(..)));

    let areas = vec![area_entry("1", &[NET1]), area_entry("2", &[NET2])];
    router.commit(tree(areas, vec![]));
    assert_eq!(router.instance().arenas.areas.len(), 2);

    // Destroying one area keeps the System ID in use.
    router.commit(tree(vec![area_entry("2", &[NET2])], vec![]));
    assert_eq!(router.system_id().as_deref(), Some("1111.1111.1111"));
}

#[test]
fn area_destroy() {
    let mut router = Router::new();
    router.commit(tree(
        vec![area_entry("1", &[NET1])],
        vec![iface_entry("eth0", json!({ "area-tag": "1" }))],
    ));
    assert_eq!(router.instance().arenas.circuits.len(), 1);
    router.messages();

    router.commit(json!({}));
    assert!(router.instance().arenas.areas.is_empty());
    assert!(router.instance().arenas.circuits.is_empty());
    assert!(router.datastore.bindings().is_empty());
    assert_eq!(router.system_id(), None);
    assert_eq!(
        router.messages(),
        vec![ProtocolMsg::AreaDestroyed(AreaDestroyedMsg {
            area: "1".to_owned()
        })]
    );
}

#[test]
fn area_is_type() {
    let mut router = Router::new();

    // Inactive areas don't originate LSPs.
    let mut value = area_entry("1", &[]);
    value["is-type"] = json!("level-1");
    router.commit(tree(vec![value.clone()], vec![]));
    assert!(router.messages().is_empty());
    let area_ref = router.instance().arenas.areas.get_by_tag("1").unwrap();
    assert_eq!(area_ref.level_type(), LevelType::L1);

    value["area-address"] = json!([NET1]);
    router.commit(tree(vec![value.clone()], vec![]));
    assert_eq!(router.messages(), vec![lsp_generate("1", LevelNumber::L1)]);

    value["is-type"] = json!("level-2-only");
    router.commit(tree(vec![value], vec![]));
    assert_eq!(router.messages(), vec![lsp_generate("1", LevelNumber::L2)]);
}

#[test]
fn area_lsp_regenerate() {
    let mut router = Router::new();
    router.commit(tree(vec![area_entry("1", &[])], vec![]));

    let mut value = area_entry("1", &[]);
    value["overload"] = json!([null]);
    value["metric-style"] = json!("narrow");
    value["lsp"] = json!({
        "mtu": 1400,
        "refresh-interval": { "level-1": 600 },
    });
    router.commit(tree(vec![value], vec![]));

    // Multiple changes result in a single request.
    assert_eq!(
        router.messages(),
        vec![
            lsp_regenerate("1", LevelType::L1),
            lsp_regenerate("1", LevelType::All),
        ]
    );
    let area = router.instance().arenas.areas.get_by_tag("1").unwrap();
    assert!(area.config.overload);
    assert!(area.config.old_metric);
    assert!(!area.config.new_metric);
    assert_eq!(area.config.lsp_mtu, 1400);
    assert_eq!(area.config.lsp_refresh.l1, 600);
    assert_eq!(area.config.lsp_refresh.l2, 900);
}

#[test]
fn area_spf_backoff() {
    let mut router = Router::new();

    let mut value = area_entry("1", &[]);
    value["spf"] = json!({
        "ietf-backoff-delay": { "init-delay": 100 }
    });
    router.commit(tree(vec![value], vec![]));
    let area = router.instance().arenas.areas.get_by_tag("1").unwrap();
    let backoff = area.config.spf_backoff.as_ref().unwrap();
    assert_eq!(backoff.init_delay, 100);
    assert_eq!(backoff.hold_down, 10000);

    router.commit(tree(vec![area_entry("1", &[])], vec![]));
    let area = router.instance().arenas.areas.get_by_tag("1").unwrap();
    assert_eq!(area.config.spf_backoff, None);
}

#[test]
fn area_passwords() {
    let mut router = Router::new();

    let mut value = area_entry("1", &[]);
    value["area-password"] = json!({
        "password": "foo",
        "password-type": "md5",
        "authenticate-snp": "validate",
    });
    value["domain-password"] = json!({ "password": "bar" });
    router.commit(tree(vec![value.clone()], vec![]));

    let area = router.instance().arenas.areas.get_by_tag("1").unwrap();
    assert_eq!(
        area.config.passwd.l1,
        Some(Passwd::new(
            PasswdMethod::HmacMd5,
            "foo",
            SnpAuthFlags::SEND | SnpAuthFlags::VALIDATE
        ))
    );
    assert_eq!(
        area.config.passwd.l2,
        Some(Passwd::new(
            PasswdMethod::Cleartext,
            "bar",
            SnpAuthFlags::empty()
        ))
    );
    assert_eq!(
        router.messages(),
        vec![
            lsp_regenerate("1", LevelType::L1),
            lsp_regenerate("1", LevelType::L2),
        ]
    );

    // Changing a single leaf rebuilds the whole password.
    value["area-password"]["password-type"] = json!("clear-text");
    router.commit(tree(vec![value.clone()], vec![]));
    let area = router.instance().arenas.areas.get_by_tag("1").unwrap();
    let passwd = area.config.passwd.l1.as_ref().unwrap();
    assert_eq!(passwd.method, PasswdMethod::Cleartext);
    assert_eq!(passwd.secret, "foo");
    assert_eq!(router.messages(), vec![lsp_regenerate("1", LevelType::L1)]);

    // Removal.
    value.as_object_mut().unwrap().remove("domain-password");
    router.commit(tree(vec![value.clone()], vec![]));
    let area = router.instance().arenas.areas.get_by_tag("1").unwrap();
    assert!(area.config.passwd.l1.is_some());
    assert_eq!(area.config.passwd.l2, None);
    assert_eq!(router.messages(), vec![lsp_regenerate("1", LevelType::L2)]);

    // Oversized passwords are rejected.
    value["domain-password"] = json!({ "password": "x".repeat(255) });
    let error = router.commit_err(tree(vec![value], vec![]));
    assert!(matches!(error, Error::ValidationCallback(..)));
}

#[test]
fn idempotent_replay() {
    let mut router = Router::new();
    let value = tree(
        vec![area_entry("1", &[NET1])],
        vec![iface_entry(
            "eth0",
            json!({ "area-tag": "1", "ipv4-routing": [null] }),
        )],
    );

    assert!(router.commit(value.clone()) > 0);
    router.messages();

    assert_eq!(router.commit(value), 0);
    assert!(router.messages().is_empty());
    assert_eq!(router.instance().arenas.areas.len(), 1);
    assert_eq!(router.instance().arenas.circuits.len(), 1);
}

// ===== circuit tests =====

#[test]
fn circuit_create() {
    let mut router = Router::new();
    router.commit(tree(
        vec![area_entry("1", &[])],
        vec![iface_entry("eth0", json!({ "area-tag": "1" }))],
    ));

    let instance = router.instance();
    let circuit = instance.arenas.circuits.get_by_name("eth0").unwrap();
    let area = instance.arenas.areas.get_by_tag("1").unwrap();
    assert_eq!(circuit.state, fsm::State::Conf);
    assert_eq!(circuit.area, Some(area.index));
    assert!(area.state.circuits.contains(&circuit.index));
    assert!(
        router
            .datastore
            .bindings()
            .get(
                "/frr-interface:lib/interface[name='eth0'][vrf='default']\
                 /frr-isisd:isis"
            )
            .is_some()
    );

    // The interface comes up afterwards.
    router.iface_update("eth0", true);
    let circuit = router.instance().arenas.circuits.get_by_name("eth0");
    let circuit = circuit.unwrap();
    assert!(circuit.is_up());
    assert_eq!(
        router.messages(),
        vec![
            ProtocolMsg::CircuitUp(CircuitUpdMsg {
                area: "1".to_owned(),
                ifname: "eth0".to_owned(),
                level_type: LevelType::All,
            }),
            lsp_regenerate("1", LevelType::All),
        ]
    );
}

#[test]
fn circuit_create_operative() {
    let mut router = Router::new();
    router.iface_update("eth0", true);
    let circuit = router.instance().arenas.circuits.get_by_name("eth0");
    let circuit = circuit.unwrap();
    assert_eq!(circuit.state, fsm::State::Init);

    router.commit(tree(
        vec![area_entry("1", &[])],
        vec![iface_entry("eth0", json!({ "area-tag": "1" }))],
    ));
    let circuit = router.instance().arenas.circuits.get_by_name("eth0");
    let circuit = circuit.unwrap();
    assert!(circuit.is_up());
    assert!(matches!(
        router.messages().as_slice(),
        [ProtocolMsg::CircuitUp(..), ProtocolMsg::LspRegenerate(..)]
    ));

    // Removing the interface configuration brings the circuit down and
    // deletes it.
    router.commit(tree(vec![area_entry("1", &[])], vec![]));
    assert!(router.instance().arenas.circuits.get_by_name("eth0").is_none());
    assert!(matches!(
        router.messages().as_slice(),
        [ProtocolMsg::CircuitDown(..), ProtocolMsg::LspRegenerate(..)]
    ));
    let area = router.instance().arenas.areas.get_by_tag("1").unwrap();
    assert!(area.state.circuits.is_empty());
}

#[test]
#[should_panic(expected = "before the area has been created")]
fn circuit_create_without_area() {
    let mut router = Router::new();
    let _ = router.datastore.commit(config(tree(
        vec![area_entry("1", &[])],
        vec![iface_entry("eth0", json!({ "area-tag": "2" }))],
    )));
}

#[test]
fn circuit_stale_binding() {
    let mut router = Router::new();
    router.commit(tree(
        vec![area_entry("1", &[])],
        vec![iface_entry("eth0", json!({ "area-tag": "1" }))],
    ));

    // Destroying the area tears the circuit down, leaving the interface
    // configuration behind.
    let interfaces = json!({
        "frr-interface:lib": {
            "interface": [iface_entry("eth0", json!({ "area-tag": "1" }))]
        }
    });
    router.commit(interfaces);
    assert!(router.instance().arenas.circuits.is_empty());

    let report = router
        .datastore
        .commit(config(json!({
            "frr-interface:lib": {
                "interface": [{ "name": "eth0", "vrf": "default" }]
            }
        })))
        .unwrap();
    assert_eq!(report.errors.len(), 1);
    assert!(matches!(report.errors[0], Error::Inconsistency(..)));
}

#[test]
fn circuit_address_families() {
    let mut router = Router::new();
    router.commit(tree(
        vec![area_entry("1", &[])],
        vec![iface_entry(
            "eth0",
            json!({
                "area-tag": "1",
                "ipv4-routing": [null],
                "ipv6-routing": [null],
            }),
        )],
    ));
    let instance = router.instance();
    let area = instance.arenas.areas.get_by_tag("1").unwrap();
    assert_eq!(area.state.ip_circuits, 1);
    assert_eq!(area.state.ipv6_circuits, 1);

    // Disabling one address family keeps the other one.
    router.commit(tree(
        vec![area_entry("1", &[])],
        vec![iface_entry(
            "eth0",
            json!({ "area-tag": "1", "ipv4-routing": [null] }),
        )],
    ));
    let instance = router.instance();
    let area = instance.arenas.areas.get_by_tag("1").unwrap();
    assert_eq!(area.state.ip_circuits, 1);
    assert_eq!(area.state.ipv6_circuits, 0);
    let circuit = instance.arenas.circuits.get_by_name("eth0").unwrap();
    assert!(circuit.config.afs.ipv4);
    assert!(!circuit.config.afs.ipv6);

    // Deleting the circuit releases the counters.
    router.commit(tree(vec![area_entry("1", &[])], vec![]));
    let area = router.instance().arenas.areas.get_by_tag("1").unwrap();
    assert_eq!(area.state.ip_circuits, 0);
    assert_eq!(area.state.ipv6_circuits, 0);
}

#[test]
fn circuit_type_validation() {
    let mut router = Router::new();
    router.iface_update("eth0", true);

    let mut value = area_entry("1", &[]);
    value["is-type"] = json!("level-1");
    router.commit(tree(
        vec![value.clone()],
        vec![iface_entry("eth0", json!({ "area-tag": "1" }))],
    ));

    let error = router.commit_err(tree(
        vec![value.clone()],
        vec![iface_entry(
            "eth0",
            json!({ "area-tag": "1", "circuit-type": "level-2-only" }),
        )],
    ));
    match error {
        Error::ValidationCallback(error) => {
            assert_eq!(error, "Invalid circuit level for area 1")
        }
        error => panic!("unexpected error: {error:?}"),
    }

    // A matching level is accepted.
    router.commit(tree(
        vec![value],
        vec![iface_entry(
            "eth0",
            json!({ "area-tag": "1", "circuit-type": "level-1" }),
        )],
    ));
    let circuit = router.instance().arenas.circuits.get_by_name("eth0");
    let circuit = circuit.unwrap();
    assert_eq!(circuit.config.circuit_type, LevelType::L1);
}

#[test]
fn circuit_area_tag_validation() {
    let mut router = Router::new();
    router.iface_update("eth0", false);
    router.commit(tree(
        vec![area_entry("1", &[]), area_entry("2", &[])],
        vec![iface_entry("eth0", json!({ "area-tag": "1" }))],
    ));

    let error = router.commit_err(tree(
        vec![area_entry("1", &[]), area_entry("2", &[])],
        vec![iface_entry("eth0", json!({ "area-tag": "2" }))],
    ));
    match error {
        Error::ValidationCallback(error) => {
            assert_eq!(error, "ISIS circuit is already defined on 1")
        }
        error => panic!("unexpected error: {error:?}"),
    }
}

#[test]
fn circuit_parameters() {
    let mut router = Router::new();
    router.commit(tree(
        vec![area_entry("1", &[])],
        vec![iface_entry(
            "eth0",
            json!({
                "area-tag": "1",
                "hello": {
                    "padding": false,
                    "interval": { "level-1": 5 },
                    "multiplier": { "level-2": 20 },
                },
                "metric": { "level-1": 100, "level-2": 200 },
                "priority": { "level-1": 80 },
                "network-type": "point-to-point",
                "passive": [null],
                "password": { "password": "secret", "password-type": "md5" },
            }),
        )],
    ));

    let circuit = router.instance().arenas.circuits.get_by_name("eth0");
    let circuit = circuit.unwrap();
    let config = &circuit.config;
    assert!(!config.hello_padding);
    assert_eq!(config.hello_interval.l1, 5);
    assert_eq!(config.hello_interval.l2, 3);
    assert_eq!(config.hello_multiplier.l2, 20);
    assert_eq!(config.metric.l1, 100);
    assert_eq!(config.metric.l2, 200);
    assert_eq!(config.priority.l1, 80);
    assert_eq!(config.priority.l2, 64);
    assert!(config.passive);
    assert_eq!(
        config.passwd,
        Some(Passwd::new(
            PasswdMethod::HmacMd5,
            "secret",
            SnpAuthFlags::empty()
        ))
    );
    assert_eq!(
        config.network_type,
        Some(NetworkType::PointToPoint)
    );

    // Removal restores the defaults.
    router.commit(tree(
        vec![area_entry("1", &[])],
        vec![iface_entry("eth0", json!({ "area-tag": "1" }))],
    ));
    let circuit = router.instance().arenas.circuits.get_by_name("eth0");
    let circuit = circuit.unwrap();
    assert!(!circuit.config.passive);
    assert_eq!(circuit.config.passwd, None);
    assert_eq!(circuit.config.network_type, None);
}

// ===== callback registration tests =====

#[test]
fn callbacks_cover_schema() {
    let isis_paths = [isis::PATH.as_str(), interface::isis::PATH.as_str()];
    let expected = schema::iter()
        .filter(|snode| {
            isis_paths.iter().any(|path| snode.path.starts_with(path))
        })
        .filter(|snode| {
            [CallbackOp::Create, CallbackOp::Modify, CallbackOp::Delete]
                .iter()
                .any(|operation| operation.is_valid(snode))
        })
        .map(|snode| snode.path)
        .collect::<Vec<_>>();

    for path in expected {
        assert!(CALLBACKS.get(path).is_some(), "{path}");
    }

    // Every registered path must exist in the schema.
    for path in CALLBACKS.paths() {
        assert!(schema::find(path).is_some(), "{path}");
    }
}

#[test]
fn callbacks_valid_operations() {
    for path in CALLBACKS.paths() {
        let snode = schema::find(path).unwrap();
        let node = CALLBACKS.get(path).unwrap();
        let operations = btreeset![
            CallbackOp::Create,
            CallbackOp::Modify,
            CallbackOp::Delete
        ];
        for operation in operations {
            let callbacks = node.op(operation);
            if callbacks.apply.is_some() || callbacks.validate.is_some() {
                assert!(operation.is_valid(snode), "{path} {operation}");
            }
        }
    }
}

#[test]
fn area_missing_binding() {
    let mut router = Router::new();

    // Load a configuration without creating any live state.
    let candidate = config(tree(vec![area_entry("1", &[NET1])], vec![]));
    let report = router.datastore.commit_changes(candidate, vec![]).unwrap();
    assert!(report.errors.is_empty());
    assert!(router.instance().arenas.areas.is_empty());

    // Deleting the area is reported instead of aborting the commit.
    let report = router.datastore.commit(config(json!({}))).unwrap();
    assert!(!report.errors.is_empty());
    assert!(
        report
            .errors
            .iter()
            .all(|error| matches!(error, Error::Inconsistency(..)))
    );
    assert!(report.errors.iter().any(|error| matches!(
        error,
        Error::Inconsistency(_, error) if error == "area not found"
    )));
    assert!(router.datastore.bindings().is_empty());
}

#[test]
fn circuit_area_change() {
    let mut router = Router::new();
    let areas = || vec![area_entry("1", &[NET1]), area_entry("2", &[NET2])];
    router.commit(tree(
        areas(),
        vec![iface_entry(
            "eth0",
            json!({ "area-tag": "1", "ipv4-routing": [null] }),
        )],
    ));

    // The interface isn't known to the system, so the circuit can move.
    router.commit(tree(
        areas(),
        vec![iface_entry(
            "eth0",
            json!({ "area-tag": "2", "ipv4-routing": [null] }),
        )],
    ));
    let instance = router.instance();
    let area1 = instance.arenas.areas.get_by_tag("1").unwrap();
    let area2 = instance.arenas.areas.get_by_tag("2").unwrap();
    let circuit = instance.arenas.circuits.get_by_name("eth0").unwrap();
    assert_eq!(circuit.area, Some(area2.index));
    assert!(circuit.config.afs.ipv4);
    assert!(area1.state.circuits.is_empty());
    assert_eq!(area1.state.ip_circuits, 0);
    assert!(area2.state.circuits.contains(&circuit.index));
    assert_eq!(area2.state.ip_circuits, 1);

    // Deleting the former area leaves the circuit alone.
    router.commit(tree(
        vec![area_entry("2", &[NET2])],
        vec![iface_entry(
            "eth0",
            json!({ "area-tag": "2", "ipv4-routing": [null] }),
        )],
    ));
    let circuit = router.instance().arenas.circuits.get_by_name("eth0");
    assert!(circuit.is_some());

    // The circuit binding is still valid.
    router.commit(tree(vec![area_entry("2", &[NET2])], vec![]));
    assert!(router.instance().arenas.circuits.is_empty());
    let area2 = router.instance().arenas.areas.get_by_tag("2").unwrap();
    assert!(area2.state.circuits.is_empty());
    assert_eq!(area2.state.ip_circuits, 0);
}

#[test]
fn interface_delete() {
    let mut router = Router::new();
    router.iface_update("eth0", true);
    router.commit(tree(
        vec![area_entry("1", &[])],
        vec![iface_entry("eth0", json!({ "area-tag": "1" }))],
    ));
    router.messages();

    // Losing the interface brings the circuit down.
    router.iface_delete("eth0").unwrap();
    assert!(router.instance().system.lookup("eth0", "default").is_none());
    let circuit = router.instance().arenas.circuits.get_by_name("eth0");
    assert_eq!(circuit.unwrap().state, fsm::State::Conf);
    assert!(matches!(
        router.messages().as_slice(),
        [ProtocolMsg::CircuitDown(..), ProtocolMsg::LspRegenerate(..)]
    ));

    let error = router.iface_delete("eth0").unwrap_err();
    assert!(matches!(error, isisd::error::Error::InterfaceNotFound(..)));

    // The circuit comes back up with the interface.
    router.iface_update("eth0", true);
    let circuit = router.instance().arenas.circuits.get_by_name("eth0");
    assert!(circuit.unwrap().is_up());
}
