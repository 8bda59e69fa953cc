//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
// Sponsored by NLnet as part of the Next Generation Internet initiative.
// See: https://nlnet.nl/NGI0
//

use std::collections::BTreeSet;
use std::sync::LazyLock as Lazy;

use enum_as_inner::EnumAsInner;
use isisd_northbound::configuration::{
    CallbackArgs, Callbacks, CallbacksBuilder, PRIORITY_DFLT, Provider,
    ValidationCallbackArgs,
};
use isisd_northbound::yang::{interface, isis};
use isisd_utils::ip::{AddressFamilies, AddressFamily};
use isisd_utils::yang::DataNodeRefExt;
use isisd_yang::TryFromYang;
use isisd_yang::data::DataNodeRef;

use crate::address::Net;
use crate::area::Area;
use crate::auth::{Passwd, PasswdMethod, SnpAuthFlags};
use crate::circuit::Circuit;
use crate::collections::{AreaIndex, CircuitIndex};
use crate::instance::Instance;
use crate::levels::{LevelNumber, LevelType, Levels};
use crate::tasks::messages::output::{
    LspGenerateMsg, LspRegenerateMsg, ProtocolMsg,
};

#[derive(Clone, Debug, Default)]
#[derive(EnumAsInner)]
pub enum ListEntry {
    #[default]
    None,
    Area(AreaIndex),
    Circuit(CircuitIndex),
}

#[derive(Debug)]
pub enum Resource {
    // Decoded NET staged by an area address creation.
    AreaAddr(Net),
}

#[derive(Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Event {
    LspGenerate(AreaIndex, LevelNumber),
    LspRegenerate(AreaIndex, LevelType),
}

pub static CALLBACKS: Lazy<Callbacks<Instance>> = Lazy::new(load_callbacks);

// ===== configuration structs =====

#[derive(Debug)]
pub struct AreaCfg {
    pub level_type: LevelType,
    pub dynamic_hostname: bool,
    pub attached: bool,
    pub overload: bool,
    pub old_metric: bool,
    pub new_metric: bool,
    pub purge_originator: bool,
    pub log_adjacency_changes: bool,
    pub lsp_mtu: u16,
    pub lsp_refresh: Levels<u16>,
    pub lsp_lifetime: Levels<u16>,
    pub lsp_gen_interval: Levels<u16>,
    pub spf_backoff: Option<SpfBackoffCfg>,
    pub spf_min_interval: Levels<u16>,
    pub passwd: Levels<Option<Passwd>>,
}

// SPF back-off algorithm parameters (RFC 8405).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpfBackoffCfg {
    pub init_delay: u16,
    pub short_delay: u16,
    pub long_delay: u16,
    pub hold_down: u16,
    pub time_to_learn: u16,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricStyle {
    Narrow,
    Transition,
    Wide,
}

#[derive(Debug)]
pub struct CircuitCfg {
    pub circuit_type: LevelType,
    pub afs: AddressFamilies<bool>,
    pub csnp_interval: Levels<u16>,
    pub psnp_interval: Levels<u16>,
    pub hello_padding: bool,
    pub hello_interval: Levels<u32>,
    pub hello_multiplier: Levels<u16>,
    pub metric: Levels<u32>,
    pub priority: Levels<u8>,
    pub network_type: Option<NetworkType>,
    pub passive: bool,
    pub passwd: Option<Passwd>,
    pub disable_three_way_handshake: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NetworkType {
    Broadcast,
    PointToPoint,
}

// ===== callbacks =====

fn load_callbacks() -> Callbacks<Instance> {
    CallbacksBuilder::<Instance>::default()
        .path(isis::PATH)
        .path(isis::instance::PATH)
        .priority(PRIORITY_DFLT - 1)
        .create_apply(|instance, args| {
            let tag = args.dnode.get_string_relative("./area-tag").unwrap();
            if instance.arenas.areas.get_by_tag(&tag).is_some() {
                return Err(format!("area {} already exists", tag));
            }

            let area = instance.arenas.areas.insert(&tag);
            *args.binding = Some(ListEntry::Area(area.index));
            Ok(())
        })
        .delete_apply(|instance, args| {
            let area_idx = area_mut(instance, args.list_entry)?.index;
            instance.area_destroy(area_idx);
            Ok(())
        })
        .path(isis::instance::is_type::PATH)
        .modify_apply(|instance, args| {
            let level_type = args.dnode.get_string();
            let level_type = LevelType::try_from_yang(&level_type).unwrap();
            let area = area_mut(instance, args.list_entry)?;
            if area.config.level_type == level_type {
                return Ok(());
            }
            area.config.level_type = level_type;

            // Circuits follow the area level unless it runs both levels, so
            // LSPs must be originated again for every level now in use.
            if area.is_active() {
                let event_queue = args.event_queue;
                for level in level_type {
                    event_queue.insert(Event::LspGenerate(area.index, level));
                }
            }
            Ok(())
        })
        .path(isis::instance::area_address::PATH)
        .create_validate(|instance, args| {
            let net = args.dnode.get_string();
            let net = Net::try_from_yang(&net)
                .ok_or_else(|| "invalid area address".to_owned())?;
            if net.nsel() != 0 {
                return Err(
                    "nsel byte (last byte) in area address must be 0"
                        .to_owned(),
                );
            }
            if let Some(system_id) = instance.identity.system_id()
                && system_id != net.system_id()
            {
                return Err("System ID must not change when defining \
                            additional area addresses"
                    .to_owned());
            }

            // Area addresses committed together must also agree on the
            // System ID, even before it's fixed.
            let mismatch = args
                .new_config
                .traverse()
                .filter(|dnode| {
                    let snode = dnode.schema();
                    snode.path == isis::instance::area_address::PATH.as_str()
                })
                .filter_map(|dnode| dnode.value())
                .filter_map(Net::try_from_yang)
                .any(|other| other.system_id() != net.system_id());
            if mismatch {
                return Err("all area addresses must share the same System ID"
                    .to_owned());
            }
            Ok(())
        })
        .create_prepare(|_instance, args| {
            let net = args.dnode.get_string();
            let net = Net::try_from_yang(&net)
                .ok_or_else(|| "invalid area address".to_owned())?;
            *args.resource = Some(Resource::AreaAddr(net));
            Ok(())
        })
        .create_abort(|_instance, args| {
            args.resource.take();
        })
        .create_apply(|instance, args| {
            let Some(Resource::AreaAddr(net)) = args.resource.take() else {
                return Err("area address wasn't staged".to_owned());
            };
            let area_idx = area_mut(instance, args.list_entry)?.index;

            // The first area address ever configured determines the System
            // ID of the router.
            if !instance.identity.is_fixed() {
                instance.identity.fix(net.system_id());
            }
            let area = &mut instance.arenas.areas[area_idx];
            if !area.area_addr_add(net.area_addr()) {
                return Ok(());
            }

            // Only now the area LSPs can be originated.
            if area.is_active() {
                let event_queue = args.event_queue;
                for level in area.level_type() {
                    event_queue.insert(Event::LspGenerate(area_idx, level));
                }
            }
            Ok(())
        })
        .delete_apply(|instance, args| {
            let net = args.dnode.get_string();
            let net = Net::try_from_yang(&net)
                .ok_or_else(|| "invalid area address".to_owned())?;
            let area = area_mut(instance, args.list_entry)?;
            if !area.area_addr_remove(&net.area_addr()) {
                return Err("area address not found".to_owned());
            }

            // Last area address: the router no longer has a System ID.
            if area.state.area_addrs.is_empty() {
                instance.identity.release();
            }
            Ok(())
        })
        .path(isis::instance::dynamic_hostname::PATH)
        .modify_apply(|instance, args| {
            let dynamic_hostname = args.dnode.get_bool();
            let area = area_mut(instance, args.list_entry)?;
            area.config.dynamic_hostname = dynamic_hostname;
            lsp_regenerate(args.event_queue, area);
            Ok(())
        })
        .path(isis::instance::attached::PATH)
        .create_apply(|instance, args| {
            let area = area_mut(instance, args.list_entry)?;
            area.config.attached = true;
            lsp_regenerate(args.event_queue, area);
            Ok(())
        })
        .delete_apply(|instance, args| {
            let area = area_mut(instance, args.list_entry)?;
            area.config.attached = false;
            lsp_regenerate(args.event_queue, area);
            Ok(())
        })
        .path(isis::instance::overload::PATH)
        .create_apply(|instance, args| {
            let area = area_mut(instance, args.list_entry)?;
            area.config.overload = true;
            lsp_regenerate(args.event_queue, area);
            Ok(())
        })
        .delete_apply(|instance, args| {
            let area = area_mut(instance, args.list_entry)?;
            area.config.overload = false;
            lsp_regenerate(args.event_queue, area);
            Ok(())
        })
        .path(isis::instance::metric_style::PATH)
        .modify_apply(|instance, args| {
            let metric_style = args.dnode.get_string();
            let metric_style =
                MetricStyle::try_from_yang(&metric_style).unwrap();
            let area = area_mut(instance, args.list_entry)?;
            area.config.old_metric = metric_style.old_metric();
            area.config.new_metric = metric_style.new_metric();
            lsp_regenerate(args.event_queue, area);
            Ok(())
        })
        .path(isis::instance::purge_originator::PATH)
        .create_apply(|instance, args| {
            let area = area_mut(instance, args.list_entry)?;
            area.config.purge_originator = true;
            Ok(())
        })
        .delete_apply(|instance, args| {
            let area = area_mut(instance, args.list_entry)?;
            area.config.purge_originator = false;
            Ok(())
        })
        .path(isis::instance::lsp::mtu::PATH)
        .modify_apply(|instance, args| {
            let lsp_mtu = args.dnode.get_u16();
            let area = area_mut(instance, args.list_entry)?;
            area.config.lsp_mtu = lsp_mtu;
            Ok(())
        })
        .path(isis::instance::lsp::refresh_interval::level_1::PATH)
        .modify_apply(|instance, args| {
            lsp_refresh_set(instance, args, LevelNumber::L1)
        })
        .path(isis::instance::lsp::refresh_interval::level_2::PATH)
        .modify_apply(|instance, args| {
            lsp_refresh_set(instance, args, LevelNumber::L2)
        })
        .path(isis::instance::lsp::maximum_lifetime::level_1::PATH)
        .modify_apply(|instance, args| {
            let lsp_lifetime = args.dnode.get_u16();
            let area = area_mut(instance, args.list_entry)?;
            area.config.lsp_lifetime.l1 = lsp_lifetime;
            Ok(())
        })
        .path(isis::instance::lsp::maximum_lifetime::level_2::PATH)
        .modify_apply(|instance, args| {
            let lsp_lifetime = args.dnode.get_u16();
            let area = area_mut(instance, args.list_entry)?;
            area.config.lsp_lifetime.l2 = lsp_lifetime;
            Ok(())
        })
        .path(isis::instance::lsp::generation_interval::level_1::PATH)
        .modify_apply(|instance, args| {
            let gen_interval = args.dnode.get_u16();
            let area = area_mut(instance, args.list_entry)?;
            area.config.lsp_gen_interval.l1 = gen_interval;
            Ok(())
        })
        .path(isis::instance::lsp::generation_interval::level_2::PATH)
        .modify_apply(|instance, args| {
            let gen_interval = args.dnode.get_u16();
            let area = area_mut(instance, args.list_entry)?;
            area.config.lsp_gen_interval.l2 = gen_interval;
            Ok(())
        })
        .path(isis::instance::spf::ietf_backoff_delay::PATH)
        .create_apply(|instance, args| {
            let area = area_mut(instance, args.list_entry)?;
            area.config.spf_backoff = Some(Default::default());
            Ok(())
        })
        .delete_apply(|instance, args| {
            let area = area_mut(instance, args.list_entry)?;
            area.config.spf_backoff = None;
            Ok(())
        })
        .path(isis::instance::spf::ietf_backoff_delay::init_delay::PATH)
        .modify_apply(|instance, args| {
            let delay = args.dnode.get_u16();
            let backoff = spf_backoff_mut(instance, args.list_entry)?;
            backoff.init_delay = delay;
            Ok(())
        })
        .path(isis::instance::spf::ietf_backoff_delay::short_delay::PATH)
        .modify_apply(|instance, args| {
            let delay = args.dnode.get_u16();
            let backoff = spf_backoff_mut(instance, args.list_entry)?;
            backoff.short_delay = delay;
            Ok(())
        })
        .path(isis::instance::spf::ietf_backoff_delay::long_delay::PATH)
        .modify_apply(|instance, args| {
            let delay = args.dnode.get_u16();
            let backoff = spf_backoff_mut(instance, args.list_entry)?;
            backoff.long_delay = delay;
            Ok(())
        })
        .path(isis::instance::spf::ietf_backoff_delay::hold_down::PATH)
        .modify_apply(|instance, args| {
            let hold_down = args.dnode.get_u16();
            let backoff = spf_backoff_mut(instance, args.list_entry)?;
            backoff.hold_down = hold_down;
            Ok(())
        })
        .path(isis::instance::spf::ietf_backoff_delay::time_to_learn::PATH)
        .modify_apply(|instance, args| {
            let time_to_learn = args.dnode.get_u16();
            let backoff = spf_backoff_mut(instance, args.list_entry)?;
            backoff.time_to_learn = time_to_learn;
            Ok(())
        })
        .path(isis::instance::spf::minimum_interval::level_1::PATH)
        .modify_apply(|instance, args| {
            let interval = args.dnode.get_u16();
            let area = area_mut(instance, args.list_entry)?;
            area.config.spf_min_interval.l1 = interval;
            Ok(())
        })
        .path(isis::instance::spf::minimum_interval::level_2::PATH)
        .modify_apply(|instance, args| {
            let interval = args.dnode.get_u16();
            let area = area_mut(instance, args.list_entry)?;
            area.config.spf_min_interval.l2 = interval;
            Ok(())
        })
        .path(isis::instance::area_password::PATH)
        .delete_apply(|instance, args| {
            area_passwd_unset(instance, args, LevelNumber::L1)
        })
        .apply_finish(|instance, args| {
            let Some(area_idx) = args.list_entry.into_area().ok() else {
                return;
            };
            let passwd = passwd_from_dnode(&args.dnode);
            let level = LevelNumber::L1;
            let event_queue = args.event_queue;
            area_passwd_set(instance, event_queue, area_idx, level, passwd);
        })
        .path(isis::instance::area_password::password::PATH)
        .modify_validate(passwd_validate)
        .path(isis::instance::area_password::password_type::PATH)
        .path(isis::instance::area_password::authenticate_snp::PATH)
        .path(isis::instance::domain_password::PATH)
        .delete_apply(|instance, args| {
            area_passwd_unset(instance, args, LevelNumber::L2)
        })
        .apply_finish(|instance, args| {
            let Some(area_idx) = args.list_entry.into_area().ok() else {
                return;
            };
            let passwd = passwd_from_dnode(&args.dnode);
            let level = LevelNumber::L2;
            let event_queue = args.event_queue;
            area_passwd_set(instance, event_queue, area_idx, level, passwd);
        })
        .path(isis::instance::domain_password::password::PATH)
        .modify_validate(passwd_validate)
        .path(isis::instance::domain_password::password_type::PATH)
        .path(isis::instance::domain_password::authenticate_snp::PATH)
        .path(isis::instance::default_information_originate::ipv4::PATH)
        .path(isis::instance::default_information_originate::ipv4::always::PATH)
        .path(
            isis::instance::default_information_originate::ipv4::route_map::PATH,
        )
        .path(isis::instance::default_information_originate::ipv4::metric::PATH)
        .path(isis::instance::default_information_originate::ipv6::PATH)
        .path(isis::instance::default_information_originate::ipv6::always::PATH)
        .path(
            isis::instance::default_information_originate::ipv6::route_map::PATH,
        )
        .path(isis::instance::default_information_originate::ipv6::metric::PATH)
        .path(isis::instance::redistribute::ipv4::PATH)
        .path(isis::instance::redistribute::ipv4::route_map::PATH)
        .path(isis::instance::redistribute::ipv4::metric::PATH)
        .path(isis::instance::redistribute::ipv6::PATH)
        .path(isis::instance::redistribute::ipv6::route_map::PATH)
        .path(isis::instance::redistribute::ipv6::metric::PATH)
        .path(isis::instance::multi_topology::ipv4_multicast::PATH)
        .path(isis::instance::multi_topology::ipv4_multicast::overload::PATH)
        .path(isis::instance::multi_topology::ipv4_management::PATH)
        .path(isis::instance::multi_topology::ipv4_management::overload::PATH)
        .path(isis::instance::multi_topology::ipv6_unicast::PATH)
        .path(isis::instance::multi_topology::ipv6_unicast::overload::PATH)
        .path(isis::instance::multi_topology::ipv6_multicast::PATH)
        .path(isis::instance::multi_topology::ipv6_multicast::overload::PATH)
        .path(isis::instance::multi_topology::ipv6_management::PATH)
        .path(isis::instance::multi_topology::ipv6_management::overload::PATH)
        .path(isis::instance::multi_topology::ipv6_dstsrc::PATH)
        .path(isis::instance::multi_topology::ipv6_dstsrc::overload::PATH)
        .path(isis::instance::log_adjacency_changes::PATH)
        .create_apply(|instance, args| {
            let area = area_mut(instance, args.list_entry)?;
            area.config.log_adjacency_changes = true;
            Ok(())
        })
        .delete_apply(|instance, args| {
            let area = area_mut(instance, args.list_entry)?;
            area.config.log_adjacency_changes = false;
            Ok(())
        })
        .path(isis::mpls_te::PATH)
        .path(isis::mpls_te::router_address::PATH)
        .path(interface::PATH)
        .delete_apply(|instance, args| {
            // Removing an interface removes its IS-IS configuration too.
            if !args.dnode.exists("./frr-isisd:isis") {
                return Ok(());
            }

            let ifname = args.dnode.get_string_relative("./name").unwrap();
            let Some(circuit_idx) = instance
                .arenas
                .circuits
                .get_by_name(&ifname)
                .filter(|circuit| circuit.area.is_some())
                .map(|circuit| circuit.index)
            else {
                return Ok(());
            };
            instance
                .circuit_delete(circuit_idx)
                .map_err(|error| error.to_string())
        })
        .path(interface::isis::PATH)
        .create_apply(|instance, args| {
            let area_tag =
                args.dnode.get_string_relative("./area-tag").unwrap();

            // The area list has a higher priority, so the area must have been
            // created already.
            let Some(area) = instance.arenas.areas.get_by_tag(&area_tag) else {
                panic!(
                    "attempt to create circuit for area {} before the area has been created",
                    area_tag
                );
            };
            let area_idx = area.index;

            let (ifname, vrf) = interface_keys(&args.dnode);
            let circuit_idx = instance
                .circuit_create(area_idx, &ifname, &vrf)
                .map_err(|error| error.to_string())?;
            *args.binding = Some(ListEntry::Circuit(circuit_idx));
            Ok(())
        })
        .delete_apply(|instance, args| {
            let Some(circuit_idx) = args
                .list_entry
                .into_circuit()
                .ok()
                .filter(|idx| instance.arenas.circuits.get(*idx).is_some())
            else {
                return Err("circuit not found".to_owned());
            };
            instance
                .circuit_delete(circuit_idx)
                .map_err(|error| error.to_string())
        })
        .path(interface::isis::area_tag::PATH)
        .modify_validate(|instance, args| {
            let (ifname, vrf) = interface_keys(&args.dnode);
            if instance.system.lookup(&ifname, &vrf).is_none() {
                return Ok(());
            }

            let area_tag = args.dnode.get_string();
            if let Some(circuit) = instance.arenas.circuits.get_by_name(&ifname)
                && let Some(area) = circuit
                    .area
                    .and_then(|area_idx| instance.arenas.areas.get(area_idx))
                && area.tag != area_tag
            {
                return Err(format!(
                    "ISIS circuit is already defined on {}",
                    area.tag
                ));
            }
            Ok(())
        })
        .modify_apply(|instance, args| {
            let area_tag = args.dnode.get_string();
            let circuit_idx = circuit_mut(instance, args.list_entry)?.index;
            let Some(area_idx) = instance
                .arenas
                .areas
                .get_by_tag(&area_tag)
                .map(|area| area.index)
            else {
                return Err(format!("area {} not found", area_tag));
            };
            instance
                .circuit_area_change(circuit_idx, area_idx)
                .map_err(|error| error.to_string())
        })
        .path(interface::isis::circuit_type::PATH)
        .modify_validate(|instance, args| {
            let (ifname, vrf) = interface_keys(&args.dnode);
            if instance.system.lookup(&ifname, &vrf).is_none() {
                return Ok(());
            }

            let circuit_type = args.dnode.get_string();
            let circuit_type =
                LevelType::try_from_yang(&circuit_type).unwrap();
            if let Some(circuit) = instance.arenas.circuits.get_by_name(&ifname)
                && circuit.is_up()
                && let Some(area) = circuit
                    .area
                    .and_then(|area_idx| instance.arenas.areas.get(area_idx))
                && area.level_type() != LevelType::All
                && area.level_type() != circuit_type
            {
                return Err(format!(
                    "Invalid circuit level for area {}",
                    area.tag
                ));
            }
            Ok(())
        })
        .modify_apply(|instance, args| {
            let circuit_type = args.dnode.get_string();
            let circuit_type =
                LevelType::try_from_yang(&circuit_type).unwrap();
            let circuit = circuit_mut(instance, args.list_entry)?;
            if circuit.config.circuit_type == circuit_type {
                return Ok(());
            }
            circuit.config.circuit_type = circuit_type;

            if circuit.is_up()
                && let Some(area_idx) = circuit.area
            {
                let event_queue = args.event_queue;
                event_queue
                    .insert(Event::LspRegenerate(area_idx, LevelType::All));
            }
            Ok(())
        })
        .path(interface::isis::ipv4_routing::PATH)
        .create_apply(|instance, args| {
            circuit_af_set(instance, args, AddressFamily::Ipv4, true)
        })
        .delete_apply(|instance, args| {
            circuit_af_set(instance, args, AddressFamily::Ipv4, false)
        })
        .path(interface::isis::ipv6_routing::PATH)
        .create_apply(|instance, args| {
            circuit_af_set(instance, args, AddressFamily::Ipv6, true)
        })
        .delete_apply(|instance, args| {
            circuit_af_set(instance, args, AddressFamily::Ipv6, false)
        })
        .path(interface::isis::csnp_interval::level_1::PATH)
        .modify_apply(|instance, args| {
            let interval = args.dnode.get_u16();
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.csnp_interval.l1 = interval;
            Ok(())
        })
        .path(interface::isis::csnp_interval::level_2::PATH)
        .modify_apply(|instance, args| {
            let interval = args.dnode.get_u16();
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.csnp_interval.l2 = interval;
            Ok(())
        })
        .path(interface::isis::psnp_interval::level_1::PATH)
        .modify_apply(|instance, args| {
            let interval = args.dnode.get_u16();
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.psnp_interval.l1 = interval;
            Ok(())
        })
        .path(interface::isis::psnp_interval::level_2::PATH)
        .modify_apply(|instance, args| {
            let interval = args.dnode.get_u16();
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.psnp_interval.l2 = interval;
            Ok(())
        })
        .path(interface::isis::hello::padding::PATH)
        .modify_apply(|instance, args| {
            let padding = args.dnode.get_bool();
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.hello_padding = padding;
            Ok(())
        })
        .path(interface::isis::hello::interval::level_1::PATH)
        .modify_apply(|instance, args| {
            let interval = args.dnode.get_u32();
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.hello_interval.l1 = interval;
            Ok(())
        })
        .path(interface::isis::hello::interval::level_2::PATH)
        .modify_apply(|instance, args| {
            let interval = args.dnode.get_u32();
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.hello_interval.l2 = interval;
            Ok(())
        })
        .path(interface::isis::hello::multiplier::level_1::PATH)
        .modify_apply(|instance, args| {
            let multiplier = args.dnode.get_u16();
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.hello_multiplier.l1 = multiplier;
            Ok(())
        })
        .path(interface::isis::hello::multiplier::level_2::PATH)
        .modify_apply(|instance, args| {
            let multiplier = args.dnode.get_u16();
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.hello_multiplier.l2 = multiplier;
            Ok(())
        })
        .path(interface::isis::metric::level_1::PATH)
        .modify_apply(|instance, args| {
            let metric = args.dnode.get_u32();
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.metric.l1 = metric;
            Ok(())
        })
        .path(interface::isis::metric::level_2::PATH)
        .modify_apply(|instance, args| {
            let metric = args.dnode.get_u32();
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.metric.l2 = metric;
            Ok(())
        })
        .path(interface::isis::priority::level_1::PATH)
        .modify_apply(|instance, args| {
            let priority = args.dnode.get_u8();
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.priority.l1 = priority;
            Ok(())
        })
        .path(interface::isis::priority::level_2::PATH)
        .modify_apply(|instance, args| {
            let priority = args.dnode.get_u8();
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.priority.l2 = priority;
            Ok(())
        })
        .path(interface::isis::network_type::PATH)
        .modify_apply(|instance, args| {
            let network_type = args.dnode.get_string();
            let network_type =
                NetworkType::try_from_yang(&network_type).unwrap();
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.network_type = Some(network_type);
            Ok(())
        })
        .delete_apply(|instance, args| {
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.network_type = None;
            Ok(())
        })
        .path(interface::isis::passive::PATH)
        .create_apply(|instance, args| {
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.passive = true;
            Ok(())
        })
        .delete_apply(|instance, args| {
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.passive = false;
            Ok(())
        })
        .path(interface::isis::password::PATH)
        .delete_apply(|instance, args| {
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.passwd = None;
            Ok(())
        })
        .apply_finish(|instance, args| {
            let passwd = passwd_from_dnode(&args.dnode);
            if let Ok(circuit) = circuit_mut(instance, args.list_entry) {
                circuit.config.passwd = Some(passwd);
            }
        })
        .path(interface::isis::password::password::PATH)
        .modify_validate(passwd_validate)
        .path(interface::isis::password::password_type::PATH)
        .path(interface::isis::disable_three_way_handshake::PATH)
        .create_apply(|instance, args| {
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.disable_three_way_handshake = true;
            Ok(())
        })
        .delete_apply(|instance, args| {
            let circuit = circuit_mut(instance, args.list_entry)?;
            circuit.config.disable_three_way_handshake = false;
            Ok(())
        })
        .path(interface::isis::multi_topology::ipv4_unicast::PATH)
        .path(interface::isis::multi_topology::ipv4_multicast::PATH)
        .path(interface::isis::multi_topology::ipv4_management::PATH)
        .path(interface::isis::multi_topology::ipv6_unicast::PATH)
        .path(interface::isis::multi_topology::ipv6_multicast::PATH)
        .path(interface::isis::multi_topology::ipv6_management::PATH)
        .path(interface::isis::multi_topology::ipv6_dstsrc::PATH)
        .build()
}

// ===== impl Instance =====

impl Provider for Instance {
    type ListEntry = ListEntry;
    type Event = Event;
    type Resource = Resource;

    fn callbacks() -> &'static Callbacks<Instance> {
        &CALLBACKS
    }

    fn process_event(&mut self, event: Event) {
        match event {
            Event::LspGenerate(area_idx, level) => {
                // The area might have been destroyed in the meantime.
                if let Some(area) = self.arenas.areas.get(area_idx) {
                    let msg = LspGenerateMsg::new(area.tag.clone(), level);
                    let _ = self
                        .tx
                        .protocol_output
                        .send(ProtocolMsg::LspGenerate(msg));
                }
            }
            Event::LspRegenerate(area_idx, level_type) => {
                if let Some(area) = self.arenas.areas.get(area_idx) {
                    let msg =
                        LspRegenerateMsg::new(area.tag.clone(), level_type);
                    let _ = self
                        .tx
                        .protocol_output
                        .send(ProtocolMsg::LspRegenerate(msg));
                }
            }
        }
    }
}

// ===== impl MetricStyle =====

impl MetricStyle {
    // Returns whether narrow (old-style) metrics are used.
    pub fn old_metric(&self) -> bool {
        *self != MetricStyle::Wide
    }

    // Returns whether wide (new-style) metrics are used.
    pub fn new_metric(&self) -> bool {
        *self != MetricStyle::Narrow
    }
}

// ===== configuration helpers =====

fn area_mut(
    instance: &mut Instance,
    list_entry: ListEntry,
) -> Result<&mut Area, String> {
    list_entry
        .into_area()
        .ok()
        .and_then(|area_idx| instance.arenas.areas.get_mut(area_idx))
        .ok_or_else(|| "area not found".to_owned())
}

fn circuit_mut(
    instance: &mut Instance,
    list_entry: ListEntry,
) -> Result<&mut Circuit, String> {
    list_entry
        .into_circuit()
        .ok()
        .and_then(|circuit_idx| instance.arenas.circuits.get_mut(circuit_idx))
        .ok_or_else(|| "circuit not found".to_owned())
}

fn spf_backoff_mut(
    instance: &mut Instance,
    list_entry: ListEntry,
) -> Result<&mut SpfBackoffCfg, String> {
    area_mut(instance, list_entry)?
        .config
        .spf_backoff
        .as_mut()
        .ok_or_else(|| "SPF back-off isn't enabled".to_owned())
}

// Returns the name and VRF of the interface a data node belongs to.
fn interface_keys(dnode: &DataNodeRef<'_>) -> (String, String) {
    let iface = dnode
        .inclusive_ancestors()
        .find(|dnode| dnode.schema().path == interface::PATH.as_str())
        .unwrap();
    let ifname = iface.get_string_relative("./name").unwrap();
    let vrf = iface.get_string_relative("./vrf").unwrap();
    (ifname, vrf)
}

fn lsp_regenerate(event_queue: &mut BTreeSet<Event>, area: &Area) {
    event_queue.insert(Event::LspRegenerate(area.index, area.level_type()));
}

fn lsp_refresh_set(
    instance: &mut Instance,
    args: CallbackArgs<'_, Instance>,
    level: LevelNumber,
) -> Result<(), String> {
    let refresh = args.dnode.get_u16();
    let area = area_mut(instance, args.list_entry)?;
    *area.config.lsp_refresh.get_mut(level) = refresh;

    if area.level_type().intersects(level) {
        let event_queue = args.event_queue;
        event_queue.insert(Event::LspRegenerate(area.index, level.into()));
    }
    Ok(())
}

fn passwd_validate(
    _instance: &Instance,
    args: ValidationCallbackArgs<'_>,
) -> Result<(), String> {
    let secret = args.dnode.get_string();
    if !Passwd::is_valid_secret(&secret) {
        return Err(format!(
            "password must have between 1 and {} characters",
            Passwd::MAX_LEN
        ));
    }
    Ok(())
}

// Builds a password out of the contents of a password container.
fn passwd_from_dnode(dnode: &DataNodeRef<'_>) -> Passwd {
    let secret = dnode.get_string_relative("./password").unwrap();
    let method = dnode.get_string_relative("./password-type").unwrap();
    let method = PasswdMethod::try_from_yang(&method).unwrap();
    let snp_auth = dnode
        .get_string_relative("./authenticate-snp")
        .and_then(|snp_auth| SnpAuthFlags::try_from_yang(&snp_auth))
        .unwrap_or_default();
    Passwd::new(method, secret, snp_auth)
}

fn area_passwd_set(
    instance: &mut Instance,
    event_queue: &mut BTreeSet<Event>,
    area_idx: AreaIndex,
    level: LevelNumber,
    passwd: Passwd,
) {
    let Some(area) = instance.arenas.areas.get_mut(area_idx) else {
        return;
    };
    area.passwd_set(level, passwd);
    event_queue.insert(Event::LspRegenerate(area_idx, level.into()));
}

fn area_passwd_unset(
    instance: &mut Instance,
    args: CallbackArgs<'_, Instance>,
    level: LevelNumber,
) -> Result<(), String> {
    let area = area_mut(instance, args.list_entry)?;
    if area.passwd_unset(level) {
        let event_queue = args.event_queue;
        event_queue.insert(Event::LspRegenerate(area.index, level.into()));
    }
    Ok(())
}

// Enables or disables routing for an address family on a circuit. The state
// of the other address family is taken from the new configuration.
fn circuit_af_set(
    instance: &mut Instance,
    args: CallbackArgs<'_, Instance>,
    af: AddressFamily,
    enable: bool,
) -> Result<(), String> {
    let circuit = args
        .list_entry
        .into_circuit()
        .ok()
        .and_then(|circuit_idx| instance.arenas.circuits.get_mut(circuit_idx));
    let Some(circuit) = circuit else {
        return match enable {
            true => Err("circuit not found".to_owned()),
            false => Ok(()),
        };
    };
    let Some(area) = circuit
        .area
        .and_then(|area_idx| instance.arenas.areas.get_mut(area_idx))
    else {
        return match enable {
            true => Err("circuit isn't configured in any area".to_owned()),
            false => Ok(()),
        };
    };

    let sibling = af.sibling();
    let sibling_enabled = args
        .dnode
        .parent()
        .and_then(|dnode| args.new_config.find_path(dnode.path()))
        .is_some_and(|dnode| dnode.exists(sibling.routing_leaf()));
    let mut afs = circuit.config.afs;
    *afs.get_mut(af) = enable;
    *afs.get_mut(sibling) = sibling_enabled;

    if circuit.af_set(area, afs) {
        let event_queue = args.event_queue;
        let level_type = circuit.level_type(area);
        event_queue.insert(Event::LspRegenerate(area.index, level_type));
    }
    Ok(())
}

// ===== configuration defaults =====

impl Default for AreaCfg {
    fn default() -> AreaCfg {
        let level_type = isis::instance::is_type::DFLT;
        let level_type = LevelType::try_from_yang(level_type).unwrap();
        let dynamic_hostname = isis::instance::dynamic_hostname::DFLT;
        let metric_style = isis::instance::metric_style::DFLT;
        let metric_style = MetricStyle::try_from_yang(metric_style).unwrap();
        let lsp_mtu = isis::instance::lsp::mtu::DFLT;
        let lsp_refresh = Levels::new(
            isis::instance::lsp::refresh_interval::level_1::DFLT,
            isis::instance::lsp::refresh_interval::level_2::DFLT,
        );
        let lsp_lifetime = Levels::new(
            isis::instance::lsp::maximum_lifetime::level_1::DFLT,
            isis::instance::lsp::maximum_lifetime::level_2::DFLT,
        );
        let lsp_gen_interval = Levels::new(
            isis::instance::lsp::generation_interval::level_1::DFLT,
            isis::instance::lsp::generation_interval::level_2::DFLT,
        );
        let spf_min_interval = Levels::new(
            isis::instance::spf::minimum_interval::level_1::DFLT,
            isis::instance::spf::minimum_interval::level_2::DFLT,
        );

        AreaCfg {
            level_type,
            dynamic_hostname,
            attached: false,
            overload: false,
            old_metric: metric_style.old_metric(),
            new_metric: metric_style.new_metric(),
            purge_originator: false,
            log_adjacency_changes: false,
            lsp_mtu,
            lsp_refresh,
            lsp_lifetime,
            lsp_gen_interval,
            spf_backoff: None,
            spf_min_interval,
            passwd: Default::default(),
        }
    }
}

impl Default for SpfBackoffCfg {
    fn default() -> SpfBackoffCfg {
        use isis::instance::spf::ietf_backoff_delay;

        SpfBackoffCfg {
            init_delay: ietf_backoff_delay::init_delay::DFLT,
            short_delay: ietf_backoff_delay::short_delay::DFLT,
            long_delay: ietf_backoff_delay::long_delay::DFLT,
            hold_down: ietf_backoff_delay::hold_down::DFLT,
            time_to_learn: ietf_backoff_delay::time_to_learn::DFLT,
        }
    }
}

impl Default for CircuitCfg {
    fn default() -> CircuitCfg {
        let circuit_type = interface::isis::circuit_type::DFLT;
        let circuit_type = LevelType::try_from_yang(circuit_type).unwrap();
        let csnp_interval = Levels::new(
            interface::isis::csnp_interval::level_1::DFLT,
            interface::isis::csnp_interval::level_2::DFLT,
        );
        let psnp_interval = Levels::new(
            interface::isis::psnp_interval::level_1::DFLT,
            interface::isis::psnp_interval::level_2::DFLT,
        );
        let hello_padding = interface::isis::hello::padding::DFLT;
        let hello_interval = Levels::new(
            interface::isis::hello::interval::level_1::DFLT,
            interface::isis::hello::interval::level_2::DFLT,
        );
        let hello_multiplier = Levels::new(
            interface::isis::hello::multiplier::level_1::DFLT,
            interface::isis::hello::multiplier::level_2::DFLT,
        );
        let metric = Levels::new(
            interface::isis::metric::level_1::DFLT,
            interface::isis::metric::level_2::DFLT,
        );
        let priority = Levels::new(
            interface::isis::priority::level_1::DFLT,
            interface::isis::priority::level_2::DFLT,
        );

        CircuitCfg {
            circuit_type,
            afs: Default::default(),
            csnp_interval,
            psnp_interval,
            hello_padding,
            hello_interval,
            hello_multiplier,
            metric,
            priority,
            network_type: None,
            passive: false,
            passwd: None,
            disable_three_way_handshake: false,
        }
    }
}
