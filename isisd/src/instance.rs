//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
// Sponsored by NLnet as part of the Next Generation Internet initiative.
// See: https://nlnet.nl/NGI0
//

use std::collections::BTreeMap;

use isisd_utils::southbound::InterfaceFlags;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::address::SystemId;
use crate::circuit::{self, fsm};
use crate::collections::{AreaIndex, Areas, CircuitIndex, Circuits};
use crate::debug::Debug;
use crate::error::Error;
use crate::tasks::messages::ProtocolOutputMsg;
use crate::tasks::messages::output::{AreaDestroyedMsg, ProtocolMsg};

#[derive(Debug)]
pub struct Instance {
    // System ID shared by all areas.
    pub identity: RouterIdentity,
    // Instance system data.
    pub system: InstanceSys,
    // Instance arenas.
    pub arenas: InstanceArenas,
    // Instance Tx channels.
    pub tx: InstanceChannelsTx,
}

#[derive(Debug, Default)]
pub struct RouterIdentity {
    system_id: Option<SystemId>,
}

#[derive(Debug, Default)]
pub struct InstanceSys {
    // Interfaces known to the system, keyed by name.
    pub interfaces: BTreeMap<String, InterfaceSys>,
}

#[derive(Clone, Debug)]
pub struct InterfaceSys {
    pub vrf: String,
    pub flags: InterfaceFlags,
}

#[derive(Debug, Default)]
pub struct InstanceArenas {
    pub areas: Areas,
    pub circuits: Circuits,
}

#[derive(Clone, Debug)]
pub struct InstanceChannelsTx {
    // Requests to the protocol collaborators (LSDB, SPF, PDU I/O).
    pub protocol_output: UnboundedSender<ProtocolOutputMsg>,
}

// ===== impl Instance =====

impl Instance {
    pub fn new(tx: InstanceChannelsTx) -> Instance {
        Instance {
            identity: Default::default(),
            system: Default::default(),
            arenas: Default::default(),
            tx,
        }
    }

    // Creates an instance along with the receiving end of its output
    // channel.
    pub fn with_channels() -> (Instance, UnboundedReceiver<ProtocolOutputMsg>)
    {
        let (protocol_output, protocol_output_rx) = mpsc::unbounded_channel();
        let tx = InstanceChannelsTx { protocol_output };
        (Instance::new(tx), protocol_output_rx)
    }

    // Enables IS-IS on the given interface, binding it to an area.
    pub(crate) fn circuit_create(
        &mut self,
        area_idx: AreaIndex,
        ifname: &str,
        vrf: &str,
    ) -> Result<CircuitIndex, Error> {
        let event = fsm::Event::IsisEnable(area_idx);
        let circuit_idx =
            circuit::fsm(ifname, vrf, event, &mut self.arenas, &self.tx)?;

        // Bring up the circuit right away when the interface is already
        // operational.
        let circuit_idx = match circuit_idx {
            Some(circuit_idx)
                if self.arenas.circuits[circuit_idx].state
                    == fsm::State::Conf
                    && self.system.is_operative(ifname, vrf) =>
            {
                let event = fsm::Event::IfUpFromZ;
                circuit::fsm(ifname, vrf, event, &mut self.arenas, &self.tx)?
            }
            circuit_idx => circuit_idx,
        };

        Ok(circuit_idx.unwrap_or_else(|| {
            panic!("circuit ifname={} vanished while being enabled", ifname)
        }))
    }

    // Disables IS-IS on the interface bound to the given circuit, driving
    // the state machine according to the circuit's current state.
    pub(crate) fn circuit_delete(
        &mut self,
        circuit_idx: CircuitIndex,
    ) -> Result<(), Error> {
        let circuit = &self.arenas.circuits[circuit_idx];
        let ifname = circuit.ifname.clone();
        let vrf = circuit.vrf.clone();
        let events: &[fsm::Event] = match circuit.state {
            fsm::State::Up => {
                &[fsm::Event::IfDownFromZ, fsm::Event::IsisDisable]
            }
            fsm::State::Conf => &[fsm::Event::IsisDisable],
            fsm::State::Init => &[fsm::Event::IfDownFromZ],
        };

        for event in events {
            circuit::fsm(&ifname, &vrf, *event, &mut self.arenas, &self.tx)?;
        }

        Ok(())
    }

    // Moves the circuit to the given area.
    pub(crate) fn circuit_area_change(
        &mut self,
        circuit_idx: CircuitIndex,
        area_idx: AreaIndex,
    ) -> Result<(), Error> {
        let circuit = &self.arenas.circuits[circuit_idx];
        match circuit.area {
            Some(old_area_idx) if old_area_idx == area_idx => (),
            Some(_) => {
                circuit::area_change(
                    circuit_idx,
                    area_idx,
                    &mut self.arenas,
                    &self.tx,
                );
            }
            None => {
                let ifname = circuit.ifname.clone();
                let vrf = circuit.vrf.clone();
                let event = fsm::Event::IsisEnable(area_idx);
                circuit::fsm(&ifname, &vrf, event, &mut self.arenas, &self.tx)?;
            }
        }

        Ok(())
    }

    // Destroys an area, tearing down all of its circuits.
    pub(crate) fn area_destroy(&mut self, area_idx: AreaIndex) {
        let area = &self.arenas.areas[area_idx];
        let tag = area.tag.clone();
        let circuits = area
            .state
            .circuits
            .iter()
            .map(|circuit_idx| {
                let circuit = &self.arenas.circuits[*circuit_idx];
                (circuit.ifname.clone(), circuit.vrf.clone())
            })
            .collect::<Vec<_>>();

        for (ifname, vrf) in circuits {
            let event = fsm::Event::IsisDisable;
            if let Err(error) =
                circuit::fsm(&ifname, &vrf, event, &mut self.arenas, &self.tx)
            {
                error.log();
            }
        }

        // Request the LSDB, timers and SPF state of the area to be torn
        // down.
        let msg = AreaDestroyedMsg::new(tag);
        let _ = self.tx.protocol_output.send(ProtocolMsg::AreaDestroyed(msg));

        self.arenas.areas.delete(area_idx);
        if self.arenas.areas.is_empty() {
            self.identity.release();
        }
    }
}

// ===== impl RouterIdentity =====

impl RouterIdentity {
    pub fn system_id(&self) -> Option<SystemId> {
        self.system_id
    }

    pub fn is_fixed(&self) -> bool {
        self.system_id.is_some()
    }

    pub(crate) fn fix(&mut self, system_id: SystemId) {
        Debug::SystemIdFix(&system_id).log();
        self.system_id = Some(system_id);
    }

    pub(crate) fn release(&mut self) {
        if self.system_id.take().is_some() {
            Debug::SystemIdRelease.log();
        }
    }
}

// ===== impl InstanceSys =====

impl InstanceSys {
    // Looks up an interface by its name and VRF.
    pub fn lookup(&self, ifname: &str, vrf: &str) -> Option<&InterfaceSys> {
        self.interfaces
            .get(ifname)
            .filter(|iface| iface.vrf == vrf)
    }

    pub fn is_operative(&self, ifname: &str, vrf: &str) -> bool {
        self.lookup(ifname, vrf).is_some_and(|iface| {
            iface.flags.contains(InterfaceFlags::OPERATIVE)
        })
    }
}
