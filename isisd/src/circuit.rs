//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
// Sponsored by NLnet as part of the Next Generation Internet initiative.
// See: https://nlnet.nl/NGI0
//

use isisd_utils::ip::AddressFamilies;

use crate::area::Area;
use crate::collections::{AreaIndex, CircuitIndex};
use crate::debug::Debug;
use crate::error::Error;
use crate::instance::{InstanceArenas, InstanceChannelsTx};
use crate::levels::LevelType;
use crate::northbound::configuration::CircuitCfg;
use crate::tasks::messages::output::{
    CircuitUpdMsg, LspRegenerateMsg, ProtocolMsg,
};

// A circuit binds an IS-IS area to an interface. Its lifecycle is driven by
// the circuit state machine, combining configuration (area enable/disable)
// and interface operational status (up/down) events.
#[derive(Debug)]
pub struct Circuit {
    pub index: CircuitIndex,
    pub ifname: String,
    pub vrf: String,
    pub state: fsm::State,
    pub area: Option<AreaIndex>,
    pub config: CircuitCfg,
}

pub mod fsm {
    use serde::{Deserialize, Serialize};

    use crate::collections::AreaIndex;

    #[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
    #[derive(Deserialize, Serialize)]
    pub enum State {
        // Bound to an operational interface only.
        Init,
        // Configured in an area only.
        Conf,
        // Both configured and operational.
        Up,
    }

    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum Event {
        IsisEnable(AreaIndex),
        IfUpFromZ,
        IsisDisable,
        IfDownFromZ,
    }
}

// ===== impl Circuit =====

impl Circuit {
    pub(crate) fn new(
        index: CircuitIndex,
        ifname: String,
        vrf: String,
        state: fsm::State,
    ) -> Circuit {
        Debug::CircuitCreate(&ifname).log();

        Circuit {
            index,
            ifname,
            vrf,
            state,
            area: None,
            config: Default::default(),
        }
    }

    // Returns the levels this circuit operates at. The area level takes
    // precedence unless the area runs both levels.
    pub fn level_type(&self, area: &Area) -> LevelType {
        match area.level_type() {
            LevelType::All => self.config.circuit_type,
            level_type => level_type,
        }
    }

    pub fn is_up(&self) -> bool {
        self.state == fsm::State::Up
    }

    // Updates the set of address families enabled on this circuit, adjusting
    // the area counters accordingly. Returns true if the area LSPs need to be
    // regenerated.
    pub(crate) fn af_set(
        &mut self,
        area: &mut Area,
        afs: AddressFamilies<bool>,
    ) -> bool {
        if self.config.afs == afs {
            return false;
        }

        update_counter(
            &mut area.state.ip_circuits,
            self.config.afs.ipv4,
            afs.ipv4,
        );
        update_counter(
            &mut area.state.ipv6_circuits,
            self.config.afs.ipv6,
            afs.ipv6,
        );
        self.config.afs = afs;

        self.is_up()
    }

    fn attach(&mut self, area: &mut Area) {
        self.area = Some(area.index);
        self.config = Default::default();
        area.state.circuits.insert(self.index);
    }

    fn detach(&mut self, area: &mut Area) {
        self.af_set(area, Default::default());
        area.state.circuits.remove(&self.index);
        self.area = None;
    }
}

impl Drop for Circuit {
    fn drop(&mut self) {
        Debug::CircuitDelete(&self.ifname).log();
    }
}

// ===== helper functions =====

fn update_counter(counter: &mut usize, old: bool, new: bool) {
    match (old, new) {
        (false, true) => *counter += 1,
        (true, false) => *counter = counter.saturating_sub(1),
        _ => (),
    }
}

fn circuit_up(
    circuit: &Circuit,
    area: Option<&Area>,
    tx: &InstanceChannelsTx,
) {
    let Some(area) = area else {
        return;
    };
    let level_type = circuit.level_type(area);

    let msg = CircuitUpdMsg::new(
        area.tag.clone(),
        circuit.ifname.clone(),
        level_type,
    );
    let _ = tx.protocol_output.send(ProtocolMsg::CircuitUp(msg));
    lsp_regenerate(area, level_type, tx);
}

fn circuit_down(
    circuit: &Circuit,
    area: Option<&Area>,
    tx: &InstanceChannelsTx,
) {
    let Some(area) = area else {
        return;
    };
    let level_type = circuit.level_type(area);

    let msg = CircuitUpdMsg::new(
        area.tag.clone(),
        circuit.ifname.clone(),
        level_type,
    );
    let _ = tx.protocol_output.send(ProtocolMsg::CircuitDown(msg));
    lsp_regenerate(area, level_type, tx);
}

fn lsp_regenerate(
    area: &Area,
    level_type: LevelType,
    tx: &InstanceChannelsTx,
) {
    let msg = LspRegenerateMsg::new(area.tag.clone(), level_type);
    let _ = tx.protocol_output.send(ProtocolMsg::LspRegenerate(msg));
}

// ===== global functions =====

// Runs the circuit state machine for the given interface.
//
// Returns the index of the circuit bound to the interface after the
// transition, or `None` if the circuit was deleted.
pub(crate) fn fsm(
    ifname: &str,
    vrf: &str,
    event: fsm::Event,
    arenas: &mut InstanceArenas,
    tx: &InstanceChannelsTx,
) -> Result<Option<CircuitIndex>, Error> {
    let circuit_idx = arenas
        .circuits
        .get_by_name(ifname)
        .map(|circuit| circuit.index);
    let old_state =
        circuit_idx.map(|circuit_idx| arenas.circuits[circuit_idx].state);

    let new_state = match (circuit_idx, old_state, event) {
        // Area enabled on an interface that isn't operational.
        (None, None, fsm::Event::IsisEnable(area_idx)) => {
            let area = &mut arenas.areas[area_idx];
            let circuit =
                arenas.circuits.insert(ifname, vrf, fsm::State::Conf);
            circuit.attach(area);
            Some(circuit.index)
        }
        // Interface became operational without any area configured.
        (None, None, fsm::Event::IfUpFromZ) => {
            let circuit =
                arenas.circuits.insert(ifname, vrf, fsm::State::Init);
            Some(circuit.index)
        }
        (Some(circuit_idx), Some(fsm::State::Init), event) => match event {
            fsm::Event::IsisEnable(area_idx) => {
                let area = &mut arenas.areas[area_idx];
                let circuit = &mut arenas.circuits[circuit_idx];
                circuit.attach(area);
                circuit.state = fsm::State::Up;
                circuit_up(circuit, Some(&*area), tx);
                Some(circuit_idx)
            }
            fsm::Event::IfDownFromZ => {
                arenas.circuits.delete(circuit_idx);
                None
            }
            _ => {
                return Err(Error::CircuitUnexpectedEvent(
                    ifname.to_owned(),
                    old_state,
                    event,
                ));
            }
        },
        (Some(circuit_idx), Some(fsm::State::Conf), event) => match event {
            fsm::Event::IfUpFromZ => {
                let circuit = &mut arenas.circuits[circuit_idx];
                circuit.state = fsm::State::Up;
                let area = circuit.area.and_then(|idx| arenas.areas.get(idx));
                circuit_up(circuit, area, tx);
                Some(circuit_idx)
            }
            fsm::Event::IsisDisable => {
                let circuit = &mut arenas.circuits[circuit_idx];
                if let Some(area) = circuit
                    .area
                    .and_then(|area_idx| arenas.areas.get_mut(area_idx))
                {
                    circuit.detach(area);
                }
                arenas.circuits.delete(circuit_idx);
                None
            }
            _ => {
                return Err(Error::CircuitUnexpectedEvent(
                    ifname.to_owned(),
                    old_state,
                    event,
                ));
            }
        },
        (Some(circuit_idx), Some(fsm::State::Up), event) => match event {
            fsm::Event::IsisDisable => {
                let circuit = &mut arenas.circuits[circuit_idx];
                if let Some(area) = circuit
                    .area
                    .and_then(|area_idx| arenas.areas.get_mut(area_idx))
                {
                    circuit_down(circuit, Some(&*area), tx);
                    circuit.detach(area);
                }
                circuit.state = fsm::State::Init;
                Some(circuit_idx)
            }
            fsm::Event::IfDownFromZ => {
                let circuit = &mut arenas.circuits[circuit_idx];
                circuit.state = fsm::State::Conf;
                let area = circuit.area.and_then(|idx| arenas.areas.get(idx));
                circuit_down(circuit, area, tx);
                Some(circuit_idx)
            }
            _ => {
                return Err(Error::CircuitUnexpectedEvent(
                    ifname.to_owned(),
                    old_state,
                    event,
                ));
            }
        },
        _ => {
            return Err(Error::CircuitUnexpectedEvent(
                ifname.to_owned(),
                old_state,
                event,
            ));
        }
    };

    let new_circuit_state =
        new_state.map(|circuit_idx| arenas.circuits[circuit_idx].state);
    Debug::CircuitFsmTransition(ifname, old_state, new_circuit_state).log();

    Ok(new_state)
}

// Moves a circuit to another area, with the same effect as disabling IS-IS
// on the circuit and enabling it again in the new area. The circuit and its
// configuration are preserved.
pub(crate) fn area_change(
    circuit_idx: CircuitIndex,
    area_idx: AreaIndex,
    arenas: &mut InstanceArenas,
    tx: &InstanceChannelsTx,
) {
    let circuit = &mut arenas.circuits[circuit_idx];
    let afs = circuit.config.afs;

    if let Some(old_area) = circuit
        .area
        .and_then(|old_area_idx| arenas.areas.get_mut(old_area_idx))
    {
        if circuit.is_up() {
            circuit_down(circuit, Some(&*old_area), tx);
        }
        circuit.af_set(old_area, Default::default());
        old_area.state.circuits.remove(&circuit.index);
    }

    let area = &mut arenas.areas[area_idx];
    Debug::CircuitAreaChange(&circuit.ifname, &area.tag).log();
    circuit.area = Some(area_idx);
    area.state.circuits.insert(circuit.index);
    circuit.af_set(area, afs);
    if circuit.is_up() {
        circuit_up(circuit, Some(&*area), tx);
    }
}

// ===== unit tests =====

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;
    use crate::tasks::messages::ProtocolOutputMsg;

    fn setup() -> (
        InstanceArenas,
        InstanceChannelsTx,
        mpsc::UnboundedReceiver<ProtocolOutputMsg>,
        AreaIndex,
    ) {
        let (protocol_output, rx) = mpsc::unbounded_channel();
        let tx = InstanceChannelsTx { protocol_output };
        let mut arenas = InstanceArenas::default();
        let area_idx = arenas.areas.insert("1").index;
        (arenas, tx, rx, area_idx)
    }

    fn state(arenas: &InstanceArenas, ifname: &str) -> Option<fsm::State> {
        arenas.circuits.get_by_name(ifname).map(|circuit| circuit.state)
    }

    #[test]
    fn test_enable_then_if_up() {
        let (mut arenas, tx, mut rx, area_idx) = setup();

        let event = fsm::Event::IsisEnable(area_idx);
        fsm("eth0", "default", event, &mut arenas, &tx).unwrap();
        assert_eq!(state(&arenas, "eth0"), Some(fsm::State::Conf));
        assert_eq!(arenas.areas[area_idx].state.circuits.len(), 1);
        assert!(rx.try_recv().is_err());

        let event = fsm::Event::IfUpFromZ;
        fsm("eth0", "default", event, &mut arenas, &tx).unwrap();
        assert_eq!(state(&arenas, "eth0"), Some(fsm::State::Up));
        assert!(matches!(rx.try_recv(), Ok(ProtocolMsg::CircuitUp(_))));
        assert!(matches!(rx.try_recv(), Ok(ProtocolMsg::LspRegenerate(_))));

        let event = fsm::Event::IfDownFromZ;
        fsm("eth0", "default", event, &mut arenas, &tx).unwrap();
        assert_eq!(state(&arenas, "eth0"), Some(fsm::State::Conf));
        assert!(matches!(rx.try_recv(), Ok(ProtocolMsg::CircuitDown(_))));

        let event = fsm::Event::IsisDisable;
        let circuit = fsm("eth0", "default", event, &mut arenas, &tx).unwrap();
        assert_eq!(circuit, None);
        assert_eq!(state(&arenas, "eth0"), None);
        assert!(arenas.areas[area_idx].state.circuits.is_empty());
    }

    #[test]
    fn test_if_up_then_enable() {
        let (mut arenas, tx, _rx, area_idx) = setup();

        let event = fsm::Event::IfUpFromZ;
        fsm("eth0", "default", event, &mut arenas, &tx).unwrap();
        assert_eq!(state(&arenas, "eth0"), Some(fsm::State::Init));

        let event = fsm::Event::IsisEnable(area_idx);
        fsm("eth0", "default", event, &mut arenas, &tx).unwrap();
        assert_eq!(state(&arenas, "eth0"), Some(fsm::State::Up));

        // Disabling the area keeps the circuit bound to the interface.
        let event = fsm::Event::IsisDisable;
        fsm("eth0", "default", event, &mut arenas, &tx).unwrap();
        assert_eq!(state(&arenas, "eth0"), Some(fsm::State::Init));
        assert_eq!(arenas.circuits.get_by_name("eth0").unwrap().area, None);

        let event = fsm::Event::IfDownFromZ;
        fsm("eth0", "default", event, &mut arenas, &tx).unwrap();
        assert_eq!(state(&arenas, "eth0"), None);
    }

    #[test]
    fn test_unexpected_event() {
        let (mut arenas, tx, _rx, area_idx) = setup();

        let event = fsm::Event::IsisDisable;
        let result = fsm("eth0", "default", event, &mut arenas, &tx);
        assert!(matches!(
            result,
            Err(Error::CircuitUnexpectedEvent(_, None, _))
        ));

        let event = fsm::Event::IsisEnable(area_idx);
        fsm("eth0", "default", event, &mut arenas, &tx).unwrap();
        let result = fsm("eth0", "default", event, &mut arenas, &tx);
        assert!(matches!(
            result,
            Err(Error::CircuitUnexpectedEvent(_, Some(fsm::State::Conf), _))
        ));
    }

    #[test]
    fn test_af_counters() {
        let (mut arenas, tx, _rx, area_idx) = setup();

        let event = fsm::Event::IsisEnable(area_idx);
        let circuit_idx = fsm("eth0", "default", event, &mut arenas, &tx)
            .unwrap()
            .unwrap();
        let circuit = &mut arenas.circuits[circuit_idx];
        let area = &mut arenas.areas[area_idx];
        let afs = AddressFamilies {
            ipv4: true,
            ipv6: true,
        };
        // The circuit isn't up, so no LSP regeneration is needed.
        assert!(!circuit.af_set(area, afs));
        assert_eq!(area.state.ip_circuits, 1);
        assert_eq!(area.state.ipv6_circuits, 1);

        let event = fsm::Event::IsisDisable;
        fsm("eth0", "default", event, &mut arenas, &tx).unwrap();
        let area = &arenas.areas[area_idx];
        assert_eq!(area.state.ip_circuits, 0);
        assert_eq!(area.state.ipv6_circuits, 0);
    }

    #[test]
    fn test_area_change() {
        let (mut arenas, tx, mut rx, area1_idx) = setup();
        let area2_idx = arenas.areas.insert("2").index;

        let event = fsm::Event::IsisEnable(area1_idx);
        let circuit_idx = fsm("eth0", "default", event, &mut arenas, &tx)
            .unwrap()
            .unwrap();
        let afs = AddressFamilies {
            ipv4: true,
            ipv6: false,
        };
        let circuit = &mut arenas.circuits[circuit_idx];
        circuit.af_set(&mut arenas.areas[area1_idx], afs);
        let event = fsm::Event::IfUpFromZ;
        fsm("eth0", "default", event, &mut arenas, &tx).unwrap();
        while rx.try_recv().is_ok() {}

        area_change(circuit_idx, area2_idx, &mut arenas, &tx);
        let circuit = &arenas.circuits[circuit_idx];
        assert_eq!(circuit.area, Some(area2_idx));
        assert_eq!(circuit.state, fsm::State::Up);
        assert_eq!(circuit.config.afs, afs);
        assert!(arenas.areas[area1_idx].state.circuits.is_empty());
        assert_eq!(arenas.areas[area1_idx].state.ip_circuits, 0);
        let area2 = &arenas.areas[area2_idx];
        assert!(area2.state.circuits.contains(&circuit_idx));
        assert_eq!(area2.state.ip_circuits, 1);
        assert!(matches!(
            rx.try_recv(),
            Ok(ProtocolMsg::CircuitDown(msg)) if msg.area == "1"
        ));
        assert!(matches!(rx.try_recv(), Ok(ProtocolMsg::LspRegenerate(_))));
        assert!(matches!(
            rx.try_recv(),
            Ok(ProtocolMsg::CircuitUp(msg)) if msg.area == "2"
        ));
        assert!(matches!(rx.try_recv(), Ok(ProtocolMsg::LspRegenerate(_))));
    }
}
