//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
// Sponsored by NLnet as part of the Next Generation Internet initiative.
// See: https://nlnet.nl/NGI0
//

use isisd_utils::southbound::{InterfaceFlags, InterfaceUpdateMsg};

use crate::circuit::{self, fsm};
use crate::debug::Debug;
use crate::error::Error;
use crate::instance::{Instance, InterfaceSys};

// ===== global functions =====

pub fn process_iface_update(
    instance: &mut Instance,
    msg: InterfaceUpdateMsg,
) -> Result<(), Error> {
    let operative = msg.flags.contains(InterfaceFlags::OPERATIVE);
    Debug::InterfaceUpdate(&msg.ifname, operative).log();

    // Update interface data.
    let iface = InterfaceSys {
        vrf: msg.vrf.clone(),
        flags: msg.flags,
    };
    let was_operative = instance
        .system
        .interfaces
        .insert(msg.ifname.clone(), iface)
        .is_some_and(|old| old.flags.contains(InterfaceFlags::OPERATIVE));

    // Drive the circuit state machine on operational status changes.
    let event = match (was_operative, operative) {
        (false, true) => fsm::Event::IfUpFromZ,
        (true, false) => fsm::Event::IfDownFromZ,
        _ => return Ok(()),
    };
    if event == fsm::Event::IfDownFromZ
        && instance.arenas.circuits.get_by_name(&msg.ifname).is_none()
    {
        return Ok(());
    }
    circuit::fsm(
        &msg.ifname,
        &msg.vrf,
        event,
        &mut instance.arenas,
        &instance.tx,
    )?;

    Ok(())
}

pub fn process_iface_delete(
    instance: &mut Instance,
    ifname: &str,
) -> Result<(), Error> {
    Debug::InterfaceDelete(ifname).log();

    // Remove interface from the system table.
    let Some(iface) = instance.system.interfaces.remove(ifname) else {
        return Err(Error::InterfaceNotFound(ifname.to_owned()));
    };

    // A deleted interface is no longer operational.
    if iface.flags.contains(InterfaceFlags::OPERATIVE)
        && instance.arenas.circuits.get_by_name(ifname).is_some()
    {
        let event = fsm::Event::IfDownFromZ;
        circuit::fsm(
            ifname,
            &iface.vrf,
            event,
            &mut instance.arenas,
            &instance.tx,
        )?;
    }

    Ok(())
}
