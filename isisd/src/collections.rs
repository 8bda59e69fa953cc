//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
// Sponsored by NLnet as part of the Next Generation Internet initiative.
// See: https://nlnet.nl/NGI0
//

use std::collections::BTreeMap;

use generational_arena::Index;

use crate::area::Area;
use crate::circuit::{Circuit, fsm};

pub type AreaIndex = Index;
pub type CircuitIndex = Index;

#[derive(Debug)]
pub struct Arena<T>(generational_arena::Arena<T>);

#[derive(Debug, Default)]
pub struct Areas {
    arena: Arena<Area>,
    tag_tree: BTreeMap<String, AreaIndex>,
}

#[derive(Debug, Default)]
pub struct Circuits {
    arena: Arena<Circuit>,
    name_tree: BTreeMap<String, CircuitIndex>,
}

// ===== impl Arena =====

impl<T> Arena<T> {
    pub fn get(&self, index: Index) -> Option<&T> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: Index) -> Option<&mut T> {
        self.0.get_mut(index)
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Arena<T> {
        Arena(Default::default())
    }
}

impl<T> std::ops::Index<Index> for Arena<T> {
    type Output = T;

    fn index(&self, index: Index) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> std::ops::IndexMut<Index> for Arena<T> {
    fn index_mut(&mut self, index: Index) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// ===== impl Areas =====

impl Areas {
    pub(crate) fn insert(&mut self, tag: &str) -> &mut Area {
        // Create and insert area into the arena.
        let area_idx = self
            .arena
            .0
            .insert_with(|index| Area::new(index, tag.to_owned()));

        // Link area to different collections.
        let area = &mut self.arena[area_idx];
        if self.tag_tree.insert(area.tag.clone(), area_idx).is_some() {
            panic!("area tag={} already exists", area.tag);
        }

        area
    }

    pub(crate) fn delete(&mut self, area_idx: AreaIndex) {
        let area = &self.arena[area_idx];

        // Unlink area from different collections.
        self.tag_tree.remove(&area.tag);

        // Remove area from the arena.
        self.arena.0.remove(area_idx);
    }

    // Returns a reference to the area corresponding to the given index, if
    // it still exists.
    pub fn get(&self, area_idx: AreaIndex) -> Option<&Area> {
        self.arena.get(area_idx)
    }

    pub(crate) fn get_mut(&mut self, area_idx: AreaIndex) -> Option<&mut Area> {
        self.arena.get_mut(area_idx)
    }

    // Returns a reference to the area corresponding to the given tag.
    pub fn get_by_tag(&self, tag: &str) -> Option<&Area> {
        self.tag_tree
            .get(tag)
            .copied()
            .map(|area_idx| &self.arena[area_idx])
    }

    // Returns a mutable reference to the area corresponding to the given
    // tag.
    pub(crate) fn get_mut_by_tag(&mut self, tag: &str) -> Option<&mut Area> {
        self.tag_tree
            .get(tag)
            .copied()
            .map(move |area_idx| &mut self.arena[area_idx])
    }

    // Returns an iterator visiting all areas.
    //
    // Areas are ordered by their tags.
    pub fn iter(&self) -> impl Iterator<Item = &Area> {
        self.tag_tree
            .values()
            .map(|area_idx| &self.arena[*area_idx])
    }

    pub fn len(&self) -> usize {
        self.tag_tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tag_tree.is_empty()
    }
}

impl std::ops::Index<AreaIndex> for Areas {
    type Output = Area;

    fn index(&self, index: AreaIndex) -> &Self::Output {
        &self.arena[index]
    }
}

impl std::ops::IndexMut<AreaIndex> for Areas {
    fn index_mut(&mut self, index: AreaIndex) -> &mut Self::Output {
        &mut self.arena[index]
    }
}

// ===== impl Circuits =====

impl Circuits {
    pub(crate) fn insert(
        &mut self,
        ifname: &str,
        vrf: &str,
        state: fsm::State,
    ) -> &mut Circuit {
        // Create and insert circuit into the arena.
        let circuit_idx = self.arena.0.insert_with(|index| {
            Circuit::new(index, ifname.to_owned(), vrf.to_owned(), state)
        });

        // Link circuit to different collections.
        let circuit = &mut self.arena[circuit_idx];
        if self
            .name_tree
            .insert(circuit.ifname.clone(), circuit_idx)
            .is_some()
        {
            panic!("circuit ifname={} already exists", circuit.ifname);
        }

        circuit
    }

    pub(crate) fn delete(&mut self, circuit_idx: CircuitIndex) {
        let circuit = &self.arena[circuit_idx];

        // Unlink circuit from different collections.
        self.name_tree.remove(&circuit.ifname);

        // Remove circuit from the arena.
        self.arena.0.remove(circuit_idx);
    }

    // Returns a reference to the circuit corresponding to the given index,
    // if it still exists.
    pub fn get(&self, circuit_idx: CircuitIndex) -> Option<&Circuit> {
        self.arena.get(circuit_idx)
    }

    pub(crate) fn get_mut(
        &mut self,
        circuit_idx: CircuitIndex,
    ) -> Option<&mut Circuit> {
        self.arena.get_mut(circuit_idx)
    }

    // Returns a reference to the circuit bound to the given interface.
    pub fn get_by_name(&self, ifname: &str) -> Option<&Circuit> {
        self.name_tree
            .get(ifname)
            .copied()
            .map(|circuit_idx| &self.arena[circuit_idx])
    }

    // Returns an iterator visiting all circuits.
    //
    // Circuits are ordered by their interface names.
    pub fn iter(&self) -> impl Iterator<Item = &Circuit> {
        self.name_tree
            .values()
            .map(|circuit_idx| &self.arena[*circuit_idx])
    }

    pub fn len(&self) -> usize {
        self.name_tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_tree.is_empty()
    }
}

impl std::ops::Index<CircuitIndex> for Circuits {
    type Output = Circuit;

    fn index(&self, index: CircuitIndex) -> &Self::Output {
        &self.arena[index]
    }
}

impl std::ops::IndexMut<CircuitIndex> for Circuits {
    fn index_mut(&mut self, index: CircuitIndex) -> &mut Self::Output {
        &mut self.arena[index]
    }
}
