// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stylobate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylobate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Connections between adjacent blocks.
//!
//! Three independent kinds of shared state live here: stylobates (above
//! ground), underground links (below ground), and parking membership. The
//! first two are keyed by [`AdjacentPair`]; absence of an entry IS the
//! unconnected state, so removing a connection is removing its entry.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use super::block::{Block, BlockStore};
use super::ids::{BlockId, StylobateId};

/// Two blocks at consecutive positions in the block order, left block first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AdjacentPair {
    from_block_id: BlockId,
    to_block_id: BlockId,
}

impl AdjacentPair {
    /// Callers must pass ids of blocks at consecutive store indices, in
    /// store order; [`Layout::adjacent_pair`](super::layout::Layout::adjacent_pair)
    /// is the validating entry point.
    pub(crate) fn new(from_block_id: BlockId, to_block_id: BlockId) -> Self {
        Self {
            from_block_id,
            to_block_id,
        }
    }

    pub fn from_block_id(&self) -> BlockId {
        self.from_block_id
    }

    pub fn to_block_id(&self) -> BlockId {
        self.to_block_id
    }

    fn touches(&self, id: BlockId) -> bool {
        self.from_block_id == id || self.to_block_id == id
    }
}

/// An above-ground connector volume between two adjacent blocks.
///
/// A stylobate always starts at floor 1; its height is the only stored
/// dimension, `bottom_floor()` and `top_floor()` are derived from it.
/// `floors` never reaches 0: the shrink transition removes the entry
/// instead. The display name is derived from the block names and refreshed
/// whenever a block is renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylobate {
    id: StylobateId,
    name: String,
    floors: i32,
}

impl Stylobate {
    pub(crate) fn new(id: StylobateId, name: impl Into<String>, floors: i32) -> Self {
        Self {
            id,
            name: name.into(),
            floors,
        }
    }

    pub fn id(&self) -> StylobateId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn floors(&self) -> i32 {
        self.floors
    }

    pub fn bottom_floor(&self) -> i32 {
        1
    }

    pub fn top_floor(&self) -> i32 {
        self.floors
    }

    pub fn covers_floor(&self, floor: i32) -> bool {
        floor >= 1 && floor <= self.floors
    }
}

/// Which transition a click on a connector column resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorClick {
    StylobateCreated,
    StylobateGrown,
    StylobateShrunk,
    StylobateRemoved,
    UndergroundLinked,
    UndergroundUnlinked,
    /// The click hit a floor with no meaning for this connector; nothing
    /// changed.
    Ignored,
}

/// All connection state of a layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionStore {
    stylobates: BTreeMap<AdjacentPair, Stylobate>,
    underground: BTreeSet<AdjacentPair>,
    parking_members: BTreeSet<BlockId>,
}

impl ConnectionStore {
    pub fn stylobates(&self) -> &BTreeMap<AdjacentPair, Stylobate> {
        &self.stylobates
    }

    pub fn stylobate(&self, pair: AdjacentPair) -> Option<&Stylobate> {
        self.stylobates.get(&pair)
    }

    pub fn underground_links(&self) -> &BTreeSet<AdjacentPair> {
        &self.underground
    }

    pub fn has_underground(&self, pair: AdjacentPair) -> bool {
        self.underground.contains(&pair)
    }

    pub fn parking_members(&self) -> &BTreeSet<BlockId> {
        &self.parking_members
    }

    pub fn is_parking_member(&self, id: BlockId) -> bool {
        self.parking_members.contains(&id)
    }

    fn next_stylobate_id(&self) -> StylobateId {
        let max = self
            .stylobates
            .values()
            .map(|stylobate| stylobate.id.value())
            .max()
            .unwrap_or(0);
        StylobateId::new(max + 1)
    }

    /// Toggles the underground link of a pair. Returns the new state.
    pub(crate) fn toggle_underground(&mut self, pair: AdjacentPair) -> bool {
        if self.underground.remove(&pair) {
            false
        } else {
            self.underground.insert(pair);
            true
        }
    }

    /// Flips parking membership of a block. Returns the new state.
    ///
    /// Membership only; the bottom-floor clamp that goes with it is
    /// coordinated by [`Layout`](super::layout::Layout), which owns both
    /// stores.
    pub(crate) fn toggle_parking_member(&mut self, id: BlockId) -> bool {
        if self.parking_members.remove(&id) {
            false
        } else {
            self.parking_members.insert(id);
            true
        }
    }

    /// Resolves a click on the connector column of `pair` at `floor`.
    ///
    /// At or below the ground row the click toggles the underground link.
    /// Above ground it steps the stylobate through its lifecycle: with none
    /// present, floor 1 creates a single-floor stylobate; with one of height
    /// `F`, floor 1 shrinks it (removing it when the last floor goes) and
    /// floor `F` or `F + 1` grows it. Every other floor is ignored.
    pub(crate) fn connector_click(
        &mut self,
        pair: AdjacentPair,
        floor: i32,
        blocks: &BlockStore,
    ) -> ConnectorClick {
        if floor <= 0 {
            return if self.toggle_underground(pair) {
                ConnectorClick::UndergroundLinked
            } else {
                ConnectorClick::UndergroundUnlinked
            };
        }

        let next_id = self.next_stylobate_id();
        match self.stylobates.entry(pair) {
            Entry::Vacant(entry) => {
                if floor != 1 {
                    return ConnectorClick::Ignored;
                }
                let name = derived_stylobate_name(pair, blocks);
                entry.insert(Stylobate::new(next_id, name, 1));
                ConnectorClick::StylobateCreated
            }
            Entry::Occupied(mut entry) => {
                let stylobate = entry.get_mut();
                if floor == 1 {
                    stylobate.floors -= 1;
                    if stylobate.floors > 0 {
                        return ConnectorClick::StylobateShrunk;
                    }
                    entry.remove();
                    return ConnectorClick::StylobateRemoved;
                }

                let top = stylobate.floors;
                if floor == top || floor == top + 1 {
                    stylobate.floors += 1;
                    return ConnectorClick::StylobateGrown;
                }
                ConnectorClick::Ignored
            }
        }
    }

    /// Drops every connection that references a removed block.
    ///
    /// Blocks that become neighbours through the removal do NOT inherit a
    /// connector; creating one is a fresh user action.
    pub(crate) fn cascade_remove_block(&mut self, id: BlockId) {
        self.stylobates.retain(|pair, _| !pair.touches(id));
        self.underground.retain(|pair| !pair.touches(id));
        self.parking_members.remove(&id);
    }

    /// Recomputes derived stylobate display names from current block names.
    pub(crate) fn refresh_stylobate_names(&mut self, blocks: &BlockStore) {
        for (pair, stylobate) in self.stylobates.iter_mut() {
            stylobate.name = derived_stylobate_name(*pair, blocks);
        }
    }

    pub(crate) fn insert_stylobate(&mut self, pair: AdjacentPair, stylobate: Stylobate) {
        self.stylobates.insert(pair, stylobate);
    }

    pub(crate) fn insert_underground(&mut self, pair: AdjacentPair) {
        self.underground.insert(pair);
    }

    pub(crate) fn insert_parking_member(&mut self, id: BlockId) {
        self.parking_members.insert(id);
    }
}

fn derived_stylobate_name(pair: AdjacentPair, blocks: &BlockStore) -> String {
    let from = blocks.get(pair.from_block_id).map(Block::name).unwrap_or("?");
    let to = blocks.get(pair.to_block_id).map(Block::name).unwrap_or("?");
    format!("Stylobate {from}-{to}")
}
