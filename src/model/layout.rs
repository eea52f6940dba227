// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stylobate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylobate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The layout aggregate.

use std::fmt;

use super::block::BlockStore;
use super::connection::{AdjacentPair, ConnectionStore, ConnectorClick};
use super::ids::BlockId;

/// The top-level container the portal edits: one project's blocks plus the
/// connections between them.
///
/// `Layout` is a plain value. Cloning it yields the snapshot the
/// [`ChangeTracker`](crate::tracker::ChangeTracker) diffs and restores, and
/// structural equality is the definition of "unchanged". Mutations that span
/// both stores (cascade removal, rename propagation, the parking clamp) go
/// through here so the cross-store invariants hold after every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    blocks: BlockStore,
    connections: ConnectionStore,
}

impl Layout {
    /// A fresh project: one seed block, no connections.
    pub fn new() -> Self {
        Self {
            blocks: BlockStore::new(),
            connections: ConnectionStore::default(),
        }
    }

    pub(crate) fn from_parts(blocks: BlockStore, connections: ConnectionStore) -> Self {
        Self {
            blocks,
            connections,
        }
    }

    pub fn blocks(&self) -> &BlockStore {
        &self.blocks
    }

    pub fn connections(&self) -> &ConnectionStore {
        &self.connections
    }

    pub fn add_block(&mut self) -> BlockId {
        self.blocks.add_block()
    }

    /// Removes a block, cascading over the connection store.
    ///
    /// Returns whether a block was removed; unknown ids are a no-op.
    pub fn remove_block(&mut self, id: BlockId) -> Result<bool, LayoutError> {
        match self.blocks.remove_block(id)? {
            Some(removed) => {
                self.connections.cascade_remove_block(removed.id());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Renames a block and refreshes the derived stylobate names.
    pub fn rename_block(&mut self, id: BlockId, name: impl Into<String>) -> bool {
        if !self.blocks.rename_block(id, name) {
            return false;
        }
        self.connections.refresh_stylobate_names(&self.blocks);
        true
    }

    pub fn grow_top(&mut self, id: BlockId) -> bool {
        self.blocks.grow_top(id)
    }

    pub fn shrink_top(&mut self, id: BlockId) -> bool {
        self.blocks.shrink_top(id)
    }

    pub fn grow_bottom(&mut self, id: BlockId) -> bool {
        self.blocks.grow_bottom(id)
    }

    pub fn shrink_bottom(&mut self, id: BlockId) -> bool {
        self.blocks.shrink_bottom(id)
    }

    pub fn toggle_technical_floor(&mut self, id: BlockId, floor: i32) -> Option<bool> {
        self.blocks.toggle_technical_floor(id, floor)
    }

    /// Flips a block in or out of the shared parking level and applies the
    /// bottom-floor clamp that goes with it. Returns the new membership,
    /// `None` for an unknown id.
    pub fn toggle_parking_membership(&mut self, id: BlockId) -> Option<bool> {
        self.blocks.get(id)?;
        let joined = self.connections.toggle_parking_member(id);
        self.blocks.clamp_bottom_for_parking(id, joined);
        Some(joined)
    }

    /// Resolves two block ids to their pair in store order, accepting either
    /// argument order. `None` when the blocks are unknown or not neighbours.
    pub fn adjacent_pair(&self, a: BlockId, b: BlockId) -> Option<AdjacentPair> {
        let index_a = self.blocks.index_of(a)?;
        let index_b = self.blocks.index_of(b)?;
        if index_a + 1 == index_b {
            Some(AdjacentPair::new(a, b))
        } else if index_b + 1 == index_a {
            Some(AdjacentPair::new(b, a))
        } else {
            None
        }
    }

    /// Toggles the underground link between two adjacent blocks. `None` when
    /// they are not neighbours, so stale ids replay as no-ops.
    pub fn toggle_underground(&mut self, a: BlockId, b: BlockId) -> Option<bool> {
        let pair = self.adjacent_pair(a, b)?;
        Some(self.connections.toggle_underground(pair))
    }

    /// Runs the connector-column click machine for two adjacent blocks.
    pub fn connector_click(&mut self, a: BlockId, b: BlockId, floor: i32) -> ConnectorClick {
        let Some(pair) = self.adjacent_pair(a, b) else {
            return ConnectorClick::Ignored;
        };
        self.connections.connector_click(pair, floor, &self.blocks)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// A layout always keeps at least one block.
    LastBlock,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastBlock => f.write_str("cannot remove the last remaining block"),
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::{BlockId, ConnectorClick, Layout, LayoutError};

    fn id(value: u32) -> BlockId {
        BlockId::new(value)
    }

    #[test]
    fn adjacency_normalizes_argument_order() {
        let mut layout = Layout::new();
        layout.add_block();
        layout.add_block();

        let pair = layout.adjacent_pair(id(2), id(1)).expect("neighbours");
        assert_eq!(pair.from_block_id(), id(1));
        assert_eq!(pair.to_block_id(), id(2));

        assert!(layout.adjacent_pair(id(1), id(3)).is_none());
        assert!(layout.adjacent_pair(id(1), id(9)).is_none());
        assert!(layout.adjacent_pair(id(1), id(1)).is_none());
    }

    #[test]
    fn removing_a_block_cascades_and_grants_no_connector_to_new_neighbours() {
        let mut layout = Layout::new();
        layout.add_block();
        layout.add_block();
        layout.connector_click(id(1), id(2), 1);
        layout.toggle_underground(id(2), id(3)).expect("neighbours");
        layout.toggle_parking_membership(id(2)).expect("known block");

        assert!(layout.remove_block(id(2)).expect("not last"));
        assert!(layout.connections().stylobates().is_empty());
        assert!(layout.connections().underground_links().is_empty());
        assert!(layout.connections().parking_members().is_empty());

        // 1 and 3 are neighbours now, but start unconnected.
        let pair = layout.adjacent_pair(id(1), id(3)).expect("neighbours after removal");
        assert!(layout.connections().stylobate(pair).is_none());
        assert!(!layout.connections().has_underground(pair));
    }

    #[test]
    fn removing_the_last_block_is_rejected() {
        let mut layout = Layout::new();
        assert!(!layout.remove_block(id(9)).expect("unknown id is a no-op"));
        match layout.remove_block(id(1)) {
            Err(LayoutError::LastBlock) => {}
            other => panic!("expected LastBlock, got: {other:?}"),
        }
    }

    #[test]
    fn rename_propagates_to_stylobate_names() {
        let mut layout = Layout::new();
        layout.add_block();
        layout.connector_click(id(1), id(2), 1);

        assert!(layout.rename_block(id(2), "South"));
        let pair = layout.adjacent_pair(id(1), id(2)).expect("neighbours");
        assert_eq!(
            layout.connections().stylobate(pair).expect("created").name(),
            "Stylobate Block 1-South"
        );
    }

    #[test]
    fn parking_toggle_round_trips_with_the_clamp() {
        let mut layout = Layout::new();
        assert_eq!(layout.toggle_parking_membership(id(1)), Some(true));
        assert_eq!(layout.blocks().get(id(1)).expect("seed").bottom_floor(), -2);

        layout.grow_bottom(id(1));
        assert_eq!(layout.toggle_parking_membership(id(1)), Some(false));
        assert_eq!(layout.blocks().get(id(1)).expect("seed").bottom_floor(), 1);

        assert_eq!(layout.toggle_parking_membership(id(1)), Some(true));
        assert_eq!(layout.blocks().get(id(1)).expect("seed").bottom_floor(), -2);

        assert_eq!(layout.toggle_parking_membership(id(9)), None);
    }

    #[test]
    fn connector_click_on_non_neighbours_is_ignored() {
        let mut layout = Layout::new();
        layout.add_block();
        layout.add_block();
        assert_eq!(layout.connector_click(id(1), id(3), 1), ConnectorClick::Ignored);
        assert!(layout.connections().stylobates().is_empty());
    }
}
