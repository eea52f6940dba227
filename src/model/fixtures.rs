// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stylobate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylobate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared test fixtures.

use super::block::{Block, BlockStore};
use super::connection::{AdjacentPair, ConnectionStore, Stylobate};
use super::ids::{BlockId, StylobateId};
use super::layout::Layout;

fn block(id: u32, name: &str, bottom_floor: i32, top_floor: i32) -> Block {
    Block::new_with(BlockId::new(id), name, bottom_floor, top_floor)
}

/// Two default towers side by side, no connections.
pub(crate) fn layout_two_towers() -> Layout {
    let mut layout = Layout::new();
    layout.add_block();
    layout
}

/// Three towers with every connection kind in play:
/// `A [-2..=12] | B [-1..=8] | C [-1..=20]`, a three-floor stylobate A-B,
/// an underground link B-C, A in the parking level, technical floors 4 and 8
/// on A.
pub(crate) fn layout_three_towers() -> Layout {
    let mut a = block(1, "A", -2, 12);
    a.set_technical_floors([4, 8].into());
    let b = block(2, "B", -1, 8);
    let c = block(3, "C", -1, 20);
    let blocks = BlockStore::from_blocks(vec![a, b, c]);

    let ab = AdjacentPair::new(BlockId::new(1), BlockId::new(2));
    let bc = AdjacentPair::new(BlockId::new(2), BlockId::new(3));

    let mut connections = ConnectionStore::default();
    connections.insert_stylobate(ab, Stylobate::new(StylobateId::new(1), "Stylobate A-B", 3));
    connections.insert_underground(bc);
    connections.insert_parking_member(BlockId::new(1));

    Layout::from_parts(blocks, connections)
}
