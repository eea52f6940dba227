// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stylobate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylobate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Blocks and the ordered block store.

use std::collections::BTreeSet;

use super::ids::BlockId;
use super::layout::LayoutError;

const DEFAULT_BOTTOM_FLOOR: i32 = 1;
const DEFAULT_TOP_FLOOR: i32 = 5;

/// Bottom floor a block is clamped to when it joins the shared parking level.
const PARKING_BOTTOM_FLOOR: i32 = -2;

/// One tower of the project: an independent floor range plus per-floor flags.
///
/// Floors are numbered the way the portal displays them: `1` is the first
/// above-ground floor, `-1` the first basement level, and `0` is the roof row
/// of the underground part. A block whose range spans floor `0` renders a
/// roof cell there, never a habitable floor.
///
/// Technical floors are a subset of the block's current range and always
/// strictly above ground; range shrinks drop the flags that fall outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    id: BlockId,
    name: String,
    bottom_floor: i32,
    top_floor: i32,
    technical_floors: BTreeSet<i32>,
}

impl Block {
    /// Creates a block with the default floor range `1..=5`.
    pub fn new(id: BlockId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            bottom_floor: DEFAULT_BOTTOM_FLOOR,
            top_floor: DEFAULT_TOP_FLOOR,
            technical_floors: BTreeSet::new(),
        }
    }

    /// Creates a block with an explicit floor range.
    ///
    /// Callers must uphold `top_floor >= bottom_floor`; snapshot loading
    /// validates ranges before calling this.
    pub(crate) fn new_with(
        id: BlockId,
        name: impl Into<String>,
        bottom_floor: i32,
        top_floor: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            bottom_floor,
            top_floor,
            technical_floors: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bottom_floor(&self) -> i32 {
        self.bottom_floor
    }

    pub fn top_floor(&self) -> i32 {
        self.top_floor
    }

    /// Number of floors in the range, roof row included when spanned.
    pub fn floor_count(&self) -> i32 {
        self.top_floor - self.bottom_floor + 1
    }

    pub fn technical_floors(&self) -> &BTreeSet<i32> {
        &self.technical_floors
    }

    pub fn is_technical_floor(&self, floor: i32) -> bool {
        self.technical_floors.contains(&floor)
    }

    pub fn contains_floor(&self, floor: i32) -> bool {
        floor >= self.bottom_floor && floor <= self.top_floor
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Callers must uphold the technical-floor invariant (strictly positive,
    /// inside the range); snapshot loading validates before calling this.
    pub(crate) fn set_technical_floors(&mut self, floors: BTreeSet<i32>) {
        self.technical_floors = floors;
    }

    fn prune_technical_floors(&mut self) {
        let (bottom, top) = (self.bottom_floor, self.top_floor);
        self.technical_floors.retain(|&f| f >= bottom && f <= top);
    }
}

/// Ordered collection of blocks.
///
/// Vec order is load-bearing: two blocks are adjacent exactly when they sit
/// at consecutive indices, and every pair-keyed connection refers to that
/// ordering. The store never reorders blocks and never becomes empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStore {
    blocks: Vec<Block>,
}

impl BlockStore {
    /// Creates a store holding the single seed block every new layout starts
    /// with.
    pub fn new() -> Self {
        Self {
            blocks: vec![Block::new(BlockId::new(1), "Block 1")],
        }
    }

    /// Callers must pass at least one block with distinct ids.
    pub(crate) fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    /// Position of the block in the left-to-right order.
    pub fn index_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == id)
    }

    fn get_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|block| block.id == id)
    }

    fn next_block_id(&self) -> BlockId {
        let max = self
            .blocks
            .iter()
            .map(|block| block.id.value())
            .max()
            .unwrap_or(0);
        BlockId::new(max + 1)
    }

    /// Appends a new block with the default floor range.
    ///
    /// The id counter (`max + 1`) and the display-name counter (`len + 1`)
    /// diverge once blocks have been deleted; renaming is the user-facing
    /// fix, as elsewhere in the portal.
    pub fn add_block(&mut self) -> BlockId {
        let id = self.next_block_id();
        let name = format!("Block {}", self.blocks.len() + 1);
        self.blocks.push(Block::new(id, name));
        id
    }

    /// Removes a block and hands it back for cascade cleanup.
    ///
    /// Unknown ids are a no-op (`Ok(None)`); removing the last remaining
    /// block is rejected and leaves the store untouched.
    pub fn remove_block(&mut self, id: BlockId) -> Result<Option<Block>, LayoutError> {
        let Some(index) = self.index_of(id) else {
            return Ok(None);
        };
        if self.blocks.len() == 1 {
            return Err(LayoutError::LastBlock);
        }
        Ok(Some(self.blocks.remove(index)))
    }

    /// Returns whether a block with that id existed.
    pub fn rename_block(&mut self, id: BlockId, name: impl Into<String>) -> bool {
        let Some(block) = self.get_mut(id) else {
            return false;
        };
        block.set_name(name);
        true
    }

    pub fn grow_top(&mut self, id: BlockId) -> bool {
        let Some(block) = self.get_mut(id) else {
            return false;
        };
        block.top_floor += 1;
        true
    }

    /// Refuses to shrink past the bottom floor; a block always keeps at
    /// least one floor.
    pub fn shrink_top(&mut self, id: BlockId) -> bool {
        let Some(block) = self.get_mut(id) else {
            return false;
        };
        if block.top_floor == block.bottom_floor {
            return false;
        }
        block.top_floor -= 1;
        block.prune_technical_floors();
        true
    }

    pub fn grow_bottom(&mut self, id: BlockId) -> bool {
        let Some(block) = self.get_mut(id) else {
            return false;
        };
        block.bottom_floor -= 1;
        true
    }

    pub fn shrink_bottom(&mut self, id: BlockId) -> bool {
        let Some(block) = self.get_mut(id) else {
            return false;
        };
        if block.bottom_floor == block.top_floor {
            return false;
        }
        block.bottom_floor += 1;
        block.prune_technical_floors();
        true
    }

    /// Toggles the technical flag on one floor of a block.
    ///
    /// Only strictly positive floors inside the block's current range can be
    /// technical; anything else is a no-op. Returns the floor's new state,
    /// `None` when nothing changed.
    pub fn toggle_technical_floor(&mut self, id: BlockId, floor: i32) -> Option<bool> {
        let block = self.get_mut(id)?;
        if floor <= 0 || !block.contains_floor(floor) {
            return None;
        }
        if block.technical_floors.remove(&floor) {
            Some(false)
        } else {
            block.technical_floors.insert(floor);
            Some(true)
        }
    }

    /// Clamps a block's bottom floor when its parking membership flips.
    ///
    /// Joining pulls an above-ground bottom down to floor `-2`; leaving
    /// raises an underground bottom back to `1`. The two directions are
    /// asymmetric on purpose: a block that deepened to `-3` while parked
    /// leaves at `1` and re-joins at `-2`. Leaving also lifts the top when
    /// the whole range sat underground, so it stays ordered.
    pub(crate) fn clamp_bottom_for_parking(&mut self, id: BlockId, joining: bool) {
        let Some(block) = self.get_mut(id) else {
            return;
        };
        if joining {
            if block.bottom_floor >= 1 {
                block.bottom_floor = PARKING_BOTTOM_FLOOR;
            }
        } else if block.bottom_floor < 0 {
            block.bottom_floor = 1;
            if block.top_floor < block.bottom_floor {
                block.top_floor = block.bottom_floor;
            }
        }
    }
}

impl Default for BlockStore {
    fn default() -> Self {
        Self::new()
    }
}
