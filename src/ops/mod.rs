// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stylobate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylobate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations on a layout.
//!
//! Every portal gesture, button press or cell click, arrives as one [`Op`].
//! Applying an op either mutates the layout and reports which transition
//! fired, or degrades to [`OpOutcome::Ignored`] when the target no longer
//! exists, so a stale op replays safely. The only hard failure is removing
//! the last remaining block.

use crate::grid::ColumnRef;
use crate::model::{BlockId, ConnectorClick, Layout, LayoutError};

/// One discrete user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    AddBlock,
    RemoveBlock {
        block_id: BlockId,
    },
    RenameBlock {
        block_id: BlockId,
        name: String,
    },
    GrowTop {
        block_id: BlockId,
    },
    ShrinkTop {
        block_id: BlockId,
    },
    GrowBottom {
        block_id: BlockId,
    },
    ShrinkBottom {
        block_id: BlockId,
    },
    ToggleTechnicalFloor {
        block_id: BlockId,
        floor: i32,
    },
    ToggleUnderground {
        from_block_id: BlockId,
        to_block_id: BlockId,
    },
    ToggleParking {
        block_id: BlockId,
    },
    /// A click on one grid cell, addressed by column target and floor.
    Click {
        column: ColumnRef,
        floor: i32,
    },
}

/// Which mutation an op resolved to.
///
/// Clicks fan out into several mutually exclusive transitions; the outcome
/// tells the caller which one fired so the UI can announce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpOutcome {
    BlockAdded(BlockId),
    BlockRemoved,
    BlockRenamed,
    TopGrown,
    TopShrunk,
    BottomGrown,
    BottomShrunk,
    /// Technical flag toggled; carries the floor's new state.
    TechnicalToggled(bool),
    /// Parking membership toggled; carries the new membership.
    ParkingToggled(bool),
    UndergroundLinked,
    UndergroundUnlinked,
    StylobateCreated,
    StylobateGrown,
    StylobateShrunk,
    StylobateRemoved,
    /// The op targeted something that does not exist (anymore) or a floor
    /// with no meaning for the target; nothing changed.
    Ignored,
}

/// Applies a single op to the layout.
pub fn apply_op(layout: &mut Layout, op: &Op) -> Result<OpOutcome, LayoutError> {
    let outcome = match op {
        Op::AddBlock => OpOutcome::BlockAdded(layout.add_block()),
        Op::RemoveBlock { block_id } => {
            if layout.remove_block(*block_id)? {
                OpOutcome::BlockRemoved
            } else {
                OpOutcome::Ignored
            }
        }
        Op::RenameBlock { block_id, name } => {
            if layout.rename_block(*block_id, name.clone()) {
                OpOutcome::BlockRenamed
            } else {
                OpOutcome::Ignored
            }
        }
        Op::GrowTop { block_id } => {
            if layout.grow_top(*block_id) {
                OpOutcome::TopGrown
            } else {
                OpOutcome::Ignored
            }
        }
        Op::ShrinkTop { block_id } => {
            if layout.shrink_top(*block_id) {
                OpOutcome::TopShrunk
            } else {
                OpOutcome::Ignored
            }
        }
        Op::GrowBottom { block_id } => {
            if layout.grow_bottom(*block_id) {
                OpOutcome::BottomGrown
            } else {
                OpOutcome::Ignored
            }
        }
        Op::ShrinkBottom { block_id } => {
            if layout.shrink_bottom(*block_id) {
                OpOutcome::BottomShrunk
            } else {
                OpOutcome::Ignored
            }
        }
        Op::ToggleTechnicalFloor { block_id, floor } => {
            match layout.toggle_technical_floor(*block_id, *floor) {
                Some(now_technical) => OpOutcome::TechnicalToggled(now_technical),
                None => OpOutcome::Ignored,
            }
        }
        Op::ToggleUnderground {
            from_block_id,
            to_block_id,
        } => match layout.toggle_underground(*from_block_id, *to_block_id) {
            Some(true) => OpOutcome::UndergroundLinked,
            Some(false) => OpOutcome::UndergroundUnlinked,
            None => OpOutcome::Ignored,
        },
        Op::ToggleParking { block_id } => match layout.toggle_parking_membership(*block_id) {
            Some(joined) => OpOutcome::ParkingToggled(joined),
            None => OpOutcome::Ignored,
        },
        Op::Click { column, floor } => apply_click(layout, *column, *floor),
    };
    Ok(outcome)
}

/// Applies a batch of ops in order, stopping at the first failure.
pub fn apply_ops(layout: &mut Layout, ops: &[Op]) -> Result<Vec<OpOutcome>, LayoutError> {
    let mut outcomes = Vec::with_capacity(ops.len());
    for op in ops {
        outcomes.push(apply_op(layout, op)?);
    }
    Ok(outcomes)
}

// Extracted click-resolution implementation for grid-cell interaction.
include!("click.rs");
