// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stylobate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylobate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Click resolution: a cell address plus the current layout state pick exactly
// one transition. Clicks never remove blocks, so they cannot fail.

fn apply_click(layout: &mut Layout, column: ColumnRef, floor: i32) -> OpOutcome {
    match column {
        ColumnRef::Connector { from, to } => {
            connector_outcome(layout.connector_click(from, to, floor))
        }
        ColumnRef::Block(block_id) => block_click(layout, block_id, floor),
    }
}

/// Block-column clicks.
///
/// In-range floors toggle per-floor state: technical above ground, parking
/// membership below. The floor just past either end of the range extends it
/// by one. The ground row stays inert, both as a roof cell and as a growth
/// target, and shrinking a range is reachable only through the explicit
/// range ops so a boundary click cannot shadow the toggle on that floor.
fn block_click(layout: &mut Layout, block_id: BlockId, floor: i32) -> OpOutcome {
    let Some(block) = layout.blocks().get(block_id) else {
        return OpOutcome::Ignored;
    };
    let bottom = block.bottom_floor();
    let top = block.top_floor();

    if floor == 0 {
        return OpOutcome::Ignored;
    }
    if floor > 0 && floor >= bottom && floor <= top {
        return match layout.toggle_technical_floor(block_id, floor) {
            Some(now_technical) => OpOutcome::TechnicalToggled(now_technical),
            None => OpOutcome::Ignored,
        };
    }
    if floor < 0 && floor >= bottom && floor <= top {
        return match layout.toggle_parking_membership(block_id) {
            Some(joined) => OpOutcome::ParkingToggled(joined),
            None => OpOutcome::Ignored,
        };
    }
    if floor == top + 1 {
        return if layout.grow_top(block_id) {
            OpOutcome::TopGrown
        } else {
            OpOutcome::Ignored
        };
    }
    if floor == bottom - 1 {
        return if layout.grow_bottom(block_id) {
            OpOutcome::BottomGrown
        } else {
            OpOutcome::Ignored
        };
    }
    OpOutcome::Ignored
}

fn connector_outcome(click: ConnectorClick) -> OpOutcome {
    match click {
        ConnectorClick::StylobateCreated => OpOutcome::StylobateCreated,
        ConnectorClick::StylobateGrown => OpOutcome::StylobateGrown,
        ConnectorClick::StylobateShrunk => OpOutcome::StylobateShrunk,
        ConnectorClick::StylobateRemoved => OpOutcome::StylobateRemoved,
        ConnectorClick::UndergroundLinked => OpOutcome::UndergroundLinked,
        ConnectorClick::UndergroundUnlinked => OpOutcome::UndergroundUnlinked,
        ConnectorClick::Ignored => OpOutcome::Ignored,
    }
}
