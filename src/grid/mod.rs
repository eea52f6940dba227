// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stylobate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylobate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only projection of a layout onto the floor grid.
//!
//! The portal renders a layout as one column per block with a connector
//! column between each adjacent pair (`2n - 1` columns for `n` blocks) and
//! one row per floor of the global envelope, highest floor first. The grid
//! carries no incremental state; callers rebuild it after every mutation.

use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::model::{AdjacentPair, Block, BlockId, BlockStore, ConnectionStore, Layout};

pub mod range;

pub use range::{floor_range, FloorRange};


/// What a single cell renders as and, by extension, what clicking it means.
///
/// Exactly one kind applies per cell; the block-column precedence is roof,
/// then technical, then typical or parking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// The floor lies outside the column's occupied range.
    Empty,
    /// Habitable floor of a block.
    Typical,
    /// Technical floor of a block.
    Technical,
    /// Ground row of a block whose range spans floor 0.
    Roof,
    /// Underground floor of a block that belongs to the shared parking level.
    Parking,
    /// Above-ground connector floor covered by a stylobate.
    Stylobate,
    /// At-or-below-ground connector floor covered by an underground link.
    Underground,
}

/// Stable click address of a grid column, independent of column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRef {
    Block(BlockId),
    Connector { from: BlockId, to: BlockId },
}

/// Column header: the click target plus its display title.
///
/// Connector columns take the stylobate name when one exists and are
/// untitled otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumn {
    target: ColumnRef,
    title: SmolStr,
}

impl GridColumn {
    pub fn target(&self) -> ColumnRef {
        self.target
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// One floor of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    floor: i32,
    cells: SmallVec<[CellKind; 16]>,
}

impl GridRow {
    pub fn floor(&self) -> i32 {
        self.floor
    }

    /// Cells in column order, one per [`Grid::columns`] entry.
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }
}

/// The projected grid: column headers plus rows from the top floor down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: Vec<GridColumn>,
    rows: Vec<GridRow>,
}

impl Grid {
    pub fn columns(&self) -> &[GridColumn] {
        &self.columns
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn row_at(&self, floor: i32) -> Option<&GridRow> {
        self.rows.iter().find(|row| row.floor == floor)
    }

    pub fn cell(&self, column: usize, floor: i32) -> Option<CellKind> {
        let row = self.row_at(floor)?;
        row.cells.get(column).copied()
    }
}

/// Projects a layout onto the cell grid the portal renders.
pub fn build_grid(layout: &Layout) -> Grid {
    let blocks = layout.blocks();
    let connections = layout.connections();
    let range = floor_range(blocks);

    let mut columns = Vec::with_capacity(blocks.len().saturating_mul(2).saturating_sub(1));
    for (index, block) in blocks.blocks().iter().enumerate() {
        if index > 0 {
            let prev = &blocks.blocks()[index - 1];
            let pair = AdjacentPair::new(prev.id(), block.id());
            let title = connections
                .stylobate(pair)
                .map(|stylobate| SmolStr::new(stylobate.name()))
                .unwrap_or_default();
            columns.push(GridColumn {
                target: ColumnRef::Connector {
                    from: prev.id(),
                    to: block.id(),
                },
                title,
            });
        }
        columns.push(GridColumn {
            target: ColumnRef::Block(block.id()),
            title: SmolStr::new(block.name()),
        });
    }

    let mut rows = Vec::with_capacity(range.total_floors().max(0) as usize);
    for floor in range.floors_top_down() {
        let mut cells = SmallVec::new();
        for column in &columns {
            cells.push(match column.target {
                ColumnRef::Block(id) => block_cell(blocks.get(id), connections, floor),
                ColumnRef::Connector { from, to } => {
                    connector_cell(blocks, connections, from, to, floor)
                }
            });
        }
        rows.push(GridRow { floor, cells });
    }

    Grid { columns, rows }
}

fn block_cell(block: Option<&Block>, connections: &ConnectionStore, floor: i32) -> CellKind {
    let Some(block) = block else {
        return CellKind::Empty;
    };
    if !block.contains_floor(floor) {
        return CellKind::Empty;
    }
    if floor == 0 {
        return CellKind::Roof;
    }
    if block.is_technical_floor(floor) {
        return CellKind::Technical;
    }
    if floor > 0 {
        return CellKind::Typical;
    }
    if connections.is_parking_member(block.id()) {
        CellKind::Parking
    } else {
        CellKind::Typical
    }
}

fn connector_cell(
    blocks: &BlockStore,
    connections: &ConnectionStore,
    from: BlockId,
    to: BlockId,
    floor: i32,
) -> CellKind {
    let pair = AdjacentPair::new(from, to);
    if floor > 0 {
        if connections
            .stylobate(pair)
            .is_some_and(|stylobate| stylobate.covers_floor(floor))
        {
            return CellKind::Stylobate;
        }
        return CellKind::Empty;
    }

    // An underground link spans the floors both blocks reach: everything from
    // the higher of the two bottoms up to the ground row.
    if connections.has_underground(pair) {
        let (Some(from_block), Some(to_block)) = (blocks.get(from), blocks.get(to)) else {
            return CellKind::Empty;
        };
        let span_bottom = from_block.bottom_floor().max(to_block.bottom_floor());
        if floor >= span_bottom {
            return CellKind::Underground;
        }
    }
    CellKind::Empty
}
