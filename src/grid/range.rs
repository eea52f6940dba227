// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stylobate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylobate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Floor envelope of a layout.

use crate::model::BlockStore;

/// Global floor envelope across all blocks of a layout.
///
/// The grid renders every floor from `min_bottom` to `max_top` inclusive, so
/// the ground row 0 counts as a floor whenever the envelope spans it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorRange {
    max_top: i32,
    min_bottom: i32,
}

impl FloorRange {
    pub fn max_top(&self) -> i32 {
        self.max_top
    }

    pub fn min_bottom(&self) -> i32 {
        self.min_bottom
    }

    /// Number of grid rows.
    pub fn total_floors(&self) -> i32 {
        self.max_top - self.min_bottom + 1
    }

    /// Floors in render order, highest first.
    pub fn floors_top_down(&self) -> impl Iterator<Item = i32> {
        (self.min_bottom..=self.max_top).rev()
    }
}

/// Computes the floor envelope of a block store.
///
/// The store is never empty, so both extremes exist; an empty store yields
/// the degenerate single-floor envelope at 0.
pub fn floor_range(blocks: &BlockStore) -> FloorRange {
    if blocks.is_empty() {
        return FloorRange {
            max_top: 0,
            min_bottom: 0,
        };
    }
    let mut max_top = i32::MIN;
    let mut min_bottom = i32::MAX;
    for block in blocks.blocks() {
        max_top = max_top.max(block.top_floor());
        min_bottom = min_bottom.min(block.bottom_floor());
    }
    FloorRange {
        max_top,
        min_bottom,
    }
}
