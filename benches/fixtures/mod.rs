// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stylobate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylobate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use stylobate::grid::{ColumnRef, Grid};
use stylobate::model::{BlockId, Layout};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("stylobate_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

pub fn checksum_layout(layout: &Layout) -> u64 {
    let mut acc = 0u64;

    for block in layout.blocks().blocks() {
        acc = acc.wrapping_mul(131).wrapping_add(block.id().value() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(block.name().len() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(block.bottom_floor().unsigned_abs() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(block.top_floor().unsigned_abs() as u64);
        for &floor in block.technical_floors() {
            acc = acc.wrapping_mul(131).wrapping_add(floor.unsigned_abs() as u64);
        }
    }

    for (pair, stylobate) in layout.connections().stylobates() {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(pair.from_block_id().value() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(stylobate.id().value() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(stylobate.name().len() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(stylobate.floors().unsigned_abs() as u64);
    }

    for pair in layout.connections().underground_links() {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(pair.from_block_id().value() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(pair.to_block_id().value() as u64);
    }

    for id in layout.connections().parking_members() {
        acc = acc.wrapping_mul(131).wrapping_add(id.value() as u64);
    }

    acc
}

pub fn checksum_grid(grid: &Grid) -> u64 {
    let mut acc = 0u64;

    for column in grid.columns() {
        acc = acc.wrapping_mul(131).wrapping_add(column.title().len() as u64);
        acc = match column.target() {
            ColumnRef::Block(id) => acc.wrapping_mul(131).wrapping_add(id.value() as u64),
            ColumnRef::Connector { from, to } => acc
                .wrapping_mul(131)
                .wrapping_add(from.value() as u64)
                .wrapping_mul(131)
                .wrapping_add(to.value() as u64),
        };
    }

    for row in grid.rows() {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(row.floor().unsigned_abs() as u64);
        for &cell in row.cells() {
            acc = acc.wrapping_mul(131).wrapping_add(cell as u64);
        }
    }

    acc
}

pub mod towers {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub blocks: usize,
        pub height_step: usize,
        pub basement_every: usize,
        pub parking_every: usize,
        pub technical_every: usize,
        pub connected: bool,
    }

    impl Params {
        pub const fn new(
            blocks: usize,
            height_step: usize,
            basement_every: usize,
            parking_every: usize,
            technical_every: usize,
            connected: bool,
        ) -> Self {
            Self {
                blocks,
                height_step,
                basement_every,
                parking_every,
                technical_every,
                connected,
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        MediumConnected,
        LargeSprawling,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::MediumConnected => "medium_connected",
                Self::LargeSprawling => "large_sprawling",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params::new(3, 3, 0, 0, 0, false),
                Self::MediumConnected => Params::new(12, 5, 3, 4, 3, true),
                Self::LargeSprawling => Params::new(64, 9, 2, 3, 5, true),
            }
        }
    }

    /// Deterministic multi-block estate generator.
    ///
    /// Built entirely through the public mutation surface so the fixtures
    /// stay valid layouts by construction. Heights, basements, parking and
    /// technical floors vary with the block index; when `connected`, every
    /// adjacent pair alternates between a two-floor stylobate and an
    /// underground link.
    pub fn estate(params: Params) -> Layout {
        assert!(params.blocks >= 1, "blocks must be >= 1");
        assert!(params.height_step >= 1, "height_step must be >= 1");

        let mut layout = Layout::new();
        let mut ids = vec![BlockId::new(1)];
        for _ in 1..params.blocks {
            ids.push(layout.add_block());
        }

        for (index, &id) in ids.iter().enumerate() {
            for _ in 0..index % params.height_step {
                layout.grow_top(id);
            }
            if params.basement_every > 0 && index % params.basement_every == 0 {
                layout.grow_bottom(id);
                layout.grow_bottom(id);
            }
            if params.parking_every > 0 && index % params.parking_every == 0 {
                layout.toggle_parking_membership(id);
            }
            if params.technical_every > 0 && index % params.technical_every == 0 {
                layout.toggle_technical_floor(id, 2);
            }
        }

        if params.connected {
            for (index, window) in ids.windows(2).enumerate() {
                let (from, to) = (window[0], window[1]);
                if index % 2 == 0 {
                    layout.connector_click(from, to, 1);
                    layout.connector_click(from, to, 2);
                } else {
                    layout.connector_click(from, to, 0);
                }
            }
        }

        layout
    }

    pub fn fixture(case: Case) -> Layout {
        estate(case.params())
    }
}
