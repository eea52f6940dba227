// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stylobate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylobate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Project folder persistence.
//!
//! One project directory holds one `layout.json` snapshot. Writes are atomic
//! (temp file in the same directory, then rename); loads validate the file
//! against the model invariants before any of it reaches a [`Layout`], so a
//! hand-edited snapshot cannot smuggle in an inconsistent state.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::model::{
    AdjacentPair, Block, BlockId, BlockStore, ConnectionStore, Layout, Stylobate, StylobateId,
};

use super::LayoutBackend;

const LAYOUT_FILE_NAME: &str = "layout.json";

/// Snapshot format version this build reads and writes.
const LAYOUT_SCHEMA: u32 = 1;

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    UnsupportedSchema {
        path: PathBuf,
        schema: u32,
    },
    EmptyLayout {
        path: PathBuf,
    },
    DuplicateBlockId {
        path: PathBuf,
        block_id: u32,
    },
    InvalidFloorRange {
        path: PathBuf,
        block_id: u32,
        bottom_floor: i32,
        top_floor: i32,
    },
    InvalidTechnicalFloor {
        path: PathBuf,
        block_id: u32,
        floor: i32,
    },
    UnknownBlockId {
        path: PathBuf,
        field: &'static str,
        block_id: u32,
    },
    NotAdjacent {
        path: PathBuf,
        field: &'static str,
        from_block_id: u32,
        to_block_id: u32,
    },
    DuplicatePair {
        path: PathBuf,
        field: &'static str,
        from_block_id: u32,
        to_block_id: u32,
    },
    InvalidStylobateFloors {
        path: PathBuf,
        from_block_id: u32,
        to_block_id: u32,
        floors: i32,
    },
    SymlinkRefused {
        path: PathBuf,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::UnsupportedSchema { path, schema } => {
                write!(f, "unsupported schema {schema} in {path:?}")
            }
            Self::EmptyLayout { path } => write!(f, "layout at {path:?} has no blocks"),
            Self::DuplicateBlockId { path, block_id } => {
                write!(f, "duplicate block id {block_id} in {path:?}")
            }
            Self::InvalidFloorRange {
                path,
                block_id,
                bottom_floor,
                top_floor,
            } => write!(
                f,
                "block {block_id} in {path:?} has top floor {top_floor} below bottom floor {bottom_floor}"
            ),
            Self::InvalidTechnicalFloor {
                path,
                block_id,
                floor,
            } => write!(f, "block {block_id} in {path:?} has invalid technical floor {floor}"),
            Self::UnknownBlockId {
                path,
                field,
                block_id,
            } => write!(f, "{field} in {path:?} references unknown block id {block_id}"),
            Self::NotAdjacent {
                path,
                field,
                from_block_id,
                to_block_id,
            } => write!(
                f,
                "{field} in {path:?} connects non-adjacent blocks {from_block_id} and {to_block_id}"
            ),
            Self::DuplicatePair {
                path,
                field,
                from_block_id,
                to_block_id,
            } => write!(
                f,
                "{field} in {path:?} repeats the pair {from_block_id}-{to_block_id}"
            ),
            Self::InvalidStylobateFloors {
                path,
                from_block_id,
                to_block_id,
                floors,
            } => write!(
                f,
                "stylobate {from_block_id}-{to_block_id} in {path:?} has invalid floor count {floors}"
            ),
            Self::SymlinkRefused { path } => {
                write!(f, "refusing to write through symlink at {path:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// How hard `save_layout` tries to get bytes onto the platter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// Writes go through the atomic temp-file dance but skip fsync.
    #[default]
    BestEffort,
    /// Slower, best-effort durability.
    ///
    /// Additionally fsyncs the temp file before the rename and, on Unix, the
    /// parent directory after it.
    Durable,
}

/// A project directory holding one persisted layout snapshot.
#[derive(Debug, Clone)]
pub struct ProjectFolder {
    root: PathBuf,
    durability: WriteDurability,
}

impl ProjectFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout_path(&self) -> PathBuf {
        self.root.join(LAYOUT_FILE_NAME)
    }

    /// Loads the snapshot, seeding a fresh single-block layout (and writing
    /// it out) when the snapshot file does not exist yet. Any other failure,
    /// including a missing parent directory entry of a different kind, is
    /// reported as is.
    pub fn load_or_init(&self) -> Result<Layout, StoreError> {
        match self.load_layout() {
            Ok(layout) => Ok(layout),
            Err(StoreError::Io { path, source })
                if source.kind() == io::ErrorKind::NotFound && path == self.layout_path() =>
            {
                let layout = Layout::new();
                self.save_layout(&layout)?;
                Ok(layout)
            }
            Err(err) => Err(err),
        }
    }

    pub fn load_layout(&self) -> Result<Layout, StoreError> {
        let layout_path = self.layout_path();
        let raw = fs::read_to_string(&layout_path).map_err(|source| StoreError::Io {
            path: layout_path.clone(),
            source,
        })?;

        let json: LayoutJson = serde_json::from_str(&raw).map_err(|source| StoreError::Json {
            path: layout_path.clone(),
            source,
        })?;

        layout_from_json(&layout_path, json)
    }

    pub fn save_layout(&self, layout: &Layout) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })?;

        let layout_path = self.layout_path();
        let json = layout_to_json(layout);
        let json_str = serde_json::to_string_pretty(&json).map_err(|source| StoreError::Json {
            path: layout_path.clone(),
            source,
        })?;

        write_atomic(
            &layout_path,
            format!("{json_str}\n").as_bytes(),
            self.durability,
        )
    }
}

/// The backend view of a project folder: `load` seeds a fresh layout on
/// first open, `save` writes the snapshot synchronously.
impl LayoutBackend for ProjectFolder {
    type Error = StoreError;

    async fn load(&self) -> Result<Layout, StoreError> {
        self.load_or_init()
    }

    async fn save(&self, layout: &Layout) -> Result<(), StoreError> {
        self.save_layout(layout)
    }
}

// Extracted wire-format and filesystem helpers for `ProjectFolder`.
include!("project_folder/helpers.rs");
