// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stylobate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylobate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Stylobate — floor-grid layout model for multi-block construction projects.
//!
//! A layout is an ordered row of blocks, each with its own floor range and
//! technical floors, plus the connections between adjacent blocks: stylobates
//! above ground, underground links below, and shared parking membership.
//! The crate projects layouts onto the cell grid a portal renders, resolves
//! cell clicks into mutations, tracks unsaved changes against a baseline
//! snapshot, and persists layouts as one JSON file per project folder.

pub mod grid;
pub mod model;
pub mod ops;
pub mod store;
pub mod tracker;
