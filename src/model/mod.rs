// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stylobate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylobate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A [`Layout`] owns the ordered [`BlockStore`] and the [`ConnectionStore`]
//! keyed on adjacent block pairs, and coordinates the mutations that touch
//! both (parking clamps, rename propagation, cascade removal).

pub mod block;
pub mod connection;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod layout;

pub use block::{Block, BlockStore};
pub use connection::{AdjacentPair, ConnectionStore, ConnectorClick, Stylobate};
pub use ids::{BlockId, BlockIdTag, Id, StylobateId, StylobateIdTag};
pub use layout::{Layout, LayoutError};
