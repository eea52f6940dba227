// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stylobate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylobate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for layouts.
//!
//! The store module reads/writes the project folder format (one
//! `layout.json` per project) and defines the backend seam the
//! [`ChangeTracker`](crate::tracker::ChangeTracker) commits through.

pub mod project_folder;

pub use project_folder::{ProjectFolder, StoreError, WriteDurability};

use crate::model::Layout;

/// Persistence boundary of a layout: where snapshots come from and go to.
///
/// Futures returned here are not required to be `Send`; the editing model is
/// single-threaded and commits from the task that owns the layout.
#[allow(async_fn_in_trait)]
pub trait LayoutBackend {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads the persisted snapshot.
    async fn load(&self) -> Result<Layout, Self::Error>;

    /// Writes `layout` as the new persisted snapshot.
    async fn save(&self, layout: &Layout) -> Result<(), Self::Error>;
}
