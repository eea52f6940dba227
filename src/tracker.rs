// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stylobate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylobate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Unsaved-changes tracking.

use crate::model::Layout;
use crate::store::LayoutBackend;

/// Tracks the last persisted state of a layout.
///
/// The tracker owns a deep copy of the layout as it was at load time or
/// after the last successful commit. Dirtiness is structural inequality
/// against that baseline, reset restores the baseline verbatim, and commit
/// re-baselines only when the backend accepted the save, so a failed save
/// keeps reporting dirty and stays retryable.
#[derive(Debug, Clone)]
pub struct ChangeTracker {
    baseline: Layout,
}

impl ChangeTracker {
    pub fn new(layout: &Layout) -> Self {
        Self {
            baseline: layout.clone(),
        }
    }

    pub fn baseline(&self) -> &Layout {
        &self.baseline
    }

    pub fn is_dirty(&self, current: &Layout) -> bool {
        self.baseline != *current
    }

    /// Discards every edit since the baseline.
    pub fn reset(&self, current: &mut Layout) {
        current.clone_from(&self.baseline);
    }

    /// Persists `current` through the backend and, on success, adopts it as
    /// the new baseline. On failure neither the tracker nor the layout move;
    /// the error is handed back for retry.
    pub async fn commit<B: LayoutBackend>(
        &mut self,
        backend: &B,
        current: &Layout,
    ) -> Result<(), B::Error> {
        backend.save(current).await?;
        self.baseline = current.clone();
        Ok(())
    }
}
