// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stylobate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylobate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Typed numeric identifiers.
//!
//! Ids are plain `u32` values wrapped in a phantom-tagged newtype so a
//! [`BlockId`] cannot be passed where a [`StylobateId`] is expected. The
//! owning store allocates them as `max(existing) + 1`.

use std::fmt;
use std::marker::PhantomData;

/// A typed numeric identifier.
///
/// `T` is a zero-sized tag type; it never exists at runtime and only keeps
/// ids of different entities apart at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub const fn new(value: u32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub const fn value(self) -> u32 {
        self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<u32> for Id<T> {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockIdTag {}
/// Identifier of a block within a layout.
pub type BlockId = Id<BlockIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StylobateIdTag {}
/// Identifier of a stylobate within a layout.
pub type StylobateId = Id<StylobateIdTag>;
