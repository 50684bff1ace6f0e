// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Actor records and the directory that looks them up.
//!
//! Actors belong to the surrounding game; this crate only reads their display fields.

pub mod actor;
pub mod directory;
#[cfg(test)]
pub(crate) mod fixtures;

pub use actor::{Actor, ActorId, CharacterSprite, Gauge, Param, ParamSet};
pub use directory::ActorDirectory;
