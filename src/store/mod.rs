// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Loading a game world from disk.
//!
//! A world file is the actor database plus the starting party, reserve and configuration. It is
//! only ever read; roster changes made in the screen are not written back.

pub mod world_file;

pub use world_file::{StoreError, WorldFile};
