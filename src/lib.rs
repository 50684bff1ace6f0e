// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Troupe: party and reserve roster management for a role-playing game.
//!
//! The roster store owns who travels and who waits; the screen controller drives the list,
//! command and confirmation panels over it; the terminal front end hosts both.

pub mod config;
pub mod game;
pub mod logging;
pub mod model;
pub mod roster;
pub mod screen;
pub mod store;
pub mod tui;
pub mod ui;
