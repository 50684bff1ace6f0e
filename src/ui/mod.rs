// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Screen components of the roster screen.
//!
//! These hold selection and visibility state only. They read the roster live on every call and
//! never draw anything themselves; the terminal front end renders them.

pub mod command;
pub mod confirm;
pub mod feedback;
pub mod input;
pub mod list;
pub mod menu;
pub mod status;

pub use command::{CommandEnablement, CommandPanel, StorageCommand};
pub use confirm::{ConfirmChoice, ConfirmDialog};
pub use feedback::{Feedback, Silent, SoundCue};
pub use input::Input;
pub use list::{ListCursor, ListRow, PartyList, ReserveList, SelectableList};
pub use menu::MenuTabs;
pub use status::{StatusPanel, StatusView};
