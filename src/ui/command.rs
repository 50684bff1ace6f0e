// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Contextual command menu shown under the member list.
//!
//! Enablement is not owned by the panel: the screen controller pushes a fresh
//! [`CommandEnablement`] every frame, computed from the focused side and live roster counts.

use super::list::ListCursor;
use crate::roster::{RosterStore, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageCommand {
    SendToParty,
    SendToReserve,
    PartWays,
}

impl StorageCommand {
    pub const ALL: [StorageCommand; 3] =
        [StorageCommand::SendToParty, StorageCommand::SendToReserve, StorageCommand::PartWays];

    pub fn label(self) -> &'static str {
        match self {
            Self::SendToParty => "Send to party",
            Self::SendToReserve => "Send to reserve",
            Self::PartWays => "Part ways",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandEnablement {
    pub send_to_party: bool,
    pub send_to_reserve: bool,
    pub part_ways: bool,
}

impl CommandEnablement {
    pub fn for_side(side: Side, roster: &RosterStore) -> Self {
        match side {
            Side::Party => {
                let can_leave = roster.can_shrink_party();
                Self { send_to_party: false, send_to_reserve: can_leave, part_ways: can_leave }
            }
            Side::Reserve => Self {
                send_to_party: roster.has_party_room(),
                send_to_reserve: false,
                part_ways: true,
            },
        }
    }

    pub fn is_enabled(&self, command: StorageCommand) -> bool {
        match command {
            StorageCommand::SendToParty => self.send_to_party,
            StorageCommand::SendToReserve => self.send_to_reserve,
            StorageCommand::PartWays => self.part_ways,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandPanel {
    cursor: ListCursor,
    enablement: CommandEnablement,
}

impl CommandPanel {
    pub fn set_enablement(&mut self, enablement: CommandEnablement) {
        self.enablement = enablement;
    }

    pub fn enablement(&self) -> CommandEnablement {
        self.enablement
    }

    pub fn is_enabled(&self, command: StorageCommand) -> bool {
        self.enablement.is_enabled(command)
    }

    pub fn index(&self) -> Option<usize> {
        self.cursor.index()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.cursor.select_clamped(index, StorageCommand::ALL.len());
    }

    pub fn deselect(&mut self) {
        self.cursor.clear();
    }

    pub fn current(&self) -> Option<StorageCommand> {
        self.cursor.index().and_then(|index| StorageCommand::ALL.get(index).copied())
    }

    /// Disabled commands can be highlighted; they just cannot be confirmed.
    pub fn move_cursor(&mut self, delta: isize) -> bool {
        self.cursor.step(delta, StorageCommand::ALL.len())
    }

    /// The highlighted command, only if it is currently enabled.
    pub fn confirmable(&self) -> Option<StorageCommand> {
        self.current().filter(|command| self.is_enabled(*command))
    }
}
