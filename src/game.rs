// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Game session container.
//!
//! Owns the actor directory, the roster and, while it is open, the roster screen. Scripted
//! party edits go through here so they touch the same roster the screen reads; any overflow
//! they introduce is reconciled on the next tick, whether the screen is open or not.

use tracing::{debug, info};

use crate::config::RosterConfig;
use crate::model::{ActorDirectory, ActorId};
use crate::roster::{RosterError, RosterStore};
use crate::screen::{ScreenController, ScreenStatus};
use crate::ui::{Feedback, Input};

pub const PLUGIN_NAME: &str = "ActorStorage";

/// Commands an event script can issue to this subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    OpenStorage,
}

impl ScriptCommand {
    /// Parses `ActorStorage <subcommand>`. Anything else belongs to another plugin.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        if words.next()? != PLUGIN_NAME {
            return None;
        }
        match words.next()? {
            "open" => Some(Self::OpenStorage),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    directory: ActorDirectory,
    roster: RosterStore,
    config: RosterConfig,
    screen: Option<ScreenController>,
}

impl Game {
    pub fn new(directory: ActorDirectory, roster: RosterStore, config: RosterConfig) -> Self {
        Self { directory, roster, config, screen: None }
    }

    pub fn directory(&self) -> &ActorDirectory {
        &self.directory
    }

    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    pub fn screen(&self) -> Option<&ScreenController> {
        self.screen.as_ref()
    }

    pub fn is_storage_open(&self) -> bool {
        self.screen.is_some()
    }

    /// Runs an event-script line. Returns whether this subsystem handled it.
    pub fn run_script_command(&mut self, line: &str) -> bool {
        match ScriptCommand::parse(line) {
            Some(ScriptCommand::OpenStorage) => {
                self.open_storage();
                true
            }
            None => false,
        }
    }

    pub fn open_storage(&mut self) {
        if self.screen.is_none() {
            info!("roster screen opened");
            self.screen = Some(ScreenController::new());
        }
    }

    /// One frame. With the screen open the input goes to it; otherwise this is a field frame,
    /// which only reconciles party overflow.
    pub fn tick(&mut self, input: Option<Input>, feedback: &mut dyn Feedback) {
        match self.screen.as_mut() {
            Some(screen) => {
                if screen.tick(&mut self.roster, input, feedback) == ScreenStatus::Closed {
                    self.screen = None;
                }
            }
            None => {
                self.roster.enforce_overflow();
            }
        }
    }

    /// Scripted "add party member": no size check, overflow is demoted on the next tick.
    pub fn add_party_member(&mut self, actor_id: ActorId) -> Result<(), RosterError> {
        self.ensure_known(actor_id)?;
        self.roster.force_add_to_party(actor_id);
        Ok(())
    }

    /// Scripted "remove party member"; the actor leaves the roster entirely.
    pub fn remove_party_member(&mut self, actor_id: ActorId) -> Result<(), RosterError> {
        self.ensure_known(actor_id)?;
        if !self.roster.force_remove_from_party(actor_id) {
            return Err(RosterError::NotInParty { actor_id });
        }
        Ok(())
    }

    pub fn recruit_to_reserve(&mut self, actor_id: ActorId) -> Result<(), RosterError> {
        self.ensure_known(actor_id)?;
        self.roster.join_reserve(actor_id)
    }

    /// First directory actor that is on neither side of the roster.
    pub fn next_unrostered_actor(&self) -> Option<ActorId> {
        self.directory.ids().find(|actor_id| !self.roster.contains(*actor_id))
    }

    fn ensure_known(&self, actor_id: ActorId) -> Result<(), RosterError> {
        if self.directory.contains(actor_id) {
            Ok(())
        } else {
            debug!(actor = %actor_id, "script referenced unknown actor");
            Err(RosterError::UnknownActor { actor_id })
        }
    }
}
