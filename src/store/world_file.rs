// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{ConfigError, RosterConfig};
use crate::game::Game;
use crate::model::{Actor, ActorDirectory, ActorId};
use crate::roster::{RosterError, RosterStore};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorldFile {
    #[serde(default)]
    pub config: RosterConfig,
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub party: Vec<ActorId>,
    #[serde(default)]
    pub reserve: Vec<ActorId>,
}

impl WorldFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&raw, path)
    }

    pub fn from_json(raw: &str, path: &Path) -> Result<Self, StoreError> {
        serde_json::from_str(raw)
            .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })
    }

    /// Validates the world and builds a session from it. `path` is only used in errors.
    pub fn into_game(self, path: &Path) -> Result<Game, StoreError> {
        self.config
            .validate()
            .map_err(|source| StoreError::Config { path: path.to_path_buf(), source })?;

        let mut seen = BTreeSet::new();
        for actor in &self.actors {
            if !seen.insert(actor.id()) {
                return Err(StoreError::DuplicateActor {
                    path: path.to_path_buf(),
                    actor_id: actor.id(),
                });
            }
        }
        for actor_id in self.party.iter().chain(self.reserve.iter()) {
            if !seen.contains(actor_id) {
                return Err(StoreError::UnknownActor {
                    path: path.to_path_buf(),
                    actor_id: *actor_id,
                });
            }
        }

        let roster = RosterStore::with_members(self.config.party_rules(), self.party, self.reserve)
            .map_err(|source| StoreError::Roster { path: path.to_path_buf(), source })?;
        let directory = self.actors.into_iter().collect::<ActorDirectory>();
        info!(
            path = %path.display(),
            actors = directory.len(),
            party = roster.party().len(),
            reserve = roster.reserve().len(),
            "world loaded"
        );
        Ok(Game::new(directory, roster, self.config))
    }

    pub fn load_game(path: impl AsRef<Path>) -> Result<Game, StoreError> {
        let path = path.as_ref();
        Self::load(path)?.into_game(path)
    }
}

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    Config { path: PathBuf, source: ConfigError },
    Roster { path: PathBuf, source: RosterError },
    DuplicateActor { path: PathBuf, actor_id: ActorId },
    UnknownActor { path: PathBuf, actor_id: ActorId },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "invalid json at {}: {source}", path.display())
            }
            Self::Config { path, source } => {
                write!(f, "invalid config in {}: {source}", path.display())
            }
            Self::Roster { path, source } => {
                write!(f, "invalid roster in {}: {source}", path.display())
            }
            Self::DuplicateActor { path, actor_id } => {
                write!(f, "actor {actor_id} is defined twice in {}", path.display())
            }
            Self::UnknownActor { path, actor_id } => {
                write!(f, "roster in {} references unknown actor {actor_id}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Config { source, .. } => Some(source),
            Self::Roster { source, .. } => Some(source),
            Self::DuplicateActor { .. } | Self::UnknownActor { .. } => None,
        }
    }
}
