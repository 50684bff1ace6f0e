// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::actor::{Actor, ActorId};

/// Lookup of every actor the game knows about, keyed by identity.
///
/// The roster never inserts into or removes from the directory; parting ways with an actor
/// only drops the roster's reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorDirectory {
    actors: BTreeMap<ActorId, Actor>,
}

impl ActorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an actor, returning the previous record with the same id.
    pub fn insert(&mut self, actor: Actor) -> Option<Actor> {
        self.actors.insert(actor.id(), actor)
    }

    pub fn get(&self, actor_id: ActorId) -> Option<&Actor> {
        self.actors.get(&actor_id)
    }

    pub fn contains(&self, actor_id: ActorId) -> bool {
        self.actors.contains_key(&actor_id)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.actors.keys().copied()
    }
}

impl FromIterator<Actor> for ActorDirectory {
    fn from_iter<I: IntoIterator<Item = Actor>>(iter: I) -> Self {
        let mut directory = Self::new();
        for actor in iter {
            directory.insert(actor);
        }
        directory
    }
}
