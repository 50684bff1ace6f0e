// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Party and reserve bookkeeping.
//!
//! The store owns two disjoint, ordered collections of actor ids. Every actor on the roster is
//! in exactly one of them. The party size bound is soft: additions through `force_add_to_party`
//! may overflow it and `enforce_overflow` demotes the tail afterwards.

use std::fmt;

use tracing::{debug, info};

use crate::model::ActorId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Party,
    Reserve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartyRules {
    pub max_party_size: usize,
    pub allow_empty_party: bool,
}

impl Default for PartyRules {
    fn default() -> Self {
        Self { max_party_size: crate::config::DEFAULT_MAX_PARTY_SIZE, allow_empty_party: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterStore {
    party: Vec<ActorId>,
    reserve: Vec<ActorId>,
    rules: PartyRules,
}

impl RosterStore {
    pub fn new(rules: PartyRules) -> Self {
        Self { party: Vec::new(), reserve: Vec::new(), rules }
    }

    /// Builds a roster from initial collections.
    ///
    /// Duplicates and actors listed on both sides are rejected. An over-full party is kept as
    /// given; the first `enforce_overflow` reconciles it.
    pub fn with_members(
        rules: PartyRules,
        party: impl IntoIterator<Item = ActorId>,
        reserve: impl IntoIterator<Item = ActorId>,
    ) -> Result<Self, RosterError> {
        let mut store = Self::new(rules);
        for actor_id in party {
            if store.contains(actor_id) {
                return Err(RosterError::AlreadyOnRoster { actor_id });
            }
            store.party.push(actor_id);
        }
        for actor_id in reserve {
            if store.contains(actor_id) {
                return Err(RosterError::AlreadyOnRoster { actor_id });
            }
            store.reserve.push(actor_id);
        }
        Ok(store)
    }

    pub fn rules(&self) -> PartyRules {
        self.rules
    }

    pub fn party(&self) -> &[ActorId] {
        &self.party
    }

    pub fn reserve(&self) -> &[ActorId] {
        &self.reserve
    }

    pub fn members(&self, side: Side) -> &[ActorId] {
        match side {
            Side::Party => &self.party,
            Side::Reserve => &self.reserve,
        }
    }

    pub fn side_of(&self, actor_id: ActorId) -> Option<Side> {
        if self.party.contains(&actor_id) {
            Some(Side::Party)
        } else if self.reserve.contains(&actor_id) {
            Some(Side::Reserve)
        } else {
            None
        }
    }

    pub fn contains(&self, actor_id: ActorId) -> bool {
        self.side_of(actor_id).is_some()
    }

    /// Whether one member may leave the party without breaking the non-empty rule.
    pub fn can_shrink_party(&self) -> bool {
        self.party.len() > 1 || self.rules.allow_empty_party
    }

    pub fn has_party_room(&self) -> bool {
        self.party.len() < self.rules.max_party_size
    }

    pub fn move_party_to_reserve(&mut self, actor_id: ActorId) -> Result<(), RosterError> {
        let Some(index) = position(&self.party, actor_id) else {
            return Err(RosterError::NotInParty { actor_id });
        };
        if !self.can_shrink_party() {
            return Err(RosterError::LastPartyMember { actor_id });
        }
        self.party.remove(index);
        self.reserve.push(actor_id);
        debug!(actor = %actor_id, party = self.party.len(), "moved to reserve");
        Ok(())
    }

    pub fn move_reserve_to_party(&mut self, actor_id: ActorId) -> Result<(), RosterError> {
        let Some(index) = position(&self.reserve, actor_id) else {
            return Err(RosterError::NotInReserve { actor_id });
        };
        if !self.has_party_room() {
            return Err(RosterError::PartyFull { max_party_size: self.rules.max_party_size });
        }
        self.reserve.remove(index);
        self.party.push(actor_id);
        debug!(actor = %actor_id, party = self.party.len(), "moved to party");
        Ok(())
    }

    /// Drops the actor from the roster for good and reports where it was.
    pub fn part_with(&mut self, actor_id: ActorId) -> Result<Side, RosterError> {
        match self.side_of(actor_id) {
            Some(Side::Party) => {
                if !self.can_shrink_party() {
                    return Err(RosterError::LastPartyMember { actor_id });
                }
                self.party.retain(|id| *id != actor_id);
                debug!(actor = %actor_id, "parted ways (party)");
                Ok(Side::Party)
            }
            Some(Side::Reserve) => {
                self.reserve.retain(|id| *id != actor_id);
                debug!(actor = %actor_id, "parted ways (reserve)");
                Ok(Side::Reserve)
            }
            None => Err(RosterError::NotOnRoster { actor_id }),
        }
    }

    /// Demotes tail party members until the size bound holds; returns them in demotion order.
    ///
    /// The non-empty rule is not consulted here.
    pub fn enforce_overflow(&mut self) -> Vec<ActorId> {
        let mut demoted = Vec::new();
        while self.party.len() > self.rules.max_party_size {
            let Some(actor_id) = self.party.pop() else {
                break;
            };
            self.reserve.push(actor_id);
            demoted.push(actor_id);
        }
        if !demoted.is_empty() {
            info!(
                demoted = ?demoted,
                max_party_size = self.rules.max_party_size,
                "party overflow demoted to reserve"
            );
        }
        demoted
    }

    /// Appends to the party without a size check, the way scripted party edits do.
    ///
    /// An actor waiting in the reserve is taken out of it first. Already in the party: no-op.
    pub fn force_add_to_party(&mut self, actor_id: ActorId) {
        if self.party.contains(&actor_id) {
            return;
        }
        self.reserve.retain(|id| *id != actor_id);
        self.party.push(actor_id);
        debug!(actor = %actor_id, party = self.party.len(), "party member added externally");
    }

    /// Drops a party member without the non-empty rule; returns whether anything changed.
    pub fn force_remove_from_party(&mut self, actor_id: ActorId) -> bool {
        let before = self.party.len();
        self.party.retain(|id| *id != actor_id);
        let removed = self.party.len() != before;
        if removed {
            debug!(actor = %actor_id, party = self.party.len(), "party member removed externally");
        }
        removed
    }

    pub fn join_reserve(&mut self, actor_id: ActorId) -> Result<(), RosterError> {
        if self.contains(actor_id) {
            return Err(RosterError::AlreadyOnRoster { actor_id });
        }
        self.reserve.push(actor_id);
        debug!(actor = %actor_id, reserve = self.reserve.len(), "joined reserve");
        Ok(())
    }
}

fn position(ids: &[ActorId], actor_id: ActorId) -> Option<usize> {
    ids.iter().position(|id| *id == actor_id)
}

/// Why the store declined an operation. The screen treats all of these as silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    NotInParty { actor_id: ActorId },
    NotInReserve { actor_id: ActorId },
    NotOnRoster { actor_id: ActorId },
    AlreadyOnRoster { actor_id: ActorId },
    UnknownActor { actor_id: ActorId },
    LastPartyMember { actor_id: ActorId },
    PartyFull { max_party_size: usize },
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInParty { actor_id } => write!(f, "actor {actor_id} is not in the party"),
            Self::NotInReserve { actor_id } => write!(f, "actor {actor_id} is not in the reserve"),
            Self::NotOnRoster { actor_id } => write!(f, "actor {actor_id} is not on the roster"),
            Self::AlreadyOnRoster { actor_id } => {
                write!(f, "actor {actor_id} is already on the roster")
            }
            Self::UnknownActor { actor_id } => write!(f, "unknown actor {actor_id}"),
            Self::LastPartyMember { actor_id } => {
                write!(f, "actor {actor_id} is the last party member")
            }
            Self::PartyFull { max_party_size } => {
                write!(f, "party is full (max_party_size={max_party_size})")
            }
        }
    }
}

impl std::error::Error for RosterError {}
