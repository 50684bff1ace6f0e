// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::actor::{Actor, ActorId, CharacterSprite, Gauge, ParamSet};
use super::directory::ActorDirectory;
use crate::roster::{PartyRules, RosterStore};

pub(crate) fn aid(value: u32) -> ActorId {
    ActorId::new(value)
}

pub(crate) fn ids(values: &[u32]) -> Vec<ActorId> {
    values.iter().copied().map(ActorId::new).collect()
}

pub(crate) fn rules(max_party_size: usize, allow_empty_party: bool) -> PartyRules {
    PartyRules { max_party_size, allow_empty_party }
}

pub(crate) fn roster(rules: PartyRules, party: &[u32], reserve: &[u32]) -> RosterStore {
    RosterStore::with_members(rules, ids(party), ids(reserve)).expect("roster")
}

/// Directory holding actors 1..=count named after their id.
pub(crate) fn directory(count: u32) -> ActorDirectory {
    (1..=count)
        .map(|n| {
            Actor::new(aid(n), format!("Actor {n}"))
                .with_nickname(format!("the {n}th"))
                .with_class_name("Adventurer")
                .with_level(n)
                .with_gauges(Gauge::full(100 + n), Gauge::new(n, 20))
                .with_params(ParamSet {
                    attack: 10 + n as i32,
                    defense: 11,
                    magic_attack: 12,
                    magic_defense: 13,
                    agility: 14,
                    luck: 15,
                })
                .with_character(CharacterSprite::new("Actor1", (n % 8) as u8))
        })
        .collect()
}
