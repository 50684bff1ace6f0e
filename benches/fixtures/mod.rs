// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic roster fixtures (no RNG).

use troupe::model::{Actor, ActorDirectory, ActorId, CharacterSprite, Gauge};
use troupe::roster::{PartyRules, RosterStore};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// Default rules, a full party of 4 and a short reserve.
    Small,
    /// Party of 8 and a reserve of 64.
    Medium,
    /// Party of 16 and a reserve of 1024.
    Large,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Small, Case::Medium, Case::Large];

    pub fn id(self) -> &'static str {
        match self {
            Case::Small => "small",
            Case::Medium => "medium",
            Case::Large => "large",
        }
    }

    fn sizes(self) -> (usize, usize) {
        match self {
            Case::Small => (4, 6),
            Case::Medium => (8, 64),
            Case::Large => (16, 1024),
        }
    }
}

pub fn rules(case: Case) -> PartyRules {
    PartyRules { max_party_size: case.sizes().0, allow_empty_party: false }
}

/// Party members get ids `1..=party`, reserve members follow.
pub fn roster(case: Case) -> RosterStore {
    let (party, reserve) = case.sizes();
    let party_ids = (1..=party as u32).map(ActorId::new).collect::<Vec<_>>();
    let reserve_ids =
        (party as u32 + 1..=(party + reserve) as u32).map(ActorId::new).collect::<Vec<_>>();
    RosterStore::with_members(rules(case), party_ids, reserve_ids).expect("bench roster")
}

pub fn directory(case: Case) -> ActorDirectory {
    let (party, reserve) = case.sizes();
    (1..=(party + reserve) as u32)
        .map(|id| {
            Actor::new(ActorId::new(id), format!("bench_actor_{id:05}"))
                .with_level(id % 99 + 1)
                .with_gauges(Gauge::full(100 + id), Gauge::full(20 + id % 50))
                .with_character(CharacterSprite::new("Actor1", (id % 8) as u8))
        })
        .collect()
}
