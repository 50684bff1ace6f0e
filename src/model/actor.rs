// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Stable identity of a playable character.
///
/// Actors are owned by the surrounding game; the roster only ever stores these ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(u32);

impl ActorId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display attributes shown in the status panel, in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Param {
    Attack,
    Defense,
    MagicAttack,
    MagicDefense,
    Agility,
    Luck,
}

impl Param {
    pub const ALL: [Param; 6] = [
        Param::Attack,
        Param::Defense,
        Param::MagicAttack,
        Param::MagicDefense,
        Param::Agility,
        Param::Luck,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::MagicAttack => "M.Attack",
            Self::MagicDefense => "M.Defense",
            Self::Agility => "Agility",
            Self::Luck => "Luck",
        }
    }
}

/// Six attribute values; the roster never computes them, it only displays them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamSet {
    pub attack: i32,
    pub defense: i32,
    pub magic_attack: i32,
    pub magic_defense: i32,
    pub agility: i32,
    pub luck: i32,
}

impl ParamSet {
    pub fn get(&self, param: Param) -> i32 {
        match param {
            Param::Attack => self.attack,
            Param::Defense => self.defense,
            Param::MagicAttack => self.magic_attack,
            Param::MagicDefense => self.magic_defense,
            Param::Agility => self.agility,
            Param::Luck => self.luck,
        }
    }
}

/// Which cell of a character sheet the list portrait is cut from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSprite {
    pub sheet: SmolStr,
    #[serde(default)]
    pub index: u8,
}

impl CharacterSprite {
    pub fn new(sheet: impl Into<SmolStr>, index: u8) -> Self {
        Self { sheet: sheet.into(), index }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gauge {
    pub current: u32,
    pub max: u32,
}

impl Gauge {
    pub const fn new(current: u32, max: u32) -> Self {
        Self { current, max }
    }

    pub const fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Fill ratio in `0.0..=1.0`; an empty gauge with `max == 0` reads as empty.
    pub fn ratio(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        (f64::from(self.current) / f64::from(self.max)).clamp(0.0, 1.0)
    }
}

/// Read-only display record of a playable character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    id: ActorId,
    name: SmolStr,
    #[serde(default)]
    nickname: SmolStr,
    #[serde(default)]
    class_name: Option<SmolStr>,
    #[serde(default = "default_level")]
    level: u32,
    #[serde(default)]
    hp: Gauge,
    #[serde(default)]
    mp: Gauge,
    #[serde(default)]
    params: ParamSet,
    #[serde(default)]
    character: Option<CharacterSprite>,
}

fn default_level() -> u32 {
    1
}

impl Actor {
    pub fn new(id: ActorId, name: impl Into<SmolStr>) -> Self {
        Self {
            id,
            name: name.into(),
            nickname: SmolStr::default(),
            class_name: None,
            level: default_level(),
            hp: Gauge::default(),
            mp: Gauge::default(),
            params: ParamSet::default(),
            character: None,
        }
    }

    pub fn with_nickname(mut self, nickname: impl Into<SmolStr>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<SmolStr>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_gauges(mut self, hp: Gauge, mp: Gauge) -> Self {
        self.hp = hp;
        self.mp = mp;
        self
    }

    pub fn with_params(mut self, params: ParamSet) -> Self {
        self.params = params;
        self
    }

    pub fn with_character(mut self, character: CharacterSprite) -> Self {
        self.character = Some(character);
        self
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn hp(&self) -> Gauge {
        self.hp
    }

    pub fn mp(&self) -> Gauge {
        self.mp
    }

    pub fn params(&self) -> &ParamSet {
        &self.params
    }

    pub fn character(&self) -> Option<&CharacterSprite> {
        self.character.as_ref()
    }
}
