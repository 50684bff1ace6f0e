// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Roster configuration.
//!
//! Values come from the world file, from plugin-style string parameters, or from CLI overrides.
//! The core only reads them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::roster::PartyRules;

pub const DEFAULT_MAX_PARTY_SIZE: usize = 4;

pub const PARAM_ALLOW_EMPTY_PARTY: &str = "isAllowPartyEmpty";
pub const PARAM_MAX_PARTY_SIZE: &str = "partyMemberMaxNum";
pub const PARAM_SHOW_PORTRAIT_ICONS: &str = "isShowActorListIcon";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    pub max_party_size: usize,
    pub allow_empty_party: bool,
    /// Rendering only; has no effect on roster logic.
    pub show_portrait_icons: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            max_party_size: DEFAULT_MAX_PARTY_SIZE,
            allow_empty_party: false,
            show_portrait_icons: true,
        }
    }
}

impl RosterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_party_size == 0 {
            return Err(ConfigError::ZeroPartySize);
        }
        Ok(())
    }

    pub fn party_rules(&self) -> PartyRules {
        PartyRules {
            max_party_size: self.max_party_size.max(1),
            allow_empty_party: self.allow_empty_party,
        }
    }

    /// Reads plugin-style string parameters.
    ///
    /// Missing keys keep their defaults. Booleans are true only for the exact string `"true"`;
    /// the party size must parse as a positive integer.
    pub fn from_plugin_params(params: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = params.get(PARAM_MAX_PARTY_SIZE) {
            let value = raw.trim().parse::<usize>().map_err(|_| ConfigError::InvalidParam {
                name: PARAM_MAX_PARTY_SIZE,
                value: raw.clone(),
            })?;
            config.max_party_size = value;
        }
        if let Some(raw) = params.get(PARAM_ALLOW_EMPTY_PARTY) {
            config.allow_empty_party = plugin_bool(raw);
        }
        if let Some(raw) = params.get(PARAM_SHOW_PORTRAIT_ICONS) {
            config.show_portrait_icons = plugin_bool(raw);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(max_party_size) = overrides.max_party_size {
            self.max_party_size = max_party_size;
        }
        if overrides.allow_empty_party {
            self.allow_empty_party = true;
        }
        if overrides.hide_portrait_icons {
            self.show_portrait_icons = false;
        }
        self.validate()?;
        Ok(self)
    }
}

fn plugin_bool(raw: &str) -> bool {
    raw == "true"
}

/// CLI-level overrides applied on top of whatever the world file says.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub max_party_size: Option<usize>,
    pub allow_empty_party: bool,
    pub hide_portrait_icons: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroPartySize,
    InvalidParam { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPartySize => f.write_str("max party size must be at least 1"),
            Self::InvalidParam { name, value } => {
                write!(f, "invalid plugin parameter {name}={value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
