// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::model::{ActorDirectory, ActorId, Gauge, Param};

pub const MISSING_CLASS_NAME: &str = "----";

/// Read-only details of the highlighted actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusPanel {
    actor_id: Option<ActorId>,
}

impl StatusPanel {
    pub fn set_actor(&mut self, actor_id: Option<ActorId>) {
        self.actor_id = actor_id;
    }

    pub fn actor_id(&self) -> Option<ActorId> {
        self.actor_id
    }

    /// Builds the panel contents. Nothing highlighted, or an id the directory does not know,
    /// yields an empty panel.
    pub fn view(&self, directory: &ActorDirectory) -> Option<StatusView> {
        let actor = directory.get(self.actor_id?)?;
        let params = Param::ALL
            .iter()
            .map(|param| (*param, actor.params().get(*param)))
            .collect::<SmallVec<[(Param, i32); 6]>>();
        Some(StatusView {
            name: SmolStr::new(actor.name()),
            nickname: SmolStr::new(actor.nickname()),
            class_name: SmolStr::new(actor.class_name().unwrap_or(MISSING_CLASS_NAME)),
            level: actor.level(),
            hp: actor.hp(),
            mp: actor.mp(),
            params,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub name: SmolStr,
    pub nickname: SmolStr,
    pub class_name: SmolStr,
    pub level: u32,
    pub hp: Gauge,
    pub mp: Gauge,
    pub params: SmallVec<[(Param, i32); 6]>,
}

impl StatusView {
    /// Attributes laid out two per row, left column first.
    pub fn param_rows(&self) -> impl Iterator<Item = &[(Param, i32)]> {
        self.params.chunks(2)
    }
}
