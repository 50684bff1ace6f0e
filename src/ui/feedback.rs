// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Audible affordances the screen asks its host to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Cursor,
    Ok,
    Cancel,
    Buzzer,
}

/// Sound collaborator. Hosts without audio can record or ignore cues.
pub trait Feedback {
    fn play(&mut self, cue: SoundCue);
}

impl Feedback for Vec<SoundCue> {
    fn play(&mut self, cue: SoundCue) {
        self.push(cue);
    }
}

/// Discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Feedback for Silent {
    fn play(&mut self, _cue: SoundCue) {}
}
