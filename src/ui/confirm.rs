// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::list::ListCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfirmChoice {
    PartWays,
    Stay,
}

impl ConfirmChoice {
    pub const ALL: [ConfirmChoice; 2] = [ConfirmChoice::PartWays, ConfirmChoice::Stay];

    pub fn label(self) -> &'static str {
        match self {
            Self::PartWays => "Part ways",
            Self::Stay => "Don't part ways",
        }
    }
}

/// Modal yes/no gate in front of parting ways.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfirmDialog {
    visible: bool,
    cursor: ListCursor,
}

impl ConfirmDialog {
    pub fn show(&mut self) {
        self.visible = true;
        self.cursor.select_clamped(Some(0), ConfirmChoice::ALL.len());
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.cursor.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn index(&self) -> Option<usize> {
        self.cursor.index()
    }

    pub fn current(&self) -> Option<ConfirmChoice> {
        if !self.visible {
            return None;
        }
        self.cursor.index().and_then(|index| ConfirmChoice::ALL.get(index).copied())
    }

    pub fn move_cursor(&mut self, delta: isize) -> bool {
        if !self.visible {
            return false;
        }
        self.cursor.step(delta, ConfirmChoice::ALL.len())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfirmChoice, ConfirmDialog};

    #[test]
    fn show_resets_to_first_choice() {
        let mut dialog = ConfirmDialog::default();
        assert!(!dialog.is_visible());
        assert_eq!(dialog.current(), None);

        dialog.show();
        dialog.move_cursor(1);
        assert_eq!(dialog.current(), Some(ConfirmChoice::Stay));

        dialog.hide();
        dialog.show();
        assert_eq!(dialog.current(), Some(ConfirmChoice::PartWays));
    }

    #[test]
    fn hidden_dialog_ignores_cursor() {
        let mut dialog = ConfirmDialog::default();
        assert!(!dialog.move_cursor(1));
        assert_eq!(dialog.index(), None);
    }
}
