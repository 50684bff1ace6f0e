// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::roster::{RosterStore, Side};

/// Top-level Party/Reserve tabs. The current tab also decides which list the command panel,
/// status panel and part-ways dialog act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuTabs {
    current: Side,
}

impl Default for MenuTabs {
    fn default() -> Self {
        Self { current: Side::Party }
    }
}

impl MenuTabs {
    pub const TABS: [Side; 2] = [Side::Party, Side::Reserve];

    pub fn current(&self) -> Side {
        self.current
    }

    pub fn index(&self) -> usize {
        match self.current {
            Side::Party => 0,
            Side::Reserve => 1,
        }
    }

    /// Horizontal movement; does not wrap. Returns whether the tab changed.
    pub fn move_to(&mut self, side: Side) -> bool {
        let changed = self.current != side;
        self.current = side;
        changed
    }

    /// A tab can be entered only while its side has members.
    pub fn is_enabled(side: Side, roster: &RosterStore) -> bool {
        !roster.members(side).is_empty()
    }

    pub fn label(side: Side, roster: &RosterStore) -> String {
        match side {
            Side::Party => {
                format!("Party ({}/{})", roster.party().len(), roster.rules().max_party_size)
            }
            Side::Reserve => format!("Reserve ({})", roster.reserve().len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MenuTabs;
    use crate::model::fixtures::{roster, rules};
    use crate::roster::Side;

    #[test]
    fn labels_carry_live_counts() {
        let store = roster(rules(4, false), &[1, 2], &[3]);
        assert_eq!(MenuTabs::label(Side::Party, &store), "Party (2/4)");
        assert_eq!(MenuTabs::label(Side::Reserve, &store), "Reserve (1)");
    }

    #[test]
    fn empty_side_disables_tab() {
        let store = roster(rules(4, false), &[1], &[]);
        assert!(MenuTabs::is_enabled(Side::Party, &store));
        assert!(!MenuTabs::is_enabled(Side::Reserve, &store));
    }

    #[test]
    fn move_to_reports_change() {
        let mut tabs = MenuTabs::default();
        assert!(!tabs.move_to(Side::Party));
        assert!(tabs.move_to(Side::Reserve));
        assert_eq!(tabs.index(), 1);
    }
}
