// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Party and reserve member lists.
//!
//! A list is a cursor over one side of the roster. It holds no copy of the members, so it
//! cannot drift from the store; the cursor is renormalized whenever the side shrinks.

use smol_str::SmolStr;
use tracing::debug;

use super::feedback::{Feedback, SoundCue};
use crate::model::{ActorDirectory, ActorId, CharacterSprite};
use crate::roster::{RosterError, RosterStore, Side};

/// Selection index over a component with a live item count. `None` means nothing selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    index: Option<usize>,
}

impl ListCursor {
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Out-of-range indices clamp to the last item instead of being stored.
    pub fn select_clamped(&mut self, index: Option<usize>, len: usize) {
        self.index = match index {
            Some(_) if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => None,
        };
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    /// Keeps the index valid after the underlying collection changed size.
    pub fn renormalize(&mut self, len: usize) {
        if let Some(index) = self.index {
            if len == 0 {
                self.index = None;
            } else if index >= len {
                self.index = Some(len - 1);
            }
        }
    }

    /// Moves by `delta`, wrapping at both ends. Returns whether the index changed.
    pub fn step(&mut self, delta: isize, len: usize) -> bool {
        if len == 0 || delta == 0 {
            return false;
        }
        let next = match self.index {
            None if delta > 0 => 0,
            None => len - 1,
            Some(index) => {
                let len = len as isize;
                (index as isize + delta).rem_euclid(len) as usize
            }
        };
        let changed = self.index != Some(next);
        self.index = Some(next);
        changed
    }
}

/// What the front end needs to draw one list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub actor_id: ActorId,
    pub name: SmolStr,
    pub level: Option<u32>,
    pub portrait: Option<CharacterSprite>,
}

pub trait SelectableList {
    fn side(&self) -> Side;

    fn cursor(&self) -> &ListCursor;

    fn cursor_mut(&mut self) -> &mut ListCursor;

    /// Moves the current item to the other side of the roster.
    ///
    /// On success plays [`SoundCue::Ok`] and renormalizes the cursor; a declined move changes
    /// nothing and plays nothing.
    fn commit_transfer(&mut self, roster: &mut RosterStore, feedback: &mut dyn Feedback) -> bool;

    fn item_count(&self, roster: &RosterStore) -> usize {
        roster.members(self.side()).len()
    }

    fn index(&self) -> Option<usize> {
        self.cursor().index()
    }

    fn select(&mut self, roster: &RosterStore, index: Option<usize>) {
        let len = self.item_count(roster);
        self.cursor_mut().select_clamped(index, len);
    }

    /// Selects the first item, or nothing if the side is empty.
    fn select_first(&mut self, roster: &RosterStore) {
        let first = (self.item_count(roster) > 0).then_some(0);
        self.select(roster, first);
    }

    fn deselect(&mut self) {
        self.cursor_mut().clear();
    }

    fn current_item(&self, roster: &RosterStore) -> Option<ActorId> {
        let index = self.index()?;
        roster.members(self.side()).get(index).copied()
    }

    fn move_cursor(&mut self, roster: &RosterStore, delta: isize) -> bool {
        let len = self.item_count(roster);
        self.cursor_mut().step(delta, len)
    }

    fn renormalize(&mut self, roster: &RosterStore) {
        let len = self.item_count(roster);
        self.cursor_mut().renormalize(len);
    }

    /// Parts ways with the current item. Declined removals leave everything untouched.
    fn commit_part_ways(&mut self, roster: &mut RosterStore) -> bool {
        let Some(actor_id) = self.current_item(roster) else {
            return false;
        };
        match roster.part_with(actor_id) {
            Ok(_) => {
                self.renormalize(roster);
                true
            }
            Err(err) => {
                debug!(%err, "part ways declined");
                false
            }
        }
    }

    fn render_item(
        &self,
        roster: &RosterStore,
        directory: &ActorDirectory,
        index: usize,
        show_portrait_icons: bool,
    ) -> Option<ListRow> {
        let actor_id = *roster.members(self.side()).get(index)?;
        let row = match directory.get(actor_id) {
            Some(actor) => ListRow {
                actor_id,
                name: SmolStr::new(actor.name()),
                level: Some(actor.level()),
                portrait: if show_portrait_icons { actor.character().cloned() } else { None },
            },
            None => ListRow {
                actor_id,
                name: SmolStr::new(actor_id.to_string()),
                level: None,
                portrait: None,
            },
        };
        Some(row)
    }
}

fn finish_transfer(
    cursor: &mut ListCursor,
    roster: &RosterStore,
    side: Side,
    result: Result<(), RosterError>,
    feedback: &mut dyn Feedback,
) -> bool {
    match result {
        Ok(()) => {
            feedback.play(SoundCue::Ok);
            cursor.renormalize(roster.members(side).len());
            true
        }
        Err(err) => {
            debug!(%err, ?side, "transfer declined");
            false
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartyList {
    cursor: ListCursor,
}

impl SelectableList for PartyList {
    fn side(&self) -> Side {
        Side::Party
    }

    fn cursor(&self) -> &ListCursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut ListCursor {
        &mut self.cursor
    }

    fn commit_transfer(&mut self, roster: &mut RosterStore, feedback: &mut dyn Feedback) -> bool {
        let Some(actor_id) = self.current_item(roster) else {
            return false;
        };
        let result = roster.move_party_to_reserve(actor_id);
        finish_transfer(&mut self.cursor, roster, Side::Party, result, feedback)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReserveList {
    cursor: ListCursor,
}

impl SelectableList for ReserveList {
    fn side(&self) -> Side {
        Side::Reserve
    }

    fn cursor(&self) -> &ListCursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut ListCursor {
        &mut self.cursor
    }

    fn commit_transfer(&mut self, roster: &mut RosterStore, feedback: &mut dyn Feedback) -> bool {
        let Some(actor_id) = self.current_item(roster) else {
            return false;
        };
        let result = roster.move_reserve_to_party(actor_id);
        finish_transfer(&mut self.cursor, roster, Side::Reserve, result, feedback)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ListCursor, PartyList, ReserveList, SelectableList};
    use crate::model::fixtures::{aid, directory, ids, roster, rules};
    use crate::ui::SoundCue;

    #[rstest]
    #[case(Some(0), 3, Some(0))]
    #[case(Some(2), 3, Some(2))]
    #[case(Some(7), 3, Some(2))]
    #[case(Some(0), 0, None)]
    #[case(None, 3, None)]
    fn select_clamps_out_of_range(
        #[case] requested: Option<usize>,
        #[case] len: usize,
        #[case] expected: Option<usize>,
    ) {
        let mut cursor = ListCursor::default();
        cursor.select_clamped(requested, len);
        assert_eq!(cursor.index(), expected);
    }

    #[test]
    fn step_wraps_both_ways() {
        let mut cursor = ListCursor::default();
        assert!(cursor.step(1, 3));
        assert_eq!(cursor.index(), Some(0));
        assert!(cursor.step(-1, 3));
        assert_eq!(cursor.index(), Some(2));
        assert!(cursor.step(1, 3));
        assert_eq!(cursor.index(), Some(0));
        assert!(!cursor.step(1, 0));

        let mut single = ListCursor::default();
        single.select_clamped(Some(0), 1);
        assert!(!single.step(1, 1));
    }

    #[test]
    fn removing_selected_last_item_moves_selection_back() {
        let mut store = roster(rules(4, false), &[1, 2, 3], &[]);
        let mut list = PartyList::default();
        list.select(&store, Some(2));

        let mut cues = Vec::new();
        assert!(list.commit_transfer(&mut store, &mut cues));
        assert_eq!(list.index(), Some(1));
        assert_eq!(cues, vec![SoundCue::Ok]);
        assert_eq!(store.reserve(), ids(&[3]).as_slice());
    }

    #[test]
    fn removing_only_item_clears_selection() {
        let mut store = roster(rules(4, true), &[1], &[]);
        let mut list = PartyList::default();
        list.select_first(&store);
        assert_eq!(list.index(), Some(0));

        assert!(list.commit_transfer(&mut store, &mut Vec::new()));
        assert!(store.party().is_empty());
        assert_eq!(list.index(), None);
        assert_eq!(list.current_item(&store), None);
    }

    #[test]
    fn declined_transfer_keeps_selection_and_is_silent() {
        let mut store = roster(rules(2, false), &[1, 2], &[7, 8, 9]);
        let mut list = ReserveList::default();
        list.select(&store, Some(2));

        let mut cues = Vec::new();
        assert!(!list.commit_transfer(&mut store, &mut cues));
        assert!(cues.is_empty());
        assert_eq!(list.index(), Some(2));
        assert_eq!(list.current_item(&store), Some(aid(9)));
        assert_eq!(store.reserve(), ids(&[7, 8, 9]).as_slice());
    }

    #[test]
    fn transfer_without_selection_is_noop() {
        let mut store = roster(rules(4, false), &[1], &[2]);
        let mut list = ReserveList::default();
        assert!(!list.commit_transfer(&mut store, &mut Vec::new()));
        assert_eq!(store.party(), ids(&[1]).as_slice());
    }

    #[test]
    fn part_ways_renormalizes() {
        let mut store = roster(rules(4, false), &[1], &[2, 3]);
        let mut list = ReserveList::default();
        list.select(&store, Some(1));
        assert!(list.commit_part_ways(&mut store));
        assert_eq!(store.reserve(), ids(&[2]).as_slice());
        assert_eq!(list.index(), Some(0));
    }

    #[test]
    fn part_ways_with_sole_member_is_declined() {
        let mut store = roster(rules(4, false), &[1], &[]);
        let mut list = PartyList::default();
        list.select_first(&store);
        assert!(!list.commit_part_ways(&mut store));
        assert_eq!(store.party(), ids(&[1]).as_slice());
        assert_eq!(list.index(), Some(0));
    }

    #[test]
    fn item_count_tracks_store_live() {
        let mut store = roster(rules(4, false), &[1, 2], &[]);
        let list = PartyList::default();
        assert_eq!(list.item_count(&store), 2);
        store.force_add_to_party(aid(3));
        assert_eq!(list.item_count(&store), 3);
    }

    #[test]
    fn render_item_respects_portrait_flag() {
        let store = roster(rules(4, false), &[1, 42], &[]);
        let directory = directory(3);
        let list = PartyList::default();

        let row = list.render_item(&store, &directory, 0, true).expect("row");
        assert_eq!(row.name, "Actor 1");
        assert_eq!(row.level, Some(1));
        assert!(row.portrait.is_some());

        let row = list.render_item(&store, &directory, 0, false).expect("row");
        assert!(row.portrait.is_none());

        let unknown = list.render_item(&store, &directory, 1, true).expect("row");
        assert_eq!(unknown.name, "#42");
        assert_eq!(unknown.level, None);

        assert!(list.render_item(&store, &directory, 2, true).is_none());
    }
}
