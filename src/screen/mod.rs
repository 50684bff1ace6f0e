// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The roster screen's focus state machine.
//!
//! One [`ScreenController::tick`] is one frame: overflow enforcement, then a refresh of list
//! cursors, command enablement and the status panel, then input dispatch to whichever component
//! has focus, then a second refresh so the frame renders the post-input roster.
//!
//! The controller never edits the roster itself; it relays the focused list's selection to the
//! list components, which call into the store.

use tracing::{debug, trace};

use crate::roster::{RosterStore, Side};
use crate::ui::{
    CommandEnablement, CommandPanel, ConfirmChoice, ConfirmDialog, Feedback, Input, MenuTabs,
    PartyList, ReserveList, SelectableList, SoundCue, StatusPanel, StorageCommand,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Menu,
    PartyList,
    ReserveList,
    Command,
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenController {
    focus: Focus,
    menu: MenuTabs,
    party_list: PartyList,
    reserve_list: ReserveList,
    commands: CommandPanel,
    confirm: ConfirmDialog,
    status: StatusPanel,
    closed: bool,
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenController {
    pub fn new() -> Self {
        Self {
            focus: Focus::Menu,
            menu: MenuTabs::default(),
            party_list: PartyList::default(),
            reserve_list: ReserveList::default(),
            commands: CommandPanel::default(),
            confirm: ConfirmDialog::default(),
            status: StatusPanel::default(),
            closed: false,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn menu(&self) -> &MenuTabs {
        &self.menu
    }

    pub fn party_list(&self) -> &PartyList {
        &self.party_list
    }

    pub fn reserve_list(&self) -> &ReserveList {
        &self.reserve_list
    }

    pub fn commands(&self) -> &CommandPanel {
        &self.commands
    }

    pub fn confirm(&self) -> &ConfirmDialog {
        &self.confirm
    }

    pub fn status(&self) -> &StatusPanel {
        &self.status
    }

    /// The side whose list is shown and acted upon.
    pub fn active_side(&self) -> Side {
        self.menu.current()
    }

    pub fn active_list(&self) -> &dyn SelectableList {
        match self.menu.current() {
            Side::Party => &self.party_list,
            Side::Reserve => &self.reserve_list,
        }
    }

    fn active_list_mut(&mut self) -> &mut dyn SelectableList {
        match self.menu.current() {
            Side::Party => &mut self.party_list,
            Side::Reserve => &mut self.reserve_list,
        }
    }

    fn list_focus(side: Side) -> Focus {
        match side {
            Side::Party => Focus::PartyList,
            Side::Reserve => Focus::ReserveList,
        }
    }

    /// Runs one frame. After the screen has closed every further tick is inert.
    pub fn tick(
        &mut self,
        roster: &mut RosterStore,
        input: Option<Input>,
        feedback: &mut dyn Feedback,
    ) -> ScreenStatus {
        if self.closed {
            return ScreenStatus::Closed;
        }

        roster.enforce_overflow();
        self.refresh(roster);

        if let Some(input) = input {
            trace!(?input, focus = ?self.focus, "dispatch");
            self.dispatch(roster, input, feedback);
        }

        if self.closed {
            return ScreenStatus::Closed;
        }
        self.refresh(roster);
        ScreenStatus::Open
    }

    /// Re-derives everything that depends on live roster state.
    fn refresh(&mut self, roster: &RosterStore) {
        self.party_list.renormalize(roster);
        self.reserve_list.renormalize(roster);
        self.commands.set_enablement(CommandEnablement::for_side(self.menu.current(), roster));
        let highlighted = self.active_list().current_item(roster);
        self.status.set_actor(highlighted);
    }

    fn dispatch(&mut self, roster: &mut RosterStore, input: Input, feedback: &mut dyn Feedback) {
        match self.focus {
            Focus::Menu => self.on_menu(roster, input, feedback),
            Focus::PartyList | Focus::ReserveList => self.on_list(roster, input, feedback),
            Focus::Command => self.on_command(roster, input, feedback),
            Focus::Confirm => self.on_confirm(roster, input, feedback),
        }
    }

    fn on_menu(&mut self, roster: &RosterStore, input: Input, feedback: &mut dyn Feedback) {
        match input {
            Input::Left => {
                if self.menu.move_to(Side::Party) {
                    feedback.play(SoundCue::Cursor);
                }
            }
            Input::Right => {
                if self.menu.move_to(Side::Reserve) {
                    feedback.play(SoundCue::Cursor);
                }
            }
            Input::Confirm => {
                let side = self.menu.current();
                if !MenuTabs::is_enabled(side, roster) {
                    feedback.play(SoundCue::Buzzer);
                    return;
                }
                feedback.play(SoundCue::Ok);
                self.active_list_mut().select_first(roster);
                self.set_focus(Self::list_focus(side));
            }
            Input::Cancel => {
                feedback.play(SoundCue::Cancel);
                self.closed = true;
                debug!("roster screen closed");
            }
            Input::Up | Input::Down => {}
        }
    }

    fn on_list(&mut self, roster: &RosterStore, input: Input, feedback: &mut dyn Feedback) {
        match input {
            Input::Up | Input::Down => {
                let Some(delta) = input.vertical_step() else {
                    return;
                };
                if self.active_list_mut().move_cursor(roster, delta) {
                    feedback.play(SoundCue::Cursor);
                }
            }
            Input::Confirm => {
                if self.active_list().index().is_none() {
                    return;
                }
                feedback.play(SoundCue::Ok);
                self.commands.select(Some(0));
                self.set_focus(Focus::Command);
            }
            Input::Cancel => {
                feedback.play(SoundCue::Cancel);
                self.active_list_mut().deselect();
                self.set_focus(Focus::Menu);
            }
            Input::Left | Input::Right => {}
        }
    }

    fn on_command(&mut self, roster: &mut RosterStore, input: Input, feedback: &mut dyn Feedback) {
        match input {
            Input::Up | Input::Down => {
                let Some(delta) = input.vertical_step() else {
                    return;
                };
                if self.commands.move_cursor(delta) {
                    feedback.play(SoundCue::Cursor);
                }
            }
            Input::Confirm => {
                let Some(command) = self.commands.confirmable() else {
                    if self.commands.current().is_some() {
                        feedback.play(SoundCue::Buzzer);
                    }
                    return;
                };
                match command {
                    StorageCommand::SendToParty => {
                        self.reserve_list.commit_transfer(roster, feedback);
                        self.leave_commands(roster);
                    }
                    StorageCommand::SendToReserve => {
                        self.party_list.commit_transfer(roster, feedback);
                        self.leave_commands(roster);
                    }
                    StorageCommand::PartWays => {
                        feedback.play(SoundCue::Ok);
                        self.confirm.show();
                        self.set_focus(Focus::Confirm);
                    }
                }
            }
            Input::Cancel => {
                feedback.play(SoundCue::Cancel);
                self.leave_commands(roster);
            }
            Input::Left | Input::Right => {}
        }
    }

    fn on_confirm(&mut self, roster: &mut RosterStore, input: Input, feedback: &mut dyn Feedback) {
        match input {
            Input::Up | Input::Down => {
                let Some(delta) = input.vertical_step() else {
                    return;
                };
                if self.confirm.move_cursor(delta) {
                    feedback.play(SoundCue::Cursor);
                }
            }
            Input::Confirm => match self.confirm.current() {
                Some(ConfirmChoice::PartWays) => {
                    feedback.play(SoundCue::Ok);
                    self.active_list_mut().commit_part_ways(roster);
                    self.confirm.hide();
                    self.set_focus(Focus::Command);
                    self.leave_commands(roster);
                }
                Some(ConfirmChoice::Stay) => {
                    feedback.play(SoundCue::Cancel);
                    self.dismiss_confirm();
                }
                None => {}
            },
            Input::Cancel => {
                feedback.play(SoundCue::Cancel);
                self.dismiss_confirm();
            }
            Input::Left | Input::Right => {}
        }
    }

    fn dismiss_confirm(&mut self) {
        self.confirm.hide();
        self.set_focus(Focus::Command);
    }

    /// Back from the command panel to the originating list, or to the menu once that list
    /// has emptied.
    fn leave_commands(&mut self, roster: &RosterStore) {
        self.commands.deselect();
        let side = self.menu.current();
        let list = self.active_list_mut();
        list.renormalize(roster);
        if list.item_count(roster) > 0 {
            if list.index().is_none() {
                list.select_first(roster);
            }
            self.set_focus(Self::list_focus(side));
        } else {
            list.deselect();
            self.set_focus(Focus::Menu);
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            trace!(from = ?self.focus, to = ?focus, "focus");
            self.focus = focus;
        }
    }
}
