// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::theme::TuiTheme;
use super::{centered_rect, demo_game, draw, list_row_line, storage_input, App};
use crate::model::{ActorId, CharacterSprite};
use crate::screen::Focus;
use crate::ui::{Input, ListRow};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use rstest::rstest;
use smol_str::SmolStr;

fn demo_app() -> App {
    App::new(demo_game(), TuiTheme::default())
}

fn press(app: &mut App, code: KeyCode) {
    let input = app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    app.tick(input);
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn line_to_string(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect::<String>()
}

#[rstest]
#[case(KeyCode::Up, Some(Input::Up))]
#[case(KeyCode::Char('k'), Some(Input::Up))]
#[case(KeyCode::Down, Some(Input::Down))]
#[case(KeyCode::Char('j'), Some(Input::Down))]
#[case(KeyCode::Left, Some(Input::Left))]
#[case(KeyCode::Right, Some(Input::Right))]
#[case(KeyCode::Enter, Some(Input::Confirm))]
#[case(KeyCode::Char(' '), Some(Input::Confirm))]
#[case(KeyCode::Char('z'), Some(Input::Confirm))]
#[case(KeyCode::Esc, Some(Input::Cancel))]
#[case(KeyCode::Char('x'), Some(Input::Cancel))]
#[case(KeyCode::Backspace, Some(Input::Cancel))]
#[case(KeyCode::Char('q'), None)]
#[case(KeyCode::Tab, None)]
fn maps_storage_keys(#[case] code: KeyCode, #[case] expected: Option<Input>) {
    assert_eq!(storage_input(code), expected);
}

#[test]
fn demo_game_starts_with_three_in_party() {
    let game = demo_game();
    assert_eq!(game.roster().party().len(), 3);
    assert_eq!(game.roster().reserve().len(), 2);
    assert_eq!(game.next_unrostered_actor(), Some(ActorId::new(6)));
}

#[test]
fn field_view_lists_both_sides() {
    let app = demo_app();
    let screen = render(&app);
    assert!(screen.contains("Field"));
    assert!(screen.contains("Party (3/4)"));
    assert!(screen.contains("Reserve (2)"));
    assert!(screen.contains("Harold"));
    assert!(screen.contains("Lucius"));
}

#[test]
fn open_key_runs_the_plugin_command() {
    let mut app = demo_app();
    press(&mut app, KeyCode::Char('o'));
    assert!(app.game.is_storage_open());

    let screen = render(&app);
    assert!(screen.contains("Roster"));
    assert!(screen.contains("Members"));
    assert!(screen.contains("Status"));
    assert!(screen.contains("Send to party"));
}

#[test]
fn entering_the_party_list_fills_the_status_panel() {
    let mut app = demo_app();
    press(&mut app, KeyCode::Char('o'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.game.screen().map(|screen| screen.focus()), Some(Focus::PartyList));

    let screen = render(&app);
    assert!(screen.contains("the Brave"));
    assert!(screen.contains("Hero"));
    assert!(screen.contains("HP"));
    assert!(screen.contains("Attack"));
    assert!(screen.contains("[A0]"));
}

#[test]
fn part_ways_command_shows_the_dialog() {
    let mut app = demo_app();
    press(&mut app, KeyCode::Char('o'));
    for code in [KeyCode::Enter, KeyCode::Enter, KeyCode::Down, KeyCode::Down, KeyCode::Enter] {
        press(&mut app, code);
    }
    assert_eq!(app.game.screen().map(|screen| screen.focus()), Some(Focus::Confirm));

    let screen = render(&app);
    assert!(screen.contains("Part ways?"));
    assert!(screen.contains("Don't part ways"));
}

#[test]
fn disabled_command_rings_the_bell() {
    let mut app = demo_app();
    press(&mut app, KeyCode::Char('o'));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert!(!app.cues.take_bell());

    // The first command sends reserve members to the party; it is disabled on the party tab.
    press(&mut app, KeyCode::Enter);
    assert!(app.cues.take_bell());
    assert!(!app.cues.take_bell());
}

#[test]
fn scripted_adds_overflow_into_reserve() {
    let mut app = demo_app();
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.toast.as_deref(), Some("Gerald joined the party"));
    press(&mut app, KeyCode::Char('a'));

    let roster = app.game.roster();
    assert_eq!(roster.party().len(), 4);
    assert_eq!(roster.reserve().last(), Some(&ActorId::new(7)));

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.toast.as_deref(), Some("Everyone is already on the roster"));
}

#[test]
fn scripted_recruit_and_removal() {
    let mut app = demo_app();
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.game.roster().reserve().last(), Some(&ActorId::new(6)));

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.toast.as_deref(), Some("Marsha left"));
    assert!(!app.game.roster().contains(ActorId::new(3)));
}

#[test]
fn cancel_from_menu_returns_to_field_and_q_quits() {
    let mut app = demo_app();
    press(&mut app, KeyCode::Char('o'));
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit);
    press(&mut app, KeyCode::Esc);
    assert!(!app.game.is_storage_open());

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn ctrl_c_quits_from_the_screen() {
    let mut app = demo_app();
    press(&mut app, KeyCode::Char('o'));
    let input = app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(input, None);
    assert!(app.should_quit);
}

#[test]
fn list_row_shows_badge_only_with_portrait() {
    let mut row = ListRow {
        actor_id: ActorId::new(1),
        name: SmolStr::new("Harold"),
        level: Some(5),
        portrait: Some(CharacterSprite::new("Actor1", 3)),
    };
    assert_eq!(line_to_string(&list_row_line(&row)), "[A3] Harold  Lv 5");

    row.portrait = None;
    row.level = None;
    assert_eq!(line_to_string(&list_row_line(&row)), "Harold");
}

#[test]
fn centered_rect_clamps_to_area() {
    let area = Rect::new(0, 0, 20, 3);
    assert_eq!(centered_rect(area, 30, 4), area);
    assert_eq!(centered_rect(Rect::new(0, 0, 40, 10), 30, 4), Rect::new(5, 3, 30, 4));
}
