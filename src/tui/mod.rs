// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Hosts the roster screen in a ratatui + crossterm shell. Outside the screen a small field view
//! stands in for the map scene: it can run the open command and the scripted party edits.

use std::{error::Error, io, path::Path, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use tracing::{trace, warn};

use crate::config::RosterConfig;
use crate::game::{Game, PLUGIN_NAME};
use crate::model::{Actor, ActorDirectory, ActorId, CharacterSprite, Gauge, ParamSet};
use crate::roster::{RosterStore, Side};
use crate::screen::{Focus, ScreenController};
use crate::store::WorldFile;
use crate::ui::{
    ConfirmChoice, Feedback, Input, ListRow, MenuTabs, SoundCue, StatusView, StorageCommand,
};

mod theme;

use theme::TuiTheme;

const FRAME_INTERVAL: Duration = Duration::from_millis(50);
const GAUGE_WIDTH: usize = 12;
const CONFIRM_WIDTH: u16 = 30;
const CONFIRM_HEIGHT: u16 = 4;
const COMMAND_PANEL_HEIGHT: u16 = 5;
const HP_COLOR: Color = Color::LightRed;
const MP_COLOR: Color = Color::LightBlue;
const PORTRAIT_COLOR: Color = Color::Yellow;
const FOOTER_LABEL_COLOR: Color = Color::Gray;

/// Runs the interactive terminal UI until the user quits from the field view.
pub fn run(game: Game) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(game, theme);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &app))?;

        let mut input = None;
        if event::poll(FRAME_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    input = app.handle_key(key);
                }
            }
        }
        app.tick(input);

        if app.cues.take_bell() {
            terminal.bell()?;
        }
    }

    Ok(())
}

/// Records cues for the frame; only the buzzer reaches the terminal, as a bell.
#[derive(Debug, Default)]
struct CueLog {
    bell: bool,
}

impl CueLog {
    fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }
}

impl Feedback for CueLog {
    fn play(&mut self, cue: SoundCue) {
        trace!(?cue, "sound cue");
        if cue == SoundCue::Buzzer {
            self.bell = true;
        }
    }
}

struct App {
    game: Game,
    theme: TuiTheme,
    cues: CueLog,
    toast: Option<String>,
    should_quit: bool,
}

impl App {
    fn new(game: Game, theme: TuiTheme) -> Self {
        Self { game, theme, cues: CueLog::default(), toast: None, should_quit: false }
    }

    /// Field keys act immediately; storage keys become the next frame's input.
    fn handle_key(&mut self, key: KeyEvent) -> Option<Input> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return None;
        }
        self.toast = None;
        if self.game.is_storage_open() {
            return storage_input(key.code);
        }
        self.handle_field_key(key.code);
        None
    }

    fn handle_field_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('o') | KeyCode::Enter => {
                self.game.run_script_command(&format!("{PLUGIN_NAME} open"));
            }
            KeyCode::Char('a') => self.script_add_party_member(),
            KeyCode::Char('r') => self.script_recruit(),
            KeyCode::Char('d') => self.script_remove_last_party_member(),
            _ => {}
        }
    }

    fn tick(&mut self, input: Option<Input>) {
        self.game.tick(input, &mut self.cues);
    }

    fn script_add_party_member(&mut self) {
        let Some(actor_id) = self.game.next_unrostered_actor() else {
            self.set_toast("Everyone is already on the roster");
            return;
        };
        match self.game.add_party_member(actor_id) {
            Ok(()) => {
                let name = actor_name(self.game.directory(), actor_id);
                self.set_toast(format!("{name} joined the party"));
            }
            Err(err) => {
                warn!(%err, "scripted party add failed");
                self.set_toast(err.to_string());
            }
        }
    }

    fn script_recruit(&mut self) {
        let Some(actor_id) = self.game.next_unrostered_actor() else {
            self.set_toast("Everyone is already on the roster");
            return;
        };
        match self.game.recruit_to_reserve(actor_id) {
            Ok(()) => {
                let name = actor_name(self.game.directory(), actor_id);
                self.set_toast(format!("{name} is waiting in reserve"));
            }
            Err(err) => {
                warn!(%err, "scripted recruit failed");
                self.set_toast(err.to_string());
            }
        }
    }

    fn script_remove_last_party_member(&mut self) {
        let Some(actor_id) = self.game.roster().party().last().copied() else {
            self.set_toast("The party is empty");
            return;
        };
        match self.game.remove_party_member(actor_id) {
            Ok(()) => {
                let name = actor_name(self.game.directory(), actor_id);
                self.set_toast(format!("{name} left"));
            }
            Err(err) => {
                warn!(%err, "scripted party removal failed");
                self.set_toast(err.to_string());
            }
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(message.into());
    }
}

fn storage_input(code: KeyCode) -> Option<Input> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Input::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Input::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Input::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Input::Right),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('z') => Some(Input::Confirm),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('x') => Some(Input::Cancel),
        _ => None,
    }
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    match app.game.screen() {
        Some(screen) => draw_storage(frame, layout[0], app, screen),
        None => draw_field(frame, layout[0], app),
    }
    frame.render_widget(Paragraph::new(footer_line(app)), layout[1]);
}

fn draw_storage(frame: &mut Frame<'_>, area: Rect, app: &App, screen: &ScreenController) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(COMMAND_PANEL_HEIGHT)])
        .split(body[0]);

    draw_menu(frame, rows[0], app, screen);
    draw_members(frame, left[0], app, screen);
    draw_commands(frame, left[1], app, screen);
    draw_status(frame, body[1], app, screen);

    if screen.confirm().is_visible() {
        draw_confirm(frame, area, app, screen);
    }
}

fn draw_menu(frame: &mut Frame<'_>, area: Rect, app: &App, screen: &ScreenController) {
    let roster = app.game.roster();
    let focused = screen.focus() == Focus::Menu;

    let mut spans = Vec::new();
    for (idx, side) in MenuTabs::TABS.into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if side == screen.menu().current() {
            app.theme.selection_style(focused)
        } else if MenuTabs::is_enabled(side, roster) {
            Style::default()
        } else {
            app.theme.disabled_style()
        };
        spans.push(Span::styled(format!(" {} ", MenuTabs::label(side, roster)), style));
    }

    let menu = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Roster")
            .border_style(app.theme.panel_border_style(focused)),
    );
    frame.render_widget(menu, area);
}

fn draw_members(frame: &mut Frame<'_>, area: Rect, app: &App, screen: &ScreenController) {
    let roster = app.game.roster();
    let directory = app.game.directory();
    let show_portraits = app.game.config().show_portrait_icons;
    let list = screen.active_list();
    let focused = matches!(screen.focus(), Focus::PartyList | Focus::ReserveList);

    let items = (0..list.item_count(roster))
        .filter_map(|index| list.render_item(roster, directory, index, show_portraits))
        .map(|row| ListItem::new(list_row_line(&row)))
        .collect::<Vec<_>>();

    let mut state = ListState::default();
    state.select(list.index());

    let widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Members")
                .border_style(app.theme.panel_border_style(focused)),
        )
        .highlight_style(app.theme.selection_style(focused));
    frame.render_stateful_widget(widget, area, &mut state);
}

fn list_row_line(row: &ListRow) -> Line<'static> {
    let mut spans = Vec::new();
    if let Some(portrait) = &row.portrait {
        spans.push(Span::styled(
            format!("{} ", portrait_badge(portrait)),
            Style::default().fg(PORTRAIT_COLOR),
        ));
    }
    spans.push(Span::raw(row.name.to_string()));
    if let Some(level) = row.level {
        spans.push(Span::styled(format!("  Lv {level}"), Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    Line::from(spans)
}

/// Stand-in for the sprite: sheet initial plus the frame index.
fn portrait_badge(sprite: &CharacterSprite) -> String {
    let initial = sprite.sheet.chars().next().unwrap_or('?');
    format!("[{initial}{}]", sprite.index)
}

fn draw_commands(frame: &mut Frame<'_>, area: Rect, app: &App, screen: &ScreenController) {
    let focused = screen.focus() == Focus::Command;
    let commands = screen.commands();

    let items = StorageCommand::ALL
        .into_iter()
        .map(|command| {
            let style = if commands.is_enabled(command) {
                Style::default()
            } else {
                app.theme.disabled_style()
            };
            ListItem::new(Line::styled(command.label(), style))
        })
        .collect::<Vec<_>>();

    let mut state = ListState::default();
    state.select(commands.index());

    let widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Command")
                .border_style(app.theme.panel_border_style(focused)),
        )
        .highlight_style(app.theme.selection_style(focused));
    frame.render_stateful_widget(widget, area, &mut state);
}

fn draw_status(frame: &mut Frame<'_>, area: Rect, app: &App, screen: &ScreenController) {
    let lines = screen
        .status()
        .view(app.game.directory())
        .map(|view| status_lines(&view, &app.theme))
        .unwrap_or_default();

    let status = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Status")
            .border_style(app.theme.panel_border_style(false)),
    );
    frame.render_widget(status, area);
}

fn status_lines(view: &StatusView, theme: &TuiTheme) -> Vec<Line<'static>> {
    let label = theme.label_style();
    let mut lines = vec![
        Line::from(vec![
            Span::styled(view.name.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::raw(view.nickname.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Class ", label),
            Span::raw(view.class_name.to_string()),
            Span::styled("  Lv ", label),
            Span::raw(view.level.to_string()),
        ]),
        Line::from(""),
        gauge_line("HP", view.hp, HP_COLOR, label),
        gauge_line("MP", view.mp, MP_COLOR, label),
        Line::from(""),
    ];

    for row in view.param_rows() {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for (param, value) in row {
            spans.push(Span::styled(format!("{:<10}", param.label()), label));
            spans.push(Span::raw(format!("{value:>4}   ")));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn gauge_line(name: &'static str, gauge: Gauge, color: Color, label: Style) -> Line<'static> {
    let filled = ((gauge.ratio() * GAUGE_WIDTH as f64).round() as usize).min(GAUGE_WIDTH);
    Line::from(vec![
        Span::styled(format!("{name} "), label),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(GAUGE_WIDTH - filled), Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {}/{}", gauge.current, gauge.max)),
    ])
}

fn draw_confirm(frame: &mut Frame<'_>, area: Rect, app: &App, screen: &ScreenController) {
    let popup = centered_rect(area, CONFIRM_WIDTH, CONFIRM_HEIGHT);

    let items = ConfirmChoice::ALL
        .into_iter()
        .map(|choice| ListItem::new(choice.label()))
        .collect::<Vec<_>>();
    let mut state = ListState::default();
    state.select(screen.confirm().index());

    let dialog = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Part ways?")
                .border_style(app.theme.panel_border_style(true)),
        )
        .highlight_style(app.theme.selection_style(true));

    frame.render_widget(Clear, popup);
    frame.render_stateful_widget(dialog, popup, &mut state);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn draw_field(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let roster = app.game.roster();
    let directory = app.game.directory();
    let label = app.theme.label_style();

    let mut lines = vec![Line::styled(MenuTabs::label(Side::Party, roster), label)];
    lines.extend(member_lines(directory, roster.party()));
    lines.push(Line::from(""));
    lines.push(Line::styled(MenuTabs::label(Side::Reserve, roster), label));
    lines.extend(member_lines(directory, roster.reserve()));

    let field = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Field")
            .border_style(Style::default().fg(app.theme.accent())),
    );
    frame.render_widget(field, area);
}

fn member_lines(directory: &ActorDirectory, members: &[ActorId]) -> Vec<Line<'static>> {
    if members.is_empty() {
        return vec![Line::styled("  (none)", Style::default().fg(Color::DarkGray))];
    }
    members
        .iter()
        .map(|actor_id| Line::from(format!("  {}", actor_name(directory, *actor_id))))
        .collect()
}

fn actor_name(directory: &ActorDirectory, actor_id: ActorId) -> String {
    directory
        .get(actor_id)
        .map(|actor| actor.name().to_owned())
        .unwrap_or_else(|| actor_id.to_string())
}

fn footer_line(app: &App) -> Line<'static> {
    let hints: &[(&str, &str)] = if app.game.is_storage_open() {
        &[("↑↓", "move"), ("←→", "tab"), ("enter", "ok"), ("esc", "back")]
    } else {
        &[("o", "roster"), ("a", "add"), ("r", "recruit"), ("d", "remove"), ("q", "quit")]
    };

    let mut spans = Vec::new();
    for (idx, (key, label)) in hints.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, app.theme.label_style()));
        spans.push(Span::styled(format!(" {label}"), Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    if let Some(toast) = &app.toast {
        spans.push(Span::raw(format!("  | {toast}")));
    }
    Line::from(spans)
}

const DEMO_ACTORS: [(u32, &str, &str, &str, u32, &str, u8); 7] = [
    (1, "Harold", "the Brave", "Hero", 5, "Actor1", 0),
    (2, "Therese", "Ironheart", "Warrior", 4, "Actor1", 7),
    (3, "Marsha", "Witch of Dawn", "Mage", 4, "Actor2", 2),
    (4, "Lucius", "the Quiet", "Priest", 3, "Actor3", 5),
    (5, "Alice", "", "Thief", 2, "Actor2", 4),
    (6, "Gerald", "Old Guard", "Knight", 6, "Actor3", 1),
    (7, "Iris", "Songweaver", "", 1, "Actor1", 3),
];

/// Name used for the built-in world in messages and logs.
pub const DEMO_WORLD_NAME: &str = "<demo>";

/// Seven adventurers: three in the party, two in reserve, two not yet recruited.
pub fn demo_world() -> WorldFile {
    WorldFile {
        config: RosterConfig::default(),
        actors: DEMO_ACTORS.iter().map(demo_actor).collect(),
        party: [1, 2, 3].map(ActorId::new).to_vec(),
        reserve: [4, 5].map(ActorId::new).to_vec(),
    }
}

pub fn demo_game() -> Game {
    let world = demo_world();
    let config = world.config;
    world.into_game(Path::new(DEMO_WORLD_NAME)).unwrap_or_else(|err| {
        warn!(%err, "demo world rejected; starting empty");
        Game::new(ActorDirectory::new(), RosterStore::new(config.party_rules()), config)
    })
}

fn demo_actor(entry: &(u32, &str, &str, &str, u32, &str, u8)) -> Actor {
    let &(id, name, nickname, class_name, level, sheet, index) = entry;
    let growth = level as i32;
    let hp_max = 80 + level * 40;
    let mp_max = 10 + level * 8;
    let actor = Actor::new(ActorId::new(id), name)
        .with_nickname(nickname)
        .with_level(level)
        .with_gauges(Gauge::new(hp_max - level * 7, hp_max), Gauge::full(mp_max))
        .with_params(ParamSet {
            attack: 12 + growth * 3,
            defense: 10 + growth * 2,
            magic_attack: 8 + growth * 3,
            magic_defense: 9 + growth * 2,
            agility: 11 + growth,
            luck: 10 + growth,
        })
        .with_character(CharacterSprite::new(sheet, index));
    if class_name.is_empty() {
        actor
    } else {
        actor.with_class_name(class_name)
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }

    fn bell(&mut self) -> io::Result<()> {
        execute!(self.terminal.backend_mut(), Print('\u{7}'))
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

#[cfg(test)]
mod tests;
