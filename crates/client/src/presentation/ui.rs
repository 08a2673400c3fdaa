//! Frame layout and panel composition.
use anyhow::Result;
use duel_core::Side;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    app::DuelApp,
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::AppMode,
};

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;
const ATTACK_MENU_HEIGHT: u16 = 6;
const CREATURE_PANEL_HEIGHT: u16 = 5;

pub fn render(terminal: &mut Tui, app: &DuelApp, theme: &RatatuiTheme) -> Result<()> {
    terminal.draw(|frame| draw(frame, app, theme))?;
    Ok(())
}

/// Draws the whole screen for the current mode.
pub fn draw(frame: &mut Frame, app: &DuelApp, theme: &RatatuiTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(app.config().ui.message_panel_height),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], app);
    match app.mode() {
        AppMode::Selection => {
            widgets::roster_select::render(
                frame,
                chunks[1],
                app.roster(),
                &app.state().selection,
            );
        }
        AppMode::Battle | AppMode::Finished => render_arena(frame, chunks[1], app, theme),
    }
    widgets::messages::render(frame, chunks[2], app.messages(), theme);
    widgets::footer::render(frame, chunks[3], app.mode());
}

fn render_arena(frame: &mut Frame, area: Rect, app: &DuelApp, theme: &RatatuiTheme) {
    let Some(battle) = app.battle() else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CREATURE_PANEL_HEIGHT),
            Constraint::Length(ATTACK_MENU_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let in_battle = app.mode() == AppMode::Battle;
    let active_side = battle.active_side();
    for (side, panel) in [(Side::First, panels[0]), (Side::Second, panels[1])] {
        let is_active = in_battle && side == active_side;
        widgets::creature_panel::render(frame, panel, battle.participant(side), is_active, theme);
    }

    let active = battle.active();
    widgets::attack_menu::render(frame, rows[1], &active.name, &active.creature, in_battle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::input::KeyAction;
    use duel_core::{Attack, BattleConfig, CreatureTemplate, Roster};
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Instant;

    fn app() -> DuelApp {
        let attacks = |kind: &str| {
            vec![
                Attack::new("Charge", 20, kind, 10),
                Attack::new("Morsure", 30, kind, 20),
                Attack::new("Ecume", 40, kind, 40),
                Attack::new("Air Ko", 50, kind, 60),
            ]
        };
        let roster = Roster::new(vec![
            CreatureTemplate::new("Evolie", 500, 500, "normal", attacks("normal")).unwrap(),
            CreatureTemplate::new("Carapuce", 500, 500, "water", attacks("water")).unwrap(),
        ])
        .unwrap();
        DuelApp::new(roster, BattleConfig::default(), CliConfig::default())
    }

    fn screen(app: &DuelApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| draw(frame, app, &RatatuiTheme::new()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn selection_screen_lists_roster() {
        let text = screen(&app());
        assert!(text.contains("Roster"));
        assert!(text.contains("Evolie"));
        assert!(text.contains("Carapuce"));
        assert!(text.contains("Player 1, choose your creature."));
    }

    #[test]
    fn battle_screen_shows_gauges_and_attacks() {
        let now = Instant::now();
        let mut app = app();
        app.handle(KeyAction::Confirm, now);
        app.handle(KeyAction::CursorDown, now);
        app.handle(KeyAction::Confirm, now);
        app.handle(KeyAction::UseAttack(0), now);

        let text = screen(&app);
        assert!(text.contains("Turn: 2"));
        assert!(text.contains("HP 480/500"));
        assert!(text.contains("EN 490/500"));
        assert!(text.contains("Player 2's attacks"));
        assert!(text.contains("Air Ko"));
    }
}
