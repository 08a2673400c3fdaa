//! Header widget displaying the turn counter and whose move it is.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{app::DuelApp, state::AppMode};

/// Render the header panel with turn info and current mode.
pub fn render(frame: &mut Frame, area: Rect, app: &DuelApp) {
    let mode_text = match app.mode() {
        AppMode::Selection => " [SELECTION]",
        AppMode::Battle => "",
        AppMode::Finished => " [FINISHED]",
    };

    let mut spans = Vec::new();
    match (app.mode(), app.battle()) {
        (AppMode::Selection, _) | (_, None) => {
            let side = app.state().selection.picking_side();
            spans.push(Span::raw("Picking: "));
            spans.push(Span::styled(
                app.player_name(side).to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        (_, Some(battle)) => {
            let active = battle.active();
            spans.push(Span::raw("Turn: "));
            spans.push(Span::styled(
                battle.turn().to_string(),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(" | Active: "));
            spans.push(Span::styled(
                format!("{} ({})", active.name, active.creature.name()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        }
    }
    spans.push(Span::styled(
        mode_text,
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL).title("Duel"));

    frame.render_widget(paragraph, area);
}
