//! Creature panel with health and stamina gauges.

use duel_core::Participant;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render one seat's creature.
///
/// The active seat gets a highlighted border; a fainted creature is labelled.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    participant: &Participant,
    is_active: bool,
    theme: &RatatuiTheme,
) {
    let creature = &participant.creature;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.style_panel(is_active))
        .title(format!(" {} ", participant.name));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let status = if creature.is_fainted() {
        Span::styled(" (fainted)", Style::default().fg(Color::Red))
    } else if creature.is_exhausted() {
        Span::styled(" (exhausted)", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw("")
    };
    let title = Line::from(vec![
        Span::styled(creature.name().to_string(), theme.emphasize(Style::default())),
        Span::styled(
            format!(" [{}]", creature.kind()),
            Style::default().fg(Color::Gray),
        ),
        status,
    ]);
    frame.render_widget(Paragraph::new(title), rows[0]);

    let health = creature.health_meter();
    let health_gauge = Gauge::default()
        .gauge_style(theme.style_health(health))
        .percent(health.percent())
        .label(format!("HP {}/{}", health.current(), health.maximum()));
    frame.render_widget(health_gauge, rows[1]);

    let stamina = creature.stamina_meter();
    let stamina_gauge = Gauge::default()
        .gauge_style(theme.style_stamina(stamina))
        .percent(stamina.percent())
        .label(format!("EN {}/{}", stamina.current(), stamina.maximum()));
    frame.render_widget(stamina_gauge, rows[2]);
}
