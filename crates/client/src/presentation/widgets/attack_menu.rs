//! Attack menu for the active creature.

use duel_core::Creature;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the numbered attack list.
///
/// Attacks the creature cannot pay for in full are greyed out; they can still
/// be used and will trigger exhaustion.
pub fn render(frame: &mut Frame, area: Rect, owner: &str, creature: &Creature, enabled: bool) {
    let lines: Vec<Line> = creature
        .attacks()
        .iter()
        .enumerate()
        .map(|(i, attack)| {
            let affordable = creature.stamina() >= attack.energy_cost();
            let name_style = match (enabled, affordable) {
                (false, _) => Style::default().fg(Color::DarkGray),
                (true, true) => Style::default().fg(Color::White),
                (true, false) => Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            };

            Line::from(vec![
                Span::styled(format!(" {}. ", i + 1), Style::default().fg(Color::Yellow)),
                Span::styled(format!("{:<16}", attack.name()), name_style),
                Span::raw(format!(
                    " dmg {:>3}  en {:>3}  ",
                    attack.damage(),
                    attack.energy_cost()
                )),
                Span::styled(attack.kind().to_string(), Style::default().fg(Color::Cyan)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {}'s attacks ", owner)),
    );

    frame.render_widget(paragraph, area);
}
