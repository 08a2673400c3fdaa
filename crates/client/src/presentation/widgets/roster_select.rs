//! Creature selection list.

use duel_core::Roster;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::state::SelectionState;

pub fn render(frame: &mut Frame, area: Rect, roster: &Roster, selection: &SelectionState) {
    let items: Vec<ListItem> = roster
        .iter()
        .map(|template| {
            let picked = selection
                .picks
                .iter()
                .any(|creature| creature.name() == template.name());
            let marker = if picked { " *" } else { "" };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<14}", template.name())),
                Span::styled(
                    format!("{:<10}", template.kind()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!(
                    "HP {:>4}  EN {:>4}{}",
                    template.max_health(),
                    template.max_stamina(),
                    marker
                )),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Roster "))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(selection.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}
