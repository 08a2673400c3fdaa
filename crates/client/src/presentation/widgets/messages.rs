//! Messages widget displaying recent battle events.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::{
    message::{MessageEntry, MessageLog},
    presentation::theme::RatatuiTheme,
};

/// Render the message log panel.
///
/// Displays recent messages in bottom-to-top order (newest at bottom).
pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog, theme: &RatatuiTheme) {
    let visible = area.height.saturating_sub(2) as usize;
    let mut items: Vec<ListItem> = messages
        .recent(visible)
        .map(|entry| ListItem::new(format_message(entry)).style(theme.style_message(entry.level)))
        .collect();

    // Pad with empty lines to maintain consistent height
    while items.len() < visible {
        items.push(ListItem::new(""));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

/// Format a message entry with its turn number, if any.
fn format_message(entry: &MessageEntry) -> String {
    match entry.turn {
        Some(turn) => format!("[{}] {}", turn, entry.text),
        None => entry.text.clone(),
    }
}
