//! Footer widget displaying context-sensitive key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppMode;

/// Render the footer panel with key bindings help.
pub fn render(frame: &mut Frame, area: Rect, mode: AppMode) {
    let text = match mode {
        AppMode::Selection => Line::from(vec![
            Span::raw("[j/k/Arrows] Move | "),
            Span::raw("[Enter] Pick | "),
            Span::raw("[Esc] Undo pick | "),
            Span::raw("[q] Quit"),
        ]),
        AppMode::Battle => Line::from(vec![Span::raw("[1-4] Attack | "), Span::raw("[q] Quit")]),
        AppMode::Finished => Line::from(vec![Span::raw("[r] Rematch | "), Span::raw("[q] Quit")]),
    };

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
