//! Colour scheme for the terminal UI.
use duel_core::ResourceMeter;
use ratatui::style::{Color, Modifier, Style};

use crate::message::MessageLevel;

/// Consistent colours and styling rules for the duel screens.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn style_health(&self, meter: ResourceMeter) -> Style {
        if meter.maximum() == 0 {
            return Style::default().fg(Color::Gray);
        }

        let color = match meter.percent() {
            75..=100 => Color::Green,
            50..=74 => Color::Yellow,
            25..=49 => Color::LightRed,
            _ => Color::Red,
        };

        Style::default().fg(color)
    }

    pub fn style_stamina(&self, meter: ResourceMeter) -> Style {
        if meter.maximum() == 0 {
            return Style::default().fg(Color::Gray);
        }

        let color = match meter.percent() {
            75..=100 => Color::Cyan,
            50..=74 => Color::Blue,
            25..=49 => Color::LightBlue,
            _ => Color::DarkGray,
        };

        Style::default().fg(color)
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Alert => Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Border style for a creature panel; the active seat is highlighted.
    pub fn style_panel(&self, is_active: bool) -> Style {
        if is_active {
            self.emphasize(Style::default().fg(Color::Cyan))
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn emphasize(&self, base_style: Style) -> Style {
        base_style.add_modifier(Modifier::BOLD)
    }
}
