//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application stays agnostic about concrete key bindings or the specifics of
//! `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::AppMode;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Move the roster cursor up.
    CursorUp,
    /// Move the roster cursor down.
    CursorDown,
    /// Pick the creature under the cursor.
    Confirm,
    /// Undo the first player's pick.
    Back,
    /// Use the active creature's attack at this index (keys 1-9).
    UseAttack(usize),
    /// Start a new selection after a finished match.
    Restart,
    /// No meaningful command was produced.
    None,
}

/// Translates a key press into a command for the current mode.
pub fn handle_key(key: KeyEvent, mode: AppMode) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match mode {
        AppMode::Selection => handle_selection(key),
        AppMode::Battle => handle_battle(key),
        AppMode::Finished => handle_finished(key),
    }
}

fn handle_selection(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => KeyAction::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::CursorDown,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Confirm,
        KeyCode::Esc | KeyCode::Backspace => KeyAction::Back,
        KeyCode::Char('q') => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

fn handle_battle(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char(c @ '1'..='9') => KeyAction::UseAttack(c as usize - '1' as usize),
        KeyCode::Char('q') => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

fn handle_finished(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('r') | KeyCode::Enter => KeyAction::Restart,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::None,
    }
}
