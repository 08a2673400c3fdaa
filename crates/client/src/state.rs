//! Application state for mode management and UI context.
use std::collections::VecDeque;
use std::time::Instant;

use duel_core::{Creature, Match, Side};

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Players pick their creatures from the roster.
    Selection,
    /// Attacks are being exchanged.
    Battle,
    /// A creature fainted; waiting for a rematch or quit.
    Finished,
}

/// Roster cursor and the creatures picked so far.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    pub cursor: usize,
    pub picks: Vec<Creature>,
}

impl SelectionState {
    /// Seat that picks next.
    pub fn picking_side(&self) -> Side {
        if self.picks.is_empty() {
            Side::First
        } else {
            Side::Second
        }
    }

    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 {
            len - 1
        } else {
            self.cursor - 1
        };
    }

    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }
}

/// A message held back until its display time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingNotice {
    pub text: String,
    pub turn: u64,
    pub due: Instant,
}

/// Everything the UI needs besides the roster and message log.
#[derive(Clone, Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub selection: SelectionState,
    pub battle: Option<Match>,
    pending: VecDeque<PendingNotice>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Selection,
            selection: SelectionState::default(),
            battle: None,
            pending: VecDeque::new(),
        }
    }

    /// Back to creature selection with nothing picked.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn schedule(&mut self, notice: PendingNotice) {
        self.pending.push_back(notice);
    }

    /// Removes and returns every notice due at `now`, oldest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<PendingNotice> {
        let mut due = Vec::new();
        while self.pending.front().is_some_and(|notice| notice.due <= now) {
            if let Some(notice) = self.pending.pop_front() {
                due.push(notice);
            }
        }
        due
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn cursor_wraps_both_ways() {
        let mut selection = SelectionState::default();
        selection.move_up(3);
        assert_eq!(selection.cursor, 2);
        selection.move_down(3);
        assert_eq!(selection.cursor, 0);
        selection.move_down(0);
        assert_eq!(selection.cursor, 0);
    }

    #[test]
    fn notices_release_in_order_once_due() {
        let start = Instant::now();
        let mut state = AppState::new();
        for (text, delay) in [("a", 10), ("b", 20)] {
            state.schedule(PendingNotice {
                text: text.to_string(),
                turn: 1,
                due: start + Duration::from_millis(delay),
            });
        }

        assert!(state.take_due(start).is_empty());
        let due = state.take_due(start + Duration::from_millis(15));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].text, "a");
        assert!(state.has_pending());

        state.reset();
        assert!(!state.has_pending());
        assert_eq!(state.mode, AppMode::Selection);
    }
}
