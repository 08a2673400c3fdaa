//! Duel session: creature selection, turn dispatch and result messages.
//!
//! [`DuelApp`] holds no terminal handles, so the whole game flow can be driven
//! from tests by feeding [`KeyAction`]s and clock instants.
use std::time::Instant;

use duel_core::{
    AttackOutcome, AttackReport, BattleConfig, GameError, Match, Participant, Roster, Side,
    TurnReport,
};

use crate::config::CliConfig;
use crate::input::KeyAction;
use crate::message::{MessageEntry, MessageLevel, MessageLog};
use crate::state::{AppMode, AppState, PendingNotice};

/// Whether the event loop should keep running after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct DuelApp {
    roster: Roster,
    rules: BattleConfig,
    config: CliConfig,
    state: AppState,
    messages: MessageLog,
}

impl DuelApp {
    pub fn new(roster: Roster, rules: BattleConfig, config: CliConfig) -> Self {
        let mut messages = MessageLog::new(config.messages.capacity);
        messages.push_text("Welcome to the arena.");

        let mut app = Self {
            roster,
            rules,
            config,
            state: AppState::new(),
            messages,
        };
        app.prompt_selection();
        app
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn mode(&self) -> AppMode {
        self.state.mode
    }

    pub fn battle(&self) -> Option<&Match> {
        self.state.battle.as_ref()
    }

    pub fn player_name(&self, side: Side) -> &str {
        self.config.players.get(side)
    }

    /// Applies one command. `now` anchors any delayed notice it schedules.
    pub fn handle(&mut self, action: KeyAction, now: Instant) -> Flow {
        match action {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                return Flow::Quit;
            }
            KeyAction::CursorUp if self.mode() == AppMode::Selection => {
                self.state.selection.move_up(self.roster.len());
            }
            KeyAction::CursorDown if self.mode() == AppMode::Selection => {
                self.state.selection.move_down(self.roster.len());
            }
            KeyAction::Confirm if self.mode() == AppMode::Selection => self.confirm_pick(),
            KeyAction::Back if self.mode() == AppMode::Selection => self.undo_pick(),
            KeyAction::UseAttack(index) if self.mode() == AppMode::Battle => {
                self.attack(index, now)
            }
            KeyAction::Restart if self.mode() == AppMode::Finished => self.restart(),
            _ => {}
        }
        Flow::Continue
    }

    /// Releases due faint notices. Returns true if anything was added.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self.state.take_due(now);
        let released = !due.is_empty();
        for notice in due {
            self.messages.push(MessageEntry::new(
                notice.text,
                Some(notice.turn),
                MessageLevel::Alert,
            ));
        }
        released
    }

    fn prompt_selection(&mut self) {
        let side = self.state.selection.picking_side();
        let prompt = format!("{}, choose your creature.", self.player_name(side));
        self.messages.push_text(prompt);
    }

    fn confirm_pick(&mut self) {
        let side = self.state.selection.picking_side();
        let creature = match self.roster.instantiate(self.state.selection.cursor) {
            Ok(creature) => creature,
            Err(err) => {
                tracing::warn!(code = err.error_code(), "Rejected pick: {}", err);
                self.messages.push_warning(err.to_string());
                return;
            }
        };

        tracing::info!("{} picked {}", self.player_name(side), creature.name());
        let announcement = format!("{} sends out {}!", self.player_name(side), creature.name());
        self.messages.push_text(announcement);
        self.state.selection.picks.push(creature);

        if self.state.selection.picks.len() < 2 {
            self.prompt_selection();
            return;
        }

        self.start_battle();
    }

    fn undo_pick(&mut self) {
        if let Some(creature) = self.state.selection.picks.pop() {
            let text = format!(
                "{} returns {} to the roster.",
                self.player_name(Side::First),
                creature.name()
            );
            self.messages.push_text(text);
            self.prompt_selection();
        }
    }

    fn start_battle(&mut self) {
        let mut picks = std::mem::take(&mut self.state.selection.picks).into_iter();
        let (Some(first), Some(second)) = (picks.next(), picks.next()) else {
            return;
        };

        let battle = Match::with_config(
            Participant::new(self.player_name(Side::First), first),
            Participant::new(self.player_name(Side::Second), second),
            self.rules.clone(),
        );
        tracing::info!(
            "Match started: {} vs {}",
            battle.participant(Side::First).creature.name(),
            battle.participant(Side::Second).creature.name()
        );

        self.state.battle = Some(battle);
        self.state.mode = AppMode::Battle;
        self.prompt_turn();
    }

    fn prompt_turn(&mut self) {
        let Some(battle) = &self.state.battle else {
            return;
        };
        let active = battle.active();
        let text = format!("{}: {}'s move.", active.name, active.creature.name());
        self.messages.push_turn(battle.turn(), text);
    }

    fn attack(&mut self, index: usize, now: Instant) {
        let Some(battle) = self.state.battle.as_mut() else {
            return;
        };

        let side = battle.active_side();
        match battle.take_turn(side, index) {
            Ok(report) => {
                tracing::debug!(?report, "Turn resolved");
                self.record_turn(&report, now);
            }
            Err(err) => {
                tracing::warn!(
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "Rejected attack: {}",
                    err
                );
                self.messages
                    .push_warning(format!("Attack {} is not available.", index + 1));
            }
        }
    }

    fn record_turn(&mut self, report: &TurnReport, now: Instant) {
        let Some(battle) = &self.state.battle else {
            return;
        };
        let attacker = battle.participant(report.side).creature.name().to_string();
        let target = battle
            .participant(report.side.opponent())
            .creature
            .name()
            .to_string();

        let attack = match &report.outcome {
            AttackOutcome::Resolved(attack) => attack,
            AttackOutcome::AttackerFainted => {
                self.messages
                    .push_warning(format!("{} has fainted and cannot attack.", attacker));
                return;
            }
        };

        for line in describe_attack(&attacker, &target, attack) {
            self.messages.push_turn(report.turn, line);
        }

        let mut fainted = Vec::new();
        if attack.target_fainted {
            fainted.push(target);
        }
        if attack.attacker_fainted {
            fainted.push(attacker);
        }

        if fainted.is_empty() {
            self.prompt_turn();
            return;
        }

        for name in fainted {
            self.state.schedule(PendingNotice {
                text: format!("{} fainted!", name),
                turn: report.turn,
                due: now + self.config.ui.display_delay,
            });
        }
        tracing::info!("Match over on turn {}", report.turn);
        self.state.mode = AppMode::Finished;
    }

    fn restart(&mut self) {
        tracing::info!("Starting a new selection");
        self.state.reset();
        self.messages.push_text("New match.");
        self.prompt_selection();
    }
}

fn describe_attack(attacker: &str, target: &str, report: &AttackReport) -> Vec<String> {
    let mut lines = vec![format!(
        "{} uses {} on {} for {} damage.",
        attacker, report.attack, target, report.damage_dealt
    )];
    if report.exhausted {
        lines.push(format!(
            "{} is exhausted and takes {} recoil damage!",
            attacker, report.recoil
        ));
    }
    lines
}
