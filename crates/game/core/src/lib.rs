//! Deterministic battle rules shared by every duel frontend.
//!
//! `duel-core` defines the canonical rules (attacks, creatures, the roster
//! catalogue, turn alternation) and exposes pure APIs with no I/O. All match
//! mutation flows through [`engine::Match`]; the combat functions it uses are
//! public for frontends and tests that resolve single exchanges.
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod roster;
pub mod state;

pub use combat::{
    ActionError, AttackOutcome, AttackReport, perform_attack, reduce_stamina, resolve_attack,
};
pub use config::BattleConfig;
pub use engine::{Match, MatchError, Side, TurnReport};
pub use error::{ErrorSeverity, GameError};
pub use roster::{Roster, RosterError};
pub use state::{Attack, Creature, CreatureTemplate, Participant, ResourceMeter, TemplateError};
