//! Match state and the turn pipeline.
//!
//! A [`Match`] owns both participants and the turn counter. Every attack goes
//! through [`Match::take_turn`], which checks that the caller is the active
//! side, resolves the attack via [`crate::combat`], and passes the turn on.
//!
//! The match does not decide when the game is over. Frontends read the
//! creatures' health after each turn and stop accepting input when they see
//! fit.

mod errors;
mod turns;

pub use errors::MatchError;
pub use turns::Side;

use crate::combat::{AttackOutcome, perform_attack};
use crate::config::BattleConfig;
use crate::state::Participant;

/// Result of a successful [`Match::take_turn`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Side that acted.
    pub side: Side,

    /// Turn counter value the action was taken on.
    pub turn: u64,

    /// What the attack did.
    pub outcome: AttackOutcome,

    /// Whether the turn passed to the other side.
    ///
    /// False when the acting creature is at zero health afterwards, including
    /// when it fainted from its own exhaustion recoil. In that case the
    /// counter stays put and the same side remains active.
    pub advanced: bool,
}

/// A two-player battle.
#[derive(Clone, Debug)]
pub struct Match {
    participants: [Participant; 2],
    turn: u64,
    config: BattleConfig,
}

impl Match {
    pub fn new(first: Participant, second: Participant) -> Self {
        Self::with_config(first, second, BattleConfig::default())
    }

    pub fn with_config(first: Participant, second: Participant, config: BattleConfig) -> Self {
        Self {
            participants: [first, second],
            turn: 1,
            config,
        }
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn participant(&self, side: Side) -> &Participant {
        &self.participants[side.index()]
    }

    pub fn participants(&self) -> &[Participant; 2] {
        &self.participants
    }

    /// Participant whose action is enabled right now.
    pub fn active(&self) -> &Participant {
        self.participant(self.active_side())
    }

    /// Performs `side`'s attack at `attack_index` against the other side.
    ///
    /// Fails without touching any state if `side` is not active or the index
    /// does not name one of its creature's attacks.
    pub fn take_turn(&mut self, side: Side, attack_index: usize) -> Result<TurnReport, MatchError> {
        let active = self.active_side();
        if side != active {
            return Err(MatchError::OutOfTurn { side, active });
        }

        let turn = self.turn;
        let [first, second] = &mut self.participants;
        let (attacker, target) = match side {
            Side::First => (&mut first.creature, &mut second.creature),
            Side::Second => (&mut second.creature, &mut first.creature),
        };

        let outcome = perform_attack(attacker, target, attack_index, &self.config)?;
        let advanced = !attacker.is_fainted();

        if advanced {
            self.advance_turn();
        }

        Ok(TurnReport {
            side,
            turn,
            outcome,
            advanced,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Attack, CreatureTemplate};

    fn participant(name: &str, health: u32, stamina: u32) -> Participant {
        let attacks = vec![
            Attack::new("Charge", 20, "normal", 10),
            Attack::new("Morsure", 30, "normal", 20),
            Attack::new("Coup de boule", 40, "normal", 40),
            Attack::new("Air Ko", 50, "normal", 60),
        ];
        let creature = CreatureTemplate::new(name, health, 100, "normal", attacks)
            .unwrap()
            .instantiate()
            .with_stamina(stamina);
        Participant::new(name, creature)
    }

    #[test]
    fn turns_alternate_between_sides() {
        let mut battle = Match::new(participant("Cc", 500, 100), participant("ko", 500, 100));
        assert_eq!(battle.turn(), 1);
        assert_eq!(battle.active_side(), Side::First);

        let report = battle.take_turn(Side::First, 0).unwrap();
        assert!(report.advanced);
        assert_eq!(report.turn, 1);
        assert_eq!(battle.active_side(), Side::Second);
        assert_eq!(battle.participant(Side::Second).creature.health(), 480);

        battle.take_turn(Side::Second, 1).unwrap();
        assert_eq!(battle.active_side(), Side::First);
        assert_eq!(battle.turn(), 3);
        assert_eq!(battle.participant(Side::First).creature.health(), 470);
    }

    #[test]
    fn out_of_turn_attack_is_rejected() {
        let mut battle = Match::new(participant("Cc", 500, 100), participant("ko", 500, 100));

        let err = battle.take_turn(Side::Second, 0).unwrap_err();

        assert_eq!(
            err,
            MatchError::OutOfTurn {
                side: Side::Second,
                active: Side::First
            }
        );
        assert_eq!(battle.turn(), 1);
        assert_eq!(battle.participant(Side::First).creature.health(), 500);
    }

    #[test]
    fn invalid_index_does_not_advance() {
        let mut battle = Match::new(participant("Cc", 500, 100), participant("ko", 500, 100));

        let err = battle.take_turn(Side::First, 7).unwrap_err();

        assert!(matches!(err, MatchError::Action(_)));
        assert!(err.to_string().starts_with("attack action failed"));
        assert_eq!(battle.turn(), 1);
    }

    #[test]
    fn self_inflicted_faint_freezes_the_turn() {
        let mut battle = Match::new(participant("Cc", 20, 0), participant("ko", 500, 100));

        let report = battle.take_turn(Side::First, 1).unwrap();

        assert!(!report.advanced);
        assert_eq!(battle.turn(), 1);
        assert_eq!(battle.active_side(), Side::First);
        assert!(battle.participant(Side::First).creature.is_fainted());
        assert_eq!(battle.participant(Side::Second).creature.health(), 485);

        // The fainted side stays active and can only no-op from here on.
        let report = battle.take_turn(Side::First, 0).unwrap();
        assert_eq!(report.outcome, AttackOutcome::AttackerFainted);
        assert!(!report.advanced);
        assert_eq!(battle.turn(), 1);
    }
}
