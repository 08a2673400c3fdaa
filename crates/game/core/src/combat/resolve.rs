//! Attack resolution between two creatures.

use crate::config::BattleConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Attack, Creature};

use super::damage::exhausted_damage;
use super::result::{AttackOutcome, AttackReport};

/// Errors raised while performing an attack.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("attack index {index} out of range ('{creature}' has {available} attacks)")]
    InvalidIndex {
        creature: String,
        index: usize,
        available: usize,
    },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidIndex { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidIndex { .. } => "ACTION_INVALID_INDEX",
        }
    }
}

/// Applies `attack`'s damage, mutating both creatures.
///
/// With stamina left, the target takes the full damage. An exhausted
/// attacker lands only `damage / divisor` on the target and takes the full
/// damage itself. Health never drops below zero. Stamina is not touched here;
/// see [`reduce_stamina`].
pub fn resolve_attack(
    attacker: &mut Creature,
    target: &mut Creature,
    attack: &Attack,
    config: &BattleConfig,
) -> AttackReport {
    let target_already_fainted = target.is_fainted();
    let attacker_was_fainted = attacker.is_fainted();
    let exhausted = attacker.is_exhausted();

    let (damage_dealt, recoil) = if exhausted {
        let dealt = target.take_damage(exhausted_damage(attack.damage(), config));
        let recoil = attacker.take_damage(attack.damage());
        (dealt, recoil)
    } else {
        (target.take_damage(attack.damage()), 0)
    };

    AttackReport {
        attack: attack.name().to_string(),
        damage_dealt,
        recoil,
        stamina_spent: 0,
        exhausted,
        target_already_fainted,
        target_fainted: !target_already_fainted && target.is_fainted(),
        attacker_fainted: !attacker_was_fainted && attacker.is_fainted(),
    }
}

/// Pays `attack`'s energy cost. Returns the stamina actually spent.
pub fn reduce_stamina(attacker: &mut Creature, attack: &Attack) -> u32 {
    attacker.spend_stamina(attack.energy_cost())
}

/// Performs the attacker's attack at `attack_index` against `target`.
///
/// The index is checked first, so a bad index is reported even for a fainted
/// attacker. A fainted attacker then does nothing. Otherwise damage is
/// resolved with the stamina the attacker had before this attack, and only
/// then is the energy cost paid.
pub fn perform_attack(
    attacker: &mut Creature,
    target: &mut Creature,
    attack_index: usize,
    config: &BattleConfig,
) -> Result<AttackOutcome, ActionError> {
    let attack = attacker
        .attack(attack_index)
        .cloned()
        .ok_or_else(|| ActionError::InvalidIndex {
            creature: attacker.name().to_string(),
            index: attack_index,
            available: attacker.attacks().len(),
        })?;

    if attacker.is_fainted() {
        return Ok(AttackOutcome::AttackerFainted);
    }

    let mut report = resolve_attack(attacker, target, &attack, config);
    report.stamina_spent = reduce_stamina(attacker, &attack);

    Ok(AttackOutcome::Resolved(report))
}
