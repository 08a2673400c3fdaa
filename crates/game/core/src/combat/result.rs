//! Combat result types.

/// What a single resolved attack did to both creatures.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    /// Name of the attack that was used.
    pub attack: String,

    /// Health actually removed from the target.
    pub damage_dealt: u32,

    /// Health the attacker lost to exhaustion recoil.
    pub recoil: u32,

    /// Stamina actually spent.
    pub stamina_spent: u32,

    /// The attacker had no stamina when it attacked.
    pub exhausted: bool,

    /// The target was already at zero health before the attack.
    pub target_already_fainted: bool,

    /// The target's health reached zero because of this attack.
    pub target_fainted: bool,

    /// The attacker's health reached zero because of recoil.
    pub attacker_fainted: bool,
}

/// Outcome of an attack attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// The attack was resolved and stamina was paid.
    Resolved(AttackReport),

    /// The attacker had already fainted; nothing changed.
    AttackerFainted,
}

impl AttackOutcome {
    pub fn report(&self) -> Option<&AttackReport> {
        match self {
            Self::Resolved(report) => Some(report),
            Self::AttackerFainted => None,
        }
    }
}
