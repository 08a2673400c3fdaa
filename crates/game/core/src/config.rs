/// Battle rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Divisor applied to an attack's damage when the attacker has no stamina
    /// left. The attacker takes the full damage as recoil in that case.
    pub exhausted_damage_divisor: u32,
}

impl BattleConfig {
    // ===== compile-time constants =====
    /// Number of attacks every creature carries.
    pub const ATTACK_SLOTS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_EXHAUSTED_DAMAGE_DIVISOR: u32 = 2;

    pub fn new() -> Self {
        Self {
            exhausted_damage_divisor: Self::DEFAULT_EXHAUSTED_DAMAGE_DIVISOR,
        }
    }

    /// A divisor of zero is bumped to one (full damage while exhausted).
    pub fn with_exhausted_damage_divisor(divisor: u32) -> Self {
        Self {
            exhausted_damage_divisor: divisor.max(1),
        }
    }

    /// Divisor actually used by combat, never zero even if a data file says so.
    pub fn effective_divisor(&self) -> u32 {
        self.exhausted_damage_divisor.max(1)
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
