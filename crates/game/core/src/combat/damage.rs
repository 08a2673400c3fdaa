//! Damage arithmetic.

use crate::config::BattleConfig;

/// Damage an exhausted attacker still lands on its target.
///
/// # Formula
///
/// ```text
/// dealt = damage / exhausted_damage_divisor   (integer division)
/// ```
pub fn exhausted_damage(damage: u32, config: &BattleConfig) -> u32 {
    damage / config.effective_divisor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_damage_halves_by_default() {
        let config = BattleConfig::default();
        assert_eq!(exhausted_damage(30, &config), 15);
        assert_eq!(exhausted_damage(25, &config), 12);
        assert_eq!(
            exhausted_damage(30, &BattleConfig::with_exhausted_damage_divisor(0)),
            30
        );
    }
}
