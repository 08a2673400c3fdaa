use std::sync::Arc;

use super::{Attack, ResourceMeter};
use crate::config::BattleConfig;
use crate::error::{ErrorSeverity, GameError};

/// Errors raised while validating a creature template.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("creature name must not be empty")]
    EmptyName,

    #[error("creature '{name}' must have positive max health")]
    ZeroMaxHealth { name: String },

    #[error("creature '{name}' must have positive max stamina")]
    ZeroMaxStamina { name: String },

    #[error("creature '{name}' must carry exactly {expected} attacks (got {actual})")]
    AttackCount {
        name: String,
        expected: usize,
        actual: usize,
    },
}

impl GameError for TemplateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "TEMPLATE_EMPTY_NAME",
            Self::ZeroMaxHealth { .. } => "TEMPLATE_ZERO_MAX_HEALTH",
            Self::ZeroMaxStamina { .. } => "TEMPLATE_ZERO_MAX_STAMINA",
            Self::AttackCount { .. } => "TEMPLATE_ATTACK_COUNT",
        }
    }
}

/// Immutable catalogue entry a [`Creature`] is instantiated from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatureTemplate {
    name: String,
    max_health: u32,
    max_stamina: u32,
    kind: String,
    attacks: Arc<[Attack]>,
}

impl CreatureTemplate {
    /// Builds a template, rejecting values no battle could start from.
    pub fn new(
        name: impl Into<String>,
        max_health: u32,
        max_stamina: u32,
        kind: impl Into<String>,
        attacks: Vec<Attack>,
    ) -> Result<Self, TemplateError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TemplateError::EmptyName);
        }
        if max_health == 0 {
            return Err(TemplateError::ZeroMaxHealth { name });
        }
        if max_stamina == 0 {
            return Err(TemplateError::ZeroMaxStamina { name });
        }
        if attacks.len() != BattleConfig::ATTACK_SLOTS {
            return Err(TemplateError::AttackCount {
                name,
                expected: BattleConfig::ATTACK_SLOTS,
                actual: attacks.len(),
            });
        }

        Ok(Self {
            name,
            max_health,
            max_stamina,
            kind: kind.into(),
            attacks: attacks.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn max_stamina(&self) -> u32 {
        self.max_stamina
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn attacks(&self) -> &[Attack] {
        &self.attacks
    }

    /// Creates a fresh battle instance at full health and stamina.
    pub fn instantiate(&self) -> Creature {
        Creature::from_template(self)
    }
}

/// A creature fighting in a match.
///
/// Health and stamina only ever move down during a match, through
/// [`crate::combat`]. A creature at zero health is fainted for good.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Creature {
    name: String,
    kind: String,
    health: ResourceMeter,
    stamina: ResourceMeter,
    attacks: Arc<[Attack]>,
}

impl Creature {
    pub fn from_template(template: &CreatureTemplate) -> Self {
        Self {
            name: template.name.clone(),
            kind: template.kind.clone(),
            health: ResourceMeter::full(template.max_health),
            stamina: ResourceMeter::full(template.max_stamina),
            attacks: Arc::clone(&template.attacks),
        }
    }

    /// Overrides current health (clamped to the maximum).
    #[must_use]
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = ResourceMeter::new(health, self.health.maximum());
        self
    }

    /// Overrides current stamina (clamped to the maximum).
    #[must_use]
    pub fn with_stamina(mut self, stamina: u32) -> Self {
        self.stamina = ResourceMeter::new(stamina, self.stamina.maximum());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn health(&self) -> u32 {
        self.health.current()
    }

    pub fn max_health(&self) -> u32 {
        self.health.maximum()
    }

    pub fn stamina(&self) -> u32 {
        self.stamina.current()
    }

    pub fn max_stamina(&self) -> u32 {
        self.stamina.maximum()
    }

    pub fn health_meter(&self) -> ResourceMeter {
        self.health
    }

    pub fn stamina_meter(&self) -> ResourceMeter {
        self.stamina
    }

    pub fn attacks(&self) -> &[Attack] {
        &self.attacks
    }

    pub fn attack(&self, index: usize) -> Option<&Attack> {
        self.attacks.get(index)
    }

    pub fn is_fainted(&self) -> bool {
        self.health.is_depleted()
    }

    pub fn is_exhausted(&self) -> bool {
        self.stamina.is_depleted()
    }

    /// True when both creatures read from the same template attack list.
    pub fn shares_attacks_with(&self, other: &Creature) -> bool {
        Arc::ptr_eq(&self.attacks, &other.attacks)
    }

    pub(crate) fn take_damage(&mut self, amount: u32) -> u32 {
        self.health.deplete(amount)
    }

    pub(crate) fn spend_stamina(&mut self, amount: u32) -> u32 {
        self.stamina.deplete(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attacks() -> Vec<Attack> {
        vec![
            Attack::new("Charge", 20, "normal", 10),
            Attack::new("Morsure", 30, "normal", 20),
            Attack::new("Coup de boule", 40, "normal", 40),
            Attack::new("Air Ko", 50, "normal", 60),
        ]
    }

    #[test]
    fn instance_starts_at_maximums() {
        let template = CreatureTemplate::new("Evolie", 500, 400, "normal", attacks()).unwrap();
        let creature = template.instantiate();

        assert_eq!(creature.health(), creature.max_health());
        assert_eq!(creature.stamina(), creature.max_stamina());
        assert_eq!(creature.max_health(), 500);
        assert_eq!(creature.max_stamina(), 400);
        assert_eq!(creature.attacks().len(), BattleConfig::ATTACK_SLOTS);
    }

    #[test]
    fn instances_share_attacks_but_not_vitals() {
        let template = CreatureTemplate::new("Evolie", 500, 500, "normal", attacks()).unwrap();
        let mut first = template.instantiate();
        let second = template.instantiate();

        first.take_damage(100);

        assert!(first.shares_attacks_with(&second));
        assert_eq!(first.health(), 400);
        assert_eq!(second.health(), 500);
    }

    #[test]
    fn rejects_invalid_templates() {
        assert_eq!(
            CreatureTemplate::new("  ", 10, 10, "normal", attacks()),
            Err(TemplateError::EmptyName)
        );
        assert!(matches!(
            CreatureTemplate::new("Zero", 0, 10, "normal", attacks()),
            Err(TemplateError::ZeroMaxHealth { .. })
        ));
        assert!(matches!(
            CreatureTemplate::new("Tired", 10, 0, "normal", attacks()),
            Err(TemplateError::ZeroMaxStamina { .. })
        ));

        let err = CreatureTemplate::new("Short", 10, 10, "normal", attacks()[..3].to_vec())
            .unwrap_err();
        assert_eq!(
            err,
            TemplateError::AttackCount {
                name: "Short".into(),
                expected: 4,
                actual: 3
            }
        );
        assert_eq!(err.error_code(), "TEMPLATE_ATTACK_COUNT");
    }

    #[test]
    fn vitals_overrides_are_clamped() {
        let template = CreatureTemplate::new("Evolie", 100, 50, "normal", attacks()).unwrap();
        let creature = template.instantiate().with_health(500).with_stamina(0);

        assert_eq!(creature.health(), 100);
        assert!(creature.is_exhausted());
        assert!(!creature.is_fainted());
    }
}
