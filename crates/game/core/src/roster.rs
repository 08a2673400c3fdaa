//! The creature catalogue.
//!
//! A [`Roster`] is built once from loaded data and only read afterwards.
//! Callers hold it by reference; picking a creature always produces a fresh
//! [`Creature`] so two players choosing the same entry never share health or
//! stamina.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Creature, CreatureTemplate};

/// Errors raised while building or querying a roster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("roster contains no creatures")]
    Empty,

    #[error("creature '{0}' appears more than once in the roster")]
    DuplicateName(String),

    #[error("roster index {index} out of range (roster has {len} creatures)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no creature named '{0}' in the roster")]
    UnknownName(String),
}

impl GameError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "ROSTER_EMPTY",
            Self::DuplicateName(_) => "ROSTER_DUPLICATE_NAME",
            Self::IndexOutOfRange { .. } => "ROSTER_INDEX_OUT_OF_RANGE",
            Self::UnknownName(_) => "ROSTER_UNKNOWN_NAME",
        }
    }
}

/// Immutable catalogue of creature templates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    templates: Vec<CreatureTemplate>,
}

impl Roster {
    pub fn new(templates: Vec<CreatureTemplate>) -> Result<Self, RosterError> {
        if templates.is_empty() {
            return Err(RosterError::Empty);
        }

        for (i, template) in templates.iter().enumerate() {
            if templates[..i].iter().any(|t| t.name() == template.name()) {
                return Err(RosterError::DuplicateName(template.name().to_string()));
            }
        }

        Ok(Self { templates })
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CreatureTemplate> {
        self.templates.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&CreatureTemplate> {
        self.templates.iter().find(|t| t.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CreatureTemplate> {
        self.templates.iter()
    }

    /// Instantiates the template at `index`.
    pub fn instantiate(&self, index: usize) -> Result<Creature, RosterError> {
        self.get(index)
            .map(CreatureTemplate::instantiate)
            .ok_or(RosterError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Instantiates the template called `name`.
    pub fn instantiate_named(&self, name: &str) -> Result<Creature, RosterError> {
        self.find(name)
            .map(CreatureTemplate::instantiate)
            .ok_or_else(|| RosterError::UnknownName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Attack;

    fn template(name: &str, hp: u32) -> CreatureTemplate {
        let attacks = (1..=4)
            .map(|i| Attack::new(format!("Move {i}"), i * 10, "normal", i * 5))
            .collect();
        CreatureTemplate::new(name, hp, 100, "normal", attacks).unwrap()
    }

    #[test]
    fn rejects_empty_and_duplicate_catalogues() {
        assert_eq!(Roster::new(Vec::new()), Err(RosterError::Empty));
        assert_eq!(
            Roster::new(vec![template("Carapuce", 500), template("Carapuce", 300)]),
            Err(RosterError::DuplicateName("Carapuce".into()))
        );
    }

    #[test]
    fn same_template_yields_independent_creatures() {
        let roster = Roster::new(vec![template("Carapuce", 500)]).unwrap();
        let left = roster.instantiate(0).unwrap();
        let right = roster.instantiate_named("Carapuce").unwrap();

        assert_eq!(left, right);
        assert!(left.shares_attacks_with(&right));
        // The template itself is never touched by a battle.
        assert_eq!(roster.get(0).unwrap().max_health(), 500);
    }

    #[test]
    fn lookup_failures_are_reported() {
        let roster = Roster::new(vec![template("Evolie", 500)]).unwrap();
        assert_eq!(
            roster.instantiate(3),
            Err(RosterError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(
            roster.instantiate_named("Missingno"),
            Err(RosterError::UnknownName("Missingno".into()))
        );
        assert_eq!(roster.len(), 1);
        assert!(!roster.is_empty());
    }
}
