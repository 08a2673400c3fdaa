use super::Creature;

/// A player seat in a match and the creature currently fighting for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub creature: Creature,
}

impl Participant {
    pub fn new(name: impl Into<String>, creature: Creature) -> Self {
        Self {
            name: name.into(),
            creature,
        }
    }
}
