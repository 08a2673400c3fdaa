/// A named, typed, costed damage action.
///
/// Attacks are immutable once built. Creatures instantiated from the same
/// template share one attack list, so there is no setter on purpose.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attack {
    name: String,
    damage: u32,
    /// Category tag such as "fire" or "normal".
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: String,
    #[cfg_attr(feature = "serde", serde(rename = "energy"))]
    energy_cost: u32,
}

impl Attack {
    pub fn new(
        name: impl Into<String>,
        damage: u32,
        kind: impl Into<String>,
        energy_cost: u32,
    ) -> Self {
        Self {
            name: name.into(),
            damage,
            kind: kind.into(),
            energy_cost,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Stamina spent when this attack is used.
    pub fn energy_cost(&self) -> u32 {
        self.energy_cost
    }
}
