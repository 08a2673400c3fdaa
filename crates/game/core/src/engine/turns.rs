use super::Match;

/// One of the two seats in a match.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    pub const fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Side whose action is enabled on `turn`: odd turns belong to the first
    /// seat, even turns to the second.
    pub const fn for_turn(turn: u64) -> Side {
        if turn % 2 == 1 {
            Side::First
        } else {
            Side::Second
        }
    }
}

/// Turn bookkeeping for Match.
impl Match {
    /// Returns the current turn counter (starts at 1).
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Returns the side allowed to act this turn.
    pub fn active_side(&self) -> Side {
        Side::for_turn(self.turn)
    }

    /// Passes the turn to the other side. Unconditional.
    pub fn advance_turn(&mut self) {
        self.turn += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parity_maps_to_sides() {
        assert_eq!(Side::for_turn(1), Side::First);
        assert_eq!(Side::for_turn(2), Side::Second);
        assert_eq!(Side::for_turn(3), Side::First);
    }

    #[test]
    fn opponents_are_symmetric() {
        for side in Side::iter() {
            assert_ne!(side, side.opponent());
            assert_eq!(side, side.opponent().opponent());
        }
        assert_eq!(Side::First.to_string(), "first");
        assert_eq!("second".parse::<Side>().unwrap(), Side::Second);
    }
}
