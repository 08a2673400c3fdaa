/// A bounded resource pool (health or stamina).
///
/// `current` is always within `0..=maximum`; the only way down is
/// [`ResourceMeter::deplete`], which saturates at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    current: u32,
    maximum: u32,
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` to `maximum`.
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// Creates a meter filled to `maximum`.
    pub const fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn maximum(&self) -> u32 {
        self.maximum
    }

    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Removes up to `amount` and returns how much was actually removed.
    pub fn deplete(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.current);
        self.current -= removed;
        removed
    }

    /// Fill level in whole percent (0..=100). An empty-capacity meter reads 0.
    pub fn percent(&self) -> u16 {
        if self.maximum == 0 {
            return 0;
        }
        ((u64::from(self.current) * 100) / u64::from(self.maximum)) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deplete_saturates_at_zero() {
        let mut meter = ResourceMeter::full(20);
        assert_eq!(meter.deplete(30), 20);
        assert_eq!(meter.current(), 0);
        assert!(meter.is_depleted());
        assert_eq!(meter.deplete(5), 0);
    }

    #[test]
    fn new_clamps_current_to_maximum() {
        let meter = ResourceMeter::new(150, 100);
        assert_eq!(meter.current(), 100);
    }

    #[test]
    fn percent_rounds_down() {
        let meter = ResourceMeter::new(1, 3);
        assert_eq!(meter.percent(), 33);
        assert_eq!(ResourceMeter::full(0).percent(), 0);
        assert_eq!(ResourceMeter::full(500).percent(), 100);
    }
}
