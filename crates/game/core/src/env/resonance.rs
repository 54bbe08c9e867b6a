//! Shared resonance pool consumed by skills.

/// Mana-like counter shared by the party.
///
/// The pool is owned outside the battle (it persists between fights) and is
/// lent to the engine through [`crate::env::BattleEnv`].
pub trait ResonancePool {
    /// Currently available resonance.
    fn available(&self) -> u32;

    /// Spends `amount` if available. Returns `false` and leaves the pool
    /// untouched otherwise.
    fn spend(&mut self, amount: u32) -> bool;

    /// Adds `amount` to the pool (capped by the implementation).
    fn credit(&mut self, amount: u32);
}

/// Bounded resonance counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResonanceMeter {
    current: u32,
    max: u32,
}

impl ResonanceMeter {
    pub fn new(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    pub fn full(max: u32) -> Self {
        Self::new(max, max)
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

impl ResonancePool for ResonanceMeter {
    fn available(&self) -> u32 {
        self.current
    }

    fn spend(&mut self, amount: u32) -> bool {
        match self.current.checked_sub(amount) {
            Some(rest) => {
                self.current = rest;
                true
            }
            None => false,
        }
    }

    fn credit(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.max);
    }
}
