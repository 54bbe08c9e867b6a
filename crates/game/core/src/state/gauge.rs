//! Active-time readiness gauge.

/// Readiness gauge filled by speed × elapsed time.
///
/// `current` is always within `[0, max]`. A full gauge stays full (the
/// battler is "ready") until [`AtbGauge::reset`] is called when the
/// battler's action completes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtbGauge {
    current: f32,
    max: f32,
}

impl AtbGauge {
    /// Creates an empty gauge. Non-positive or non-finite capacities fall
    /// back to 1 so that readiness stays reachable.
    pub fn new(max: f32) -> Self {
        let max = if max.is_finite() && max > 0.0 { max } else { 1.0 };
        Self { current: 0.0, max }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Fill level in `[0, 1]`.
    pub fn ratio(&self) -> f32 {
        self.current / self.max
    }

    pub fn is_ready(&self) -> bool {
        self.current >= self.max
    }

    /// Adds `amount` to the gauge, clamped to `[0, max]`. An infinite
    /// amount fills the gauge; NaN is ignored.
    ///
    /// Returns `true` only on the call that makes the gauge ready.
    pub fn fill(&mut self, amount: f32) -> bool {
        if self.is_ready() || amount.is_nan() {
            return false;
        }
        self.current = (self.current + amount).clamp(0.0, self.max);
        self.is_ready()
    }

    /// Empties the gauge.
    pub fn reset(&mut self) {
        self.current = 0.0;
    }
}

impl Default for AtbGauge {
    fn default() -> Self {
        Self::new(crate::config::BattleConfig::DEFAULT_GAUGE_MAX)
    }
}
