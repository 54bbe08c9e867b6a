//! RNG oracle for deterministic random number generation.
//!
//! Every random decision in a battle (hit rolls, damage variance, crits,
//! stack seeding, AI delays and targets, reward drops) is derived from the
//! battle seed, a roll nonce, the battler involved and a purpose tag, so a
//! battle replays identically from the same seed and inputs.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = (max - min).saturating_add(1);
        min + (self.next_u32(seed) % range)
    }

    /// Signed variant of [`RngOracle::range`].
    fn range_i32(&self, seed: u64, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = max.abs_diff(min);
        let offset = self.range(seed, 0, span);
        min.saturating_add_unsigned(offset)
    }

    /// Pick an index in `0..len`. Returns `None` for an empty collection.
    fn pick(&self, seed: u64, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.next_u32(seed) as usize % len)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit state, 32-bit output. Stateless here: the seed passed
/// to [`RngOracle::next_u32`] is the state for a single step.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// What a roll is used for. Mixed into the seed so independent rolls made
/// for the same battler in the same step do not correlate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum RollPurpose {
    Hit = 0,
    Variance = 1,
    Crit = 2,
    StackSeed = 3,
    RadiationSpread = 4,
    DecisionDelay = 5,
    DecisionTarget = 6,
    RewardDrop = 7,
    AutoTarget = 8,
}

/// Compute deterministic seed from battle state components.
///
/// # Arguments
///
/// * `battle_seed` - Base seed set at battle start
/// * `nonce` - Roll sequence number (increments on every roll)
/// * `battler` - Battler the roll is made for
/// * `purpose` - Distinguishes independent rolls in the same step
pub fn compute_seed(battle_seed: u64, nonce: u64, battler: u32, purpose: RollPurpose) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = battle_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (battler as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (purpose as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn d100_stays_in_bounds() {
        let rng = PcgRng;
        for seed in 0..2_000u64 {
            let roll = rng.roll_d100(compute_seed(7, seed, 1, RollPurpose::Hit));
            assert!((1..=100).contains(&roll));
        }
    }

    #[test]
    fn signed_range_is_inclusive() {
        let rng = PcgRng;
        let mut seen_min = false;
        let mut seen_max = false;
        for seed in 0..2_000u64 {
            let value = rng.range_i32(compute_seed(1, seed, 0, RollPurpose::Variance), -2, 2);
            assert!((-2..=2).contains(&value));
            seen_min |= value == -2;
            seen_max |= value == 2;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn pick_handles_empty() {
        assert_eq!(PcgRng.pick(9, 0), None);
        assert!(PcgRng.pick(9, 3).is_some_and(|i| i < 3));
    }

    #[test]
    fn purposes_decorrelate_seeds() {
        let a = compute_seed(5, 10, 2, RollPurpose::Hit);
        let b = compute_seed(5, 10, 2, RollPurpose::Crit);
        assert_ne!(a, b);
    }
}
