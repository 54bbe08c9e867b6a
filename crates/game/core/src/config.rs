//! Battle configuration constants and tunable parameters.
//!
//! Every number the simulation depends on lives here so that a battle can be
//! built with different balance values (tests, data files, difficulty modes)
//! without touching the engine.

use crate::state::ElementTable;

/// Battle configuration injected at construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Gauge capacity; a battler is ready once its gauge reaches this value.
    pub gauge_max: f32,

    /// Critical hit damage multiplier, in percent (200 = double damage).
    pub crit_multiplier_pct: u32,

    /// Lower bound of the randomized enemy "think" delay.
    pub decision_delay_min_ms: u32,

    /// Upper bound of the randomized enemy "think" delay.
    pub decision_delay_max_ms: u32,

    /// Delay after an action completes before the queue accepts the next one.
    /// Zero releases the queue immediately.
    pub post_action_delay_ms: u32,

    /// Damage variance used when the attacker has no weapon profile.
    pub unarmed_variance: VarianceRange,

    /// Extra reduction applied by a successful timed guard, in percent.
    pub timed_guard_reduction_pct: u32,

    /// Resonance credited to the pool when a party member lands a basic attack.
    pub resonance_per_hit: u32,

    /// Additional damage taken while shocked, in percent.
    pub shock_vulnerability_pct: u32,

    /// Chance (percent) for a hit to seed the first stack of each element.
    pub stack_chance_pct: ElementTable<u32>,

    /// Elemental discharge and status tick parameters.
    pub discharge: DischargeConfig,
}

/// Inclusive damage variance bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarianceRange {
    pub min: i32,
    pub max: i32,
}

impl VarianceRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

/// Parameters for elemental discharges and damage/heal-over-time statuses.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DischargeConfig {
    /// Damage dealt to every other living enemy by a fire discharge.
    pub fire_splash_damage: u32,
    /// Freeze duration (in the frozen battler's turns) from an ice discharge.
    pub freeze_turns: u32,
    /// Damage the discharging enemy takes from a lightning discharge.
    pub lightning_self_damage: u32,
    /// Shock duration from a lightning discharge.
    pub shock_turns: u32,
    /// Poison duration from a poison discharge.
    pub poison_turns: u32,
    /// Damage dealt to the discharging enemy by a radiation discharge.
    pub radiation_damage: u32,
    /// Chance (percent) that radiation spreads to each other living battler.
    pub radiation_spread_pct: u32,
    /// Irradiated duration applied by a radiation discharge or spread.
    pub radiation_turns: u32,

    /// Per-turn damage while burning.
    pub burn_tick_damage: u32,
    /// Per-turn damage while poisoned.
    pub poison_tick_damage: u32,
    /// Per-turn damage while irradiated.
    pub radiation_tick_damage: u32,
    /// Per-turn healing while regenerating.
    pub regen_tick_heal: u32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_STATUS_EFFECTS: usize = 8;
    pub const MAX_STAT_MODIFIERS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GAUGE_MAX: f32 = 100.0;
    pub const DEFAULT_CRIT_MULTIPLIER_PCT: u32 = 200;
    pub const DEFAULT_DECISION_DELAY_MIN_MS: u32 = 500;
    pub const DEFAULT_DECISION_DELAY_MAX_MS: u32 = 1200;

    pub fn new() -> Self {
        Self {
            gauge_max: Self::DEFAULT_GAUGE_MAX,
            crit_multiplier_pct: Self::DEFAULT_CRIT_MULTIPLIER_PCT,
            decision_delay_min_ms: Self::DEFAULT_DECISION_DELAY_MIN_MS,
            decision_delay_max_ms: Self::DEFAULT_DECISION_DELAY_MAX_MS,
            post_action_delay_ms: 0,
            unarmed_variance: VarianceRange::new(0, 3),
            timed_guard_reduction_pct: 50,
            resonance_per_hit: 5,
            shock_vulnerability_pct: 25,
            stack_chance_pct: ElementTable {
                fire: 50,
                ice: 40,
                lightning: 40,
                poison: 50,
                radiation: 30,
            },
            discharge: DischargeConfig::default(),
        }
    }

    /// Returns a copy with a fixed post-action display delay.
    pub fn with_post_action_delay_ms(mut self, delay_ms: u32) -> Self {
        self.post_action_delay_ms = delay_ms;
        self
    }

    /// Returns a copy with the enemy decision delay pinned to the given bounds.
    pub fn with_decision_delay_ms(mut self, min_ms: u32, max_ms: u32) -> Self {
        self.decision_delay_min_ms = min_ms;
        self.decision_delay_max_ms = max_ms.max(min_ms);
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for DischargeConfig {
    fn default() -> Self {
        Self {
            fire_splash_damage: 15,
            freeze_turns: 1,
            lightning_self_damage: 20,
            shock_turns: 2,
            poison_turns: 5,
            radiation_damage: 25,
            radiation_spread_pct: 30,
            radiation_turns: 3,
            burn_tick_damage: 5,
            poison_tick_damage: 4,
            radiation_tick_damage: 6,
            regen_tick_heal: 8,
        }
    }
}
