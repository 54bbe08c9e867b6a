//! Traits describing data the battle consumes from collaborators.
//!
//! Oracles expose static definitions (enemy templates, skills, items) and
//! the RNG; the resonance pool is the one mutable collaborator. The
//! [`BattleEnv`] aggregate lends them to the engine for the duration of a
//! call so the battle never holds on to outside state.
mod effects;
mod enemies;
mod resonance;
mod rng;

pub use effects::{
    EffectKind, EffectSpec, ItemDefinition, ItemOracle, SkillDefinition, SkillOracle, StatusRider,
};
pub use enemies::{EnemyOracle, EnemyTemplate, ItemDrop, RewardTable, Rewards};
pub use resonance::{ResonanceMeter, ResonancePool};
pub use rng::{PcgRng, RngOracle, RollPurpose, compute_seed};

/// Aggregates the collaborators required by the resolution pipeline.
pub struct BattleEnv<'a> {
    skills: &'a dyn SkillOracle,
    items: &'a dyn ItemOracle,
    resonance: &'a mut dyn ResonancePool,
}

impl<'a> BattleEnv<'a> {
    pub fn new(
        skills: &'a dyn SkillOracle,
        items: &'a dyn ItemOracle,
        resonance: &'a mut dyn ResonancePool,
    ) -> Self {
        Self {
            skills,
            items,
            resonance,
        }
    }

    pub fn skills(&self) -> &'a dyn SkillOracle {
        self.skills
    }

    pub fn items(&self) -> &'a dyn ItemOracle {
        self.items
    }

    pub fn resonance(&self) -> &dyn ResonancePool {
        &*self.resonance
    }

    pub fn resonance_mut(&mut self) -> &mut dyn ResonancePool {
        &mut *self.resonance
    }
}

impl core::fmt::Debug for BattleEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BattleEnv")
            .field("resonance", &self.resonance.available())
            .finish_non_exhaustive()
    }
}
