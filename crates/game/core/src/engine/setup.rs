//! Battle construction.

use std::collections::{BTreeMap, BTreeSet};

use tracing::info;

use crate::action::ActionQueue;
use crate::config::BattleConfig;
use crate::env::{EnemyOracle, EnemyTemplate, PcgRng, RngOracle};
use crate::error::SetupError;
use crate::state::{Battler, BattlerId};

use super::decision::{DecisionPolicy, RandomTargetPolicy};
use super::{BattleContext, BattlePhase};

/// Builder for a [`BattleContext`].
///
/// Enemies are instantiated fresh from their templates so no state leaks
/// between battles. Party members keep whatever HP they are given.
pub struct BattleSetup {
    config: BattleConfig,
    party: Vec<Battler>,
    enemies: Vec<Battler>,
    inventory: BTreeMap<String, u32>,
    seed: u64,
    rng: Box<dyn RngOracle>,
    policy: Box<dyn DecisionPolicy>,
}

impl BattleSetup {
    pub fn new(config: BattleConfig) -> Self {
        Self {
            config,
            party: Vec::new(),
            enemies: Vec::new(),
            inventory: BTreeMap::new(),
            seed: 0,
            rng: Box::new(PcgRng),
            policy: Box::new(RandomTargetPolicy),
        }
    }

    pub fn party_member(mut self, battler: Battler) -> Self {
        self.party.push(battler);
        self
    }

    pub fn enemy(mut self, template: &EnemyTemplate) -> Self {
        self.enemies.push(Battler::from_template(template));
        self
    }

    /// Adds one enemy per template id.
    pub fn encounter<I, S>(mut self, oracle: &dyn EnemyOracle, ids: I) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in ids {
            let id = id.as_ref();
            let template = oracle
                .template(id)
                .ok_or_else(|| SetupError::UnknownEnemyTemplate(id.to_owned()))?;
            self.enemies.push(Battler::from_template(template));
        }
        Ok(self)
    }

    /// Adds `count` units of an item to the battle stock.
    pub fn item(mut self, item_id: impl Into<String>, count: u32) -> Self {
        let stock = self.inventory.entry(item_id.into()).or_default();
        *stock = stock.saturating_add(count);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn policy(mut self, policy: impl DecisionPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Assigns battler ids (party first) and assembles the battle.
    pub fn build(self) -> Result<BattleContext, SetupError> {
        if !self.party.iter().any(Battler::is_alive) {
            return Err(SetupError::EmptyParty);
        }
        if !self.enemies.iter().any(Battler::is_alive) {
            return Err(SetupError::EmptyEncounter);
        }

        let mut battlers: Vec<Battler> = self.party.into_iter().chain(self.enemies).collect();
        for (index, battler) in battlers.iter_mut().enumerate() {
            battler.assign(BattlerId(index as u32), self.config.gauge_max);
            if battler.is_defeated() {
                battler.mark_defeated();
            }
        }

        info!(battlers = battlers.len(), seed = self.seed, "battle started");

        Ok(BattleContext {
            config: self.config,
            battlers,
            queue: ActionQueue::new(),
            phase: BattlePhase::Active,
            clock: 0.0,
            decisions: Vec::new(),
            committed: BTreeSet::new(),
            inventory: self.inventory,
            policy: self.policy,
            rng: self.rng,
            seed: self.seed,
            nonce: 0,
            rewards: None,
            events: Vec::new(),
        })
    }
}
