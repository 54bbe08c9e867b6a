//! Frame-driven battle simulation.
//!
//! The [`BattleContext`] is the single owner of battle state. Each call to
//! [`BattleContext::tick`] runs one frame in a fixed order:
//!
//! 1. advance the battle clock and release an expired post-action delay
//! 2. fill gauges and hand newly ready enemies to the decision policy
//! 3. turn due enemy decisions into queued actions
//! 4. if no action is in flight, pop and resolve the queue head
//!
//! HP, statuses and stacks are only written by the resolution pipeline
//! (`resolve`) and the cascade engine (`cascade`); the scheduler and the
//! decision policy only read them.

mod arbitration;
mod cascade;
mod commands;
mod decision;
mod lifecycle;
mod resolve;
mod scheduler;
mod setup;

pub use decision::{DecisionPolicy, DecisionView, PendingDecision, RandomTargetPolicy};
pub use lifecycle::BattlePhase;
pub use setup::BattleSetup;

use std::collections::{BTreeMap, BTreeSet};

use crate::action::ActionQueue;
use crate::config::BattleConfig;
use crate::env::{BattleEnv, RngOracle, RollPurpose, Rewards, compute_seed};
use crate::event::BattleEvent;
use crate::state::{Battler, BattlerId, Side};

/// Process-scoped aggregate for one battle.
///
/// Created by [`BattleSetup::build`] with fresh enemy instances and dropped
/// when the battle screen is torn down.
pub struct BattleContext {
    config: BattleConfig,
    /// Arena of battlers: party first, then enemies. Never shrinks.
    battlers: Vec<Battler>,
    queue: ActionQueue,
    phase: BattlePhase,
    /// Battle clock in seconds.
    clock: f64,
    decisions: Vec<PendingDecision>,
    /// Battlers with a pending decision, queued action or action in flight.
    committed: BTreeSet<BattlerId>,
    inventory: BTreeMap<String, u32>,
    policy: Box<dyn DecisionPolicy>,
    rng: Box<dyn RngOracle>,
    seed: u64,
    nonce: u64,
    rewards: Option<Rewards>,
    events: Vec<BattleEvent>,
}

impl BattleContext {
    /// Starts building a battle with the given configuration.
    pub fn builder(config: BattleConfig) -> BattleSetup {
        BattleSetup::new(config)
    }

    /// Runs one frame. `dt` is the elapsed time in seconds since the last tick.
    pub fn tick(&mut self, env: &mut BattleEnv<'_>, dt: f32) {
        if !self.phase.is_active() {
            return;
        }

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.clock += f64::from(dt);
        self.queue.poll(self.clock);

        self.advance_gauges(dt);
        self.run_due_decisions();
        self.process_queue(env);
    }

    // ===== accessors =====

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Latched once the battle reaches victory or defeat.
    pub fn is_over(&self) -> bool {
        !self.phase.is_active()
    }

    pub fn battler(&self, id: BattlerId) -> Option<&Battler> {
        self.battlers.get(id.index())
    }

    pub fn battlers(&self) -> &[Battler] {
        &self.battlers
    }

    pub fn party(&self) -> impl Iterator<Item = &Battler> {
        self.battlers.iter().filter(|b| b.side() == Side::Party)
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Battler> {
        self.battlers.iter().filter(|b| b.side() == Side::Enemy)
    }

    /// Ids of living battlers on one side, in arena order.
    pub fn living(&self, side: Side) -> Vec<BattlerId> {
        self.battlers
            .iter()
            .filter(|b| b.side() == side && b.is_alive())
            .map(Battler::id)
            .collect()
    }

    pub fn is_alive(&self, id: BattlerId) -> bool {
        self.battler(id).is_some_and(Battler::is_alive)
    }

    pub fn queue(&self) -> &ActionQueue {
        &self.queue
    }

    pub fn action_in_progress(&self) -> bool {
        self.queue.action_in_progress()
    }

    /// Enemy decisions waiting for their think delay to elapse.
    pub fn pending_decisions(&self) -> &[PendingDecision] {
        &self.decisions
    }

    /// True while the battler has a decision pending or an action queued or in flight.
    pub fn is_committed(&self, id: BattlerId) -> bool {
        self.committed.contains(&id)
    }

    pub fn item_stock(&self, item_id: &str) -> u32 {
        self.inventory.get(item_id).copied().unwrap_or(0)
    }

    /// Spoils computed on victory.
    pub fn rewards(&self) -> Option<&Rewards> {
        self.rewards.as_ref()
    }

    /// Events recorded since the last drain.
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Takes every recorded event, oldest first.
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    // ===== internal helpers =====

    pub(crate) fn battler_mut(&mut self, id: BattlerId) -> Option<&mut Battler> {
        self.battlers.get_mut(id.index())
    }

    pub(crate) fn emit(&mut self, event: BattleEvent) {
        tracing::trace!(?event, "battle event");
        self.events.push(event);
    }

    /// Derives the seed for the next roll and advances the nonce.
    pub(crate) fn next_seed(&mut self, battler: BattlerId, purpose: RollPurpose) -> u64 {
        let seed = compute_seed(self.seed, self.nonce, battler.0, purpose);
        self.nonce += 1;
        seed
    }

    pub(crate) fn roll_d100(&mut self, battler: BattlerId, purpose: RollPurpose) -> u32 {
        let seed = self.next_seed(battler, purpose);
        self.rng.roll_d100(seed)
    }

    pub(crate) fn roll_range(
        &mut self,
        battler: BattlerId,
        purpose: RollPurpose,
        min: i32,
        max: i32,
    ) -> i32 {
        let seed = self.next_seed(battler, purpose);
        self.rng.range_i32(seed, min, max)
    }

    /// Picks a random living battler on `side`.
    pub(crate) fn random_living(
        &mut self,
        side: Side,
        roller: BattlerId,
        purpose: RollPurpose,
    ) -> Option<BattlerId> {
        let candidates = self.living(side);
        let seed = self.next_seed(roller, purpose);
        let index = self.rng.pick(seed, candidates.len())?;
        candidates.get(index).copied()
    }
}

impl core::fmt::Debug for BattleContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BattleContext")
            .field("phase", &self.phase)
            .field("clock", &self.clock)
            .field("battlers", &self.battlers.len())
            .field("queued", &self.queue.len())
            .field("action_in_progress", &self.queue.action_in_progress())
            .finish_non_exhaustive()
    }
}
