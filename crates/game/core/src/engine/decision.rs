//! Enemy decision policy and delayed decisions.
//!
//! A ready enemy is handed to the policy after a randomized "think" delay.
//! The delay is tracked as a [`PendingDecision`] on the battle clock rather
//! than a detached timer, so a decision whose enemy falls in the meantime
//! is simply dropped when it comes due.

use tracing::{debug, warn};

use crate::action::Action;
use crate::env::{RngOracle, RollPurpose};
use crate::state::{Battler, BattlerId, Side};

use super::BattleContext;

/// Chooses an action for a ready enemy.
pub trait DecisionPolicy: Send + Sync {
    /// Returns `None` when the enemy has nothing sensible to do.
    fn decide(&self, enemy: BattlerId, view: &DecisionView<'_>) -> Option<Action>;
}

/// Read-only battle snapshot offered to a [`DecisionPolicy`], with a seed
/// reserved for this decision's random draws.
#[derive(Clone, Copy)]
pub struct DecisionView<'a> {
    battlers: &'a [Battler],
    rng: &'a dyn RngOracle,
    seed: u64,
}

impl<'a> DecisionView<'a> {
    pub fn new(battlers: &'a [Battler], rng: &'a dyn RngOracle, seed: u64) -> Self {
        Self { battlers, rng, seed }
    }

    pub fn battler(&self, id: BattlerId) -> Option<&'a Battler> {
        self.battlers.get(id.index())
    }

    /// Living battlers on `side`, in arena order.
    pub fn living(&self, side: Side) -> impl Iterator<Item = &'a Battler> + 'a {
        self.battlers
            .iter()
            .filter(move |b| b.side() == side && b.is_alive())
    }

    /// Picks an index in `0..len` from this decision's seed.
    pub fn pick(&self, len: usize) -> Option<usize> {
        self.rng.pick(self.seed, len)
    }
}

/// Attacks a uniformly random living party member.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomTargetPolicy;

impl DecisionPolicy for RandomTargetPolicy {
    fn decide(&self, enemy: BattlerId, view: &DecisionView<'_>) -> Option<Action> {
        let targets: Vec<BattlerId> = view.living(Side::Party).map(Battler::id).collect();
        let index = view.pick(targets.len())?;
        Some(Action::attack(enemy, targets[index]))
    }
}

/// An enemy waiting out its think delay.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingDecision {
    pub enemy: BattlerId,
    /// Battle clock (seconds) at which the decision fires.
    pub due_at: f64,
}

impl BattleContext {
    pub(super) fn schedule_decision(&mut self, enemy: BattlerId) {
        let seed = self.next_seed(enemy, RollPurpose::DecisionDelay);
        let delay_ms = self.rng.range(
            seed,
            self.config.decision_delay_min_ms,
            self.config.decision_delay_max_ms,
        );
        let due_at = self.clock + f64::from(delay_ms) / 1000.0;

        self.committed.insert(enemy);
        self.decisions.push(PendingDecision { enemy, due_at });
        debug!(%enemy, delay_ms, "enemy decision scheduled");
    }

    /// Fires every decision whose delay has elapsed, earliest first.
    pub(super) fn run_due_decisions(&mut self) {
        if self.decisions.is_empty() {
            return;
        }

        let now = self.clock;
        let mut due = Vec::new();
        self.decisions.retain(|decision| {
            if decision.due_at <= now {
                due.push(*decision);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| {
            a.due_at
                .total_cmp(&b.due_at)
                .then_with(|| a.enemy.cmp(&b.enemy))
        });

        for PendingDecision { enemy, .. } in due {
            if !self.is_alive(enemy) {
                self.committed.remove(&enemy);
                debug!(%enemy, "decision discarded, enemy defeated");
                continue;
            }

            let seed = self.next_seed(enemy, RollPurpose::DecisionTarget);
            let view = DecisionView::new(&self.battlers, self.rng.as_ref(), seed);

            match self.policy.decide(enemy, &view) {
                Some(action) => {
                    self.enqueue(action);
                }
                None => {
                    self.committed.remove(&enemy);
                    warn!(%enemy, "decision dropped, no target");
                }
            }
        }
    }
}
