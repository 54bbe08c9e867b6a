//! Gauge advancement.

use tracing::{debug, trace};

use crate::event::BattleEvent;
use crate::state::{BattlerId, StatKind};

use super::BattleContext;

impl BattleContext {
    /// Fills every living gauge by `speed * dt` and hands newly ready
    /// enemies to the decision policy.
    ///
    /// The battler whose action is resolving is frozen for the frame, and an
    /// enemy is never scheduled twice while it is still committed.
    pub(super) fn advance_gauges(&mut self, dt: f32) {
        let resolving = self.queue.resolving_actor();
        let mut newly_ready = Vec::new();

        for battler in self.battlers.iter_mut() {
            if battler.is_defeated() || Some(battler.id()) == resolving {
                continue;
            }
            let amount = battler.stat(StatKind::Speed).max(0) as f32 * dt;
            if battler.gauge_mut().fill(amount) {
                newly_ready.push(battler.id());
            } else if !battler.is_ready() {
                trace!(battler = %battler.id(), gauge = battler.gauge().current(), "gauge filled");
            }
        }

        for battler in newly_ready {
            debug!(%battler, clock = self.clock, "battler ready");
            self.emit(BattleEvent::BattlerReady { battler });
        }

        let awaiting: Vec<BattlerId> = self
            .battlers
            .iter()
            .filter(|b| b.is_enemy() && b.is_ready() && !self.committed.contains(&b.id()))
            .map(|b| b.id())
            .collect();
        for enemy in awaiting {
            self.schedule_decision(enemy);
        }
    }
}
