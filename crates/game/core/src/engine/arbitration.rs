//! Queue arbitration: one action in flight at a time.

use tracing::{debug, warn};

use crate::action::{Action, ActionSeq};
use crate::env::BattleEnv;
use crate::event::BattleEvent;

use super::BattleContext;

impl BattleContext {
    /// Appends an action to the queue and commits its actor.
    ///
    /// No validation happens here: an actor or target that falls before
    /// the action resolves turns it into an aborted no-op.
    pub fn enqueue(&mut self, action: Action) -> ActionSeq {
        let actor = action.actor();
        self.committed.insert(actor);
        let seq = self.queue.enqueue(action.clone());
        debug!(%actor, seq = seq.0, action = action.as_str(), "action queued");
        self.emit(BattleEvent::ActionQueued { seq, action });
        seq
    }

    /// Marks the in-flight action `seq` as finished.
    ///
    /// Resets the actor's gauge, checks for the end of the battle and then
    /// releases the queue (after the configured display delay, if any).
    /// Idempotent: returns `false` if `seq` is not the resolving action or
    /// was already completed.
    pub fn complete_action(&mut self, seq: ActionSeq) -> bool {
        let Some(actor) = self.queue.complete(seq) else {
            warn!(seq = seq.0, "ignoring completion of an action not in flight");
            return false;
        };

        self.committed.remove(&actor);
        if let Some(battler) = self.battler_mut(actor)
            && battler.is_alive()
        {
            battler.gauge_mut().reset();
        }

        self.check_end();
        if self.phase.is_active() {
            let delay_ms = self.config.post_action_delay_ms;
            let until = (delay_ms > 0).then(|| self.clock + f64::from(delay_ms) / 1000.0);
            self.queue.release(until);
        }

        debug!(%actor, seq = seq.0, "action completed");
        true
    }

    /// Pops and resolves the queue head if nothing is in flight.
    pub(super) fn process_queue(&mut self, env: &mut BattleEnv<'_>) {
        let Some(queued) = self.queue.begin_next() else {
            return;
        };
        debug!(
            actor = %queued.action.actor(),
            seq = queued.seq.0,
            action = queued.action.as_str(),
            "resolving action"
        );
        self.resolve(queued, env);
    }
}
