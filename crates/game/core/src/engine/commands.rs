//! Player input.

use tracing::debug;

use crate::action::{Action, ActionSeq};
use crate::env::RollPurpose;
use crate::error::CommandError;
use crate::state::{Battler, BattlerId, Side};

use super::BattleContext;

impl BattleContext {
    /// Queues a player-chosen action.
    ///
    /// The actor must be a living, ready party member without a pending
    /// action. Targets are not validated here; a target that is down when
    /// the action resolves aborts it.
    pub fn submit(&mut self, action: Action) -> Result<ActionSeq, CommandError> {
        self.ensure_can_act(action.actor())?;
        Ok(self.enqueue(action))
    }

    /// Queues an action on the player's behalf (auto-battle).
    ///
    /// Repeats the battler's last action, retargeting it to a random living
    /// battler on the same side if the old target has fallen. Without a
    /// previous action, attacks a random living enemy.
    pub fn auto_act(&mut self, actor: BattlerId) -> Result<ActionSeq, CommandError> {
        let last = self.ensure_can_act(actor)?.last_action().cloned();

        let action = match last {
            Some(action) => match action.target() {
                Some(target) if !self.is_alive(target) => {
                    let side = self.battler(target).map_or(Side::Enemy, Battler::side);
                    let target = self
                        .random_living(side, actor, RollPurpose::AutoTarget)
                        .ok_or(CommandError::NoTarget(actor))?;
                    action.retarget(target)
                }
                _ => action,
            },
            None => {
                let target = self
                    .random_living(Side::Enemy, actor, RollPurpose::AutoTarget)
                    .ok_or(CommandError::NoTarget(actor))?;
                Action::attack(actor, target)
            }
        };

        debug!(%actor, action = action.as_str(), "auto action chosen");
        Ok(self.enqueue(action))
    }

    /// Arms a timed guard: the next hit on `actor` is further reduced.
    pub fn register_timed_guard(&mut self, actor: BattlerId) -> Result<(), CommandError> {
        if !self.phase.is_active() {
            return Err(CommandError::BattleOver);
        }
        let battler = self
            .battlers
            .get_mut(actor.index())
            .ok_or(CommandError::UnknownBattler(actor))?;
        if battler.is_enemy() {
            return Err(CommandError::NotPlayerControlled(actor));
        }
        if battler.is_defeated() {
            return Err(CommandError::Defeated(actor));
        }
        battler.arm_timed_guard();
        debug!(%actor, "timed guard armed");
        Ok(())
    }

    fn ensure_can_act(&self, actor: BattlerId) -> Result<&Battler, CommandError> {
        if !self.phase.is_active() {
            return Err(CommandError::BattleOver);
        }
        let battler = self
            .battler(actor)
            .ok_or(CommandError::UnknownBattler(actor))?;
        if battler.is_enemy() {
            return Err(CommandError::NotPlayerControlled(actor));
        }
        if battler.is_defeated() {
            return Err(CommandError::Defeated(actor));
        }
        if self.committed.contains(&actor) {
            return Err(CommandError::AlreadyCommitted(actor));
        }
        if !battler.is_ready() {
            return Err(CommandError::NotReady(actor));
        }
        Ok(battler)
    }
}
