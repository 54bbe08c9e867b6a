//! Battle phase and end-of-battle detection.

use tracing::{debug, info};

use crate::env::{RollPurpose, Rewards};
use crate::event::BattleEvent;
use crate::state::{BattlerId, Side};

use super::BattleContext;

/// Lifecycle of a battle. `Victory` and `Defeat` are latched: once reached
/// the battle never returns to `Active`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    #[default]
    Active,
    Victory,
    Defeat,
    /// The outcome has been acknowledged and the battle torn down.
    Finished,
}

impl BattlePhase {
    pub fn is_active(self) -> bool {
        matches!(self, BattlePhase::Active)
    }

    /// Victory or defeat reached but not yet acknowledged.
    pub fn is_decided(self) -> bool {
        matches!(self, BattlePhase::Victory | BattlePhase::Defeat)
    }
}

impl BattleContext {
    /// Checks both sides for elimination after an action completes.
    ///
    /// Victory wins when both sides fall during the same action.
    pub(super) fn check_end(&mut self) {
        if !self.phase.is_active() {
            return;
        }

        if self.living(Side::Enemy).is_empty() {
            let rewards = self.collect_rewards();
            info!(
                xp = rewards.xp,
                credits = rewards.credits,
                items = rewards.items.len(),
                "battle won"
            );
            self.phase = BattlePhase::Victory;
            self.rewards = Some(rewards.clone());
            self.emit(BattleEvent::BattleEnded {
                victory: true,
                rewards,
            });
        } else if self.living(Side::Party).is_empty() {
            info!("battle lost");
            self.phase = BattlePhase::Defeat;
            self.emit(BattleEvent::BattleEnded {
                victory: false,
                rewards: Rewards::default(),
            });
        }
    }

    /// Acknowledges a decided battle. Returns `false` while it is still active.
    pub fn finish(&mut self) -> bool {
        if !self.phase.is_decided() {
            return false;
        }
        debug!(phase = ?self.phase, "battle finished");
        self.phase = BattlePhase::Finished;
        true
    }

    /// Sums every enemy's reward table and rolls its drops.
    fn collect_rewards(&mut self) -> Rewards {
        let tables: Vec<(BattlerId, _)> = self
            .battlers
            .iter()
            .filter_map(|b| b.rewards().map(|table| (b.id(), table.clone())))
            .collect();

        let mut rewards = Rewards::default();
        for (enemy, table) in tables {
            rewards.xp = rewards.xp.saturating_add(table.xp);
            rewards.credits = rewards.credits.saturating_add(table.credits);
            for drop in table.drops {
                let roll = self.roll_d100(enemy, RollPurpose::RewardDrop);
                if roll <= drop.chance_pct {
                    rewards.items.push(drop.item_id);
                }
            }
        }
        rewards
    }
}
