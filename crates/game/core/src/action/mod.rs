//! Battler actions and the serialized action queue.
//!
//! An [`Action`] is immutable once enqueued. It refers to battlers by id, so
//! the queue never owns battler state and an action whose actor or target
//! fell in the meantime is detected (and discarded) when it is resolved.

mod queue;

pub use queue::{ActionQueue, ActionSeq, QueuedAction};

use crate::state::BattlerId;

/// A battler's chosen action.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Basic weapon attack.
    Attack { actor: BattlerId, target: BattlerId },
    /// Halve the next incoming hit.
    Defend { actor: BattlerId },
    /// Use a skill, spending resonance.
    Skill {
        actor: BattlerId,
        skill_id: String,
        target: BattlerId,
    },
    /// Use a consumable. Without a target the item applies to the actor.
    ItemUse {
        actor: BattlerId,
        item_id: String,
        target: Option<BattlerId>,
    },
}

impl Action {
    pub fn attack(actor: BattlerId, target: BattlerId) -> Self {
        Self::Attack { actor, target }
    }

    pub fn defend(actor: BattlerId) -> Self {
        Self::Defend { actor }
    }

    pub fn skill(actor: BattlerId, skill_id: impl Into<String>, target: BattlerId) -> Self {
        Self::Skill {
            actor,
            skill_id: skill_id.into(),
            target,
        }
    }

    pub fn item(actor: BattlerId, item_id: impl Into<String>, target: Option<BattlerId>) -> Self {
        Self::ItemUse {
            actor,
            item_id: item_id.into(),
            target,
        }
    }

    /// Battler performing the action.
    pub fn actor(&self) -> BattlerId {
        match self {
            Action::Attack { actor, .. }
            | Action::Defend { actor }
            | Action::Skill { actor, .. }
            | Action::ItemUse { actor, .. } => *actor,
        }
    }

    /// Battler the action is aimed at, if any. Self-targeted item use
    /// resolves to the actor.
    pub fn target(&self) -> Option<BattlerId> {
        match self {
            Action::Attack { target, .. } | Action::Skill { target, .. } => Some(*target),
            Action::ItemUse { actor, target, .. } => Some(target.unwrap_or(*actor)),
            Action::Defend { .. } => None,
        }
    }

    /// Same action aimed at a different target. Actions without a target are
    /// returned unchanged.
    pub fn retarget(&self, new_target: BattlerId) -> Self {
        match self.clone() {
            Action::Attack { actor, .. } => Action::Attack {
                actor,
                target: new_target,
            },
            Action::Skill {
                actor, skill_id, ..
            } => Action::Skill {
                actor,
                skill_id,
                target: new_target,
            },
            Action::ItemUse {
                actor,
                item_id,
                target: Some(_),
            } => Action::ItemUse {
                actor,
                item_id,
                target: Some(new_target),
            },
            other => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Attack { .. } => "attack",
            Action::Defend { .. } => "defend",
            Action::Skill { .. } => "skill",
            Action::ItemUse { .. } => "item",
        }
    }
}
