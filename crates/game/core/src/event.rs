//! Battle events consumed by renderers and other collaborators.
//!
//! The engine never drives presentation directly. Every observable change is
//! recorded as a [`BattleEvent`] in the order it happened; a renderer drains
//! them after each tick and decides when to reveal each one. Consumers that
//! prefer callbacks implement [`BattleObserver`] and call
//! [`BattleEvent::dispatch`].

use crate::action::{Action, ActionSeq};
use crate::env::Rewards;
use crate::state::{BattlerId, Element, StatKind, Status};

/// Why an action resolved as a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbortReason {
    /// The actor fell (or never existed) before its action resolved.
    ActorUnavailable,
    /// The target fell or never existed.
    TargetUnavailable,
    /// The skill costs more resonance than the pool holds.
    InsufficientResonance { required: u32, available: u32 },
    UnknownSkill(String),
    UnknownItem(String),
    /// The battle holds no more of this item.
    OutOfStock(String),
}

/// Where a non-attack effect came from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectSource {
    Skill(String),
    Item(String),
}

/// A secondary consequence of an elemental discharge.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SideEffect {
    Damage { target: BattlerId, amount: u32 },
    Status {
        target: BattlerId,
        status: Status,
        turns: u32,
    },
}

/// Everything observable that happens in a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// A battler's gauge filled.
    BattlerReady { battler: BattlerId },

    /// An action entered the queue.
    ActionQueued { seq: ActionSeq, action: Action },

    /// A basic attack (or damaging effect) resolved.
    AttackResolved {
        actor: BattlerId,
        target: BattlerId,
        hit: bool,
        damage: i32,
        crit: bool,
        element: Option<Element>,
    },

    /// A skill or item was used on a target.
    EffectUsed {
        actor: BattlerId,
        target: BattlerId,
        source: EffectSource,
    },

    /// A battler took the defend stance.
    Defended { actor: BattlerId },

    /// HP restored by a heal effect or regen.
    Healed { target: BattlerId, amount: u32 },

    BuffApplied {
        target: BattlerId,
        stat: StatKind,
        amount: i32,
        turns: u32,
    },

    StatusApplied {
        target: BattlerId,
        status: Status,
        duration: u32,
    },

    /// A damage- or heal-over-time status ticked during upkeep.
    StatusTicked {
        target: BattlerId,
        status: Status,
        amount: u32,
    },

    StatusExpired { target: BattlerId, status: Status },

    /// An enemy's stack counter for an element changed (0..=2).
    StackChanged {
        target: BattlerId,
        element: Element,
        stacks: u8,
    },

    ElementalDischarge {
        target: BattlerId,
        element: Element,
        side_effects: Vec<SideEffect>,
    },

    /// The actor's turn was consumed without acting (frozen).
    ActionSkipped { actor: BattlerId, status: Status },

    ActionAborted {
        actor: BattlerId,
        reason: AbortReason,
    },

    BattlerDefeated { battler: BattlerId },

    BattleEnded { victory: bool, rewards: Rewards },
}

/// Callback-style view of the event stream. Every method defaults to a no-op.
#[allow(unused_variables)]
pub trait BattleObserver {
    fn on_attack_resolved(
        &mut self,
        actor: BattlerId,
        target: BattlerId,
        hit: bool,
        damage: i32,
        crit: bool,
        element: Option<Element>,
    ) {
    }

    fn on_status_applied(&mut self, target: BattlerId, status: Status, duration: u32) {}

    fn on_elemental_discharge(
        &mut self,
        target: BattlerId,
        element: Element,
        side_effects: &[SideEffect],
    ) {
    }

    fn on_battler_ready(&mut self, battler: BattlerId) {}

    fn on_battler_defeated(&mut self, battler: BattlerId) {}

    fn on_battle_ended(&mut self, victory: bool, rewards: &Rewards) {}

    /// Receives every event, including those without a dedicated callback.
    fn on_event(&mut self, event: &BattleEvent) {}
}

impl BattleEvent {
    /// Forwards this event to the matching observer callback.
    pub fn dispatch(&self, observer: &mut dyn BattleObserver) {
        match self {
            BattleEvent::AttackResolved {
                actor,
                target,
                hit,
                damage,
                crit,
                element,
            } => observer.on_attack_resolved(*actor, *target, *hit, *damage, *crit, *element),
            BattleEvent::StatusApplied {
                target,
                status,
                duration,
            } => observer.on_status_applied(*target, *status, *duration),
            BattleEvent::ElementalDischarge {
                target,
                element,
                side_effects,
            } => observer.on_elemental_discharge(*target, *element, side_effects),
            BattleEvent::BattlerReady { battler } => observer.on_battler_ready(*battler),
            BattleEvent::BattlerDefeated { battler } => observer.on_battler_defeated(*battler),
            BattleEvent::BattleEnded { victory, rewards } => {
                observer.on_battle_ended(*victory, rewards)
            }
            _ => {}
        }
        observer.on_event(self);
    }
}
