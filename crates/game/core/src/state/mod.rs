//! Battle state types.
//!
//! Battlers live in a flat arena owned by the battle context and are
//! addressed by [`BattlerId`]. Everything in this module is plain data plus
//! invariant-preserving mutators; the rules that drive those mutators live in
//! [`crate::engine`].

mod battler;
mod element;
mod gauge;
mod stats;
mod status;

pub use battler::{
    Battler, BattlerId, BattlerKind, CharacterData, EnemyData, Side, WeaponProfile,
};
pub use element::{Element, ElementStacks, ElementTable, Resistances, StackTransition};
pub use gauge::AtbGauge;
pub use stats::{CombatStats, StatKind, StatModifier, StatModifiers};
pub use status::{Status, StatusEffect, StatusEffects};
