//! Status effect system for battlers.
//!
//! Status effects are temporary conditions that deal or restore HP each turn,
//! skip turns, or change how much damage a battler takes.
//!
//! # Turn-based Duration
//!
//! Durations count the afflicted battler's own turns. They are decremented
//! during that battler's upkeep, right before its action resolves.

use arrayvec::ArrayVec;
use strum::{Display, EnumIter, EnumString};

use crate::config::BattleConfig;

/// Active status effects on a battler.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { BattleConfig::MAX_STATUS_EFFECTS }>,
}

/// A single status effect with its remaining duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: Status,
    /// Owner turns left.
    pub remaining: u32,
}

/// Types of status effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// Fire damage over time.
    Burn,
    /// HP loss over time.
    Poison,
    /// Next turn is skipped.
    Freeze,
    /// Takes extra damage from every hit.
    Shock,
    /// HP recovery over time.
    Regen,
    /// Radiation damage over time.
    Irradiated,
}

impl StatusEffects {
    /// Creates an empty status effect set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Checks if a specific status effect is active.
    pub fn has(&self, kind: Status) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Remaining turns of a status effect, if active.
    pub fn remaining(&self, kind: Status) -> Option<u32> {
        self.effects
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| e.remaining)
    }

    /// Adds a status effect.
    ///
    /// If the effect already exists, extends to the longer duration. Returns
    /// the resulting duration, or `None` if the set is full or `turns` is 0.
    pub fn add(&mut self, kind: Status, turns: u32) -> Option<u32> {
        if turns == 0 {
            return None;
        }

        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == kind) {
            existing.remaining = existing.remaining.max(turns);
            return Some(existing.remaining);
        }

        if self.effects.is_full() {
            return None;
        }

        self.effects.push(StatusEffect {
            kind,
            remaining: turns,
        });
        Some(turns)
    }

    /// Removes a status effect immediately.
    pub fn remove(&mut self, kind: Status) {
        self.effects.retain(|e| e.kind != kind);
    }

    /// Counts down one owner turn and returns the effects that expired.
    pub fn tick_down(&mut self) -> ArrayVec<Status, { BattleConfig::MAX_STATUS_EFFECTS }> {
        let mut expired = ArrayVec::new();
        for effect in self.effects.iter_mut() {
            effect.remaining = effect.remaining.saturating_sub(1);
            if effect.remaining == 0 {
                expired.push(effect.kind);
            }
        }
        self.effects.retain(|e| e.remaining > 0);
        expired
    }

    /// Returns an iterator over all active effects.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    /// Returns true if no status effects are active.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
