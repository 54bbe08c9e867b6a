//! Combat stat snapshots and in-battle modifiers.
//!
//! The snapshot is produced upstream (equipment, level, passives already
//! folded in) and never written by the battle. Skills and items layer
//! temporary additive [`StatModifier`]s on top of it.

use arrayvec::ArrayVec;
use strum::{Display, EnumIter, EnumString};

use crate::config::BattleConfig;

/// Identifies a single combat stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatKind {
    Attack,
    Defense,
    Speed,
    Accuracy,
    Evasion,
    CritRate,
}

/// Read-only combat stat totals for one battler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatStats {
    pub attack: i32,
    pub defense: i32,
    /// Gauge fill rate in points per second.
    pub speed: i32,
    pub accuracy: i32,
    pub evasion: i32,
    /// Critical hit chance in percent.
    pub crit_rate: i32,
}

impl CombatStats {
    pub fn get(&self, kind: StatKind) -> i32 {
        match kind {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
            StatKind::Accuracy => self.accuracy,
            StatKind::Evasion => self.evasion,
            StatKind::CritRate => self.crit_rate,
        }
    }
}

/// Temporary additive stat change with a turn countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifier {
    pub stat: StatKind,
    pub amount: i32,
    /// Owner turns left before the modifier expires.
    pub remaining_turns: u32,
}

/// Active modifiers on a battler.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifiers {
    modifiers: ArrayVec<StatModifier, { BattleConfig::MAX_STAT_MODIFIERS }>,
}

impl StatModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a modifier. When full, the modifier closest to expiry is replaced.
    pub fn add(&mut self, modifier: StatModifier) {
        if modifier.remaining_turns == 0 {
            return;
        }

        if self.modifiers.is_full() {
            if let Some(slot) = self
                .modifiers
                .iter_mut()
                .min_by_key(|existing| existing.remaining_turns)
            {
                *slot = modifier;
            }
            return;
        }

        self.modifiers.push(modifier);
    }

    /// Sum of every active modifier for a stat.
    pub fn total(&self, stat: StatKind) -> i32 {
        self.modifiers
            .iter()
            .filter(|m| m.stat == stat)
            .fold(0i32, |total, m| total.saturating_add(m.amount))
    }

    /// Counts down one owner turn and drops expired modifiers.
    pub fn tick_down(&mut self) {
        for modifier in self.modifiers.iter_mut() {
            modifier.remaining_turns = modifier.remaining_turns.saturating_sub(1);
        }
        self.modifiers.retain(|m| m.remaining_turns > 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatModifier> {
        self.modifiers.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}
