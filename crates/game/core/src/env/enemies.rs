//! Enemy templates and reward tables.

use std::collections::HashMap;

use crate::state::{CombatStats, Resistances, WeaponProfile};

/// Oracle providing enemy templates by id.
///
/// Templates are static data: each battle instantiates fresh battlers from
/// them via [`crate::state::Battler::from_template`].
pub trait EnemyOracle {
    fn template(&self, id: &str) -> Option<&EnemyTemplate>;
}

impl EnemyOracle for HashMap<String, EnemyTemplate> {
    fn template(&self, id: &str) -> Option<&EnemyTemplate> {
        self.get(id)
    }
}

/// Static definition of an enemy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub id: String,
    pub name: String,
    pub max_hp: u32,
    pub stats: CombatStats,
    /// Basic attack variance/element; `None` uses the unarmed range.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack: Option<WeaponProfile>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resistances: Resistances,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rewards: RewardTable,
}

impl EnemyTemplate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        max_hp: u32,
        stats: CombatStats,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            max_hp,
            stats,
            attack: None,
            resistances: Resistances::default(),
            rewards: RewardTable::default(),
        }
    }

    pub fn with_attack(mut self, attack: WeaponProfile) -> Self {
        self.attack = Some(attack);
        self
    }

    pub fn with_resistances(mut self, resistances: Resistances) -> Self {
        self.resistances = resistances;
        self
    }

    pub fn with_rewards(mut self, rewards: RewardTable) -> Self {
        self.rewards = rewards;
        self
    }
}

/// What defeating an enemy is worth.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewardTable {
    pub xp: u32,
    pub credits: u32,
    pub drops: Vec<ItemDrop>,
}

/// A possible item drop.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDrop {
    pub item_id: String,
    /// Drop chance in percent.
    pub chance_pct: u32,
}

/// Aggregated spoils of a won battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rewards {
    pub xp: u32,
    pub credits: u32,
    pub items: Vec<String>,
}
