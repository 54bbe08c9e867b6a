//! Skill and item definitions.
//!
//! Skills and items share one effect shape: a kind, a magnitude, an optional
//! element and an optional status rider. Skills additionally cost resonance;
//! items consume one unit of battle stock.

use std::collections::HashMap;

use crate::state::{Element, StatKind, Status};

/// Oracle providing skill definitions by id.
pub trait SkillOracle {
    fn skill(&self, id: &str) -> Option<&SkillDefinition>;
}

/// Oracle providing item definitions by id.
pub trait ItemOracle {
    fn item(&self, id: &str) -> Option<&ItemDefinition>;
}

impl SkillOracle for HashMap<String, SkillDefinition> {
    fn skill(&self, id: &str) -> Option<&SkillDefinition> {
        self.get(id)
    }
}

impl ItemOracle for HashMap<String, ItemDefinition> {
    fn item(&self, id: &str) -> Option<&ItemDefinition> {
        self.get(id)
    }
}

/// What an effect does to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EffectKind {
    /// Attack-like damage: `attack + value - defense`, then guard, element, crit.
    Damage,
    /// Restores `value` HP.
    Heal,
    /// Adds `value` to `buff_stat` for `duration` turns.
    Buff,
    /// No numeric effect; only the status rider (if any) applies.
    Utility,
}

/// A status applied alongside an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusRider {
    pub status: Status,
    pub turns: u32,
}

/// Shared effect payload of skills and items.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectSpec {
    pub kind: EffectKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub element: Option<Element>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub buff_stat: Option<StatKind>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<StatusRider>,
}

impl EffectSpec {
    pub fn damage(value: i32) -> Self {
        Self::of(EffectKind::Damage, value)
    }

    pub fn heal(value: i32) -> Self {
        Self::of(EffectKind::Heal, value)
    }

    pub fn buff(stat: StatKind, value: i32, duration: u32) -> Self {
        Self {
            buff_stat: Some(stat),
            duration,
            ..Self::of(EffectKind::Buff, value)
        }
    }

    pub fn utility() -> Self {
        Self::of(EffectKind::Utility, 0)
    }

    fn of(kind: EffectKind, value: i32) -> Self {
        Self {
            kind,
            value,
            element: None,
            buff_stat: None,
            duration: 0,
            status: None,
        }
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    pub fn with_status(mut self, status: Status, turns: u32) -> Self {
        self.status = Some(StatusRider { status, turns });
        self
    }
}

/// Static definition of a skill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub id: String,
    pub name: String,
    /// Resonance spent on use.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rp_cost: u32,
    pub effect: EffectSpec,
}

impl SkillDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rp_cost: u32,
        effect: EffectSpec,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rp_cost,
            effect,
        }
    }
}

/// Static definition of a consumable item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    pub effect: EffectSpec,
}

impl ItemDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, effect: EffectSpec) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            effect,
        }
    }
}
