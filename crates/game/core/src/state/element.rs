//! Elements, per-element tables and the enemy stack counter.
//!
//! Enemies accumulate stacks of an element when hit by it. The stack counter
//! is observable only in `0..DISCHARGE_THRESHOLD`; the hit that would reach
//! the threshold discharges instead and resets that element to zero.

use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Elemental affinity of an attack, skill or item effect.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumCount, EnumIter,
    EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Element {
    Fire,
    Ice,
    Lightning,
    Poison,
    Radiation,
}

/// One value per element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementTable<T> {
    pub fire: T,
    pub ice: T,
    pub lightning: T,
    pub poison: T,
    pub radiation: T,
}

impl<T: Copy> ElementTable<T> {
    /// Table holding the same value for every element.
    pub const fn splat(value: T) -> Self {
        Self {
            fire: value,
            ice: value,
            lightning: value,
            poison: value,
            radiation: value,
        }
    }

    pub fn get(&self, element: Element) -> T {
        match element {
            Element::Fire => self.fire,
            Element::Ice => self.ice,
            Element::Lightning => self.lightning,
            Element::Poison => self.poison,
            Element::Radiation => self.radiation,
        }
    }

    pub fn set(&mut self, element: Element, value: T) {
        *self.slot_mut(element) = value;
    }

    fn slot_mut(&mut self, element: Element) -> &mut T {
        match element {
            Element::Fire => &mut self.fire,
            Element::Ice => &mut self.ice,
            Element::Lightning => &mut self.lightning,
            Element::Poison => &mut self.poison,
            Element::Radiation => &mut self.radiation,
        }
    }
}

/// Elemental resistances in percent. 100 negates an element entirely;
/// values above 100 still floor the multiplier at zero.
pub type Resistances = ElementTable<i32>;

/// Result of registering an elemental hit against a stack counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackTransition {
    /// Counter was empty and the seeding roll failed.
    Resisted,
    /// Counter went from 0 to 1.
    Seeded,
    /// Counter was raised to the contained value (still below threshold).
    Raised(u8),
    /// Counter reached the threshold; it has been reset to 0.
    Discharged,
}

/// Per-element stack counters carried by an enemy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementStacks {
    counts: ElementTable<u8>,
}

impl ElementStacks {
    /// Stack count at which an element discharges.
    pub const DISCHARGE_THRESHOLD: u8 = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Current count for an element, always below [`Self::DISCHARGE_THRESHOLD`].
    pub fn get(&self, element: Element) -> u8 {
        self.counts.get(element)
    }

    /// Pure transition function: next counter value for a hit.
    ///
    /// `seeded` is only consulted when the counter is empty.
    pub fn transition(current: u8, seeded: bool) -> StackTransition {
        match current {
            0 if seeded => StackTransition::Seeded,
            0 => StackTransition::Resisted,
            n if n + 1 >= Self::DISCHARGE_THRESHOLD => StackTransition::Discharged,
            n => StackTransition::Raised(n + 1),
        }
    }

    /// Registers a hit of `element`. The seeding roll is only evaluated when
    /// the counter is empty.
    pub fn register_hit(
        &mut self,
        element: Element,
        seed_roll: impl FnOnce() -> bool,
    ) -> StackTransition {
        let current = self.get(element);
        let seeded = current > 0 || seed_roll();
        let transition = Self::transition(current, seeded);

        let next = match transition {
            StackTransition::Resisted => current,
            StackTransition::Seeded => 1,
            StackTransition::Raised(n) => n,
            StackTransition::Discharged => 0,
        };
        self.counts.set(element, next);
        transition
    }
}
