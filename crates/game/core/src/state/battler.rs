//! Battler entities: party characters and enemies.
//!
//! Both variants share one shape ([`Battler`]) and differ only in the
//! [`BattlerKind`] payload, which is matched on wherever behavior diverges.

use crate::action::Action;
use crate::env::{EnemyTemplate, RewardTable};

use super::element::{Element, ElementStacks, Resistances};
use super::gauge::AtbGauge;
use super::stats::{CombatStats, StatKind, StatModifier, StatModifiers};
use super::status::{Status, StatusEffects};

/// Index of a battler in the battle arena.
///
/// Ids are assigned when the battle is built and stay valid for the whole
/// battle: defeated battlers are marked, never removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattlerId(pub u32);

impl BattlerId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl core::fmt::Display for BattlerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which side of the battle a battler fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Party,
    Enemy,
}

/// Damage variance and element of a basic attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponProfile {
    pub min: i32,
    pub max: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub element: Option<Element>,
}

impl WeaponProfile {
    pub const fn new(min: i32, max: i32) -> Self {
        Self {
            min,
            max,
            element: None,
        }
    }

    pub const fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }
}

/// Character-only data.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterData {
    /// One-shot reflex guard armed by player input.
    pub timed_guard: bool,
}

/// Enemy-only data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyData {
    pub template_id: String,
    pub stacks: ElementStacks,
    pub rewards: RewardTable,
}

/// Closed set of battler variants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlerKind {
    Character(CharacterData),
    Enemy(EnemyData),
}

/// A participant in battle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Battler {
    id: BattlerId,
    name: String,
    kind: BattlerKind,
    hp: u32,
    max_hp: u32,
    stats: CombatStats,
    modifiers: StatModifiers,
    resistances: Resistances,
    weapon: Option<WeaponProfile>,
    defending: bool,
    statuses: StatusEffects,
    gauge: AtbGauge,
    last_action: Option<Action>,
}

impl Battler {
    /// Creates a party character at full HP.
    pub fn character(name: impl Into<String>, max_hp: u32, stats: CombatStats) -> Self {
        Self::with_kind(
            name.into(),
            BattlerKind::Character(CharacterData::default()),
            max_hp,
            stats,
        )
    }

    /// Instantiates a fresh enemy from its template.
    ///
    /// Every battle builds new instances so no HP, stacks or statuses carry
    /// over from a previous fight.
    pub fn from_template(template: &EnemyTemplate) -> Self {
        let mut enemy = Self::with_kind(
            template.name.clone(),
            BattlerKind::Enemy(EnemyData {
                template_id: template.id.clone(),
                stacks: ElementStacks::new(),
                rewards: template.rewards.clone(),
            }),
            template.max_hp,
            template.stats,
        );
        enemy.resistances = template.resistances;
        enemy.weapon = template.attack;
        enemy
    }

    fn with_kind(name: String, kind: BattlerKind, max_hp: u32, stats: CombatStats) -> Self {
        Self {
            id: BattlerId(0),
            name,
            kind,
            hp: max_hp,
            max_hp,
            stats,
            modifiers: StatModifiers::new(),
            resistances: Resistances::default(),
            weapon: None,
            defending: false,
            statuses: StatusEffects::empty(),
            gauge: AtbGauge::default(),
            last_action: None,
        }
    }

    /// Sets current HP (clamped to `max_hp`), e.g. to carry over damage
    /// from exploration.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self
    }

    pub fn with_weapon(mut self, weapon: WeaponProfile) -> Self {
        self.weapon = Some(weapon);
        self
    }

    pub fn with_resistances(mut self, resistances: Resistances) -> Self {
        self.resistances = resistances;
        self
    }

    pub(crate) fn assign(&mut self, id: BattlerId, gauge_max: f32) {
        self.id = id;
        self.gauge = AtbGauge::new(gauge_max);
    }

    // ===== identity =====

    pub fn id(&self) -> BattlerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &BattlerKind {
        &self.kind
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self.kind, BattlerKind::Enemy(_))
    }

    pub fn side(&self) -> Side {
        match self.kind {
            BattlerKind::Character(_) => Side::Party,
            BattlerKind::Enemy(_) => Side::Enemy,
        }
    }

    // ===== vitals =====

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// Removes up to `amount` HP. Returns the HP actually lost.
    pub(crate) fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        lost
    }

    /// Restores up to `amount` HP. Returns the HP actually gained.
    pub(crate) fn restore(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max_hp - self.hp);
        self.hp += gained;
        gained
    }

    // ===== stats =====

    pub fn base_stats(&self) -> &CombatStats {
        &self.stats
    }

    /// Stat total including in-battle modifiers.
    pub fn stat(&self, kind: StatKind) -> i32 {
        self.stats
            .get(kind)
            .saturating_add(self.modifiers.total(kind))
    }

    pub fn modifiers(&self) -> &StatModifiers {
        &self.modifiers
    }

    pub(crate) fn add_modifier(&mut self, modifier: StatModifier) {
        self.modifiers.add(modifier);
    }

    pub fn resistance(&self, element: Element) -> i32 {
        self.resistances.get(element)
    }

    pub fn weapon(&self) -> Option<&WeaponProfile> {
        self.weapon.as_ref()
    }

    // ===== guard =====

    pub fn is_defending(&self) -> bool {
        self.defending
    }

    pub(crate) fn set_defending(&mut self, defending: bool) {
        self.defending = defending;
    }

    /// Clears the defend flag, returning whether it was set.
    pub(crate) fn consume_defending(&mut self) -> bool {
        core::mem::take(&mut self.defending)
    }

    pub fn has_timed_guard(&self) -> bool {
        match &self.kind {
            BattlerKind::Character(data) => data.timed_guard,
            BattlerKind::Enemy(_) => false,
        }
    }

    pub(crate) fn arm_timed_guard(&mut self) -> bool {
        match &mut self.kind {
            BattlerKind::Character(data) => {
                data.timed_guard = true;
                true
            }
            BattlerKind::Enemy(_) => false,
        }
    }

    /// Clears the timed guard, returning whether it was armed.
    pub(crate) fn consume_timed_guard(&mut self) -> bool {
        match &mut self.kind {
            BattlerKind::Character(data) => core::mem::take(&mut data.timed_guard),
            BattlerKind::Enemy(_) => false,
        }
    }

    // ===== statuses and stacks =====

    pub fn statuses(&self) -> &StatusEffects {
        &self.statuses
    }

    pub(crate) fn statuses_mut(&mut self) -> &mut StatusEffects {
        &mut self.statuses
    }

    pub fn has_status(&self, status: Status) -> bool {
        self.statuses.has(status)
    }

    /// Element stack counters (enemies only).
    pub fn element_stacks(&self) -> Option<&ElementStacks> {
        match &self.kind {
            BattlerKind::Enemy(data) => Some(&data.stacks),
            BattlerKind::Character(_) => None,
        }
    }

    pub(crate) fn element_stacks_mut(&mut self) -> Option<&mut ElementStacks> {
        match &mut self.kind {
            BattlerKind::Enemy(data) => Some(&mut data.stacks),
            BattlerKind::Character(_) => None,
        }
    }

    /// Reward table (enemies only).
    pub fn rewards(&self) -> Option<&RewardTable> {
        match &self.kind {
            BattlerKind::Enemy(data) => Some(&data.rewards),
            BattlerKind::Character(_) => None,
        }
    }

    /// Counts down statuses and modifiers by one owner turn. Returns the
    /// statuses that expired.
    pub(crate) fn tick_durations(
        &mut self,
    ) -> arrayvec::ArrayVec<Status, { crate::config::BattleConfig::MAX_STATUS_EFFECTS }> {
        self.modifiers.tick_down();
        self.statuses.tick_down()
    }

    // ===== scheduling =====

    pub fn gauge(&self) -> &AtbGauge {
        &self.gauge
    }

    pub(crate) fn gauge_mut(&mut self) -> &mut AtbGauge {
        &mut self.gauge
    }

    pub fn is_ready(&self) -> bool {
        self.is_alive() && self.gauge.is_ready()
    }

    pub fn last_action(&self) -> Option<&Action> {
        self.last_action.as_ref()
    }

    pub(crate) fn set_last_action(&mut self, action: Action) {
        self.last_action = Some(action);
    }

    /// Clears transient combat flags once the battler is defeated.
    pub(crate) fn mark_defeated(&mut self) {
        self.hp = 0;
        self.defending = false;
        self.gauge.reset();
        self.consume_timed_guard();
    }
}
