#![allow(dead_code)]

use std::collections::HashMap;

use battle_core::{
    BattleConfig, BattleContext, BattleEnv, BattleEvent, Battler, BattlerId, CombatStats,
    EnemyTemplate, ItemDefinition, ResonanceMeter, RngOracle, SkillDefinition, VarianceRange,
    WeaponProfile,
};

/// RNG returning the same value for every roll.
///
/// `FixedRng(0)` rolls 1 on every d100 (always hits, always seeds stacks)
/// and picks the lower bound of every range.
#[derive(Clone, Copy, Debug)]
pub struct FixedRng(pub u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

/// Static content and the resonance pool lent to the battle each tick.
pub struct Content {
    pub skills: HashMap<String, SkillDefinition>,
    pub items: HashMap<String, ItemDefinition>,
    pub resonance: ResonanceMeter,
}

impl Content {
    pub fn new() -> Self {
        Self {
            skills: HashMap::new(),
            items: HashMap::new(),
            resonance: ResonanceMeter::full(100),
        }
    }

    pub fn with_skill(mut self, skill: SkillDefinition) -> Self {
        self.skills.insert(skill.id.clone(), skill);
        self
    }

    pub fn with_item(mut self, item: ItemDefinition) -> Self {
        self.items.insert(item.id.clone(), item);
        self
    }

    pub fn with_resonance(mut self, resonance: ResonanceMeter) -> Self {
        self.resonance = resonance;
        self
    }

    pub fn tick(&mut self, battle: &mut BattleContext, dt: f32) {
        let mut env = BattleEnv::new(&self.skills, &self.items, &mut self.resonance);
        battle.tick(&mut env, dt);
    }
}

/// Defaults with deterministic variance and a fixed 500ms enemy think delay.
pub fn config() -> BattleConfig {
    BattleConfig {
        unarmed_variance: VarianceRange::new(0, 0),
        ..BattleConfig::default()
    }
    .with_decision_delay_ms(500, 500)
}

pub fn stats(attack: i32, defense: i32, speed: i32) -> CombatStats {
    CombatStats {
        attack,
        defense,
        speed,
        accuracy: 100,
        evasion: 0,
        crit_rate: 0,
    }
}

pub fn hero(name: &str, attack: i32, speed: i32) -> Battler {
    Battler::character(name, 100, stats(attack, 0, speed))
}

pub fn foe(id: &str, max_hp: u32, attack: i32, speed: i32) -> EnemyTemplate {
    EnemyTemplate::new(id, id, max_hp, stats(attack, 0, speed))
        .with_attack(WeaponProfile::new(0, 0))
}

pub fn hp(battle: &BattleContext, id: BattlerId) -> u32 {
    battle.battler(id).map_or(0, Battler::hp)
}

pub fn count(events: &[BattleEvent], pred: impl Fn(&BattleEvent) -> bool) -> usize {
    events.iter().filter(|e| pred(e)).count()
}

/// Checks the invariants that must hold after every tick.
pub fn assert_invariants(battle: &BattleContext) {
    for battler in battle.battlers() {
        assert!(battler.hp() <= battler.max_hp(), "{} hp out of range", battler.id());
        let gauge = battler.gauge();
        assert!(
            (0.0..=gauge.max()).contains(&gauge.current()),
            "{} gauge out of range",
            battler.id()
        );
        if battler.is_defeated() {
            assert_eq!(gauge.current(), 0.0, "{} defeated but charging", battler.id());
        }
        if let Some(stacks) = battler.element_stacks() {
            for element in [
                battle_core::Element::Fire,
                battle_core::Element::Ice,
                battle_core::Element::Lightning,
                battle_core::Element::Poison,
                battle_core::Element::Radiation,
            ] {
                assert!(stacks.get(element) < 3, "{} stack overflow", battler.id());
            }
        }
    }
}
