//! Skill, item, status and discharge resolution.

mod common;

use battle_core::{
    AbortReason, Action, BattleContext, BattleEvent, BattlerId, EffectSource, EffectSpec, Element,
    ItemDefinition, ResonanceMeter, ResonancePool, SideEffect, SkillDefinition, StatKind, Status,
    WeaponProfile,
};
use common::{Content, FixedRng, config, count, foe, hero, hp};

const HERO: BattlerId = BattlerId(0);
const FOE: BattlerId = BattlerId(1);

/// Fills the hero's gauge, submits `action` and resolves it.
fn act(content: &mut Content, battle: &mut BattleContext, action: Action) {
    content.tick(battle, 1.0);
    battle.submit(action).unwrap();
    content.tick(battle, 0.0);
}

fn duel(enemy_speed: i32) -> BattleContext {
    BattleContext::builder(config())
        .party_member(hero("Hero", 10, 100))
        .enemy(&foe("golem", 200, 5, enemy_speed))
        .rng(FixedRng(0))
        .build()
        .unwrap()
}

#[test]
fn skill_spends_resonance_and_deals_scaled_damage() {
    let mut content = Content::new()
        .with_skill(SkillDefinition::new("smite", "Smite", 20, EffectSpec::damage(15)))
        .with_resonance(ResonanceMeter::new(30, 100));
    let mut battle = duel(0);

    act(&mut content, &mut battle, Action::skill(HERO, "smite", FOE));

    // attack 10 + 15, no variance, no defense
    assert_eq!(hp(&battle, FOE), 175);
    assert_eq!(content.resonance.available(), 10);
    assert!(battle.events().contains(&BattleEvent::EffectUsed {
        actor: HERO,
        target: FOE,
        source: EffectSource::Skill("smite".into()),
    }));
}

#[test]
fn insufficient_resonance_aborts_before_any_change() {
    let mut content = Content::new()
        .with_skill(SkillDefinition::new("nova", "Nova", 50, EffectSpec::damage(40)))
        .with_resonance(ResonanceMeter::new(30, 100));
    let mut battle = duel(0);

    act(&mut content, &mut battle, Action::skill(HERO, "nova", FOE));

    assert_eq!(hp(&battle, FOE), 200);
    assert_eq!(content.resonance.available(), 30);
    assert!(battle.events().contains(&BattleEvent::ActionAborted {
        actor: HERO,
        reason: AbortReason::InsufficientResonance {
            required: 50,
            available: 30,
        },
    }));
    // The turn is still consumed.
    assert!(!battle.action_in_progress());
    assert!(!battle.battler(HERO).unwrap().is_ready());
}

#[test]
fn unknown_skill_is_a_no_op() {
    let mut content = Content::new();
    let mut battle = duel(0);

    act(&mut content, &mut battle, Action::skill(HERO, "missing", FOE));

    assert!(battle.events().contains(&BattleEvent::ActionAborted {
        actor: HERO,
        reason: AbortReason::UnknownSkill("missing".into()),
    }));
    assert!(battle.submit(Action::defend(HERO)).is_err());
}

#[test]
fn basic_attacks_credit_resonance() {
    let mut content = Content::new().with_resonance(ResonanceMeter::new(0, 100));
    let mut battle = duel(0);

    act(&mut content, &mut battle, Action::attack(HERO, FOE));
    act(&mut content, &mut battle, Action::attack(HERO, FOE));

    assert_eq!(content.resonance.available(), 10);
}

#[test]
fn items_consume_stock_and_default_to_the_user() {
    let mut content = Content::new().with_item(ItemDefinition::new(
        "potion",
        "Potion",
        EffectSpec::heal(30),
    ));
    let mut battle = BattleContext::builder(config())
        .party_member(hero("Hero", 10, 100).with_hp(50))
        .enemy(&foe("golem", 200, 5, 0))
        .item("potion", 1)
        .rng(FixedRng(0))
        .build()
        .unwrap();

    act(&mut content, &mut battle, Action::item(HERO, "potion", None));
    assert_eq!(hp(&battle, HERO), 80);
    assert_eq!(battle.item_stock("potion"), 0);
    assert!(battle.events().contains(&BattleEvent::Healed {
        target: HERO,
        amount: 30,
    }));

    act(&mut content, &mut battle, Action::item(HERO, "potion", None));
    assert_eq!(hp(&battle, HERO), 80);
    assert!(battle.events().contains(&BattleEvent::ActionAborted {
        actor: HERO,
        reason: AbortReason::OutOfStock("potion".into()),
    }));
}

#[test]
fn buffs_raise_stats_for_a_number_of_turns() {
    let mut content = Content::new().with_skill(SkillDefinition::new(
        "focus",
        "Focus",
        0,
        EffectSpec::buff(StatKind::Attack, 5, 2),
    ));
    let mut battle = duel(0);

    act(&mut content, &mut battle, Action::skill(HERO, "focus", HERO));
    assert_eq!(battle.battler(HERO).unwrap().stat(StatKind::Attack), 15);

    // The modifier counts down at the start of each of the hero's turns.
    act(&mut content, &mut battle, Action::attack(HERO, FOE));
    assert_eq!(hp(&battle, FOE), 185);
    act(&mut content, &mut battle, Action::attack(HERO, FOE));
    assert_eq!(hp(&battle, FOE), 175);
    assert_eq!(battle.battler(HERO).unwrap().stat(StatKind::Attack), 10);
}

#[test]
fn frozen_battlers_lose_their_next_turn() {
    let mut content = Content::new().with_skill(SkillDefinition::new(
        "frost_seal",
        "Frost Seal",
        0,
        EffectSpec::utility().with_status(Status::Freeze, 1),
    ));
    let mut battle = duel(50);

    act(&mut content, &mut battle, Action::skill(HERO, "frost_seal", FOE));
    assert!(battle.battler(FOE).unwrap().has_status(Status::Freeze));
    assert!(battle.events().contains(&BattleEvent::StatusApplied {
        target: FOE,
        status: Status::Freeze,
        duration: 1,
    }));

    // Golem is ready at 2.0s and decides 500ms later.
    content.tick(&mut battle, 1.0);
    content.tick(&mut battle, 0.5);

    assert_eq!(hp(&battle, HERO), 100);
    assert!(!battle.battler(FOE).unwrap().has_status(Status::Freeze));
    let events = battle.events();
    assert!(events.contains(&BattleEvent::ActionSkipped {
        actor: FOE,
        status: Status::Freeze,
    }));
    assert!(events.contains(&BattleEvent::StatusExpired {
        target: FOE,
        status: Status::Freeze,
    }));
}

#[test]
fn damage_over_time_ticks_in_upkeep() {
    let mut content = Content::new().with_skill(SkillDefinition::new(
        "ignite",
        "Ignite",
        0,
        EffectSpec::utility().with_status(Status::Burn, 2),
    ));
    let mut battle = duel(0);

    act(&mut content, &mut battle, Action::skill(HERO, "ignite", HERO));
    assert_eq!(hp(&battle, HERO), 100);

    act(&mut content, &mut battle, Action::defend(HERO));
    act(&mut content, &mut battle, Action::defend(HERO));
    act(&mut content, &mut battle, Action::defend(HERO));

    let burn = battle.config().discharge.burn_tick_damage;
    assert_eq!(hp(&battle, HERO), 100 - 2 * burn);
    let ticks = count(battle.events(), |e| {
        matches!(e, BattleEvent::StatusTicked { status: Status::Burn, .. })
    });
    assert_eq!(ticks, 2);
}

#[test]
fn lightning_discharge_shocks_the_target() {
    let mut content = Content::new();
    let mut battle = BattleContext::builder(config())
        .party_member(
            hero("Hero", 10, 100)
                .with_weapon(WeaponProfile::new(0, 0).with_element(Element::Lightning)),
        )
        .enemy(&foe("golem", 200, 5, 0))
        .rng(FixedRng(0))
        .build()
        .unwrap();

    for _ in 0..3 {
        act(&mut content, &mut battle, Action::attack(HERO, FOE));
    }

    let self_damage = battle.config().discharge.lightning_self_damage;
    assert_eq!(hp(&battle, FOE), 200 - 30 - self_damage);
    assert!(battle.battler(FOE).unwrap().has_status(Status::Shock));

    // Shocked targets take extra damage: 10 * 125% = 12.
    act(&mut content, &mut battle, Action::attack(HERO, FOE));
    assert_eq!(hp(&battle, FOE), 200 - 30 - self_damage - 12);
}

/// A hero whose weapon carries `element`, facing a golem that never acts.
fn elemental_duel(element: Element) -> BattleContext {
    BattleContext::builder(config())
        .party_member(
            hero("Hero", 10, 100).with_weapon(WeaponProfile::new(0, 0).with_element(element)),
        )
        .enemy(&foe("golem", 200, 5, 0))
        .rng(FixedRng(0))
        .build()
        .unwrap()
}

#[test]
fn ice_discharge_freezes_the_target() {
    let mut content = Content::new();
    let mut battle = elemental_duel(Element::Ice);

    for _ in 0..3 {
        act(&mut content, &mut battle, Action::attack(HERO, FOE));
    }

    let golem = battle.battler(FOE).unwrap();
    let freeze_turns = battle.config().discharge.freeze_turns;
    assert_eq!(golem.statuses().remaining(Status::Freeze), Some(freeze_turns));
    assert_eq!(golem.element_stacks().unwrap().get(Element::Ice), 0);
    assert_eq!(hp(&battle, FOE), 170);

    let discharges = count(battle.events(), |e| {
        matches!(e, BattleEvent::ElementalDischarge { element: Element::Ice, .. })
    });
    assert_eq!(discharges, 1);
    assert!(battle.events().contains(&BattleEvent::StatusApplied {
        target: FOE,
        status: Status::Freeze,
        duration: freeze_turns,
    }));
}

#[test]
fn poison_discharge_applies_long_poison() {
    let mut content = Content::new();
    let mut battle = elemental_duel(Element::Poison);

    for _ in 0..3 {
        act(&mut content, &mut battle, Action::attack(HERO, FOE));
    }

    let golem = battle.battler(FOE).unwrap();
    let poison_turns = battle.config().discharge.poison_turns;
    assert_eq!(golem.statuses().remaining(Status::Poison), Some(poison_turns));
    assert_eq!(golem.element_stacks().unwrap().get(Element::Poison), 0);

    let discharges = count(battle.events(), |e| {
        matches!(e, BattleEvent::ElementalDischarge { element: Element::Poison, .. })
    });
    assert_eq!(discharges, 1);
}

#[test]
fn buffs_on_a_maxed_stat_saturate() {
    let mut content = Content::new().with_skill(SkillDefinition::new(
        "focus",
        "Focus",
        0,
        EffectSpec::buff(StatKind::Attack, 100, 3),
    ));
    let mut battle = BattleContext::builder(config())
        .party_member(hero("Hero", i32::MAX - 50, 100))
        .enemy(&foe("golem", 200, 5, 0))
        .rng(FixedRng(0))
        .build()
        .unwrap();

    act(&mut content, &mut battle, Action::skill(HERO, "focus", HERO));
    assert_eq!(battle.battler(HERO).unwrap().stat(StatKind::Attack), i32::MAX);

    act(&mut content, &mut battle, Action::attack(HERO, FOE));
    assert_eq!(hp(&battle, FOE), 0);
}

#[test]
fn radiation_discharge_spreads_to_every_side() {
    let mut content = Content::new();
    let mut battle = BattleContext::builder(config())
        .party_member(
            hero("Hero", 10, 100)
                .with_weapon(WeaponProfile::new(0, 0).with_element(Element::Radiation)),
        )
        .party_member(hero("Medic", 1, 0))
        .enemy(&foe("golem", 200, 5, 0))
        .enemy(&foe("drone", 50, 5, 0))
        .rng(FixedRng(0))
        .build()
        .unwrap();
    let (medic, golem, drone) = (BattlerId(1), BattlerId(2), BattlerId(3));

    for _ in 0..3 {
        act(&mut content, &mut battle, Action::attack(HERO, golem));
    }

    let turns = battle.config().discharge.radiation_turns;
    let discharge = battle.events().iter().find_map(|e| match e {
        BattleEvent::ElementalDischarge { side_effects, .. } => Some(side_effects.clone()),
        _ => None,
    });
    let expected: Vec<SideEffect> = [HERO, medic, drone]
        .into_iter()
        .map(|target| SideEffect::Status {
            target,
            status: Status::Irradiated,
            turns,
        })
        .collect();
    let side_effects = discharge.unwrap();
    assert_eq!(&side_effects[1..], expected.as_slice());
    assert!(battle.battler(medic).unwrap().has_status(Status::Irradiated));
    assert!(!battle.battler(golem).unwrap().has_status(Status::Irradiated));
}

#[test]
fn actions_against_fallen_targets_are_aborted() {
    let mut content = Content::new();
    let mut battle = BattleContext::builder(config())
        .party_member(hero("Hero", 50, 100))
        .party_member(hero("Squire", 50, 100))
        .enemy(&foe("imp", 20, 1, 0))
        .enemy(&foe("golem", 200, 1, 0))
        .rng(FixedRng(0))
        .build()
        .unwrap();
    let (squire, imp) = (BattlerId(1), BattlerId(2));

    content.tick(&mut battle, 1.0);
    battle.submit(Action::attack(HERO, imp)).unwrap();
    battle.submit(Action::attack(squire, imp)).unwrap();
    content.tick(&mut battle, 0.0);
    content.tick(&mut battle, 0.0);

    assert_eq!(hp(&battle, imp), 0);
    assert!(battle.events().contains(&BattleEvent::ActionAborted {
        actor: squire,
        reason: AbortReason::TargetUnavailable,
    }));
    // The aborted action still frees its actor.
    assert!(!battle.is_committed(squire));
}
