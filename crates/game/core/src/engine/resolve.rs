//! Action resolution pipeline.
//!
//! Every popped action runs through the same steps: validate the actor,
//! run turn upkeep (status ticks, freeze, duration countdown), dispatch on
//! the action kind, then complete. Failures inside resolution never
//! propagate as errors; they are recorded as [`BattleEvent::ActionAborted`]
//! and the queue moves on.

use tracing::{debug, trace, warn};

use crate::action::{Action, QueuedAction};
use crate::combat::{AttackResult, Strike, check_chance, check_hit};
use crate::env::{BattleEnv, EffectKind, EffectSpec, RollPurpose};
use crate::event::{AbortReason, BattleEvent, EffectSource};
use crate::state::{BattlerId, Element, Side, StatKind, StatModifier, Status};

use super::BattleContext;

/// What turn upkeep left the actor able to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Upkeep {
    Proceed,
    /// Turn consumed by a disabling status.
    Skipped,
    /// A damage-over-time tick defeated the actor.
    Fell,
}

impl BattleContext {
    pub(super) fn resolve(&mut self, queued: QueuedAction, env: &mut BattleEnv<'_>) {
        let QueuedAction { seq, action } = queued;
        let actor = action.actor();

        if !self.is_alive(actor) {
            self.abort(actor, AbortReason::ActorUnavailable);
        } else if self.run_upkeep(actor) == Upkeep::Proceed {
            if let Some(battler) = self.battler_mut(actor) {
                battler.set_last_action(action.clone());
            }
            match action {
                Action::Attack { target, .. } => self.resolve_attack(actor, target, env),
                Action::Defend { .. } => self.resolve_defend(actor),
                Action::Skill {
                    skill_id, target, ..
                } => self.resolve_skill(actor, &skill_id, target, env),
                Action::ItemUse {
                    item_id, target, ..
                } => self.resolve_item(actor, &item_id, target, env),
            }
        }

        self.complete_action(seq);
    }

    fn abort(&mut self, actor: BattlerId, reason: AbortReason) {
        warn!(%actor, ?reason, "action aborted");
        self.emit(BattleEvent::ActionAborted { actor, reason });
    }

    /// Start-of-turn bookkeeping for the acting battler.
    fn run_upkeep(&mut self, actor: BattlerId) -> Upkeep {
        let discharge = &self.config.discharge;
        let (burn, poison, radiation, regen) = (
            discharge.burn_tick_damage,
            discharge.poison_tick_damage,
            discharge.radiation_tick_damage,
            discharge.regen_tick_heal,
        );

        let Some(battler) = self.battler_mut(actor) else {
            return Upkeep::Fell;
        };
        // The defend stance lasts until the defender's next turn begins.
        battler.set_defending(false);
        let frozen = battler.has_status(Status::Freeze);
        let active: Vec<Status> = battler.statuses().iter().map(|e| e.kind).collect();

        for status in active {
            let amount = match status {
                Status::Burn => self.deal_damage(actor, burn),
                Status::Poison => self.deal_damage(actor, poison),
                Status::Irradiated => self.deal_damage(actor, radiation),
                Status::Regen => self.heal(actor, regen),
                Status::Freeze | Status::Shock => continue,
            };
            trace!(%actor, %status, amount, "status ticked");
            self.emit(BattleEvent::StatusTicked {
                target: actor,
                status,
                amount,
            });
            if !self.is_alive(actor) {
                return Upkeep::Fell;
            }
        }

        let expired = self
            .battler_mut(actor)
            .map(|b| b.tick_durations())
            .unwrap_or_default();
        for status in expired {
            self.emit(BattleEvent::StatusExpired {
                target: actor,
                status,
            });
        }

        if frozen {
            debug!(%actor, "turn skipped, frozen");
            self.emit(BattleEvent::ActionSkipped {
                actor,
                status: Status::Freeze,
            });
            return Upkeep::Skipped;
        }
        Upkeep::Proceed
    }

    fn resolve_attack(&mut self, actor: BattlerId, target: BattlerId, env: &mut BattleEnv<'_>) {
        if !self.is_alive(target) {
            self.abort(actor, AbortReason::TargetUnavailable);
            return;
        }
        let (Some(attacker), Some(defender)) = (self.battler(actor), self.battler(target)) else {
            return;
        };

        let attack = attacker.stat(StatKind::Attack);
        let accuracy = attacker.stat(StatKind::Accuracy);
        let crit_rate = attacker.stat(StatKind::CritRate);
        let side = attacker.side();
        let weapon = attacker.weapon().copied();
        let evasion = defender.stat(StatKind::Evasion);

        let element = weapon.and_then(|w| w.element);
        let hit_roll = self.roll_d100(actor, RollPurpose::Hit);
        if !check_hit(accuracy, evasion, hit_roll) {
            debug!(%actor, %target, hit_roll, "attack missed");
            self.emit(BattleEvent::AttackResolved {
                actor,
                target,
                hit: false,
                damage: 0,
                crit: false,
                element,
            });
            return;
        }

        let (min, max) = match weapon {
            Some(weapon) => (weapon.min, weapon.max),
            None => (self.config.unarmed_variance.min, self.config.unarmed_variance.max),
        };
        let variance = self.roll_range(actor, RollPurpose::Variance, min, max);
        let critical = check_chance(crit_rate, self.roll_d100(actor, RollPurpose::Crit));

        let result = self.land_strike(target, attack, variance, element, critical);
        self.emit(BattleEvent::AttackResolved {
            actor,
            target,
            hit: true,
            damage: result.damage,
            crit: critical,
            element,
        });
        self.apply_hp_delta(target, result.damage);

        if side == Side::Party {
            env.resonance_mut().credit(self.config.resonance_per_hit);
        }
        if let Some(element) = element {
            self.apply_stack(target, element);
        }
    }

    fn resolve_defend(&mut self, actor: BattlerId) {
        if let Some(battler) = self.battler_mut(actor) {
            battler.set_defending(true);
        }
        self.emit(BattleEvent::Defended { actor });
    }

    fn resolve_skill(
        &mut self,
        actor: BattlerId,
        skill_id: &str,
        target: BattlerId,
        env: &mut BattleEnv<'_>,
    ) {
        let Some(skill) = env.skills().skill(skill_id) else {
            self.abort(actor, AbortReason::UnknownSkill(skill_id.to_owned()));
            return;
        };
        if !self.is_alive(target) {
            self.abort(actor, AbortReason::TargetUnavailable);
            return;
        }

        let available = env.resonance().available();
        if !env.resonance_mut().spend(skill.rp_cost) {
            self.abort(
                actor,
                AbortReason::InsufficientResonance {
                    required: skill.rp_cost,
                    available,
                },
            );
            return;
        }

        debug!(%actor, %target, skill = skill_id, rp_cost = skill.rp_cost, "skill used");
        self.emit(BattleEvent::EffectUsed {
            actor,
            target,
            source: EffectSource::Skill(skill.id.clone()),
        });
        self.apply_effect(actor, target, &skill.effect);
    }

    fn resolve_item(
        &mut self,
        actor: BattlerId,
        item_id: &str,
        target: Option<BattlerId>,
        env: &BattleEnv<'_>,
    ) {
        let Some(item) = env.items().item(item_id) else {
            self.abort(actor, AbortReason::UnknownItem(item_id.to_owned()));
            return;
        };
        let target = target.unwrap_or(actor);
        if !self.is_alive(target) {
            self.abort(actor, AbortReason::TargetUnavailable);
            return;
        }
        if !self.take_item(item_id) {
            self.abort(actor, AbortReason::OutOfStock(item_id.to_owned()));
            return;
        }

        debug!(%actor, %target, item = item_id, "item used");
        self.emit(BattleEvent::EffectUsed {
            actor,
            target,
            source: EffectSource::Item(item.id.clone()),
        });
        self.apply_effect(actor, target, &item.effect);
    }

    /// Removes one unit of an item from the battle stock.
    fn take_item(&mut self, item_id: &str) -> bool {
        match self.inventory.get_mut(item_id) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Applies a skill or item effect, then its status rider.
    fn apply_effect(&mut self, actor: BattlerId, target: BattlerId, effect: &EffectSpec) {
        match effect.kind {
            EffectKind::Damage => {
                let Some(attacker) = self.battler(actor) else {
                    return;
                };
                let attack = attacker.stat(StatKind::Attack).saturating_add(effect.value);
                let crit_rate = attacker.stat(StatKind::CritRate);
                let critical = check_chance(crit_rate, self.roll_d100(actor, RollPurpose::Crit));

                let result = self.land_strike(target, attack, 0, effect.element, critical);
                self.emit(BattleEvent::AttackResolved {
                    actor,
                    target,
                    hit: true,
                    damage: result.damage,
                    crit: critical,
                    element: effect.element,
                });
                self.apply_hp_delta(target, result.damage);
                if let Some(element) = effect.element {
                    self.apply_stack(target, element);
                }
            }
            EffectKind::Heal => {
                let amount = self.heal(target, effect.value.max(0).unsigned_abs());
                self.emit(BattleEvent::Healed { target, amount });
            }
            EffectKind::Buff => {
                if let Some(stat) = effect.buff_stat
                    && let Some(battler) = self.battler_mut(target)
                {
                    battler.add_modifier(StatModifier {
                        stat,
                        amount: effect.value,
                        remaining_turns: effect.duration,
                    });
                    self.emit(BattleEvent::BuffApplied {
                        target,
                        stat,
                        amount: effect.value,
                        turns: effect.duration,
                    });
                }
            }
            EffectKind::Utility => {}
        }

        if let Some(rider) = effect.status {
            self.apply_status(target, rider.status, rider.turns);
        }
    }

    /// Computes a landed hit against `target`, consuming its guard flags.
    fn land_strike(
        &mut self,
        target: BattlerId,
        attack: i32,
        variance: i32,
        element: Option<Element>,
        critical: bool,
    ) -> AttackResult {
        let Some(defender) = self.battler_mut(target) else {
            return AttackResult::miss(element);
        };
        let strike = Strike {
            attack,
            variance,
            defense: defender.stat(StatKind::Defense),
            defending: defender.consume_defending(),
            timed_guard: defender.consume_timed_guard(),
            element,
            resistance: element.map_or(0, |e| defender.resistance(e)),
            shocked: defender.has_status(Status::Shock),
            critical,
        };
        strike.resolve(&self.config)
    }

    /// Positive values damage the target, negative values heal it.
    pub(super) fn apply_hp_delta(&mut self, target: BattlerId, delta: i32) {
        if delta >= 0 {
            self.deal_damage(target, delta.unsigned_abs());
        } else {
            self.heal(target, delta.unsigned_abs());
        }
    }

    /// Removes HP and records the defeat if it reaches zero. Returns HP lost.
    pub(super) fn deal_damage(&mut self, target: BattlerId, amount: u32) -> u32 {
        let Some(battler) = self.battler_mut(target) else {
            return 0;
        };
        let lost = battler.take_damage(amount);
        if lost > 0 && battler.is_defeated() {
            battler.mark_defeated();
            debug!(battler = %target, "battler defeated");
            self.emit(BattleEvent::BattlerDefeated { battler: target });
        }
        lost
    }

    /// Restores HP on a living battler. Returns HP gained.
    pub(super) fn heal(&mut self, target: BattlerId, amount: u32) -> u32 {
        match self.battler_mut(target) {
            Some(battler) if battler.is_alive() => battler.restore(amount),
            _ => 0,
        }
    }

    /// Applies a status to a living battler. Returns the resulting duration.
    pub(super) fn apply_status(
        &mut self,
        target: BattlerId,
        status: Status,
        turns: u32,
    ) -> Option<u32> {
        let battler = self.battler_mut(target).filter(|b| b.is_alive())?;
        let duration = battler.statuses_mut().add(status, turns)?;
        debug!(%target, %status, duration, "status applied");
        self.emit(BattleEvent::StatusApplied {
            target,
            status,
            duration,
        });
        Some(duration)
    }
}
