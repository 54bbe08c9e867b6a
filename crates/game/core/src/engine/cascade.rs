//! Elemental stacks and discharges.
//!
//! Every elemental hit on a living enemy feeds its stack counter. The first
//! stack is seeded by a chance roll; later hits raise the counter
//! unconditionally. The hit that would reach the threshold discharges
//! instead: the counter resets and the element's side effect fires once.
//! Side-effect damage never feeds stacks, so discharges cannot chain.

use tracing::debug;

use crate::combat::check_chance;
use crate::env::RollPurpose;
use crate::event::{BattleEvent, SideEffect};
use crate::state::{BattlerId, Element, Side, StackTransition, Status};

use super::BattleContext;

impl BattleContext {
    /// Registers an elemental hit on `target`.
    pub(super) fn apply_stack(&mut self, target: BattlerId, element: Element) {
        let Some(current) = self
            .battler(target)
            .filter(|b| b.is_alive())
            .and_then(|b| b.element_stacks())
            .map(|stacks| stacks.get(element))
        else {
            return;
        };

        // Only the first stack is a gamble.
        let seeded = current > 0 || {
            let chance = self.config.stack_chance_pct.get(element);
            let roll = self.roll_d100(target, RollPurpose::StackSeed);
            check_chance(i32::try_from(chance).unwrap_or(i32::MAX), roll)
        };

        let Some(stacks) = self
            .battler_mut(target)
            .and_then(|b| b.element_stacks_mut())
        else {
            return;
        };
        let transition = stacks.register_hit(element, || seeded);

        let stacks = match transition {
            StackTransition::Resisted => return,
            StackTransition::Seeded => 1,
            StackTransition::Raised(n) => n,
            StackTransition::Discharged => 0,
        };
        debug!(%target, %element, stacks, "stack changed");
        self.emit(BattleEvent::StackChanged {
            target,
            element,
            stacks,
        });

        if transition == StackTransition::Discharged {
            self.discharge(target, element);
        }
    }

    /// Fires the side effect of a full stack.
    ///
    /// The discharge event is recorded ahead of the consequences it causes
    /// (status applications, defeats).
    fn discharge(&mut self, target: BattlerId, element: Element) {
        let params = self.config.discharge.clone();
        let slot = self.events.len();
        let mut side_effects = Vec::new();

        match element {
            Element::Fire => {
                let splashed: Vec<BattlerId> = self
                    .living(Side::Enemy)
                    .into_iter()
                    .filter(|&id| id != target)
                    .collect();
                for other in splashed {
                    let amount = self.deal_damage(other, params.fire_splash_damage);
                    side_effects.push(SideEffect::Damage {
                        target: other,
                        amount,
                    });
                }
            }
            Element::Ice => {
                self.discharge_status(
                    target,
                    Status::Freeze,
                    params.freeze_turns,
                    &mut side_effects,
                );
            }
            Element::Lightning => {
                let amount = self.deal_damage(target, params.lightning_self_damage);
                side_effects.push(SideEffect::Damage { target, amount });
                self.discharge_status(
                    target,
                    Status::Shock,
                    params.shock_turns,
                    &mut side_effects,
                );
            }
            Element::Poison => {
                self.discharge_status(
                    target,
                    Status::Poison,
                    params.poison_turns,
                    &mut side_effects,
                );
            }
            Element::Radiation => {
                let amount = self.deal_damage(target, params.radiation_damage);
                side_effects.push(SideEffect::Damage { target, amount });

                let exposed: Vec<BattlerId> = self
                    .battlers
                    .iter()
                    .filter(|b| b.is_alive() && b.id() != target)
                    .map(|b| b.id())
                    .collect();
                let chance = i32::try_from(params.radiation_spread_pct).unwrap_or(i32::MAX);
                for other in exposed {
                    let roll = self.roll_d100(other, RollPurpose::RadiationSpread);
                    if check_chance(chance, roll) {
                        self.discharge_status(
                            other,
                            Status::Irradiated,
                            params.radiation_turns,
                            &mut side_effects,
                        );
                    }
                }
            }
        }

        debug!(%target, %element, effects = side_effects.len(), "elemental discharge");
        self.events.insert(
            slot,
            BattleEvent::ElementalDischarge {
                target,
                element,
                side_effects,
            },
        );
    }

    fn discharge_status(
        &mut self,
        target: BattlerId,
        status: Status,
        turns: u32,
        side_effects: &mut Vec<SideEffect>,
    ) {
        if let Some(turns) = self.apply_status(target, status, turns) {
            side_effects.push(SideEffect::Status {
                target,
                status,
                turns,
            });
        }
    }
}
