//! Strike inputs, outcomes and the ordered damage pipeline.

use crate::config::BattleConfig;
use crate::state::Element;

use super::damage::{
    apply_crit, apply_elemental, apply_guard, apply_timed_guard, apply_vulnerability,
    base_damage, floor_damage,
};

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attack missed the target.
    Miss,
    /// Attack hit the target.
    Hit,
    /// Attack hit and rolled a critical.
    Critical,
}

impl AttackOutcome {
    pub fn is_hit(self) -> bool {
        !matches!(self, AttackOutcome::Miss)
    }

    pub fn is_critical(self) -> bool {
        matches!(self, AttackOutcome::Critical)
    }
}

/// Result of a resolved strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,
    /// Final damage (0 on a miss; negative heals the target).
    pub damage: i32,
    pub element: Option<Element>,
}

impl AttackResult {
    pub fn miss(element: Option<Element>) -> Self {
        Self {
            outcome: AttackOutcome::Miss,
            damage: 0,
            element,
        }
    }
}

/// Everything needed to compute the damage of a landed hit.
///
/// The engine gathers these from the attacker, the target and the rolls;
/// [`Strike::resolve`] is then a pure function of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strike {
    pub attack: i32,
    pub variance: i32,
    pub defense: i32,
    pub defending: bool,
    pub timed_guard: bool,
    pub element: Option<Element>,
    /// Target resistance to `element` (ignored without an element).
    pub resistance: i32,
    pub shocked: bool,
    pub critical: bool,
}

impl Strike {
    /// Applies the damage steps in rule order:
    /// base → guard → timed guard → floor → element (+shock) → crit.
    pub fn resolve(&self, config: &BattleConfig) -> AttackResult {
        let mut damage = base_damage(self.attack, self.variance, self.defense);
        damage = apply_guard(damage, self.defending);
        damage = apply_timed_guard(damage, self.timed_guard, config.timed_guard_reduction_pct);
        damage = floor_damage(damage);

        if self.element.is_some() {
            damage = apply_elemental(damage, self.resistance);
        }
        if self.shocked {
            damage = apply_vulnerability(damage, config.shock_vulnerability_pct);
        }

        damage = apply_crit(damage, self.critical, config.crit_multiplier_pct);

        AttackResult {
            outcome: if self.critical {
                AttackOutcome::Critical
            } else {
                AttackOutcome::Hit
            },
            damage,
            element: self.element,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strike(attack: i32) -> Strike {
        Strike {
            attack,
            variance: 0,
            defense: 0,
            defending: false,
            timed_guard: false,
            element: None,
            resistance: 0,
            shocked: false,
            critical: false,
        }
    }

    #[test]
    fn defending_target_takes_half() {
        let config = BattleConfig::default();
        let result = Strike {
            defending: true,
            ..strike(20)
        }
        .resolve(&config);

        assert_eq!(result.damage, 10);
        assert_eq!(result.outcome, AttackOutcome::Hit);
    }

    #[test]
    fn floor_applies_before_resistance() {
        let config = BattleConfig::default();
        let result = Strike {
            defense: 50,
            element: Some(Element::Ice),
            resistance: 100,
            ..strike(5)
        }
        .resolve(&config);

        assert_eq!(result.damage, 0);
    }

    #[test]
    fn resistance_ignored_for_non_elemental_hits() {
        let config = BattleConfig::default();
        let result = Strike {
            resistance: 100,
            ..strike(12)
        }
        .resolve(&config);

        assert_eq!(result.damage, 12);
    }

    #[test]
    fn crit_applies_last() {
        let config = BattleConfig::default();
        let result = Strike {
            element: Some(Element::Fire),
            resistance: 50,
            critical: true,
            ..strike(9)
        }
        .resolve(&config);

        // floor(9 * 0.5) = 4, then x2
        assert_eq!(result.damage, 8);
        assert!(result.outcome.is_critical());
    }
}
