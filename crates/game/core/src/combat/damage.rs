//! Damage calculation steps.
//!
//! Each step of the strike pipeline is a small pure function so the order
//! in [`super::result::Strike::resolve`] reads like the rules sheet.

/// Base damage before mitigation.
///
/// ```text
/// base = attack + variance - defense
/// ```
pub fn base_damage(attack: i32, variance: i32, defense: i32) -> i32 {
    attack.saturating_add(variance).saturating_sub(defense)
}

/// Halves damage when the target is defending.
pub fn apply_guard(damage: i32, defending: bool) -> i32 {
    if defending { damage / 2 } else { damage }
}

/// Applies the timed-guard reduction (percent) when armed.
pub fn apply_timed_guard(damage: i32, armed: bool, reduction_pct: u32) -> i32 {
    if !armed {
        return damage;
    }
    let keep = 100 - reduction_pct.min(100) as i32;
    scale_pct(damage, keep)
}

/// Minimum damage of a landed hit.
pub fn floor_damage(damage: i32) -> i32 {
    damage.max(1)
}

/// Elemental multiplier in percent.
///
/// ```text
/// mult = max(0, 100 - resistance)
/// ```
pub fn elemental_multiplier_pct(resistance: i32) -> i32 {
    100i32.saturating_sub(resistance).max(0)
}

/// Scales damage by the target's resistance, flooring the result.
pub fn apply_elemental(damage: i32, resistance: i32) -> i32 {
    scale_pct(damage, elemental_multiplier_pct(resistance))
}

/// Adds a flat percentage of extra damage (e.g. shock vulnerability).
pub fn apply_vulnerability(damage: i32, extra_pct: u32) -> i32 {
    scale_pct(damage, 100 + extra_pct as i32)
}

/// Multiplies damage by the crit multiplier (percent) on a critical hit.
pub fn apply_crit(damage: i32, critical: bool, multiplier_pct: u32) -> i32 {
    if critical {
        scale_pct(damage, multiplier_pct as i32)
    } else {
        damage
    }
}

/// `floor(damage * pct / 100)` without intermediate overflow.
fn scale_pct(damage: i32, pct: i32) -> i32 {
    let scaled = (damage as i64 * pct as i64).div_euclid(100);
    scaled.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_halves_damage() {
        assert_eq!(apply_guard(20, true), 10);
        assert_eq!(apply_guard(20, false), 20);
    }

    #[test]
    fn timed_guard_stacks_with_guard() {
        let guarded = apply_guard(40, true);
        assert_eq!(apply_timed_guard(guarded, true, 50), 10);
        assert_eq!(apply_timed_guard(guarded, false, 50), 20);
    }

    #[test]
    fn timed_guard_handles_extreme_damage() {
        assert_eq!(apply_timed_guard(i32::MAX, true, 50), i32::MAX / 2);
    }

    #[test]
    fn floor_keeps_hits_meaningful() {
        assert_eq!(floor_damage(base_damage(3, 0, 10)), 1);
    }

    #[test]
    fn resistance_scales_and_floors() {
        assert_eq!(apply_elemental(15, 50), 7);
        assert_eq!(apply_elemental(15, 0), 15);
        assert_eq!(apply_elemental(15, -50), 22);
        assert_eq!(apply_elemental(15, 100), 0);
        assert_eq!(apply_elemental(15, 250), 0);
    }

    #[test]
    fn crit_and_vulnerability_multiply() {
        assert_eq!(apply_crit(7, true, 150), 10);
        assert_eq!(apply_crit(7, false, 150), 7);
        assert_eq!(apply_vulnerability(8, 25), 10);
    }
}
