//! Hit chance and accuracy calculations.

/// Calculate hit chance based on accuracy vs evasion.
///
/// # Formula
///
/// ```text
/// hit_chance = max(0, accuracy - evasion)
/// ```
///
/// # Returns
///
/// Hit chance as percentage (values above 100 always hit).
pub fn calculate_hit_chance(accuracy: i32, evasion: i32) -> u32 {
    accuracy.saturating_sub(evasion).max(0) as u32
}

/// Check if an attack hits based on accuracy, evasion, and random roll.
///
/// # Arguments
///
/// * `accuracy` - Attacker's accuracy stat
/// * `evasion` - Defender's evasion stat
/// * `roll` - Random roll (1-100)
///
/// # Returns
///
/// `true` if attack hits, `false` if `roll > hit_chance`.
pub fn check_hit(accuracy: i32, evasion: i32, roll: u32) -> bool {
    roll <= calculate_hit_chance(accuracy, evasion)
}

/// Check a percentage chance (crit rate, stack seeding, drops) against a
/// 1-100 roll.
pub fn check_chance(chance_pct: i32, roll: u32) -> bool {
    chance_pct > 0 && roll <= chance_pct as u32
}
