//! Combat resolution formulas.
//!
//! This module provides pure functions for resolving combat interactions.
//! Nothing here touches battle state; the engine feeds rolls and stats in
//! and applies the returned numbers.
//!
//! # Core Functions
//!
//! - `check_hit`: Accuracy vs evasion against a d100 roll
//! - `Strike::resolve`: Ordered damage pipeline (base, guard, element, crit)
//! - `apply_elemental`: Resistance multiplier

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{apply_elemental, base_damage, elemental_multiplier_pct};
pub use hit::{calculate_hit_chance, check_chance, check_hit};
pub use result::{AttackOutcome, AttackResult, Strike};
